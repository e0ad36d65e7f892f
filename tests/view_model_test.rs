use catalog_view::catalog::{CatalogError, CatalogViewModel, FieldError, Mode};
use catalog_view::config::CatalogConfig;
use catalog_view::engine::{filter, merge, paginate, MergeOutcome};
use catalog_view::lifecycle::seed_products;
use catalog_view::model::{FilterCriteria, FilterField, FilterPolicy, Product, ProductId};
use chrono::NaiveDate;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 7, day).unwrap()
}

fn numbered(count: u64) -> Vec<Product> {
    (1..=count)
        .map(|i| Product::new(i, format!("Item {}", i), date(1)).with_quantity(i as u32))
        .collect()
}

/// Two products, filter on name "A": one row, one page.
#[test]
fn test_name_filter_scenario() {
    let products = vec![
        Product::new(1u64, "A", date(1)).with_quantity(10),
        Product::new(2u64, "B", date(1)).with_quantity(20),
    ];
    let mut vm = CatalogViewModel::new(products).unwrap();

    vm.update_draft(FilterField::Name, "A");
    assert_eq!(vm.visible_ids().len(), 2, "name is committed, not live");

    vm.apply_filter();

    assert_eq!(vm.visible_ids(), vec![ProductId(1)]);
    assert_eq!(vm.total_pages(), 1);
}

/// 25 products: pages of 10, 10 and 5; page 4 does not exist.
#[test]
fn test_pagination_scenario() {
    let mut vm = CatalogViewModel::new(numbered(25)).unwrap();
    assert_eq!(vm.total_pages(), 3);

    let mut sizes = Vec::new();
    for page in 1..=3 {
        assert!(vm.change_page(page));
        sizes.push(vm.current_items().len());
    }
    assert_eq!(sizes, vec![10, 10, 5]);

    assert!(!vm.change_page(4));
    assert_eq!(vm.current_page(), 3);
    assert!(!vm.change_page(0));
    assert_eq!(vm.current_page(), 3);
}

#[test]
fn test_pages_reconstruct_filtered_sequence() {
    let products = numbered(23);
    let criteria = FilterCriteria::default().with(FilterField::Name, "item");
    let filtered = filter(&products, &criteria);

    let mut rebuilt = Vec::new();
    for page in 1..=3 {
        let slice = paginate(&filtered, 10, page);
        assert!(slice.len() <= 10);
        rebuilt.extend(slice.iter().map(|p| p.id));
    }

    let expected: Vec<_> = filtered.iter().map(|p| p.id).collect();
    assert_eq!(rebuilt, expected);
}

/// Select all on 3 visible products, then unselect one: the flag follows the set.
#[test]
fn test_select_all_scenario() {
    let mut vm = CatalogViewModel::new(seed_products()).unwrap();

    vm.toggle_all();
    assert_eq!(
        vm.selected_ids(),
        vec![ProductId(1), ProductId(2), ProductId(3)]
    );
    assert!(vm.is_all_selected());

    assert!(!vm.toggle_one(ProductId(2)));
    assert_eq!(vm.selected_ids().len(), 2);
    assert!(!vm.is_all_selected());

    vm.toggle_one(ProductId(2));
    assert!(vm.is_all_selected());
}

#[test]
fn test_toggle_all_twice_restores_selection() {
    let mut vm = CatalogViewModel::new(seed_products()).unwrap();
    vm.toggle_all();
    let first = vm.selected_ids();

    vm.toggle_all();
    assert!(vm.selected_ids().is_empty());
    vm.toggle_all();

    assert_eq!(vm.selected_ids(), first);
}

#[test]
fn test_select_all_on_empty_view_is_off() {
    let mut vm = CatalogViewModel::new(seed_products()).unwrap();
    vm.apply_criteria(FilterCriteria::default().with(FilterField::Name, "nothing"));

    vm.toggle_all();

    assert!(vm.visible_ids().is_empty());
    assert!(!vm.is_all_selected());
    assert!(vm.selected_ids().is_empty());
}

#[test]
fn test_select_all_uses_filtered_not_current_page() {
    let mut vm = CatalogViewModel::new(numbered(15)).unwrap();

    vm.toggle_all();

    assert_eq!(vm.current_items().len(), 10);
    assert_eq!(vm.selected_ids().len(), 15);
}

#[test]
fn test_quantity_is_live_by_default() {
    let mut vm = CatalogViewModel::new(seed_products()).unwrap();

    vm.update_draft(FilterField::Quantity, "2");

    assert_eq!(vm.visible_ids(), vec![ProductId(2)]);
    assert!(vm.applied().is_empty());
}

#[test]
fn test_all_committed_policy_waits_for_apply() {
    let mut vm = CatalogViewModel::new(seed_products())
        .unwrap()
        .with_policy(FilterPolicy::all_committed());

    vm.update_draft(FilterField::Quantity, "2");
    assert_eq!(vm.visible_ids().len(), 3);

    vm.apply_filter();
    assert_eq!(vm.visible_ids(), vec![ProductId(2)]);
}

#[test]
fn test_policy_from_config() {
    let config = CatalogConfig {
        page_size: 2,
        live_filter_fields: vec![FilterField::Name],
        ..CatalogConfig::default()
    };
    let mut vm = CatalogViewModel::with_config(seed_products(), &config).unwrap();
    assert_eq!(vm.total_pages(), 2);

    vm.update_draft(FilterField::Name, "produto 3");
    vm.update_draft(FilterField::Quantity, "1");

    assert_eq!(vm.visible_ids(), vec![ProductId(3)]);
}

#[test]
fn test_date_filter_matches_iso_text() {
    let mut vm = CatalogViewModel::new(seed_products()).unwrap();

    vm.apply_criteria(FilterCriteria::default().with(FilterField::Date, "07-11"));

    assert_eq!(vm.visible_ids(), vec![ProductId(2)]);
}

#[test]
fn test_clear_filters_restores_everything() {
    let mut vm = CatalogViewModel::new(numbered(25)).unwrap();
    vm.apply_criteria(FilterCriteria::default().with(FilterField::Name, "item 2"));
    vm.update_draft(FilterField::Quantity, "2");

    vm.clear_filters();

    assert!(vm.draft().is_empty());
    assert!(vm.applied().is_empty());
    assert_eq!(vm.visible_ids().len(), 25);
    assert_eq!(vm.current_page(), 1);
}

#[test]
fn test_page_shortcuts() {
    let mut vm = CatalogViewModel::new(numbered(25)).unwrap();
    assert!(!vm.has_previous());
    assert!(!vm.previous_page());

    assert!(vm.last_page());
    assert_eq!(vm.current_page(), 3);
    assert!(!vm.has_next());
    assert!(!vm.next_page());

    assert!(vm.previous_page());
    assert_eq!(vm.current_page(), 2);
    assert!(vm.first_page());
    assert_eq!(vm.current_page(), 1);
}

#[test]
fn test_empty_collection() {
    let mut vm = CatalogViewModel::new(Vec::new()).unwrap();
    assert_eq!(vm.total_pages(), 0);
    assert!(vm.current_items().is_empty());
    assert!(!vm.change_page(1));
    assert_eq!(vm.current_page(), 1);
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let products = vec![
        Product::new(1u64, "A", date(1)),
        Product::new(1u64, "B", date(2)),
    ];
    let err = CatalogViewModel::new(products).unwrap_err();
    assert_eq!(err, CatalogError::DuplicateId(ProductId(1)));
}

#[test]
fn test_edit_flow_replaces_by_id() {
    let mut vm = CatalogViewModel::new(seed_products()).unwrap();

    vm.begin_edit(ProductId(1)).unwrap();
    let form = vm.edit_form_mut().unwrap();
    // Renaming is safe: the record is found by id, not by name.
    form.name = "Produto 2".to_string();
    form.quantity = "11".to_string();

    assert_eq!(vm.save_form().unwrap(), MergeOutcome::Replaced);
    assert_eq!(vm.mode(), &Mode::Viewing);

    let first = vm.get(ProductId(1)).unwrap();
    assert_eq!(first.name, "Produto 2");
    assert_eq!(first.quantity, 11);
    assert_eq!(vm.get(ProductId(2)).unwrap().quantity, 20);
}

#[test]
fn test_cancel_edit_discards_changes() {
    let mut vm = CatalogViewModel::new(seed_products()).unwrap();
    vm.begin_edit(ProductId(3)).unwrap();
    vm.edit_form_mut().unwrap().name = "Changed".to_string();

    vm.cancel_edit();

    assert!(!vm.is_editing());
    assert_eq!(vm.get(ProductId(3)).unwrap().name, "Produto 3");
}

#[test]
fn test_invalid_quantity_is_reported_per_field() {
    let mut vm = CatalogViewModel::new(seed_products()).unwrap();
    vm.begin_edit(ProductId(1)).unwrap();
    vm.edit_form_mut().unwrap().quantity = "12abc".to_string();

    match vm.save_form() {
        Err(CatalogError::InvalidFields(errors)) => {
            assert!(errors.contains(&FieldError::InvalidQuantity("12abc".to_string())));
        }
        other => panic!("expected field errors, got {:?}", other),
    }
    assert!(vm.is_editing());

    vm.edit_form_mut().unwrap().quantity = "12".to_string();
    assert!(vm.save_form().is_ok());
}

#[test]
fn test_save_unknown_id_leaves_collection_unchanged() {
    let mut vm = CatalogViewModel::new(seed_products()).unwrap();
    let before = vm.products().to_vec();

    let err = vm
        .save(Product::new(99u64, "Ghost", date(1)))
        .unwrap_err();

    assert_eq!(err, CatalogError::NotFound(ProductId(99)));
    assert_eq!(vm.products(), before.as_slice());
}

#[test]
fn test_merge_is_idempotent() {
    let products = seed_products();
    let updated = products[0].clone().with_quantity(99);

    let once = merge(&products, &updated);
    let twice = merge(&once, &updated);

    assert_eq!(once, twice);
    let changed = products.iter().zip(&once).filter(|(a, b)| a != b).count();
    assert_eq!(changed, 1);
}

#[test]
fn test_edit_after_filter_keeps_view_consistent() {
    let mut vm = CatalogViewModel::new(seed_products()).unwrap();
    vm.apply_criteria(FilterCriteria::default().with(FilterField::Name, "produto 1"));

    vm.begin_edit(ProductId(1)).unwrap();
    vm.edit_form_mut().unwrap().name = "Renamed".to_string();
    vm.save_form().unwrap();

    assert!(vm.visible_ids().is_empty());
    assert_eq!(vm.current_page(), 1);
}

#[test]
fn test_insert_and_delete() {
    let mut vm = CatalogViewModel::new(seed_products()).unwrap();

    vm.insert(Product::new(4u64, "Produto 4", date(13))).unwrap();
    assert_eq!(vm.products().len(), 4);
    assert_eq!(
        vm.insert(Product::new(4u64, "Again", date(13))).unwrap_err(),
        CatalogError::DuplicateId(ProductId(4))
    );

    vm.toggle_all();
    vm.begin_edit(ProductId(4)).unwrap();
    let removed = vm.delete(ProductId(4)).unwrap();

    assert_eq!(removed.name, "Produto 4");
    assert!(!vm.is_selected(ProductId(4)));
    assert!(vm.is_all_selected());
    assert!(!vm.is_editing());
}

#[test]
fn test_views_are_independent() {
    let mut home = CatalogViewModel::new(seed_products()).unwrap();
    let table = CatalogViewModel::new(seed_products()).unwrap();

    home.delete(ProductId(1)).unwrap();

    assert_eq!(home.products().len(), 2);
    assert_eq!(table.products().len(), 3);
}

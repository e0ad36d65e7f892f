//! Demo run of the catalog screens: filter, page, select and edit on the product
//! table, then submit a new product and show it in the list.

use catalog_view::config::CatalogConfig;
use catalog_view::lifecycle::{setup_tracing, CatalogApp};
use catalog_view::model::{FilterField, ProductId};
use catalog_view::navigation::Route;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => CatalogConfig::load_from(&path).map_err(|e| e.to_string())?,
        None => CatalogConfig::default(),
    };
    info!(?config, "Starting catalog demo");

    let mut app = CatalogApp::new(config).map_err(|e| e.to_string())?;
    app.navigator.navigate(Route::Products);

    let mut table = app.products_view().map_err(|e| e.to_string())?;

    let span = tracing::info_span!("filtering");
    async {
        table.update_draft(FilterField::Name, "produto");
        table.apply_filter();
        table.update_draft(FilterField::Quantity, "2");
        info!(
            visible = ?table.visible_ids(),
            page = table.current_page(),
            total_pages = table.total_pages(),
            "Filtered"
        );
        table.clear_filters();
    }
    .instrument(span)
    .await;

    table.toggle_all();
    info!(selected = ?table.selected_ids(), all = table.is_all_selected(), "Selected");

    let span = tracing::info_span!("editing");
    let saved = async {
        table.begin_edit(ProductId(2))?;
        if let Some(form) = table.edit_form_mut() {
            form.quantity = "25".to_string();
            form.notes = "Restocked".to_string();
        }
        table.save_form()
    }
    .instrument(span)
    .await;

    match saved {
        Ok(outcome) => info!(?outcome, "Edit saved"),
        Err(e) => error!(error = %e, "Edit failed"),
    }

    let mut form = app.product_form();
    form.name = "Produto 4".to_string();
    form.notes = "Novo".to_string();
    form.price = "400.00".to_string();
    form.quantity = "40".to_string();
    form.pick_photo("file:///tmp/produto4.jpg");

    let span = tracing::info_span!("submission");
    let submitted = app
        .submit_product(&mut form, &mut table)
        .instrument(span)
        .await;

    match submitted {
        Ok(submitted) => info!(
            id = %submitted.product.id,
            message = %submitted.receipt.message,
            size = table.products().len(),
            "Product added"
        ),
        Err(e) => error!(error = %e, form_error = ?form.last_error(), "Submission failed"),
    }

    let dark_mode = app.theme().toggle_theme();
    info!(dark_mode, background = app.theme().palette().background, "Theme");

    app.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}

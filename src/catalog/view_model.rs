//! # Catalog View Model
//!
//! [`CatalogViewModel`] owns one screen's state: the canonical collection, the draft
//! and applied filter criteria, the page cursor, the selection and the edit surface.
//! Every screen gets its own instance; nothing is shared between them.
//!
//! The filtered and paginated views are derived on demand from the canonical
//! collection, so they can never disagree with it.
//!
//! ## Lifecycle
//!
//! ```text
//! Viewing --begin_edit(id)--> Editing --save / save_form / cancel_edit--> Viewing
//! ```
//!
//! A failed [`save_form`](CatalogViewModel::save_form) validation keeps the surface
//! open so the user can fix the offending field.

use crate::catalog::{CatalogError, EditForm};
use crate::config::CatalogConfig;
use crate::engine::{filter, merge_into, total_pages, MergeOutcome, Pager, SelectionSet};
use crate::model::{
    FilterCriteria, FilterField, FilterPolicy, Product, ProductCollection, ProductId,
};
use tracing::{debug, info, warn};

/// The edit surface opened on one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub target: ProductId,
    pub form: EditForm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Viewing,
    Editing(EditSession),
}

#[derive(Debug, Clone)]
pub struct CatalogViewModel {
    products: ProductCollection,
    draft: FilterCriteria,
    applied: FilterCriteria,
    policy: FilterPolicy,
    pager: Pager,
    selection: SelectionSet,
    mode: Mode,
    /// The card whose menu is open, if any. At most one at a time.
    open_menu: Option<ProductId>,
}

impl CatalogViewModel {
    /// Creates a view model with the default configuration.
    ///
    /// # Errors
    /// [`CatalogError::DuplicateId`] if two products share an id.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Result<Self, CatalogError> {
        Self::with_config(products, &CatalogConfig::default())
    }

    /// Creates a view model using the page size and filter policy of `config`.
    pub fn with_config(
        products: impl IntoIterator<Item = Product>,
        config: &CatalogConfig,
    ) -> Result<Self, CatalogError> {
        let products =
            ProductCollection::from_products(products).map_err(CatalogError::DuplicateId)?;
        debug!(count = products.len(), page_size = config.page_size, "View model created");
        Ok(Self {
            products,
            draft: FilterCriteria::default(),
            applied: FilterCriteria::default(),
            policy: config.filter_policy(),
            pager: Pager::new(config.page_size),
            selection: SelectionSet::new(),
            mode: Mode::Viewing,
            open_menu: None,
        })
    }

    pub fn with_policy(mut self, policy: FilterPolicy) -> Self {
        self.policy = policy;
        self
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// The canonical collection, in insertion order.
    pub fn products(&self) -> &[Product] {
        self.products.as_slice()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.products.contains(id)
    }

    pub fn draft(&self) -> &FilterCriteria {
        &self.draft
    }

    pub fn applied(&self) -> &FilterCriteria {
        &self.applied
    }

    pub fn policy(&self) -> &FilterPolicy {
        &self.policy
    }

    /// Criteria in effect, combining draft and applied according to the policy.
    pub fn effective_criteria(&self) -> FilterCriteria {
        self.policy.effective(&self.draft, &self.applied)
    }

    /// Products matching the effective criteria, before pagination.
    pub fn filtered(&self) -> Vec<&Product> {
        filter(self.products.as_slice(), &self.effective_criteria())
    }

    /// Identifiers of the filtered products: the universe of "select all".
    pub fn visible_ids(&self) -> Vec<ProductId> {
        self.filtered().iter().map(|product| product.id).collect()
    }

    /// The rows of the current page.
    pub fn current_items(&self) -> Vec<&Product> {
        let filtered = self.filtered();
        self.pager.slice(&filtered).to_vec()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.pager.page_size())
    }

    pub fn current_page(&self) -> usize {
        self.pager.page()
    }

    pub fn page_size(&self) -> usize {
        self.pager.page_size()
    }

    pub fn has_previous(&self) -> bool {
        self.pager.has_previous()
    }

    pub fn has_next(&self) -> bool {
        self.pager.has_next(self.total_pages())
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Edits one draft field. Only live fields affect the list right away.
    pub fn update_draft(&mut self, field: FilterField, pattern: impl Into<String>) {
        self.draft.set(field, pattern);
        if self.policy.is_live(field) {
            self.pager.reset();
            debug!(%field, pattern = self.draft.get(field), "Live filter changed");
        }
    }

    /// Commits the draft criteria and goes back to page 1.
    pub fn apply_filter(&mut self) {
        self.applied = self.draft.clone();
        self.pager.reset();
        info!(
            criteria = ?self.applied,
            matches = self.filtered().len(),
            "Filter applied"
        );
    }

    /// Replaces the draft with `criteria` and commits it.
    pub fn apply_criteria(&mut self, criteria: FilterCriteria) {
        self.draft = criteria;
        self.apply_filter();
    }

    /// Empties both draft and applied criteria and goes back to page 1.
    pub fn clear_filters(&mut self) {
        self.draft = FilterCriteria::default();
        self.applied = FilterCriteria::default();
        self.pager.reset();
        info!("Filters cleared");
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// Moves to page `n`. No-op (returns `false`) outside `1..=total_pages`.
    pub fn change_page(&mut self, n: usize) -> bool {
        let total = self.total_pages();
        let moved = self.pager.change_page(n, total);
        if moved {
            debug!(page = n, total_pages = total, "Page changed");
        } else {
            debug!(page = n, total_pages = total, "Page change ignored");
        }
        moved
    }

    pub fn first_page(&mut self) -> bool {
        let total = self.total_pages();
        self.pager.first(total)
    }

    pub fn previous_page(&mut self) -> bool {
        let total = self.total_pages();
        self.pager.previous(total)
    }

    pub fn next_page(&mut self) -> bool {
        let total = self.total_pages();
        self.pager.next(total)
    }

    pub fn last_page(&mut self) -> bool {
        let total = self.total_pages();
        self.pager.last(total)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Returns whether `id` is selected after the toggle.
    pub fn toggle_one(&mut self, id: ProductId) -> bool {
        let selected = self.selection.toggle_one(id);
        debug!(%id, selected, "Selection toggled");
        selected
    }

    pub fn toggle_all(&mut self) {
        let visible = self.visible_ids();
        self.selection.toggle_all(&visible);
        debug!(selected = self.selection.len(), visible = visible.len(), "Select all toggled");
    }

    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected(&self.visible_ids())
    }

    pub fn is_selected(&self, id: ProductId) -> bool {
        self.selection.contains(id)
    }

    pub fn selected_ids(&self) -> Vec<ProductId> {
        self.selection.ids().collect()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    // =========================================================================
    // Card menu and edit surface
    // =========================================================================

    /// Opens or closes the menu on the card for `id`. Opening one card's menu closes
    /// any other. Returns whether the menu for `id` is open afterwards.
    pub fn toggle_menu(&mut self, id: ProductId) -> Result<bool, CatalogError> {
        if !self.products.contains(id) {
            return Err(CatalogError::NotFound(id));
        }
        self.open_menu = if self.open_menu == Some(id) {
            None
        } else {
            Some(id)
        };
        debug!(%id, open = self.open_menu.is_some(), "Card menu toggled");
        Ok(self.open_menu.is_some())
    }

    pub fn is_menu_open(&self, id: ProductId) -> bool {
        self.open_menu == Some(id)
    }

    pub fn open_menu(&self) -> Option<ProductId> {
        self.open_menu
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing(_))
    }

    /// Opens the edit surface on `id`, pre-filled from the product. Closes the menu.
    pub fn begin_edit(&mut self, id: ProductId) -> Result<(), CatalogError> {
        let product = self.products.get(id).ok_or(CatalogError::NotFound(id))?;
        let form = EditForm::from_product(product);
        self.mode = Mode::Editing(EditSession { target: id, form });
        self.open_menu = None;
        info!(%id, "Editing");
        Ok(())
    }

    pub fn edit_form(&self) -> Option<&EditForm> {
        match &self.mode {
            Mode::Editing(session) => Some(&session.form),
            Mode::Viewing => None,
        }
    }

    pub fn edit_form_mut(&mut self) -> Option<&mut EditForm> {
        match &mut self.mode {
            Mode::Editing(session) => Some(&mut session.form),
            Mode::Viewing => None,
        }
    }

    /// Closes the edit surface without saving.
    pub fn cancel_edit(&mut self) {
        if let Mode::Editing(session) = &self.mode {
            debug!(id = %session.target, "Edit cancelled");
        }
        self.mode = Mode::Viewing;
    }

    /// Replaces the product sharing `updated.id`. An edit surface open on that product
    /// is closed; one open on another product is left alone.
    ///
    /// # Errors
    /// [`CatalogError::NotFound`] if no product has that id; the collection is unchanged.
    pub fn save(&mut self, updated: Product) -> Result<MergeOutcome, CatalogError> {
        let id = updated.id;
        if matches!(&self.mode, Mode::Editing(session) if session.target == id) {
            self.mode = Mode::Viewing;
        }

        let outcome = merge_into(&mut self.products, updated);
        match outcome {
            MergeOutcome::Replaced => info!(%id, "Saved"),
            MergeOutcome::Unchanged => debug!(%id, "Saved without changes"),
            MergeOutcome::NotFound => {
                warn!(%id, "Save target not found");
                return Err(CatalogError::NotFound(id));
            }
        }
        self.refresh_page();
        Ok(outcome)
    }

    /// Validates the open edit form and saves it.
    ///
    /// # Errors
    /// - [`CatalogError::NotEditing`] if no edit surface is open
    /// - [`CatalogError::InvalidFields`] if validation fails; the surface stays open
    /// - [`CatalogError::NotFound`] if the product disappeared while being edited
    pub fn save_form(&mut self) -> Result<MergeOutcome, CatalogError> {
        let Mode::Editing(session) = &self.mode else {
            return Err(CatalogError::NotEditing);
        };
        let target = session.target;
        let Some(original) = self.products.get(target) else {
            self.mode = Mode::Viewing;
            return Err(CatalogError::NotFound(target));
        };

        let updated = session.form.apply_to(original).map_err(|errors| {
            warn!(id = %target, %errors, "Edit rejected");
            CatalogError::InvalidFields(errors)
        })?;
        self.save(updated)
    }

    // =========================================================================
    // Collection changes
    // =========================================================================

    /// Appends a product (e.g. one returned by the new-product form).
    pub fn insert(&mut self, product: Product) -> Result<(), CatalogError> {
        let id = product.id;
        self.products
            .insert(product)
            .map_err(CatalogError::DuplicateId)?;
        info!(%id, size = self.products.len(), "Inserted");
        Ok(())
    }

    /// Removes a product, dropping it from the selection and closing its menu and
    /// edit surface.
    pub fn delete(&mut self, id: ProductId) -> Result<Product, CatalogError> {
        let removed = self.products.remove(id).ok_or_else(|| {
            warn!(%id, "Delete target not found");
            CatalogError::NotFound(id)
        })?;
        self.selection.remove(id);
        if self.open_menu == Some(id) {
            self.open_menu = None;
        }
        if matches!(&self.mode, Mode::Editing(session) if session.target == id) {
            self.mode = Mode::Viewing;
        }
        self.refresh_page();
        info!(%id, size = self.products.len(), "Deleted");
        Ok(removed)
    }

    fn refresh_page(&mut self) {
        let total = self.total_pages();
        self.pager.clamp(total);
    }
}

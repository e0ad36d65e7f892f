//! # Catalog Screens' State
//!
//! The orchestration layer the screens call into.
//!
//! ## Structure
//!
//! - [`view_model`] - [`CatalogViewModel`]: filtering, pagination, selection, editing
//! - [`edit`] - [`EditForm`], the card's edit surface
//! - [`form`] - [`ProductForm`], the new-product form and its two-phase submit
//! - [`error`] - [`CatalogError`] and field-level [`FieldError`]s
//!
//! ## Usage
//!
//! ```rust
//! use catalog_view::catalog::CatalogViewModel;
//! use catalog_view::lifecycle::seed_products;
//! use catalog_view::model::{FilterField, ProductId};
//!
//! let mut vm = CatalogViewModel::new(seed_products()).unwrap();
//!
//! vm.update_draft(FilterField::Name, "produto 2");
//! vm.apply_filter();
//! assert_eq!(vm.visible_ids(), vec![ProductId(2)]);
//!
//! vm.begin_edit(ProductId(2)).unwrap();
//! vm.edit_form_mut().unwrap().quantity = "25".into();
//! vm.save_form().unwrap();
//! assert_eq!(vm.get(ProductId(2)).unwrap().quantity, 25);
//! ```

pub mod edit;
pub mod error;
pub mod form;
pub mod view_model;

pub use edit::{parse_quantity, EditForm};
pub use error::*;
pub use form::{PendingSubmission, ProductForm, SubmittedProduct, SUBMIT_FAILED_MESSAGE};
pub use view_model::{CatalogViewModel, EditSession, Mode};

//! # Catalog View
//!
//! > **State and behavior behind a small product-catalog front end.**
//!
//! The screens render; this crate decides what they show. It keeps a canonical list
//! of products and derives the filtered, paginated and selected views from it,
//! edits products in place, and submits new ones through an async collaborator.
//!
//! ## 🏗️ Design
//!
//! ### One view model per screen
//! Every screen owns a [`CatalogViewModel`](catalog::CatalogViewModel). The card grid
//! and the product table never share state, so editing on one screen cannot leak into
//! the other.
//!
//! ### Derived, never cached
//! Filtered rows, the current page and the "select all" flag are recomputed from the
//! canonical collection on every read. The only stored cursor is the page number,
//! and it is pulled back into range whenever the list shrinks.
//!
//! ### Submission as an actor
//! New products go through a [`SubmissionActor`](submission::SubmissionActor) running
//! in its own Tokio task behind a cloneable [`SubmissionClient`](submission::SubmissionClient).
//! The form only sees the [`ProductSubmitter`](submission::ProductSubmitter) trait, so
//! tests swap in [`MockSubmitter`](submission::mock::MockSubmitter).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! - **Key items**: [`Product`](model::Product), [`ProductCollection`](model::ProductCollection),
//!   [`FilterCriteria`](model::FilterCriteria), [`FilterPolicy`](model::FilterPolicy).
//!
//! ### 2. The Engines ([`engine`])
//! Pure functions for filtering, pagination, selection and merge.
//!
//! ### 3. The Orchestrator ([`catalog`])
//! - **Role**: Composes the engines into screen operations with explicit modes.
//! - **Key items**: [`CatalogViewModel`](catalog::CatalogViewModel),
//!   [`EditForm`](catalog::EditForm), [`ProductForm`](catalog::ProductForm).
//!
//! ### 4. The Collaborators ([`submission`], [`theme`], [`navigation`])
//! - **Role**: The submit call, the process-wide dark-mode flag and screen routing.
//!
//! ### 5. The Runtime ([`lifecycle`], [`config`])
//! - **Role**: Loads [`CatalogConfig`](config::CatalogConfig), starts the actor, hands
//!   out seeded view models and shuts everything down.
//! - **Key items**: [`CatalogApp`](lifecycle::CatalogApp), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Use a config file
//! RUST_LOG=debug cargo run -- catalog.toml
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod lifecycle;
pub mod model;
pub mod navigation;
pub mod submission;
pub mod theme;

//! Runtime orchestration and lifecycle management.
//!
//! - **App lifecycle**: starting the submission actor and shutting it down
//! - **Screen state**: seeding a fresh view model for each screen
//! - **Observability setup**: initializing tracing and logging
//!
//! # Main Components
//!
//! - [`CatalogApp`] - owns the configuration, the navigator and the submission actor
//! - [`seed_products`] - the products every screen starts with
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod app;
pub mod seed;
pub mod tracing;

pub use app::*;
pub use seed::*;
pub use tracing::*;

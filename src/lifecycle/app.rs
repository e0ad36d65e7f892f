use crate::catalog::{CatalogError, CatalogViewModel, ProductForm, SubmittedProduct};
use crate::config::{CatalogConfig, ConfigError};
use crate::lifecycle::seed_products;
use crate::model::IdSequence;
use crate::navigation::Navigator;
use crate::submission::{
    InMemoryBackend, ProductSubmitter, SubmissionActor, SubmissionClient, SubmitBackend,
};
use crate::theme::ThemeContext;
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, warn};

/// The application runtime: configuration, navigation and the submission actor.
///
/// `CatalogApp` is responsible for:
/// - **Lifecycle Management**: starting the submission actor and stopping it on shutdown
/// - **Screen State**: handing every screen its own seeded [`CatalogViewModel`]
/// - **Shared Context**: the process-wide [`ThemeContext`] and the [`Navigator`]
///
/// # Example
///
/// ```ignore
/// let app = CatalogApp::new(CatalogConfig::default())?;
///
/// let mut products = app.products_view()?;
/// let mut form = app.product_form();
/// form.name = "Lamp".into();
/// // ...
/// app.submit_product(&mut form, &mut products).await?;
///
/// app.shutdown().await?;
/// ```
pub struct CatalogApp {
    /// Client for the submission actor, with the configured timeout applied
    pub submission_client: SubmissionClient,

    pub navigator: Navigator,

    config: CatalogConfig,

    /// Identifier source shared by every form this app hands out
    ids: Arc<IdSequence>,

    /// Task handles for running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogApp {
    /// Starts the app with an [`InMemoryBackend`] receiving submissions.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: CatalogConfig) -> Result<Self, ConfigError> {
        Self::with_backend(config, InMemoryBackend::new())
    }

    /// Starts the app with `backend` receiving submissions.
    pub fn with_backend<B: SubmitBackend>(
        config: CatalogConfig,
        backend: B,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let (actor, client) = SubmissionActor::new(config.submit_buffer, backend);
        let handle = tokio::spawn(actor.run());
        let submission_client = client.with_timeout(config.submit_timeout());

        info!(
            page_size = config.page_size,
            submit_timeout_ms = config.submit_timeout_ms,
            "Catalog app started"
        );
        Ok(Self {
            submission_client,
            navigator: Navigator::default(),
            config,
            ids: Arc::new(IdSequence::new()),
            handles: vec![handle],
        })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn theme(&self) -> &'static ThemeContext {
        ThemeContext::global()
    }

    /// State for the card grid on the home screen.
    pub fn home_view(&self) -> Result<CatalogViewModel, CatalogError> {
        CatalogViewModel::with_config(seed_products(), &self.config)
    }

    /// State for the product table. Independent of [`home_view`](Self::home_view).
    pub fn products_view(&self) -> Result<CatalogViewModel, CatalogError> {
        CatalogViewModel::with_config(seed_products(), &self.config)
    }

    /// A new-product form whose identifiers never repeat within this app.
    pub fn product_form(&self) -> ProductForm {
        ProductForm::with_ids(Arc::clone(&self.ids))
    }

    /// Submits `form` and, on success, adds the new product to `view`.
    ///
    /// The identifier is checked against `view` before anything is sent, so a
    /// collision fails with [`CatalogError::DuplicateId`] and leaves the draft intact.
    pub async fn submit_product(
        &self,
        form: &mut ProductForm,
        view: &mut CatalogViewModel,
    ) -> Result<SubmittedProduct, CatalogError> {
        let pending = form.begin_submit(Utc::now())?;
        let id = pending.record().id;
        if view.contains(id) {
            warn!(%id, "Submit refused: id already in view");
            return Err(CatalogError::DuplicateId(id));
        }

        let outcome = self.submission_client.submit(pending.record().clone()).await;
        let submitted = form.complete_submit(pending, outcome)?;
        // `view` is exclusively borrowed since the check above, so the id is still free.
        view.insert(submitted.product.clone())?;
        Ok(submitted)
    }

    /// Gracefully shuts down the submission actor.
    ///
    /// Dropping the client closes the channel; the actor drains and exits.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if every actor shut down cleanly
    /// - `Err(String)` if an actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog app...");

        drop(self.submission_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Catalog app shutdown complete.");
        Ok(())
    }
}

//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. The module prefix is hidden (`with_target(false)`) to keep lines short;
//! the structured fields carry the context.
//!
//! ## Usage Examples
//!
//! ```bash
//! # State transitions: filters applied, saves, deletes, submissions
//! RUST_LOG=info cargo run
//!
//! # Also page moves, selection toggles and full submission records
//! RUST_LOG=debug cargo run
//!
//! # Only the submission layer
//! RUST_LOG=catalog_view::submission=debug cargo run
//! ```
//!
//! ## Sample Output
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Catalog app started page_size=10 submit_timeout_ms=10000
//! INFO Filter applied criteria=FilterCriteria { name: "produto 2", .. } matches=1
//! INFO Editing id=2
//! INFO Saved id=2
//! INFO Accepted id=1715949000000 message=Product Lamp saved
//! INFO Product submitted id=1715949000000 message=Product Lamp saved
//! ```
//!
//! **With `RUST_LOG=debug`** the submission record is logged once when the form
//! starts a submission:
//!
//! ```text
//! DEBUG Submission started record=SubmissionRecord { id: ProductId(1715949000000), name: "Lamp", .. }
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

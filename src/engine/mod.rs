//! # Collection Engines
//!
//! Pure, total functions over product sequences. None of them fail and none of them
//! touch the view model; the [`catalog`](crate::catalog) orchestrator composes them.
//!
//! - [`filter`] - case-insensitive substring match, AND across fields
//! - [`pagination`] - fixed-size, 1-indexed page slicing and the [`Pager`] cursor
//! - [`selection`] - the [`SelectionSet`] of selected product ids
//! - [`merge`] - whole-record replacement by id

pub mod filter;
pub mod merge;
pub mod pagination;
pub mod selection;

pub use filter::{filter, matches};
pub use merge::{merge, merge_into, MergeOutcome};
pub use pagination::{paginate, total_pages, Pager, DEFAULT_PAGE_SIZE};
pub use selection::SelectionSet;

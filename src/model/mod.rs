//! Pure data structures shared by every layer: the [`Product`] record, the
//! canonical [`ProductCollection`], and the filter criteria types.

pub mod collection;
pub mod criteria;
pub mod product;

pub use collection::*;
pub use criteria::*;
pub use product::*;

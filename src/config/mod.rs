//! Configuration layer: the serde-facing view record and file loading.
//!
//! The compiler only ever sees a parsed `ViewConfig`; turning files into one
//! lives in `load`.

pub mod load;
pub mod view;

pub use load::{load_view, parse_view, Format};
pub use view::{FilterFields, JobFilters, Scalar, ViewConfig};

//! View compiler: `ViewConfig` -> `Element` tree.
//!
//! - `columns`: column identifier registry
//! - `filters`: filter types and their field tables
//! - `mapping`: table-driven field transcription shared by all filters
//! - `view`: top-level element layout

pub mod columns;
pub mod filters;
pub mod mapping;
pub mod view;

pub use filters::FilterKind;
pub use mapping::{FieldDefault, FieldSpec};
pub use view::{compile, LIST_VIEW_TAG};

//! Compile list-view configurations into the job server's XML view format.
//!
//! The pipeline is:
//! - `config`: serde-facing view configuration (already parsed by a loader)
//! - `compile`: configuration -> `markup::Element` tree
//! - `render`: element tree -> XML text

pub mod compile;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod markup;
pub mod render;

pub use compile::compile;
pub use config::ViewConfig;
pub use error::ViewError;
pub use markup::Element;

pub type Result<T> = anyhow::Result<T>;

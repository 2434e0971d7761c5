use thiserror::Error;

/// Errors raised while compiling a single view.
///
/// Either one aborts the whole `compile` call; no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// The view configuration lacks a field that has no default.
    #[error("missing required view field: {0}")]
    MissingField(&'static str),

    /// A configured filter block lacks one of its required fields.
    #[error("missing required filter field: {0}")]
    RequiredField(String),
}

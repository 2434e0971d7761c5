//! Generic key -> tag transcription driven by a field table.
//!
//! Each filter type is just a different `&[FieldSpec]`; the applier never
//! knows which filter it is filling.

use crate::config::FilterFields;
use crate::error::ViewError;
use crate::markup::Element;

/// What to emit when a key is absent from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    /// No safe default: absence is an error.
    Required,
    Text(&'static str),
    Bool(bool),
}

/// One row of a field table: configuration key, output tag, default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub tag: &'static str,
    pub default: FieldDefault,
}

impl FieldSpec {
    pub const fn new(key: &'static str, tag: &'static str, default: FieldDefault) -> Self {
        Self { key, tag, default }
    }
}

/// Append one text child to `parent` per table row, in table order.
///
/// All rows are resolved before anything is appended, so a missing required
/// field leaves `parent` untouched.
pub fn apply(
    parent: &mut Element,
    data: &FilterFields,
    schema: &[FieldSpec],
) -> Result<(), ViewError> {
    let mut fields = Vec::with_capacity(schema.len());
    for spec in schema {
        let text = match (data.get(spec.key), spec.default) {
            (Some(value), _) => value.to_string(),
            (None, FieldDefault::Required) => {
                return Err(ViewError::RequiredField(spec.key.to_string()));
            }
            (None, FieldDefault::Text(s)) => s.to_string(),
            (None, FieldDefault::Bool(b)) => render_bool(b).to_string(),
        };
        fields.push(Element::new(spec.tag).with_text(text));
    }
    parent.children.extend(fields);
    Ok(())
}

pub fn render_bool(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

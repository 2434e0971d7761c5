//! Serialization of compiled element trees.

pub mod xml;

pub use xml::{render_xml, XML_DECLARATION};

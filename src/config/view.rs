//! View configuration as handed over by the loader.
//!
//! Shape (YAML shown, JSON is equivalent):
//!
//! ```yaml
//! name: my-view
//! description: optional text
//! filter-executors: false
//! filter-queue: false
//! job-name: [job-a, job-b]
//! job-filters:
//!   most-recent:
//!     max-to-include: 5
//!   job-status:
//!     failed: true
//! columns: [status, weather, job]
//! regex: '.*-release'
//! recurse: false
//! status-filter: true
//! ```
//!
//! Unknown keys are ignored. `view-type`, when given, should be `list`.
//! Filter blocks are classified into `FilterKind` while deserializing;
//! unrecognized filter types are dropped there.

use crate::compile::FilterKind;
use serde::de::{Deserializer, Error as _};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// A scalar configuration value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(true) => f.write_str("true"),
            Scalar::Bool(false) => f.write_str("false"),
            Scalar::Int(i) => write!(f, "{}", i),
            // Integral floats keep their decimal point: 5.0 renders as "5.0".
            Scalar::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{:.1}", x),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Str(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Str(v)
    }
}

/// Fields of one filter block, keyed by configuration key.
pub type FilterFields = BTreeMap<String, Scalar>;

/// Recognized filter blocks. Iteration follows `FilterKind` order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilters(BTreeMap<FilterKind, FilterFields>);

impl JobFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: FilterKind, fields: FilterFields) {
        self.0.insert(kind, fields);
    }

    pub fn get(&self, kind: FilterKind) -> Option<&FilterFields> {
        self.0.get(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterKind, &FilterFields)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }
}

impl FromIterator<(FilterKind, FilterFields)> for JobFilters {
    fn from_iter<I: IntoIterator<Item = (FilterKind, FilterFields)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for JobFilters {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Values stay untyped until the key is classified, so an unknown
        // filter type never fails on its body.
        let raw: Option<BTreeMap<String, serde_json::Value>> = Option::deserialize(deserializer)?;

        let mut out = JobFilters::new();
        for (key, body) in raw.unwrap_or_default() {
            let Some(kind) = FilterKind::from_key(&key) else {
                log::debug!("ignoring unknown job filter type '{}'", key);
                continue;
            };
            // An empty block (`most-recent:` in YAML) means "all defaults".
            let fields: Option<FilterFields> = serde_json::from_value(body)
                .map_err(|e| D::Error::custom(format!("job filter '{}': {}", key, e)))?;
            out.insert(kind, fields.unwrap_or_default());
        }
        Ok(out)
    }
}

/// One list view, as parsed from the user's configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ViewConfig {
    #[serde(default)]
    pub name: Option<String>,

    /// Only `list` is compiled here; other values are reported, not rejected.
    #[serde(default)]
    pub view_type: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub filter_executors: bool,

    #[serde(default)]
    pub filter_queue: bool,

    #[serde(default, deserialize_with = "one_or_many")]
    pub job_name: Vec<Scalar>,

    #[serde(default)]
    pub job_filters: JobFilters,

    #[serde(default)]
    pub columns: Vec<String>,

    #[serde(default)]
    pub regex: Option<String>,

    #[serde(default)]
    pub recurse: bool,

    /// Presence is significant: `None` omits the element entirely.
    #[serde(default)]
    pub status_filter: Option<bool>,
}

impl ViewConfig {
    /// Minimal config with only a name; everything else takes its default.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// `job-name` accepts a bare scalar as shorthand for a one-element list.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<Scalar>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(Scalar),
        Many(Vec<Scalar>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(s)) => vec![s],
        Some(OneOrMany::Many(v)) => v,
    })
}

//! Job filter types and their field tables.

use crate::compile::mapping::{FieldDefault::*, FieldSpec};

/// Plugin attribute carried by every filter element.
pub const FILTER_PLUGIN: &str = "view-job-filters";

/// Recognized job filter types.
///
/// Variant order is the order filters are emitted in, independent of the
/// order they were configured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKind {
    MostRecent,
    BuildDuration,
    BuildTrend,
    JobStatus,
}

const MOST_RECENT: &[FieldSpec] = &[
    FieldSpec::new("max-to-include", "maxToInclude", Text("0")),
    FieldSpec::new("check-start-time", "checkStartTime", Bool(false)),
];

const BUILD_DURATION: &[FieldSpec] = &[
    FieldSpec::new("match-type", "includeExcludeTypeString", Text("includeMatched")),
    FieldSpec::new("build-duration-type", "buildCountTypeString", Text("Latest")),
    FieldSpec::new("amount-type", "amountTypeString", Text("Hours")),
    FieldSpec::new("amount", "amount", Text("0")),
    FieldSpec::new("less-than", "lessThan", Bool(true)),
    FieldSpec::new("build-duration-minutes", "buildDurationMinutes", Text("0")),
];

const BUILD_TREND: &[FieldSpec] = &[
    FieldSpec::new("match-type", "includeExcludeTypeString", Text("includeMatched")),
    FieldSpec::new("build-trend-type", "buildCountTypeString", Text("Latest")),
    FieldSpec::new("amount-type", "amountTypeString", Text("Hours")),
    FieldSpec::new("amount", "amount", Text("0")),
    FieldSpec::new("status", "statusTypeString", Text("Completed")),
];

const JOB_STATUS: &[FieldSpec] = &[
    FieldSpec::new("match-type", "includeExcludeTypeString", Text("includeMatched")),
    FieldSpec::new("unstable", "unstable", Bool(false)),
    FieldSpec::new("failed", "failed", Bool(false)),
    FieldSpec::new("aborted", "aborted", Bool(false)),
    FieldSpec::new("disabled", "disabled", Bool(false)),
    FieldSpec::new("stable", "stable", Bool(false)),
];

impl FilterKind {
    pub const ALL: [FilterKind; 4] = [
        FilterKind::MostRecent,
        FilterKind::BuildDuration,
        FilterKind::BuildTrend,
        FilterKind::JobStatus,
    ];

    /// Classify a configuration key; unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }

    /// Key used in the `job-filters` configuration block.
    pub fn key(self) -> &'static str {
        match self {
            FilterKind::MostRecent => "most-recent",
            FilterKind::BuildDuration => "build-duration",
            FilterKind::BuildTrend => "build-trend",
            FilterKind::JobStatus => "job-status",
        }
    }

    /// Element tag of the filter in the view XML.
    pub fn class_name(self) -> &'static str {
        match self {
            FilterKind::MostRecent => "hudson.views.MostRecentJobsFilter",
            FilterKind::BuildDuration => "hudson.views.BuildDurationFilter",
            FilterKind::BuildTrend => "hudson.views.BuildTrendFilter",
            FilterKind::JobStatus => "hudson.views.JobStatusFilter",
        }
    }

    pub fn schema(self) -> &'static [FieldSpec] {
        match self {
            FilterKind::MostRecent => MOST_RECENT,
            FilterKind::BuildDuration => BUILD_DURATION,
            FilterKind::BuildTrend => BUILD_TREND,
            FilterKind::JobStatus => JOB_STATUS,
        }
    }
}

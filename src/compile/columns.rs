//! Display columns recognised in a list view.

/// Column identifier -> column element tag, in documentation order.
pub const COLUMNS: [(&str, &str); 8] = [
    ("status", "hudson.views.StatusColumn"),
    ("weather", "hudson.views.WeatherColumn"),
    ("job", "hudson.views.JobColumn"),
    ("last-success", "hudson.views.LastSuccessColumn"),
    ("last-failure", "hudson.views.LastFailureColumn"),
    ("last-duration", "hudson.views.LastDurationColumn"),
    ("build-button", "hudson.views.BuildButtonColumn"),
    ("last-stable", "hudson.views.LastStableColumn"),
];

/// Look up the element tag for a column identifier.
pub fn resolve(name: &str) -> Option<&'static str> {
    COLUMNS
        .iter()
        .find(|(id, _)| *id == name)
        .map(|(_, tag)| *tag)
}

use listview_compiler::compile::FilterKind;
use listview_compiler::config::{self, FilterFields, Scalar};
use listview_compiler::render::render_xml;
use listview_compiler::{compile, Element, ViewConfig, ViewError};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn compile_fixture(name: &str) -> String {
    let view = config::load_view(fixture(name)).unwrap();
    render_xml(&compile(&view).unwrap())
}

fn expected(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).unwrap()
}

#[test]
fn minimal_view_matches_golden_xml() {
    assert_eq!(compile_fixture("minimal.yaml"), expected("minimal.xml"));
}

#[test]
fn full_view_matches_golden_xml() {
    assert_eq!(compile_fixture("full.yaml"), expected("full.xml"));
}

#[test]
fn most_recent_filter_fills_non_required_default() {
    let view = config::load_view(fixture("most_recent.json")).unwrap();
    let root = compile(&view).unwrap();

    let filters = root.child("jobFilters").unwrap();
    assert_eq!(filters.children.len(), 1);

    let mr = &filters.children[0];
    assert_eq!(mr.tag, "hudson.views.MostRecentJobsFilter");
    assert_eq!(mr.attr("plugin"), Some("view-job-filters"));
    assert_eq!(mr.child("maxToInclude").and_then(Element::text), Some("5"));
    assert_eq!(mr.child("checkStartTime").and_then(Element::text), Some("false"));
}

#[test]
fn repeated_compilation_renders_identically() {
    let view = config::load_view(fixture("full.yaml")).unwrap();
    let first = render_xml(&compile(&view).unwrap());
    for _ in 0..5 {
        assert_eq!(render_xml(&compile(&view).unwrap()), first);
    }
}

#[test]
fn filter_order_ignores_input_order() {
    let forward = r#"{"name": "v", "job-filters": {"most-recent": {}, "job-status": {}}}"#;
    let reverse = r#"{"name": "v", "job-filters": {"job-status": {}, "most-recent": {}}}"#;

    let a = compile(&config::parse_view(forward, config::Format::Json).unwrap()).unwrap();
    let b = compile(&config::parse_view(reverse, config::Format::Json).unwrap()).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        a.child("jobFilters").unwrap().child_tags(),
        vec!["hudson.views.MostRecentJobsFilter", "hudson.views.JobStatusFilter"]
    );
}

#[test]
fn all_defaults_for_each_filter_type() {
    let job_filters = FilterKind::ALL
        .into_iter()
        .map(|k| (k, FilterFields::new()))
        .collect();
    let view = ViewConfig {
        job_filters,
        ..ViewConfig::named("defaults")
    };
    let root = compile(&view).unwrap();
    let filters = root.child("jobFilters").unwrap();

    let rendered: Vec<Vec<(&str, &str)>> = filters
        .children
        .iter()
        .map(|f| {
            f.children
                .iter()
                .map(|c| (c.tag.as_str(), c.text().unwrap()))
                .collect()
        })
        .collect();

    assert_eq!(
        rendered,
        vec![
            vec![("maxToInclude", "0"), ("checkStartTime", "false")],
            vec![
                ("includeExcludeTypeString", "includeMatched"),
                ("buildCountTypeString", "Latest"),
                ("amountTypeString", "Hours"),
                ("amount", "0"),
                ("lessThan", "true"),
                ("buildDurationMinutes", "0"),
            ],
            vec![
                ("includeExcludeTypeString", "includeMatched"),
                ("buildCountTypeString", "Latest"),
                ("amountTypeString", "Hours"),
                ("amount", "0"),
                ("statusTypeString", "Completed"),
            ],
            vec![
                ("includeExcludeTypeString", "includeMatched"),
                ("unstable", "false"),
                ("failed", "false"),
                ("aborted", "false"),
                ("disabled", "false"),
                ("stable", "false"),
            ],
        ]
    );
}

#[test]
fn boolean_fields_render_lowercase() {
    let view = config::parse_view(
        "name: b\nfilter-queue: true\nstatus-filter: true\njob-filters:\n  job-status:\n    failed: true\n",
        config::Format::Yaml,
    )
    .unwrap();
    let xml = render_xml(&compile(&view).unwrap());

    assert!(xml.contains("<filterQueue>true</filterQueue>"));
    assert!(xml.contains("<statusFilter>true</statusFilter>"));
    assert!(xml.contains("<failed>true</failed>"));
    assert!(!xml.contains("True") && !xml.contains(">1<"));
}

#[test]
fn missing_name_aborts_compilation() {
    let view = config::parse_view("description: nameless\n", config::Format::Yaml).unwrap();
    assert_eq!(compile(&view), Err(ViewError::MissingField("name")));
}

#[test]
fn empty_description_is_kept() {
    let view = config::parse_view("name: d\ndescription: ''\n", config::Format::Yaml).unwrap();
    let root = compile(&view).unwrap();
    assert_eq!(root.child("description").and_then(Element::text), Some(""));
    assert!(render_xml(&root).contains("  <description/>\n"));
}

#[test]
fn job_names_accept_non_string_scalars() {
    let view = config::parse_view("name: j\njob-name: [1234, true, plain]\n", config::Format::Yaml)
        .unwrap();
    assert_eq!(
        view.job_name,
        vec![Scalar::Int(1234), Scalar::Bool(true), Scalar::from("plain")]
    );

    let xml = render_xml(&compile(&view).unwrap());
    assert!(xml.contains("<string>1234</string>\n    <string>true</string>\n    <string>plain</string>"));
}

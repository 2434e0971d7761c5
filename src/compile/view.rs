use crate::compile::columns;
use crate::compile::filters::FILTER_PLUGIN;
use crate::compile::mapping::{self, render_bool};
use crate::config::ViewConfig;
use crate::error::ViewError;
use crate::markup::Element;

/// Root element tag of a list view.
pub const LIST_VIEW_TAG: &str = "hudson.model.ListView";

const PROPERTY_LIST_CLASS: &str = "hudson.model.View$PropertyList";
const JOB_NAME_COMPARATOR: &str = "hudson.util.CaseInsensitiveComparator";

/// Build the list view element tree for one configuration.
///
/// Child order is fixed:
/// name, description?, filterExecutors, filterQueue, properties, jobNames,
/// jobFilters, columns, includeRegex?, recurse, statusFilter?
pub fn compile(config: &ViewConfig) -> Result<Element, ViewError> {
    let name = config.name.as_deref().ok_or(ViewError::MissingField("name"))?;

    let mut root = Element::new(LIST_VIEW_TAG);
    root.text_child("name", name);

    if let Some(desc) = &config.description {
        root.text_child("description", desc.as_str());
    }

    root.text_child("filterExecutors", render_bool(config.filter_executors));
    root.text_child("filterQueue", render_bool(config.filter_queue));

    root.push(Element::new("properties").with_attr("class", PROPERTY_LIST_CLASS));

    let job_names = root.sub_element("jobNames");
    job_names.push(Element::new("comparator").with_attr("class", JOB_NAME_COMPARATOR));
    for job in &config.job_name {
        job_names.text_child("string", job.to_string());
    }

    let job_filters = root.sub_element("jobFilters");
    for (kind, fields) in config.job_filters.iter() {
        let mut filter = Element::new(kind.class_name()).with_attr("plugin", FILTER_PLUGIN);
        mapping::apply(&mut filter, fields, kind.schema())?;
        job_filters.push(filter);
    }

    let cols = root.sub_element("columns");
    for column in &config.columns {
        match columns::resolve(column) {
            Some(tag) => cols.push(Element::new(tag)),
            None => log::debug!("dropping unknown column '{}'", column),
        }
    }

    if let Some(regex) = &config.regex {
        root.text_child("includeRegex", regex.as_str());
    }

    root.text_child("recurse", render_bool(config.recurse));

    if let Some(status) = config.status_filter {
        root.text_child("statusFilter", render_bool(status));
    }

    Ok(root)
}

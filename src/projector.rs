//! Projection of a [`Form`] into the exported JSON document.

use serde::Serialize;

use crate::form::{Form, Step};
use crate::item::Item;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FormExport<'a> {
    id: i64,
    name: &'a str,
    service_id: i64,
    steps: Vec<StepExport<'a>>,
    default_image: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StepExport<'a> {
    items: &'a [Item],
    order: i64,
    title: &'a str,
    // `Some(false)` is written out, only an unset value is left out
    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_button: Option<&'a str>,
}

impl<'a> From<&'a Step> for StepExport<'a> {
    fn from(step: &'a Step) -> Self {
        Self {
            items: &step.items,
            order: step.order,
            title: &step.title,
            required: step.required,
            next_button: step.next_button.as_deref().filter(|label| !label.is_empty()),
        }
    }
}

impl<'a> From<&'a Form> for FormExport<'a> {
    fn from(form: &'a Form) -> Self {
        Self {
            id: form.id,
            name: &form.name,
            service_id: form.service_id,
            steps: form.steps.iter().map(StepExport::from).collect(),
            default_image: &form.default_image,
        }
    }
}

/// Render `form` as the pretty-printed (2-space indented) export document.
///
/// Top-level keys come out as `id, name, serviceId, steps, defaultImage`,
/// step keys as `items, order, title` followed by `required` and
/// `nextButton` when present.
pub fn project(form: &Form) -> String {
    serde_json::to_string_pretty(&FormExport::from(form)).unwrap_or_else(|err| {
        log::error!("Failed to render form export: {}", err);
        String::from("{}")
    })
}

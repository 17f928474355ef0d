use crate::item::Item;

/// The top-level request form being authored.
///
/// A `Form` is treated as an immutable snapshot: the mutators in
/// [`crate::mutators`] take a reference and hand back a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub id: i64,
    pub name: String,
    pub service_id: i64,
    pub default_image: String,
    pub steps: Vec<Step>,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            id: 1,
            name: String::new(),
            service_id: 1,
            default_image: String::new(),
            steps: Vec::new(),
        }
    }
}

/// One page of the multi-step form.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub title: String,
    /// User-editable, never renumbered; values may collide or skip
    pub order: i64,
    pub items: Vec<Item>,
    /// `None` means never set, which is exported differently from `Some(false)`
    pub required: Option<bool>,
    pub next_button: Option<String>,
}

impl Step {
    /// An empty, not-required step at position `order`
    pub fn new(order: i64) -> Self {
        Self {
            title: String::new(),
            order,
            items: Vec::new(),
            required: Some(false),
            next_button: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasicField {
    Id,
    Name,
    ServiceId,
    DefaultImage,
}

impl BasicField {
    pub fn key(&self) -> &'static str {
        match self {
            BasicField::Id => "id",
            BasicField::Name => "name",
            BasicField::ServiceId => "serviceId",
            BasicField::DefaultImage => "defaultImage",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepField {
    Title,
    Order,
    Required,
    NextButton,
}

impl StepField {
    pub fn key(&self) -> &'static str {
        match self {
            StepField::Title => "title",
            StepField::Order => "order",
            StepField::Required => "required",
            StepField::NextButton => "nextButton",
        }
    }
}

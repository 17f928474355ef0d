use crate::form::{BasicField, Form, StepField};
use crate::item::{ItemField, ItemType};
use crate::mutators;

/// Edit intents produced by the editor panels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Change one of the form's top-level fields
    SetBasicField { field: BasicField, value: String },

    /// Append a new empty step
    AddStep,

    /// Delete a step; the others keep their order values
    RemoveStep { index: usize },

    /// Change one field of a step
    SetStepField {
        index: usize,
        field: StepField,
        value: String,
    },

    /// Append an empty text hint to a step
    AddItem { step_index: usize },

    /// Delete an item from a step
    RemoveItem { step_index: usize, item_index: usize },

    /// Reset an item to the default shape of another kind
    SetItemType {
        step_index: usize,
        item_index: usize,
        item_type: ItemType,
    },

    /// Change one field of an item
    SetItemField {
        step_index: usize,
        item_index: usize,
        field: ItemField,
        value: String,
    },
}

impl Command {
    /// Apply the command to `form`, returning the edited snapshot
    pub fn apply(&self, form: &Form) -> Form {
        match self {
            Command::SetBasicField { field, value } => {
                mutators::set_basic_field(form, *field, value)
            }
            Command::AddStep => mutators::add_step(form),
            Command::RemoveStep { index } => mutators::remove_step(form, *index),
            Command::SetStepField {
                index,
                field,
                value,
            } => mutators::set_step_field(form, *index, *field, value),
            Command::AddItem { step_index } => mutators::add_item(form, *step_index),
            Command::RemoveItem {
                step_index,
                item_index,
            } => mutators::remove_item(form, *step_index, *item_index),
            Command::SetItemType {
                step_index,
                item_index,
                item_type,
            } => mutators::set_item_type(form, *step_index, *item_index, item_type),
            Command::SetItemField {
                step_index,
                item_index,
                field,
                value,
            } => mutators::set_item_field(form, *step_index, *item_index, *field, value),
        }
    }
}

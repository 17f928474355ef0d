//! Pure edits on a [`Form`] snapshot.
//!
//! Every function takes the current snapshot by reference and returns a new
//! one. None of them fail: bad numbers fall back to `1`, and indices that
//! point past the end leave the form as it was.

use crate::form::{BasicField, Form, Step, StepField};
use crate::item::{factory, Item, ItemField, ItemType};
use crate::util::{parse_flag, parse_int_or_one};

pub fn set_basic_field(form: &Form, field: BasicField, raw: &str) -> Form {
    log::debug!("set_basic_field: {} = {:?}", field.key(), raw);
    let mut next = form.clone();
    match field {
        BasicField::Id => next.id = parse_int_or_one(raw),
        BasicField::ServiceId => next.service_id = parse_int_or_one(raw),
        BasicField::Name => next.name = raw.to_owned(),
        BasicField::DefaultImage => next.default_image = raw.to_owned(),
    }
    next
}

/// Append an empty step whose order is one past the current step count.
pub fn add_step(form: &Form) -> Form {
    let mut next = form.clone();
    let order = next.steps.len() as i64 + 1;
    next.steps.push(Step::new(order));
    next
}

/// Remaining steps keep their `order` values.
pub fn remove_step(form: &Form, index: usize) -> Form {
    let mut next = form.clone();
    if index < next.steps.len() {
        next.steps.remove(index);
    } else {
        log::debug!("remove_step: no step at index {}", index);
    }
    next
}

pub fn set_step_field(form: &Form, index: usize, field: StepField, raw: &str) -> Form {
    let mut next = form.clone();
    match next.steps.get_mut(index) {
        Some(step) => {
            log::debug!("set_step_field: step {} {} = {:?}", index, field.key(), raw);
            match field {
                StepField::Title => step.title = raw.to_owned(),
                StepField::Order => step.order = parse_int_or_one(raw),
                StepField::Required => step.required = Some(parse_flag(raw)),
                StepField::NextButton => step.next_button = Some(raw.to_owned()),
            }
        }
        None => log::debug!("set_step_field: no step at index {}", index),
    }
    next
}

/// Append an empty text hint to the step.
pub fn add_item(form: &Form, step_index: usize) -> Form {
    let mut next = form.clone();
    match next.steps.get_mut(step_index) {
        Some(step) => step.items.push(factory::create_text_hint()),
        None => log::debug!("add_item: no step at index {}", step_index),
    }
    next
}

pub fn remove_item(form: &Form, step_index: usize, item_index: usize) -> Form {
    let mut next = form.clone();
    match next.steps.get_mut(step_index) {
        Some(step) if item_index < step.items.len() => {
            step.items.remove(item_index);
        }
        _ => log::debug!(
            "remove_item: no item at step {} index {}",
            step_index,
            item_index
        ),
    }
    next
}

/// Replace the item with the default shape of `new_type`. Prior field
/// values are discarded; a radio item picks up the group of a radio item
/// elsewhere in the same step.
pub fn set_item_type(
    form: &Form,
    step_index: usize,
    item_index: usize,
    new_type: &ItemType,
) -> Form {
    let mut next = form.clone();
    match next.steps.get_mut(step_index) {
        Some(step) if item_index < step.items.len() => {
            let siblings: Vec<Item> = step
                .items
                .iter()
                .enumerate()
                .filter(|(index, _)| *index != item_index)
                .map(|(_, item)| item.clone())
                .collect();
            step.items[item_index] = factory::default_item(new_type, &siblings);
        }
        _ => log::debug!(
            "set_item_type: no item at step {} index {}",
            step_index,
            item_index
        ),
    }
    next
}

/// Patch one field of an item in place. A field the item's kind does not
/// define is kept alongside the kind's own fields.
///
/// Changing the group of a radio item moves every radio item of the step
/// into that group.
pub fn set_item_field(
    form: &Form,
    step_index: usize,
    item_index: usize,
    field: ItemField,
    raw: &str,
) -> Form {
    let mut next = form.clone();
    match next.steps.get_mut(step_index) {
        Some(step) if item_index < step.items.len() => patch_item(step, item_index, field, raw),
        _ => log::debug!(
            "set_item_field: no item at step {} index {}",
            step_index,
            item_index
        ),
    }
    next
}

fn patch_item(step: &mut Step, item_index: usize, field: ItemField, raw: &str) {
    let item = &mut step.items[item_index];
    let regroup = item.is_radio() && field == ItemField::Group;

    log::debug!(
        "set_item_field: {} {} = {:?}",
        item.item_type().tag(),
        field.key(),
        raw
    );
    item.set_field(field, raw);

    if regroup {
        for other in step.items.iter_mut().filter(|other| other.is_radio()) {
            other.set_field(ItemField::Group, raw);
        }
    }
}

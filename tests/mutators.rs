use request_form_editor::item::{factory, InputFields};
use request_form_editor::mutators::*;
use request_form_editor::{project, BasicField, Form, Item, ItemField, ItemKind, ItemType, StepField};
use serde_json::Value;

// Helper: a form with `steps` empty steps
fn form_with_steps(steps: usize) -> Form {
    (0..steps).fold(Form::default(), |form, _| add_step(&form))
}

fn radio(group: &str) -> Item {
    Item::from(ItemKind::Radio {
        group: group.to_owned(),
        label: String::new(),
        icon_path: None,
    })
}

// Helper: the exported JSON of the first item of the first step
fn first_item_json(form: &Form) -> Value {
    let value: Value = serde_json::from_str(&project(form)).unwrap();
    value["steps"][0]["items"][0].clone()
}

#[test]
fn test_session_starts_with_empty_form() {
    let form = Form::default();
    assert_eq!(form.id, 1);
    assert_eq!(form.service_id, 1);
    assert!(form.name.is_empty());
    assert!(form.default_image.is_empty());
    assert!(form.steps.is_empty());
}

#[test]
fn test_basic_numeric_fields_fall_back_to_one() {
    let form = Form::default();

    assert_eq!(set_basic_field(&form, BasicField::Id, "abc").id, 1);
    assert_eq!(set_basic_field(&form, BasicField::Id, "7").id, 7);
    assert_eq!(set_basic_field(&form, BasicField::ServiceId, "").service_id, 1);
    assert_eq!(set_basic_field(&form, BasicField::ServiceId, "0").service_id, 1);
    assert_eq!(set_basic_field(&form, BasicField::ServiceId, "12").service_id, 12);
    assert_eq!(
        set_basic_field(&form, BasicField::Id, "123456789012345678901234").id,
        i64::MAX
    );
}

#[test]
fn test_basic_text_fields_are_verbatim() {
    let form = set_basic_field(&Form::default(), BasicField::Name, "  Umzug anfragen ");
    let form = set_basic_field(&form, BasicField::DefaultImage, "https://example.org/a.png");

    assert_eq!(form.name, "  Umzug anfragen ");
    assert_eq!(form.default_image, "https://example.org/a.png");
}

#[test]
fn test_mutators_leave_input_untouched() {
    let original = form_with_steps(1);
    let edited = set_step_field(&original, 0, StepField::Title, "Adresse");

    assert_eq!(original.steps[0].title, "");
    assert_eq!(edited.steps[0].title, "Adresse");
}

#[test]
fn test_add_step_uses_step_count_for_order() {
    let form = form_with_steps(2);
    let form = add_step(&form);

    let third = &form.steps[2];
    assert_eq!(third.order, 3);
    assert_eq!(third.title, "");
    assert!(third.items.is_empty());
    assert_eq!(third.required, Some(false));
    assert_eq!(third.next_button, None);
}

#[test]
fn test_remove_step_does_not_renumber() {
    let form = form_with_steps(3);
    let form = remove_step(&form, 0);

    let orders: Vec<i64> = form.steps.iter().map(|step| step.order).collect();
    assert_eq!(orders, vec![2, 3]);

    // A new step counts steps, so its order collides with an existing one
    let form = add_step(&form);
    assert_eq!(form.steps[2].order, 3);
}

#[test]
fn test_out_of_range_indices_change_nothing() {
    let form = form_with_steps(1);

    assert_eq!(remove_step(&form, 5), form);
    assert_eq!(set_step_field(&form, 5, StepField::Title, "x"), form);
    assert_eq!(add_item(&form, 5), form);
    assert_eq!(remove_item(&form, 0, 0), form);
    assert_eq!(set_item_type(&form, 0, 3, &ItemType::Radio), form);
    assert_eq!(set_item_field(&form, 0, 3, ItemField::Label, "x"), form);
}

#[test]
fn test_step_fields() {
    let form = form_with_steps(1);
    let form = set_step_field(&form, 0, StepField::Order, "x");
    assert_eq!(form.steps[0].order, 1);

    let form = set_step_field(&form, 0, StepField::Order, "4");
    assert_eq!(form.steps[0].order, 4);

    let form = set_step_field(&form, 0, StepField::Required, "true");
    assert_eq!(form.steps[0].required, Some(true));

    let form = set_step_field(&form, 0, StepField::Required, "nope");
    assert_eq!(form.steps[0].required, Some(false));

    let form = set_step_field(&form, 0, StepField::NextButton, "Weiter");
    assert_eq!(form.steps[0].next_button.as_deref(), Some("Weiter"));
}

#[test]
fn test_add_item_appends_text_hint() {
    let form = add_item(&form_with_steps(1), 0);
    let form = add_item(&form, 0);

    assert_eq!(form.steps[0].items.len(), 2);
    assert_eq!(form.steps[0].items[1], factory::create_text_hint());
}

#[test]
fn test_remove_item() {
    let form = add_item(&form_with_steps(1), 0);
    let form = set_item_type(&form, 0, 0, &ItemType::InputText);
    let form = add_item(&form, 0);

    let form = remove_item(&form, 0, 0);
    assert_eq!(form.steps[0].items, vec![factory::create_text_hint()]);
}

#[test]
fn test_set_item_type_discards_previous_fields() {
    let form = add_item(&form_with_steps(1), 0);
    let form = set_item_type(&form, 0, 0, &ItemType::InputText);
    let form = set_item_field(&form, 0, 0, ItemField::Label, "Vorname");

    let form = set_item_type(&form, 0, 0, &ItemType::TextHint);
    assert_eq!(
        form.steps[0].items[0],
        factory::create_text_hint()
    );
}

#[test]
fn test_new_radio_inherits_group_from_step() {
    let form = add_item(&form_with_steps(1), 0);
    let form = set_item_type(&form, 0, 0, &ItemType::Radio);
    let form = set_item_field(&form, 0, 0, ItemField::Group, "g1");

    let form = add_item(&form, 0);
    let form = set_item_type(&form, 0, 1, &ItemType::Radio);

    assert_eq!(form.steps[0].items[1].radio_group(), Some("g1"));
}

#[test]
fn test_radio_does_not_inherit_from_other_steps() {
    let form = add_item(&form_with_steps(2), 0);
    let form = set_item_type(&form, 0, 0, &ItemType::Radio);
    let form = set_item_field(&form, 0, 0, ItemField::Group, "g1");

    let form = add_item(&form, 1);
    let form = set_item_type(&form, 1, 0, &ItemType::Radio);

    assert_eq!(form.steps[1].items[0].radio_group(), Some(""));
}

#[test]
fn test_unknown_type_yields_bare_item() {
    let form = add_item(&form_with_steps(1), 0);
    let form = set_item_type(&form, 0, 0, &ItemType::from_tag("DATE_PICKER"));

    assert_eq!(
        form.steps[0].items[0],
        Item::from(ItemKind::Unknown {
            type_tag: "DATE_PICKER".to_owned()
        })
    );
}

#[test]
fn test_item_required_is_parsed_as_flag() {
    let form = add_item(&form_with_steps(1), 0);
    let form = set_item_type(&form, 0, 0, &ItemType::InputPlz);
    let form = set_item_field(&form, 0, 0, ItemField::Required, "false");
    let form = set_item_field(&form, 0, 0, ItemField::Name, "plz");

    assert_eq!(
        form.steps[0].items[0],
        Item::from(ItemKind::InputPlz(InputFields {
            name: "plz".into(),
            label: String::new(),
            required: false,
            placeholder: "Postleitzahl".into(),
        }))
    );
}

#[test]
fn test_unknown_item_keeps_fields_set_on_it() {
    let form = add_item(&form_with_steps(1), 0);
    let form = set_item_type(&form, 0, 0, &ItemType::from_tag("SLIDER"));
    let form = set_item_field(&form, 0, 0, ItemField::Label, "Fläche");

    let item = &form.steps[0].items[0];
    assert_eq!(item.extra_text(ItemField::Label), Some("Fläche"));
    assert_eq!(
        first_item_json(&form),
        serde_json::json!({"type": "SLIDER", "label": "Fläche"})
    );
}

#[test]
fn test_field_of_other_kind_follows_own_keys() {
    let form = add_item(&form_with_steps(1), 0);
    let form = set_item_field(&form, 0, 0, ItemField::Label, "Hinweis");
    let form = set_item_field(&form, 0, 0, ItemField::Headline, "Willkommen");

    let item = first_item_json(&form);
    let keys: Vec<&str> = item.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["type", "text", "headline", "label"]);
    assert_eq!(item["headline"], "Willkommen");
    assert_eq!(item["label"], "Hinweis");
}

#[test]
fn test_set_item_type_clears_extra_fields() {
    let form = add_item(&form_with_steps(1), 0);
    let form = set_item_field(&form, 0, 0, ItemField::Placeholder, "PLZ");
    assert_eq!(form.steps[0].items[0].extra_fields().len(), 1);

    let form = set_item_type(&form, 0, 0, &ItemType::InputText);
    assert!(form.steps[0].items[0].extra_fields().is_empty());
    assert_eq!(
        first_item_json(&form),
        serde_json::json!({
            "type": "INPUT_TEXT",
            "name": "",
            "label": "",
            "required": false,
            "placeholder": ""
        })
    );
}

#[test]
fn test_radio_group_edit_moves_whole_step() {
    let mut form = form_with_steps(1);
    for index in 0..3 {
        form = add_item(&form, 0);
        form = set_item_type(&form, 0, index, &ItemType::Radio);
    }
    form = add_item(&form, 0);

    let form = set_item_field(&form, 0, 1, ItemField::Group, "anrede");
    let items = &form.steps[0].items;

    assert_eq!(items[0].radio_group(), Some("anrede"));
    assert_eq!(items[1].radio_group(), Some("anrede"));
    assert_eq!(items[2].radio_group(), Some("anrede"));
    assert_eq!(items[3], factory::create_text_hint());

    // Labels stay per item
    let form = set_item_field(&form, 0, 0, ItemField::Label, "Herr");
    assert_eq!(
        form.steps[0].items[0].kind,
        ItemKind::Radio {
            group: "anrede".into(),
            label: "Herr".into(),
            icon_path: None,
        }
    );
    assert_eq!(form.steps[0].items[1], radio("anrede"));
}

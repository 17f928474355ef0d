use super::{edited_flag, edited_text};
use crate::command::Command;
use crate::form::{Form, Step, StepField};
use crate::item::{Item, ItemField, ItemKind, ItemType};

pub fn steps_panel(ui: &mut egui::Ui, form: &Form, commands: &mut Vec<Command>) {
    ui.horizontal(|ui| {
        ui.heading("Schritte");
        if ui.button("+ Schritt hinzufügen").clicked() {
            commands.push(Command::AddStep);
        }
    });

    for (step_index, step) in form.steps.iter().enumerate() {
        ui.push_id(("step", step_index), |ui| {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                step_editor(ui, step_index, step, commands);
            });
        });
        ui.add_space(8.0);
    }
}

fn step_editor(ui: &mut egui::Ui, step_index: usize, step: &Step, commands: &mut Vec<Command>) {
    ui.horizontal(|ui| {
        ui.strong(format!("Schritt {}", step_index + 1));
        if ui.button("🗑").on_hover_text("Schritt entfernen").clicked() {
            commands.push(Command::RemoveStep { index: step_index });
        }
    });

    let mut set = |field: StepField, value: String| {
        commands.push(Command::SetStepField {
            index: step_index,
            field,
            value,
        });
    };

    egui::Grid::new("step_fields")
        .num_columns(2)
        .spacing([40.0, 4.0])
        .show(ui, |ui| {
            ui.label("Titel:");
            if let Some(value) = edited_text(ui, &step.title, "") {
                set(StepField::Title, value);
            }
            ui.end_row();

            ui.label("Reihenfolge:");
            if let Some(value) = edited_text(ui, &step.order.to_string(), "") {
                set(StepField::Order, value);
            }
            ui.end_row();

            ui.label("Required:");
            let required = step.required.unwrap_or(false);
            if let Some(value) = edited_flag(ui, "step_required", required, ("Nein", "Ja")) {
                set(StepField::Required, value.to_string());
            }
            ui.end_row();

            ui.label("Next Button:");
            let next_button = step.next_button.as_deref().unwrap_or_default();
            if let Some(value) = edited_text(ui, next_button, "Optional (z.B. 'Weiter')") {
                set(StepField::NextButton, value);
            }
            ui.end_row();
        });

    ui.separator();
    ui.horizontal(|ui| {
        ui.strong("Items");
        if ui.button("+ Item hinzufügen").clicked() {
            commands.push(Command::AddItem { step_index });
        }
    });

    for (item_index, item) in step.items.iter().enumerate() {
        ui.push_id(("item", item_index), |ui| {
            ui.horizontal_top(|ui| {
                ui.vertical(|ui| {
                    item_editor(ui, step_index, item_index, item, commands);
                });
                if ui.button("🗑").on_hover_text("Item entfernen").clicked() {
                    commands.push(Command::RemoveItem {
                        step_index,
                        item_index,
                    });
                }
            });
        });
        ui.add_space(4.0);
    }
}

fn item_editor(
    ui: &mut egui::Ui,
    step_index: usize,
    item_index: usize,
    item: &Item,
    commands: &mut Vec<Command>,
) {
    let current = item.item_type();
    let mut selected = current.clone();
    egui::ComboBox::from_id_salt("item_type")
        .selected_text(current.label())
        .show_ui(ui, |ui| {
            for kind in ItemType::known() {
                let caption = kind.label().to_owned();
                ui.selectable_value(&mut selected, kind, caption);
            }
        });
    if selected != current {
        commands.push(Command::SetItemType {
            step_index,
            item_index,
            item_type: selected,
        });
    }

    let mut set = |field: ItemField, value: String| {
        commands.push(Command::SetItemField {
            step_index,
            item_index,
            field,
            value,
        });
    };

    match &item.kind {
        ItemKind::TextHint { text, headline } => {
            if let Some(value) = edited_text(ui, headline, "Überschrift") {
                set(ItemField::Headline, value);
            }
            if let Some(value) = edited_text(ui, text, "Text") {
                set(ItemField::Text, value);
            }
        }
        ItemKind::InputPlz(fields) | ItemKind::InputText(fields) | ItemKind::InputNumber(fields) => {
            if let Some(value) = edited_text(ui, &fields.name, "Name") {
                set(ItemField::Name, value);
            }
            if let Some(value) = edited_text(ui, &fields.placeholder, "Placeholder") {
                set(ItemField::Placeholder, value);
            }
            if let Some(value) = edited_text(ui, &fields.label, "Label") {
                set(ItemField::Label, value);
            }
            if let Some(value) =
                edited_flag(ui, "item_required", fields.required, ("Optional", "Required"))
            {
                set(ItemField::Required, value.to_string());
            }
        }
        ItemKind::Radio {
            group,
            label,
            icon_path,
        } => {
            if let Some(value) = edited_text(ui, label, "Label") {
                set(ItemField::Label, value);
            }
            if let Some(value) = edited_text(ui, group, "Group") {
                set(ItemField::Group, value);
            }
            let icon_path = icon_path.as_deref().unwrap_or_default();
            if let Some(value) = edited_text(ui, icon_path, "Icon Path URL") {
                set(ItemField::IconPath, value);
            }
        }
        ItemKind::Unknown { type_tag } => {
            ui.weak(format!("Keine festen Felder für {}", type_tag));
            let label = item.extra_text(ItemField::Label).unwrap_or_default();
            if let Some(value) = edited_text(ui, label, "Label") {
                set(ItemField::Label, value);
            }
        }
    }
}

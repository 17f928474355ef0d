use super::edited_text;
use crate::command::Command;
use crate::form::{BasicField, Form};

pub fn basic_info_panel(ui: &mut egui::Ui, form: &Form, commands: &mut Vec<Command>) {
    ui.heading("Grundinformationen");

    egui::Grid::new("basic_info_grid")
        .num_columns(2)
        .spacing([40.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            let fields = [
                ("ID:", BasicField::Id, form.id.to_string(), ""),
                ("Service ID:", BasicField::ServiceId, form.service_id.to_string(), ""),
                ("Name:", BasicField::Name, form.name.clone(), ""),
                (
                    "Default Image URL:",
                    BasicField::DefaultImage,
                    form.default_image.clone(),
                    "https://...",
                ),
            ];

            for (caption, field, current, hint) in fields {
                ui.label(caption);
                if let Some(value) = edited_text(ui, &current, hint) {
                    commands.push(Command::SetBasicField { field, value });
                }
                ui.end_row();
            }
        });
}

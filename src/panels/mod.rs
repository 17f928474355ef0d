mod basic_info_panel;
mod preview_panel;
mod steps_panel;

pub use basic_info_panel::basic_info_panel;
pub use preview_panel::preview_panel;
pub use steps_panel::steps_panel;

/// Single-line text edit over a copy of `current`; returns the new text
/// when the user changed it this frame.
fn edited_text(ui: &mut egui::Ui, current: &str, hint: &str) -> Option<String> {
    let mut buffer = current.to_owned();
    let response = ui.add(
        egui::TextEdit::singleline(&mut buffer)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    response.changed().then_some(buffer)
}

/// "Ja"/"Nein" style selector; returns the new value when it changed.
fn edited_flag(
    ui: &mut egui::Ui,
    id_salt: &str,
    current: bool,
    labels: (&str, &str),
) -> Option<bool> {
    let (off, on) = labels;
    let mut selected = current;
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(if selected { on } else { off })
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selected, false, off);
            ui.selectable_value(&mut selected, true, on);
        });
    (selected != current).then_some(selected)
}

/// Right-hand panel with the live JSON preview.
///
/// Returns true when the user asked to download the document.
pub fn preview_panel(ctx: &egui::Context, preview: &str) -> bool {
    let mut download = false;

    egui::SidePanel::right("preview_panel")
        .resizable(true)
        .default_width(420.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("JSON Vorschau");
                download = ui.button("JSON herunterladen").clicked();
            });
            ui.separator();

            egui::ScrollArea::both()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(preview).monospace());
                });
        });

    download
}

use crate::command::Command;
use crate::export::{export_form, FileSaver};
use crate::form::Form;
use crate::panels;
use crate::projector::project;

/// The editor session: the current form snapshot and its JSON preview.
///
/// Nothing is persisted; closing the app discards the form.
pub struct FormEditorApp {
    form: Form,
    /// Always the projection of `form`
    preview: String,
    saver: Box<dyn FileSaver>,
}

impl FormEditorApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, saver: Box<dyn FileSaver>) -> Self {
        Self::with_saver(saver)
    }

    /// Start a session with an empty form
    pub fn with_saver(saver: Box<dyn FileSaver>) -> Self {
        let form = Form::default();
        let preview = project(&form);
        Self {
            form,
            preview,
            saver,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }

    /// Replace the snapshot with the command's result and re-project it
    pub fn execute_command(&mut self, command: Command) {
        log::debug!("Executing command: {:?}", command);
        self.form = command.apply(&self.form);
        self.preview = project(&self.form);
    }

    /// Hand the current form to the saver as `anfrage.json`
    pub fn download(&self) {
        log::info!("Download requested ({} bytes)", self.preview.len());
        export_form(&self.form, self.saver.as_ref());
    }
}

impl eframe::App for FormEditorApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut commands = Vec::new();

        egui::TopBottomPanel::top("title_panel").show(ctx, |ui| {
            ui.heading("JSON Generator für Anfragen");
            ui.label("Erstellen Sie hier Ihre Anfrage-Formulare im JSON-Format.");
        });

        if panels::preview_panel(ctx, &self.preview) {
            self.download();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::basic_info_panel(ui, &self.form, &mut commands);
                    ui.separator();
                    panels::steps_panel(ui, &self.form, &mut commands);
                });
        });

        // Panels only read the snapshot; edits are applied once drawing is done
        for command in commands {
            self.execute_command(command);
        }
    }
}

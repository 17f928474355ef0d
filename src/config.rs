use std::path::PathBuf;

/// Settings for the editor window and its surroundings.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    /// Where the native build writes the exported file
    pub export_dir: PathBuf,
    /// Default log filter; `RUST_LOG` overrides it on native
    pub log_level: log::LevelFilter,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window_title: "JSON Generator für Anfragen".to_owned(),
            inner_size: [1200.0, 800.0],
            min_inner_size: [640.0, 400.0],
            export_dir: PathBuf::from("."),
            log_level: log::LevelFilter::Info,
        }
    }
}

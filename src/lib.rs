#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod export;
pub mod form;
pub mod item;
pub mod mutators;
pub mod panels;
pub mod projector;
pub mod util;

pub use app::FormEditorApp;
pub use command::Command;
pub use config::EditorConfig;
pub use export::{export_form, FileSaver, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
pub use form::{BasicField, Form, Step, StepField};
pub use item::{Item, ItemField, ItemKind, ItemType};
pub use projector::project;

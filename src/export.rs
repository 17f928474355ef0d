//! Handing the exported document to whatever saves it for the user.

use thiserror::Error;

use crate::form::Form;
use crate::projector::project;

pub const EXPORT_FILE_NAME: &str = "anfrage.json";
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// Errors a saver may hit while writing the file. They are logged by the
/// saver and never reach the editor.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Browser download failed: {0}")]
    Browser(String),
}

/// Persists or offers a document to the user, once per call.
pub trait FileSaver {
    fn save(&self, content: &str, filename: &str, mime_type: &str);
}

/// Project `form` and hand it to `saver` as `anfrage.json`.
pub fn export_form(form: &Form, saver: &dyn FileSaver) {
    saver.save(&project(form), EXPORT_FILE_NAME, EXPORT_MIME_TYPE);
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::DirectorySaver;

#[cfg(target_arch = "wasm32")]
pub use web::BrowserDownload;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::path::{Path, PathBuf};

    use super::{ExportError, FileSaver};

    /// Writes exported files into a directory on disk.
    #[derive(Debug, Clone)]
    pub struct DirectorySaver {
        dir: PathBuf,
    }

    impl DirectorySaver {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }

        /// Write `content` to `<dir>/<filename>`, creating the directory if needed
        pub fn write(&self, content: &str, filename: &str) -> Result<PathBuf, ExportError> {
            fs::create_dir_all(&self.dir)?;
            let path = self.dir.join(filename);
            fs::write(&path, content)?;
            Ok(path)
        }
    }

    impl FileSaver for DirectorySaver {
        fn save(&self, content: &str, filename: &str, mime_type: &str) {
            match self.write(content, filename) {
                Ok(path) => log::info!(
                    "Exported {} ({}, {} bytes) to {}",
                    filename,
                    mime_type,
                    content.len(),
                    path.display()
                ),
                Err(err) => log::error!("Failed to export {}: {}", filename, err),
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::{JsCast as _, JsValue};

    use super::{ExportError, FileSaver};

    /// Offers the file through the browser's download mechanism.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserDownload;

    fn js_error(value: JsValue) -> ExportError {
        ExportError::Browser(format!("{:?}", value))
    }

    impl BrowserDownload {
        pub fn download(
            &self,
            content: &str,
            filename: &str,
            mime_type: &str,
        ) -> Result<(), ExportError> {
            let window =
                web_sys::window().ok_or_else(|| ExportError::Browser("no window".to_owned()))?;
            let document = window
                .document()
                .ok_or_else(|| ExportError::Browser("no document".to_owned()))?;
            let body = document
                .body()
                .ok_or_else(|| ExportError::Browser("no body".to_owned()))?;

            let parts = js_sys::Array::of1(&JsValue::from_str(content));
            let options = web_sys::BlobPropertyBag::new();
            options.set_type(mime_type);
            let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
                .map_err(js_error)?;
            let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

            let anchor = document
                .create_element("a")
                .map_err(js_error)?
                .dyn_into::<web_sys::HtmlAnchorElement>()
                .map_err(|_| ExportError::Browser("created element is not an anchor".to_owned()))?;
            anchor.set_href(&url);
            anchor.set_download(filename);

            body.append_child(&anchor).map_err(js_error)?;
            anchor.click();
            body.remove_child(&anchor).map_err(js_error)?;
            web_sys::Url::revoke_object_url(&url).map_err(js_error)?;
            Ok(())
        }
    }

    impl FileSaver for BrowserDownload {
        fn save(&self, content: &str, filename: &str, mime_type: &str) {
            match self.download(content, filename, mime_type) {
                Ok(()) => log::info!("Offered {} ({}) for download", filename, mime_type),
                Err(err) => log::error!("Failed to export {}: {}", filename, err),
            }
        }
    }
}

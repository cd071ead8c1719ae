//! Export feature slice: the two per-card actions.
//!
//! * **Copy** fetches a flag's SVG markup and places it verbatim on the clipboard.
//! * **Download** fetches a flag's PNG and saves it under the URL's last path segment.
//!
//! Neither action returns an error. Failures are logged and acknowledged with a
//! failure toast; success is acknowledged with a success toast. The platform side
//! effects (clipboard, file save) sit behind [`ExportHost`].

mod error;
mod exporter;

pub use error::{ExportError, ExportErrorExt};
pub use exporter::{
    COPY_FAILED, COPY_SUCCEEDED, DOWNLOAD_FAILED, DOWNLOAD_SUCCEEDED, ExportOutcome, Exporter,
    FALLBACK_FILE_NAME, PNG_MIME, file_name_from_url,
};

/// Platform side effects of the export actions.
pub trait ExportHost {
    /// Replaces the clipboard content with `text`.
    ///
    /// # Errors
    /// Returns [`ExportError::Clipboard`] when the platform refuses the write.
    fn write_clipboard(&self, text: &str) -> Result<(), ExportError>;

    /// Offers `bytes` to the user as a file named `file_name`.
    ///
    /// # Errors
    /// Returns [`ExportError::Save`] when the download cannot be started.
    fn save_file(&self, file_name: &str, mime: &str, bytes: &[u8]) -> Result<(), ExportError>;
}

impl<H: ExportHost + ?Sized> ExportHost for &H {
    fn write_clipboard(&self, text: &str) -> Result<(), ExportError> {
        (**self).write_clipboard(text)
    }

    fn save_file(&self, file_name: &str, mime: &str, bytes: &[u8]) -> Result<(), ExportError> {
        (**self).save_file(file_name, mime, bytes)
    }
}

use crate::ExportHost;
use crate::error::{ExportError, ExportErrorExt};
use flagdeck_kernel::source::FlagSource;
use flagdeck_notify::{Notice, Notifier};
use tracing::{error, info};
use url::Url;

pub const COPY_SUCCEEDED: &str = "SVG content copied to clipboard!";
pub const COPY_FAILED: &str = "Could not copy the SVG";
pub const DOWNLOAD_SUCCEEDED: &str = "PNG image downloaded!";
pub const DOWNLOAD_FAILED: &str = "Could not download the PNG";

pub const PNG_MIME: &str = "image/png";
/// Used when a URL has no usable last path segment.
pub const FALLBACK_FILE_NAME: &str = "flag.png";

/// What an export action ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Copied { bytes: usize },
    Downloaded { file_name: String, bytes: usize },
    Failed,
}

/// Runs the export actions against a [`FlagSource`].
#[derive(Debug, Clone)]
pub struct Exporter<S> {
    source: S,
}

impl<S: FlagSource> Exporter<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Copies the SVG markup behind `svg_url` to the clipboard.
    pub async fn copy_svg<H, N>(&self, svg_url: &str, host: &H, notifier: &N) -> ExportOutcome
    where
        H: ExportHost,
        N: Notifier,
    {
        match self.try_copy(svg_url, host).await {
            Ok(bytes) => {
                info!(url = svg_url, bytes, "SVG copied to clipboard");
                notifier.notify(Notice::success(COPY_SUCCEEDED));
                ExportOutcome::Copied { bytes }
            },
            Err(err) => {
                error!(url = svg_url, error = %err, "Error copying SVG content");
                notifier.notify(Notice::failure(COPY_FAILED));
                ExportOutcome::Failed
            },
        }
    }

    /// Downloads the PNG behind `png_url` as a file named after its last path segment.
    pub async fn download_png<H, N>(&self, png_url: &str, host: &H, notifier: &N) -> ExportOutcome
    where
        H: ExportHost,
        N: Notifier,
    {
        let file_name = file_name_from_url(png_url);

        match self.try_download(png_url, &file_name, host).await {
            Ok(bytes) => {
                info!(url = png_url, file_name = file_name.as_str(), bytes, "PNG download started");
                notifier.notify(Notice::success(DOWNLOAD_SUCCEEDED));
                ExportOutcome::Downloaded { file_name, bytes }
            },
            Err(err) => {
                error!(url = png_url, error = %err, "Error downloading PNG");
                notifier.notify(Notice::failure(DOWNLOAD_FAILED));
                ExportOutcome::Failed
            },
        }
    }

    async fn try_copy<H: ExportHost>(&self, url: &str, host: &H) -> Result<usize, ExportError> {
        let svg = self.source.fetch_text(url).await.context("Failed to fetch SVG content")?;
        host.write_clipboard(&svg)?;
        Ok(svg.len())
    }

    async fn try_download<H: ExportHost>(
        &self,
        url: &str,
        file_name: &str,
        host: &H,
    ) -> Result<usize, ExportError> {
        let png = self.source.fetch_bytes(url).await.context("Failed to fetch PNG image")?;
        host.save_file(file_name, PNG_MIME, &png)?;
        Ok(png.len())
    }
}

/// Last path segment of `raw`, e.g. `fr.png` for `https://flagcdn.com/256x192/fr.png`.
///
/// Query strings and fragments are ignored. Falls back to [`FALLBACK_FILE_NAME`]
/// when the URL ends with `/` or has no path.
#[must_use]
pub fn file_name_from_url(raw: &str) -> String {
    let segment = match Url::parse(raw) {
        Ok(url) => url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned),
        Err(_) => {
            let path = raw.split(['?', '#']).next().unwrap_or_default();
            path.rsplit('/').next().filter(|segment| !segment.is_empty()).map(str::to_owned)
        },
    };

    segment.unwrap_or_else(|| FALLBACK_FILE_NAME.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_last_path_segment() {
        assert_eq!(file_name_from_url("https://flagcdn.com/256x192/fr.png"), "fr.png");
        assert_eq!(file_name_from_url("https://flagcdn.com/256x192/us-ca.png"), "us-ca.png");
    }

    #[test]
    fn file_name_ignores_query_and_fragment() {
        assert_eq!(file_name_from_url("https://flagcdn.com/256x192/de.png?v=2#x"), "de.png");
        assert_eq!(file_name_from_url("/256x192/de.png?v=2"), "de.png");
    }

    #[test]
    fn file_name_accepts_relative_urls() {
        assert_eq!(file_name_from_url("256x192/ua.png"), "ua.png");
    }

    #[test]
    fn file_name_falls_back_when_missing() {
        assert_eq!(file_name_from_url("https://flagcdn.com/"), FALLBACK_FILE_NAME);
        assert_eq!(file_name_from_url("https://flagcdn.com"), FALLBACK_FILE_NAME);
        assert_eq!(file_name_from_url(""), FALLBACK_FILE_NAME);
    }
}

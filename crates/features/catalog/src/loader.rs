use flagdeck_domain::directory::CodeDirectory;
use flagdeck_kernel::source::FlagSource;
use tracing::{debug, error};

/// Result of one directory load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedDirectory {
    pub directory: CodeDirectory,
    /// `true` when the fetch failed and `directory` is the empty fallback.
    pub degraded: bool,
}

/// Loads the code directory, never failing.
///
/// Any failure (transport, non-success status, malformed body) is logged once at
/// `ERROR` and degrades to an empty directory, which renders as "no flags".
pub async fn load_directory<S: FlagSource>(source: &S) -> CodeDirectory {
    load_directory_reporting(source).await.directory
}

/// Like [`load_directory`], but tells a failed fetch apart from an empty one.
pub async fn load_directory_reporting<S: FlagSource>(source: &S) -> LoadedDirectory {
    match source.fetch_directory().await {
        Ok(directory) => {
            debug!(entries = directory.len(), "Code directory loaded");
            LoadedDirectory { directory, degraded: false }
        },
        Err(err) => {
            error!(error = %err, "Error fetching country codes");
            LoadedDirectory { directory: CodeDirectory::new(), degraded: true }
        },
    }
}

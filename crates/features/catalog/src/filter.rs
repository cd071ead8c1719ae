use flagdeck_domain::directory::{CodeDirectory, DirectoryEntry};

/// Case-insensitive substring match of `term` against a country name.
///
/// An empty term matches everything.
#[must_use]
pub fn matches(name: &str, term: &str) -> bool {
    term.is_empty() || name.to_lowercase().contains(&term.to_lowercase())
}

/// Entries of `directory` whose name matches `term`, in directory order.
pub fn filter<'a>(
    directory: &'a CodeDirectory,
    term: &str,
) -> impl Iterator<Item = &'a DirectoryEntry> + use<'a> {
    let needle = term.to_lowercase();
    directory.iter().filter(move |entry| entry.name.to_lowercase().contains(&needle))
}

use crate::config::FlagHostConfig;
use crate::directory::{DirectoryEntry, FlagCode};

/// A renderable flag: the entry it came from plus both image URLs.
///
/// Cards are derived per render and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagCard {
    pub code: FlagCode,
    pub name: String,
    pub svg_url: String,
    pub png_url: String,
}

impl FlagCard {
    #[must_use]
    pub fn from_entry(entry: &DirectoryEntry, host: &FlagHostConfig) -> Self {
        Self {
            svg_url: host.svg_url(entry.code.as_str()),
            png_url: host.png_url(entry.code.as_str()),
            code: entry.code.clone(),
            name: entry.name.clone(),
        }
    }
}

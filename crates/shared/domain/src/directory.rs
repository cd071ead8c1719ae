use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Short country (or subdivision) code as used by the flag host, e.g. `fr` or `us-ca`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagCode(String);

impl FlagCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlagCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FlagCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One `code -> name` pair of the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub code: FlagCode,
    pub name: String,
}

/// Mapping from flag code to display name.
///
/// Iteration follows the insertion order of the source JSON object. A repeated
/// key keeps the position of its first occurrence and the value of its last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeDirectory {
    entries: Vec<DirectoryEntry>,
    /// Code to position in `entries`.
    index: HashMap<String, usize>,
}

impl CodeDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity), index: HashMap::with_capacity(capacity) }
    }

    /// Inserts or replaces the name for `code`, keeping the original position on replace.
    pub fn insert(&mut self, code: impl Into<String>, name: impl Into<String>) {
        let code = code.into();
        let name = name.into();
        match self.index.get(&code) {
            Some(&position) => self.entries[position].name = name,
            None => {
                self.index.insert(code.clone(), self.entries.len());
                self.entries.push(DirectoryEntry { code: FlagCode::new(code), name });
            },
        }
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&str> {
        self.index.get(code).map(|&position| self.entries[position].name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DirectoryEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a CodeDirectory {
    type Item = &'a DirectoryEntry;
    type IntoIter = std::slice::Iter<'a, DirectoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<C: Into<String>, N: Into<String>> FromIterator<(C, N)> for CodeDirectory {
    fn from_iter<I: IntoIterator<Item = (C, N)>>(iter: I) -> Self {
        let mut directory = Self::new();
        for (code, name) in iter {
            directory.insert(code, name);
        }
        directory
    }
}

impl<'de> Deserialize<'de> for CodeDirectory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DirectoryVisitor;

        impl<'de> Visitor<'de> for DirectoryVisitor {
            type Value = CodeDirectory;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object mapping flag codes to country names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut directory =
                    CodeDirectory::with_capacity(map.size_hint().unwrap_or_default());
                while let Some((code, name)) = map.next_entry::<String, String>()? {
                    directory.insert(code, name);
                }
                Ok(directory)
            }
        }

        deserializer.deserialize_map(DirectoryVisitor)
    }
}

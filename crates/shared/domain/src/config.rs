use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use std::time::Duration;

/// Top-level widget configuration shared across slices.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfigInner {
    pub host: FlagHostConfig,
    pub search: SearchConfig,
    pub toast: ToastConfig,
    pub ui: UiConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into components.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WidgetConfig {
    #[serde(flatten, default)]
    inner: Arc<WidgetConfigInner>,
}

impl Deref for WidgetConfig {
    type Target = WidgetConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for WidgetConfig {
    fn deref_mut(&mut self) -> &mut WidgetConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Remote flag image host and its URL layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FlagHostConfig {
    pub base_url: String,
    /// Language of the country names in the directory.
    pub locale: String,
    /// Raster size segment, e.g. `256x192`.
    pub raster: String,
}

impl FlagHostConfig {
    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// `<host>/<locale>/codes.json`
    #[must_use]
    pub fn directory_url(&self) -> String {
        format!("{}/{}/codes.json", self.base(), self.locale)
    }

    /// `<host>/<code>.svg`
    #[must_use]
    pub fn svg_url(&self, code: &str) -> String {
        format!("{}/{code}.svg", self.base())
    }

    /// `<host>/<raster>/<code>.png`
    #[must_use]
    pub fn png_url(&self, code: &str) -> String {
        format!("{}/{}/{code}.png", self.base(), self.raster)
    }
}

/// Search input behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period before a keystroke triggers a refresh. `0` disables debouncing.
    pub debounce_ms: u64,
}

impl SearchConfig {
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Toast notification timings and stacking cap.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub enter_delay_ms: u64,
    pub visible_ms: u64,
    pub exit_delay_ms: u64,
    pub max_stack: usize,
}

/// Static UI strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    pub search_placeholder: String,
}

// --- Default ---

impl Default for FlagHostConfig {
    fn default() -> Self {
        Self {
            base_url: "https://flagcdn.com".to_owned(),
            locale: "en".to_owned(),
            raster: "256x192".to_owned(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 150 }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self { enter_delay_ms: 100, visible_ms: 3000, exit_delay_ms: 300, max_stack: 4 }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { title: "Flags".to_owned(), search_placeholder: "Search country".to_owned() }
    }
}

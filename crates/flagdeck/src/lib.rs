//! Facade crate for `FlagDeck` slices and shared modules.
//! Re-exports domain/kernel primitives and wires the slices into one [`FlagDeck`].
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`init`] with an optional TOML override to get configured services.
//! - Hand the [`FlagDeck`] to the UI shell; it is cheap to clone.

pub use flagdeck_catalog as catalog;
pub use flagdeck_domain as domain;
pub use flagdeck_export as export;
pub use flagdeck_kernel as kernel;
pub use flagdeck_notify as notify;

use flagdeck_catalog::SearchBinding;
use flagdeck_domain::config::WidgetConfig;
use flagdeck_export::Exporter;
use flagdeck_kernel::config::load_config;
use flagdeck_kernel::error::ConfigError;
use flagdeck_kernel::source::{FlagSource, HttpFlagSource};
use flagdeck_notify::{NotificationCenter, ToastTimings};
use tracing::info;

/// Services of one widget instance, all sharing one [`FlagSource`].
#[derive(Debug, Clone)]
pub struct FlagDeck<S = HttpFlagSource> {
    config: WidgetConfig,
    search: SearchBinding<S>,
    exporter: Exporter<S>,
}

impl FlagDeck<HttpFlagSource> {
    #[must_use]
    pub fn from_config(config: WidgetConfig) -> Self {
        let source = HttpFlagSource::new(config.host.clone());
        Self::with_source(config, source)
    }
}

impl<S: FlagSource + Clone> FlagDeck<S> {
    #[must_use]
    pub fn with_source(config: WidgetConfig, source: S) -> Self {
        let search = SearchBinding::new(source.clone(), config.host.clone())
            .with_debounce(config.search.debounce());
        Self { exporter: Exporter::new(source), search, config }
    }

    #[must_use]
    pub const fn config(&self) -> &WidgetConfig {
        &self.config
    }

    #[must_use]
    pub const fn search(&self) -> &SearchBinding<S> {
        &self.search
    }

    #[must_use]
    pub const fn exporter(&self) -> &Exporter<S> {
        &self.exporter
    }

    #[must_use]
    pub fn toast_timings(&self) -> ToastTimings {
        ToastTimings::from(&self.config.toast)
    }

    /// An empty notification center honouring the configured stacking cap.
    #[must_use]
    pub fn notification_center(&self) -> NotificationCenter {
        NotificationCenter::new(self.config.toast.max_stack)
    }
}

/// Loads configuration and wires the HTTP-backed services.
///
/// # Errors
/// Returns [`ConfigError`] if the override document is invalid.
pub fn init(overrides: Option<&str>) -> Result<FlagDeck, ConfigError> {
    let config: WidgetConfig = load_config(overrides)?;

    info!(
        host = %config.host.base_url,
        locale = %config.host.locale,
        debounce_ms = config.search.debounce_ms,
        "FlagDeck initialized"
    );

    Ok(FlagDeck::from_config(config))
}

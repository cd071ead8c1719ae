//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it owns config loading, the HTTP boundary to the
//! flag host and the timer abstraction used by debouncing and notifications.
//!
//! ## Config loading
//! ```rust
//! use flagdeck_kernel::config::load_config;
//! use flagdeck_kernel::domain::config::WidgetConfig;
//!
//! let cfg: WidgetConfig = load_config(Some("[search]\ndebounce_ms = 0")).unwrap();
//! assert_eq!(cfg.search.debounce_ms, 0);
//! ```
pub mod config;
pub mod error;
pub mod source;
pub mod time;

pub use flagdeck_domain as domain;

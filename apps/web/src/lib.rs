//! Browser shell of the flag picker: a Dioxus web app over the `flagdeck` services.

mod browser;
mod components;

pub use crate::browser::{BrowserHost, BrowserSleep};
pub use crate::components::App;

use dioxus::prelude::*;

#[derive(Debug)]
pub struct WebApp {
    root_id: String,
}

impl Default for WebApp {
    fn default() -> Self {
        Self { root_id: "main".to_owned() }
    }
}

impl WebApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the element the app mounts into.
    #[must_use]
    pub fn with_root_id(mut self, root_id: impl Into<String>) -> Self {
        self.root_id = root_id.into();
        self
    }

    /// The entry point for launching the app
    pub fn launch(self, root: fn() -> Element) {
        let cfg = dioxus::web::Config::new().rootname(self.root_id);

        LaunchBuilder::web().with_cfg(cfg).launch(root);
    }
}

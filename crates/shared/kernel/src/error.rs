use std::borrow::Cow;

/// Renders an optional context as ` (context)` for error messages.
#[must_use]
#[allow(clippy::ref_option)]
pub fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Errors raised at the flag host boundary.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Transport failure: DNS, connection, CORS, aborted body.
    #[error("Request failed{}: {source}", format_context(.context))]
    Request { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The host answered with a non-success status.
    #[error("Unexpected status {status} for {url}{}", format_context(.context))]
    Status { status: u16, url: String, context: Option<Cow<'static, str>> },

    /// The body could not be decoded into the expected shape.
    #[error("Malformed response{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(source: reqwest::Error) -> Self {
        Self::Request { source, context: None }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(source: serde_json::Error) -> Self {
        Self::Decode { source, context: None }
    }
}

/// Adds `.context()` to results that convert into [`ConfigError`].
pub trait ConfigErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T, E: Into<ConfigError>> ConfigErrorExt<T> for Result<T, E> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|e| match e.into() {
            ConfigError::Config { source, .. } => {
                ConfigError::Config { source, context: Some(context.into()) }
            },
        })
    }
}

/// Adds `.context()` to results that convert into [`SourceError`].
pub trait SourceErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, SourceError>;
}

impl<T, E: Into<SourceError>> SourceErrorExt<T> for Result<T, E> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, SourceError> {
        self.map_err(|e| {
            let mut e = e.into();
            match &mut e {
                SourceError::Request { context: c, .. }
                | SourceError::Status { context: c, .. }
                | SourceError::Decode { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

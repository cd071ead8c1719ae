use flagdeck_kernel::error::{SourceError, format_context};
use std::borrow::Cow;

/// A specialized [`ExportError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The flag image could not be fetched.
    #[error("Export fetch error{}: {source}", format_context(.context))]
    Source { source: SourceError, context: Option<Cow<'static, str>> },
    /// The clipboard rejected the write.
    #[error("Clipboard error{}: {message}", format_context(.context))]
    Clipboard { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The file save could not be triggered.
    #[error("Save error{}: {message}", format_context(.context))]
    Save { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl From<SourceError> for ExportError {
    fn from(source: SourceError) -> Self {
        Self::Source { source, context: None }
    }
}

/// Adds `.context()` to results that convert into [`ExportError`].
pub trait ExportErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ExportError>;
}

impl<T, E: Into<ExportError>> ExportErrorExt<T> for Result<T, E> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ExportError> {
        self.map_err(|e| {
            let mut e = e.into();
            match &mut e {
                ExportError::Source { context: c, .. }
                | ExportError::Clipboard { context: c, .. }
                | ExportError::Save { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_converts_and_takes_context() {
        let fetched: Result<(), SourceError> = Err(SourceError::Status {
            status: 404,
            url: "https://flagcdn.com/zz.svg".to_owned(),
            context: None,
        });
        let err = fetched.context("svg").unwrap_err();

        assert!(matches!(err, ExportError::Source { context: Some(ref c), .. } if c == "svg"));
        assert!(err.to_string().starts_with("Export fetch error (svg): "));
    }

    #[test]
    fn clipboard_error_takes_context() {
        let denied: Result<(), ExportError> =
            Err(ExportError::Clipboard { message: "denied".into(), context: None });

        assert_eq!(denied.context("copy").unwrap_err().to_string(), "Clipboard error (copy): denied");
    }
}

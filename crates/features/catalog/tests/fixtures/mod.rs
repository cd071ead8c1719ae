#![allow(dead_code, unreachable_pub)]

use flagdeck_kernel::domain::directory::CodeDirectory;
use flagdeck_kernel::error::SourceError;
use flagdeck_kernel::source::FlagSource;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// In-memory flag host: answers with a fixed directory or a fixed status.
#[derive(Debug)]
pub struct FakeSource {
    directory: Option<CodeDirectory>,
    status: u16,
    delays: RefCell<VecDeque<Duration>>,
    calls: Cell<usize>,
}

impl FakeSource {
    pub fn ok(directory: CodeDirectory) -> Self {
        Self { directory: Some(directory), status: 200, delays: RefCell::default(), calls: Cell::new(0) }
    }

    pub fn failing(status: u16) -> Self {
        Self { directory: None, status, delays: RefCell::default(), calls: Cell::new(0) }
    }

    /// Per-call response latency, consumed in call order.
    pub fn with_delays(self, delays: impl IntoIterator<Item = Duration>) -> Self {
        self.delays.borrow_mut().extend(delays);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn status_error(&self, url: &str) -> SourceError {
        SourceError::Status { status: self.status, url: url.to_owned(), context: None }
    }
}

impl FlagSource for FakeSource {
    async fn fetch_directory(&self) -> Result<CodeDirectory, SourceError> {
        self.calls.set(self.calls.get() + 1);
        let delay = self.delays.borrow_mut().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.directory.clone().ok_or_else(|| self.status_error("/en/codes.json"))
    }

    async fn fetch_text(&self, url: &str) -> Result<String, SourceError> {
        Err(self.status_error(url))
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, SourceError> {
        Err(self.status_error(url))
    }
}

pub fn europe() -> CodeDirectory {
    [("fr", "France"), ("de", "Germany"), ("ua", "Ukraine"), ("gb", "United Kingdom"), ("ax", "Åland Islands")]
        .into_iter()
        .collect()
}

/// Counts `ERROR` events seen by the subscriber it is attached to.
#[derive(Debug, Clone, Default)]
pub struct ErrorEvents(Arc<AtomicUsize>);

impl ErrorEvents {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorEvents {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

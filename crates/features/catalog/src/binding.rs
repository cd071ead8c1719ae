use crate::loader::{LoadedDirectory, load_directory_reporting};
use crate::render::{CardContainer, render};
use flagdeck_domain::config::FlagHostConfig;
use flagdeck_domain::directory::CodeDirectory;
use flagdeck_kernel::source::FlagSource;
use flagdeck_kernel::time::Sleep;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

/// Issues monotonically increasing tickets; only the newest one is current.
#[derive(Debug, Clone, Default)]
pub struct RenderGate {
    latest: Arc<AtomicU64>,
}

impl RenderGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation, superseding every ticket issued before.
    #[must_use]
    pub fn begin(&self) -> RenderTicket {
        let generation = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
        RenderTicket { generation, latest: Arc::clone(&self.latest) }
    }

    /// Generation of the newest ticket (`0` before the first one).
    #[must_use]
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::Acquire)
    }
}

/// Handle of one refresh request.
#[derive(Debug, Clone)]
pub struct RenderTicket {
    generation: u64,
    latest: Arc<AtomicU64>,
}

impl RenderTicket {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::Acquire) == self.generation
    }
}

/// Directory and term of a refresh that is still the latest one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    directory: CodeDirectory,
    term: String,
    generation: u64,
    degraded: bool,
}

impl Snapshot {
    #[must_use]
    pub const fn directory(&self) -> &CodeDirectory {
        &self.directory
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// `true` when the directory fetch failed and the snapshot holds the empty fallback.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// The term to report as "no match" after rendering `rendered` cards.
    ///
    /// `None` unless the directory loaded and is non-empty, the term is non-empty
    /// and nothing matched. A failed load stays a silently empty grid.
    #[must_use]
    pub fn unmatched_term(&self, rendered: usize) -> Option<&str> {
        let searched = !self.degraded && !self.directory.is_empty() && !self.term.is_empty();
        (searched && rendered == 0).then_some(self.term.as_str())
    }

    /// Rebuilds `container` from this snapshot. See [`render`].
    pub fn render_into<C>(&self, container: &mut C, host: &FlagHostConfig) -> usize
    where
        C: CardContainer + ?Sized,
    {
        render(container, &self.directory, &self.term, host)
    }
}

/// Result of [`SearchBinding::refresh`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refresh {
    /// Still the latest request: render it.
    Apply(Snapshot),
    /// A newer request started meanwhile; the result was dropped.
    Superseded { generation: u64 },
}

#[derive(Debug, Clone, Copy)]
struct Immediate;

impl Sleep for Immediate {
    async fn sleep(&self, _duration: Duration) {}
}

/// Connects a search field to the directory loader and the renderer.
///
/// Every call to [`SearchBinding::refresh`] takes a ticket from the shared
/// [`RenderGate`]. A call whose ticket was superseded, either during the debounce
/// pause or while the directory was in flight, yields [`Refresh::Superseded`], so a
/// slow earlier response can never overwrite the result of a later keystroke.
#[derive(Debug, Clone)]
pub struct SearchBinding<S> {
    source: S,
    host: FlagHostConfig,
    debounce: Duration,
    gate: RenderGate,
}

impl<S: FlagSource> SearchBinding<S> {
    #[must_use]
    pub fn new(source: S, host: FlagHostConfig) -> Self {
        Self { source, host, debounce: Duration::ZERO, gate: RenderGate::new() }
    }

    #[must_use = "The binding must be used to refresh the grid"]
    pub const fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    #[must_use]
    pub const fn host(&self) -> &FlagHostConfig {
        &self.host
    }

    #[must_use]
    pub const fn gate(&self) -> &RenderGate {
        &self.gate
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Refreshes for `term` after the debounce pause.
    pub async fn refresh<Z: Sleep>(&self, term: impl Into<String>, sleeper: &Z) -> Refresh {
        self.run(term.into(), sleeper, self.debounce).await
    }

    /// Refreshes for `term` without debouncing (initial page load).
    pub async fn refresh_now(&self, term: impl Into<String>) -> Refresh {
        self.run(term.into(), &Immediate, Duration::ZERO).await
    }

    async fn run<Z: Sleep>(&self, term: String, sleeper: &Z, debounce: Duration) -> Refresh {
        let ticket = self.gate.begin();
        let generation = ticket.generation();

        if !debounce.is_zero() {
            sleeper.sleep(debounce).await;
            if !ticket.is_current() {
                debug!(generation, "Search superseded while debouncing");
                return Refresh::Superseded { generation };
            }
        }

        let LoadedDirectory { directory, degraded } = load_directory_reporting(&self.source).await;

        if !ticket.is_current() {
            debug!(generation, "Stale directory response dropped");
            return Refresh::Superseded { generation };
        }

        Refresh::Apply(Snapshot { directory, term, generation, degraded })
    }
}

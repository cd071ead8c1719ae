use crate::lifecycle::ToastStep;
use std::borrow::Cow;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

/// Visual state of a toast; maps onto the `toast` / `toast show` CSS classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Inserted but not yet shown, so the CSS transition has a start state.
    Entering,
    Visible,
    /// Fading out; removed after the exit delay.
    Leaving,
}

/// What to say and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: Cow<'static, str>,
    pub kind: ToastKind,
}

impl Notice {
    pub fn success(message: impl Into<Cow<'static, str>>) -> Self {
        Self { message: message.into(), kind: ToastKind::Success }
    }

    pub fn failure(message: impl Into<Cow<'static, str>>) -> Self {
        Self { message: message.into(), kind: ToastKind::Failure }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: Cow<'static, str>,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

impl Toast {
    /// `true` once the toast should carry the `show` class.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.phase == ToastPhase::Visible
    }
}

/// Live toasts, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationCenter {
    toasts: Vec<Toast>,
    next_id: u64,
    max_stack: usize,
}

impl NotificationCenter {
    /// `max_stack == 0` disables the cap.
    #[must_use]
    pub const fn new(max_stack: usize) -> Self {
        Self { toasts: Vec::new(), next_id: 0, max_stack }
    }

    /// Inserts a new toast in the [`ToastPhase::Entering`] phase.
    pub fn push(&mut self, notice: Notice) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);

        self.toasts.push(Toast {
            id,
            message: notice.message,
            kind: notice.kind,
            phase: ToastPhase::Entering,
        });

        if self.max_stack > 0 && self.toasts.len() > self.max_stack {
            let excess = self.toasts.len() - self.max_stack;
            for evicted in self.toasts.drain(..excess) {
                debug!(id = %evicted.id, "Toast evicted by stack cap");
            }
        }

        id
    }

    /// Applies one lifecycle step. Returns `false` when the toast is already gone.
    pub fn apply(&mut self, step: ToastStep) -> bool {
        match step {
            ToastStep::Show(id) => self.set_phase(id, ToastPhase::Visible),
            ToastStep::Hide(id) => self.set_phase(id, ToastPhase::Leaving),
            ToastStep::Remove(id) => self.remove(id),
        }
    }

    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        before != self.toasts.len()
    }

    fn set_phase(&mut self, id: ToastId, phase: ToastPhase) -> bool {
        match self.toasts.iter_mut().find(|toast| toast.id == id) {
            Some(toast) => {
                toast.phase = phase;
                true
            },
            None => false,
        }
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id == id)
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[must_use]
    pub const fn max_stack(&self) -> usize {
        self.max_stack
    }
}

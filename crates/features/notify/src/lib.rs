//! Notification feature slice.
//!
//! A toast is pushed into a [`NotificationCenter`] in the
//! [`ToastPhase::Entering`] phase and then walked through its lifecycle by
//! [`drive_toast`]:
//!
//! ```text
//! push ──enter_delay──▶ Visible ──visible_for──▶ Leaving ──exit_delay──▶ removed
//! ```
//!
//! Every toast runs on its own timers. The center caps how many toasts are
//! stacked at once; pushing beyond the cap evicts the oldest toast, whose pending
//! steps then become no-ops.

mod center;
mod lifecycle;

pub use center::{NotificationCenter, Notice, Toast, ToastId, ToastKind, ToastPhase};
pub use lifecycle::{ToastStep, ToastTimings, drive_toast};

/// Anything that can acknowledge a user action on screen.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice);
    }
}

impl<N: Notifier + ?Sized> Notifier for std::rc::Rc<N> {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice);
    }
}

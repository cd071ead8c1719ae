use crate::center::ToastId;
use flagdeck_domain::config::ToastConfig;
use flagdeck_kernel::time::Sleep;
use std::time::Duration;
use tracing::trace;

/// One transition in a toast's life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStep {
    Show(ToastId),
    Hide(ToastId),
    Remove(ToastId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimings {
    /// Delay between insertion and `show`, lets the CSS transition start.
    pub enter_delay: Duration,
    pub visible_for: Duration,
    /// Delay between hiding and removal, matches the fade-out transition.
    pub exit_delay: Duration,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self::from(&ToastConfig::default())
    }
}

impl From<&ToastConfig> for ToastTimings {
    fn from(config: &ToastConfig) -> Self {
        Self {
            enter_delay: Duration::from_millis(config.enter_delay_ms),
            visible_for: Duration::from_millis(config.visible_ms),
            exit_delay: Duration::from_millis(config.exit_delay_ms),
        }
    }
}

/// Walks toast `id` through show → hide → remove, calling `apply` for each step.
///
/// `visible_for` is measured from insertion, as the show and hide timers are
/// armed together: the toast is hidden `visible_for` after it was pushed, not
/// after it became visible.
pub async fn drive_toast<Z, F>(id: ToastId, timings: ToastTimings, sleeper: &Z, mut apply: F)
where
    Z: Sleep,
    F: FnMut(ToastStep),
{
    sleeper.sleep(timings.enter_delay).await;
    trace!(%id, "Toast shown");
    apply(ToastStep::Show(id));

    sleeper.sleep(timings.visible_for.saturating_sub(timings.enter_delay)).await;
    trace!(%id, "Toast hidden");
    apply(ToastStep::Hide(id));

    sleeper.sleep(timings.exit_delay).await;
    trace!(%id, "Toast removed");
    apply(ToastStep::Remove(id));
}

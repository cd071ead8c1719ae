use crate::browser::BrowserSleep;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use flagdeck::notify::{
    NotificationCenter, Notice, Notifier, Toast, ToastKind, ToastTimings, drive_toast,
};

/// [`Notifier`] backed by the page's notification center.
///
/// Each toast runs its own lifecycle on a root-scoped task, so it outlives the
/// card that triggered it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Toaster {
    center: Signal<NotificationCenter>,
    timings: ToastTimings,
}

impl Toaster {
    pub(crate) const fn new(center: Signal<NotificationCenter>, timings: ToastTimings) -> Self {
        Self { center, timings }
    }
}

impl Notifier for Toaster {
    fn notify(&self, notice: Notice) {
        let (mut center, timings) = (self.center, self.timings);
        let id = center.write().push(notice);

        spawn_forever(async move {
            drive_toast(id, timings, &BrowserSleep, |step| {
                center.write().apply(step);
            })
            .await;
        });
    }
}

fn toast_class(toast: &Toast) -> &'static str {
    match (toast.kind, toast.is_shown()) {
        (ToastKind::Success, false) => "toast",
        (ToastKind::Success, true) => "toast show",
        (ToastKind::Failure, false) => "toast failure",
        (ToastKind::Failure, true) => "toast failure show",
    }
}

#[component]
pub(crate) fn ToastStack(center: Signal<NotificationCenter>) -> Element {
    rsx! {
        div { class: "toast-stack", "aria-live": "polite",
            for toast in center.read().toasts() {
                div { key: "{toast.id}", class: toast_class(toast), role: "status", "{toast.message}" }
            }
        }
    }
}

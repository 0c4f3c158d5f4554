//! Toast notification service.
//!
//! DESIGN
//! ======
//! An owned value provided as reactive context by the application root, not
//! a module-global list: tests construct isolated instances and nothing
//! leaks between them.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use leptos::prelude::*;

/// How long a toast stays visible before auto-dismissal.
pub const AUTO_DISMISS_MS: u32 = 5_000;

/// Severity of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
    Info,
    Warning,
}

impl Level {
    /// CSS modifier used by the toast list.
    pub fn css_class(self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Error => "error",
            Level::Info => "info",
            Level::Warning => "warning",
        }
    }
}

/// A single toast entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub level: Level,
}

/// Ordered toast list with monotonically increasing ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notifications {
    items: Vec<Notification>,
    next_id: u32,
}

impl Notifications {
    /// Append a toast and return its id.
    pub fn push(&mut self, level: Level, message: impl Into<String>) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            message: message.into(),
            level,
        });
        id
    }

    /// Remove the toast with `id`. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|notification| notification.id != id);
    }

    /// Current toasts, oldest first.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// Push a toast onto the shared list and schedule its auto-dismissal.
pub fn notify(notifications: RwSignal<Notifications>, level: Level, message: impl Into<String>) {
    let message = message.into();
    let id = notifications
        .try_update(|list| list.push(level, message))
        .unwrap_or_default();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(AUTO_DISMISS_MS)))
            .await;
        notifications.update(|list| list.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

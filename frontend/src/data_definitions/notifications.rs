//! Dismissible notifications, owned by the app root and shared by context.

use common::search_panel::Feedback;
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct Notifications {
    items: Signal<Vec<Notification>>,
    next_id: Signal<u64>,
}

impl Notifications {
    pub fn new(items: Signal<Vec<Notification>>, next_id: Signal<u64>) -> Self {
        Self { items, next_id }
    }

    pub fn items(&self) -> ReadSignal<Vec<Notification>> {
        self.items.into()
    }

    pub fn push_info(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Info, message.into());
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Error, message.into());
    }

    pub fn push_feedback(&mut self, feedback: Feedback) {
        match feedback {
            Feedback::Info(message) => self.push_info(message),
            Feedback::Error(message) => self.push_error(message),
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.write().retain(|n| n.id != id);
    }

    fn push(&mut self, level: NotificationLevel, message: String) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.items.write().push(Notification { id, level, message });
    }
}

/// Provide a fresh notification list to everything below the caller.
pub fn use_notifications_provider() -> Notifications {
    let items = use_signal(Vec::new);
    let next_id = use_signal(|| 0_u64);
    use_context_provider(move || Notifications::new(items, next_id))
}

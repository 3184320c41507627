//! Toast-style notifications shown in the corner of the page.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;

/// How long a notification stays on screen
const DISMISS_AFTER_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationCategory {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub category: NotificationCategory,
    pub message: String,
}

/// Sink for user-facing notifications
pub trait Notifier {
    fn notify(&self, category: NotificationCategory, message: String);
}

/// Сервис уведомлений, доступный через context
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    /// Adds a notification without scheduling its removal
    pub fn push(&self, category: NotificationCategory, message: String) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| {
            items.push(Notification {
                id,
                category,
                message,
            })
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    pub fn items(&self) -> Vec<Notification> {
        self.items.get()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationService {
    fn notify(&self, category: NotificationCategory, message: String) {
        match category {
            NotificationCategory::Error => log::warn!("notify: {}", message),
            _ => log::info!("notify: {}", message),
        }
        let id = self.push(category, message);
        let svc = *self;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            svc.dismiss(id);
        });
    }
}

/// Renders active notifications from the `NotificationService` in context
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_context::<NotificationService>().expect("NotificationService not found in context");

    view! {
        <div class="notification-host">
            <For
                each=move || svc.items()
                key=|n| n.id
                children=move |n: Notification| {
                    let intent = match n.category {
                        NotificationCategory::Success => MessageBarIntent::Success,
                        NotificationCategory::Error => MessageBarIntent::Error,
                        NotificationCategory::Info => MessageBarIntent::Info,
                    };
                    let id = n.id;
                    view! {
                        <div class="notification-host__item" on:click=move |_| svc.dismiss(id)>
                            <MessageBar intent=intent>
                                <span>{n.message}</span>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let svc = NotificationService::new();
        let first = svc.push(NotificationCategory::Success, "Saved".to_string());
        let second = svc.push(NotificationCategory::Error, "Failed".to_string());
        assert_ne!(first, second);

        svc.dismiss(first);
        let remaining = svc.items.get_untracked();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].category, NotificationCategory::Error);
    }
}

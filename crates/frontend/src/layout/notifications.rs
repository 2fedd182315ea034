//! Transient toast notifications.
//!
//! Each toast stays visible for the configured lifetime, then loses its
//! `show` class and is removed once the fade has played.

use crate::shared::config::NotificationConfig;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    pub fn alert_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "alert-success",
            NotificationKind::Error => "alert-danger",
            NotificationKind::Info => "alert-info",
            NotificationKind::Warning => "alert-warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub visible: bool,
}

/// Ordered stack of toasts, oldest first
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn push(&mut self, kind: NotificationKind, message: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            kind,
            message,
            visible: true,
        });
        id
    }

    /// Drop the `show` state so the fade-out plays
    pub fn fade(&mut self, id: u64) {
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
            item.visible = false;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// Reactive handle on the toast stack, shared through the app context
#[derive(Clone, Copy)]
pub struct NotificationCenter {
    queue: RwSignal<NotificationQueue>,
    lifetime_ms: u32,
    fade_ms: u32,
}

impl NotificationCenter {
    pub fn new(config: NotificationConfig) -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
            lifetime_ms: config.lifetime_ms,
            fade_ms: config.fade_ms,
        }
    }

    pub fn show(&self, kind: NotificationKind, message: String) {
        let Some(id) = self.queue.try_update(|q| q.push(kind, message)) else {
            return;
        };

        let queue = self.queue;
        let lifetime_ms = self.lifetime_ms;
        let fade_ms = self.fade_ms;
        spawn_local(async move {
            TimeoutFuture::new(lifetime_ms).await;
            queue.try_update(|q| q.fade(id));
            TimeoutFuture::new(fade_ms).await;
            queue.try_update(|q| q.remove(id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.remove(id));
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let center = use_context::<NotificationCenter>().expect("NotificationCenter not provided");
    let items = move || center.queue.with(|q| q.items().to_vec());

    view! {
        <div class="toast-stack">
            <For
                each=items
                key=|n| (n.id, n.visible)
                children=move |n| {
                    let id = n.id;
                    let class = format!(
                        "alert {} alert-dismissible fade{}",
                        n.kind.alert_class(),
                        if n.visible { " show" } else { "" },
                    );
                    view! {
                        <div class=class role="alert">
                            <span>{n.message}</span>
                            <button
                                type="button"
                                class="btn-close"
                                on:click=move |_| center.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

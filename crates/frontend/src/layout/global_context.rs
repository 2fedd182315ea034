use crate::domain::orders::polling::NewOrdersWatcher;
use crate::layout::notifications::NotificationCenter;
use crate::layout::sidebar_state::{viewport_width, SidebarState};
use crate::shared::config::AdminConfig;
use leptos::prelude::*;

/// App-wide state shared through context
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub sidebar: RwSignal<SidebarState>,
    pub new_orders: RwSignal<NewOrdersWatcher>,
    pub notifications: NotificationCenter,
    pub config: StoredValue<AdminConfig>,
}

impl AppGlobalContext {
    pub fn new(config: AdminConfig) -> Self {
        let breakpoint = config.layout.mobile_breakpoint_px;
        let width = viewport_width().unwrap_or(breakpoint);
        Self {
            sidebar: RwSignal::new(SidebarState::for_viewport(width, breakpoint)),
            new_orders: RwSignal::new(NewOrdersWatcher::default()),
            notifications: NotificationCenter::new(config.notifications),
            config: StoredValue::new(config),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar.update(|s| s.toggle());
    }

    /// Re-evaluate the sidebar for the current viewport width
    pub fn handle_mobile_view(&self) {
        if let Some(width) = viewport_width() {
            self.sidebar.update(|s| s.handle_mobile_view(width));
        }
    }
}

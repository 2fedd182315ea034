use super::api::OrdersApi;
use crate::layout::notifications::NotificationKind;
use crate::shared::host::Host;
use crate::shared::view_store::ViewStore;
use gloo_timers::callback::Interval;

/// Tracks the new-order count reported by the backend and the header badge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewOrdersWatcher {
    last_count: i64,
    badge_count: Option<i64>,
}

impl NewOrdersWatcher {
    /// Record a polled count
    ///
    /// Returns the count to announce when it grew since the previous poll.
    /// A count of zero leaves the badge and the remembered count untouched.
    pub fn observe(&mut self, count: i64) -> Option<i64> {
        if count <= 0 {
            return None;
        }
        self.badge_count = Some(count);
        let grew = count > self.last_count;
        self.last_count = count;
        grew.then_some(count)
    }

    /// Last positive count seen, `0` before the first one
    pub fn last_count(&self) -> i64 {
        self.last_count
    }

    pub fn badge_visible(&self) -> bool {
        self.badge_count.is_some()
    }

    pub fn badge_text(&self) -> String {
        self.badge_count.map(|c| c.to_string()).unwrap_or_default()
    }
}

/// One poll of `/api/orders/new/count`; failures are logged and ignored
pub async fn check_new_orders<A, H, S>(api: &A, host: &H, watcher: &S)
where
    A: OrdersApi,
    H: Host,
    S: ViewStore<NewOrdersWatcher>,
{
    match api.new_orders_count().await {
        Ok(response) if response.success == Some(false) => {
            log::debug!("New-order count refused by the server");
        }
        Ok(response) => {
            if let Some(Some(count)) = watcher.mutate(|w| w.observe(response.count)) {
                log::info!("{} new orders", count);
                host.notify(
                    NotificationKind::Info,
                    format!("You have {} new orders", count),
                );
            }
        }
        Err(e) => log::error!("Failed to poll new orders: {}", e),
    }
}

/// Periodic new-order check; stops when dropped or cancelled
pub struct NewOrdersPoller {
    interval: Option<Interval>,
}

impl NewOrdersPoller {
    pub fn start<A, H, S>(api: A, host: H, watcher: S, interval_ms: u32) -> Self
    where
        A: OrdersApi,
        H: Host,
        S: ViewStore<NewOrdersWatcher>,
    {
        log::info!("Polling new orders every {} ms", interval_ms);
        let interval = Interval::new(interval_ms, move || {
            let (api, task_host, watcher) = (api.clone(), host.clone(), watcher.clone());
            host.spawn(Box::pin(async move {
                check_new_orders(&api, &task_host, &watcher).await;
            }));
        });
        Self {
            interval: Some(interval),
        }
    }

    pub fn cancel(&mut self) {
        // Dropping the interval clears it
        if self.interval.take().is_some() {
            log::debug!("New-order polling stopped");
        }
    }
}

impl Drop for NewOrdersPoller {
    fn drop(&mut self) {
        self.cancel();
    }
}

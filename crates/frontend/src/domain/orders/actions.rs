//! Per-order mutations issued from the table: status change, delete and the
//! details lookup.
//!
//! Every mutation claims the order in [`OrdersPageState::in_flight`] for as long
//! as its request is pending. A second mutation for the same order is dropped
//! until the first resolves.

use super::api::OrdersApi;
use super::state::{OrdersPageState, Trigger};
use crate::layout::notifications::NotificationKind;
use crate::shared::config::AnimationConfig;
use crate::shared::error::ApiError;
use crate::shared::host::Host;
use crate::shared::view_store::ViewStore;
use contracts::domain::orders::{MutationResponse, OrderId, OrderStats};
use contracts::enums::OrderStatus;

pub const UNREACHABLE_MESSAGE: &str = "Failed to reach the server";

/// Treat `success: false` as an error carrying the server message
fn ensure_success(response: MutationResponse) -> Result<MutationResponse, ApiError> {
    if response.success {
        Ok(response)
    } else {
        Err(ApiError::Rejected(response.error))
    }
}

/// Holds an order's in-flight slot and its trigger's busy state until dropped
struct MutationGuard<S: ViewStore<OrdersPageState>> {
    state: S,
    order_id: OrderId,
    trigger: Option<Trigger>,
}

impl<S: ViewStore<OrdersPageState>> MutationGuard<S> {
    fn acquire(state: &S, order_id: OrderId, trigger: Option<Trigger>) -> Option<Self> {
        let claimed = state
            .mutate(|s| s.try_begin_mutation(order_id, trigger))
            .unwrap_or(false);
        claimed.then(|| Self {
            state: state.clone(),
            order_id,
            trigger,
        })
    }
}

impl<S: ViewStore<OrdersPageState>> Drop for MutationGuard<S> {
    fn drop(&mut self) {
        let (order_id, trigger) = (self.order_id, self.trigger);
        self.state.mutate(|s| s.end_mutation(order_id, trigger));
    }
}

#[derive(Clone)]
pub struct OrderActions<A, H, S> {
    api: A,
    host: H,
    state: S,
    animation: AnimationConfig,
}

impl<A, H, S> OrderActions<A, H, S>
where
    A: OrdersApi,
    H: Host,
    S: ViewStore<OrdersPageState>,
{
    pub fn new(api: A, host: H, state: S, animation: AnimationConfig) -> Self {
        Self {
            api,
            host,
            state,
            animation,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Ask for confirmation, then change the status of one order
    pub async fn update_order_status(
        &self,
        order_id: OrderId,
        new_status: OrderStatus,
        trigger: Option<Trigger>,
    ) {
        let question = format!("Change the order status to \"{}\"?", new_status.label());
        if !self.host.confirm(&question) {
            log::debug!("Status change of order {} declined", order_id);
            return;
        }
        self.submit_status(order_id, new_status, trigger).await;
    }

    async fn submit_status(
        &self,
        order_id: OrderId,
        new_status: OrderStatus,
        trigger: Option<Trigger>,
    ) {
        let Some(_guard) = MutationGuard::acquire(&self.state, order_id, trigger) else {
            log::debug!("Order {} already has a pending change, skipping", order_id);
            return;
        };

        let result = self
            .api
            .update_status(order_id, new_status)
            .await
            .and_then(ensure_success);

        match result {
            Ok(response) => {
                let status = response.new_status.unwrap_or(new_status);
                self.host
                    .notify(NotificationKind::Success, "Order status updated".to_string());
                self.state.mutate(|s| {
                    if !s.set_status(order_id, status) {
                        log::debug!("Order {} is not on the page", order_id);
                    }
                });
                if let Some(stats) = response.stats {
                    self.animate_stats(&stats);
                }
            }
            Err(ApiError::Rejected(error)) => {
                let message = format!("Error: {}", error.as_deref().unwrap_or("unknown"));
                self.host.notify(NotificationKind::Error, message);
            }
            Err(e) => {
                log::error!("Failed to update order {}: {}", order_id, e);
                self.host
                    .notify(NotificationKind::Error, UNREACHABLE_MESSAGE.to_string());
            }
        }
    }

    /// Ask for confirmation, delete the order and fade its row out
    pub async fn delete_order(&self, order_id: OrderId, trigger: Option<Trigger>) {
        if !self.host.confirm("Delete this order permanently?") {
            log::debug!("Deletion of order {} declined", order_id);
            return;
        }

        let Some(guard) = MutationGuard::acquire(&self.state, order_id, trigger) else {
            log::debug!("Order {} already has a pending change, skipping", order_id);
            return;
        };

        let result = self
            .api
            .delete_order(order_id)
            .await
            .and_then(ensure_success);

        match result {
            Ok(response) => {
                drop(guard);
                self.host
                    .notify(NotificationKind::Success, "Order deleted".to_string());
                if let Some(stats) = response.stats {
                    self.animate_stats(&stats);
                }

                let fading = self
                    .state
                    .mutate(|s| s.begin_row_removal(order_id))
                    .unwrap_or(false);
                if fading {
                    self.host.sleep(self.animation.row_fade_ms).await;
                    self.state.mutate(|s| s.remove_row(order_id));
                } else {
                    log::debug!("Deleted order {} had no row", order_id);
                }
            }
            Err(ApiError::Rejected(error)) => {
                log::warn!("Server refused to delete order {}: {:?}", order_id, error);
                self.host.notify(
                    NotificationKind::Error,
                    "Error while deleting the order".to_string(),
                );
            }
            Err(e) => {
                log::error!("Failed to delete order {}: {}", order_id, e);
                self.host
                    .notify(NotificationKind::Error, UNREACHABLE_MESSAGE.to_string());
            }
        }
    }

    /// Fetch an order and open it in the details modal
    pub async fn show_order_details(&self, order_id: OrderId) {
        match self.api.order_details(order_id).await {
            Ok(response) => match (response.success, response.order) {
                (true, Some(order)) => {
                    self.state.mutate(|s| s.open_details(order));
                }
                _ => log::debug!(
                    "No details for order {}: {}",
                    order_id,
                    response.error.as_deref().unwrap_or("unknown")
                ),
            },
            Err(e) => {
                log::error!("Failed to load order {}: {}", order_id, e);
                self.host.notify(
                    NotificationKind::Error,
                    "Failed to load order details".to_string(),
                );
            }
        }
    }

    /// Initial counters, shown without animation
    pub async fn load_stats(&self) {
        match self.api.stats().await {
            Ok(stats) => {
                self.state.mutate(|s| s.stats.set_immediately(&stats));
            }
            Err(e) => log::error!("Failed to load order stats: {}", e),
        }
    }

    fn animate_stats(&self, stats: &OrderStats) {
        let AnimationConfig {
            counter_duration_ms,
            counter_frame_ms,
            ..
        } = self.animation;
        self.state
            .mutate(|s| s.stats.animate_to(stats, counter_duration_ms, counter_frame_ms));
    }
}

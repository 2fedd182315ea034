//! Operations on the checked rows of the table.

use super::actions::OrderActions;
use super::api::OrdersApi;
use super::state::OrdersPageState;
use crate::shared::host::Host;
use crate::shared::view_store::ViewStore;
use contracts::domain::orders::OrderId;
use contracts::enums::OrderStatus;

const NOTHING_SELECTED: &str = "No orders selected";

impl<A, H, S> OrderActions<A, H, S>
where
    A: OrdersApi,
    H: Host,
    S: ViewStore<OrdersPageState>,
{
    fn selected_ids(&self) -> Vec<OrderId> {
        self.state()
            .inspect(|s| s.selected_in_table_order())
            .unwrap_or_default()
    }

    /// Change the status of every checked order after one confirmation
    ///
    /// Each order then goes through the single-order update, its own
    /// confirmation included, as a separate task. The updates are neither
    /// awaited nor summarised. Returns how many updates were started.
    pub fn bulk_update_status(&self, status: OrderStatus) -> usize {
        let ids = self.selected_ids();
        if ids.is_empty() {
            self.host().warn(NOTHING_SELECTED, "Select orders to update");
            return 0;
        }

        let question = format!(
            "Update {} orders\n\nChange the status of the selected orders to \"{}\"?",
            ids.len(),
            status.label()
        );
        if !self.host().confirm(&question) {
            log::debug!("Bulk update of {} orders declined", ids.len());
            return 0;
        }

        log::info!("Bulk update of {} orders to {}", ids.len(), status);
        for &id in &ids {
            let actions = self.clone();
            self.host().spawn(Box::pin(async move {
                actions.update_order_status(id, status, None).await;
            }));
        }
        ids.len()
    }

    /// Export is not wired to a backend endpoint yet; it only logs the ids
    pub fn export_selected_orders(&self) -> Vec<OrderId> {
        let ids = self.selected_ids();
        if ids.is_empty() {
            self.host().warn(NOTHING_SELECTED, "Select orders to export");
        } else {
            log::info!("Export requested for orders {:?}", ids);
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::orders::actions::OrderActions;
    use crate::domain::orders::state::OrdersPageState;
    use crate::domain::orders::test_support::{
        accepted, order, ApiCall, FakeOrdersApi, RecordingHost,
    };
    use crate::shared::config::AnimationConfig;
    use contracts::domain::orders::OrderId;
    use contracts::enums::OrderStatus;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Actions = OrderActions<FakeOrdersApi, RecordingHost, Rc<RefCell<OrdersPageState>>>;

    fn setup(host: RecordingHost) -> (Actions, FakeOrdersApi) {
        let state = Rc::new(RefCell::new(OrdersPageState::new(vec![
            order(1, "Ahmed Ali", "Abaya", OrderStatus::New),
            order(2, "Sara Hassan", "Ring", OrderStatus::New),
            order(3, "Omar", "Perfume", OrderStatus::Processing),
        ])));
        let api = FakeOrdersApi::default();
        (
            OrderActions::new(api.clone(), host, state, AnimationConfig::default()),
            api,
        )
    }

    #[tokio::test]
    async fn test_empty_selection_warns_once() {
        let (actions, api) = setup(RecordingHost::default());

        assert_eq!(actions.bulk_update_status(OrderStatus::Completed), 0);
        assert!(actions.export_selected_orders().is_empty());

        assert_eq!(
            actions.host().warnings(),
            vec![
                (
                    "No orders selected".to_string(),
                    "Select orders to update".to_string()
                ),
                (
                    "No orders selected".to_string(),
                    "Select orders to export".to_string()
                ),
            ]
        );
        assert!(actions.host().confirms().is_empty());
        actions.host().run_spawned().await;
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_bulk_update_runs_each_single_update() {
        let (actions, api) = setup(RecordingHost::default());
        api.on_update(Ok(accepted(None, None)));
        {
            let mut state = actions.state().borrow_mut();
            state.toggle_selection(OrderId(3), true);
            state.toggle_selection(OrderId(1), true);
        }

        assert_eq!(actions.bulk_update_status(OrderStatus::Cancelled), 2);
        assert_eq!(
            actions.host().confirms(),
            vec![
                "Update 2 orders\n\nChange the status of the selected orders to \"Cancelled\"?"
                    .to_string()
            ]
        );
        assert_eq!(actions.host().pending_tasks(), 2);
        assert!(api.calls().is_empty());

        actions.host().run_spawned().await;

        let single = "Change the order status to \"Cancelled\"?".to_string();
        assert_eq!(actions.host().confirms().len(), 3);
        assert_eq!(actions.host().confirms()[1..], [single.clone(), single]);
        assert_eq!(
            api.calls(),
            vec![
                ApiCall::UpdateStatus(OrderId(1), OrderStatus::Cancelled),
                ApiCall::UpdateStatus(OrderId(3), OrderStatus::Cancelled),
            ]
        );
        let state = actions.state().borrow();
        assert_eq!(state.status_of(OrderId(1)), Some(OrderStatus::Cancelled));
        assert_eq!(state.status_of(OrderId(2)), Some(OrderStatus::New));
        assert_eq!(state.status_of(OrderId(3)), Some(OrderStatus::Cancelled));
    }

    #[tokio::test]
    async fn test_bulk_update_skips_orders_declined_one_by_one() {
        // Batch accepted, first order accepted, second order declined
        let (actions, api) = setup(RecordingHost::answering(&[true, true, false]));
        actions.state().borrow_mut().select_all_orders();

        assert_eq!(actions.bulk_update_status(OrderStatus::Completed), 3);
        actions.host().run_spawned().await;

        assert_eq!(actions.host().confirms().len(), 4);
        assert_eq!(
            api.calls(),
            vec![
                ApiCall::UpdateStatus(OrderId(1), OrderStatus::Completed),
                ApiCall::UpdateStatus(OrderId(3), OrderStatus::Completed),
            ]
        );
        let state = actions.state().borrow();
        assert_eq!(state.status_of(OrderId(2)), Some(OrderStatus::New));
    }

    #[tokio::test]
    async fn test_declined_bulk_update_spawns_nothing() {
        let (actions, api) = setup(RecordingHost::declining());
        actions.state().borrow_mut().select_all_orders();

        assert_eq!(actions.bulk_update_status(OrderStatus::Completed), 0);
        assert_eq!(actions.host().confirms().len(), 1);
        assert_eq!(actions.host().pending_tasks(), 0);
        actions.host().run_spawned().await;
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_export_returns_selection_in_table_order() {
        let (actions, api) = setup(RecordingHost::default());
        actions.state().borrow_mut().select_all_orders();
        actions.state().borrow_mut().toggle_selection(OrderId(2), false);

        assert_eq!(actions.export_selected_orders(), vec![OrderId(1), OrderId(3)]);
        assert!(actions.host().warnings().is_empty());
        assert!(api.calls().is_empty());
    }
}

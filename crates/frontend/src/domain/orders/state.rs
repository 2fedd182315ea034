use super::stats::StatsBoard;
use crate::shared::date_utils::format_created_at;
use contracts::domain::orders::{Order, OrderId};
use contracts::enums::OrderStatus;
use std::collections::HashSet;

/// What a trigger button does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerAction {
    Status(OrderStatus),
    Delete,
}

/// A row button that issued a mutation; rendered busy until it resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Trigger {
    pub order_id: OrderId,
    pub action: TriggerAction,
}

impl Trigger {
    pub fn status(order_id: OrderId, status: OrderStatus) -> Self {
        Self {
            order_id,
            action: TriggerAction::Status(status),
        }
    }

    pub fn delete(order_id: OrderId) -> Self {
        Self {
            order_id,
            action: TriggerAction::Delete,
        }
    }

    /// Value of the button's `data-status` attribute
    pub fn data_status(&self) -> &'static str {
        match self.action {
            TriggerAction::Status(status) => status.code(),
            TriggerAction::Delete => "delete",
        }
    }
}

/// Everything the orders page renders
#[derive(Debug, Clone, Default)]
pub struct OrdersPageState {
    pub rows: Vec<Order>,
    pub search_query: String,
    pub selected_ids: HashSet<OrderId>,
    pub busy_triggers: HashSet<Trigger>,
    pub in_flight: HashSet<OrderId>,
    pub fading_rows: HashSet<OrderId>,
    pub details: Option<Order>,
    pub stats: StatsBoard,
}

/// Full text of a row as it is displayed, lower-cased
pub fn row_text(order: &Order) -> String {
    [
        order.id.to_string(),
        order.name.clone(),
        order.phone.clone().unwrap_or_default(),
        order.product.clone(),
        order.quantity.clone(),
        order.price.clone().unwrap_or_default(),
        order.status.label().to_string(),
        format_created_at(&order.created_at),
    ]
    .join(" ")
    .to_lowercase()
}

/// Case-insensitive substring match; an empty query matches everything
pub fn row_matches(order: &Order, query: &str) -> bool {
    row_text(order).contains(&query.to_lowercase())
}

impl OrdersPageState {
    pub fn new(rows: Vec<Order>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn row(&self, id: OrderId) -> Option<&Order> {
        self.rows.iter().find(|o| o.id == id)
    }

    // Search

    pub fn filter_orders(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    pub fn is_row_visible(&self, id: OrderId) -> bool {
        self.row(id)
            .map(|order| row_matches(order, &self.search_query))
            .unwrap_or(false)
    }

    pub fn visible_ids(&self) -> Vec<OrderId> {
        self.rows
            .iter()
            .filter(|o| row_matches(o, &self.search_query))
            .map(|o| o.id)
            .collect()
    }

    // Row mutations

    /// Re-render the status badge of a row; false when the row is absent
    pub fn set_status(&mut self, id: OrderId, status: OrderStatus) -> bool {
        match self.rows.iter_mut().find(|o| o.id == id) {
            Some(order) => {
                order.status = status;
                true
            }
            None => false,
        }
    }

    pub fn status_of(&self, id: OrderId) -> Option<OrderStatus> {
        self.row(id).map(|o| o.status)
    }

    /// Start fading a row out; false when there is no such row
    pub fn begin_row_removal(&mut self, id: OrderId) -> bool {
        if self.row(id).is_some() {
            self.fading_rows.insert(id);
            true
        } else {
            false
        }
    }

    pub fn is_fading(&self, id: OrderId) -> bool {
        self.fading_rows.contains(&id)
    }

    pub fn remove_row(&mut self, id: OrderId) -> Option<Order> {
        self.fading_rows.remove(&id);
        self.selected_ids.remove(&id);
        let pos = self.rows.iter().position(|o| o.id == id)?;
        Some(self.rows.remove(pos))
    }

    // Selection

    pub fn toggle_selection(&mut self, id: OrderId, checked: bool) {
        if checked {
            self.selected_ids.insert(id);
        } else {
            self.selected_ids.remove(&id);
        }
    }

    pub fn select_all_orders(&mut self) {
        self.selected_ids = self.rows.iter().map(|o| o.id).collect();
    }

    pub fn deselect_all_orders(&mut self) {
        self.selected_ids.clear();
    }

    pub fn is_selected(&self, id: OrderId) -> bool {
        self.selected_ids.contains(&id)
    }

    /// Checked ids in table order
    pub fn selected_in_table_order(&self) -> Vec<OrderId> {
        self.rows
            .iter()
            .map(|o| o.id)
            .filter(|id| self.selected_ids.contains(id))
            .collect()
    }

    // Busy triggers and in-flight mutations

    /// Claim the order for one mutation; false when one is already running
    pub fn try_begin_mutation(&mut self, id: OrderId, trigger: Option<Trigger>) -> bool {
        if !self.in_flight.insert(id) {
            return false;
        }
        if let Some(trigger) = trigger {
            self.busy_triggers.insert(trigger);
        }
        true
    }

    pub fn end_mutation(&mut self, id: OrderId, trigger: Option<Trigger>) {
        self.in_flight.remove(&id);
        if let Some(trigger) = trigger {
            self.busy_triggers.remove(&trigger);
        }
    }

    pub fn is_busy(&self, trigger: &Trigger) -> bool {
        self.busy_triggers.contains(trigger)
    }

    // Details modal

    pub fn open_details(&mut self, order: Order) {
        self.details = Some(order);
    }

    pub fn close_details(&mut self) {
        self.details = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::orders::test_support::order;

    fn sample_state() -> OrdersPageState {
        OrdersPageState::new(vec![
            order(1, "Ahmed Ali", "Abaya", OrderStatus::New),
            order(2, "Sara Hassan", "Ring", OrderStatus::Processing),
            order(3, "AHMED Saleh", "Scarf", OrderStatus::Completed),
            order(4, "Omar", "Perfume", OrderStatus::New),
        ])
    }

    #[test]
    fn test_trigger_data_status() {
        assert_eq!(
            Trigger::status(OrderId(5), OrderStatus::Processing).data_status(),
            "processing"
        );
        assert_eq!(Trigger::delete(OrderId(5)).data_status(), "delete");
    }

    #[test]
    fn test_filter_hides_non_matching_rows() {
        let mut state = sample_state();
        state.filter_orders("ahmed");
        assert_eq!(state.visible_ids(), vec![OrderId(1), OrderId(3)]);
        assert!(!state.is_row_visible(OrderId(2)));

        state.filter_orders("");
        assert_eq!(state.visible_ids().len(), 4);
    }

    #[test]
    fn test_filter_matches_any_displayed_cell() {
        let mut state = sample_state();
        state.filter_orders("PROCESSING");
        assert_eq!(state.visible_ids(), vec![OrderId(2)]);

        state.filter_orders("perf");
        assert_eq!(state.visible_ids(), vec![OrderId(4)]);

        state.filter_orders("no such text");
        assert!(state.visible_ids().is_empty());
    }

    #[test]
    fn test_set_status_reports_missing_row() {
        let mut state = sample_state();
        assert!(state.set_status(OrderId(2), OrderStatus::Cancelled));
        assert_eq!(state.status_of(OrderId(2)), Some(OrderStatus::Cancelled));
        assert!(!state.set_status(OrderId(99), OrderStatus::Cancelled));
    }

    #[test]
    fn test_select_all_includes_filtered_rows() {
        let mut state = sample_state();
        state.filter_orders("sara");
        state.select_all_orders();
        assert_eq!(state.selected_ids.len(), 4);

        state.deselect_all_orders();
        assert!(state.selected_in_table_order().is_empty());

        state.toggle_selection(OrderId(4), true);
        state.toggle_selection(OrderId(1), true);
        state.toggle_selection(OrderId(1), false);
        state.toggle_selection(OrderId(2), true);
        assert_eq!(state.selected_in_table_order(), vec![OrderId(2), OrderId(4)]);
    }

    #[test]
    fn test_row_removal() {
        let mut state = sample_state();
        state.toggle_selection(OrderId(3), true);

        assert!(state.begin_row_removal(OrderId(3)));
        assert!(state.is_fading(OrderId(3)));
        assert!(state.remove_row(OrderId(3)).is_some());
        assert!(!state.is_fading(OrderId(3)));
        assert!(!state.is_selected(OrderId(3)));
        assert_eq!(state.rows.len(), 3);

        assert!(!state.begin_row_removal(OrderId(42)));
        assert!(state.remove_row(OrderId(42)).is_none());
        assert_eq!(state.rows.len(), 3);
    }

    #[test]
    fn test_second_mutation_for_same_order_is_refused() {
        let mut state = sample_state();
        let trigger = Trigger::delete(OrderId(1));

        assert!(state.try_begin_mutation(OrderId(1), Some(trigger)));
        assert!(state.is_busy(&trigger));
        assert!(!state.try_begin_mutation(OrderId(1), None));
        assert!(state.try_begin_mutation(OrderId(2), None));

        state.end_mutation(OrderId(1), Some(trigger));
        assert!(!state.is_busy(&trigger));
        assert!(state.try_begin_mutation(OrderId(1), None));
    }
}

//! In-memory doubles for controller tests.

use super::api::OrdersApi;
use crate::layout::notifications::NotificationKind;
use crate::shared::error::ApiError;
use crate::shared::host::{Host, LocalTask};
use contracts::domain::orders::{
    MutationResponse, NewOrdersCountResponse, Order, OrderDetailsResponse, OrderId, OrderStats,
};
use contracts::enums::OrderStatus;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

pub fn order(id: i64, name: &str, product: &str, status: OrderStatus) -> Order {
    Order {
        id: OrderId(id),
        status,
        name: name.to_string(),
        phone: Some(format!("05500000{:02}", id)),
        email: None,
        product: product.to_string(),
        quantity: "1".to_string(),
        price: Some("150".to_string()),
        created_at: "2025-01-14 10:05:00".to_string(),
        notes: None,
        category: None,
        address: None,
        size: None,
    }
}

pub fn stats(total: i64, new: i64, completed: i64, today: i64) -> OrderStats {
    OrderStats {
        total_orders: Some(total),
        new_orders: Some(new),
        completed_orders: Some(completed),
        today_orders: Some(today),
    }
}

pub fn accepted(new_status: Option<OrderStatus>, stats: Option<OrderStats>) -> MutationResponse {
    MutationResponse {
        success: true,
        new_status,
        stats,
        error: None,
    }
}

pub fn rejected(error: Option<&str>) -> MutationResponse {
    MutationResponse {
        success: false,
        error: error.map(str::to_string),
        ..MutationResponse::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    UpdateStatus(OrderId, OrderStatus),
    Delete(OrderId),
    NewOrdersCount,
    Details(OrderId),
    Stats,
}

type CallHook = Rc<dyn Fn(&ApiCall)>;

struct FakeState {
    update: Result<MutationResponse, ApiError>,
    delete: Result<MutationResponse, ApiError>,
    count: Result<NewOrdersCountResponse, ApiError>,
    details: Result<OrderDetailsResponse, ApiError>,
    stats: Result<OrderStats, ApiError>,
    calls: Vec<ApiCall>,
    on_call: Option<CallHook>,
}

/// Scripted [`OrdersApi`] that records every call
#[derive(Clone)]
pub struct FakeOrdersApi {
    inner: Rc<RefCell<FakeState>>,
}

impl Default for FakeOrdersApi {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(FakeState {
                update: Ok(accepted(None, None)),
                delete: Ok(accepted(None, None)),
                count: Ok(NewOrdersCountResponse::default()),
                details: Ok(OrderDetailsResponse {
                    success: false,
                    order: None,
                    error: None,
                }),
                stats: Ok(OrderStats::default()),
                calls: Vec::new(),
                on_call: None,
            })),
        }
    }
}

impl FakeOrdersApi {
    pub fn on_update(&self, result: Result<MutationResponse, ApiError>) {
        self.inner.borrow_mut().update = result;
    }

    pub fn on_delete(&self, result: Result<MutationResponse, ApiError>) {
        self.inner.borrow_mut().delete = result;
    }

    pub fn on_count(&self, result: Result<NewOrdersCountResponse, ApiError>) {
        self.inner.borrow_mut().count = result;
    }

    pub fn on_details(&self, result: Result<OrderDetailsResponse, ApiError>) {
        self.inner.borrow_mut().details = result;
    }

    pub fn on_stats(&self, result: Result<OrderStats, ApiError>) {
        self.inner.borrow_mut().stats = result;
    }

    /// Run `hook` inside every call, before it answers
    pub fn set_call_hook(&self, hook: impl Fn(&ApiCall) + 'static) {
        let hook: CallHook = Rc::new(hook);
        self.inner.borrow_mut().on_call = Some(hook);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.inner.borrow().calls.clone()
    }

    fn record(&self, call: ApiCall) {
        let hook = {
            let mut inner = self.inner.borrow_mut();
            inner.calls.push(call.clone());
            inner.on_call.clone()
        };
        if let Some(hook) = hook {
            hook(&call);
        }
    }
}

impl OrdersApi for FakeOrdersApi {
    async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<MutationResponse, ApiError> {
        self.record(ApiCall::UpdateStatus(id, status));
        self.inner.borrow().update.clone()
    }

    async fn delete_order(&self, id: OrderId) -> Result<MutationResponse, ApiError> {
        self.record(ApiCall::Delete(id));
        self.inner.borrow().delete.clone()
    }

    async fn new_orders_count(&self) -> Result<NewOrdersCountResponse, ApiError> {
        self.record(ApiCall::NewOrdersCount);
        self.inner.borrow().count.clone()
    }

    async fn order_details(&self, id: OrderId) -> Result<OrderDetailsResponse, ApiError> {
        self.record(ApiCall::Details(id));
        self.inner.borrow().details.clone()
    }

    async fn stats(&self) -> Result<OrderStats, ApiError> {
        self.record(ApiCall::Stats);
        self.inner.borrow().stats.clone()
    }
}

#[derive(Default)]
struct HostLog {
    decline: bool,
    answers: VecDeque<bool>,
    confirms: Vec<String>,
    warnings: Vec<(String, String)>,
    notifications: Vec<(NotificationKind, String)>,
    sleeps: Vec<u32>,
    spawned: Vec<LocalTask>,
}

/// [`Host`] that records every interaction; confirms are accepted unless
/// declined or scripted
#[derive(Clone, Default)]
pub struct RecordingHost {
    log: Rc<RefCell<HostLog>>,
}

impl RecordingHost {
    pub fn declining() -> Self {
        let host = Self::default();
        host.log.borrow_mut().decline = true;
        host
    }

    /// Answer the next confirms in order, then fall back to accepting
    pub fn answering(answers: &[bool]) -> Self {
        let host = Self::default();
        host.log.borrow_mut().answers = answers.iter().copied().collect();
        host
    }

    pub fn confirms(&self) -> Vec<String> {
        self.log.borrow().confirms.clone()
    }

    pub fn warnings(&self) -> Vec<(String, String)> {
        self.log.borrow().warnings.clone()
    }

    pub fn notifications(&self) -> Vec<(NotificationKind, String)> {
        self.log.borrow().notifications.clone()
    }

    pub fn sleeps(&self) -> Vec<u32> {
        self.log.borrow().sleeps.clone()
    }

    pub fn pending_tasks(&self) -> usize {
        self.log.borrow().spawned.len()
    }

    /// Await every spawned task, including tasks spawned while running
    pub async fn run_spawned(&self) {
        loop {
            let tasks: Vec<LocalTask> = self.log.borrow_mut().spawned.drain(..).collect();
            if tasks.is_empty() {
                break;
            }
            for task in tasks {
                task.await;
            }
        }
    }
}

impl Host for RecordingHost {
    fn confirm(&self, message: &str) -> bool {
        let mut log = self.log.borrow_mut();
        log.confirms.push(message.to_string());
        let decline = log.decline;
        log.answers.pop_front().unwrap_or(!decline)
    }

    fn warn(&self, title: &str, text: &str) {
        self.log
            .borrow_mut()
            .warnings
            .push((title.to_string(), text.to_string()));
    }

    fn notify(&self, kind: NotificationKind, message: String) {
        self.log.borrow_mut().notifications.push((kind, message));
    }

    fn sleep(&self, ms: u32) -> LocalTask {
        self.log.borrow_mut().sleeps.push(ms);
        Box::pin(async {})
    }

    fn spawn(&self, task: LocalTask) {
        self.log.borrow_mut().spawned.push(task);
    }
}

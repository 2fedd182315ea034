use crate::shared::api_utils::api_url;
use crate::shared::error::ApiError;
use contracts::domain::orders::{
    MutationResponse, NewOrdersCountResponse, OrderDetailsResponse, OrderId, OrderStats,
    UpdateStatusRequest,
};
use contracts::enums::OrderStatus;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Order endpoints of the backend
///
/// The envelopes are returned as-is; interpreting `success` is up to the caller.
#[allow(async_fn_in_trait)]
pub trait OrdersApi: Clone + 'static {
    async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<MutationResponse, ApiError>;

    async fn delete_order(&self, id: OrderId) -> Result<MutationResponse, ApiError>;

    async fn new_orders_count(&self) -> Result<NewOrdersCountResponse, ApiError>;

    async fn order_details(&self, id: OrderId) -> Result<OrderDetailsResponse, ApiError>;

    async fn stats(&self) -> Result<OrderStats, ApiError>;
}

/// [`OrdersApi`] over `fetch`
#[derive(Debug, Clone, Default)]
pub struct HttpOrdersApi {
    base_url: String,
}

impl HttpOrdersApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        api_url(&self.base_url, path)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

impl OrdersApi for HttpOrdersApi {
    async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<MutationResponse, ApiError> {
        let url = self.url(&format!("/api/orders/{}/status", id));
        let response = Request::post(&url)
            .json(&UpdateStatusRequest { status })
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(response).await
    }

    async fn delete_order(&self, id: OrderId) -> Result<MutationResponse, ApiError> {
        let url = self.url(&format!("/api/orders/{}", id));
        let response = Request::delete(&url).send().await.map_err(network)?;
        read_json(response).await
    }

    async fn new_orders_count(&self) -> Result<NewOrdersCountResponse, ApiError> {
        let url = self.url("/api/orders/new/count");
        let response = Request::get(&url).send().await.map_err(network)?;
        read_json(response).await
    }

    async fn order_details(&self, id: OrderId) -> Result<OrderDetailsResponse, ApiError> {
        let url = self.url(&format!("/api/orders/{}", id));
        let response = Request::get(&url).send().await.map_err(network)?;
        read_json(response).await
    }

    async fn stats(&self) -> Result<OrderStats, ApiError> {
        let url = self.url("/api/stats");
        let response = Request::get(&url).send().await.map_err(network)?;
        read_json(response).await
    }
}

use super::{AdminGuard, ApiTags};
use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::stores::OrderStore;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::order::{CreateOrderRequest, OrderCreatedResponse, OrderResponse};
use crate::types::internal::OrderDraft;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use std::sync::Arc;

/// Order endpoints
///
/// Placing an order is public. Everything else is admin-only.
pub struct OrdersApi {
    order_store: Arc<OrderStore>,
}

impl OrdersApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            order_store: app_data.order_store.clone(),
        }
    }
}

#[OpenApi]
impl OrdersApi {
    /// Place an order
    ///
    /// The product's current price is copied into the order and multiplied
    /// by the quantity.
    #[oai(path = "/orders", method = "post", tag = "ApiTags::Orders")]
    async fn create(
        &self,
        body: Json<CreateOrderRequest>,
    ) -> Result<Json<OrderCreatedResponse>, ApiError> {
        let body = body.0;
        let draft = OrderDraft::new(
            body.product_id,
            body.customer_name,
            body.customer_email,
            body.customer_phone,
            body.customer_address,
            body.quantity,
        )
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

        let placed = self.order_store.create(draft).await?;

        Ok(Json(placed.into()))
    }

    /// List orders, newest first
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn list(&self, _admin: AdminGuard) -> Result<Json<Vec<OrderResponse>>, ApiError> {
        let orders = self.order_store.list().await?;
        Ok(Json(orders.into_iter().map(Into::into).collect()))
    }

    /// Confirm an order
    #[oai(path = "/orders/:id/confirm", method = "put", tag = "ApiTags::Orders")]
    async fn confirm(
        &self,
        _admin: AdminGuard,
        id: Path<i32>,
    ) -> Result<Json<MessageResponse>, ApiError> {
        self.order_store.confirm(id.0).await?;
        Ok(Json(MessageResponse::new("Order confirmed")))
    }

    /// Delete an order
    #[oai(path = "/orders/:id", method = "delete", tag = "ApiTags::Orders")]
    async fn delete(
        &self,
        _admin: AdminGuard,
        id: Path<i32>,
    ) -> Result<Json<MessageResponse>, ApiError> {
        self.order_store.delete(id.0).await?;
        Ok(Json(MessageResponse::new("Order deleted")))
    }
}

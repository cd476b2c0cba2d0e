use poem_openapi::Object;
use sea_orm::ActiveEnum;
use serde_json::Value;

use crate::stores::order_store::{OrderListing, PlacedOrder};

/// Order placed by a customer
///
/// Every field is required; they are optional here so missing ones are
/// reported with the API's own error envelope.
#[derive(Object, Debug, Default)]
pub struct CreateOrderRequest {
    /// Integer, or a string of digits
    pub product_id: Option<Value>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    /// Integer, or a string of digits
    pub quantity: Option<Value>,
}

/// Summary returned to the customer after placing an order
#[derive(Object, Debug)]
pub struct OrderCreatedResponse {
    pub message: String,
    pub order_id: i32,
    pub product_name: String,
    /// Unit price at the time of the order
    pub product_price: f64,
    pub total_price: f64,
}

impl From<PlacedOrder> for OrderCreatedResponse {
    fn from(placed: PlacedOrder) -> Self {
        Self {
            message: "Order created".to_string(),
            order_id: placed.order_id,
            product_name: placed.product_name,
            product_price: placed.product_price,
            total_price: placed.total_price,
        }
    }
}

/// An order as listed in the admin interface
#[derive(Object, Debug)]
pub struct OrderResponse {
    pub id: i32,
    /// Null when the product has been deleted since
    pub product_name: Option<String>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub quantity: i32,
    pub product_price: f64,
    pub total_price: f64,
    /// `pending` or `confirmed`
    pub status: String,
    /// Unix timestamp (seconds)
    pub created_at: i64,
}

impl From<OrderListing> for OrderResponse {
    fn from(row: OrderListing) -> Self {
        Self {
            id: row.id,
            product_name: row.product_name,
            customer_name: row.customer_name,
            customer_email: row.customer_email,
            customer_phone: row.customer_phone,
            customer_address: row.customer_address,
            quantity: row.quantity,
            product_price: row.product_price,
            total_price: row.total_price,
            status: row.status.to_value(),
            created_at: row.created_at,
        }
    }
}

use crate::errors::InternalError;
use crate::errors::internal::CatalogError;
use crate::types::db::order::{self, ActiveModel, Entity as Order, OrderStatus};
use crate::types::db::product::{self, Entity as Product};
use crate::types::internal::OrderDraft;
use chrono::Utc;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder, QuerySelect, Set, sea_query::Expr,
};

/// Outcome of placing an order
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub order_id: i32,
    pub product_name: String,
    pub product_price: f64,
    pub total_price: f64,
}

/// An order joined with the current name of its product
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct OrderListing {
    pub id: i32,
    pub product_name: Option<String>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub quantity: i32,
    pub product_price: f64,
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: i64,
}

/// OrderStore manages customer orders
pub struct OrderStore {
    db: DatabaseConnection,
}

impl OrderStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Place a pending order, snapshotting the product price
    ///
    /// # Errors
    /// * `CatalogError::UnknownProduct` - the product does not exist
    pub async fn create(&self, draft: OrderDraft) -> Result<PlacedOrder, InternalError> {
        let product = Product::find_by_id(draft.product_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_ordered_product", e))?
            .ok_or(CatalogError::UnknownProduct(draft.product_id))?;

        let total_price = product.price * f64::from(draft.quantity);

        let new_order = ActiveModel {
            product_id: Set(product.id),
            customer_name: Set(draft.customer_name),
            customer_email: Set(draft.customer_email),
            customer_phone: Set(draft.customer_phone),
            customer_address: Set(draft.customer_address),
            quantity: Set(draft.quantity),
            product_price: Set(product.price),
            total_price: Set(total_price),
            status: Set(OrderStatus::Pending),
            created_at: Set(Utc::now().timestamp()),
            ..Default::default()
        };

        let inserted = new_order
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_order", e))?;

        tracing::info!(
            "Order {} placed for product {} x{}",
            inserted.id,
            product.id,
            inserted.quantity
        );

        Ok(PlacedOrder {
            order_id: inserted.id,
            product_name: product.name,
            product_price: inserted.product_price,
            total_price: inserted.total_price,
        })
    }

    /// All orders, newest first
    pub async fn list(&self) -> Result<Vec<OrderListing>, InternalError> {
        Order::find()
            .select_only()
            .columns([
                order::Column::Id,
                order::Column::CustomerName,
                order::Column::CustomerEmail,
                order::Column::CustomerPhone,
                order::Column::CustomerAddress,
                order::Column::Quantity,
                order::Column::ProductPrice,
                order::Column::TotalPrice,
                order::Column::Status,
                order::Column::CreatedAt,
            ])
            .column_as(product::Column::Name, "product_name")
            .left_join(Product)
            .order_by_desc(order::Column::CreatedAt)
            .order_by_desc(order::Column::Id)
            .into_model::<OrderListing>()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_orders", e))
    }

    /// Mark an order confirmed
    ///
    /// # Errors
    /// * `CatalogError::OrderNotFound` - no row has that id
    pub async fn confirm(&self, id: i32) -> Result<(), InternalError> {
        let result = Order::update_many()
            .col_expr(
                order::Column::Status,
                Expr::value(OrderStatus::Confirmed.to_value()),
            )
            .filter(order::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("confirm_order", e))?;

        if result.rows_affected == 0 {
            return Err(CatalogError::OrderNotFound(id).into());
        }

        tracing::info!("Order {} confirmed", id);

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        let result = Order::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_order", e))?;

        if result.rows_affected == 0 {
            return Err(CatalogError::OrderNotFound(id).into());
        }

        Ok(())
    }
}

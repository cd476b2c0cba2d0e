use serde_json::Value;
use thiserror::Error;

/// Validated order fields from a customer request
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub product_id: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub quantity: i32,
}

/// Why an order request was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderDraftError {
    #[error("All fields are required")]
    MissingFields,

    #[error("{field} must be a whole number, got '{raw}'")]
    NotAWholeNumber { field: &'static str, raw: String },

    #[error("Quantity must be greater than zero, got {0}")]
    NonPositiveQuantity(i32),
}

impl OrderDraft {
    /// Check that every field is present and non-blank
    ///
    /// `product_id` and `quantity` may arrive as JSON numbers or as numeric
    /// strings, the way HTML forms serialize them.
    pub fn new(
        product_id: Option<Value>,
        customer_name: Option<String>,
        customer_email: Option<String>,
        customer_phone: Option<String>,
        customer_address: Option<String>,
        quantity: Option<Value>,
    ) -> Result<Self, OrderDraftError> {
        let present = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let (
            Some(product_id),
            Some(customer_name),
            Some(customer_email),
            Some(customer_phone),
            Some(customer_address),
            Some(quantity),
        ) = (
            whole_number("product_id", product_id)?,
            present(customer_name),
            present(customer_email),
            present(customer_phone),
            present(customer_address),
            whole_number("quantity", quantity)?,
        )
        else {
            return Err(OrderDraftError::MissingFields);
        };

        if quantity <= 0 {
            return Err(OrderDraftError::NonPositiveQuantity(quantity));
        }

        Ok(Self {
            product_id,
            customer_name,
            customer_email,
            customer_phone,
            customer_address,
            quantity,
        })
    }
}

/// Read an integer sent either as a number or as a string of digits
///
/// Null and blank strings count as missing.
fn whole_number(
    field: &'static str,
    value: Option<Value>,
) -> Result<Option<i32>, OrderDraftError> {
    let rejected = |raw: String| OrderDraftError::NotAWholeNumber { field, raw };

    let parsed = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(raw)) if raw.trim().is_empty() => return Ok(None),
        Some(Value::String(raw)) => raw.trim().parse::<i64>().map_err(|_| rejected(raw)),
        Some(Value::Number(n)) => n.as_i64().ok_or_else(|| rejected(n.to_string())),
        Some(other) => Err(rejected(other.to_string())),
    }?;

    i32::try_from(parsed)
        .map(Some)
        .map_err(|_| rejected(parsed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn s(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    fn order(product_id: Value, quantity: Value) -> Result<OrderDraft, OrderDraftError> {
        OrderDraft::new(
            Some(product_id),
            s("Amina"),
            s("a@b.c"),
            s("1"),
            s("addr"),
            Some(quantity),
        )
    }

    #[test]
    fn test_complete_order_is_accepted() {
        let draft = OrderDraft::new(
            Some(json!(3)),
            s("Amina"),
            s("amina@example.com"),
            s("0555 12 34 56"),
            s("12 rue Didouche, Alger"),
            Some(json!(2)),
        )
        .unwrap();

        assert_eq!(draft.product_id, 3);
        assert_eq!(draft.quantity, 2);
        assert_eq!(draft.customer_name, "Amina");
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let draft = order(json!("3"), json!(" 4 ")).unwrap();

        assert_eq!(draft.product_id, 3);
        assert_eq!(draft.quantity, 4);
    }

    #[test]
    fn test_blank_field_counts_as_missing() {
        assert_eq!(
            OrderDraft::new(Some(json!(3)), s("Amina"), s(" "), s("1"), s("addr"), Some(json!(1))),
            Err(OrderDraftError::MissingFields)
        );
        assert_eq!(
            OrderDraft::new(None, s("Amina"), s("a@b.c"), s("1"), s("addr"), Some(json!(1))),
            Err(OrderDraftError::MissingFields)
        );
        assert_eq!(order(json!(3), json!("")), Err(OrderDraftError::MissingFields));
        assert_eq!(order(Value::Null, json!(1)), Err(OrderDraftError::MissingFields));
    }

    #[test]
    fn test_non_numeric_values_are_rejected() {
        assert_eq!(
            order(json!("three"), json!(1)),
            Err(OrderDraftError::NotAWholeNumber {
                field: "product_id",
                raw: "three".to_string()
            })
        );
        assert_eq!(
            order(json!(3), json!(1.5)),
            Err(OrderDraftError::NotAWholeNumber {
                field: "quantity",
                raw: "1.5".to_string()
            })
        );
        assert_eq!(
            order(json!(3_000_000_000i64), json!(1)),
            Err(OrderDraftError::NotAWholeNumber {
                field: "product_id",
                raw: "3000000000".to_string()
            })
        );
    }

    #[test]
    fn test_quantity_must_be_positive() {
        let error = order(json!(3), json!("0")).unwrap_err();

        assert_eq!(error, OrderDraftError::NonPositiveQuantity(0));
        assert_eq!(error.to_string(), "Quantity must be greater than zero, got 0");
    }
}

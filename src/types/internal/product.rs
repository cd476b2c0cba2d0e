use thiserror::Error;

/// Validated product fields, ready to be written
///
/// Built by the API layer from either the multipart form or the JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: Option<i32>,
    /// Public image path, already stored
    pub image: Option<String>,
}

/// Why a product form was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Product name and price are required")]
    MissingNameOrPrice,

    #[error("Price must be a number, got '{0}'")]
    InvalidPrice(String),

    #[error("category_id must be an integer, got '{0}'")]
    InvalidCategoryId(String),
}

impl ProductDraft {
    /// Build a draft from text form fields
    ///
    /// Blank fields count as missing. `image` is the already-resolved path.
    pub fn from_form(
        name: Option<String>,
        description: Option<String>,
        price: Option<String>,
        category_id: Option<String>,
        image: Option<String>,
    ) -> Result<Self, DraftError> {
        let name = non_blank(name);
        let price = non_blank(price);
        let (Some(name), Some(price)) = (name, price) else {
            return Err(DraftError::MissingNameOrPrice);
        };

        let price = price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| DraftError::InvalidPrice(price.clone()))?;

        let category_id = match non_blank(category_id) {
            None => None,
            Some(raw) => Some(
                raw.trim()
                    .parse::<i32>()
                    .map_err(|_| DraftError::InvalidCategoryId(raw.clone()))?,
            ),
        };

        Ok(Self {
            name,
            description: non_blank(description),
            price,
            category_id,
            image,
        })
    }

    /// Build a draft from already-typed JSON fields
    pub fn from_json(
        name: Option<String>,
        description: Option<String>,
        price: Option<f64>,
        category_id: Option<i32>,
        image: Option<String>,
    ) -> Result<Self, DraftError> {
        let (Some(name), Some(price)) = (non_blank(name), price) else {
            return Err(DraftError::MissingNameOrPrice);
        };
        if !price.is_finite() {
            return Err(DraftError::InvalidPrice(price.to_string()));
        }

        Ok(Self {
            name,
            description: non_blank(description),
            price,
            category_id,
            image: non_blank(image),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn test_form_draft_parses_fields() {
        let draft = ProductDraft::from_form(s("Mug"), s(""), s("9.5"), s(""), None).unwrap();

        assert_eq!(draft.name, "Mug");
        assert_eq!(draft.price, 9.5);
        assert_eq!(draft.description, None);
        assert_eq!(draft.category_id, None);
    }

    #[test]
    fn test_form_draft_requires_name_and_price() {
        assert_eq!(
            ProductDraft::from_form(None, None, s("3"), None, None),
            Err(DraftError::MissingNameOrPrice)
        );
        assert_eq!(
            ProductDraft::from_form(s("Mug"), None, s("  "), None, None),
            Err(DraftError::MissingNameOrPrice)
        );
    }

    #[test]
    fn test_form_draft_rejects_bad_numbers() {
        assert_eq!(
            ProductDraft::from_form(s("Mug"), None, s("cheap"), None, None),
            Err(DraftError::InvalidPrice("cheap".to_string()))
        );
        assert_eq!(
            ProductDraft::from_form(s("Mug"), None, s("2"), s("shoes"), None),
            Err(DraftError::InvalidCategoryId("shoes".to_string()))
        );
    }

    #[test]
    fn test_json_draft_keeps_explicit_image() {
        let draft =
            ProductDraft::from_json(s("Mug"), None, Some(4.0), Some(2), s("/uploads/1.png"))
                .unwrap();

        assert_eq!(draft.image.as_deref(), Some("/uploads/1.png"));
        assert_eq!(draft.category_id, Some(2));
    }

    #[test]
    fn test_json_draft_requires_name_and_price() {
        assert_eq!(
            ProductDraft::from_json(s("Mug"), None, None, Some(2), s("/uploads/1.png")),
            Err(DraftError::MissingNameOrPrice)
        );
        assert_eq!(
            ProductDraft::from_json(s(" "), None, Some(4.0), None, None),
            Err(DraftError::MissingNameOrPrice)
        );
        assert_eq!(
            ProductDraft::from_json(s("Mug"), None, Some(f64::NAN), None, None),
            Err(DraftError::InvalidPrice("NaN".to_string()))
        );
    }

    #[test]
    fn test_draft_errors_read_as_messages() {
        let error: Box<dyn std::error::Error> = Box::new(DraftError::InvalidPrice("x".to_string()));

        assert_eq!(error.to_string(), "Price must be a number, got 'x'");
        assert_eq!(
            DraftError::MissingNameOrPrice.to_string(),
            "Product name and price are required"
        );
    }
}

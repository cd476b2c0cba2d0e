use poem_openapi::{ApiRequest, Multipart, Object, payload::Json, types::multipart::Upload};

use crate::stores::product_store::ProductListing;
use crate::types::db::product;

/// Multipart form used to create a product
#[derive(Multipart)]
pub struct CreateProductForm {
    /// Optional product picture
    pub image: Option<Upload>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Unit price, decimal
    pub price: Option<String>,
    /// Category id, may be left empty
    pub category_id: Option<String>,
}

/// Multipart form used to update a product
///
/// `image` is either a new file, or a text field carrying the path of the
/// image to keep.
#[derive(Multipart)]
pub struct UpdateProductForm {
    pub image: Option<Upload>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category_id: Option<String>,
}

/// JSON body used to update a product
#[derive(Object, Debug)]
pub struct UpdateProductBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<i32>,
    /// Path of the image to keep, e.g. `/uploads/1712345678901.png`
    pub image: Option<String>,
}

/// Product update accepted either as multipart form or as JSON
#[derive(ApiRequest)]
pub enum UpdateProductRequest {
    /// Form with an optional new image
    Multipart(UpdateProductForm),
    /// JSON without file upload
    Json(Json<UpdateProductBody>),
}

/// A product row
#[derive(Object, Debug, PartialEq)]
pub struct ProductResponse {
    pub id: i32,
    pub image: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: Option<i32>,
}

impl From<product::Model> for ProductResponse {
    fn from(model: product::Model) -> Self {
        Self {
            id: model.id,
            image: model.image,
            name: model.name,
            description: model.description,
            price: model.price,
            category_id: model.category_id,
        }
    }
}

/// A product row with the name of its category, if that category still exists
#[derive(Object, Debug, PartialEq)]
pub struct ProductWithCategoryResponse {
    pub id: i32,
    pub image: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
}

impl From<ProductListing> for ProductWithCategoryResponse {
    fn from(row: ProductListing) -> Self {
        Self {
            id: row.id,
            image: row.image,
            name: row.name,
            description: row.description,
            price: row.price,
            category_id: row.category_id,
            category_name: row.category_name,
        }
    }
}

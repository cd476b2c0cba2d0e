use super::{AdminGuard, ApiTags};
use crate::app_data::AppData;
use crate::errors::{ApiError, InternalError};
use crate::services::UploadService;
use crate::stores::ProductStore;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::product::{
    CreateProductForm, ProductResponse, ProductWithCategoryResponse, UpdateProductRequest,
};
use crate::types::internal::ProductDraft;
use poem_openapi::{OpenApi, param::Path, payload::Json, types::multipart::Upload};
use std::sync::Arc;

/// What an `image` multipart field carried
enum ImageField {
    File(Upload),
    /// Text field naming an already stored image
    KeepPath(String),
    Empty,
}

impl ImageField {
    async fn read(field: Option<Upload>) -> Result<Self, ApiError> {
        let Some(upload) = field else {
            return Ok(ImageField::Empty);
        };

        // Browsers send an empty, unnamed part for an untouched file input
        if upload.file_name().is_some_and(|name| !name.is_empty()) {
            return Ok(ImageField::File(upload));
        }

        let text = upload
            .into_string()
            .await
            .map_err(|e| ApiError::bad_request(format!("Unreadable image field: {}", e)))?;
        let text = text.trim();

        Ok(if text.is_empty() {
            ImageField::Empty
        } else {
            ImageField::KeepPath(text.to_string())
        })
    }
}

/// Product endpoints
pub struct ProductsApi {
    product_store: Arc<ProductStore>,
    upload_service: Arc<UploadService>,
}

impl ProductsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            product_store: app_data.product_store.clone(),
            upload_service: app_data.upload_service.clone(),
        }
    }

    async fn store_upload(&self, upload: Upload) -> Result<String, ApiError> {
        let original_name = upload.file_name().map(str::to_string);
        let bytes = upload
            .into_vec()
            .await
            .map_err(|e| InternalError::upload("read_upload", e))?;

        Ok(self
            .upload_service
            .store(original_name.as_deref(), &bytes)
            .await?)
    }

    /// Drop a file stored for a write that failed
    async fn discard_upload(&self, stored: Option<String>) {
        if let Some(path) = stored {
            self.upload_service.discard(&path).await;
        }
    }
}

#[OpenApi]
impl ProductsApi {
    /// List products with their category name
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list(&self) -> Result<Json<Vec<ProductWithCategoryResponse>>, ApiError> {
        let products = self.product_store.list().await?;
        Ok(Json(products.into_iter().map(Into::into).collect()))
    }

    /// Get one product
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get(&self, id: Path<i32>) -> Result<Json<ProductResponse>, ApiError> {
        let product = self.product_store.get(id.0).await?;
        Ok(Json(product.into()))
    }

    /// Create a product from a multipart form
    ///
    /// `name` and `price` are required. An `image` file is stored under the
    /// uploads directory.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create(
        &self,
        _admin: AdminGuard,
        form: CreateProductForm,
    ) -> Result<Json<ProductResponse>, ApiError> {
        let mut draft = ProductDraft::from_form(
            form.name,
            form.description,
            form.price,
            form.category_id,
            None,
        )
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

        if let ImageField::File(upload) = ImageField::read(form.image).await? {
            draft.image = Some(self.store_upload(upload).await?);
        }
        let stored = draft.image.clone();

        let created = match self.product_store.create(draft).await {
            Ok(created) => created,
            Err(e) => {
                self.discard_upload(stored).await;
                return Err(e.into());
            }
        };
        tracing::info!("Product {} created", created.id);

        Ok(Json(created.into()))
    }

    /// Replace a product
    ///
    /// Accepts a multipart form or JSON. The image becomes the uploaded file
    /// if one is sent, else the path given in `image`, else null.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update(
        &self,
        _admin: AdminGuard,
        id: Path<i32>,
        body: UpdateProductRequest,
    ) -> Result<Json<MessageResponse>, ApiError> {
        // Set only when this request wrote a new file
        let mut stored = None;

        let draft = match body {
            UpdateProductRequest::Multipart(form) => {
                let mut draft = ProductDraft::from_form(
                    form.name,
                    form.description,
                    form.price,
                    form.category_id,
                    None,
                )
                .map_err(|e| ApiError::bad_request(e.to_string()))?;

                draft.image = match ImageField::read(form.image).await? {
                    ImageField::File(upload) => {
                        // The product must exist before its image touches the disk
                        self.product_store.get(id.0).await?;
                        let path = self.store_upload(upload).await?;
                        stored = Some(path.clone());
                        Some(path)
                    }
                    ImageField::KeepPath(path) => Some(path),
                    ImageField::Empty => None,
                };
                draft
            }
            UpdateProductRequest::Json(Json(body)) => ProductDraft::from_json(
                body.name,
                body.description,
                body.price,
                body.category_id,
                body.image,
            )
            .map_err(|e| ApiError::bad_request(e.to_string()))?,
        };

        if let Err(e) = self.product_store.update(id.0, draft).await {
            self.discard_upload(stored).await;
            return Err(e.into());
        }

        Ok(Json(MessageResponse::new("Product updated")))
    }

    /// Delete a product
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete(
        &self,
        _admin: AdminGuard,
        id: Path<i32>,
    ) -> Result<Json<MessageResponse>, ApiError> {
        self.product_store.delete(id.0).await?;
        Ok(Json(MessageResponse::new("Product deleted")))
    }
}

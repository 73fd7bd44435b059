//! Food catalog wrappers, including multipart image upload.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, instrument};

use fridgemate_core::{Food, FoodId, NewFood};

use super::{ApiClient, expect_deleted, expect_json};
use crate::error::ApiError;

const LIST_FAILED: &str = "음식 목록을 불러오는데 실패했습니다.";
const FETCH_FAILED: &str = "음식을 불러오는데 실패했습니다.";
const CREATE_FAILED: &str = "음식 생성에 실패했습니다.";
const UPDATE_FAILED: &str = "음식 수정에 실패했습니다.";
const DELETE_FAILED: &str = "음식 삭제에 실패했습니다.";
const UPLOAD_FAILED: &str = "이미지 업로드에 실패했습니다.";

/// Server-assigned reference for an uploaded image, to be stored on a food
/// record.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UploadedImage {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Food catalog CRUD and image upload.
#[derive(Debug, Clone)]
pub struct FoodsApi {
    client: ApiClient,
}

impl FoodsApi {
    pub(crate) const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns the fixed list failure on a non-success status.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Food>, ApiError> {
        let response = self
            .client
            .http()
            .get(self.client.url("/api/foods"))
            .send()
            .await
            .map_err(|e| ApiError::request(&e))?;
        expect_json(response, LIST_FAILED).await
    }

    /// Fetch the foods of one type. The type is free text and goes in the
    /// path, so it is percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns the fixed list failure on a non-success status.
    #[instrument(skip(self))]
    pub async fn list_by_type(&self, food_type: &str) -> Result<Vec<Food>, ApiError> {
        let path = format!("/api/foods/type/{}", urlencoding::encode(food_type));
        let response = self
            .client
            .http()
            .get(self.client.url(&path))
            .send()
            .await
            .map_err(|e| ApiError::request(&e))?;
        expect_json(response, LIST_FAILED).await
    }

    /// Fetch one food by ID.
    ///
    /// # Errors
    ///
    /// Returns the fixed fetch failure on a non-success status.
    #[instrument(skip(self))]
    pub async fn get(&self, id: FoodId) -> Result<Food, ApiError> {
        let response = self
            .client
            .http()
            .get(self.client.url(&format!("/api/foods/{id}")))
            .send()
            .await
            .map_err(|e| ApiError::request(&e))?;
        expect_json(response, FETCH_FAILED).await
    }

    /// Create a food.
    ///
    /// # Errors
    ///
    /// Returns the fixed creation failure on a non-success status.
    #[instrument(skip(self, food), fields(name = %food.name))]
    pub async fn create(&self, food: &NewFood) -> Result<Food, ApiError> {
        let response = self
            .client
            .http()
            .post(self.client.url("/api/foods"))
            .json(food)
            .send()
            .await
            .map_err(|e| ApiError::request(&e))?;
        expect_json(response, CREATE_FAILED).await
    }

    /// Update a food.
    ///
    /// # Errors
    ///
    /// Returns the fixed update failure on a non-success status.
    #[instrument(skip(self, food))]
    pub async fn update(&self, id: FoodId, food: &NewFood) -> Result<Food, ApiError> {
        let response = self
            .client
            .http()
            .put(self.client.url(&format!("/api/foods/{id}")))
            .json(food)
            .send()
            .await
            .map_err(|e| ApiError::request(&e))?;
        expect_json(response, UPDATE_FAILED).await
    }

    /// Delete a food.
    ///
    /// # Errors
    ///
    /// Returns the fixed deletion failure on a non-success status.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: FoodId) -> Result<bool, ApiError> {
        let response = self
            .client
            .http()
            .delete(self.client.url(&format!("/api/foods/{id}")))
            .send()
            .await
            .map_err(|e| ApiError::request(&e))?;
        expect_deleted(&response, DELETE_FAILED)
    }

    /// Upload an image as `multipart/form-data` (part name `file`); the
    /// returned reference path is what gets stored on the food record.
    ///
    /// # Errors
    ///
    /// Returns the fixed upload failure on a non-success status, or a
    /// request error if the part's content type is malformed.
    #[instrument(skip(self, bytes), fields(file_name = %file_name, size = bytes.len()))]
    pub async fn upload_image(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedImage, ApiError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_owned())
            .mime_str(content_type)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .http()
            .post(self.client.url("/api/foods/upload-image"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::request(&e))?;

        let uploaded: UploadedImage = expect_json(response, UPLOAD_FAILED).await?;
        debug!(image_url = %uploaded.image_url, "image uploaded");
        Ok(uploaded)
    }
}

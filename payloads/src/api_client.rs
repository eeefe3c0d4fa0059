use crate::{PropertyId, PropertyImageId, UserId, requests, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the property backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.put(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_put(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.put(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.delete(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn list_properties(
        &self,
    ) -> Result<Vec<responses::Property>, ClientError> {
        let response = self.get("properties").await?;
        ok_body(response).await
    }

    pub async fn get_property(
        &self,
        property_id: &PropertyId,
    ) -> Result<responses::Property, ClientError> {
        let response = self.get(&format!("properties/{property_id}")).await?;
        ok_body(response).await
    }

    pub async fn search_properties(
        &self,
        filters: &requests::PropertySearch,
    ) -> Result<Vec<responses::Property>, ClientError> {
        let query = filters.to_query();
        let path = if query.is_empty() {
            "properties/search".to_string()
        } else {
            format!("properties/search?{query}")
        };
        let response = self.get(&path).await?;
        ok_body(response).await
    }

    pub async fn list_properties_by_owner(
        &self,
        owner_id: &UserId,
    ) -> Result<Vec<responses::Property>, ClientError> {
        let response =
            self.get(&format!("properties/byOwner/{owner_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_property(
        &self,
        details: &requests::SaveProperty,
    ) -> Result<responses::Property, ClientError> {
        let response = self.post("properties", details).await?;
        ok_body(response).await
    }

    pub async fn update_property(
        &self,
        property_id: &PropertyId,
        details: &requests::SaveProperty,
    ) -> Result<responses::Property, ClientError> {
        let response = self
            .put(&format!("properties/{property_id}"), details)
            .await?;
        ok_body(response).await
    }

    pub async fn delete_property(
        &self,
        property_id: &PropertyId,
    ) -> Result<(), ClientError> {
        let response =
            self.delete(&format!("properties/{property_id}")).await?;
        ok_empty(response).await
    }

    /// Images for a property, in display order. The first element is used as
    /// the cover image.
    pub async fn list_property_images(
        &self,
        property_id: &PropertyId,
    ) -> Result<Vec<responses::PropertyImage>, ClientError> {
        let response = self
            .get(&format!("property-images/property/{property_id}"))
            .await?;
        ok_body(response).await
    }

    /// The primary image for a property, or None if it has no images.
    pub async fn get_primary_image(
        &self,
        property_id: &PropertyId,
    ) -> Result<Option<responses::PropertyImage>, ClientError> {
        let response = self
            .get(&format!("property-images/property/{property_id}/primary"))
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(ok_body(response).await?))
    }

    pub async fn create_property_image(
        &self,
        details: &requests::SavePropertyImage,
    ) -> Result<responses::PropertyImage, ClientError> {
        let response = self.post("property-images", details).await?;
        ok_body(response).await
    }

    pub async fn update_property_image(
        &self,
        image_id: &PropertyImageId,
        details: &requests::SavePropertyImage,
    ) -> Result<responses::PropertyImage, ClientError> {
        let response = self
            .put(&format!("property-images/{image_id}"), details)
            .await?;
        ok_body(response).await
    }

    /// Mark an image as the primary one for its property. The backend clears
    /// the flag on the property's other images.
    pub async fn set_primary_image(
        &self,
        image_id: &PropertyImageId,
    ) -> Result<(), ClientError> {
        let response = self
            .empty_put(&format!("property-images/{image_id}/set-primary"))
            .await?;
        ok_empty(response).await
    }

    pub async fn delete_property_image(
        &self,
        image_id: &PropertyImageId,
    ) -> Result<(), ClientError> {
        let response = self
            .delete(&format!("property-images/{image_id}"))
            .await?;
        ok_empty(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> APIClient {
        APIClient {
            address: "http://localhost:8080".to_string(),
            inner_client: reqwest::Client::new(),
        }
    }

    #[test]
    fn urls_are_rooted_at_api() {
        let client = client();
        assert_eq!(
            client.format_url("properties/42"),
            "http://localhost:8080/api/properties/42"
        );
        assert_eq!(
            client.format_url("property-images/property/42/primary"),
            "http://localhost:8080/api/property-images/property/42/primary"
        );
    }
}

//! REST client for the portfolio admin API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): calls fail with `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AdminApi` owns the base URL and the bearer token, both fixed at
//! construction. The collection page talks to it only through the
//! `CollectionApi` trait so its request sequencing can be driven by a
//! recording fake in tests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{CollectionId, Image, ImageId};
use crate::config::ApiConfig;
use crate::util::token::BearerToken;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// The three admin endpoints this page consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint<'a> {
    ListImages(&'a CollectionId),
    AddImage(&'a CollectionId),
    RemoveImage(&'a CollectionId, &'a ImageId),
}

impl Endpoint<'_> {
    pub fn method(&self) -> HttpMethod {
        match self {
            Self::ListImages(_) => HttpMethod::Get,
            Self::AddImage(_) => HttpMethod::Post,
            Self::RemoveImage(..) => HttpMethod::Delete,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::ListImages(collection) => format!("/api/admin/collection/{collection}/images"),
            Self::AddImage(collection) => format!("/api/admin/addImageToCollection/{collection}"),
            Self::RemoveImage(collection, image) => {
                format!("/api/admin/removeImageFromCollection/{collection}/{image}")
            }
        }
    }
}

/// Collection image operations, as seen by the collection page.
#[allow(async_fn_in_trait)]
pub trait CollectionApi {
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure, non-2xx status, or an
    /// undecodable body.
    async fn list_images(&self, collection: &CollectionId) -> Result<Vec<Image>, ApiError>;

    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure or non-2xx status.
    async fn add_image(&self, collection: &CollectionId, url: &str) -> Result<(), ApiError>;

    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure or non-2xx status.
    async fn remove_image(&self, collection: &CollectionId, image: &ImageId) -> Result<(), ApiError>;
}

/// Authenticated admin API client.
#[derive(Clone, Debug)]
pub struct AdminApi {
    base_url: String,
    token: BearerToken,
}

impl AdminApi {
    pub fn new(config: &ApiConfig, token: BearerToken) -> Self {
        Self { base_url: config.base_url.clone(), token }
    }

    pub fn url(&self, endpoint: Endpoint<'_>) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Headers attached to every admin request.
    pub fn headers(&self) -> [(&'static str, String); 2] {
        [
            ("Authorization", self.token.header_value()),
            ("Content-Type", "application/json".to_owned()),
        ]
    }

    #[cfg(feature = "hydrate")]
    fn request(&self, endpoint: Endpoint<'_>) -> gloo_net::http::RequestBuilder {
        let url = self.url(endpoint);
        let builder = match endpoint.method() {
            HttpMethod::Get => gloo_net::http::Request::get(&url),
            HttpMethod::Post => gloo_net::http::Request::post(&url),
            HttpMethod::Delete => gloo_net::http::Request::delete(&url),
        };
        self.headers()
            .iter()
            .fold(builder, |builder, (name, value)| builder.header(name, value))
    }
}

#[cfg(feature = "hydrate")]
async fn check_status(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if (200..300).contains(&resp.status()) {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Rejected { status, body })
}

#[cfg(feature = "hydrate")]
fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

impl CollectionApi for AdminApi {
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    async fn list_images(&self, collection: &CollectionId) -> Result<Vec<Image>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .request(Endpoint::ListImages(collection))
                .send()
                .await
                .map_err(transport)?;
            let resp = check_status(resp).await?;
            resp.json::<Vec<Image>>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    async fn add_image(&self, collection: &CollectionId, url: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = super::types::AddImageRequest { string: url };
            let resp = self
                .request(Endpoint::AddImage(collection))
                .json(&body)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            check_status(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    async fn remove_image(&self, collection: &CollectionId, image: &ImageId) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .request(Endpoint::RemoveImage(collection, image))
                .send()
                .await
                .map_err(transport)?;
            check_status(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

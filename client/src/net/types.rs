//! Wire DTOs for the portfolio admin API.
//!
//! DESIGN
//! ======
//! Identifiers stay opaque. The backend has emitted image ids both as JSON
//! integers and as strings, so `ImageId` accepts either and holds the text
//! form that ends up in request paths.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a portfolio collection, taken verbatim from the page route.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CollectionId(String);

impl CollectionId {
    /// Wrap a route segment as given. Blank segments yield `None`.
    pub fn new(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque image identifier, unique within one collection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageId(String);

impl ImageId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An id with no usable text cannot address a delete request.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ImageId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(text) => Ok(Self(text)),
            serde_json::Value::Number(number) => Ok(Self(number.to_string())),
            other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
        }
    }
}

/// One image inside a collection as returned by the list endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: ImageId,
    /// Externally hosted resource URL.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl Image {
    /// Alt text shown when the remote image fails to load.
    pub fn alt_text(&self) -> String {
        format!("Image {}", self.id)
    }
}

/// Body of `POST /api/admin/addImageToCollection/{id}`.
///
/// The backend binds the URL to a field literally named `string`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AddImageRequest<'a> {
    pub string: &'a str,
}

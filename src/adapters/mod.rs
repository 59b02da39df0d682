// Adapters layer: concrete reqwest-backed implementations of the catalog
// store and manifest encoder ports. Wire formats match the upstream service
// (Mongo-style `_id`/`imageUrl` items, `qrData` envelope on the encoder).

use crate::domain::model::{CatalogItem, OrderManifest};
use crate::domain::ports::{CatalogStore, ManifestEncoder};
use crate::utils::error::{CartError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Catalog store over the food service's REST API:
/// `GET {endpoint}/` lists everything, `GET {endpoint}/search?name=<pattern>`
/// does a case-insensitive name match on the server side.
#[derive(Debug, Clone)]
pub struct HttpCatalogStore {
    endpoint: String,
    client: Client,
}

impl HttpCatalogStore {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl CatalogStore for HttpCatalogStore {
    async fn list_items(&self) -> Result<Vec<CatalogItem>> {
        let url = format!("{}/", self.endpoint.trim_end_matches('/'));
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let items = response.json::<Vec<CatalogItem>>().await?;
        Ok(items)
    }

    async fn search(&self, name_pattern: &str) -> Result<Vec<CatalogItem>> {
        let url = format!("{}/search", self.endpoint.trim_end_matches('/'));
        tracing::debug!("GET {} name={}", url, name_pattern);

        let response = self
            .client
            .get(&url)
            .query(&[("name", name_pattern)])
            .send()
            .await?
            .error_for_status()?;
        let items = response.json::<Vec<CatalogItem>>().await?;
        Ok(items)
    }
}

// Encoder wire format: the manifest travels inside a `qrData` envelope with
// the service's own field names.
#[derive(Debug, Serialize)]
struct EncodeRequest {
    #[serde(rename = "qrData")]
    qr_data: EncodePayload,
}

#[derive(Debug, Serialize)]
struct EncodePayload {
    #[serde(rename = "totalCalories")]
    total_calories: u64,
    #[serde(rename = "itemCount")]
    item_count: usize,
    #[serde(rename = "foodItems")]
    food_items: Vec<EncodeLine>,
}

#[derive(Debug, Serialize)]
struct EncodeLine {
    #[serde(rename = "foodName")]
    food_name: String,
    quantity: u32,
}

#[derive(Debug, Deserialize)]
struct EncodeResponse {
    #[serde(rename = "qrData")]
    qr_data: Option<String>,
}

impl From<&OrderManifest> for EncodeRequest {
    fn from(manifest: &OrderManifest) -> Self {
        Self {
            qr_data: EncodePayload {
                total_calories: manifest.total_calories,
                item_count: manifest.item_count,
                food_items: manifest
                    .lines
                    .iter()
                    .map(|line| EncodeLine {
                        food_name: line.name.clone(),
                        quantity: line.quantity,
                    })
                    .collect(),
            },
        }
    }
}

/// Manifest encoder over the QR generation service:
/// `POST {endpoint}` with the envelope body, token comes back as a data URL.
#[derive(Debug, Clone)]
pub struct HttpManifestEncoder {
    endpoint: String,
    client: Client,
}

impl HttpManifestEncoder {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ManifestEncoder for HttpManifestEncoder {
    async fn encode(&self, manifest: &OrderManifest) -> Result<String> {
        tracing::debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&EncodeRequest::from(manifest))
            .send()
            .await?
            .error_for_status()?;

        let body = response.json::<EncodeResponse>().await?;
        body.qr_data.ok_or_else(|| CartError::EncodeError {
            message: "response is missing the qrData token".to_string(),
        })
    }
}

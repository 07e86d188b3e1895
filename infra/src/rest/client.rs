//! HTTP client for the JSON resource store

use reqwest::{Client, Response};
use rf_shared::StoreConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::error::InfrastructureError;

/// Thin JSON client over the store's collections.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Clone, Debug)]
pub struct StoreClient {
    client: Client,
    base_url: String,
}

impl StoreClient {
    pub fn new(config: &StoreConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| InfrastructureError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET a collection or document, with equality query parameters
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, InfrastructureError> {
        let url = self.url(path);
        debug!("GET {} {:?}", url, query);
        let response = self.client.get(&url).query(query).send().await?;
        read_json(response).await
    }

    /// GET a single document; a 404 is `None`
    pub async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, InfrastructureError> {
        match self.get(path, &[]).await {
            Ok(document) => Ok(Some(document)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, InfrastructureError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        read_json(response).await
    }

    /// PATCH merges `body` into the stored document
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, InfrastructureError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("PATCH {}", url);
        let response = self.client.patch(&url).json(body).send().await?;
        read_json(response).await
    }

    /// PUT replaces the stored document
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, InfrastructureError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("PUT {}", url);
        let response = self.client.put(&url).json(body).send().await?;
        read_json(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), InfrastructureError> {
        let url = self.url(path);
        debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        check_status(response).map(|_| ())
    }
}

fn check_status(response: Response) -> Result<Response, InfrastructureError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(InfrastructureError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, InfrastructureError> {
    Ok(check_status(response)?.json::<T>().await?)
}

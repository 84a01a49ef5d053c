use std::time::Duration;

use reqwest::{Client, Response};
use serde::Deserialize;
use urlencoding::encode;

use super::errors::{LoadError, SignupError};
use crate::models::Catalog;

/// Body of a 2xx answer to a sign-up or unregister request.
#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

/// Body of a non-2xx answer. `detail` is optional upstream.
#[derive(Debug, Deserialize)]
struct DetailBody {
    #[serde(default)]
    detail: Option<String>,
}

/// HTTP client for the upstream activities API.
#[derive(Clone)]
pub struct ActivitiesApi {
    client: Client,
    base_url: String,
}

impl ActivitiesApi {
    pub fn new(base_url: &str, connect_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().connect_timeout(connect_timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn signup_url(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/signup?email={}",
            self.base_url,
            encode(activity),
            encode(email)
        )
    }

    fn participants_url(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/participants?email={}",
            self.base_url,
            encode(activity),
            encode(email)
        )
    }

    /// `GET /activities`
    pub async fn fetch_catalog(&self) -> Result<Catalog, LoadError> {
        let url = format!("{}/activities", self.base_url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status));
        }

        let body = response.bytes().await?;
        let catalog = Catalog::from_slice(&body)?;
        log::debug!("Fetched {} activities from {}", catalog.len(), url);
        Ok(catalog)
    }

    /// `POST /activities/{activity}/signup?email={email}`
    pub async fn signup(&self, activity: &str, email: &str) -> Result<String, SignupError> {
        let response = self
            .client
            .post(self.signup_url(activity, email))
            .send()
            .await?;
        read_outcome(response).await
    }

    /// `DELETE /activities/{activity}/participants?email={email}`
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<String, SignupError> {
        let response = self
            .client
            .delete(self.participants_url(activity, email))
            .send()
            .await?;
        read_outcome(response).await
    }
}

/// Both mutations answer `{message}` on success and `{detail?}` otherwise.
/// A body that is not JSON is a transport failure either way.
async fn read_outcome(response: Response) -> Result<String, SignupError> {
    let status = response.status();
    let body = response.bytes().await?;

    if status.is_success() {
        let parsed: MessageBody = serde_json::from_slice(&body)?;
        Ok(parsed.message)
    } else {
        let parsed: DetailBody = serde_json::from_slice(&body)?;
        Err(SignupError::Rejected {
            status,
            detail: parsed.detail.filter(|d| !d.is_empty()),
        })
    }
}

use std::time::Duration;

use serde::Deserialize;

use crate::constants::API_NAME;

#[derive(Debug, Deserialize)]
struct ModelsForMakeResponse {
    #[serde(rename = "Results")]
    results: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    #[serde(rename = "Model_Name")]
    model_name: String,
}

/// Client for the external vehicle catalog (NHTSA vPIC). Fail-closed: any
/// transport failure, timeout, or malformed response reads as "unknown
/// make/model", so an unreachable catalog blocks registration rather than
/// letting unchecked pairs through.
#[derive(Clone)]
pub struct VehicleLookupClient {
    http: reqwest::Client,
    base_url: String,
}

impl VehicleLookupClient {
    pub fn new(base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    /// One catalog round trip per call; no retries, no caching.
    pub async fn exists(&self, make: &str, model: &str) -> bool {
        match self.fetch_models(make).await {
            Ok(models) => models.iter().any(|m| m.eq_ignore_ascii_case(model)),
            Err(e) => {
                tracing::warn!("{} Vehicle lookup failed for make '{}': {}", API_NAME, make, e);
                false
            }
        }
    }

    async fn fetch_models(&self, make: &str) -> anyhow::Result<Vec<String>> {
        let url = format!(
            "{}/getmodelsformake/{}?format=json",
            self.base_url,
            make.to_uppercase()
        );
        let response = self.http.get(&url).send().await?.error_for_status()?;
        let body: ModelsForMakeResponse = response.json().await?;
        Ok(body.results.into_iter().map(|m| m.model_name).collect())
    }
}

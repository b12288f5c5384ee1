// disease.sh repository implementation
use crate::application::covid_repository::{CovidApiError, CovidRepository};
use crate::domain::covid::{CountryEntry, GlobalStats, Scope, ScopeStats};
use crate::domain::historical::HistoricalResponse;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DiseaseShRepository {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct CountryRecord {
    country: String,
    #[serde(rename = "countryInfo")]
    country_info: CountryInfo,
}

#[derive(Debug, Deserialize)]
struct CountryInfo {
    #[serde(default)]
    iso3: Option<String>,
}

impl DiseaseShRepository {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn fetch_body(&self, path: &str) -> Result<(String, Vec<u8>), CovidApiError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| CovidApiError::Network {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CovidApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| CovidApiError::Network {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        Ok((url, body.to_vec()))
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CovidApiError> {
        let (url, body) = self.fetch_body(path).await?;
        serde_json::from_slice(&body).map_err(|e| CovidApiError::Parse {
            url,
            reason: e.to_string(),
        })
    }

    /// Both scopes go through the per-country endpoint; the global one is `/countries/all`.
    fn stats_path(scope: &Scope) -> String {
        format!("/countries/{}", urlencoding::encode(scope.code()))
    }

    fn historical_path(scope: &Scope, days: u32) -> String {
        format!(
            "/historical/{}?lastdays={}",
            urlencoding::encode(scope.code()),
            days
        )
    }
}

#[async_trait]
impl CovidRepository for DiseaseShRepository {
    async fn global_stats(&self) -> Result<GlobalStats, CovidApiError> {
        self.fetch_json("/all").await
    }

    async fn countries(&self) -> Result<Vec<CountryEntry>, CovidApiError> {
        let records: Vec<CountryRecord> = self.fetch_json("/countries").await?;

        let entries: Vec<CountryEntry> = records
            .into_iter()
            .filter_map(|record| match record.country_info.iso3 {
                Some(iso3) if !iso3.is_empty() => Some(CountryEntry::new(record.country, iso3)),
                _ => {
                    tracing::debug!("Skipping {} - no ISO alpha-3 code", record.country);
                    None
                }
            })
            .collect();

        Ok(entries)
    }

    async fn scope_stats(&self, scope: &Scope) -> Result<ScopeStats, CovidApiError> {
        self.fetch_json(&Self::stats_path(scope)).await
    }

    async fn historical(
        &self,
        scope: &Scope,
        days: u32,
    ) -> Result<HistoricalResponse, CovidApiError> {
        let (url, body) = self.fetch_body(&Self::historical_path(scope, days)).await?;
        HistoricalResponse::decode(scope, &body)
            .map_err(|reason| CovidApiError::Parse { url, reason })
    }
}

// Repository trait for COVID-19 statistics access
use crate::domain::covid::{CountryEntry, GlobalStats, Scope, ScopeStats};
use crate::domain::historical::HistoricalResponse;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CovidApiError {
    /// The request could not complete (connect, timeout, body read)
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body was not the JSON shape we expected
    #[error("unexpected response from {url}: {reason}")]
    Parse { url: String, reason: String },
}

#[async_trait]
pub trait CovidRepository: Send + Sync {
    /// Worldwide aggregate counts
    async fn global_stats(&self) -> Result<GlobalStats, CovidApiError>;

    /// Every country that has an ISO alpha-3 code, in upstream order
    async fn countries(&self) -> Result<Vec<CountryEntry>, CovidApiError>;

    /// Current counts for the global aggregate or one country
    async fn scope_stats(&self, scope: &Scope) -> Result<ScopeStats, CovidApiError>;

    /// Daily trend for the last `days` days, decoded in the shape the scope implies
    async fn historical(
        &self,
        scope: &Scope,
        days: u32,
    ) -> Result<HistoricalResponse, CovidApiError>;
}

// Dashboard display models
use serde::Serialize;

pub const LOADING_MESSAGE: &str = "Loading country data...";
pub const FAILURE_MESSAGE: &str = "Failed to load data.";
pub const ERROR_MARKER: &str = "Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Confirmed,
    Active,
    Recovered,
    Deaths,
}

impl Metric {
    pub fn label(self) -> &'static str {
        match self {
            Metric::Confirmed => "Confirmed",
            Metric::Active => "Active",
            Metric::Recovered => "Recovered",
            Metric::Deaths => "Deaths",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Metric::Confirmed => "confirmed",
            Metric::Active => "active",
            Metric::Recovered => "recovered",
            Metric::Deaths => "deaths",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub metric: Metric,
    pub title: String,
    pub value: String,
}

impl StatCard {
    pub fn new(metric: Metric, scope_name: &str, value: String) -> Self {
        Self {
            metric,
            title: format!("{} in {}", metric.label(), scope_name),
            value,
        }
    }
}

/// What the stats panel currently shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "content", rename_all = "snake_case")]
pub enum PanelContent {
    Loading(String),
    Cards(Vec<StatCard>),
    Message(String),
}

impl PanelContent {
    pub fn loading() -> Self {
        PanelContent::Loading(LOADING_MESSAGE.to_string())
    }

    pub fn failed() -> Self {
        PanelContent::Message(FAILURE_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_title() {
        let card = StatCard::new(Metric::Recovered, "Chile", "1,000".to_string());
        assert_eq!(card.title, "Recovered in Chile");
    }
}

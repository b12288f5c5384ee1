use anyhow::Context;
use num_format::Locale;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub api: ApiSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplaySettings {
    pub locale: String,
    pub history_days: u32,
}

impl DisplaySettings {
    pub fn number_locale(&self) -> anyhow::Result<Locale> {
        Locale::from_name(&self.locale)
            .with_context(|| format!("Unknown display locale '{}'", self.locale))
    }
}

fn builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.bind_addr", "0.0.0.0:8080")?
        .set_default("api.base_url", "https://disease.sh/v3/covid-19")?
        .set_default("api.timeout_secs", 10)?
        .set_default("display.locale", "en")?
        .set_default("display.history_days", 30)?)
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = builder()?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("COVID_DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

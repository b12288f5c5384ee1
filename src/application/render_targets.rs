// Display surfaces the dashboard controller writes to
use crate::domain::chart::ChartSpec;
use crate::domain::dashboard::{Metric, PanelContent};
use std::sync::Arc;

/// The four worldwide summary slots
pub trait SummaryCards: Send + Sync {
    fn write(&self, metric: Metric, text: &str);
}

pub trait CountrySelector: Send + Sync {
    fn append_option(&self, value: &str, label: &str);
}

pub trait StatsPanel: Send + Sync {
    fn show(&self, content: PanelContent);
}

/// Creates chart instances on a single drawing surface.
///
/// Callers must dispose the previous instance before creating the next one.
pub trait ChartSurface: Send + Sync {
    fn create(&self, spec: ChartSpec) -> Box<dyn ChartInstance>;
}

pub trait ChartInstance: Send {
    fn dispose(self: Box<Self>);
}

#[derive(Clone)]
pub struct RenderTargets {
    pub cards: Arc<dyn SummaryCards>,
    pub selector: Arc<dyn CountrySelector>,
    pub panel: Arc<dyn StatsPanel>,
    pub chart: Arc<dyn ChartSurface>,
}

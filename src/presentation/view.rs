// In-memory render targets the dashboard page is drawn from
use crate::application::render_targets::{
    ChartInstance, ChartSurface, CountrySelector, RenderTargets, StatsPanel, SummaryCards,
};
use crate::domain::chart::ChartSpec;
use crate::domain::covid::Scope;
use crate::domain::dashboard::{Metric, PanelContent};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub const GLOBAL_OPTION_LABEL: &str = "Global";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummarySlots {
    pub confirmed: String,
    pub active: String,
    pub recovered: String,
    pub deaths: String,
}

impl SummarySlots {
    fn slot_mut(&mut self, metric: Metric) -> &mut String {
        match metric {
            Metric::Confirmed => &mut self.confirmed,
            Metric::Active => &mut self.active,
            Metric::Recovered => &mut self.recovered,
            Metric::Deaths => &mut self.deaths,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveChart {
    pub id: u64,
    pub spec: ChartSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub summary: SummarySlots,
    pub options: Vec<SelectOption>,
    pub selected_scope: String,
    pub panel: PanelContent,
    pub chart: Option<LiveChart>,
    pub live_charts: usize,
}

pub struct DashboardView {
    state: Mutex<ViewSnapshot>,
    next_chart_id: AtomicU64,
}

impl DashboardView {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(ViewSnapshot {
                summary: SummarySlots::default(),
                options: vec![SelectOption {
                    value: Scope::GLOBAL_CODE.to_string(),
                    label: GLOBAL_OPTION_LABEL.to_string(),
                }],
                selected_scope: Scope::GLOBAL_CODE.to_string(),
                panel: PanelContent::loading(),
                chart: None,
                live_charts: 0,
            }),
            next_chart_id: AtomicU64::new(1),
        })
    }

    // Writers never panic mid-update, so a poisoned lock still holds a usable view.
    fn state(&self) -> MutexGuard<'_, ViewSnapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.state().clone()
    }

    pub fn has_option(&self, value: &str) -> bool {
        self.state().options.iter().any(|o| o.value == value)
    }

    pub fn select(&self, value: &str) {
        self.state().selected_scope = value.to_string();
    }

    pub fn render_targets(self: &Arc<Self>) -> RenderTargets {
        RenderTargets {
            cards: self.clone(),
            selector: self.clone(),
            panel: self.clone(),
            chart: Arc::new(ViewChartSurface(self.clone())),
        }
    }
}

impl SummaryCards for DashboardView {
    fn write(&self, metric: Metric, text: &str) {
        *self.state().summary.slot_mut(metric) = text.to_string();
    }
}

impl CountrySelector for DashboardView {
    fn append_option(&self, value: &str, label: &str) {
        self.state().options.push(SelectOption {
            value: value.to_string(),
            label: label.to_string(),
        });
    }
}

impl StatsPanel for DashboardView {
    fn show(&self, content: PanelContent) {
        self.state().panel = content;
    }
}

struct ViewChartSurface(Arc<DashboardView>);

struct ViewChart {
    view: Arc<DashboardView>,
    id: u64,
}

impl ChartSurface for ViewChartSurface {
    fn create(&self, spec: ChartSpec) -> Box<dyn ChartInstance> {
        let id = self.0.next_chart_id.fetch_add(1, Ordering::Relaxed);
        let mut state = self.0.state();
        if state.live_charts > 0 {
            tracing::warn!(live = state.live_charts, "Chart created over a live instance");
        }
        state.chart = Some(LiveChart { id, spec });
        state.live_charts += 1;

        Box::new(ViewChart {
            view: self.0.clone(),
            id,
        })
    }
}

impl ChartInstance for ViewChart {
    fn dispose(self: Box<Self>) {
        let mut state = self.view.state();
        if state.chart.as_ref().map(|c| c.id) == Some(self.id) {
            state.chart = None;
        }
        state.live_charts = state.live_charts.saturating_sub(1);
    }
}

// Dashboard controller - Fetches statistics and keeps every render target in sync
use crate::application::covid_repository::{CovidApiError, CovidRepository};
use crate::application::formatting::{format_count, sort_by_display_name};
use crate::application::render_targets::{ChartInstance, RenderTargets};
use crate::domain::chart::ChartSpec;
use crate::domain::covid::{Scope, ScopeStats};
use crate::domain::dashboard::{Metric, PanelContent, StatCard, ERROR_MARKER};
use crate::domain::historical::HistoricalSeries;
use num_format::Locale;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    Stats,
    History,
}

/// Progress of one scope-load cycle. `ChartRendered` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    Idle,
    LoadingStats,
    StatsReady,
    LoadingHistory,
    HistoryReady,
    ChartRendered,
    Failed(CyclePhase),
}

impl CycleState {
    /// Whether one scope-load cycle may move from `self` straight to `next`.
    pub fn can_advance_to(self, next: CycleState) -> bool {
        use CycleState::*;
        matches!(
            (self, next),
            (Idle, LoadingStats)
                | (LoadingStats, StatsReady)
                | (LoadingStats, Failed(CyclePhase::Stats))
                | (StatsReady, LoadingHistory)
                | (LoadingHistory, HistoryReady)
                | (LoadingHistory, Failed(CyclePhase::History))
                | (HistoryReady, ChartRendered)
        )
    }
}

pub struct DashboardController {
    repository: Arc<dyn CovidRepository>,
    targets: RenderTargets,
    locale: Locale,
    history_days: u32,
    // At most one live chart; replaced only after the old one is disposed.
    chart: Mutex<Option<Box<dyn ChartInstance>>>,
}

impl DashboardController {
    pub fn new(
        repository: Arc<dyn CovidRepository>,
        targets: RenderTargets,
        locale: Locale,
        history_days: u32,
    ) -> Self {
        Self {
            repository,
            targets,
            locale,
            history_days,
            chart: Mutex::new(None),
        }
    }

    /// Initial page load: the three loads are independent and run concurrently.
    pub async fn start(&self) {
        let (_, _, outcome) = tokio::join!(
            self.load_global_summary(),
            self.load_country_directory(),
            self.load_scope(Scope::Global),
        );
        tracing::info!(?outcome, "Dashboard initialised");
    }

    pub async fn load_global_summary(&self) {
        match self.repository.global_stats().await {
            Ok(stats) => {
                let cards = &self.targets.cards;
                cards.write(Metric::Confirmed, &self.format(stats.cases));
                cards.write(Metric::Active, &self.format(stats.active));
                cards.write(Metric::Recovered, &self.format(stats.recovered));
                cards.write(Metric::Deaths, &self.format(stats.deaths));
                tracing::debug!(cases = stats.cases, "Global summary updated");
            }
            Err(e) => {
                tracing::error!("Error fetching global data: {}", e);
                self.targets.cards.write(Metric::Confirmed, ERROR_MARKER);
            }
        }
    }

    pub async fn load_country_directory(&self) {
        match self.repository.countries().await {
            Ok(mut entries) => {
                sort_by_display_name(&mut entries);
                for entry in &entries {
                    self.targets
                        .selector
                        .append_option(&entry.iso_code, &entry.display_name);
                }
                tracing::info!("Loaded {} countries into the selector", entries.len());
            }
            Err(e) => {
                tracing::error!("Error fetching countries: {}", e);
            }
        }
    }

    /// Stats first, then history, then the chart. Overlapping calls are not
    /// cancelled; whichever finishes last owns the panel and chart.
    pub async fn load_scope(&self, scope: Scope) -> CycleState {
        self.targets.panel.show(PanelContent::loading());
        let state = self.advance(&scope, CycleState::Idle, CycleState::LoadingStats);

        let stats = match self.repository.scope_stats(&scope).await {
            Ok(stats) => stats,
            Err(e) => return self.fail(&scope, state, CyclePhase::Stats, &e),
        };
        self.targets.panel.show(PanelContent::Cards(self.stat_cards(&stats)));
        let state = self.advance(&scope, state, CycleState::StatsReady);
        let state = self.advance(&scope, state, CycleState::LoadingHistory);

        let series = match self.repository.historical(&scope, self.history_days).await {
            Ok(response) => response.into_series(),
            Err(e) => return self.fail(&scope, state, CyclePhase::History, &e),
        };
        let state = self.advance(&scope, state, CycleState::HistoryReady);

        self.render_chart(&series).await;
        self.advance(&scope, state, CycleState::ChartRendered)
    }

    pub async fn render_chart(&self, series: &HistoricalSeries) {
        let spec = ChartSpec::trend_lines(series, self.history_days);

        let mut slot = self.chart.lock().await;
        if let Some(previous) = slot.take() {
            previous.dispose();
        }
        *slot = Some(self.targets.chart.create(spec));
    }

    fn stat_cards(&self, stats: &ScopeStats) -> Vec<StatCard> {
        let name = stats.display_name();
        vec![
            StatCard::new(Metric::Confirmed, name, self.format(stats.cases)),
            StatCard::new(Metric::Active, name, self.format(stats.active)),
            StatCard::new(Metric::Recovered, name, self.format(stats.recovered)),
            StatCard::new(Metric::Deaths, name, self.format(stats.deaths)),
        ]
    }

    fn format(&self, value: u64) -> String {
        format_count(value, &self.locale)
    }

    fn fail(
        &self,
        scope: &Scope,
        from: CycleState,
        phase: CyclePhase,
        error: &CovidApiError,
    ) -> CycleState {
        tracing::error!(%scope, ?phase, "Error fetching country data: {}", error);
        self.targets.panel.show(PanelContent::failed());
        self.advance(scope, from, CycleState::Failed(phase))
    }

    fn advance(&self, scope: &Scope, from: CycleState, to: CycleState) -> CycleState {
        debug_assert!(
            from.can_advance_to(to),
            "illegal scope cycle transition {:?} -> {:?}",
            from,
            to
        );
        tracing::debug!(%scope, ?from, ?to, "Scope cycle transition");
        to
    }
}

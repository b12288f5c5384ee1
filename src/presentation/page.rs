// HTML rendering of the dashboard view
use crate::domain::dashboard::PanelContent;
use crate::presentation::view::{SummarySlots, ViewSnapshot};
use askama::Template;

pub struct OptionRow<'a> {
    pub value: &'a str,
    pub label: &'a str,
    pub selected: bool,
}

/// Template for the dashboard page, built from one view snapshot.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub summary: &'a SummarySlots,
    pub options: Vec<OptionRow<'a>>,
    pub panel: &'a PanelContent,
    // Pre-serialized JSON, emitted unescaped inside a <script> element
    pub chart_config: String,
}

impl<'a> DashboardTemplate<'a> {
    pub fn from_snapshot(view: &'a ViewSnapshot) -> Self {
        let options = view
            .options
            .iter()
            .map(|option| OptionRow {
                value: &option.value,
                label: &option.label,
                selected: option.value == view.selected_scope,
            })
            .collect();

        Self {
            summary: &view.summary,
            options,
            panel: &view.panel,
            chart_config: chart_config(view),
        }
    }
}

pub fn render_dashboard(view: &ViewSnapshot) -> Result<String, askama::Error> {
    DashboardTemplate::from_snapshot(view).render()
}

/// Chart.js config as JSON, safe to embed inside a <script> element
fn chart_config(view: &ViewSnapshot) -> String {
    let json = match &view.chart {
        Some(chart) => serde_json::to_string(&chart.spec).unwrap_or_else(|e| {
            tracing::error!("Chart config serialization error: {}", e);
            "null".to_string()
        }),
        None => "null".to_string(),
    };
    json.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::ChartSpec;
    use crate::domain::dashboard::{Metric, StatCard};
    use crate::domain::historical::{DailyCounts, HistoricalSeries};
    use crate::presentation::view::DashboardView;

    fn render(view: &DashboardView) -> String {
        render_dashboard(&view.snapshot()).unwrap()
    }

    #[test]
    fn test_panel_markup() {
        let view = DashboardView::new();
        let targets = view.render_targets();

        targets.panel.show(PanelContent::failed());
        assert!(render(&view).contains("<p>Failed to load data.</p>"));

        targets.panel.show(PanelContent::Cards(vec![StatCard::new(
            Metric::Confirmed,
            "Chile",
            "5,400,000".to_string(),
        )]));
        let html = render(&view);
        assert!(html.contains(
            "<div class=\"stat-card confirmed\"><h3>Confirmed in Chile</h3><p>5,400,000</p></div>"
        ));
        assert!(!html.contains("Failed to load data."));
    }

    #[test]
    fn test_page_contains_view_state() {
        let view = DashboardView::new();
        let targets = view.render_targets();
        targets.cards.write(Metric::Confirmed, "Error");
        targets.selector.append_option("CHL", "Chile");
        view.select("CHL");
        let series = HistoricalSeries {
            cases: DailyCounts::from_pairs([("1/1/24", 10)]),
            deaths: DailyCounts::from_pairs([("1/1/24", 1)]),
            recovered: DailyCounts::from_pairs([("1/1/24", 2)]),
        };
        let _chart = targets.chart.create(ChartSpec::trend_lines(&series, 30));

        let html = render(&view);

        assert!(html.contains("<p id=\"global-confirmed\">Error</p>"));
        assert!(html.contains("<option value=\"all\">Global</option>"));
        assert!(html.contains("<option value=\"CHL\" selected>Chile</option>"));
        assert!(html.contains(
            "<div id=\"country-stats\" class=\"cards\">\n            <p>Loading country data...</p>"
        ));
        assert!(html.contains("\"labels\":[\"1/1/24\"]"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_upstream_text_is_escaped() {
        let view = DashboardView::new();
        let targets = view.render_targets();
        targets.selector.append_option("XSS", "<script>alert(1)</script>");
        targets.panel.show(PanelContent::Cards(vec![StatCard::new(
            Metric::Deaths,
            "<b>Atlantis</b>",
            "1".to_string(),
        )]));

        let html = render(&view);

        assert!(html.contains("&lt;script&gt;alert(1)"));
        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("<h3>Deaths in &lt;b&gt;Atlantis"));
        assert!(!html.contains("<b>Atlantis"));
    }

    #[test]
    fn test_chart_config_cannot_close_its_script() {
        let view = DashboardView::new();
        let targets = view.render_targets();
        let series = HistoricalSeries {
            cases: DailyCounts::from_pairs([("</script><p>", 1)]),
            deaths: DailyCounts::from_pairs([("</script><p>", 0)]),
            recovered: DailyCounts::from_pairs([("</script><p>", 0)]),
        };
        let _chart = targets.chart.create(ChartSpec::trend_lines(&series, 30));

        let html = render(&view);

        assert!(html.contains("\"labels\":[\"<\\/script><p>\"]"));
        assert_eq!(html.matches("</script>").count(), 3);
    }

    #[test]
    fn test_page_without_chart_embeds_null() {
        let html = render(&DashboardView::new());
        assert!(html.contains("<script id=\"chart-config\" type=\"application/json\">null</script>"));
    }
}

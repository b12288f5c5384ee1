// Declarative line chart configuration handed to the chart surface
use super::historical::{DailyCounts, HistoricalSeries};
use serde::Serialize;

const LINE_TENSION: f32 = 0.3;

struct LineStyle {
    label: &'static str,
    border_color: &'static str,
    background_color: &'static str,
}

const CASES_STYLE: LineStyle = LineStyle {
    label: "Cases",
    border_color: "rgb(231, 76, 60)",
    background_color: "rgba(231, 76, 60, 0.2)",
};

const DEATHS_STYLE: LineStyle = LineStyle {
    label: "Deaths",
    border_color: "rgb(127, 140, 141)",
    background_color: "rgba(127, 140, 141, 0.2)",
};

const RECOVERED_STYLE: LineStyle = LineStyle {
    label: "Recovered",
    border_color: "rgb(46, 204, 113)",
    background_color: "rgba(46, 204, 113, 0.2)",
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<LineDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDataset {
    pub label: String,
    pub data: Vec<u64>,
    pub border_color: String,
    pub background_color: String,
    pub tension: f32,
}

impl LineDataset {
    fn styled(style: &LineStyle, counts: &DailyCounts) -> Self {
        Self {
            label: style.label.to_string(),
            data: counts.values(),
            border_color: style.border_color.to_string(),
            background_color: style.background_color.to_string(),
            tension: LINE_TENSION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: ChartPlugins,
    pub scales: ChartScales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPlugins {
    pub title: ChartTitle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartTitle {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartScales {
    pub y: AxisOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    pub begin_at_zero: bool,
}

impl ChartSpec {
    /// Build the cases/deaths/recovered line chart. Labels are the cases dates as received.
    pub fn trend_lines(series: &HistoricalSeries, days: u32) -> Self {
        let labels = series.cases.dates().map(str::to_string).collect();

        Self {
            kind: "line".to_string(),
            data: ChartData {
                labels,
                datasets: vec![
                    LineDataset::styled(&CASES_STYLE, &series.cases),
                    LineDataset::styled(&DEATHS_STYLE, &series.deaths),
                    LineDataset::styled(&RECOVERED_STYLE, &series.recovered),
                ],
            },
            options: ChartOptions {
                responsive: true,
                plugins: ChartPlugins {
                    title: ChartTitle {
                        display: true,
                        text: format!("COVID-19 Trends Over Last {} Days", days),
                    },
                },
                scales: ChartScales {
                    y: AxisOptions { begin_at_zero: true },
                },
            },
        }
    }
}

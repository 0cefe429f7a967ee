//! Chart generation for the dashboard sections.
//!
//! Each panel is an ECharts configuration built with `charming` and carried
//! to the page as JSON together with the id of its HTML container.

use charming::{
    component::{Axis, Grid, Title},
    datatype::DataPointItem,
    element::{AxisType, ItemStyle, LineStyle, Symbol, Tooltip, Trigger},
    series::{Bar, Line},
    Chart,
};

use super::{highlight_first, ranked, DAILY_LINE_COLOR, HIGHLIGHT_COLOR, TOP_N};
use crate::api::{DailyTotal, DashboardData, HourTotal, RfmEntry, SeasonTotal, WeekdayMean, YearMonthTotal};
use crate::routes::daily::DAILY_SECTION_TITLE;
use crate::routes::hourly::HOUR_SECTION_TITLE;
use crate::routes::monthly::MONTHLY_SECTION_TITLE;
use crate::routes::rfm::RFM_SECTION_TITLE;
use crate::routes::season::SEASON_SECTION_TITLE;
use crate::routes::weekday::WEEKDAY_SECTION_TITLE;

/// A dashboard chart with its HTML container ID and ECharts configuration.
#[derive(Debug, Clone)]
pub struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

impl DashboardChart {
    fn new(id: &'static str, chart: Chart) -> Self {
        Self {
            id,
            options: chart.to_string(),
        }
    }
}

/// A titled block of the page holding one or two panels side by side.
#[derive(Debug, Clone)]
pub struct ChartSection {
    pub title: &'static str,
    /// Whether the metrics row is shown above the charts
    pub with_metrics: bool,
    pub charts: Vec<DashboardChart>,
}

/// Which way bars run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Horizontal,
    Vertical,
}

/// Everything needed to draw one bar panel.
struct BarPanel<'a> {
    title: &'a str,
    labels: Vec<String>,
    values: Vec<f64>,
    colors: Vec<&'static str>,
    orientation: Orientation,
    /// Reverse the x axis, mirroring the panel against its neighbour
    mirrored: bool,
    category_name: Option<&'a str>,
    value_name: Option<&'a str>,
}

fn grid() -> Grid {
    Grid::new()
        .left("3%")
        .right("4%")
        .bottom("3%")
        .contain_label(true)
}

fn bar_chart(panel: BarPanel<'_>) -> Chart {
    let data: Vec<DataPointItem> = panel
        .values
        .iter()
        .zip(panel.colors.iter())
        .map(|(value, color)| DataPointItem::new(*value).item_style(ItemStyle::new().color(*color)))
        .collect();

    let mut category_axis = Axis::new().type_(AxisType::Category).data(panel.labels);
    if let Some(name) = panel.category_name {
        category_axis = category_axis.name(name);
    }
    let mut value_axis = Axis::new().type_(AxisType::Value);
    if let Some(name) = panel.value_name {
        value_axis = value_axis.name(name);
    }

    let (x_axis, y_axis) = match panel.orientation {
        // First ranked item at the top, as in a seaborn horizontal barplot
        Orientation::Horizontal => (value_axis, category_axis.inverse(true)),
        Orientation::Vertical => (category_axis, value_axis),
    };
    let x_axis = if panel.mirrored { x_axis.inverse(true) } else { x_axis };

    Chart::new()
        .title(Title::new().text(panel.title).left("center"))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(grid())
        .x_axis(x_axis)
        .y_axis(y_axis)
        .series(Bar::new().data(data))
}

fn line_chart(labels: Vec<String>, values: Vec<f64>, color: &str, name: &str) -> Chart {
    Chart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(grid())
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(
            Line::new()
                .name(name)
                .symbol(Symbol::Circle)
                .line_style(LineStyle::new().width(2).color(color))
                .item_style(ItemStyle::new().color(color))
                .data(values),
        )
}

/// Daily rentals over the selected span.
pub fn daily_chart(daily: &[DailyTotal]) -> Chart {
    let labels = daily.iter().map(|d| d.date.to_string()).collect();
    let values = daily.iter().map(|d| d.counts.cnt as f64).collect();
    line_chart(labels, values, DAILY_LINE_COLOR, "cnt")
}

/// Seasons ranked most to least, and least to most on a mirrored panel.
pub fn season_charts(by_season: &[SeasonTotal]) -> (Chart, Chart) {
    let panel = |title: &'static str, descending: bool, mirrored: bool| {
        let ordered = ranked(by_season, |s| s.cnt as f64, descending, None);
        bar_chart(BarPanel {
            title,
            labels: ordered.iter().map(|s| s.season.clone()).collect(),
            values: ordered.iter().map(|s| s.cnt as f64).collect(),
            colors: highlight_first(ordered.len()),
            orientation: Orientation::Horizontal,
            mirrored,
            category_name: Some("Season"),
            value_name: Some("Count"),
        })
    };
    (
        panel("Most Bike Rentals", true, false),
        panel("Least Bike Rentals", false, true),
    )
}

/// Busiest and quietest five hours of the day.
pub fn hour_charts(by_hour: &[HourTotal]) -> (Chart, Chart) {
    let panel = |title: &'static str, descending: bool, mirrored: bool| {
        let ordered = ranked(by_hour, |h| h.cnt as f64, descending, Some(TOP_N));
        bar_chart(BarPanel {
            title,
            labels: ordered.iter().map(|h| h.hour.to_string()).collect(),
            values: ordered.iter().map(|h| h.cnt as f64).collect(),
            colors: highlight_first(ordered.len()),
            orientation: Orientation::Vertical,
            mirrored,
            category_name: Some("Hour"),
            value_name: Some("Count"),
        })
    };
    (
        panel("Most Bike Rentals", true, false),
        panel("Least Bike Rentals", false, true),
    )
}

/// Five weekdays with the highest mean rentals.
pub fn weekday_chart(by_weekday: &[WeekdayMean]) -> Chart {
    let ordered = ranked(by_weekday, |w| w.mean_cnt, true, Some(TOP_N));
    bar_chart(BarPanel {
        title: "",
        labels: ordered.iter().map(|w| w.weekday.clone()).collect(),
        values: ordered.iter().map(|w| w.mean_cnt).collect(),
        colors: highlight_first(ordered.len()),
        orientation: Orientation::Vertical,
        mirrored: false,
        category_name: None,
        value_name: None,
    })
}

/// Registered rentals per (year, month).
pub fn monthly_chart(by_year_month: &[YearMonthTotal]) -> Chart {
    let labels = by_year_month.iter().map(YearMonthTotal::label).collect();
    let values = by_year_month
        .iter()
        .map(|m| m.counts.registered as f64)
        .collect();
    line_chart(labels, values, HIGHLIGHT_COLOR, "registered")
}

/// Most recent weekdays and weekdays with the most rentals.
pub fn rfm_charts(rfm: &[RfmEntry]) -> (Chart, Chart) {
    let panel = |title: &'static str, ordered: Vec<RfmEntry>, value: fn(&RfmEntry) -> i64| {
        bar_chart(BarPanel {
            title,
            labels: ordered.iter().map(|e| e.weekday.clone()).collect(),
            values: ordered.iter().map(|e| value(e) as f64).collect(),
            colors: vec![HIGHLIGHT_COLOR; ordered.len()],
            orientation: Orientation::Vertical,
            mirrored: false,
            category_name: None,
            value_name: None,
        })
    };
    (
        panel(
            "By Recency (days)",
            ranked(rfm, |e| e.recency as f64, false, Some(TOP_N)),
            |e| e.recency,
        ),
        panel(
            "By Frequency",
            ranked(rfm, |e| e.frequency as f64, true, Some(TOP_N)),
            |e| e.frequency,
        ),
    )
}

/// All chart sections of the page, in display order.
pub fn dashboard_sections(data: &DashboardData) -> Vec<ChartSection> {
    let (season_most, season_least) = season_charts(&data.by_season);
    let (hour_most, hour_least) = hour_charts(&data.by_hour);
    let (recency, frequency) = rfm_charts(&data.rfm);

    vec![
        ChartSection {
            title: DAILY_SECTION_TITLE,
            with_metrics: true,
            charts: vec![DashboardChart::new("daily-rentals", daily_chart(&data.daily))],
        },
        ChartSection {
            title: SEASON_SECTION_TITLE,
            with_metrics: false,
            charts: vec![
                DashboardChart::new("season-most", season_most),
                DashboardChart::new("season-least", season_least),
            ],
        },
        ChartSection {
            title: HOUR_SECTION_TITLE,
            with_metrics: false,
            charts: vec![
                DashboardChart::new("hour-most", hour_most),
                DashboardChart::new("hour-least", hour_least),
            ],
        },
        ChartSection {
            title: WEEKDAY_SECTION_TITLE,
            with_metrics: false,
            charts: vec![DashboardChart::new("weekday-most", weekday_chart(&data.by_weekday))],
        },
        ChartSection {
            title: MONTHLY_SECTION_TITLE,
            with_metrics: false,
            charts: vec![DashboardChart::new(
                "monthly-registered",
                monthly_chart(&data.by_year_month),
            )],
        },
        ChartSection {
            title: RFM_SECTION_TITLE,
            with_metrics: false,
            charts: vec![
                DashboardChart::new("rfm-recency", recency),
                DashboardChart::new("rfm-frequency", frequency),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RentalCounts;
    use chrono::NaiveDate;

    fn hours() -> Vec<HourTotal> {
        (0..24)
            .map(|hour| HourTotal {
                hour,
                cnt: (hour as i64 * 37) % 101,
            })
            .collect()
    }

    #[test]
    fn test_daily_chart_options_contain_dates_and_color() {
        let daily = vec![DailyTotal {
            date: NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
            counts: RentalCounts::new(10, 20),
        }];
        let options = daily_chart(&daily).to_string();
        assert!(options.contains("2011-01-01"));
        assert!(options.contains(DAILY_LINE_COLOR));
    }

    #[test]
    fn test_hour_charts_keep_five_bars() {
        let (most, least) = hour_charts(&hours());
        let most: serde_json::Value = serde_json::from_str(&most.to_string()).unwrap();
        let least: serde_json::Value = serde_json::from_str(&least.to_string()).unwrap();

        let most_bars = most["series"][0]["data"].as_array().unwrap();
        let least_bars = least["series"][0]["data"].as_array().unwrap();
        assert_eq!(most_bars.len(), TOP_N);
        assert_eq!(least_bars.len(), TOP_N);
    }

    #[test]
    fn test_season_least_panel_is_mirrored() {
        let seasons = vec![
            SeasonTotal { season: "Fall".to_string(), cnt: 90 },
            SeasonTotal { season: "Spring".to_string(), cnt: 40 },
        ];
        let (_, least) = season_charts(&seasons);
        let least: serde_json::Value = serde_json::from_str(&least.to_string()).unwrap();
        let x_axis = if least["xAxis"].is_array() {
            least["xAxis"][0].clone()
        } else {
            least["xAxis"].clone()
        };
        assert_eq!(x_axis["inverse"], serde_json::Value::Bool(true));
    }

    #[test]
    fn test_sections_fixed_order() {
        let data = DashboardData {
            range: crate::models::DateRange::new(
                NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
            ),
            bounds: crate::models::DateRange::new(
                NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
            ),
            metrics: Default::default(),
            daily: vec![],
            casual_by_date: vec![],
            registered_by_date: vec![],
            by_season: vec![],
            by_hour: hours(),
            by_weekday: vec![],
            by_year_month: vec![],
            rfm: vec![],
        };

        let titles: Vec<&str> = dashboard_sections(&data).iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                DAILY_SECTION_TITLE,
                SEASON_SECTION_TITLE,
                HOUR_SECTION_TITLE,
                WEEKDAY_SECTION_TITLE,
                MONTHLY_SECTION_TITLE,
                RFM_SECTION_TITLE,
            ]
        );
    }
}

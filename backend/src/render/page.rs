//! HTML layout of the dashboard.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::charts::{dashboard_sections, ChartSection, DashboardChart};
use crate::api::{DashboardData, DashboardMetrics};
use crate::routes::dashboard::{DASHBOARD_PAGE, DASHBOARD_TITLE, LOGO_ASSET};

const ECHARTS_CDN: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

const STYLE: &str = r#"
body { margin: 0; font-family: sans-serif; display: flex; }
aside { width: 260px; padding: 1rem; background: #f0f2f6; min-height: 100vh; }
aside img { width: 100%; }
main { flex: 1; padding: 1rem 2rem; }
.metrics { display: flex; gap: 2rem; margin-bottom: 1rem; }
.metric .value { font-size: 2rem; }
.charts { display: flex; gap: 1rem; }
.chart { flex: 1; min-height: 380px; }
"#;

/// Render the complete page for one set of computed views.
pub fn render_dashboard_page(data: &DashboardData) -> Markup {
    let sections = dashboard_sections(data);
    let charts: Vec<&DashboardChart> = sections.iter().flat_map(|s| s.charts.iter()).collect();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (DASHBOARD_TITLE) }
                script src=(ECHARTS_CDN) {}
                style { (PreEscaped(STYLE)) }
            }
            body {
                (sidebar(data))
                main {
                    h1 { (DASHBOARD_TITLE) }
                    @for section in &sections {
                        (section_view(section, &data.metrics))
                    }
                }
                script { (charts_script(&charts)) }
            }
        }
    }
}

fn sidebar(data: &DashboardData) -> Markup {
    let min = data.bounds.start.to_string();
    let max = data.bounds.end.to_string();
    html! {
        aside {
            img src=(LOGO_ASSET) alt="logo";
            form method="get" action=(DASHBOARD_PAGE) {
                h3 { "Time Span" }
                label for="start" { "Start date" }
                input type="date" id="start" name="start" min=(min) max=(max)
                    value=(data.range.start.to_string());
                label for="end" { "End date" }
                input type="date" id="end" name="end" min=(min) max=(max)
                    value=(data.range.end.to_string());
                button type="submit" { "Apply" }
            }
        }
    }
}

fn metrics_row(metrics: &DashboardMetrics) -> Markup {
    let items = [
        ("Total Users", metrics.total_users),
        ("Total Registered Users", metrics.total_registered_users),
        ("Total Casual Users", metrics.total_casual_users),
    ];
    html! {
        div class="metrics" {
            @for (label, value) in items {
                div class="metric" {
                    div class="label" { (label) }
                    div class="value" { (value) }
                }
            }
        }
    }
}

fn section_view(section: &ChartSection, metrics: &DashboardMetrics) -> Markup {
    html! {
        section {
            h2 { (section.title) }
            @if section.with_metrics {
                (metrics_row(metrics))
            }
            div class="charts" {
                @for chart in &section.charts {
                    div id=(chart.id) class="chart" {}
                }
            }
        }
    }
}

/// Initialization code for every chart container on the page.
fn charts_script(charts: &[&DashboardChart]) -> PreEscaped<String> {
    let body = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
    const chart = echarts.init(document.getElementById("{}"));
    chart.setOption({});
    window.addEventListener('resize', () => chart.resize());
}})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    PreEscaped(format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        body
    ))
}

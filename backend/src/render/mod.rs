//! Turning computed views into ECharts options and the HTML page.
//!
//! - [`charts`]: one ECharts configuration per chart panel
//! - [`page`]: the fixed layout (sidebar, header, metrics row, chart sections)

pub mod charts;
pub mod page;

pub use charts::{dashboard_sections, ChartSection, DashboardChart};
pub use page::render_dashboard_page;

/// Color of the emphasized (extremal) bar and of the monthly line.
pub const HIGHLIGHT_COLOR: &str = "#72BCD4";
/// Color of every other bar.
pub const NEUTRAL_COLOR: &str = "#D3D3D3";
/// Color of the daily rentals line.
pub const DAILY_LINE_COLOR: &str = "#90CAF9";

/// Number of bars shown in the top/bottom ranked panels.
pub const TOP_N: usize = 5;

/// One color per bar: the first bar highlighted, the rest neutral.
pub fn highlight_first(len: usize) -> Vec<&'static str> {
    (0..len)
        .map(|i| if i == 0 { HIGHLIGHT_COLOR } else { NEUTRAL_COLOR })
        .collect()
}

/// Order `items` by `key` and keep at most `limit` of them.
///
/// Ties keep their incoming order, so callers pass views that are already
/// ordered deterministically.
pub fn ranked<T: Clone>(
    items: &[T],
    key: impl Fn(&T) -> f64,
    descending: bool,
    limit: Option<usize>,
) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = key(a)
            .partial_cmp(&key(b))
            .unwrap_or(std::cmp::Ordering::Equal);
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
    if let Some(limit) = limit {
        sorted.truncate(limit);
    }
    sorted
}

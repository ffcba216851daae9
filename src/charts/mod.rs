//! Charts module - trend chart rendering

mod trend;

pub use trend::{render_trend_chart, ChartError, CHART_HEIGHT, CHART_WIDTH};

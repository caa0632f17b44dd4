use scrutin_core::models::{ChartType, Classification, ResultSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartDecision {
    Skip,
    Render(ChartType),
}

/// Render only when a visualization was requested and there is data.
/// A visualization task without an explicit type gets a bar chart.
pub fn decide(classification: &Classification, rows: &ResultSet) -> ChartDecision {
    if rows.is_empty() || !classification.wants_chart() {
        return ChartDecision::Skip;
    }
    ChartDecision::Render(classification.chart_type.unwrap_or(ChartType::Bar))
}

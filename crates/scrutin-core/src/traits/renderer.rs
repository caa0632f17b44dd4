use crate::errors::RenderError;
use crate::models::{ChartArtifact, ChartType, ResultSet};

/// Chart rendering collaborator.
pub trait IChartRenderer: Send + Sync {
    /// Render `rows` as the requested chart. Unsupported types fall back to bar.
    fn render(&self, chart_type: ChartType, rows: &ResultSet) -> Result<ChartArtifact, RenderError>;
}

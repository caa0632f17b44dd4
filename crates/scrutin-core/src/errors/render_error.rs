/// Chart rendering errors. Always non-fatal for a run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    #[error("no rows to plot")]
    NoRows,

    #[error("no numeric column found to plot")]
    NoNumericColumn,

    #[error("chart rendering failed: {reason}")]
    Failed { reason: String },
}

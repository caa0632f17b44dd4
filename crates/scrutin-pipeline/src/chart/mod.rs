//! Chart decision and the built-in SVG renderer.

pub mod columns;
pub mod decision;
pub mod svg;

pub use columns::{infer_roles, ColumnRoles, DataPoint};
pub use decision::{decide, ChartDecision};
pub use svg::SvgChartRenderer;

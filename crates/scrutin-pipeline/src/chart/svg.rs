//! Dependency-free SVG output for bar and pie charts.

use std::f64::consts::PI;
use std::fmt::Write as _;

use scrutin_core::constants::SVG_MIME_TYPE;
use scrutin_core::errors::RenderError;
use scrutin_core::models::{ChartArtifact, ChartType, ResultSet};
use scrutin_core::traits::IChartRenderer;
use tracing::debug;

use super::columns::{data_points, infer_roles, ColumnRoles, DataPoint};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 480.0;
const MARGIN: f64 = 60.0;
const PALETTE: [&str; 8] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
];

/// Renders bar and pie charts; every other type is drawn as bars.
#[derive(Debug, Default, Clone, Copy)]
pub struct SvgChartRenderer;

impl SvgChartRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl IChartRenderer for SvgChartRenderer {
    fn render(&self, chart_type: ChartType, rows: &ResultSet) -> Result<ChartArtifact, RenderError> {
        let roles = infer_roles(rows)?;
        let points = data_points(rows, &roles)?;

        let svg = match chart_type {
            ChartType::Pie => pie(&roles, &points)?,
            _ => bar(&roles, &points),
        };
        debug!(
            chart = ?chart_type,
            label = %roles.label,
            value = %roles.value,
            points = points.len(),
            "chart rendered"
        );
        Ok(ChartArtifact::new(SVG_MIME_TYPE, svg.into_bytes()))
    }
}

fn open_document(out: &mut String, title: &str) {
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif">"#
    );
    let _ = write!(
        out,
        r#"<text x="{x}" y="30" text-anchor="middle" font-size="18">{title}</text>"#,
        x = WIDTH / 2.0,
        title = escape(title),
    );
}

fn bar(roles: &ColumnRoles, points: &[DataPoint]) -> String {
    let mut out = String::new();
    open_document(&mut out, &format!("{} par {}", roles.value, roles.label));

    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let min = points.iter().map(|p| p.value).fold(0.0_f64, f64::min);
    let span = if max - min > 0.0 { max - min } else { 1.0 };

    let plot_height = HEIGHT - 2.0 * MARGIN;
    let slot = (WIDTH - 2.0 * MARGIN) / points.len() as f64;
    let baseline = MARGIN + plot_height * (max / span);

    let _ = write!(
        out,
        r##"<line x1="{MARGIN}" y1="{baseline:.2}" x2="{x2}" y2="{baseline:.2}" stroke="#333"/>"##,
        x2 = WIDTH - MARGIN,
    );

    for (i, point) in points.iter().enumerate() {
        let height = plot_height * (point.value.abs() / span);
        let x = MARGIN + slot * i as f64 + slot * 0.1;
        let y = if point.value >= 0.0 { baseline - height } else { baseline };
        let _ = write!(
            out,
            r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{height:.2}" fill="{fill}"><title>{label}: {value}</title></rect>"#,
            w = slot * 0.8,
            fill = PALETTE[i % PALETTE.len()],
            label = escape(&point.label),
            value = point.value,
        );
        let _ = write!(
            out,
            r#"<text x="{cx:.2}" y="{ty:.2}" text-anchor="middle" font-size="11">{label}</text>"#,
            cx = x + slot * 0.4,
            ty = HEIGHT - MARGIN / 2.0,
            label = escape(&point.label),
        );
    }

    out.push_str("</svg>");
    out
}

fn pie(roles: &ColumnRoles, points: &[DataPoint]) -> Result<String, RenderError> {
    let slices: Vec<&DataPoint> = points.iter().filter(|p| p.value > 0.0).collect();
    let total: f64 = slices.iter().map(|p| p.value).sum();
    if total <= 0.0 {
        return Err(RenderError::Failed {
            reason: "pie chart needs at least one positive value".to_string(),
        });
    }

    let mut out = String::new();
    open_document(&mut out, &format!("Répartition de {} par {}", roles.value, roles.label));

    let (cx, cy) = (WIDTH / 2.0 - 100.0, HEIGHT / 2.0 + 15.0);
    let radius = HEIGHT / 2.0 - MARGIN;

    if let [only] = slices.as_slice() {
        let _ = write!(
            out,
            r#"<circle cx="{cx}" cy="{cy}" r="{radius}" fill="{fill}"><title>{label}: 100%</title></circle>"#,
            fill = PALETTE[0],
            label = escape(&only.label),
        );
    } else {
        let mut angle = -PI / 2.0;
        for (i, slice) in slices.iter().enumerate() {
            let sweep = 2.0 * PI * slice.value / total;
            let (x1, y1) = (cx + radius * angle.cos(), cy + radius * angle.sin());
            angle += sweep;
            let (x2, y2) = (cx + radius * angle.cos(), cy + radius * angle.sin());
            let large_arc = u8::from(sweep > PI);
            let _ = write!(
                out,
                r#"<path d="M {cx} {cy} L {x1:.2} {y1:.2} A {radius} {radius} 0 {large_arc} 1 {x2:.2} {y2:.2} Z" fill="{fill}"><title>{label}: {pct:.1}%</title></path>"#,
                fill = PALETTE[i % PALETTE.len()],
                label = escape(&slice.label),
                pct = 100.0 * slice.value / total,
            );
        }
    }

    // Legend.
    for (i, slice) in slices.iter().enumerate() {
        let y = MARGIN + 22.0 * i as f64;
        let _ = write!(
            out,
            r#"<rect x="{lx}" y="{y}" width="14" height="14" fill="{fill}"/><text x="{tx}" y="{ty}" font-size="12">{label} ({pct:.1}%)</text>"#,
            lx = WIDTH - 240.0,
            tx = WIDTH - 220.0,
            ty = y + 12.0,
            fill = PALETTE[i % PALETTE.len()],
            label = escape(&slice.label),
            pct = 100.0 * slice.value / total,
        );
    }

    out.push_str("</svg>");
    Ok(out)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

//! Column-role heuristic: which column labels the chart, which one is plotted.

use scrutin_core::errors::RenderError;
use scrutin_core::models::{ResultSet, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRoles {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Kind {
    Text,
    Numeric,
    Other,
}

/// Label = first text column, value = first other numeric column. Falls back
/// to the first and second columns when no column of that kind exists.
/// A column's kind is that of its first non-null value.
pub fn infer_roles(rows: &ResultSet) -> Result<ColumnRoles, RenderError> {
    if rows.is_empty() {
        return Err(RenderError::NoRows);
    }
    let columns = rows.columns();
    let kinds: Vec<Kind> = columns.iter().map(|c| column_kind(rows, c)).collect();

    let pick = |kind: Kind, fallback: usize, exclude: Option<&str>| {
        columns
            .iter()
            .zip(&kinds)
            .find(|(c, k)| **k == kind && Some(**c) != exclude)
            .map(|(c, _)| *c)
            .or_else(|| columns.get(fallback).copied())
    };

    let label = pick(Kind::Text, 0, None).ok_or(RenderError::NoRows)?;
    let value = pick(Kind::Numeric, 1, Some(label)).ok_or(RenderError::NoNumericColumn)?;

    Ok(ColumnRoles {
        label: label.to_string(),
        value: value.to_string(),
    })
}

/// Points for `roles`; rows whose value is not numeric are dropped.
pub fn data_points(rows: &ResultSet, roles: &ColumnRoles) -> Result<Vec<DataPoint>, RenderError> {
    let points: Vec<DataPoint> = rows
        .iter()
        .filter_map(|record| {
            let value = record.get(&roles.value)?.as_f64()?;
            let label = record
                .get(&roles.label)
                .map(ToString::to_string)
                .unwrap_or_default();
            Some(DataPoint { label, value })
        })
        .collect();

    if points.is_empty() {
        return Err(RenderError::NoNumericColumn);
    }
    Ok(points)
}

fn column_kind(rows: &ResultSet, column: &str) -> Kind {
    rows.iter()
        .filter_map(|r| r.get(column))
        .find(|v| !matches!(v, Value::Null))
        .map_or(Kind::Other, |v| match v {
            Value::Text(_) => Kind::Text,
            Value::Integer(_) | Value::Real(_) => Kind::Numeric,
            _ => Kind::Other,
        })
}

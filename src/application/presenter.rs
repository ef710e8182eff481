//! Conversion of aggregations into serialized chart specifications.
//!
//! Each chart is a self-describing JSON document: kind, title, axis labels,
//! and the bound x/y series. The sales page embeds the payloads verbatim and
//! a small client-side script hands them to the rendering library, so the
//! client never recomputes anything.

use serde::Serialize;

use crate::domain::aggregation::{Aggregations, CategoryRevenue, DailyRevenue, HistogramBin};
use crate::error::AppError;

/// Chart kind, telling the client which mark to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Histogram,
    Line,
}

/// A complete, renderable chart description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

/// Serializes the three charts in their fixed order: category bar, quantity
/// histogram, daily revenue line.
///
/// Serialization is stable: the same aggregations always produce
/// byte-identical payloads.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if serialization fails.
pub fn render_charts(aggregations: &Aggregations) -> Result<Vec<String>, AppError> {
    let charts = [
        category_bar(&aggregations.revenue_by_category),
        quantity_histogram(&aggregations.quantity_histogram),
        daily_revenue_line(&aggregations.daily_revenue),
    ];

    charts
        .iter()
        .map(|chart| Ok(serde_json::to_string(chart)?))
        .collect()
}

fn category_bar(rows: &[CategoryRevenue]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        title: "Revenue by Category".to_string(),
        x_label: "category".to_string(),
        y_label: "revenue".to_string(),
        x: rows.iter().map(|r| r.category.clone()).collect(),
        y: rows.iter().map(|r| r.revenue).collect(),
    }
}

fn quantity_histogram(bins: &[HistogramBin]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Histogram,
        title: "Distribution of Sales Quantities".to_string(),
        x_label: "quantity".to_string(),
        y_label: "count".to_string(),
        x: bins
            .iter()
            .map(|b| format!("{:.1}-{:.1}", b.lower, b.upper))
            .collect(),
        y: bins.iter().map(|b| b.count as f64).collect(),
    }
}

fn daily_revenue_line(rows: &[DailyRevenue]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Line,
        title: "Daily Revenue".to_string(),
        x_label: "date".to_string(),
        y_label: "revenue".to_string(),
        x: rows.iter().map(|r| r.date.format("%Y-%m-%d").to_string()).collect(),
        y: rows.iter().map(|r| r.revenue).collect(),
    }
}

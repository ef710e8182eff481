//! Aggregation of the full record set into the three chart-ready tables.
//!
//! All functions here are pure: they take a slice of records and return
//! derived data, so identical inputs always produce identical outputs. Row
//! ordering in the output comes from sorted maps (category name, date), never
//! from the order records arrive in.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::entities::SalesRecord;

/// Number of equal-width buckets in the quantity histogram.
pub const HISTOGRAM_BINS: usize = 20;

/// Revenue summed over one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: f64,
}

/// Revenue summed over one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub revenue: f64,
}

/// One histogram bucket over the quantity range.
///
/// Buckets are half-open `[lower, upper)` except the last, which also
/// contains the observed maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: u64,
}

/// The three derived tables backing the dashboard charts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Aggregations {
    pub revenue_by_category: Vec<CategoryRevenue>,
    pub quantity_histogram: Vec<HistogramBin>,
    pub daily_revenue: Vec<DailyRevenue>,
}

/// Computes all three aggregations over the full record set.
///
/// An empty record set yields empty aggregations rather than an error; the
/// dashboard renders empty charts in that case.
pub fn compute_aggregations(records: &[SalesRecord]) -> Aggregations {
    Aggregations {
        revenue_by_category: revenue_by_category(records),
        quantity_histogram: quantity_histogram(records),
        daily_revenue: daily_revenue(records),
    }
}

/// Sums revenue per category, ordered by category name.
fn revenue_by_category(records: &[SalesRecord]) -> Vec<CategoryRevenue> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.category.as_str()).or_insert(0.0) += record.revenue;
    }

    totals
        .into_iter()
        .map(|(category, revenue)| CategoryRevenue {
            category: category.to_string(),
            revenue,
        })
        .collect()
}

/// Buckets quantities into [`HISTOGRAM_BINS`] equal-width bins spanning the
/// observed min-max range.
///
/// A degenerate range (every quantity equal) is widened to a span of 1 so the
/// bin count stays fixed. The maximum value is counted in the last bin.
fn quantity_histogram(records: &[SalesRecord]) -> Vec<HistogramBin> {
    if records.is_empty() {
        return Vec::new();
    }

    let min = records.iter().map(|r| r.quantity).min().unwrap_or(0) as f64;
    let max = records.iter().map(|r| r.quantity).max().unwrap_or(0) as f64;

    let span = if max > min { max - min } else { 1.0 };
    let width = span / HISTOGRAM_BINS as f64;

    let mut counts = [0u64; HISTOGRAM_BINS];
    for record in records {
        let offset = (record.quantity as f64 - min) / width;
        let index = (offset as usize).min(HISTOGRAM_BINS - 1);
        counts[index] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| HistogramBin {
            lower: min + i as f64 * width,
            upper: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

/// Sums revenue per day, ordered by date ascending.
fn daily_revenue(records: &[SalesRecord]) -> Vec<DailyRevenue> {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.date).or_insert(0.0) += record.revenue;
    }

    totals
        .into_iter()
        .map(|(date, revenue)| DailyRevenue { date, revenue })
        .collect()
}

//! Read-only column extraction from Polars DataFrames
//!
//! A missing column maps to [`Error::UnknownColumn`]; a column that cannot
//! be read in the requested shape maps to [`Error::InvalidColumn`]. The
//! DataFrame is never mutated.

use crate::error::{Error, Result};
use polars::prelude::*;
use std::collections::BTreeMap;

fn numeric_options(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df
        .column(name)
        .map_err(|_| Error::UnknownColumn(name.to_string()))?;
    let casted = column
        .cast(&DataType::Float64)
        .map_err(|_| Error::InvalidColumn(format!("column '{name}' cannot be read as numeric")))?;
    Ok(casted.f64()?.into_iter().collect())
}

/// Non-null numeric values of a column, in row order.
pub(crate) fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let values: Vec<f64> = numeric_options(df, name)?.into_iter().flatten().collect();
    if values.is_empty() {
        return Err(Error::InvalidColumn(format!(
            "no numeric values in column '{name}'"
        )));
    }
    Ok(values)
}

/// A column rendered as category labels, nulls as empty strings.
pub(crate) fn label_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = df
        .column(name)
        .map_err(|_| Error::UnknownColumn(name.to_string()))?;
    let casted = column
        .cast(&DataType::String)
        .map_err(|_| Error::InvalidColumn(format!("column '{name}' cannot be read as labels")))?;
    Ok(casted
        .str()?
        .into_iter()
        .map(|v| v.unwrap_or_default().to_string())
        .collect())
}

/// (category, value) rows for a bar chart; rows with a null value drop out.
pub(crate) fn bar_pairs(df: &DataFrame, x: &str, y: &str) -> Result<Vec<(String, f64)>> {
    let categories = label_column(df, x)?;
    let values = numeric_options(df, y)?;
    let pairs: Vec<(String, f64)> = categories
        .into_iter()
        .zip(values)
        .filter_map(|(c, v)| v.map(|v| (c, v)))
        .collect();
    if pairs.is_empty() {
        return Err(Error::InvalidColumn(format!(
            "no plottable rows for '{x}' / '{y}'"
        )));
    }
    Ok(pairs)
}

/// (x, y) rows for a scatter plot; rows with a null on either side drop out.
pub(crate) fn xy_pairs(df: &DataFrame, x: &str, y: &str) -> Result<Vec<(f64, f64)>> {
    let xs = numeric_options(df, x)?;
    let ys = numeric_options(df, y)?;
    let pairs: Vec<(f64, f64)> = xs
        .into_iter()
        .zip(ys)
        .filter_map(|(a, b)| Some((a?, b?)))
        .collect();
    if pairs.is_empty() {
        return Err(Error::InvalidColumn(format!(
            "no plottable rows for '{x}' / '{y}'"
        )));
    }
    Ok(pairs)
}

/// Numeric values of `value` split by the labels of `group`, ordered by
/// group name. Groups with no numeric values drop out.
pub(crate) fn grouped_numeric(
    df: &DataFrame,
    value: &str,
    group: &str,
) -> Result<Vec<(String, Vec<f64>)>> {
    let labels = label_column(df, group)?;
    let values = numeric_options(df, value)?;

    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for (label, v) in labels.into_iter().zip(values) {
        if let Some(v) = v {
            groups.entry(label).or_default().push(v);
        }
    }
    if groups.is_empty() {
        return Err(Error::InvalidColumn(format!(
            "no plottable rows for '{value}' grouped by '{group}'"
        )));
    }
    Ok(groups.into_iter().collect())
}

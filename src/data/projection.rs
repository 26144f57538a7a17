//! Year Projection Module
//! Derives the per-year view of the merged table: the filtered point set
//! plus the extremal (highest income, highest home value) rows.

use crate::data::merge::{MergedTable, StateRecord};
use crate::data::region::Group;

/// The closed set of years the datasets cover, in field order.
pub const SUPPORTED_YEARS: [i32; 8] = [2000, 2005, 2010, 2015, 2016, 2017, 2018, 2019];

/// Number of supported years; per-year record fields are arrays of this size.
pub const YEAR_COUNT: usize = SUPPORTED_YEARS.len();

/// Map a year to its field index, `None` for unsupported years.
pub fn year_index(year: i32) -> Option<usize> {
    SUPPORTED_YEARS.iter().position(|&y| y == year)
}

/// Column name holding the home value for a year (`"YYYY-12-31"`).
pub fn home_value_column(year: i32) -> String {
    format!("{}-12-31", year)
}

/// One plotted point: a state with valid home value and income for the year.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub region_name: String,
    pub group: Group,
    pub home_value: f64,
    pub income: f64,
}

/// A row achieving the table-wide maximum of one field for the year.
///
/// The paired coordinate (`home_value` for the income extremal and vice
/// versa) may be NaN: extremals are scanned over the whole table, not the
/// filtered subset, so the winning row can be one the filter excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtremalRow {
    pub region_name: String,
    pub group: Group,
    pub value: f64,
    pub home_value: f64,
    pub income: f64,
}

/// The per-year derived view handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub year: i32,
    pub rows: Vec<ScatterPoint>,
    pub max_income: Option<ExtremalRow>,
    pub max_home_value: Option<ExtremalRow>,
}

impl Projection {
    fn empty(year: i32) -> Self {
        Self {
            year,
            rows: Vec::new(),
            max_income: None,
            max_home_value: None,
        }
    }
}

/// Project the merged table onto a selected year.
///
/// Unsupported years yield an empty projection rather than an error. The
/// filter keeps a record iff both the home value and the income for the year
/// are positive finite numbers; extremals are computed over all records in
/// table order with first-match tie-breaking.
pub fn project(table: &MergedTable, year: i32) -> Projection {
    let Some(idx) = year_index(year) else {
        return Projection::empty(year);
    };

    let rows = table
        .records()
        .iter()
        .filter(|r| is_plottable(r.home_value_at(idx)) && is_plottable(r.income_at(idx)))
        .map(|r| ScatterPoint {
            region_name: r.region_name.clone(),
            group: r.group,
            home_value: r.home_value_at(idx),
            income: r.income_at(idx),
        })
        .collect();

    Projection {
        year,
        rows,
        max_income: extremal_row(table, |r| r.income_at(idx), idx),
        max_home_value: extremal_row(table, |r| r.home_value_at(idx), idx),
    }
}

fn is_plottable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// First record (in table order) achieving the maximum of `field` over the
/// entire table, NaN entries ignored. `None` when no record has a value.
fn extremal_row<F>(table: &MergedTable, field: F, idx: usize) -> Option<ExtremalRow>
where
    F: Fn(&StateRecord) -> f64,
{
    let mut max = f64::NAN;
    for record in table.records() {
        let v = field(record);
        if !v.is_nan() && (max.is_nan() || v > max) {
            max = v;
        }
    }
    if max.is_nan() {
        return None;
    }

    table
        .records()
        .iter()
        .find(|r| field(r) == max)
        .map(|r| ExtremalRow {
            region_name: r.region_name.clone(),
            group: r.group,
            value: max,
            home_value: r.home_value_at(idx),
            income: r.income_at(idx),
        })
}

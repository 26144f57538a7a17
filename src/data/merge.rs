//! Dataset Merge Module
//! Joins the home value table with the income table into one record set
//! keyed by region name, parsing incomes from comma-grouped strings.

use std::collections::HashMap;

use crate::data::loader::{HomeValueRow, IncomeRow};
use crate::data::projection::YEAR_COUNT;
use crate::data::region::{classify, Group};

/// One merged row: home values from the home value table, incomes attached
/// by the join (absent when the region has no income row), and the derived
/// geographic group.
#[derive(Debug, Clone, PartialEq)]
pub struct StateRecord {
    pub region_name: String,
    pub home_values: [f64; YEAR_COUNT],
    pub incomes: Option<[f64; YEAR_COUNT]>,
    pub group: Group,
}

impl StateRecord {
    pub fn home_value_at(&self, idx: usize) -> f64 {
        self.home_values[idx]
    }

    /// Income for a year index; NaN when the join missed or the parse failed.
    pub fn income_at(&self, idx: usize) -> f64 {
        match &self.incomes {
            Some(incomes) => incomes[idx],
            None => f64::NAN,
        }
    }
}

/// The merged dataset: built once after both loads complete, read-only for
/// every projection thereafter. Record order is home-value-table order.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedTable {
    records: Vec<StateRecord>,
}

impl MergedTable {
    /// Join the two tables.
    ///
    /// Income rows are keyed by their trimmed state name (last write wins on
    /// duplicates); home value rows look up their region name untrimmed.
    /// The asymmetry matches the source implementation and means a padded
    /// `RegionName` silently misses the join.
    pub fn build(home_rows: Vec<HomeValueRow>, income_rows: Vec<IncomeRow>) -> Self {
        let mut income_lookup: HashMap<String, IncomeRow> = HashMap::new();
        for row in income_rows {
            income_lookup.insert(row.state.trim().to_string(), row);
        }

        let records = home_rows
            .into_iter()
            .map(|home| {
                let incomes = match income_lookup.get(home.region_name.as_str()) {
                    Some(income) => Some(parse_incomes(&home.region_name, income)),
                    None => {
                        log::warn!("no income row for region '{}'", home.region_name);
                        None
                    }
                };
                let group = classify(&home.region_name);
                StateRecord {
                    region_name: home.region_name,
                    home_values: home.values,
                    incomes,
                    group,
                }
            })
            .collect();

        Self { records }
    }

    pub fn records(&self) -> &[StateRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn parse_incomes(region_name: &str, income: &IncomeRow) -> [f64; YEAR_COUNT] {
    let mut parsed = [f64::NAN; YEAR_COUNT];
    for (i, raw) in income.values.iter().enumerate() {
        parsed[i] = parse_grouped_int(raw);
        if parsed[i].is_nan() {
            log::debug!("unparseable income '{}' for region '{}'", raw, region_name);
        }
    }
    parsed
}

/// Parse a comma-grouped integer string (`"62,843"` -> 62843.0).
///
/// Comma separators are stripped and the leading integer prefix parsed;
/// anything without one yields NaN rather than an error.
pub fn parse_grouped_int(raw: &str) -> f64 {
    let cleaned = raw.replace(',', "");
    let s = cleaned.trim();

    let bytes = s.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return f64::NAN;
    }

    match s[..end].parse::<i64>() {
        Ok(v) => v as f64,
        Err(_) => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::projection::SUPPORTED_YEARS;

    fn income_row(state: &str, value: &str) -> IncomeRow {
        IncomeRow {
            state: state.to_string(),
            values: std::array::from_fn(|_| value.to_string()),
        }
    }

    fn home_row(name: &str, value: f64) -> HomeValueRow {
        HomeValueRow {
            region_name: name.to_string(),
            values: [value; YEAR_COUNT],
        }
    }

    #[test]
    fn parses_grouped_integers() {
        assert_eq!(parse_grouped_int("62,843"), 62843.0);
        assert_eq!(parse_grouped_int("1,234,567"), 1234567.0);
        assert_eq!(parse_grouped_int("500"), 500.0);
        assert_eq!(parse_grouped_int(" 38,622 "), 38622.0);
        assert_eq!(parse_grouped_int("-1,000"), -1000.0);
        assert_eq!(parse_grouped_int("42abc"), 42.0);
    }

    #[test]
    fn malformed_input_parses_to_nan() {
        assert!(parse_grouped_int("").is_nan());
        assert!(parse_grouped_int("n/a").is_nan());
        assert!(parse_grouped_int("-").is_nan());
        assert!(parse_grouped_int(",,,").is_nan());
    }

    #[test]
    fn matched_rows_carry_all_parsed_incomes() {
        let table = MergedTable::build(
            vec![home_row("Ohio", 120000.0)],
            vec![income_row("Ohio", "38,622")],
        );
        let record = &table.records()[0];
        let incomes = record.incomes.expect("join should hit");
        assert_eq!(incomes.len(), SUPPORTED_YEARS.len());
        for income in incomes {
            assert_eq!(income, 38622.0);
        }
        assert_eq!(record.group, Group::East);
    }

    #[test]
    fn unmatched_rows_keep_home_values_only() {
        let table = MergedTable::build(
            vec![home_row("Guam", 90000.0)],
            vec![income_row("Ohio", "38,622")],
        );
        let record = &table.records()[0];
        assert_eq!(record.incomes, None);
        assert!(record.income_at(0).is_nan());
        assert_eq!(record.home_value_at(0), 90000.0);
        assert_eq!(record.group, Group::Unknown);
    }

    #[test]
    fn income_state_names_are_trimmed_for_lookup() {
        let table = MergedTable::build(
            vec![home_row("Ohio", 120000.0)],
            vec![income_row("  Ohio  ", "38,622")],
        );
        assert!(table.records()[0].incomes.is_some());
    }

    #[test]
    fn padded_region_names_miss_the_join() {
        // home value side is deliberately not trimmed
        let table = MergedTable::build(
            vec![home_row(" Ohio", 120000.0)],
            vec![income_row("Ohio", "38,622")],
        );
        assert_eq!(table.records()[0].incomes, None);
    }

    #[test]
    fn duplicate_income_states_last_write_wins() {
        let table = MergedTable::build(
            vec![home_row("Ohio", 120000.0)],
            vec![income_row("Ohio", "10,000"), income_row("Ohio", "20,000")],
        );
        assert_eq!(table.records()[0].income_at(0), 20000.0);
    }

    #[test]
    fn record_order_follows_home_value_table() {
        let table = MergedTable::build(
            vec![
                home_row("Texas", 1.0),
                home_row("Ohio", 2.0),
                home_row("Nevada", 3.0),
            ],
            vec![],
        );
        let names: Vec<&str> = table.records().iter().map(|r| r.region_name.as_str()).collect();
        assert_eq!(names, vec!["Texas", "Ohio", "Nevada"]);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }
}

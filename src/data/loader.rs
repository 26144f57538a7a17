//! CSV Dataset Loader Module
//! Loads the home value and income tables with Polars and extracts
//! typed rows for the merge step.

use polars::prelude::*;
use thiserror::Error;

use crate::data::projection::{home_value_column, SUPPORTED_YEARS, YEAR_COUNT};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Missing required column '{0}'")]
    MissingColumn(String),
}

/// One row of the home value table. Values are indexed per supported year,
/// NaN where the source cell is blank or unparseable.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeValueRow {
    pub region_name: String,
    pub values: [f64; YEAR_COUNT],
}

/// One row of the income table. Values stay raw comma-grouped strings here;
/// parsing happens at merge time.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeRow {
    pub state: String,
    pub values: [String; YEAR_COUNT],
}

/// Loads the two source CSVs with Polars.
pub struct DatasetLoader;

impl DatasetLoader {
    pub fn load_home_values(path: &str) -> Result<Vec<HomeValueRow>, LoaderError> {
        let df = Self::read_csv(path)?;
        log::info!("loaded home value table: {} rows from {}", df.height(), path);
        Self::home_values_from_frame(&df)
    }

    pub fn load_incomes(path: &str) -> Result<Vec<IncomeRow>, LoaderError> {
        let df = Self::read_csv(path)?;
        log::info!("loaded income table: {} rows from {}", df.height(), path);
        Self::incomes_from_frame(&df)
    }

    fn read_csv(path: &str) -> Result<DataFrame, LoaderError> {
        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;
        Ok(df)
    }

    /// Extract typed home value rows. The `RegionName` column is required;
    /// missing year columns just leave NaN values.
    pub fn home_values_from_frame(df: &DataFrame) -> Result<Vec<HomeValueRow>, LoaderError> {
        let names = Self::key_column(df, "RegionName")?;

        let mut year_values: Vec<Vec<f64>> = Vec::with_capacity(YEAR_COUNT);
        for &year in &SUPPORTED_YEARS {
            year_values.push(Self::numeric_column(df, &home_value_column(year)));
        }

        let rows = names
            .into_iter()
            .enumerate()
            .filter_map(|(i, name)| {
                let region_name = name?;
                let mut values = [f64::NAN; YEAR_COUNT];
                for (y, column) in year_values.iter().enumerate() {
                    values[y] = column.get(i).copied().unwrap_or(f64::NAN);
                }
                Some(HomeValueRow {
                    region_name,
                    values,
                })
            })
            .collect();
        Ok(rows)
    }

    /// Extract typed income rows. The `State` column is required; missing
    /// year columns leave empty strings, which later parse to NaN.
    pub fn incomes_from_frame(df: &DataFrame) -> Result<Vec<IncomeRow>, LoaderError> {
        let states = Self::key_column(df, "State")?;

        let mut year_values: Vec<Vec<String>> = Vec::with_capacity(YEAR_COUNT);
        for &year in &SUPPORTED_YEARS {
            year_values.push(Self::raw_string_column(df, &year.to_string()));
        }

        let rows = states
            .into_iter()
            .enumerate()
            .filter_map(|(i, state)| {
                let state = state?;
                let values: [String; YEAR_COUNT] = std::array::from_fn(|y| {
                    year_values[y].get(i).cloned().unwrap_or_default()
                });
                Some(IncomeRow { state, values })
            })
            .collect();
        Ok(rows)
    }

    /// Read a required key column as strings; rows with a null key are
    /// dropped (`None`).
    fn key_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, LoaderError> {
        let column = df
            .column(name)
            .map_err(|_| LoaderError::MissingColumn(name.to_string()))?;

        let mut out = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let val = column.get(i)?;
            if val.is_null() {
                log::warn!("dropping row {} with null '{}'", i, name);
                out.push(None);
            } else {
                out.push(Some(val.to_string().trim_matches('"').to_string()));
            }
        }
        Ok(out)
    }

    /// Read an optional numeric column, NaN for nulls, all NaN when the
    /// column is absent or cannot be cast.
    fn numeric_column(df: &DataFrame, name: &str) -> Vec<f64> {
        let Ok(column) = df.column(name) else {
            return vec![f64::NAN; df.height()];
        };
        match column.cast(&DataType::Float64) {
            Ok(cast) => match cast.f64() {
                Ok(ca) => ca.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect(),
                Err(_) => vec![f64::NAN; df.height()],
            },
            Err(_) => vec![f64::NAN; df.height()],
        }
    }

    /// Read an optional column as raw strings, empty for nulls and for an
    /// absent column.
    fn raw_string_column(df: &DataFrame, name: &str) -> Vec<String> {
        let Ok(column) = df.column(name) else {
            return vec![String::new(); df.height()];
        };
        (0..df.height())
            .map(|i| match column.get(i) {
                Ok(val) if !val.is_null() => val.to_string().trim_matches('"').to_string(),
                _ => String::new(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_home_value_rows() {
        let df = df!(
            "RegionName" => ["Ohio", "Texas"],
            "SizeRank" => [35i64, 2],
            "2000-12-31" => [Some(120000.0), None],
            "2005-12-31" => [Some(135000.0), Some(125000.0)],
        )
        .unwrap();

        let rows = DatasetLoader::home_values_from_frame(&df).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].region_name, "Ohio");
        assert_eq!(rows[0].values[0], 120000.0);
        assert_eq!(rows[0].values[1], 135000.0);
        // blank cell and missing year columns show up as NaN
        assert!(rows[1].values[0].is_nan());
        assert!(rows[0].values[2].is_nan());
    }

    #[test]
    fn missing_region_name_column_is_an_error() {
        let df = df!("State" => ["Ohio"]).unwrap();
        let err = DatasetLoader::home_values_from_frame(&df).unwrap_err();
        assert!(matches!(err, LoaderError::MissingColumn(ref c) if c == "RegionName"));
    }

    #[test]
    fn extracts_income_rows_keeping_raw_strings() {
        let df = df!(
            "State" => [" Ohio ", "Texas"],
            "2000" => ["38,622", "39,927"],
            "2005" => [44000i64, 43000],
        )
        .unwrap();

        let rows = DatasetLoader::incomes_from_frame(&df).unwrap();
        assert_eq!(rows.len(), 2);
        // padding survives extraction; trimming is the merge's business
        assert_eq!(rows[0].state, " Ohio ");
        assert_eq!(rows[0].values[0], "38,622");
        assert_eq!(rows[0].values[1], "44000");
        assert_eq!(rows[0].values[2], "");
    }

    #[test]
    fn missing_state_column_is_an_error() {
        let df = df!("RegionName" => ["Ohio"]).unwrap();
        let err = DatasetLoader::incomes_from_frame(&df).unwrap_err();
        assert!(matches!(err, LoaderError::MissingColumn(ref c) if c == "State"));
    }
}

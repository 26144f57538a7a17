//! Data module - CSV loading, merging, classification and projection

mod loader;
mod merge;
mod projection;
mod region;

pub use loader::{DatasetLoader, HomeValueRow, IncomeRow, LoaderError};
pub use merge::{MergedTable, StateRecord};
pub use projection::{
    project, year_index, ExtremalRow, Projection, ScatterPoint, SUPPORTED_YEARS, YEAR_COUNT,
};
pub use region::{classify, Group};

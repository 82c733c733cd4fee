use polars::prelude::*;

/// Trait for converting holdings structures into Polars DataFrames.
///
/// Column names match the exported table headers, so a frame built here lines up
/// with the JSON export and the chart data.
pub trait ToDataFrame {
    /// Converts the object into a Polars DataFrame.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;

    /// Creates an empty DataFrame with the correct schema for this type.
    fn empty_dataframe() -> PolarsResult<DataFrame>
    where
        Self: Sized;
}

use polars::prelude::*;
use std::path::Path;

use crate::error::{DashboardError, DashboardResult};
use crate::models::{DailyRecord, HourlyRecord, RentalCounts};
use crate::parsing::fields::{parse_date, parse_month};

pub const DATE_COLUMN: &str = "dteday";
pub const SEASON_COLUMN: &str = "season_new";
pub const WEEKDAY_COLUMN: &str = "weekday_new";
pub const MONTH_COLUMN: &str = "mnth";
pub const YEAR_COLUMN: &str = "Year";
pub const CASUAL_COLUMN: &str = "casual";
pub const REGISTERED_COLUMN: &str = "registered";
pub const COUNT_COLUMN: &str = "cnt";
pub const HOUR_COLUMN: &str = "hr";

/// Columns every daily file must carry. Other columns are ignored.
pub const DAILY_COLUMNS: [&str; 8] = [
    DATE_COLUMN,
    SEASON_COLUMN,
    WEEKDAY_COLUMN,
    MONTH_COLUMN,
    YEAR_COLUMN,
    CASUAL_COLUMN,
    REGISTERED_COLUMN,
    COUNT_COLUMN,
];

/// Columns every hourly file must carry.
pub const HOURLY_COLUMNS: [&str; 9] = [
    DATE_COLUMN,
    HOUR_COLUMN,
    SEASON_COLUMN,
    WEEKDAY_COLUMN,
    MONTH_COLUMN,
    YEAR_COLUMN,
    CASUAL_COLUMN,
    REGISTERED_COLUMN,
    COUNT_COLUMN,
];

const DAILY_TABLE: &str = "daily";
const HOURLY_TABLE: &str = "hourly";

/// Read a CSV file into a Polars DataFrame restricted to `required` columns,
/// each cast to the type the record conversion expects.
pub fn read_rental_table(
    csv_path: &Path,
    table: &'static str,
    required: &[&str],
) -> DashboardResult<DataFrame> {
    std::fs::metadata(csv_path).map_err(|source| DashboardError::Io {
        path: csv_path.to_path_buf(),
        source,
    })?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path.into()))?
        .finish()?;

    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    if let Some(missing) = required
        .iter()
        .find(|name| !column_names.iter().any(|c| c == *name))
    {
        return Err(DashboardError::MissingColumn {
            table,
            column: missing.to_string(),
        });
    }

    // Labels and dates stay textual and are parsed per row; counts become Int64
    // (a failed cast yields null, reported with its row below).
    let casts: Vec<Expr> = required
        .iter()
        .map(|name| match *name {
            DATE_COLUMN | SEASON_COLUMN | WEEKDAY_COLUMN | MONTH_COLUMN => {
                col(*name).cast(DataType::String)
            }
            _ => col(*name).cast(DataType::Int64),
        })
        .collect();

    let df = df.lazy().select(casts).collect()?;

    Ok(df)
}

/// Parse the daily CSV file into records, in file order.
pub fn parse_daily_csv(csv_path: &Path) -> DashboardResult<Vec<DailyRecord>> {
    let df = read_rental_table(csv_path, DAILY_TABLE, &DAILY_COLUMNS)?;
    dataframe_to_daily(&df)
}

/// Parse the hourly CSV file into records, in file order.
pub fn parse_hourly_csv(csv_path: &Path) -> DashboardResult<Vec<HourlyRecord>> {
    let df = read_rental_table(csv_path, HOURLY_TABLE, &HOURLY_COLUMNS)?;
    dataframe_to_hourly(&df)
}

/// Columns shared by both tables, borrowed from a DataFrame.
struct CommonColumns<'a> {
    dates: &'a StringChunked,
    seasons: &'a StringChunked,
    weekdays: &'a StringChunked,
    months: &'a StringChunked,
    years: &'a Int64Chunked,
    casual: &'a Int64Chunked,
    registered: &'a Int64Chunked,
    cnt: &'a Int64Chunked,
}

/// Fields shared by both record types for a single row.
struct CommonRow {
    date: chrono::NaiveDate,
    season: String,
    weekday: String,
    month: u32,
    year: i32,
    counts: RentalCounts,
}

impl<'a> CommonColumns<'a> {
    fn from_dataframe(df: &'a DataFrame) -> DashboardResult<Self> {
        Ok(Self {
            dates: df.column(DATE_COLUMN)?.str()?,
            seasons: df.column(SEASON_COLUMN)?.str()?,
            weekdays: df.column(WEEKDAY_COLUMN)?.str()?,
            months: df.column(MONTH_COLUMN)?.str()?,
            years: df.column(YEAR_COLUMN)?.i64()?,
            casual: df.column(CASUAL_COLUMN)?.i64()?,
            registered: df.column(REGISTERED_COLUMN)?.i64()?,
            cnt: df.column(COUNT_COLUMN)?.i64()?,
        })
    }

    fn row(&self, table: &'static str, i: usize) -> DashboardResult<CommonRow> {
        let raw_date = required(self.dates.get(i), i, DATE_COLUMN)?;
        let date = parse_date(raw_date).ok_or_else(|| {
            DashboardError::invalid_value(i, DATE_COLUMN, format!("unparsable date '{}'", raw_date))
        })?;

        let raw_month = required(self.months.get(i), i, MONTH_COLUMN)?;
        let month = parse_month(raw_month).ok_or_else(|| {
            DashboardError::invalid_value(i, MONTH_COLUMN, format!("unknown month '{}'", raw_month))
        })?;

        let year = required(self.years.get(i), i, YEAR_COLUMN)?;
        let year = i32::try_from(year).map_err(|_| {
            DashboardError::invalid_value(i, YEAR_COLUMN, format!("year {} out of range", year))
        })?;

        let counts = RentalCounts {
            casual: required(self.casual.get(i), i, CASUAL_COLUMN)?,
            registered: required(self.registered.get(i), i, REGISTERED_COLUMN)?,
            cnt: required(self.cnt.get(i), i, COUNT_COLUMN)?,
        };
        if !counts.is_consistent() {
            return Err(DashboardError::InvariantViolation {
                table,
                row: i,
                casual: counts.casual,
                registered: counts.registered,
                cnt: counts.cnt,
            });
        }

        Ok(CommonRow {
            date,
            season: required(self.seasons.get(i), i, SEASON_COLUMN)?.trim().to_string(),
            weekday: required(self.weekdays.get(i), i, WEEKDAY_COLUMN)?.trim().to_string(),
            month,
            year,
            counts,
        })
    }
}

fn required<T>(value: Option<T>, row: usize, column: &str) -> DashboardResult<T> {
    value.ok_or_else(|| DashboardError::invalid_value(row, column, "missing value"))
}

/// Convert a DataFrame produced by [`read_rental_table`] into daily records
pub fn dataframe_to_daily(df: &DataFrame) -> DashboardResult<Vec<DailyRecord>> {
    let columns = CommonColumns::from_dataframe(df)?;
    let mut records = Vec::with_capacity(df.height());

    for i in 0..df.height() {
        let row = columns.row(DAILY_TABLE, i)?;
        records.push(DailyRecord {
            date: row.date,
            season: row.season,
            weekday: row.weekday,
            month: row.month,
            year: row.year,
            counts: row.counts,
        });
    }

    Ok(records)
}

/// Convert a DataFrame produced by [`read_rental_table`] into hourly records
pub fn dataframe_to_hourly(df: &DataFrame) -> DashboardResult<Vec<HourlyRecord>> {
    let columns = CommonColumns::from_dataframe(df)?;
    let hours = df.column(HOUR_COLUMN)?.i64()?;
    let mut records = Vec::with_capacity(df.height());

    for i in 0..df.height() {
        let row = columns.row(HOURLY_TABLE, i)?;
        let hour = required(hours.get(i), i, HOUR_COLUMN)?;
        if !(0..=23).contains(&hour) {
            return Err(DashboardError::invalid_value(
                i,
                HOUR_COLUMN,
                format!("hour {} outside 0..=23", hour),
            ));
        }

        records.push(HourlyRecord {
            date: row.date,
            hour: hour as u32,
            season: row.season,
            weekday: row.weekday,
            month: row.month,
            year: row.year,
            counts: row.counts,
        });
    }

    Ok(records)
}

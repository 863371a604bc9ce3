use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type, Int64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::error::LoadError;
use super::model::{
    JobPosting, JobTable, COL_EXPERIENCE, COL_IS_TECH, COL_LOCATION, COL_SALARY, REQUIRED_COLUMNS,
};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a job postings table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with at least the required columns
/// * `.json`    – `[{ "location": ..., "is_tech": ..., ... }, ...]`
/// * `.parquet` – one column per field, extra columns ignored
pub fn load_file(path: &Path) -> Result<JobTable, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    log::debug!("loading {} as .{ext}", path.display());

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(LoadError::UnsupportedFormat(other.to_string())),
    }
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// The header is validated up front so a missing column is reported by name
/// rather than as a deserialization failure on the first record.
fn load_csv(path: &Path) -> Result<JobTable, LoadError> {
    let mut reader = csv::Reader::from_reader(open(path)?);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let postings = reader
        .deserialize::<JobPosting>()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(JobTable::from_postings(postings))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`.
fn load_json(path: &Path) -> Result<JobTable, LoadError> {
    let postings: Vec<JobPosting> = serde_json::from_reader(BufReader::new(open(path)?))?;
    Ok(JobTable::from_postings(postings))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Works with files written by both Pandas (`df.to_parquet()`) and Polars.
fn load_parquet(path: &Path) -> Result<JobTable, LoadError> {
    let reader = ParquetRecordBatchReaderBuilder::try_new(open(path)?)?.build()?;

    let mut postings = Vec::new();
    for batch in reader {
        let batch = batch?;
        let offset = postings.len();

        let locations = string_values(required_column(&batch, COL_LOCATION)?, COL_LOCATION, offset)?;
        let flags = flag_values(required_column(&batch, COL_IS_TECH)?, COL_IS_TECH, offset)?;
        let salaries = float_values(required_column(&batch, COL_SALARY)?, COL_SALARY, offset)?;
        let experience =
            float_values(required_column(&batch, COL_EXPERIENCE)?, COL_EXPERIENCE, offset)?;

        postings.extend(
            locations
                .into_iter()
                .zip(flags)
                .zip(salaries)
                .zip(experience)
                .map(|(((location, is_tech), average_salary), average_experience)| JobPosting {
                    location,
                    is_tech,
                    average_salary,
                    average_experience,
                }),
        );
    }

    Ok(JobTable::from_postings(postings))
}

// -- Arrow helpers --

fn required_column<'a>(batch: &'a RecordBatch, name: &'static str) -> Result<&'a ArrayRef, LoadError> {
    batch.column_by_name(name).ok_or(LoadError::MissingColumn(name))
}

fn ensure_no_nulls(col: &dyn Array, name: &'static str, offset: usize) -> Result<(), LoadError> {
    match (0..col.len()).find(|&i| col.is_null(i)) {
        Some(i) => Err(LoadError::NullValue {
            column: name,
            row: offset + i,
        }),
        None => Ok(()),
    }
}

fn string_values(col: &ArrayRef, name: &'static str, offset: usize) -> Result<Vec<String>, LoadError> {
    ensure_no_nulls(col.as_ref(), name, offset)?;
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().iter().flatten().map(str::to_string).collect()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().iter().flatten().map(str::to_string).collect()),
        other => Err(LoadError::ColumnType {
            column: name,
            found: format!("{other:?}"),
        }),
    }
}

/// Any integer or floating point column, widened to `f64`.
fn float_values(col: &ArrayRef, name: &'static str, offset: usize) -> Result<Vec<f64>, LoadError> {
    ensure_no_nulls(col.as_ref(), name, offset)?;
    if !col.data_type().is_numeric() {
        return Err(LoadError::ColumnType {
            column: name,
            found: format!("{:?}", col.data_type()),
        });
    }
    let widened = cast(col, &DataType::Float64)?;
    Ok(widened.as_primitive::<Float64Type>().values().to_vec())
}

/// Boolean columns, or integer columns holding only 0 and 1 (the same rule
/// the CSV and JSON loaders apply).
fn flag_values(col: &ArrayRef, name: &'static str, offset: usize) -> Result<Vec<bool>, LoadError> {
    ensure_no_nulls(col.as_ref(), name, offset)?;
    match col.data_type() {
        DataType::Boolean => Ok(col.as_boolean().iter().flatten().collect()),
        dt if dt.is_integer() => {
            let widened = cast(col, &DataType::Int64)?;
            widened
                .as_primitive::<Int64Type>()
                .values()
                .iter()
                .enumerate()
                .map(|(i, &v)| match v {
                    0 => Ok(false),
                    1 => Ok(true),
                    value => Err(LoadError::InvalidFlag {
                        column: name,
                        row: offset + i,
                        value,
                    }),
                })
                .collect()
        }
        other => Err(LoadError::ColumnType {
            column: name,
            found: format!("{other:?}"),
        }),
    }
}

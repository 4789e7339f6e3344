use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Dataset, Row, TypeColumn};

/// Columns that must be present after the leading index column.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "placename",
    "year",
    "type",
    "type_biased",
    "count_year",
    "count_total",
];

/// Default input file, resolved against the working directory.
pub const DEFAULT_DATA_FILE: &str = "location_counts_by_year.csv";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),
    #[error("CSV row {row}, column '{column}': '{value}' is not a valid value")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load the counts table from `path`.
///
/// CSV layout: a header row, then records. The first column is a row index
/// written by the producing dataframe and is discarded whatever its name.
/// Remaining columns are looked up by header; extra columns are ignored.
pub fn load_csv(path: &Path, type_column: TypeColumn) -> Result<Dataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(file, type_column)
}

/// Parse the counts table from any reader. See [`load_csv`].
pub fn read_csv<R: std::io::Read>(input: R, type_column: TypeColumn) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new().flexible(false).from_reader(input);
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let idx = ColumnIndex::locate(&headers)?;
    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        let field = |i: usize| record.get(i).unwrap_or("").trim();

        rows.push(Row {
            placename: field(idx.placename).to_string(),
            year: parse_int(field(idx.year), row_no, "year")?,
            kind: field(idx.kind).to_string(),
            kind_biased: field(idx.kind_biased).to_string(),
            count_year: parse_int(field(idx.count_year), row_no, "count_year")?,
            count_total: parse_int(field(idx.count_total), row_no, "count_total")?,
        });
    }

    Ok(Dataset::new(rows, type_column))
}

/// Header positions of the required columns.
struct ColumnIndex {
    placename: usize,
    year: usize,
    kind: usize,
    kind_biased: usize,
    count_year: usize,
    count_total: usize,
}

impl ColumnIndex {
    fn locate(headers: &[String]) -> Result<Self, LoadError> {
        // Position 0 is the index column.
        let find = |name: &'static str| {
            headers
                .iter()
                .skip(1)
                .position(|h| h == name)
                .map(|p| p + 1)
                .ok_or(LoadError::MissingColumn(name))
        };
        Ok(ColumnIndex {
            placename: find(REQUIRED_COLUMNS[0])?,
            year: find(REQUIRED_COLUMNS[1])?,
            kind: find(REQUIRED_COLUMNS[2])?,
            kind_biased: find(REQUIRED_COLUMNS[3])?,
            count_year: find(REQUIRED_COLUMNS[4])?,
            count_total: find(REQUIRED_COLUMNS[5])?,
        })
    }
}

fn parse_int<T: std::str::FromStr>(s: &str, row: usize, column: &'static str) -> Result<T, LoadError> {
    s.parse::<T>().map_err(|_| LoadError::InvalidValue {
        row,
        column,
        value: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const GOOD: &str = "\
,placename,year,type,type_biased,count_year,count_total
0,Sydney,2000,city,city,50,500
1,Sydney,2001,city,city,30,500
2,Perth,2000,city,state,20,200
";

    #[test]
    fn loads_rows_in_file_order() {
        let ds = read_csv(GOOD.as_bytes(), TypeColumn::Type).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.rows[0].placename, "Sydney");
        assert_eq!(ds.rows[1].year, 2001);
        assert_eq!(ds.rows[2].kind_biased, "state");
        assert_eq!(ds.rows[2].count_total, 200);
    }

    #[test]
    fn first_column_is_discarded_even_when_named() {
        let csv = "placename,year,type,type_biased,count_year,count_total\nX,1,a,a,1,1\n";
        let err = read_csv(csv.as_bytes(), TypeColumn::Type).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("placename")));
    }

    #[test]
    fn extra_and_reordered_columns_are_accepted() {
        let csv = "\
idx,count_total,note,placename,type_biased,type,year,count_year
7,10,hello,Hobart,city,city,1999,4
";
        let ds = read_csv(csv.as_bytes(), TypeColumn::TypeBiased).unwrap();
        assert_eq!(ds.rows[0].placename, "Hobart");
        assert_eq!(ds.rows[0].year, 1999);
        assert_eq!(ds.rows[0].count_year, 4);
        assert_eq!(ds.rows[0].count_total, 10);
        assert_eq!(ds.type_column, TypeColumn::TypeBiased);
    }

    #[test]
    fn missing_required_column_fails() {
        let csv = ",placename,year,type,count_year,count_total\n0,X,1,a,1,1\n";
        let err = read_csv(csv.as_bytes(), TypeColumn::Type).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("type_biased")));
    }

    #[test]
    fn negative_count_is_invalid() {
        let csv = ",placename,year,type,type_biased,count_year,count_total\n0,X,1,a,a,-1,1\n";
        let err = read_csv(csv.as_bytes(), TypeColumn::Type).unwrap_err();
        match err {
            LoadError::InvalidValue { row, column, value } => {
                assert_eq!(row, 0);
                assert_eq!(column, "count_year");
                assert_eq!(value, "-1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn ragged_record_is_malformed() {
        let csv = ",placename,year,type,type_biased,count_year,count_total\n0,X,1\n";
        let err = read_csv(csv.as_bytes(), TypeColumn::Type).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_csv(Path::new("/definitely/not/here.csv"), TypeColumn::Type).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(GOOD.as_bytes()).unwrap();
        let ds = load_csv(file.path(), TypeColumn::Type).unwrap();
        assert_eq!(ds.len(), 3);
    }
}

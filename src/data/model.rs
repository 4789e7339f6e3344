use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TypeColumn – which CSV column feeds the `type` category
// ---------------------------------------------------------------------------

/// The dataset carries two categorisations of each placename. One of them is
/// chosen at startup and used everywhere a "type" is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TypeColumn {
    #[default]
    Type,
    /// Types biased towards Australia.
    TypeBiased,
}

impl TypeColumn {
    /// Header name of the column in the source CSV.
    pub fn header(self) -> &'static str {
        match self {
            TypeColumn::Type => "type",
            TypeColumn::TypeBiased => "type_biased",
        }
    }
}

// ---------------------------------------------------------------------------
// Row – one record of the CSV
// ---------------------------------------------------------------------------

/// Occurrence counts of one placename in one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub placename: String,
    pub year: i32,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "type_biased")]
    pub kind_biased: String,
    /// Occurrences of this placename in this year.
    pub count_year: u64,
    /// Occurrences of this placename across all years.
    pub count_total: u64,
}

impl Row {
    /// The category used for filtering and colouring.
    pub fn category(&self, column: TypeColumn) -> &str {
        match column {
            TypeColumn::Type => &self.kind,
            TypeColumn::TypeBiased => &self.kind_biased,
        }
    }

    pub(crate) fn category_mut(&mut self, column: TypeColumn) -> &mut String {
        match column {
            TypeColumn::Type => &mut self.kind,
            TypeColumn::TypeBiased => &mut self.kind_biased,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// All rows in file order, plus the type column chosen at startup.
///
/// Built once and never mutated afterwards; renders borrow it.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub rows: Vec<Row>,
    pub type_column: TypeColumn,
}

impl Dataset {
    pub fn new(rows: Vec<Row>, type_column: TypeColumn) -> Self {
        Dataset { rows, type_column }
    }

    /// Category of `row` under the configured type column.
    pub fn type_of<'a>(&self, row: &'a Row) -> &'a str {
        row.category(self.type_column)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_column_selects_category() {
        let mut r = testing::row("Darwin", 1990, "city", 1, 1);
        r.kind_biased = "territory".to_string();
        assert_eq!(r.category(TypeColumn::Type), "city");
        assert_eq!(r.category(TypeColumn::TypeBiased), "territory");

        let ds = Dataset::new(vec![r.clone()], TypeColumn::TypeBiased);
        assert_eq!(ds.type_of(&ds.rows[0]), "territory");
    }
}

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::data::model::TypeColumn;

// ---------------------------------------------------------------------------
// Variant – the two shipped dashboard flavours
// ---------------------------------------------------------------------------

/// Which dashboard flavour to run. Fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Raw types, year-range inputs, year options follow the placename selection.
    #[default]
    Full,
    /// Normalized types, count inputs only, every year offered.
    Normalized,
}

/// A numeric input exposed by a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumericField {
    YearStart,
    YearEnd,
    MinCountTotal,
    MaxCountTotal,
}

impl NumericField {
    /// Placeholder shown in an empty input.
    pub fn placeholder(self) -> &'static str {
        match self {
            NumericField::YearStart => "Year Start",
            NumericField::YearEnd => "Year End",
            NumericField::MinCountTotal => "Min count total",
            NumericField::MaxCountTotal => "Max count total",
        }
    }
}

impl Variant {
    pub fn normalizes_types(self) -> bool {
        matches!(self, Variant::Normalized)
    }

    /// Whether the year options are derived from the placename selection.
    pub fn dependent_years(self) -> bool {
        matches!(self, Variant::Full)
    }

    pub fn year_range_inputs(self) -> bool {
        matches!(self, Variant::Full)
    }

    pub fn numeric_fields(self) -> &'static [NumericField] {
        match self {
            Variant::Full => &[
                NumericField::YearStart,
                NumericField::YearEnd,
                NumericField::MinCountTotal,
                NumericField::MaxCountTotal,
            ],
            Variant::Normalized => &[NumericField::MinCountTotal, NumericField::MaxCountTotal],
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            Variant::Full => 8050,
            Variant::Normalized => 8051,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Variant::Full => "Placename counts by year",
            Variant::Normalized => "Placename counts by year (normalized types)",
        }
    }
}

// ---------------------------------------------------------------------------
// DashboardConfig – everything decided before the dataset is loaded
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub variant: Variant,
    pub type_column: TypeColumn,
}

use super::model::Dataset;

/// Types kept as they are by [`normalize_types`].
pub const ALLOWED_TYPES: [&str; 6] = ["continent", "territory", "region", "country", "state", "city"];

/// Catch-all category for everything outside [`ALLOWED_TYPES`].
pub const OTHERS: &str = "others";

/// Fixed option ordering offered when types are normalized.
pub const NORMALIZED_TYPE_ORDER: [&str; 7] = [
    "continent",
    "region",
    "territory",
    "country",
    "state",
    "city",
    OTHERS,
];

/// Map a single type value into the allowed vocabulary.
pub fn normalize_type(value: &str) -> &str {
    if ALLOWED_TYPES.contains(&value) {
        value
    } else {
        OTHERS
    }
}

/// Collapse the configured type column of every row into the allowed
/// vocabulary. Consumes the freshly loaded dataset before it is shared.
pub fn normalize_types(mut dataset: Dataset) -> Dataset {
    let column = dataset.type_column;
    for row in &mut dataset.rows {
        let value = row.category_mut(column);
        if normalize_type(value) == OTHERS {
            *value = OTHERS.to_string();
        }
    }
    dataset
}

// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw loader rows and their normalization into canonical event records.

use alloc::string::String;
use alloc::vec::Vec;

/// Attribution assigned to records whose source row carried none.
pub const DEFAULT_ATTRIBUTION: &str = "default";

/// The year column of a raw row.
///
/// Spreadsheet-published feeds deliver the year either as a number or as
/// numeric text, depending on cell formatting. Both forms normalize to the
/// same integer; anything else drops the row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum YearField {
    /// A numeric year value.
    Number(i64),
    /// A textual year value, expected to parse as an integer after trimming.
    Text(String),
}

impl YearField {
    /// Returns the year as an `i32`, or `None` if the field is not usable.
    #[must_use]
    pub fn to_year(&self) -> Option<i32> {
        match self {
            Self::Number(n) => i32::try_from(*n).ok(),
            Self::Text(t) => t.trim().parse::<i32>().ok(),
        }
    }
}

/// A row as delivered by a data-source loader, before normalization.
///
/// Every field is optional; loaders pass through whatever the feed
/// contained and [`normalize_row`] decides what survives. Only `name` and
/// `year` are load-bearing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRow {
    /// Event year, numeric or textual.
    pub year: Option<YearField>,
    /// Event category label (for example `"birth"` or `"building"`).
    pub category: Option<String>,
    /// Person name the event belongs to. Case-sensitive key.
    pub name: Option<String>,
    /// Attribution label (for example `"architect"`).
    pub attribution: Option<String>,
    /// Event title. Also the target of citation references.
    pub title: Option<String>,
    /// Free-text description. May embed citation references.
    pub description: Option<String>,
}

/// Event category.
///
/// `birth` and `death` are structural: they define the lifespan band and
/// survive every category filter. All other labels pass through verbatim as
/// [`Category::Other`]; unrecognized categories are never rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// The person's birth. At most one is expected per person; the last
    /// one seen wins (duplicates are a data-quality issue, not validated).
    Birth,
    /// The person's death. Same duplicate handling as [`Category::Birth`].
    Death,
    /// Any domain category (building, publication, artwork, ...).
    Other(String),
}

impl Category {
    /// Parses a category label. Unrecognized labels become [`Category::Other`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "birth" => Self::Birth,
            "death" => Self::Death,
            other => Self::Other(String::from(other)),
        }
    }

    /// Returns the category label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Birth => "birth",
            Self::Death => "death",
            Self::Other(label) => label,
        }
    }

    /// Returns `true` for the structural `birth` / `death` categories.
    #[must_use]
    pub fn is_lifespan(&self) -> bool {
        matches!(self, Self::Birth | Self::Death)
    }
}

/// A normalized event record, the canonical row shape of the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventRecord {
    /// Event year.
    pub year: i32,
    /// Event category.
    pub category: Category,
    /// Person name. Case-sensitive grouping key.
    pub name: String,
    /// Attribution label, defaulted to [`DEFAULT_ATTRIBUTION`] when absent.
    pub attribution: String,
    /// Event title. Empty when the source row had none.
    pub title: String,
    /// Description text, if the source row carried a non-empty one.
    pub description: Option<String>,
}

/// Normalizes one raw row into an [`EventRecord`].
///
/// Returns `None` for malformed rows: a missing or blank `name`, or a
/// `year` that is absent or not a usable integer. Dropping is silent by
/// design; row-level malformation is expected and never fatal.
#[must_use]
pub fn normalize_row(row: RawRow) -> Option<EventRecord> {
    let name = row.name.filter(|n| !n.trim().is_empty())?;
    let year = row.year.as_ref()?.to_year()?;

    let category = row
        .category
        .map_or(Category::Other(String::new()), |c| Category::from_label(&c));
    let attribution = row
        .attribution
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| String::from(DEFAULT_ATTRIBUTION));

    Some(EventRecord {
        year,
        category,
        name,
        attribution,
        title: row.title.unwrap_or_default(),
        description: row.description.filter(|d| !d.is_empty()),
    })
}

/// Normalizes a sequence of raw rows, dropping malformed ones.
///
/// The relative order of surviving rows is preserved; downstream
/// aggregation derives person insertion order from it.
#[must_use]
pub fn normalize_rows<I>(rows: I) -> Vec<EventRecord>
where
    I: IntoIterator<Item = RawRow>,
{
    rows.into_iter().filter_map(normalize_row).collect()
}

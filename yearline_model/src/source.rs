// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The loader seam: row sources, merging, and the sample-data fallback.

use alloc::string::String;
use alloc::vec::Vec;

use crate::record::RawRow;
use crate::sample::sample_rows;

/// Error produced by a [`RowSource`].
///
/// Source errors are never fatal to the engine; a failing source simply
/// contributes zero rows to the merge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceError {
    /// The source could not be reached (network failure, missing file, ...).
    Unavailable(String),
    /// The source was reached but its payload could not be decoded.
    Malformed(String),
}

impl core::fmt::Display for SourceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unavailable(detail) => write!(f, "source unavailable: {detail}"),
            Self::Malformed(detail) => write!(f, "source payload malformed: {detail}"),
        }
    }
}

impl core::error::Error for SourceError {}

/// A loader collaborator delivering raw rows.
///
/// Retrieval and tabular parsing (CSV fetches and the like) live entirely
/// behind this trait; the engine only ever sees [`RawRow`] sequences.
pub trait RowSource {
    /// Produces this source's rows, or an error if loading failed.
    fn rows(&mut self) -> Result<Vec<RawRow>, SourceError>;
}

/// A [`RowSource`] over rows already in memory.
///
/// Useful for tests, demos, and hosts that do their own fetching.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    rows: Vec<RawRow>,
}

impl StaticSource {
    /// Creates a source that yields the given rows.
    #[must_use]
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }
}

impl RowSource for StaticSource {
    fn rows(&mut self) -> Result<Vec<RawRow>, SourceError> {
        Ok(self.rows.clone())
    }
}

/// A non-fatal notice about data acquisition, for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadNotice {
    /// How many sources failed to load.
    pub failed_sources: usize,
    /// Whether the built-in sample dataset was substituted.
    pub used_fallback: bool,
}

/// The result of merging rows from several sources.
#[derive(Clone, Debug)]
pub struct LoadOutcome {
    /// The merged row sequence, in source order.
    pub rows: Vec<RawRow>,
    /// How many sources failed to load.
    pub failed_sources: usize,
    /// Whether [`sample_rows`] was substituted for the merge result.
    pub used_fallback: bool,
}

impl LoadOutcome {
    /// Returns a notice when there is something for the user to see.
    #[must_use]
    pub fn notice(&self) -> Option<LoadNotice> {
        (self.failed_sources > 0).then_some(LoadNotice {
            failed_sources: self.failed_sources,
            used_fallback: self.used_fallback,
        })
    }
}

/// Merges rows from independently-loaded sources into one flat sequence.
///
/// A source that fails contributes zero rows rather than failing the whole
/// merge. When every source fails, or the merge produces no rows at all,
/// the built-in sample dataset is substituted so the timeline still has
/// content; [`LoadOutcome::used_fallback`] records the substitution.
pub fn merge_sources<'a, I>(sources: I) -> LoadOutcome
where
    I: IntoIterator<Item = &'a mut dyn RowSource>,
{
    let mut rows = Vec::new();
    let mut failed = 0;
    let mut attempted = 0;
    for source in sources {
        attempted += 1;
        match source.rows() {
            Ok(mut r) => rows.append(&mut r),
            Err(_) => failed += 1,
        }
    }

    let all_failed = attempted > 0 && failed == attempted;
    if rows.is_empty() && (all_failed || attempted == 0) {
        return LoadOutcome {
            rows: sample_rows(),
            failed_sources: failed,
            used_fallback: true,
        };
    }

    LoadOutcome {
        rows,
        failed_sources: failed,
        used_fallback: false,
    }
}

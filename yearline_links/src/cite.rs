// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Citation extraction: delimited title references inside descriptions.

/// The paired delimiter characters of a citation.
///
/// Descriptions cite other events by enclosing the cited title between an
/// open and a close marker, `「落水荘」` style. The corner brackets of the
/// reference data are the default; hosts with other conventions can supply
/// their own pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CitationSyntax {
    /// Opening delimiter.
    pub open: char,
    /// Closing delimiter.
    pub close: char,
}

impl CitationSyntax {
    /// The CJK corner brackets `「` / `」`.
    pub const CORNER_BRACKETS: Self = Self {
        open: '「',
        close: '」',
    };

    /// Iterates over the citations embedded in `text`.
    ///
    /// Matches are non-overlapping and may occur any number of times. A
    /// citation body must not itself contain either delimiter: on a nested
    /// open marker, scanning restarts from the inner one (so `「a「b」`
    /// yields `b`). Bodies are trimmed; citations that trim to nothing are
    /// skipped.
    #[must_use]
    pub fn citations<'a>(&self, text: &'a str) -> Citations<'a> {
        Citations {
            rest: text,
            syntax: *self,
        }
    }
}

impl Default for CitationSyntax {
    fn default() -> Self {
        Self::CORNER_BRACKETS
    }
}

/// Iterator over the citations in one description. See
/// [`CitationSyntax::citations`].
#[derive(Clone, Debug)]
pub struct Citations<'a> {
    rest: &'a str,
    syntax: CitationSyntax,
}

impl<'a> Iterator for Citations<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let start = self.rest.find(self.syntax.open)?;
            let body = &self.rest[start + self.syntax.open.len_utf8()..];

            match (body.find(self.syntax.open), body.find(self.syntax.close)) {
                // A nested open marker before any close: restart there.
                (Some(open), Some(close)) if open < close => {
                    self.rest = &body[open..];
                }
                (_, Some(close)) => {
                    let inner = body[..close].trim();
                    self.rest = &body[close + self.syntax.close.len_utf8()..];
                    if !inner.is_empty() {
                        return Some(inner);
                    }
                }
                (_, None) => {
                    self.rest = "";
                    return None;
                }
            }
        }
    }
}

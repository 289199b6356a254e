//! Verification scan over the read endpoint rows

use crate::error::{BatchError, BatchResult};
use crate::response::FormRow;

/// Result of scanning returned rows for the submitted comments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verification {
    pub matched: usize,
    pub expected: usize,
    pub rows_scanned: usize,
}

impl Verification {
    pub fn is_complete(&self) -> bool {
        self.matched == self.expected
    }

    /// `Incomplete` when fewer rows matched than were expected
    pub fn into_result(self) -> BatchResult<Self> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(BatchError::Incomplete {
                matched: self.matched,
                expected: self.expected,
            })
        }
    }
}

/// Scan `rows` in order for `expected` comments (given in generation order)
///
/// Each row is checked against the still-unmatched comments, most recently
/// generated first. A hit consumes one expected entry. The scan stops once
/// every expected comment is matched.
pub fn scan_rows(rows: &[FormRow], expected: &[String]) -> Verification {
    let mut pending: Vec<&str> = expected.iter().rev().map(String::as_str).collect();
    let mut rows_scanned = 0;

    for row in rows {
        if pending.is_empty() {
            break;
        }
        rows_scanned += 1;

        let Some(comment) = row.comment.as_deref() else {
            continue;
        };
        if let Some(pos) = pending.iter().position(|c| *c == comment) {
            pending.remove(pos);
        }
    }

    Verification {
        matched: expected.len() - pending.len(),
        expected: expected.len(),
        rows_scanned,
    }
}

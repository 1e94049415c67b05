// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation errors raised at engine entry points.

use thiserror::Error;

/// A documented precondition was violated at a call boundary.
///
/// Degenerate inputs (zero-span domains, zero totals, short point lists,
/// empty data) are *not* errors; each has a specified fallback behavior at
/// its call site. This enum covers only the cases the engine refuses to
/// coerce silently.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GeomError {
    /// A categorical scale was constructed over an empty label list.
    #[error("categorical domain must contain at least one label")]
    EmptyDomain,
    /// Parallel x/y coordinate sequences had different lengths.
    #[error("coordinate sequences must be the same length (got {left} x and {right} y values)")]
    MismatchedLengths {
        /// Length of the x sequence.
        left: usize,
        /// Length of the y sequence.
        right: usize,
    },
}

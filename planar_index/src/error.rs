// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the validated index API.

/// Error returned when an argument cannot be used by the index.
///
/// Returned before any mutation takes place, so the index is unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum IndexError {
    /// A required point or rectangle is unset (non-finite or NaN coordinates).
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why the argument was rejected.
        reason: &'static str,
    },
}

impl IndexError {
    pub(crate) const fn unset_point(name: &'static str) -> Self {
        Self::InvalidArgument {
            name,
            reason: "point coordinates must be finite",
        }
    }

    pub(crate) const fn unset_rect(name: &'static str) -> Self {
        Self::InvalidArgument {
            name,
            reason: "rectangle extents must not be NaN",
        }
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the checker.

use p2p_ads_domain::DomainError;
use thiserror::Error;

/// Errors raised while loading or checking an advert document.
#[derive(Debug, Error)]
pub enum CheckerError {
    /// The input could not be read.
    #[error("Failed to read {source_name}: {source}")]
    Read {
        /// File path, or `stdin`.
        source_name: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The report could not be written.
    #[error("Failed to write report: {0}")]
    Write(#[source] std::io::Error),

    /// The document is not valid JSON or does not match the expected shape.
    #[error("Invalid advert check document: {0}")]
    Document(#[from] serde_json::Error),

    /// The configured offset limit is unusable.
    #[error("Floating rate offset limit must be a non-negative number, got {0}")]
    InvalidOffsetLimit(f64),

    /// A domain rule rejected the document.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

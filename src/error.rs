// Copyright (c) 2025 BER Automation developers

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

/*!
Errores
=======

Error type for the BER library.

Invalid building or retrofit data is reported once, when raw inputs are
validated. The calculation itself never fails.
*/

use std::fmt;

/// Error produced when building or retrofit data can't be used
#[derive(Debug, Clone, PartialEq)]
pub enum BerError {
    /// A numeric input is out of its valid range
    InvalidInput {
        /// Name of the offending field
        field: &'static str,
        /// Value received
        value: f64,
        /// Constraint that was violated
        reason: &'static str,
    },
    /// Malformed JSON building description
    Json(String),
}

impl BerError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        BerError::InvalidInput {
            field,
            value,
            reason,
        }
    }
}

impl fmt::Display for BerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BerError::InvalidInput {
                field,
                value,
                reason,
            } => write!(f, "Invalid value for {}: {} ({})", field, value, reason),
            BerError::Json(desc) => write!(f, "Could not read building description ({})", desc),
        }
    }
}

impl std::error::Error for BerError {}

impl From<serde_json::Error> for BerError {
    fn from(err: serde_json::Error) -> Self {
        BerError::Json(err.to_string())
    }
}

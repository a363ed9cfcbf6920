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
Tipos de datos (types)
======================

Data types for the BER calculation.

*/

mod band;
mod building;
mod description;
mod results;
mod retrofit;
mod uvalues;

pub use band::*;
pub use building::*;
pub use description::*;
pub use results::*;
pub use retrofit::*;
pub use uvalues::*;

use crate::error::BerError;

pub(crate) fn check_positive(field: &'static str, value: f64) -> Result<(), BerError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BerError::invalid(field, value, "must be a number greater than zero"))
    }
}

pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<(), BerError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BerError::invalid(field, value, "must be a number not less than zero"))
    }
}

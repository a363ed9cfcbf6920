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
Calificación
============

Classification of primary energy intensity in BER bands.
*/

use crate::tables::BER_BANDS;
use crate::types::BerBand;

/// BER band for a primary energy intensity [kWh/m2.a]
///
/// Returns the first band whose inclusive upper threshold is not below the
/// value. Negative values fall in the best band and the last band has no upper
/// limit, so every number gets a band.
pub fn ber_band(kwh_per_m2: f64) -> BerBand {
    debug_assert!(!kwh_per_m2.is_nan(), "Primary energy intensity is NaN");
    BER_BANDS
        .iter()
        .copied()
        .find(|band| kwh_per_m2 <= band.upper_threshold())
        .unwrap_or(BerBand::G)
}

/// BER band and its display color for a primary energy intensity [kWh/m2.a]
pub fn get_ber_band(kwh_per_m2: f64) -> (BerBand, &'static str) {
    let band = ber_band(kwh_per_m2);
    (band, band.color())
}

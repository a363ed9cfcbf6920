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
Bandas de calificación
======================

BER rating bands, ordered from the most efficient (A1) to the least efficient (G).
*/

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// BER rating band
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum BerBand {
    /// up to 25 kWh/m2.a
    A1,
    /// up to 50 kWh/m2.a
    A2,
    /// up to 75 kWh/m2.a
    A3,
    /// up to 100 kWh/m2.a
    B1,
    /// up to 125 kWh/m2.a
    B2,
    /// up to 150 kWh/m2.a
    B3,
    /// up to 175 kWh/m2.a
    C1,
    /// up to 200 kWh/m2.a
    C2,
    /// up to 225 kWh/m2.a
    C3,
    /// up to 260 kWh/m2.a
    D1,
    /// up to 300 kWh/m2.a
    D2,
    /// up to 340 kWh/m2.a
    E1,
    /// up to 380 kWh/m2.a
    E2,
    /// up to 450 kWh/m2.a
    F,
    /// above 450 kWh/m2.a
    G,
}

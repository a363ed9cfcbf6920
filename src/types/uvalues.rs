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
Transmitancias
==============

Set of envelope thermal transmittances (U-values) used by the heat balance.
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Envelope U-values [W/m2K]
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct UValues {
    /// Windows and doors
    pub window: f64,
    /// Roof
    pub roof: f64,
    /// Ground floor
    pub floor: f64,
    /// External walls
    pub wall: f64,
}

impl UValues {
    /// Constructor
    pub const fn new(window: f64, roof: f64, floor: f64, wall: f64) -> Self {
        Self {
            window,
            roof,
            floor,
            wall,
        }
    }
}

impl fmt::Display for UValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ window: {:.3}, roof: {:.3}, floor: {:.3}, wall: {:.3} }}",
            self.window, self.roof, self.floor, self.wall
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uvalues_display() {
        let u = UValues::new(3.0, 0.65, 1.35, 1.2);
        assert_eq!(
            format!("{}", u),
            "{ window: 3.000, roof: 0.650, floor: 1.350, wall: 1.200 }"
        );
    }
}

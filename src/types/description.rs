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


use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{BuildingInput, RetrofitInput};
use crate::error::BerError;

/// Building description file: building data with optional retrofit measures
///
/// The building fields sit at the top level of the JSON object and the
/// measures, when present, under a `retrofit` key:
///
/// ```json
/// { "length": 10, "width": 8, "heating_system": "oil_boiler",
///   "retrofit": { "heating_system_after": "heat_pump_air" } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingDescription {
    /// Building data
    #[serde(flatten)]
    pub building: BuildingInput,
    /// Retrofit measures to rate alongside the building
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrofit: Option<RetrofitInput>,
}

impl FromStr for BuildingDescription {
    type Err = BerError;

    fn from_str(s: &str) -> Result<BuildingDescription, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

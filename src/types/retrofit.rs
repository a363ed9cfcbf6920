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
Medidas de rehabilitación
=========================

Retrofit measures: added wall and roof insulation, replacement windows and an
optional change of heating system.
*/

use std::convert::TryFrom;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::{check_non_negative, check_positive, HeatingSystem};
use crate::error::BerError;

fn default_wall_insulation() -> f64 {
    12.0
}

fn default_roof_insulation() -> f64 {
    20.0
}

fn default_window_u() -> Option<f64> {
    Some(1.0)
}

/// Raw retrofit measures. Must be validated into `RetrofitParameters` before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrofitInput {
    /// Added external wall insulation [cm]
    #[serde(default = "default_wall_insulation")]
    pub wall_insulation_cm: f64,
    /// Added roof insulation [cm]
    #[serde(default = "default_roof_insulation")]
    pub roof_insulation_cm: f64,
    /// U-value of the replacement windows [W/m2K]. `None` keeps the existing windows.
    #[serde(default = "default_window_u")]
    pub window_u_value: Option<f64>,
    /// Replacement heating system. `None` keeps the existing one.
    #[serde(default)]
    pub heating_system_after: Option<HeatingSystem>,
    /// Separate electric hot water after the retrofit. `None` keeps the existing setting.
    #[serde(default)]
    pub hot_water_electric_separate_after: Option<bool>,
}

impl Default for RetrofitInput {
    /// Full envelope retrofit: 12 cm wall insulation, 20 cm roof insulation and U = 1.0 windows
    fn default() -> Self {
        Self {
            wall_insulation_cm: default_wall_insulation(),
            roof_insulation_cm: default_roof_insulation(),
            window_u_value: default_window_u(),
            heating_system_after: None,
            hot_water_electric_separate_after: None,
        }
    }
}

impl RetrofitInput {
    /// Retrofit that changes nothing
    pub fn none() -> Self {
        Self {
            wall_insulation_cm: 0.0,
            roof_insulation_cm: 0.0,
            window_u_value: None,
            heating_system_after: None,
            hot_water_electric_separate_after: None,
        }
    }

    /// Check input values and build the validated parameters
    pub fn validate(self) -> Result<RetrofitParameters, BerError> {
        RetrofitParameters::try_from(self)
    }
}

/// Validated retrofit measures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RetrofitInput", into = "RetrofitInput")]
pub struct RetrofitParameters {
    input: RetrofitInput,
}

impl TryFrom<RetrofitInput> for RetrofitParameters {
    type Error = BerError;

    fn try_from(input: RetrofitInput) -> Result<Self, Self::Error> {
        check_non_negative("wall_insulation_cm", input.wall_insulation_cm)?;
        check_non_negative("roof_insulation_cm", input.roof_insulation_cm)?;
        if let Some(u) = input.window_u_value {
            check_positive("window_u_value", u)?;
        }
        Ok(Self { input })
    }
}

impl From<RetrofitParameters> for RetrofitInput {
    fn from(params: RetrofitParameters) -> Self {
        params.input
    }
}

impl Deref for RetrofitParameters {
    type Target = RetrofitInput;

    fn deref(&self) -> &RetrofitInput {
        &self.input
    }
}

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
Calificación BER
================

BER rating of a building: heat balance, conversion to primary energy with
the factor of the heating system and classification in bands. When a
retrofit is given, the same steps are repeated for the retrofitted building
and attached to the result.
*/

use tracing::debug;

use crate::hwb::calculate_hwb;
use crate::rating::ber_band;
use crate::retrofit::{apply_retrofit, retrofit_building};
use crate::types::{BerResult, BuildingParameters, RetrofitParameters};

/// BER rating of a building, optionally with a retrofit scenario
pub fn calculate_ber(
    building: &BuildingParameters,
    retrofit: Option<&RetrofitParameters>,
) -> BerResult {
    let hwb_result = calculate_hwb(building);
    let primary = hwb_result.total_kwh_per_m2 * building.heating_system.primary_energy_factor();
    let band = ber_band(primary);
    debug!(primary, band = %band, "BER rating");

    let mut result = BerResult {
        ber_band: band,
        kwh_per_m2: primary,
        color_hex: band.color().to_string(),
        hwb_result,
        building: building.clone(),
        retrofit_ber_band: None,
        retrofit_kwh_per_m2: None,
        retrofit_hwb_result: None,
    };

    if let Some(retrofit) = retrofit {
        let retrofit_hwb = apply_retrofit(building, retrofit);
        let after = retrofit_building(building, retrofit);
        let retrofit_primary =
            retrofit_hwb.total_kwh_per_m2 * after.heating_system.primary_energy_factor();
        let retrofit_band = ber_band(retrofit_primary);
        debug!(
            primary = retrofit_primary,
            band = %retrofit_band,
            "BER rating after retrofit"
        );
        result.retrofit_ber_band = Some(retrofit_band);
        result.retrofit_kwh_per_m2 = Some(retrofit_primary);
        result.retrofit_hwb_result = Some(retrofit_hwb);
    }

    result
}

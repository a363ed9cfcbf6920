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
Rehabilitación
==============

Heat balance of a building after a retrofit.

Added insulation works in series with the existing wall or roof:
R_new = R_old + d / λ, U_new = 1 / R_new, with λ = 0.035 W/mK.
Replacement windows set the window U-value directly. The geometry and the
glazing g-value of the original construction are kept.

The original building and the epoch tables are never modified: the retrofit
works on copies.
*/

use crate::hwb;
use crate::tables::INSULATION_CONDUCTIVITY;
use crate::types::{BuildingParameters, HeatBalance, RetrofitParameters, UValues};

/// U-value after adding an insulation layer of the given thickness [cm]
///
/// A zero thickness keeps the original value untouched.
pub fn add_insulation(u_value: f64, thickness_cm: f64) -> f64 {
    if thickness_cm > 0.0 {
        let r_added = (thickness_cm / 100.0) / INSULATION_CONDUCTIVITY;
        let r_original = 1.0 / u_value;
        1.0 / (r_original + r_added)
    } else {
        u_value
    }
}

/// Envelope U-values of the building after the retrofit [W/m2K]
pub fn retrofit_uvalues(building: &BuildingParameters, retrofit: &RetrofitParameters) -> UValues {
    let mut u = building.construction_epoch.u_values();
    u.wall = add_insulation(u.wall, retrofit.wall_insulation_cm);
    u.roof = add_insulation(u.roof, retrofit.roof_insulation_cm);
    if let Some(window_u) = retrofit.window_u_value {
        u.window = window_u;
    }
    u
}

/// Building after the retrofit: same geometry, possibly a new heating configuration
pub fn retrofit_building(
    building: &BuildingParameters,
    retrofit: &RetrofitParameters,
) -> BuildingParameters {
    building.with_heating(
        retrofit
            .heating_system_after
            .unwrap_or(building.heating_system),
        retrofit
            .hot_water_electric_separate_after
            .unwrap_or(building.hot_water_electric_separate),
    )
}

/// Heat balance of the building after the retrofit
pub fn apply_retrofit(building: &BuildingParameters, retrofit: &RetrofitParameters) -> HeatBalance {
    let u = retrofit_uvalues(building, retrofit);
    let after = retrofit_building(building, retrofit);
    hwb::calculate(&after, &u, building.construction_epoch.g_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BuildingInput, HeatingSystem, RetrofitInput};

    fn building() -> BuildingParameters {
        let mut input = BuildingInput::new(10.0, 8.0);
        input.heating_system = HeatingSystem::OilBoiler;
        input.validate().unwrap()
    }

    #[test]
    fn insulation_in_series() {
        // R = 1/1.2 + 0.12/0.035
        let u = add_insulation(1.2, 12.0);
        assert!((u - 1.0 / (1.0 / 1.2 + 0.12 / 0.035)).abs() < 1e-12);
        assert!(u < 0.27);
        assert_eq!(add_insulation(0.275, 0.0), 0.275);
    }

    #[test]
    fn retrofit_uvalues_full() {
        let b = building();
        let r = RetrofitInput::default().validate().unwrap();
        let u = retrofit_uvalues(&b, &r);
        let base = b.construction_epoch.u_values();
        assert!(u.wall < base.wall);
        assert!(u.roof < base.roof);
        assert_eq!(u.window, 1.0);
        assert_eq!(u.floor, base.floor);
    }

    #[test]
    fn heating_overrides() {
        let b = building();
        let mut r = RetrofitInput::none();
        assert_eq!(retrofit_building(&b, &r.clone().validate().unwrap()), b);

        r.heating_system_after = Some(HeatingSystem::HeatPumpAir);
        r.hot_water_electric_separate_after = Some(true);
        let after = retrofit_building(&b, &r.validate().unwrap());
        assert_eq!(after.heating_system, HeatingSystem::HeatPumpAir);
        assert!(after.hot_water_electric_separate);
        assert_eq!(after.length, b.length);
        // The original is untouched
        assert_eq!(b.heating_system, HeatingSystem::OilBoiler);
    }

    #[test]
    fn no_op_retrofit_reproduces_baseline() {
        let b = building();
        let r = RetrofitInput::none().validate().unwrap();
        assert_eq!(apply_retrofit(&b, &r), hwb::calculate_hwb(&b));

        let mut same_windows = RetrofitInput::none();
        same_windows.window_u_value = Some(b.construction_epoch.u_values().window);
        let r = same_windows.validate().unwrap();
        assert_eq!(apply_retrofit(&b, &r), hwb::calculate_hwb(&b));
    }

    #[test]
    fn full_retrofit_breakdown() {
        let b = building();
        let mut r = RetrofitInput::default();
        r.heating_system_after = Some(HeatingSystem::HeatPumpAir);
        let hb = apply_retrofit(&b, &r.validate().unwrap());
        let base = hwb::calculate_hwb(&b);
        assert!((hb.transmission_heat_loss - 172.44760253809068).abs() < 1e-6);
        assert!((hb.total_kwh_per_m2 - 16.399141509593203).abs() < 1e-6);
        assert_eq!(hb.heated_volume, base.heated_volume);
        assert_eq!(hb.solar_gains, base.solar_gains);
        assert!(hb.hwb < base.hwb);
    }
}

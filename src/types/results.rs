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
Resultados
==========

Heat balance breakdown and BER rating results.
*/

use serde::{Deserialize, Serialize};

use super::{BerBand, BuildingParameters};

/// Annual heat balance of a building (HWB method)
///
/// Areas in m2, volumes in m3, heat loss coefficients in W/K, energy in kWh/a,
/// intensities per m2 of gross heated floor area.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeatBalance {
    /// Gross heated floor area, all storeys [m2]
    pub floor_area: f64,
    /// Net floor area [m2]
    pub net_floor_area: f64,
    /// Heated volume [m3]
    pub heated_volume: f64,
    /// Exterior wall surface including openings [m2]
    pub envelope_area: f64,
    /// Window and door area [m2]
    pub window_area: f64,
    /// Roof area (equal to the ground floor area) [m2]
    pub roof_area: f64,
    /// Walls shared with adjoining units [m2]
    pub party_wall_area: f64,
    /// Walls exposed to the exterior, openings excluded [m2]
    pub external_wall_area: f64,
    /// Thermal bridge supplement L_psi [W/K]
    pub thermal_bridge_loss: f64,
    /// Transmission heat loss coefficient L_t, thermal bridges included [W/K]
    pub transmission_heat_loss: f64,
    /// Ventilation heat loss coefficient L_v [W/K]
    pub ventilation_heat_loss: f64,
    /// Transmission heat losses Q_t [kWh/a]
    pub transmission_losses_kwh: f64,
    /// Ventilation heat losses Q_v [kWh/a]
    pub ventilation_losses_kwh: f64,
    /// Solar gains Q_s [kWh/a]
    pub solar_gains: f64,
    /// Internal gains Q_i [kWh/a]
    pub internal_gains: f64,
    /// Net space heating demand [kWh/a]
    pub heating_demand_kwh: f64,
    /// Specific space heating demand (HWB) [kWh/m2.a]
    pub hwb: f64,
    /// Final (purchased) energy for space heating [kWh/a]
    pub final_energy_kwh: f64,
    /// Final energy for space heating [kWh/m2.a]
    pub final_energy_kwh_per_m2: f64,
    /// Hot water demand [kWh/a]
    pub hot_water_kwh: f64,
    /// Final (purchased) energy for hot water [kWh/a]
    pub final_hot_water_kwh: f64,
    /// Final energy for space heating and hot water [kWh/m2.a]
    pub total_kwh_per_m2: f64,
    /// CO2 emissions [kg/a]
    pub co2_kg: f64,
    /// CO2 emissions [kg/m2.a]
    pub co2_kg_per_m2: f64,
}

/// BER rating of a building, with an optional retrofit scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BerResult {
    /// Rating band
    pub ber_band: BerBand,
    /// Primary energy [kWh/m2.a]
    pub kwh_per_m2: f64,
    /// Display color of the band
    pub color_hex: String,
    /// Heat balance of the building as is
    pub hwb_result: HeatBalance,
    /// Building that was rated
    pub building: BuildingParameters,
    /// Rating band after the retrofit
    pub retrofit_ber_band: Option<BerBand>,
    /// Primary energy after the retrofit [kWh/m2.a]
    pub retrofit_kwh_per_m2: Option<f64>,
    /// Heat balance after the retrofit
    pub retrofit_hwb_result: Option<HeatBalance>,
}

impl BerResult {
    /// Primary energy saved by the retrofit [kWh/m2.a]
    pub fn retrofit_savings(&self) -> Option<f64> {
        self.retrofit_kwh_per_m2.map(|after| self.kwh_per_m2 - after)
    }
}

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
Salida en formato simple
========================

Compact text report of a BER result. Areas and volumes are shown as whole
units, energy and CO2 intensities with one decimal.
*/

use itertools::Itertools;

use crate::types::{BerResult, HeatBalance, HeatingSystem};

/// Muestra en formato simple
///
/// Plain text representation of a rating result.
pub trait AsPlain {
    /// Get in plain format
    fn to_plain(&self) -> String;
}

/// Lines of the heat balance section
fn heat_balance_lines(hb: &HeatBalance) -> Vec<String> {
    vec![
        format!("Transmission heat loss [W/K]: {:.1}", hb.transmission_heat_loss),
        format!("Ventilation heat loss [W/K]: {:.1}", hb.ventilation_heat_loss),
        format!("Solar gains [kWh/a]: {:.0}", hb.solar_gains),
        format!("Internal gains [kWh/a]: {:.0}", hb.internal_gains),
        format!("HWB [kWh/m2.a]: {:.1}", hb.hwb),
        format!("Final energy, heating [kWh/m2.a]: {:.1}", hb.final_energy_kwh_per_m2),
        format!("Hot water [kWh/a]: {:.0}", hb.hot_water_kwh),
        format!("Final energy, total [kWh/m2.a]: {:.1}", hb.total_kwh_per_m2),
        format!("CO2 [kg/m2.a]: {:.1}", hb.co2_kg_per_m2),
    ]
}

/// Efficiency of the heating system, or SCOP for heat pumps
fn system_performance(system: HeatingSystem) -> String {
    if system.is_heat_pump() {
        format!("SCOP [-]: {:.2}", system.efficiency())
    } else {
        format!("Efficiency [-]: {:.2}", system.efficiency())
    }
}

impl AsPlain for BerResult {
    fn to_plain(&self) -> String {
        let hb = &self.hwb_result;
        let b = &self.building;

        let retrofit_out = match (
            self.retrofit_ber_band,
            self.retrofit_kwh_per_m2,
            &self.retrofit_hwb_result,
        ) {
            (Some(band), Some(kwh), Some(rhb)) => format!(
                "\n\n** Retrofit\n\nBER = {} ({})\nE_p [kWh/m2.a]: {:.1}\nSavings [kWh/m2.a]: {:.1}\n\n{}",
                band,
                band.color(),
                kwh,
                self.kwh_per_m2 - kwh,
                heat_balance_lines(rhb).iter().join("\n")
            ),
            _ => String::new(),
        };

        format!(
            "** BER rating

BER = {band} ({color})
E_p [kWh/m2.a]: {kwh:.1}

** Building

Type: {btype}, {epoch}, {country}
Heating: {heating}{hw}
{efficiency}
Floor area [m2]: {area:.0}
Heated volume [m3]: {volume:.0}
Envelope area [m2]: {envelope:.0}
Window area [m2]: {windows:.0}

** Heat balance

{balance}{retrofit_out}
",
            band = self.ber_band,
            color = self.color_hex,
            kwh = self.kwh_per_m2,
            btype = b.building_type,
            epoch = b.construction_epoch,
            country = b.country,
            heating = b.heating_system,
            hw = if b.hot_water_electric_separate {
                ", separate electric hot water"
            } else {
                ""
            },
            efficiency = system_performance(b.heating_system),
            area = hb.floor_area,
            volume = hb.heated_volume,
            envelope = hb.envelope_area,
            windows = hb.window_area,
            balance = heat_balance_lines(hb).iter().join("\n"),
            retrofit_out = retrofit_out,
        )
    }
}

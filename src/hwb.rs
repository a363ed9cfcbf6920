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
Balance HWB
===========

Annual heating demand (HWB, Heizwärmebedarf) of a building, following the
monthly-free annual balance of "Leitfaden für die Berechnung des
Heizwärmebedarfs" as implemented by the reference spreadsheet tool:

1. Geometry: gross and net floor area, envelope, roof, floor, party walls,
   windows and heated volume.
2. Transmission heat loss coefficient, with a thermal bridge supplement.
3. Transmission and ventilation losses over the heating degree days.
4. Internal and solar gains over the heating season.
5. Net heating demand (no utilisation factor, never negative).
6. Hot water demand, final energy and CO2 emissions.

The arithmetic reproduces the spreadsheet step by step, including the order
of operations, so results match it to the last bit. The heated volume applies
the storey count twice (net floor area already covers every storey), as the
spreadsheet does.
*/

use tracing::debug;

use crate::tables::*;
use crate::types::{BuildingParameters, HeatBalance, HeatingSystem, UValues, WindowDoorAreas};

/// Heat balance of a building with the U-values and g-value of its construction epoch
pub fn calculate_hwb(building: &BuildingParameters) -> HeatBalance {
    let epoch = building.construction_epoch;
    calculate(building, &epoch.u_values(), epoch.g_value())
}

/// Heat balance of a building with explicit envelope U-values and glazing g-value
pub fn calculate(building: &BuildingParameters, u: &UValues, g_value: f64) -> HeatBalance {
    let b = building;
    let storeys = f64::from(b.heated_storeys);

    // Geometry
    let gross_area = b.length * b.width * storeys;
    let net_area = gross_area * NET_TO_GROSS_RATIO;
    let envelope_area = b.envelope_area();
    // Flat roof and ground floor over the single storey footprint
    let roof_area = b.length * b.width;
    let floor_area = b.length * b.width;
    let party_wall_area = b.party_wall_area();
    let window_area = b.window_door_area();
    let total_walls = envelope_area - window_area;
    let external_walls = total_walls - party_wall_area;
    let windows = window_door_by_orientation(b, window_area);
    let volume = net_area * (b.storey_height - FLOOR_THICKNESS) * storeys;

    // Transmission heat loss coefficient
    let l_e = u.window * window_area
        + u.roof * roof_area
        + u.floor * floor_area * FLOOR_U_FACTOR
        + u.wall * external_walls;
    let loss_area = window_area + roof_area + floor_area + external_walls;
    let l_psi = if loss_area > 0.0 {
        let u_mean = l_e / loss_area;
        (THERMAL_BRIDGE_FACTOR * (THERMAL_BRIDGE_REFERENCE - u_mean) * l_e).max(0.0)
    } else {
        0.0
    };
    let l_t = l_e + l_psi;

    let climate = b.country.climate();
    let hdd = climate.heating_degree_days;
    let q_t = HDD_TO_KWH_FACTOR * l_t * hdd;

    // Ventilation
    let l_v = AIR_HEAT_CAPACITY * AIR_CHANGE_RATE * volume;
    let q_v = HDD_TO_KWH_FACTOR * l_v * hdd;

    // Gains
    let q_i = HDD_TO_KWH_FACTOR * INTERNAL_GAIN_RATE * net_area * climate.heating_days;
    let g_eff = g_value * FRAME_FACTOR * DIRT_FACTOR;
    let irr = climate.irradiance;
    let q_s = (irr.north * windows.north
        + irr.east * windows.east
        + irr.south * windows.south
        + irr.west * windows.west)
        * SHADING_FACTOR
        * g_eff;

    // Surplus gains are lost, not credited
    let q_heating = (q_t + q_v - q_i - q_s).max(0.0);
    let hwb = per_area(q_heating, gross_area);

    // Hot water
    let q_hotwater = b.effective_residents()
        * HOT_WATER_LITRES_PER_PERSON_PER_DAY
        * 365.0
        * HOT_WATER_SPECIFIC_HEAT
        * HOT_WATER_TEMP_RISE_K;

    // Final energy and emissions
    let heating = b.heating_system.data();
    let hot_water = hot_water_system(b).data();
    let final_heating = q_heating / heating.efficiency;
    let final_hotwater = q_hotwater / hot_water.efficiency;
    let final_total = final_heating + final_hotwater;
    let co2 = final_heating * heating.co2_factor + final_hotwater * hot_water.co2_factor;

    debug!(
        gross_area,
        volume,
        window_area,
        external_walls,
        l_e,
        l_psi,
        l_v,
        q_t,
        q_v,
        q_i,
        q_s,
        q_heating,
        q_hotwater,
        "HWB heat balance"
    );

    HeatBalance {
        floor_area: gross_area,
        net_floor_area: net_area,
        heated_volume: volume,
        envelope_area,
        window_area,
        roof_area,
        party_wall_area,
        external_wall_area: external_walls,
        thermal_bridge_loss: l_psi,
        transmission_heat_loss: l_t,
        ventilation_heat_loss: l_v,
        transmission_losses_kwh: q_t,
        ventilation_losses_kwh: q_v,
        solar_gains: q_s,
        internal_gains: q_i,
        heating_demand_kwh: q_heating,
        hwb,
        final_energy_kwh: final_heating,
        final_energy_kwh_per_m2: per_area(final_heating, gross_area),
        hot_water_kwh: q_hotwater,
        final_hot_water_kwh: final_hotwater,
        total_kwh_per_m2: per_area(final_total, gross_area),
        co2_kg: co2,
        co2_kg_per_m2: per_area(co2, gross_area),
    }
}

/// Quantity per m2 of floor area, zero for a degenerate floor area
fn per_area(value: f64, area: f64) -> f64 {
    if area > 0.0 {
        value / area
    } else {
        0.0
    }
}

/// System producing hot water
///
/// A separate electric system overrides the space heating system.
fn hot_water_system(b: &BuildingParameters) -> HeatingSystem {
    if b.hot_water_electric_separate {
        HeatingSystem::ElectricDirect
    } else {
        b.heating_system
    }
}

/// Window areas by orientation [m2]
fn window_door_by_orientation(b: &BuildingParameters, total: f64) -> WindowDoorAreas {
    match b.window_door_areas {
        Some(wd) => wd,
        None => WindowDoorAreas::evenly_split(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BuildingInput, BuildingType, ConstructionEpoch, Country};

    const EPS: f64 = 1e-6;

    fn assert_close(expected: f64, got: f64) {
        assert!(
            (expected - got).abs() <= EPS * expected.abs().max(1.0),
            "expected {}, got {}",
            expected,
            got
        );
    }

    fn typical_irish_house() -> BuildingInput {
        let mut input = BuildingInput::new(10.0, 8.0);
        input.heated_storeys = 2;
        input.storey_height = 3.0;
        input.building_type = BuildingType::Detached;
        input.construction_epoch = ConstructionEpoch::Before1980;
        input.country = Country::Ireland;
        input.heating_system = HeatingSystem::OilBoiler;
        input
    }

    #[test]
    fn typical_old_house_breakdown() {
        let hb = calculate_hwb(&typical_irish_house().validate().unwrap());
        assert_eq!(hb.floor_area, 160.0);
        assert_eq!(hb.net_floor_area, 128.0);
        assert_eq!(hb.envelope_area, 216.0);
        assert_eq!(hb.roof_area, 80.0);
        assert_eq!(hb.party_wall_area, 0.0);
        assert_close(32.4, hb.window_area);
        assert_close(183.6, hb.external_wall_area);
        assert_close(678.4, hb.heated_volume);
        // Poorly insulated envelope: mean U above 0.75, no thermal bridge supplement
        assert_eq!(hb.thermal_bridge_loss, 0.0);
        assert_close(445.12, hb.transmission_heat_loss);
        assert_close(92.2624, hb.ventilation_heat_loss);
        assert_close(4305.380688, hb.solar_gains);
        assert_close(2522.88, hb.internal_gains);
        assert_close(20889.06369216, hb.heating_demand_kwh);
        assert_close(130.556648076, hb.hwb);
        assert_close(24575.3690496, hb.final_energy_kwh);
        assert_close(153.59605656, hb.final_energy_kwh_per_m2);
        assert_close(2358.4615384615386, hb.hot_water_kwh);
        assert_close(170.93768551927602, hb.total_kwh_per_m2);
        assert_close(7217.67283336591, hb.co2_kg);
        assert_close(45.11045520853694, hb.co2_kg_per_m2);
        assert!(hb.hwb > 100.0);
        assert!(hb.total_kwh_per_m2 > hb.hwb);
    }

    #[test]
    fn volume_counts_storeys_twice() {
        let mut input = typical_irish_house();
        input.heated_storeys = 3;
        let hb = calculate_hwb(&input.validate().unwrap());
        // 240 m2 gross, 192 m2 net, times 2.65 m, times 3 storeys again
        assert_close(192.0 * 2.65 * 3.0, hb.heated_volume);
    }

    #[test]
    fn modern_semi_d_breakdown() {
        let mut input = BuildingInput::new(9.0, 7.0);
        input.storey_height = 2.7;
        input.building_type = BuildingType::SemiDLength;
        input.construction_epoch = ConstructionEpoch::After2010;
        input.heating_system = HeatingSystem::HeatPumpAir;
        let hb = calculate_hwb(&input.validate().unwrap());
        assert_eq!(hb.floor_area, 126.0);
        assert_close(473.76, hb.heated_volume);
        assert_close(48.6, hb.party_wall_area);
        assert!(hb.thermal_bridge_loss > 0.0);
        assert_close(76.39496388973812, hb.transmission_heat_loss);
        assert_close(27.23302842503546, hb.hwb);
        assert_close(11.992403725834308, hb.total_kwh_per_m2);
        assert_close(317.31900258557584, hb.co2_kg);
    }

    #[test]
    fn party_walls_by_building_type() {
        let b = typical_irish_house();
        let area = |bt: BuildingType| {
            let mut input = b.clone();
            input.building_type = bt;
            input.validate().unwrap().party_wall_area()
        };
        assert_eq!(area(BuildingType::Detached), 0.0);
        assert_eq!(area(BuildingType::SemiDLength), 60.0);
        assert_eq!(area(BuildingType::SemiDWidth), 48.0);
        assert_eq!(area(BuildingType::TerracedLength), 120.0);
        assert_eq!(area(BuildingType::TerracedWidth), 96.0);
    }

    #[test]
    fn explicit_window_areas() {
        let mut input = typical_irish_house();
        input.window_door_areas = Some(WindowDoorAreas {
            north: 4.0,
            east: 6.0,
            south: 12.0,
            west: 6.0,
            doors: 4.0,
        });
        let hb = calculate_hwb(&input.validate().unwrap());
        assert_eq!(hb.window_area, 32.0);
        assert_eq!(hb.external_wall_area, 184.0);
        // Doors don't add solar gains
        let expected_qs =
            (102.0 * 4.0 + 227.0 * 6.0 + 423.0 * 12.0 + 240.0 * 6.0) * 0.75 * (0.81 * 0.9 * 0.98);
        assert_close(expected_qs, hb.solar_gains);
    }

    #[test]
    fn surplus_gains_give_zero_demand() {
        let mut input = typical_irish_house();
        input.construction_epoch = ConstructionEpoch::After2010;
        input.window_door_areas = Some(WindowDoorAreas {
            south: 100.0,
            ..Default::default()
        });
        let hb = calculate_hwb(&input.validate().unwrap());
        assert!(hb.transmission_losses_kwh + hb.ventilation_losses_kwh < hb.solar_gains + hb.internal_gains);
        assert_eq!(hb.heating_demand_kwh, 0.0);
        assert_eq!(hb.hwb, 0.0);
        assert_eq!(hb.final_energy_kwh, 0.0);
        // Only hot water remains
        assert_close(hb.final_hot_water_kwh / hb.floor_area, hb.total_kwh_per_m2);
    }

    #[test]
    fn separate_electric_hot_water() {
        let mut input = typical_irish_house();
        input.residents = Some(2.0);
        input.hot_water_electric_separate = true;
        let hb = calculate_hwb(&input.validate().unwrap());
        assert_close(2.0 * 766.5, hb.hot_water_kwh);
        assert_close(2.0 * 766.5 / 0.99, hb.final_hot_water_kwh);
        let expected_co2 = hb.final_energy_kwh * 0.2639 + hb.final_hot_water_kwh * 0.21;
        assert_close(expected_co2, hb.co2_kg);
    }

    #[test]
    fn heat_pump_reduces_final_energy() {
        let oil = typical_irish_house();
        let mut hp = typical_irish_house();
        hp.heating_system = HeatingSystem::HeatPumpAir;
        let r_oil = calculate_hwb(&oil.validate().unwrap());
        let r_hp = calculate_hwb(&hp.validate().unwrap());
        assert_eq!(r_oil.heating_demand_kwh, r_hp.heating_demand_kwh);
        assert!(r_hp.final_energy_kwh < r_oil.final_energy_kwh);
        assert_close(r_hp.heating_demand_kwh / 3.5, r_hp.final_energy_kwh);
    }

    #[test]
    fn per_area_guards_zero() {
        assert_eq!(per_area(100.0, 0.0), 0.0);
        assert_eq!(per_area(100.0, 4.0), 25.0);
    }
}

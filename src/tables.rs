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

/*! # Tablas de datos

Constant data of the HWB method:

- envelope U-values and solar transmittance by construction epoch
- climate data by region (heating degree days, heating season, solar irradiance)
- efficiency, primary energy factor and CO2 factor by heating system
- default window area fraction by building type
- BER band thresholds and colors
- fixed coefficients of the heat balance

Every lookup is an exhaustive `match`, so a new variant can't be added
without giving it a value in every table.

Sources: Austrian OIB guidelines (U-values), degreedays.net (degree days, base
15.5°C), PHPP (heating days and irradiance), SEAI conversion factors (CO2).
*/

use crate::types::{BerBand, BuildingType, ConstructionEpoch, Country, HeatingSystem, UValues};

// ---------------- Heat balance coefficients -----------------------

/// Net to gross floor area ratio [-]
pub const NET_TO_GROSS_RATIO: f64 = 0.8;
/// Storey height lost to floor and ceiling construction [m]
pub const FLOOR_THICKNESS: f64 = 0.35;
/// Temperature correction factor for the ground floor [-]
pub const FLOOR_U_FACTOR: f64 = 0.7;
/// Reference mean U-value of the thermal bridge supplement [W/m2K]
pub const THERMAL_BRIDGE_REFERENCE: f64 = 0.75;
/// Scaling factor of the thermal bridge supplement [-]
pub const THERMAL_BRIDGE_FACTOR: f64 = 0.2;
/// W.day to kWh (24 h / 1000)
pub const HDD_TO_KWH_FACTOR: f64 = 0.024;
/// Volumetric heat capacity of air [Wh/m3K]
pub const AIR_HEAT_CAPACITY: f64 = 0.34;
/// Air change rate [1/h]
pub const AIR_CHANGE_RATE: f64 = 0.4;
/// Internal heat gains per m2 of net floor area [W/m2]
pub const INTERNAL_GAIN_RATE: f64 = 3.75;
/// Window frame factor [-]
pub const FRAME_FACTOR: f64 = 0.9;
/// Glazing dirt factor [-]
pub const DIRT_FACTOR: f64 = 0.98;
/// Shading factor F_s [-]
pub const SHADING_FACTOR: f64 = 0.75;

/// Hot water use [l/person.day]
pub const HOT_WATER_LITRES_PER_PERSON_PER_DAY: f64 = 40.0;
/// Hot water temperature rise [K]
pub const HOT_WATER_TEMP_RISE_K: f64 = 45.0;
/// Specific heat of water [kWh/kg.K]
pub const HOT_WATER_SPECIFIC_HEAT: f64 = 4.2 / 3600.0;

/// Heated floor area per resident, when the number of residents is unknown [m2]
pub const OCCUPANCY_AREA_PER_PERSON: f64 = 52.0;

/// Thermal conductivity of the retrofit insulation [W/mK]
pub const INSULATION_CONDUCTIVITY: f64 = 0.035;

// ---------------- Envelope -----------------------

impl ConstructionEpoch {
    /// Envelope U-values of the epoch [W/m2K]
    pub const fn u_values(self) -> UValues {
        match self {
            ConstructionEpoch::Before1980 => UValues::new(3.00, 0.65, 1.35, 1.20),
            ConstructionEpoch::From1980To1990 => UValues::new(2.50, 0.275, 0.75, 0.60),
            ConstructionEpoch::From1990To2000 => UValues::new(2.15, 0.235, 0.60, 0.45),
            ConstructionEpoch::From2000To2010 => UValues::new(1.40, 0.20, 0.40, 0.35),
            ConstructionEpoch::After2010 => UValues::new(1.00, 0.20, 0.25, 0.22),
        }
    }

    /// Total solar energy transmittance of the glazing [-]
    pub const fn g_value(self) -> f64 {
        match self {
            ConstructionEpoch::Before1980 => 0.81,
            ConstructionEpoch::From1980To1990 => 0.70,
            ConstructionEpoch::From1990To2000 => 0.65,
            ConstructionEpoch::From2000To2010 => 0.585,
            ConstructionEpoch::After2010 => 0.465,
        }
    }
}

impl BuildingType {
    /// Default window and door area, as a fraction of the envelope area
    pub const fn window_area_fraction(self) -> f64 {
        match self {
            BuildingType::Detached => 0.15,
            BuildingType::SemiDLength | BuildingType::SemiDWidth => 0.14,
            BuildingType::TerracedLength | BuildingType::TerracedWidth => 0.13,
        }
    }
}

// ---------------- Climate -----------------------

/// Solar irradiance during the heating season by orientation [kWh/m2]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Irradiance {
    /// North
    pub north: f64,
    /// East
    pub east: f64,
    /// South
    pub south: f64,
    /// West
    pub west: f64,
}

/// Climate data of a region
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Climate {
    /// Heating degree days, base 15.5°C [K.day]
    pub heating_degree_days: f64,
    /// Length of the heating season [day]
    pub heating_days: f64,
    /// Solar irradiance during the heating season
    pub irradiance: Irradiance,
}

const fn climate(hdd: f64, days: f64, north: f64, east: f64, south: f64, west: f64) -> Climate {
    Climate {
        heating_degree_days: hdd,
        heating_days: days,
        irradiance: Irradiance {
            north,
            east,
            south,
            west,
        },
    }
}

impl Country {
    /// Climate data of the region
    pub const fn climate(self) -> Climate {
        match self {
            // Mullingar HDD, Birr heating season
            Country::Ireland => climate(2149.1, 219.0, 102.0, 227.0, 423.0, 240.0),
            // Le Mans HDD, Rennes heating season
            Country::France => climate(1461.9999999999995, 187.0, 95.0, 207.0, 412.0, 219.0),
            // Paderborn HDD, Münster heating season
            Country::Germany => climate(2157.1, 211.0, 133.0, 215.0, 331.0, 207.0),
            // Beauvechain HDD, Ukkel heating season
            Country::Belgium => climate(1825.5, 209.0, 160.0, 222.0, 321.0, 225.0),
            // Herwijnen HDD, De Bilt heating season
            Country::Netherlands => climate(1921.3, 212.0, 162.0, 239.0, 365.0, 243.0),
            // Estimated values, no station data
            Country::Austria => climate(3400.0, 260.0, 90.0, 150.0, 290.0, 150.0),
        }
    }
}

// ---------------- Heating systems -----------------------

/// Conversion data of a heating system
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HeatingSystemData {
    /// Efficiency, or seasonal coefficient of performance for heat pumps [-]
    pub efficiency: f64,
    /// Final to primary energy factor [-]
    pub primary_energy_factor: f64,
    /// CO2 emission factor [kg/kWh of final energy]
    pub co2_factor: f64,
}

fn system(efficiency: f64, primary_energy_factor: f64, co2_tonnes: f64) -> HeatingSystemData {
    HeatingSystemData {
        efficiency,
        primary_energy_factor,
        co2_factor: co2_tonnes * 1000.0,
    }
}

impl HeatingSystem {
    /// Efficiency, primary energy and CO2 factors of the system
    pub fn data(self) -> HeatingSystemData {
        match self {
            HeatingSystem::OilBoiler => system(0.85, 1.10, 263.9e-6),
            HeatingSystem::GasBoiler => system(0.90, 1.10, (184.0 + 204.0) / 2e6),
            HeatingSystem::Biomass => system(0.875, 1.10, 0.0),
            HeatingSystem::ElectricDirect => system(0.99, 2.08, 210e-6),
            HeatingSystem::HeatPumpAir => system(3.50, 2.08, 210e-6),
            HeatingSystem::HeatPumpGround => system(4.50, 2.08, 210e-6),
            HeatingSystem::HeatPumpWater => system(4.50, 2.08, 210e-6),
            HeatingSystem::DistrictHeating => system(0.95, 1.10, 180e-6),
        }
    }

    /// Efficiency or SCOP [-]
    pub fn efficiency(self) -> f64 {
        self.data().efficiency
    }

    /// Final to primary energy factor [-]
    pub fn primary_energy_factor(self) -> f64 {
        self.data().primary_energy_factor
    }

    /// CO2 emission factor [kg/kWh]
    pub fn co2_factor(self) -> f64 {
        self.data().co2_factor
    }
}

// ---------------- Rating scale -----------------------

/// BER bands, ordered by increasing upper threshold
pub const BER_BANDS: [BerBand; 15] = [
    BerBand::A1,
    BerBand::A2,
    BerBand::A3,
    BerBand::B1,
    BerBand::B2,
    BerBand::B3,
    BerBand::C1,
    BerBand::C2,
    BerBand::C3,
    BerBand::D1,
    BerBand::D2,
    BerBand::E1,
    BerBand::E2,
    BerBand::F,
    BerBand::G,
];

impl BerBand {
    /// Inclusive upper limit of primary energy for the band [kWh/m2.a]
    pub const fn upper_threshold(self) -> f64 {
        match self {
            BerBand::A1 => 25.0,
            BerBand::A2 => 50.0,
            BerBand::A3 => 75.0,
            BerBand::B1 => 100.0,
            BerBand::B2 => 125.0,
            BerBand::B3 => 150.0,
            BerBand::C1 => 175.0,
            BerBand::C2 => 200.0,
            BerBand::C3 => 225.0,
            BerBand::D1 => 260.0,
            BerBand::D2 => 300.0,
            BerBand::E1 => 340.0,
            BerBand::E2 => 380.0,
            BerBand::F => 450.0,
            BerBand::G => f64::INFINITY,
        }
    }

    /// Display color of the band (hex RGB)
    pub const fn color(self) -> &'static str {
        match self {
            BerBand::A1 => "#00A651",
            BerBand::A2 => "#4DB848",
            BerBand::A3 => "#8CC63F",
            BerBand::B1 => "#BFD730",
            BerBand::B2 => "#FFF200",
            BerBand::B3 => "#FFC20E",
            BerBand::C1 => "#F99D1C",
            BerBand::C2 => "#F47920",
            BerBand::C3 => "#EF4136",
            BerBand::D1 => "#ED1C24",
            BerBand::D2 => "#C1272D",
            BerBand::E1 => "#A1232B",
            BerBand::E2 => "#8B1A29",
            BerBand::F => "#6D1A27",
            BerBand::G => "#4A1525",
        }
    }
}

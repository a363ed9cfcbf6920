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
Edificio
========

Building description used by the heat balance:

- classification enums (building type, construction epoch, climate region,
  heating system)
- window and door areas by orientation
- raw building input (`BuildingInput`) and its validated form (`BuildingParameters`)
*/

use std::convert::TryFrom;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, EnumVariantNames};

use super::{check_non_negative, check_positive};
use crate::error::BerError;
use crate::tables::{FLOOR_THICKNESS, OCCUPANCY_AREA_PER_PERSON};

/// Building type
///
/// Defines which exterior walls are shared with adjoining units.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BuildingType {
    /// Detached house, no party walls
    Detached,
    /// Semi-detached, adjoining along the length side
    #[strum(serialize = "semi_d_length")]
    SemiDLength,
    /// Semi-detached, adjoining along the width side
    #[strum(serialize = "semi_d_width")]
    SemiDWidth,
    /// Terraced, adjoining along both length sides
    TerracedLength,
    /// Terraced, adjoining along both width sides
    TerracedWidth,
}

impl Default for BuildingType {
    fn default() -> Self {
        BuildingType::Detached
    }
}

/// Construction era, from oldest to newest
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
    EnumVariantNames,
)]
pub enum ConstructionEpoch {
    /// Built before 1980
    #[serde(rename = "before_1980")]
    #[strum(serialize = "before_1980")]
    Before1980,
    /// Built 1980-1990
    #[serde(rename = "1980_1990")]
    #[strum(serialize = "1980_1990")]
    From1980To1990,
    /// Built 1990-2000
    #[serde(rename = "1990_2000")]
    #[strum(serialize = "1990_2000")]
    From1990To2000,
    /// Built 2000-2010
    #[serde(rename = "2000_2010")]
    #[strum(serialize = "2000_2010")]
    From2000To2010,
    /// Built after 2010
    #[serde(rename = "after_2010")]
    #[strum(serialize = "after_2010")]
    After2010,
}

impl Default for ConstructionEpoch {
    fn default() -> Self {
        ConstructionEpoch::Before1980
    }
}

/// Climate region
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Country {
    /// Ireland
    Ireland,
    /// France (north west)
    France,
    /// Germany (north west)
    Germany,
    /// Belgium
    Belgium,
    /// Netherlands
    Netherlands,
    /// Austria
    Austria,
}

impl Default for Country {
    fn default() -> Self {
        Country::Ireland
    }
}

/// Space heating system
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumVariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HeatingSystem {
    /// Oil boiler
    OilBoiler,
    /// Gas boiler
    GasBoiler,
    /// Biomass boiler
    Biomass,
    /// Direct electric heating
    ElectricDirect,
    /// Air source heat pump
    HeatPumpAir,
    /// Ground source heat pump
    HeatPumpGround,
    /// Water source heat pump
    HeatPumpWater,
    /// District heating
    DistrictHeating,
}

impl Default for HeatingSystem {
    fn default() -> Self {
        HeatingSystem::GasBoiler
    }
}

impl HeatingSystem {
    /// Is this a heat pump (seasonal performance factor above one)?
    pub fn is_heat_pump(self) -> bool {
        matches!(
            self,
            HeatingSystem::HeatPumpAir | HeatingSystem::HeatPumpGround | HeatingSystem::HeatPumpWater
        )
    }
}

/// Window and door areas by orientation [m2]
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowDoorAreas {
    /// North facing windows
    pub north: f64,
    /// East facing windows
    pub east: f64,
    /// South facing windows
    pub south: f64,
    /// West facing windows
    pub west: f64,
    /// Doors (counted in the total opening area, no solar gains)
    pub doors: f64,
}

impl WindowDoorAreas {
    /// Total opening area, doors included
    pub fn total(&self) -> f64 {
        self.north + self.east + self.south + self.west + self.doors
    }

    /// Equal split of a total opening area on the four cardinal orientations
    pub fn evenly_split(total: f64) -> Self {
        let quarter = total / 4.0;
        Self {
            north: quarter,
            east: quarter,
            south: quarter,
            west: quarter,
            doors: 0.0,
        }
    }
}

fn default_storeys() -> u32 {
    2
}

fn default_storey_height() -> f64 {
    3.0
}

/// Raw building description, as entered by a user or assembled by an
/// automated survey. Must be validated into `BuildingParameters` before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingInput {
    /// Footprint length [m]
    pub length: f64,
    /// Footprint width [m]
    pub width: f64,
    /// Number of heated storeys
    #[serde(default = "default_storeys")]
    pub heated_storeys: u32,
    /// Storey height [m]
    #[serde(default = "default_storey_height")]
    pub storey_height: f64,
    /// Building type
    #[serde(default)]
    pub building_type: BuildingType,
    /// Construction epoch
    #[serde(default)]
    pub construction_epoch: ConstructionEpoch,
    /// Climate region
    #[serde(default)]
    pub country: Country,
    /// Space heating system
    #[serde(default)]
    pub heating_system: HeatingSystem,
    /// Hot water produced by a separate direct electric system
    #[serde(default)]
    pub hot_water_electric_separate: bool,
    /// Number of residents. Derived from the heated area when missing.
    #[serde(default)]
    pub residents: Option<f64>,
    /// Window and door areas. Derived from the envelope area when missing.
    #[serde(default)]
    pub window_door_areas: Option<WindowDoorAreas>,
}

impl BuildingInput {
    /// Building with the given footprint and default values for the rest
    pub fn new(length: f64, width: f64) -> Self {
        Self {
            length,
            width,
            heated_storeys: default_storeys(),
            storey_height: default_storey_height(),
            building_type: BuildingType::default(),
            construction_epoch: ConstructionEpoch::default(),
            country: Country::default(),
            heating_system: HeatingSystem::default(),
            hot_water_electric_separate: false,
            residents: None,
            window_door_areas: None,
        }
    }

    /// Check input values and build the validated parameters
    pub fn validate(self) -> Result<BuildingParameters, BerError> {
        BuildingParameters::try_from(self)
    }

    /// Footprint area, one storey [m2]
    pub fn floor_area_per_storey(&self) -> f64 {
        self.length * self.width
    }

    /// Gross heated floor area, all storeys [m2]
    pub fn total_heated_area(&self) -> f64 {
        self.floor_area_per_storey() * f64::from(self.heated_storeys)
    }

    /// Vertical envelope area, all storeys [m2]
    pub fn envelope_area(&self) -> f64 {
        ((self.length + self.width) * 2.0) * f64::from(self.heated_storeys) * self.storey_height
    }

    /// Area of walls shared with adjoining units [m2]
    pub fn party_wall_area(&self) -> f64 {
        let h = f64::from(self.heated_storeys) * self.storey_height;
        match self.building_type {
            BuildingType::Detached => 0.0,
            BuildingType::SemiDLength => self.length * h,
            BuildingType::SemiDWidth => self.width * h,
            BuildingType::TerracedLength => self.length * h * 2.0,
            BuildingType::TerracedWidth => self.width * h * 2.0,
        }
    }

    /// Total window and door area [m2]
    ///
    /// Explicit areas when given, otherwise a fraction of the envelope area that
    /// depends on the building type.
    pub fn window_door_area(&self) -> f64 {
        match &self.window_door_areas {
            Some(wd) => wd.total(),
            None => self.envelope_area() * self.building_type.window_area_fraction(),
        }
    }

    /// Residents used for hot water demand
    pub fn effective_residents(&self) -> f64 {
        match self.residents {
            Some(residents) => residents,
            None => (self.total_heated_area() / OCCUPANCY_AREA_PER_PERSON).max(1.0),
        }
    }
}

/// Validated building parameters
///
/// Immutable once built. Read access to every field goes through `Deref`
/// to the underlying `BuildingInput`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BuildingInput", into = "BuildingInput")]
pub struct BuildingParameters {
    input: BuildingInput,
}

impl BuildingParameters {
    /// Copy of these parameters with a different heating configuration
    pub(crate) fn with_heating(
        &self,
        heating_system: HeatingSystem,
        hot_water_electric_separate: bool,
    ) -> Self {
        let mut input = self.input.clone();
        input.heating_system = heating_system;
        input.hot_water_electric_separate = hot_water_electric_separate;
        Self { input }
    }
}

impl TryFrom<BuildingInput> for BuildingParameters {
    type Error = BerError;

    fn try_from(input: BuildingInput) -> Result<Self, Self::Error> {
        check_positive("length", input.length)?;
        check_positive("width", input.width)?;
        check_positive("storey_height", input.storey_height)?;
        if input.storey_height <= FLOOR_THICKNESS {
            return Err(BerError::invalid(
                "storey_height",
                input.storey_height,
                "must be greater than the floor thickness (0.35 m)",
            ));
        }
        if input.heated_storeys < 1 {
            return Err(BerError::invalid(
                "heated_storeys",
                f64::from(input.heated_storeys),
                "at least one heated storey is needed",
            ));
        }
        if let Some(residents) = input.residents {
            check_positive("residents", residents)?;
        }
        if let Some(wd) = &input.window_door_areas {
            check_non_negative("window_door_areas.north", wd.north)?;
            check_non_negative("window_door_areas.east", wd.east)?;
            check_non_negative("window_door_areas.south", wd.south)?;
            check_non_negative("window_door_areas.west", wd.west)?;
            check_non_negative("window_door_areas.doors", wd.doors)?;
        }
        // Same operation order as the heat balance external wall area
        let window_area = input.window_door_area();
        let external_walls = (input.envelope_area() - window_area) - input.party_wall_area();
        if external_walls < 0.0 {
            return Err(BerError::invalid(
                "window_door_areas",
                window_area,
                "openings and party walls exceed the envelope area",
            ));
        }
        Ok(Self { input })
    }
}

impl From<BuildingParameters> for BuildingInput {
    fn from(params: BuildingParameters) -> Self {
        params.input
    }
}

impl Deref for BuildingParameters {
    type Target = BuildingInput;

    fn deref(&self) -> &BuildingInput {
        &self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_labels() {
        assert_eq!("semi_d_length".parse::<BuildingType>().unwrap(), BuildingType::SemiDLength);
        assert_eq!(BuildingType::TerracedWidth.to_string(), "terraced_width");
        assert_eq!("1980_1990".parse::<ConstructionEpoch>().unwrap(), ConstructionEpoch::From1980To1990);
        assert_eq!(ConstructionEpoch::After2010.to_string(), "after_2010");
        assert_eq!(HeatingSystem::HeatPumpAir.to_string(), "heat_pump_air");
        assert_eq!("netherlands".parse::<Country>().unwrap(), Country::Netherlands);
        assert!("castle".parse::<BuildingType>().is_err());
    }

    #[test]
    fn epochs_are_ordered() {
        assert!(ConstructionEpoch::Before1980 < ConstructionEpoch::From1980To1990);
        assert!(ConstructionEpoch::From2000To2010 < ConstructionEpoch::After2010);
    }

    #[test]
    fn derived_residents() {
        let mut input = BuildingInput::new(10.0, 8.0);
        assert_eq!(input.total_heated_area(), 160.0);
        assert_eq!(input.effective_residents(), 160.0 / 52.0);
        // Small dwellings still have one resident
        input = BuildingInput::new(4.0, 5.0);
        input.heated_storeys = 1;
        assert_eq!(input.effective_residents(), 1.0);
        input.residents = Some(2.5);
        assert_eq!(input.effective_residents(), 2.5);
    }

    #[test]
    fn invalid_geometry_is_rejected() {
        let mut input = BuildingInput::new(0.0, 8.0);
        assert!(matches!(
            input.clone().validate(),
            Err(BerError::InvalidInput { field: "length", .. })
        ));
        input.length = 10.0;
        input.storey_height = -3.0;
        assert!(matches!(
            input.clone().validate(),
            Err(BerError::InvalidInput { field: "storey_height", .. })
        ));
        input.storey_height = 3.0;
        input.heated_storeys = 0;
        assert!(matches!(
            input.clone().validate(),
            Err(BerError::InvalidInput { field: "heated_storeys", .. })
        ));
        input.heated_storeys = 1;
        input.width = f64::NAN;
        assert!(input.validate().is_err());
    }

    #[test]
    fn invalid_occupancy_and_openings_are_rejected() {
        let mut input = BuildingInput::new(10.0, 8.0);
        input.residents = Some(0.0);
        assert!(input.clone().validate().is_err());
        input.residents = None;
        input.window_door_areas = Some(WindowDoorAreas {
            south: -1.0,
            ..Default::default()
        });
        assert!(matches!(
            input.validate(),
            Err(BerError::InvalidInput { field: "window_door_areas.south", .. })
        ));
    }

    #[test]
    fn openings_and_party_walls_fit_in_envelope() {
        // 270 m2 envelope, 240 m2 party walls and 35.1 m2 default openings
        let mut input = BuildingInput::new(20.0, 2.5);
        input.building_type = BuildingType::TerracedLength;
        assert_eq!(input.envelope_area(), 270.0);
        assert_eq!(input.party_wall_area(), 240.0);
        assert!(matches!(
            input.clone().validate(),
            Err(BerError::InvalidInput { field: "window_door_areas", .. })
        ));
        input.building_type = BuildingType::TerracedWidth;
        assert!(input.validate().is_ok());

        let mut input = BuildingInput::new(10.0, 8.0);
        input.window_door_areas = Some(WindowDoorAreas {
            south: 500.0,
            ..Default::default()
        });
        assert!(matches!(
            input.clone().validate(),
            Err(BerError::InvalidInput { field: "window_door_areas", .. })
        ));
        // A fully glazed envelope is still a building
        input.window_door_areas = Some(WindowDoorAreas::evenly_split(216.0));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn storey_height_above_floor_thickness() {
        let mut input = BuildingInput::new(10.0, 8.0);
        input.storey_height = 0.3;
        assert!(matches!(
            input.clone().validate(),
            Err(BerError::InvalidInput { field: "storey_height", .. })
        ));
        input.storey_height = 2.4;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn json_building_uses_defaults() {
        let params: BuildingParameters =
            serde_json::from_str(r#"{ "length": 10.0, "width": 8.0, "construction_epoch": "1990_2000" }"#)
                .unwrap();
        assert_eq!(params.heated_storeys, 2);
        assert_eq!(params.storey_height, 3.0);
        assert_eq!(params.building_type, BuildingType::Detached);
        assert_eq!(params.construction_epoch, ConstructionEpoch::From1990To2000);
        assert_eq!(params.heating_system, HeatingSystem::GasBoiler);
        assert!(params.window_door_areas.is_none());

        let bad = serde_json::from_str::<BuildingParameters>(r#"{ "length": -1.0, "width": 8.0 }"#);
        assert!(bad.is_err());
    }

    #[test]
    fn window_split() {
        let wd = WindowDoorAreas::evenly_split(32.4);
        assert_eq!(wd.north, 8.1);
        assert_eq!(wd.doors, 0.0);
        assert!((wd.total() - 32.4).abs() < 1e-12);
    }
}

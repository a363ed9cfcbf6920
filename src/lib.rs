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
BerHWB
======

This crate provides a library and binary that **estimates the residential Building Energy
Rating (BER)** of a building from a few physical parameters, using the annual heat balance
(HWB, *Heizwärmebedarf*) method of the reference spreadsheet tool.

The heat balance is a closed-form model:

- geometry from the footprint, storey count and storey height
- transmission losses from era-dependent U-values, with a thermal bridge supplement
- ventilation losses at a fixed air change rate
- internal and solar gains over the heating season of the climate region
- hot water demand from the number of residents
- final energy and CO2 emissions from the heating system efficiency and factors

The final energy intensity is converted to primary energy with the factor of the heating
system and classified in the BER bands (A1 to G). A retrofit scenario (added insulation,
new windows, new heating system) can be rated alongside the current building.

It also holds the following assumptions, inherited from the reference tool:

- flat roof and slab on grade, both with the area of the footprint
- no utilisation factor for gains; surplus gains are lost
- the heated volume counts the storeys twice
- party walls have no heat losses

Every calculation is a pure function of its inputs and the static tables, so buildings can
be rated concurrently without any coordination.

# Ejemplo

```rust
use berhwb::*;

let mut input = BuildingInput::new(10.0, 8.0);
input.heating_system = HeatingSystem::OilBoiler;
let building = input.validate().unwrap();

let mut measures = RetrofitInput::default();
measures.heating_system_after = Some(HeatingSystem::HeatPumpAir);
let retrofit = measures.validate().unwrap();

let ber = calculate_ber(&building, Some(&retrofit));
println!("{}", ber.to_plain());
```

*/

#![warn(missing_docs)]

#[cfg(test)] // <-- not needed in integration tests
#[macro_use]
extern crate pretty_assertions;

mod asplain;
mod ber;
mod hwb;
mod rating;
mod retrofit;

pub mod error;
pub mod tables;
pub mod types;

pub use asplain::*;
pub use ber::*;
pub use error::BerError;
pub use hwb::*;
pub use rating::*;
pub use retrofit::*;
pub use types::*;

/// Número de versión de la librería
///
/// Version number
pub static VERSION: &str = env!("CARGO_PKG_VERSION");

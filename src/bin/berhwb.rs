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


#[macro_use]
extern crate clap;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::process::exit;
use std::str::FromStr;

use clap::{App, AppSettings, Arg, ArgMatches};
use failure::Error;
use failure::ResultExt;
use strum::VariantNames;
use tracing::{info, trace, warn, Level};

use berhwb::*;

// Funciones auxiliares -----------------------------------------------------------------------

fn readfile(path: &Path) -> Result<String, Error> {
    let mut f = File::open(path).context(format!("File {} not found", path.display()))?;
    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .context("Error reading file")?;
    Ok(contents)
}

fn writefile(path: &Path, content: &[u8]) -> Result<(), Error> {
    let mut file =
        File::create(&path).context(format!("Could not create file {}", path.display()))?;
    file.write_all(content)
        .context(format!("Could not write to file {}", path.display()))?;
    Ok(())
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}

/// Value given by the user on the command line, if any
fn user_value<T: FromStr>(matches: &ArgMatches<'_>, name: &str) -> Option<T> {
    if matches.occurrences_of(name) == 0 {
        return None;
    }
    let value = value_t!(matches, name, T).unwrap_or_else(|error| {
        warn!("{}", error);
        eprintln!(
            "ERROR: \"{}\" is not a valid value for {}",
            matches.value_of(name).unwrap_or_default(),
            name
        );
        exit(exitcode::DATAERR);
    });
    Some(value)
}

/// Window and door areas given as N, E, S, W and doors
fn window_areas_from_args(values: Option<clap::Values<'_>>) -> Option<WindowDoorAreas> {
    values.map(|v| {
        let vv: Vec<f64> = v
            .map(|vv| {
                f64::from_str(vv.trim()).unwrap_or_else(|_| {
                    eprintln!("ERROR: \"{}\" is not a valid window or door area", vv);
                    exit(exitcode::DATAERR);
                })
            })
            .collect();
        WindowDoorAreas {
            north: vv[0],
            east: vv[1],
            south: vv[2],
            west: vv[3],
            doors: vv[4],
        }
    })
}

/// Load the building description from file or start from the footprint given by the user
fn get_description(matches: &ArgMatches<'_>) -> BuildingDescription {
    if let Some(archivo) = matches.value_of("input") {
        let path = Path::new(archivo);
        let descstring = readfile(path).unwrap_or_else(|err| {
            eprintln!(
                "ERROR: Could not read building description file \"{}\" -> {}",
                path.display(),
                err
            );
            exit(exitcode::IOERR);
        });
        println!("Building description (file): \"{}\"", path.display());
        descstring.parse().unwrap_or_else(|err: BerError| {
            eprintln!(
                "ERROR: Wrong format in building description file \"{}\" -> {}",
                path.display(),
                err
            );
            exit(exitcode::DATAERR);
        })
    } else {
        // clap makes length and width required without an input file or -L
        let length = user_value(matches, "length").unwrap_or_else(|| exit(exitcode::USAGE));
        let width = user_value(matches, "width").unwrap_or_else(|| exit(exitcode::USAGE));
        println!("Building description (user)");
        BuildingDescription {
            building: BuildingInput::new(length, width),
            retrofit: None,
        }
    }
}

/// Building data with command line values overriding the description
/// CLI arguments > Description file > Default values
fn override_building(input: &mut BuildingInput, matches: &ArgMatches<'_>) {
    if let Some(length) = user_value(matches, "length") {
        input.length = length;
    }
    if let Some(width) = user_value(matches, "width") {
        input.width = width;
    }
    if let Some(storeys) = user_value(matches, "storeys") {
        input.heated_storeys = storeys;
    }
    if let Some(height) = user_value(matches, "storey_height") {
        input.storey_height = height;
    }
    if let Some(building_type) = user_value(matches, "building_type") {
        input.building_type = building_type;
    }
    if let Some(epoch) = user_value(matches, "epoch") {
        input.construction_epoch = epoch;
    }
    if let Some(country) = user_value(matches, "country") {
        input.country = country;
    }
    if let Some(heating) = user_value(matches, "heating") {
        input.heating_system = heating;
    }
    if let Some(hw_electric) = user_value(matches, "hw_electric") {
        input.hot_water_electric_separate = hw_electric;
    }
    if let Some(residents) = user_value(matches, "residents") {
        input.residents = Some(residents);
    }
    if let Some(areas) = window_areas_from_args(matches.values_of("window_areas")) {
        input.window_door_areas = Some(areas);
    }
}

/// Retrofit measures from the description and the command line, if any was requested
/// CLI arguments > Description file > Default values
fn get_retrofit(
    retrofit: Option<RetrofitInput>,
    matches: &ArgMatches<'_>,
) -> Option<RetrofitInput> {
    let user_options = [
        "retrofit",
        "wall_insulation",
        "roof_insulation",
        "window_u",
        "heating_after",
        "hw_electric_after",
    ];
    if retrofit.is_none() && user_options.iter().all(|o| !matches.is_present(o)) {
        return None;
    }
    let mut measures = retrofit.unwrap_or_default();
    if let Some(wall) = user_value(matches, "wall_insulation") {
        measures.wall_insulation_cm = wall;
    }
    if let Some(roof) = user_value(matches, "roof_insulation") {
        measures.roof_insulation_cm = roof;
    }
    if let Some(window) = user_value(matches, "window_u") {
        measures.window_u_value = Some(window);
    }
    if let Some(heating) = user_value(matches, "heating_after") {
        measures.heating_system_after = Some(heating);
    }
    if let Some(hw_electric) = user_value(matches, "hw_electric_after") {
        measures.hot_water_electric_separate_after = Some(hw_electric);
    }
    Some(measures)
}

// Función principal ------------------------------------------------------------------------------

fn main() {
    let matches = App::new("BerHWB")
        .bin_name("berhwb")
        .version(env!("CARGO_PKG_VERSION"))
        .author("
Copyright (c) 2025 BER Automation developers

License: Published under the MIT License.

")
        .about("BerHWB - Building Energy Rating (BER) estimation with the HWB heat balance method.")
        .setting(AppSettings::NextLineHelp)
        .arg(Arg::with_name("length")
            .short("l")
            .long("length")
            .value_name("LENGTH")
            .help("Footprint length [m]")
            .takes_value(true)
            .required_unless_one(&["input", "showlicense"])
            .display_order(1))
        .arg(Arg::with_name("width")
            .short("w")
            .long("width")
            .value_name("WIDTH")
            .help("Footprint width [m]")
            .takes_value(true)
            .required_unless_one(&["input", "showlicense"])
            .display_order(2))
        .arg(Arg::with_name("storeys")
            .short("s")
            .long("storeys")
            .value_name("STOREYS")
            .help("Number of heated storeys (default 2)")
            .takes_value(true)
            .display_order(3))
        .arg(Arg::with_name("storey_height")
            .long("storey-height")
            .value_name("HEIGHT")
            .help("Storey height [m] (default 3.0)")
            .takes_value(true)
            .display_order(4))
        .arg(Arg::with_name("building_type")
            .short("t")
            .long("type")
            .value_name("TYPE")
            .possible_values(BuildingType::VARIANTS)
            .help("Building type (default detached)")
            .takes_value(true)
            .display_order(5))
        .arg(Arg::with_name("epoch")
            .short("e")
            .long("epoch")
            .value_name("EPOCH")
            .possible_values(ConstructionEpoch::VARIANTS)
            .help("Construction epoch (default before_1980)")
            .takes_value(true)
            .display_order(6))
        .arg(Arg::with_name("country")
            .short("c")
            .long("country")
            .value_name("COUNTRY")
            .possible_values(Country::VARIANTS)
            .help("Climate region (default ireland)")
            .takes_value(true)
            .display_order(7))
        .arg(Arg::with_name("heating")
            .short("H")
            .long("heating")
            .value_name("SYSTEM")
            .possible_values(HeatingSystem::VARIANTS)
            .help("Space heating system (default gas_boiler)")
            .takes_value(true)
            .display_order(8))
        .arg(Arg::with_name("hw_electric")
            .long("hw-electric")
            .value_name("BOOL")
            .possible_values(&["true", "false"])
            .help("Hot water produced by a separate direct electric system (default false)")
            .takes_value(true)
            .display_order(9))
        .arg(Arg::with_name("residents")
            .short("r")
            .long("residents")
            .value_name("RESIDENTS")
            .help("Number of residents (default: one per 52 m2 of heated area)")
            .takes_value(true)
            .display_order(10))
        .arg(Arg::with_name("window_areas")
            .long("window-areas")
            .value_names(&["NORTH", "EAST", "SOUTH", "WEST", "DOORS"])
            .help("Window areas by orientation and door area [m2].\nE.g.: --window-areas 8 8 8 8 2")
            .takes_value(true)
            .number_of_values(5)
            .display_order(11))
        .arg(Arg::with_name("input")
            .short("i")
            .long("input")
            .value_name("INPUT_FILE")
            .help("Building description in JSON format. Command line values take precedence")
            .takes_value(true)
            .display_order(12))
        .arg(Arg::with_name("retrofit")
            .short("R")
            .long("retrofit")
            .help("Rate a retrofit scenario (default: 12 cm wall, 20 cm roof, U = 1.0 windows)"))
        .arg(Arg::with_name("wall_insulation")
            .long("wall-insulation")
            .value_name("CM")
            .help("Added external wall insulation [cm]")
            .takes_value(true))
        .arg(Arg::with_name("roof_insulation")
            .long("roof-insulation")
            .value_name("CM")
            .help("Added roof insulation [cm]")
            .takes_value(true))
        .arg(Arg::with_name("window_u")
            .long("window-u")
            .value_name("U")
            .help("U-value of the replacement windows [W/m2K]")
            .takes_value(true))
        .arg(Arg::with_name("heating_after")
            .long("heating-after")
            .value_name("SYSTEM")
            .possible_values(HeatingSystem::VARIANTS)
            .help("Heating system after the retrofit")
            .takes_value(true))
        .arg(Arg::with_name("hw_electric_after")
            .long("hw-electric-after")
            .value_name("BOOL")
            .possible_values(&["true", "false"])
            .help("Separate electric hot water after the retrofit")
            .takes_value(true))
        .arg(Arg::with_name("archivo_salida_json")
            .long("json")
            .value_name("OUTPUT_JSON_FILE")
            .help("Output file for the detailed results in JSON format")
            .takes_value(true))
        .arg(Arg::with_name("showlicense")
            .short("L")
            .long("license")
            .help("Show the license of the program (MIT)"))
        .arg(Arg::with_name("v")
            .short("v")
            .multiple(true)
            .help("Sets the level of verbosity"))
        .get_matches();

    if matches.is_present("showlicense") {
        println!(
            "
Copyright (c) 2025 BER Automation developers

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the 'Software'), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED 'AS IS', WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE."
        );
        exit(exitcode::OK);
    }

    // Prólogo ------------------------------------------------------------------------------------

    let verbosity = matches.occurrences_of("v");
    init_logging(verbosity);
    trace!("Command line options: {:#?}", matches);

    println!("** Input data");

    // Datos del edificio -------------------------------------------------------------------------
    let description = get_description(&matches);
    let mut input = description.building;
    override_building(&mut input, &matches);

    let building = input.validate().unwrap_or_else(|err| {
        warn!("Building data rejected: {}", err);
        eprintln!("ERROR: {}", err);
        exit(exitcode::DATAERR);
    });
    info!(
        "Building: {} x {} m, {} storeys of {} m",
        building.length, building.width, building.heated_storeys, building.storey_height
    );

    // Medidas de mejora --------------------------------------------------------------------------
    let retrofit = get_retrofit(description.retrofit, &matches).map(|measures| {
        measures.validate().unwrap_or_else(|err| {
            warn!("Retrofit data rejected: {}", err);
            eprintln!("ERROR: {}", err);
            exit(exitcode::DATAERR);
        })
    });
    if let Some(measures) = &retrofit {
        info!(
            "Retrofit: wall {} cm, roof {} cm, windows {:?}, heating {:?}",
            measures.wall_insulation_cm,
            measures.roof_insulation_cm,
            measures.window_u_value,
            measures.heating_system_after
        );
    }

    // Cálculo ------------------------------------------------------------------------------------
    let ber = calculate_ber(&building, retrofit.as_ref());

    // Salida de resultados -----------------------------------------------------------------------
    println!("{}", ber.to_plain());

    if let Some(archivo) = matches.value_of_os("archivo_salida_json") {
        let path = Path::new(archivo);
        info!("Writing JSON results to {}", path.display());
        let json = serde_json::to_string_pretty(&ber).unwrap_or_else(|err| {
            eprintln!("ERROR: Could not convert the results to JSON -> {}", err);
            exit(exitcode::SOFTWARE);
        });
        if let Err(err) = writefile(path, json.as_bytes()) {
            eprintln!("ERROR: {}", err);
            exit(exitcode::IOERR);
        }
        println!("Results saved to: {}", path.display());
    }
}

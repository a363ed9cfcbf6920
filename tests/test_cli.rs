#[test]
fn unifamiliar_1970() {
    assert_cli::Assert::main_binary()
        .with_args(&["-l", "10", "-w", "8", "-H", "oil_boiler"])
        .stdout()
        .contains("BER = C2 (#F47920)")
        .stdout()
        .contains("E_p [kWh/m2.a]: 188.0")
        .stdout()
        .contains("Floor area [m2]: 160")
        .stdout()
        .contains("HWB [kWh/m2.a]: 130.6")
        .unwrap();
}

#[test]
fn unifamiliar_1970_defaults() {
    // gas boiler by default
    assert_cli::Assert::main_binary()
        .with_args(&["-l", "10", "-w", "8"])
        .stdout()
        .contains("Heating: gas_boiler")
        .stdout()
        .contains("Type: detached, before_1980, ireland")
        .unwrap();
}

#[test]
fn unifamiliar_1970_mejora() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-l",
            "10",
            "-w",
            "8",
            "-H",
            "oil_boiler",
            "--retrofit",
            "--heating-after",
            "heat_pump_air",
        ])
        .stdout()
        .contains("** Retrofit")
        .stdout()
        .contains("BER = A2 (#4DB848)")
        .stdout()
        .contains("E_p [kWh/m2.a]: 34.1")
        .stdout()
        .contains("Savings [kWh/m2.a]: 153.9")
        .unwrap();
}

#[test]
fn unifamiliar_1970_mejora_archivo() {
    assert_cli::Assert::main_binary()
        .with_args(&["-i", "test_data/unifamiliar_1970_mejora.json"])
        .stdout()
        .contains("BER = C2 (#F47920)")
        .stdout()
        .contains("BER = A2 (#4DB848)")
        .unwrap();
}

#[test]
fn semid_moderna_archivo() {
    assert_cli::Assert::main_binary()
        .with_args(&["-i", "test_data/semid_moderna.json"])
        .stdout()
        .contains("BER = A1 (#00A651)")
        .stdout()
        .contains("E_p [kWh/m2.a]: 24.9")
        .stdout()
        .contains("Heated volume [m3]: 474")
        .stdout()
        .contains("SCOP [-]: 3.50")
        .unwrap();
}

#[test]
fn cli_overrides_file() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-i",
            "test_data/semid_moderna.json",
            "-e",
            "before_1980",
            "-H",
            "oil_boiler",
        ])
        .stdout()
        .contains("Type: semi_d_length, before_1980, ireland")
        .stdout()
        .contains("Heating: oil_boiler")
        .unwrap();
}

#[test]
fn separate_electric_hot_water() {
    assert_cli::Assert::main_binary()
        .with_args(&["-l", "10", "-w", "8", "--hw-electric", "true"])
        .stdout()
        .contains("Heating: gas_boiler, separate electric hot water")
        .unwrap();
}

#[test]
fn separate_electric_hot_water_off_overrides_file() {
    assert_cli::Assert::main_binary()
        .with_args(&["-i", "test_data/semid_moderna_acs_electrica.json"])
        .stdout()
        .contains("Heating: heat_pump_air, separate electric hot water")
        .unwrap();
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-i",
            "test_data/semid_moderna_acs_electrica.json",
            "--hw-electric",
            "false",
        ])
        .stdout()
        .doesnt_contain("separate electric hot water")
        .unwrap();
}

#[test]
fn long_terraced_house() {
    assert_cli::Assert::main_binary()
        .with_args(&["-l", "20", "-w", "2.5", "-t", "terraced_length"])
        .fails_with(65)
        .and()
        .stderr()
        .contains("openings and party walls exceed the envelope area")
        .unwrap();
}

#[test]
fn explicit_window_areas() {
    assert_cli::Assert::main_binary()
        .with_args(&["-l", "10", "-w", "8", "--window-areas", "5", "5", "10", "5", "2"])
        .stdout()
        .contains("Window area [m2]: 27")
        .unwrap();
}

#[test]
fn json_output() {
    let path = std::env::temp_dir().join("berhwb_test_cli_output.json");
    let path_str = path.to_str().unwrap();
    assert_cli::Assert::main_binary()
        .with_args(&["-l", "10", "-w", "8", "-H", "oil_boiler", "--json", path_str])
        .stdout()
        .contains("Results saved to:")
        .unwrap();
    let json = std::fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"ber_band\": \"C2\""));
    assert!(json.contains("\"color_hex\": \"#F47920\""));
    assert!(json.contains("\"heating_system\": \"oil_boiler\""));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn invalid_length() {
    assert_cli::Assert::main_binary()
        .with_args(&["--length=-5", "-w", "8"])
        .fails_with(65)
        .and()
        .stderr()
        .contains("Invalid value for length")
        .unwrap();
}

#[test]
fn invalid_number() {
    assert_cli::Assert::main_binary()
        .with_args(&["-l", "ten", "-w", "8"])
        .fails_with(65)
        .unwrap();
}

#[test]
fn invalid_retrofit() {
    assert_cli::Assert::main_binary()
        .with_args(&["-l", "10", "-w", "8", "--wall-insulation=-3"])
        .fails_with(65)
        .and()
        .stderr()
        .contains("wall_insulation_cm")
        .unwrap();
}

#[test]
fn missing_width() {
    assert_cli::Assert::main_binary()
        .with_args(&["-l", "10"])
        .fails()
        .unwrap();
}

#[test]
fn missing_input_file() {
    assert_cli::Assert::main_binary()
        .with_args(&["-i", "test_data/no_existe.json"])
        .fails_with(74)
        .unwrap();
}

#[test]
fn wrong_input_file() {
    assert_cli::Assert::main_binary()
        .with_args(&["-i", "test_data/sin_anchura.json"])
        .fails_with(65)
        .and()
        .stderr()
        .contains("Wrong format in building description file")
        .unwrap();
}

#[test]
fn show_license() {
    assert_cli::Assert::main_binary()
        .with_args(&["-L"])
        .stdout()
        .contains("Permission is hereby granted")
        .unwrap();
}

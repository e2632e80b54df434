//! Command-line configuration file tests

use std::io::{Cursor, Write};

use clap::Parser;
use enigma_server::{SessionError, SystemEnv, cli};

fn config_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn parse(argv: &[&str]) -> cli::Args {
    cli::Args::try_parse_from(std::iter::once("enigma").chain(argv.iter().copied())).unwrap()
}

#[test]
fn loads_config_file_with_defaults() {
    let file = config_file(r#"{"rotor_sequence": ["I", "II", "III"], "initial_positions": "ADU"}"#);
    let config = cli::load_config(file.path()).unwrap();
    assert_eq!(config.rotor_sequence, ["I", "II", "III"]);
    assert_eq!(config.initial_positions, "ADU");
    assert_eq!(config.reflector, "B");
}

#[test]
fn flags_override_config_file() {
    let file = config_file(
        r#"{"rotor_sequence": ["II", "IV", "V"], "ring_setting": [2, 21, 12],
            "initial_positions": "AAA", "plug_combinations": ["AV", "BS"]}"#,
    );
    let path = file.path().to_str().unwrap();
    let config = parse(&["--config", path, "--positions", "BLA"]).machine_config().unwrap();
    assert_eq!(config.ring_setting, [2, 21, 12]);
    assert_eq!(config.initial_positions, "BLA");
    assert_eq!(config.plug_combinations, ["AV", "BS"]);
}

#[test]
fn missing_or_malformed_file_is_a_config_error() {
    let err = cli::load_config(std::path::Path::new("/nonexistent/enigma.json")).unwrap_err();
    assert!(matches!(err, SessionError::Config { .. }));

    let file = config_file("{ not json");
    let err = cli::load_config(file.path()).unwrap_err();
    assert!(matches!(err, SessionError::Config { .. }));
}

#[test]
fn run_with_historical_settings_from_file() {
    let file = config_file(
        r#"{"rotor_sequence": ["II", "IV", "V"], "ring_setting": [2, 21, 12],
            "initial_positions": "BLA",
            "plug_combinations": ["AV", "BS", "CG", "DL", "FU", "HZ", "IN", "KM", "OW", "RX"]}"#,
    );
    let args = parse(&["--config", file.path().to_str().unwrap()]);

    let mut out = Vec::new();
    cli::run(&args, &SystemEnv::new(), Cursor::new("EDPUD NRGYS ZRCXN\n"), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "AUFKL XABTE ILUNG\n");
}

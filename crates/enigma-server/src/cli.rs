//! Command-line front end.
//!
//! Settings come from an optional JSON config file, then explicit flags
//! override individual fields. Messages come from positional arguments or,
//! when none are given, from stdin one line at a time. All lines go through
//! one session, so rotor state carries across lines unless
//! `--reset-each-line` is set.

use std::{
    fs,
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use enigma_core::MachineConfig;
use thiserror::Error;

use crate::{
    env::Environment, error::SessionError, payload::SessionId, session_manager::SessionManager,
};

/// Enigma rotor cipher machine
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "enigma")]
#[command(about = "Encode and decode text with a simulated Enigma machine")]
#[command(version)]
pub struct Args {
    /// JSON machine configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Rotor types, slowest-first (e.g. III,II,I)
    #[arg(short, long, value_delimiter = ',')]
    pub rotors: Option<Vec<String>>,

    /// Reflector type (A, B or C)
    #[arg(long)]
    pub reflector: Option<String>,

    /// Ring settings 1-26, slowest-first (e.g. 1,1,1)
    #[arg(long, value_delimiter = ',')]
    pub rings: Option<Vec<u8>>,

    /// Starting window letters, slowest-first (e.g. AAA)
    #[arg(short, long)]
    pub positions: Option<String>,

    /// Plug leads (e.g. AB,CD)
    #[arg(long, value_delimiter = ',')]
    pub plugs: Option<Vec<String>>,

    /// Print one JSON object per message instead of the bare ciphertext
    #[arg(long)]
    pub json: bool,

    /// Reset the rotors before every input line
    #[arg(long)]
    pub reset_each_line: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Message to encode; read stdin lines when omitted
    pub message: Vec<String>,
}

/// Errors from the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// Session or machine error.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing output failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a JSON [`MachineConfig`]; omitted fields take their defaults.
pub fn load_config(path: &Path) -> Result<MachineConfig, SessionError> {
    let config_error =
        |reason: String| SessionError::Config { path: path.display().to_string(), reason };

    let text = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| config_error(e.to_string()))
}

impl Args {
    /// Resolve the machine configuration: file (or default), then flags.
    ///
    /// Changing the rotor count without giving ring settings or positions
    /// resets those to 1 and `A` for every rotor.
    pub fn machine_config(&self) -> Result<MachineConfig, SessionError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => MachineConfig::default(),
        };

        if let Some(rotors) = &self.rotors {
            if rotors.len() != config.rotor_sequence.len() {
                config.ring_setting = vec![1; rotors.len()];
                config.initial_positions = "A".repeat(rotors.len());
            }
            config.rotor_sequence.clone_from(rotors);
        }
        if let Some(reflector) = &self.reflector {
            config.reflector.clone_from(reflector);
        }
        if let Some(rings) = &self.rings {
            config.ring_setting.clone_from(rings);
        }
        if let Some(positions) = &self.positions {
            config.initial_positions.clone_from(positions);
        }
        if let Some(plugs) = &self.plugs {
            config.plug_combinations.clone_from(plugs);
        }

        config.validate().map_err(SessionError::from)?;
        Ok(config)
    }
}

/// Encode every message and write the results to `output`.
pub fn run<E, R, W>(args: &Args, env: &E, input: R, mut output: W) -> Result<(), CliError>
where
    E: Environment,
    R: BufRead,
    W: Write,
{
    let config = args.machine_config()?;
    let session = SessionId::default();
    let mut manager = SessionManager::<E>::new();
    manager.create_session(session.clone(), &config, env)?;

    let mut encode_one = |message: &str| -> Result<(), CliError> {
        if args.reset_each_line {
            manager.reset(&session)?;
        }
        let response = manager.encode(&session, message, env)?;
        if args.json {
            writeln!(output, "{}", serde_json::to_string(&response)?)?;
        } else {
            writeln!(output, "{}", response.encoded)?;
        }
        Ok(())
    };

    if args.message.is_empty() {
        for line in input.lines() {
            encode_one(&line?)?;
        }
    } else {
        encode_one(&args.message.join(" "))?;
    }

    output.flush()?;
    Ok(())
}

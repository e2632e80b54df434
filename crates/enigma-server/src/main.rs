//! Enigma command-line binary.
//!
//! # Usage
//!
//! ```bash
//! # Encode with the default machine (III, II, I / B / AAA)
//! enigma "HELLO WORLD"
//!
//! # Historical settings, reading stdin
//! enigma --rotors II,IV,V --rings 2,21,12 --positions BLA \
//!        --plugs AV,BS,CG,DL,FU,HZ,IN,KM,OW,RX < message.txt
//!
//! # Settings from a file, JSON output
//! enigma --config machine.json --json "ATTACK AT DAWN"
//! ```

use std::io;

use clap::Parser;
use enigma_server::{SystemEnv, cli::Args};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    tracing::debug!(?args, "enigma starting");

    let env = SystemEnv::new();
    enigma_server::cli::run(&args, &env, io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}

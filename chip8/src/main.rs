use std::path::PathBuf;

use clap::Parser;

use chip8_core::CLOCK_SPEED;

mod keymap;
mod render;
mod run;

/// Runs a Chip-8 ROM headlessly and prints the final frame
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    #[arg(long, default_value_t = 1_000_000_000 / CLOCK_SPEED, help = "CPU cycles per second")]
    hz: u64,

    #[arg(short, long, help = "Stop after this many cycles")]
    cycles: Option<u64>,

    #[arg(short, long, help = "Seed for the random opcode")]
    seed: Option<u64>,

    #[arg(short, long, default_value = "", help = "Keys held down for the whole run, e.g. \"qe\"")]
    keys: String,

    #[arg(short, long, help = "Ignore the clock and run as fast as possible")]
    fast_forward: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    run::run(&args)
}

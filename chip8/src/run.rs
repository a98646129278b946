use std::time::{Duration, Instant};

use anyhow::{anyhow, bail, Context};
use log::{error, info};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use chip8_core::{Chip8, Memory};

use crate::keymap::keymap;
use crate::render::frame_to_text;
use crate::Args;

pub fn run(args: &Args) -> anyhow::Result<()> {
    if args.hz == 0 {
        bail!("--hz must be greater than zero");
    }

    // Load ROM
    let rom = std::fs::read(&args.rom)
        .with_context(|| format!("unable to read ROM {}", args.rom.display()))?;
    let mut memory = Memory::new();
    memory
        .load_program(&rom)
        .with_context(|| format!("unable to load ROM {}", args.rom.display()))?;
    info!("loaded {} ({} bytes)", args.rom.display(), rom.len());

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut chip8 = Chip8::with_rng(memory, rng);

    for key in args.keys.chars() {
        let kc = keymap(key).ok_or_else(|| anyhow!("{:?} is not mapped to the keypad", key))?;
        chip8.key_press(kc)?;
    }

    let result = drive(&mut chip8, args);
    print!("{}", frame_to_text(chip8.framebuffer()));
    result
}

/// Steps the CPU at `args.hz` until the cycle limit or the first fault
fn drive<R: RngCore>(chip8: &mut Chip8<R>, args: &Args) -> anyhow::Result<()> {
    // Set initial timing
    let cycle_time = Duration::from_nanos(1_000_000_000 / args.hz);
    let mut last_cycle = Instant::now();
    let mut cycles: u64 = 0;

    while args.cycles.map_or(true, |limit| cycles < limit) {
        match chip8.step() {
            Ok(cycle) => {
                if cycle.beep {
                    info!("beep at cycle {}", cycles);
                }
            }
            Err(e) => {
                error!("stopped after {} cycles at pc {:#05X}", cycles, chip8.state().pc);
                return Err(e.into());
            }
        }
        cycles += 1;

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if !args.fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    info!("finished {} cycles", cycles);
    Ok(())
}

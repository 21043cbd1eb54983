use std::path::PathBuf;

use clap::Parser;

use chip8_core::{FaultPolicy, CLOCK_SPEED, FRAME_RATE};

/// Run a Chip-8 ROM
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Args {
    /// Path to the ROM to load at 0x200
    pub rom: PathBuf,

    /// Instructions executed per second
    #[arg(long, default_value_t = CLOCK_SPEED)]
    pub clock_speed: u32,

    /// Frames per second; timers tick and the display refreshes once per frame
    #[arg(long, default_value_t = FRAME_RATE, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Window pixel size multiplier
    #[arg(long, default_value_t = 10)]
    pub scale: u32,

    /// Seed for the random number instruction
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop on the first fault instead of logging it and continuing
    #[arg(long)]
    pub halt_on_fault: bool,

    /// Run without a window and print the final frame
    #[arg(long)]
    pub headless: bool,

    /// Frames to run when headless
    #[arg(long, default_value_t = 600)]
    pub frames: u32,
}

impl Args {
    /// How many instructions run between two timer ticks
    pub fn cycles_per_frame(&self) -> u32 {
        (self.clock_speed / self.fps).max(1)
    }

    pub fn fault_policy(&self) -> FaultPolicy {
        if self.halt_on_fault {
            FaultPolicy::Halt
        } else {
            FaultPolicy::Continue
        }
    }
}

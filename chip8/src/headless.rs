use std::error::Error;

use log::{error, info};

use chip8_core::Chip8;
use chip8_display::frame_to_text;

use crate::config::Args;

/// Runs `args.frames` frames as fast as possible with no keys pressed, then
/// prints the last frame to stdout.
pub fn run(mut chip8: Chip8, args: &Args) -> Result<(), Box<dyn Error>> {
    let keys = [false; 16];
    let cycles = args.cycles_per_frame();
    for frame in 0..args.frames {
        if let Err(fault) = chip8.run_frame(&keys, cycles, args.fault_policy()) {
            error!("halted on frame {}: {}", frame, fault);
            println!("{}", frame_to_text(chip8.frame_buffer()));
            return Err(fault.into());
        }
    }
    info!("ran {} frames", args.frames);
    println!("{}", frame_to_text(chip8.frame_buffer()));
    Ok(())
}

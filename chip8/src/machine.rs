use std::error::Error;
use std::fs::File;
use std::io::BufReader;

use log::info;

use chip8_core::Chip8;

use crate::config::Args;

/// Builds a machine and loads the ROM named by `args`
pub fn load(args: &Args) -> Result<Chip8, Box<dyn Error>> {
    let mut chip8 = match args.seed {
        Some(seed) => Chip8::with_seed(seed),
        None => Chip8::new(),
    };
    let file = File::open(&args.rom)
        .map_err(|e| format!("unable to open {}: {}", args.rom.display(), e))?;
    let mut reader = BufReader::new(file);
    chip8.load_rom_from(&mut reader)?;
    info!(
        "loaded {} at {} instructions per second, {} per frame",
        args.rom.display(),
        args.clock_speed,
        args.cycles_per_frame()
    );
    Ok(chip8)
}

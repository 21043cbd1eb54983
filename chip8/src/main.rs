use std::error::Error;

use clap::Parser;

use chip8_core::Chip8;

mod config;
mod headless;
#[cfg(feature = "sdl")]
mod keymap;
mod machine;
#[cfg(feature = "sdl")]
mod run;

use config::Args;

fn main() -> Result<(), Box<dyn Error>> {
    // Log to stderr, e.g. `RUST_LOG=trace` to see every instruction
    env_logger::init();

    let args = Args::parse();
    let chip8 = machine::load(&args)?;
    start(chip8, &args)
}

#[cfg(feature = "sdl")]
fn start(chip8: Chip8, args: &Args) -> Result<(), Box<dyn Error>> {
    if args.headless {
        headless::run(chip8, args)
    } else {
        run::run(chip8, args)
    }
}

#[cfg(not(feature = "sdl"))]
fn start(chip8: Chip8, args: &Args) -> Result<(), Box<dyn Error>> {
    headless::run(chip8, args)
}

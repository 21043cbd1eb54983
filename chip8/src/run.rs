use std::error::Error;
use std::time::{Duration, Instant};

use log::{debug, error, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8_core::{Chip8, Keypad};
use chip8_display::Display;

use crate::config::Args;
use crate::keymap::keymap;

pub fn run(mut chip8: Chip8, args: &Args) -> Result<(), Box<dyn Error>> {
    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init()?;
    let mut display = Display::new(&sdl, "Chip-8", args.scale)?;
    let mut events = sdl.event_pump()?;

    let frame_time = Duration::from_secs(1) / args.fps;
    let cycles = args.cycles_per_frame();
    let mut keys: Keypad = [false; 16];

    info!("running at {} fps", args.fps);

    'event: loop {
        let frame_start = Instant::now();

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(k) = keymap(key) {
                        keys[k] = true;
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(k) = keymap(key) {
                        keys[k] = false;
                    }
                }
                _ => continue,
            };
        }

        // Update state
        if let Err(fault) = chip8.run_frame(&keys, cycles, args.fault_policy()) {
            error!("halted: {}", fault);
            return Err(fault.into());
        }

        // Only redraw when the frame changed
        if let Some(frame) = chip8.take_frame() {
            display.render(frame)?;
        }

        // Handle timing
        let elapsed = frame_start.elapsed();
        if frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        } else {
            debug!("frame overran by {:?}", elapsed - frame_time);
        }
    }

    info!("window closed");
    Ok(())
}

use std::io::Read;

use log::{debug, warn};

use crate::constants::{MEMORY_SIZE, PROGRAM_START};
use crate::error::{Fault, RomError};
use crate::instruction;
use crate::state::{FrameBuffer, Keypad, State};

/// What a batch of cycles does when an instruction faults
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FaultPolicy {
    /// Log the fault and carry on with the next instruction
    #[default]
    Continue,
    /// Stop the batch and hand the fault back to the caller
    Halt,
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Owns a single `state`; any number of machines can run side by side.
///
/// Supplies interfaces for:
/// - loading roms
/// - advancing the CPU one cycle (or one frame's worth of cycles) with a keypad snapshot
/// - advancing its timers
/// - inspecting its frame buffer for rendering by some display
pub struct Chip8 {
    state: State,
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8 {
            state: State::new(),
        }
    }

    /// A machine whose random number generator is seeded
    pub fn with_seed(seed: u64) -> Self {
        Chip8 {
            state: State::with_seed(seed),
        }
    }

    /// Load a rom into memory at 0x200
    ///
    /// # Arguments
    /// * `rom` the raw program bytes
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), RomError> {
        let start = PROGRAM_START as usize;
        let max = MEMORY_SIZE - start;
        if rom.is_empty() {
            return Err(RomError::Empty);
        }
        if rom.len() > max {
            return Err(RomError::TooLarge {
                size: rom.len(),
                max,
            });
        }
        self.state.memory[start..start + rom.len()].copy_from_slice(rom);
        debug!("loaded {} byte ROM at {:#05X}", rom.len(), start);
        Ok(())
    }

    /// Load a rom from a source such as a file
    ///
    /// # Arguments
    /// * `reader` a reader that contains a ROM
    pub fn load_rom_from(&mut self, reader: &mut dyn Read) -> Result<(), RomError> {
        let mut rom = Vec::new();
        reader.read_to_end(&mut rom)?;
        self.load_rom(&rom)
    }

    /// Returns the FrameBuffer if it changed since it was last taken
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    /// The current FrameBuffer regardless of whether it changed
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Whether the sound timer is running
    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Advances the CPU by a single cycle
    /// - fetches the opcode at the pc and moves the pc past it
    /// - copies the keypad snapshot into the state
    /// - decodes and executes the opcode
    ///
    /// Faults are logged and returned; the machine can keep stepping after one.
    pub fn step(&mut self, keys: &Keypad) -> Result<(), Fault> {
        self.cycle(keys).inspect_err(|fault| warn!("{}", fault))
    }

    fn cycle(&mut self, keys: &Keypad) -> Result<(), Fault> {
        let op = self.get_op()?;
        self.state.pc += 0x2;
        self.state.keys = *keys;
        instruction::execute(op, &mut self.state)
    }

    /// Runs a frame's worth of cycles then decrements the timers once
    ///
    /// # Arguments
    /// * `keys` the keypad snapshot for this frame
    /// * `cycles` how many instructions to execute
    /// * `policy` whether a fault ends the frame early
    pub fn run_frame(
        &mut self,
        keys: &Keypad,
        cycles: u32,
        policy: FaultPolicy,
    ) -> Result<(), Fault> {
        for _ in 0..cycles {
            if let Err(fault) = self.step(keys) {
                if policy == FaultPolicy::Halt {
                    return Err(fault);
                }
            }
        }
        self.tick_timers();
        Ok(())
    }

    /// Decrements both timers towards zero; called once per frame
    pub fn tick_timers(&mut self) {
        self.state.delay_timer = self.state.delay_timer.saturating_sub(1);
        self.state.sound_timer = self.state.sound_timer.saturating_sub(1);
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn get_op(&self) -> Result<u16, Fault> {
        let pc = self.state.pc as usize;
        if pc + 1 >= MEMORY_SIZE {
            return Err(Fault::ProgramCounterOutOfBounds { pc: self.state.pc });
        }
        let left = u16::from(self.state.memory[pc]);
        let right = u16::from(self.state.memory[pc + 1]);
        Ok(left << 8 | right)
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}

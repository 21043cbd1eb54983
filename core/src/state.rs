use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FLAG_REGISTER, FONT_START, KEY_COUNT, MEMORY_SIZE, PIXEL_OFF,
    PROGRAM_START, SPRITE_SHEET, STACK_SIZE,
};

/// The internal state of a Chip-8 machine
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry/borrow/collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Pointer
/// - (sp) the number of return addresses on the stack
///
/// Timers
/// - 2 8-bit timers (delay & sound)
/// - both are decremented once per frame by whoever drives the machine
///
/// ## Memory
/// - 16 entry stack of return addresses
/// - 4096 bytes of addressable memory
///     - 0x000..0x050 holds the sprite sheet
///     - 0x200.. holds the loaded ROM
/// - 32x64 frame buffer
///
/// ## Input
/// - snapshot of the 16 keys, refreshed before every instruction
#[derive(Clone, Debug)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: usize,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_SIZE],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub keys: Keypad,
    pub(crate) rng: StdRng,
}

impl State {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A state whose random number generator is seeded, making `Cxkk` reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut memory = [0; MEMORY_SIZE];
        let font = FONT_START as usize;
        memory[font..font + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_SIZE],
            memory,
            frame_buffer: [[PIXEL_OFF; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            draw_flag: false,
            keys: [false; KEY_COUNT],
            rng,
        }
    }

    /// Overwrite VF; it never accumulates
    pub fn set_flag(&mut self, flag: bool) {
        self.v[FLAG_REGISTER] = u8::from(flag);
    }

    pub fn flag(&self) -> u8 {
        self.v[FLAG_REGISTER]
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// The FrameBuffer is indexed as [y][x]
pub type FrameBuffer = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// Pressed status of keys 0..F
pub type Keypad = [bool; KEY_COUNT];

/// Display dimensions in pixels
pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Pixels are either fully on or fully off
pub const PIXEL_ON: u8 = 0xFF;
pub const PIXEL_OFF: u8 = 0x00;

/// Total addressable memory in bytes
pub const MEMORY_SIZE: usize = 4096;

/// ROMs are loaded here and execution starts here
pub const PROGRAM_START: u16 = 0x200;

/// Maximum number of nested subroutine calls
pub const STACK_SIZE: usize = 16;

/// Number of keys on the hexadecimal keypad
pub const KEY_COUNT: usize = 16;

/// VF doubles as the carry, borrow and collision flag
pub const FLAG_REGISTER: usize = 0xF;

/// Default number of instructions executed per second
pub const CLOCK_SPEED: u32 = 500;

/// Timers are decremented once per frame at this rate
pub const FRAME_RATE: u32 = 60;

/// Address of the first glyph in the built-in font
pub const FONT_START: u16 = 0x000;

/// Each glyph is 8 pixels wide and 5 rows tall
pub const FONT_GLYPH_SIZE: u16 = 5;

/// # Sprite sheet
/// Glyphs for the hexadecimal digits 0..F, one byte per row.
///
/// ```text
/// 0xF0  ****
/// 0x90  *  *
/// 0x90  *  *
/// 0x90  *  *
/// 0xF0  ****
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

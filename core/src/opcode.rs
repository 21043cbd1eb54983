/// # Opcodes
///
/// Chip-8 opcodes are 16 bits each, stored big-endian. They split into:
/// - `(n, _, _, _)` the family; selects the broad category of instruction
/// - `(_, n, n, n)` the residual; carries the operands
///
/// Within the residual:
/// - `(_, n, n, n)` a 12-bit address
/// - `(_, _, n, n)` an immediate byte that is assigned to and/or compared with Vx
/// - `(_, n, _, _)` the register Vx or a range of registers V0..=Vx
/// - `(_, _, n, _)` the register Vy
/// - `(_, _, _, n)` a sub-operation selector or a sprite height
///
/// The field accessors mask their own bits so they give the same answer for a
/// whole opcode and for its residual alone.
pub trait Opcode {
    /// Returns the Opcode's component nibbles.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// The Opcode's most significant nibble.
    /// `[f___]`
    fn family(&self) -> u8;

    /// The Opcode without its most significant nibble.
    /// `[_rrr]`
    fn residual(&self) -> u16;

    /// The Opcode's second nibble.
    /// `[_x__]`
    fn x(&self) -> usize;

    /// The Opcode's third nibble.
    /// `[__y_]`
    fn y(&self) -> usize;

    /// The Opcode's fourth nibble.
    /// `[___n]`
    fn n(&self) -> u8;

    /// The Opcode's least significant byte.
    /// `[__kk]`
    fn kk(&self) -> u8;

    /// The Opcode's 12-bit address.
    /// `[_adr]`
    fn addr(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (self.family(), self.x() as u8, self.y() as u8, self.n())
    }

    fn family(&self) -> u8 {
        ((self & 0xF000) >> 12) as u8
    }

    fn residual(&self) -> u16 {
        self & 0x0FFF
    }

    fn x(&self) -> usize {
        ((self & 0x0F00) >> 8) as usize
    }

    fn y(&self) -> usize {
        ((self & 0x00F0) >> 4) as usize
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn kk(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn addr(&self) -> u16 {
        self & 0x0FFF
    }
}

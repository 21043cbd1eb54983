use std::io;

use thiserror::Error;

/// Something an instruction could not do.
///
/// Faults never leave a partial write behind; the only state change is the
/// program counter advance performed by the fetch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Fault {
    #[error("stack overflow calling from {pc:#05X}")]
    StackOverflow { pc: u16 },
    #[error("stack underflow returning from {pc:#05X}")]
    StackUnderflow { pc: u16 },
    #[error("unknown instruction {op:04X} at {pc:#05X}")]
    UnknownInstruction { op: u16, pc: u16 },
    #[error("memory access at {addr:#06X} out of bounds at {pc:#05X}")]
    MemoryOutOfBounds { addr: usize, pc: u16 },
    #[error("program counter {pc:#06X} is past the end of memory")]
    ProgramCounterOutOfBounds { pc: u16 },
}

#[derive(Debug, Error)]
pub enum RomError {
    #[error("ROM is empty")]
    Empty,
    #[error("ROM is {size} bytes but only {max} fit in memory")]
    TooLarge { size: usize, max: usize },
    #[error("unable to read ROM")]
    Io(#[from] io::Error),
}

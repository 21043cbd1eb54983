pub use chip8::{Chip8, FaultPolicy};
pub use constants::{CLOCK_SPEED, FRAME_RATE};
pub use error::{Fault, RomError};
pub use state::{FrameBuffer, Keypad};

mod chip8;
pub mod constants;
pub mod error;
pub mod instruction;
pub mod opcode;
mod operations;
pub mod state;

pub use chip8::{Chip8, Cycle};
pub use constants::CLOCK_SPEED;
pub use error::{Chip8Error, Result};
pub use instruction::Instruction;
pub use memory::Memory;

mod chip8;
pub mod constants;
mod error;
mod instruction;
mod memory;
mod opcode;
mod operations;
pub mod state;

use thiserror::Error;

/// Faults that end an emulation session.
///
/// None of these are recoverable from inside the core; the host has to
/// `reset` and reload a program to continue.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Chip8Error {
    #[error("unrecognized opcode {0:#06X}")]
    UnrecognizedOpcode(u16),

    #[error("memory access out of bounds at address {address:#06X}")]
    MemoryOutOfBounds { address: usize },

    #[error("program is too large ({size} bytes), max size is {max_size} bytes")]
    ProgramTooLarge { size: usize, max_size: usize },

    #[error("stack overflow: call nested deeper than the stack allows")]
    StackOverflow,

    #[error("stack underflow: return with an empty call stack")]
    StackUnderflow,

    #[error("pixel ({x}, {y}) is outside the display")]
    PixelOutOfBounds { x: usize, y: usize },

    #[error("key {key:#04X} is not on the keypad")]
    KeyOutOfRange { key: u8 },

    #[error("index register overflowed 16 bits")]
    IndexOverflow,
}

pub type Result<T> = std::result::Result<T, Chip8Error>;

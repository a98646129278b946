use log::debug;

use crate::constants::{MAX_PROGRAM_SIZE, MEMORY_SIZE, PROGRAM_START};
use crate::error::{Chip8Error, Result};

/// # Memory
/// 4096 bytes of byte-addressable memory.
///
/// - 0x000..0x200 is reserved and never touched by an implemented opcode
/// - 0x200.. holds the loaded program
///
/// Every read is bounds checked; nothing here wraps or masks addresses.
#[derive(Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            bytes: [0; MEMORY_SIZE],
        }
    }

    /// Copy a program image into memory starting at `PROGRAM_START`.
    ///
    /// Bytes past the end of `program` are left as they were, so loading a
    /// shorter image over a longer one keeps the old tail.
    ///
    /// # Arguments
    /// * `program` raw big-endian instruction words
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        if program.len() > MAX_PROGRAM_SIZE {
            return Err(Chip8Error::ProgramTooLarge {
                size: program.len(),
                max_size: MAX_PROGRAM_SIZE,
            });
        }
        let start = PROGRAM_START as usize;
        self.bytes[start..start + program.len()].copy_from_slice(program);
        debug!("loaded {} byte program at {:#05X}", program.len(), start);
        Ok(())
    }

    pub fn read_byte(&self, address: u16) -> Result<u8> {
        self.bytes
            .get(address as usize)
            .copied()
            .ok_or(Chip8Error::MemoryOutOfBounds {
                address: address as usize,
            })
    }

    /// Reads the instruction word at `address`.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    pub fn read_word(&self, address: u16) -> Result<u16> {
        let bytes = self.read_bytes(address, 2)?;
        Ok(u16::from(bytes[0]) << 8 | u16::from(bytes[1]))
    }

    /// Borrow `len` contiguous bytes starting at `address`.
    /// Fails with the first address that falls outside memory.
    /// An empty read touches no address and never fails.
    pub fn read_bytes(&self, address: u16, len: usize) -> Result<&[u8]> {
        if len == 0 {
            return Ok(&[]);
        }
        let start = address as usize;
        self.bytes
            .get(start..start + len)
            .ok_or(Chip8Error::MemoryOutOfBounds {
                address: start.max(MEMORY_SIZE),
            })
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

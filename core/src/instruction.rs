use std::fmt;

use crate::error::{Chip8Error, Result};
use crate::opcode::Opcode;

/// A decoded opcode with its operands pulled out.
///
/// Register operands are indices into V0..VF. Only the families listed here are
/// implemented; everything else fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0
    Clear,
    /// 00EE
    Return,
    /// 1nnn
    Jump(u16),
    /// 2nnn
    Call(u16),
    /// 3xkk
    SkipEqual { x: usize, kk: u8 },
    /// 4xkk
    SkipNotEqual { x: usize, kk: u8 },
    /// 6xkk
    Load { x: usize, kk: u8 },
    /// 7xkk
    Add { x: usize, kk: u8 },
    /// 8xy0
    Move { x: usize, y: usize },
    /// 9xy0
    SkipRegistersNotEqual { x: usize, y: usize },
    /// Annn
    LoadIndex(u16),
    /// Cxkk
    Random { x: usize, kk: u8 },
    /// Dxyn
    Draw { x: usize, y: usize, n: u8 },
    /// Ex9E
    SkipKeyPressed { x: usize },
    /// ExA1
    SkipKeyNotPressed { x: usize },
    /// Fx07
    LoadDelay { x: usize },
    /// Fx15
    SetDelay { x: usize },
    /// Fx1E
    AddIndex { x: usize },
}

impl Instruction {
    /// Selects the Instruction for a given opcode.
    /// Anything outside the implemented set is an error rather than a no-op.
    pub fn decode(op: u16) -> Result<Self> {
        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Instruction::Clear,
            (0x0, 0x0, 0xE, 0xE) => Instruction::Return,
            (0x1, ..) => Instruction::Jump(op.addr()),
            (0x2, ..) => Instruction::Call(op.addr()),
            (0x3, ..) => Instruction::SkipEqual {
                x: op.x(),
                kk: op.kk(),
            },
            (0x4, ..) => Instruction::SkipNotEqual {
                x: op.x(),
                kk: op.kk(),
            },
            (0x6, ..) => Instruction::Load {
                x: op.x(),
                kk: op.kk(),
            },
            (0x7, ..) => Instruction::Add {
                x: op.x(),
                kk: op.kk(),
            },
            (0x8, .., 0x0) => Instruction::Move {
                x: op.x(),
                y: op.y(),
            },
            (0x9, .., 0x0) => Instruction::SkipRegistersNotEqual {
                x: op.x(),
                y: op.y(),
            },
            (0xA, ..) => Instruction::LoadIndex(op.addr()),
            (0xC, ..) => Instruction::Random {
                x: op.x(),
                kk: op.kk(),
            },
            (0xD, ..) => Instruction::Draw {
                x: op.x(),
                y: op.y(),
                n: op.n(),
            },
            (0xE, _, 0x9, 0xE) => Instruction::SkipKeyPressed { x: op.x() },
            (0xE, _, 0xA, 0x1) => Instruction::SkipKeyNotPressed { x: op.x() },
            (0xF, _, 0x0, 0x7) => Instruction::LoadDelay { x: op.x() },
            (0xF, _, 0x1, 0x5) => Instruction::SetDelay { x: op.x() },
            (0xF, _, 0x1, 0xE) => Instruction::AddIndex { x: op.x() },
            _ => return Err(Chip8Error::UnrecognizedOpcode(op)),
        };
        Ok(instruction)
    }
}

impl TryFrom<u16> for Instruction {
    type Error = Chip8Error;

    fn try_from(op: u16) -> Result<Self> {
        Instruction::decode(op)
    }
}

/// Conventional Chip-8 assembler mnemonics, used when tracing execution
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Instruction::Clear => write!(f, "CLS"),
            Instruction::Return => write!(f, "RET"),
            Instruction::Jump(addr) => write!(f, "JP {:#05X}", addr),
            Instruction::Call(addr) => write!(f, "CALL {:#05X}", addr),
            Instruction::SkipEqual { x, kk } => write!(f, "SE V{:X}, {:#04X}", x, kk),
            Instruction::SkipNotEqual { x, kk } => write!(f, "SNE V{:X}, {:#04X}", x, kk),
            Instruction::Load { x, kk } => write!(f, "LD V{:X}, {:#04X}", x, kk),
            Instruction::Add { x, kk } => write!(f, "ADD V{:X}, {:#04X}", x, kk),
            Instruction::Move { x, y } => write!(f, "LD V{:X}, V{:X}", x, y),
            Instruction::SkipRegistersNotEqual { x, y } => write!(f, "SNE V{:X}, V{:X}", x, y),
            Instruction::LoadIndex(addr) => write!(f, "LD I, {:#05X}", addr),
            Instruction::Random { x, kk } => write!(f, "RND V{:X}, {:#04X}", x, kk),
            Instruction::Draw { x, y, n } => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            Instruction::SkipKeyPressed { x } => write!(f, "SKP V{:X}", x),
            Instruction::SkipKeyNotPressed { x } => write!(f, "SKNP V{:X}", x),
            Instruction::LoadDelay { x } => write!(f, "LD V{:X}, DT", x),
            Instruction::SetDelay { x } => write!(f, "LD DT, V{:X}", x),
            Instruction::AddIndex { x } => write!(f, "ADD I, V{:X}", x),
        }
    }
}

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::constants::KEY_COUNT;
use crate::error::{Chip8Error, Result};
use crate::instruction::Instruction;
use crate::memory::Memory;
use crate::operations::*;
use crate::state::{FrameBuffer, State};

/// What a single `step` produced besides its state changes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cycle {
    /// The sound timer ran out during this step
    pub beep: bool,
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - the `memory` programs are loaded into and fetched from
///  - the volatile `state` (registers, stack, timers, frame buffer, keys)
///  - the `rng` behind the random opcode
///
/// Supplies interfaces for:
/// - loading programs
/// - pressing and releasing keys
/// - stepping the CPU one instruction at a time
/// - inspecting its frame buffer for rendering by some display
///
/// There is no clock in here; how often `step` gets called is up to the host.
pub struct Chip8<R = StdRng> {
    memory: Memory,
    state: State,
    rng: R,
}

impl Chip8 {
    /// Creates an engine over `memory` with an entropy-seeded random source
    pub fn new(memory: Memory) -> Self {
        Chip8::with_rng(memory, StdRng::from_entropy())
    }
}

impl<R: RngCore> Chip8<R> {
    /// Creates an engine over `memory` drawing random bytes from `rng`.
    /// Pass a seeded or mock generator to make `Cxkk` deterministic.
    pub fn with_rng(memory: Memory, rng: R) -> Self {
        Chip8 {
            memory,
            state: State::new(),
            rng,
        }
    }

    /// Load a program image at 0x200
    ///
    /// This doesn't reset the CPU; call `reset` as well to start the program from scratch.
    ///
    /// # Arguments
    /// * `program` the raw bytes of a ROM
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        self.memory.load_program(program)
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Reinitialises registers, stack, timers, frame buffer and keys.
    /// Memory is left alone.
    pub fn reset(&mut self) {
        self.state = State::new();
        debug!("reset cpu state");
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Returns the FrameBuffer if the display should be redrawn, clearing the draw flag
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if std::mem::take(&mut self.state.draw_flag) {
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    /// The key states read by `Ex9E` and `ExA1`; 1 is pressed, anything else is not
    pub fn keys_mut(&mut self) -> &mut [u8; KEY_COUNT] {
        &mut self.state.pressed_keys
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the keypad value (0x0..=0xF) that was pressed
    pub fn key_press(&mut self, key: u8) -> Result<()> {
        self.set_key(key, 0x1)
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the keypad value (0x0..=0xF) that was released
    pub fn key_release(&mut self, key: u8) -> Result<()> {
        self.set_key(key, 0x0)
    }

    fn set_key(&mut self, key: u8, status: u8) -> Result<()> {
        let slot = self
            .state
            .pressed_keys
            .get_mut(key as usize)
            .ok_or(Chip8Error::KeyOutOfRange { key })?;
        *slot = status;
        Ok(())
    }

    /// Advances the CPU by a single cycle
    /// - fetches the opcode pointed at by the pc
    /// - decodes and executes it
    /// - ticks both timers
    ///
    /// A failing instruction leaves the timers untouched.
    pub fn step(&mut self) -> Result<Cycle> {
        let op = self.memory.read_word(self.state.pc)?;
        self.decode_and_execute(op)?;
        Ok(self.advance_timers())
    }

    /// Decodes a single opcode and applies it to the current state without fetching it
    pub fn decode_and_execute(&mut self, op: u16) -> Result<()> {
        let instruction = Instruction::decode(op)?;
        trace!(
            "{:04X} {:<16} v{:02X?} i{:04X} pc{:04X}",
            op,
            instruction.to_string(),
            self.state.v,
            self.state.i,
            self.state.pc
        );

        let state = &mut self.state;
        match instruction {
            Instruction::Clear => clr(state),
            Instruction::Return => rts(state)?,
            Instruction::Jump(addr) => jump(state, addr),
            Instruction::Call(addr) => call(state, addr)?,
            Instruction::SkipEqual { x, kk } => ske(state, x, kk),
            Instruction::SkipNotEqual { x, kk } => skne(state, x, kk),
            Instruction::Load { x, kk } => load(state, x, kk),
            Instruction::Add { x, kk } => add(state, x, kk),
            Instruction::Move { x, y } => mv(state, x, y),
            Instruction::SkipRegistersNotEqual { x, y } => skrne(state, x, y),
            Instruction::LoadIndex(addr) => loadi(state, addr),
            Instruction::Random { x, kk } => rand(state, &mut self.rng, x, kk),
            Instruction::Draw { x, y, n } => draw(state, &self.memory, x, y, n)?,
            Instruction::SkipKeyPressed { x } => skpr(state, x)?,
            Instruction::SkipKeyNotPressed { x } => skup(state, x)?,
            Instruction::LoadDelay { x } => moved(state, x),
            Instruction::SetDelay { x } => loadd(state, x),
            Instruction::AddIndex { x } => addi(state, x)?,
        }
        Ok(())
    }

    /// Decrements each nonzero timer once.
    /// Beeps when the sound timer goes from 1 to 0.
    fn advance_timers(&mut self) -> Cycle {
        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }

        let mut cycle = Cycle::default();
        if self.state.sound_timer > 0 {
            if self.state.sound_timer == 1 {
                info!("beep");
                cycle.beep = true;
            }
            self.state.sound_timer -= 1;
        }
        cycle
    }
}

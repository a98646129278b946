use crate::constants::{FRAME_BUFFER_SIZE, KEY_COUNT, PROGRAM_START, REGISTER_COUNT, STACK_SIZE};

/// A snapshot of the Chip-8 volatile state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry and collision flag
/// - (i) a 16-bit memory address register, never masked to 12 bits
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Pointer
/// - (sp) an 8-bit stack pointer; the next free slot in `stack`
///
/// Timers
/// - 2 8-bit timers (delay & sound), decremented once per step while nonzero
///
/// ## Display
/// - 64x32 frame buffer stored row-major, one 0/1 byte per pixel
///
/// ## Input
/// - 16 entry array of the pressed (1) / released (0) status of keys 0..F
///
/// Memory is not part of the state; it is owned separately so that `reset`
/// never touches a loaded program.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub pressed_keys: [u8; KEY_COUNT],
}

impl State {
    pub fn new() -> Self {
        State {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_SIZE],
            frame_buffer: [0; FRAME_BUFFER_SIZE],
            draw_flag: false,
            pressed_keys: [0; KEY_COUNT],
        }
    }

    /// Move on to the next instruction
    pub fn advance(&mut self) {
        self.pc = self.pc.wrapping_add(0x2);
    }

    /// Skip the next instruction when `condition` holds, otherwise just advance
    pub fn skip_if(&mut self, condition: bool) {
        let step = if condition { 0x4 } else { 0x2 };
        self.pc = self.pc.wrapping_add(step);
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// The FrameBuffer is indexed as [x + y * DISPLAY_WIDTH]
pub type FrameBuffer = [u8; FRAME_BUFFER_SIZE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_at_program() {
        let state = State::new();
        assert_eq!(state.pc, 0x200);
        assert_eq!(state.sp, 0);
        assert!(state.frame_buffer.iter().all(|&pixel| pixel == 0));
    }

    #[test]
    fn test_skip_if() {
        let mut state = State::new();
        state.skip_if(true);
        assert_eq!(state.pc, 0x204);
        state.skip_if(false);
        assert_eq!(state.pc, 0x206);
    }
}

/// Bytes of addressable memory (0x000..=0xFFF)
pub const MEMORY_SIZE: usize = 4096;

/// Address programs are loaded at and where the program counter starts
pub const PROGRAM_START: u16 = 0x200;

/// Largest program image that fits between `PROGRAM_START` and the end of memory
pub const MAX_PROGRAM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;
pub const FRAME_BUFFER_SIZE: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT;

pub const REGISTER_COUNT: usize = 16;
pub const STACK_SIZE: usize = 16;
pub const KEY_COUNT: usize = 16;

/// VF doubles as the carry and collision flag
pub const FLAG: usize = 0xF;

/// Nanoseconds per CPU cycle at the nominal 500Hz clock
pub const CLOCK_SPEED: u64 = 2_000_000;

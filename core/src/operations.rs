use rand::Rng;

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FLAG, FRAME_BUFFER_SIZE, STACK_SIZE};
use crate::error::{Chip8Error, Result};
use crate::memory::Memory;
use crate::state::State;

/// clear
pub fn clr(state: &mut State) {
    state.frame_buffer = [0; FRAME_BUFFER_SIZE];
    state.draw_flag = true;
    state.advance();
}

/// PC = STACK.pop() + 2
/// The stack holds the address of the call itself, so step past it
pub fn rts(state: &mut State) -> Result<()> {
    let sp = state.sp.checked_sub(0x1).ok_or(Chip8Error::StackUnderflow)?;
    state.sp = sp;
    state.pc = state.stack[sp as usize].wrapping_add(0x2);
    Ok(())
}

/// PC = addr
pub fn jump(state: &mut State, addr: u16) {
    state.pc = addr;
}

/// STACK.push(PC); PC = addr
pub fn call(state: &mut State, addr: u16) -> Result<()> {
    let sp = state.sp as usize;
    if sp >= STACK_SIZE {
        return Err(Chip8Error::StackOverflow);
    }
    state.stack[sp] = state.pc;
    state.sp += 0x1;
    state.pc = addr;
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn ske(state: &mut State, x: usize, kk: u8) {
    state.skip_if(state.v[x] == kk);
}

/// if Vx != kk then pc += 2
pub fn skne(state: &mut State, x: usize, kk: u8) {
    state.skip_if(state.v[x] != kk);
}

/// Vx = kk
pub fn load(state: &mut State, x: usize, kk: u8) {
    state.v[x] = kk;
    state.advance();
}

/// Vx += kk; VF = overflow
/// The flag is written last, so `7Fkk` leaves VF holding the carry rather than the sum
pub fn add(state: &mut State, x: usize, kk: u8) {
    let original = state.v[x];
    let res = original.wrapping_add(kk);
    state.v[x] = res;
    state.v[FLAG] = u8::from(original > res);
    state.advance();
}

/// Vx = Vy
pub fn mv(state: &mut State, x: usize, y: usize) {
    state.v[x] = state.v[y];
    state.advance();
}

/// if Vx != Vy then pc += 2
pub fn skrne(state: &mut State, x: usize, y: usize) {
    state.skip_if(state.v[x] != state.v[y]);
}

/// I = addr
pub fn loadi(state: &mut State, addr: u16) {
    state.i = addr;
    state.advance();
}

/// Vx = rand_byte & kk
pub fn rand<R: Rng>(state: &mut State, rng: &mut R, x: usize, kk: u8) {
    let rand_byte: u8 = rng.gen();
    state.v[x] = rand_byte & kk;
    state.advance();
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs the sprite in memory I..I+n onto the FrameBuffer at Vx, Vy without wrapping.
/// Sets VF if any lit pixel gets erased.
///
/// The sprite rows and every pixel it lights are checked up front, so a sprite that
/// runs off memory or off the display fails without touching the state.
pub fn draw(state: &mut State, memory: &Memory, x: usize, y: usize, n: u8) -> Result<()> {
    let sprite = memory.read_bytes(state.i, n as usize)?;
    let (origin_x, origin_y) = (state.v[x] as usize, state.v[y] as usize);

    let lit_pixels = move || {
        sprite.iter().enumerate().flat_map(move |(row, &byte)| {
            (0..8usize)
                .filter(move |&bit| byte & (0x80u8 >> bit) != 0)
                .map(move |bit| (origin_x + bit, origin_y + row))
        })
    };

    let off_screen = |&(px, py): &(usize, usize)| px >= DISPLAY_WIDTH || py >= DISPLAY_HEIGHT;
    if let Some((px, py)) = lit_pixels().find(off_screen) {
        return Err(Chip8Error::PixelOutOfBounds { x: px, y: py });
    }

    // Reset the carry flag (used for collision detection)
    state.v[FLAG] = 0x0;
    for (px, py) in lit_pixels() {
        let pixel = &mut state.frame_buffer[px + py * DISPLAY_WIDTH];
        if *pixel == 0x1 {
            state.v[FLAG] = 0x1;
        }
        *pixel ^= 0x1;
    }

    state.draw_flag = true;
    state.advance();
    Ok(())
}

/// Looks up the pressed status of the key named by Vx.
/// Vx above 0xF names no key and fails with `KeyOutOfRange` instead of reading as
/// released, so neither skip opcode treats a bad key value as "not pressed".
fn key_pressed(state: &State, x: usize) -> Result<bool> {
    let key = state.v[x];
    state
        .pressed_keys
        .get(key as usize)
        .map(|&status| status == 0x1)
        .ok_or(Chip8Error::KeyOutOfRange { key })
}

/// if Vx.pressed then pc += 2
/// Fails with `KeyOutOfRange` when Vx > 0xF rather than advancing by 2
pub fn skpr(state: &mut State, x: usize) -> Result<()> {
    let pressed = key_pressed(state, x)?;
    state.skip_if(pressed);
    Ok(())
}

/// if !Vx.pressed then pc += 2
/// Fails with `KeyOutOfRange` when Vx > 0xF rather than skipping
pub fn skup(state: &mut State, x: usize) -> Result<()> {
    let pressed = key_pressed(state, x)?;
    state.skip_if(!pressed);
    Ok(())
}

/// Vx = DT
pub fn moved(state: &mut State, x: usize) {
    state.v[x] = state.delay_timer;
    state.advance();
}

/// DT = Vx
pub fn loadd(state: &mut State, x: usize) {
    state.delay_timer = state.v[x];
    state.advance();
}

/// I += Vx
/// I may run past 0xFFF; only a later read through it fails
pub fn addi(state: &mut State, x: usize) -> Result<()> {
    state.i = state
        .i
        .checked_add(u16::from(state.v[x]))
        .ok_or(Chip8Error::IndexOverflow)?;
    state.advance();
    Ok(())
}

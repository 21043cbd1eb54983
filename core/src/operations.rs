use std::ops::Range;

use log::trace;
use rand::Rng;

use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_GLYPH_SIZE, FONT_START, MEMORY_SIZE, PIXEL_OFF, PIXEL_ON,
    STACK_SIZE,
};
use crate::error::Fault;
use crate::opcode::Opcode;
use crate::state::State;

// Every operation runs after the fetch has already moved the pc past the
// instruction, so "skip" is one more +2 and the instruction itself is at pc - 2.

/// Address of the instruction being executed
fn origin(state: &State) -> u16 {
    state.pc.wrapping_sub(0x2)
}

/// Bounds-checked memory range `start..start + len`
fn memory_range(state: &State, start: usize, len: usize) -> Result<Range<usize>, Fault> {
    let end = start + len;
    if end > MEMORY_SIZE {
        Err(Fault::MemoryOutOfBounds {
            addr: end - 1,
            pc: origin(state),
        })
    } else {
        Ok(start..end)
    }
}

fn skip_if(state: &mut State, condition: bool) {
    if condition {
        state.pc += 0x2;
    }
}

/// clear
pub fn clr(_op: u16, state: &mut State) -> Result<(), Fault> {
    state.frame_buffer = [[PIXEL_OFF; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    state.draw_flag = true;
    trace!("{:#05X} CLS", origin(state));
    Ok(())
}

/// PC = STACK.pop()
pub fn rts(_op: u16, state: &mut State) -> Result<(), Fault> {
    if state.sp == 0 {
        return Err(Fault::StackUnderflow { pc: origin(state) });
    }
    state.sp -= 1;
    let from = origin(state);
    state.pc = state.stack[state.sp];
    trace!("{:#05X} RET to {:#05X}", from, state.pc);
    Ok(())
}

/// PC = addr
pub fn jump(op: u16, state: &mut State) -> Result<(), Fault> {
    trace!("{:#05X} JP {:#05X}", origin(state), op.addr());
    state.pc = op.addr();
    Ok(())
}

/// STACK.push(PC); PC = addr
pub fn call(op: u16, state: &mut State) -> Result<(), Fault> {
    if state.sp == STACK_SIZE {
        return Err(Fault::StackOverflow { pc: origin(state) });
    }
    state.stack[state.sp] = state.pc;
    state.sp += 1;
    trace!("{:#05X} CALL {:#05X} (depth {})", origin(state), op.addr(), state.sp);
    state.pc = op.addr();
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn ske(op: u16, state: &mut State) -> Result<(), Fault> {
    let skip = state.v[op.x()] == op.kk();
    trace!("{:#05X} SE V{:X}, {:#04X}: skip={}", origin(state), op.x(), op.kk(), skip);
    skip_if(state, skip);
    Ok(())
}

/// if Vx != kk then pc += 2
pub fn skne(op: u16, state: &mut State) -> Result<(), Fault> {
    let skip = state.v[op.x()] != op.kk();
    trace!("{:#05X} SNE V{:X}, {:#04X}: skip={}", origin(state), op.x(), op.kk(), skip);
    skip_if(state, skip);
    Ok(())
}

/// if Vx == Vy then pc += 2
pub fn skre(op: u16, state: &mut State) -> Result<(), Fault> {
    let skip = state.v[op.x()] == state.v[op.y()];
    trace!("{:#05X} SE V{:X}, V{:X}: skip={}", origin(state), op.x(), op.y(), skip);
    skip_if(state, skip);
    Ok(())
}

/// Vx = kk
pub fn load(op: u16, state: &mut State) -> Result<(), Fault> {
    state.v[op.x()] = op.kk();
    trace!("{:#05X} LD V{:X}, {:#04X}", origin(state), op.x(), op.kk());
    Ok(())
}

/// Vx += kk
/// Add kk to Vx; allow for overflow but drop it without touching VF
pub fn add(op: u16, state: &mut State) -> Result<(), Fault> {
    state.v[op.x()] = state.v[op.x()].wrapping_add(op.kk());
    trace!("{:#05X} ADD V{:X}, {:#04X}", origin(state), op.x(), op.kk());
    Ok(())
}

/// Vx = Vy
pub fn mv(op: u16, state: &mut State) -> Result<(), Fault> {
    state.v[op.x()] = state.v[op.y()];
    trace!("{:#05X} LD V{:X}, V{:X}", origin(state), op.x(), op.y());
    Ok(())
}

/// Vx |= Vy
pub fn or(op: u16, state: &mut State) -> Result<(), Fault> {
    state.v[op.x()] |= state.v[op.y()];
    trace!("{:#05X} OR V{:X}, V{:X}", origin(state), op.x(), op.y());
    Ok(())
}

/// Vx &= Vy
pub fn and(op: u16, state: &mut State) -> Result<(), Fault> {
    state.v[op.x()] &= state.v[op.y()];
    trace!("{:#05X} AND V{:X}, V{:X}", origin(state), op.x(), op.y());
    Ok(())
}

/// Vx ^= Vy
pub fn xor(op: u16, state: &mut State) -> Result<(), Fault> {
    state.v[op.x()] ^= state.v[op.y()];
    trace!("{:#05X} XOR V{:X}, V{:X}", origin(state), op.x(), op.y());
    Ok(())
}

/// Vx += Vy; VF = overflow
pub fn addr(op: u16, state: &mut State) -> Result<(), Fault> {
    let (res, over) = state.v[op.x()].overflowing_add(state.v[op.y()]);
    state.v[op.x()] = res;
    state.set_flag(over);
    trace!("{:#05X} ADD V{:X}, V{:X}: carry={}", origin(state), op.x(), op.y(), over);
    Ok(())
}

/// Vx -= Vy; VF = !underflow
pub fn sub(op: u16, state: &mut State) -> Result<(), Fault> {
    let (res, under) = state.v[op.x()].overflowing_sub(state.v[op.y()]);
    state.v[op.x()] = res;
    state.set_flag(!under);
    trace!("{:#05X} SUB V{:X}, V{:X}: borrow={}", origin(state), op.x(), op.y(), under);
    Ok(())
}

/// Vx >>= 1; VF = lsb
pub fn shr(op: u16, state: &mut State) -> Result<(), Fault> {
    state.set_flag(state.v[op.x()] & 0x1 == 0x1);
    // With x = F the flag itself is shifted
    state.v[op.x()] >>= 1;
    trace!("{:#05X} SHR V{:X}", origin(state), op.x());
    Ok(())
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(op: u16, state: &mut State) -> Result<(), Fault> {
    let (res, under) = state.v[op.y()].overflowing_sub(state.v[op.x()]);
    state.v[op.x()] = res;
    state.set_flag(!under);
    trace!("{:#05X} SUBN V{:X}, V{:X}: borrow={}", origin(state), op.x(), op.y(), under);
    Ok(())
}

/// Vx <<= 1; VF = msb
pub fn shl(op: u16, state: &mut State) -> Result<(), Fault> {
    state.set_flag(state.v[op.x()] & 0x80 == 0x80);
    state.v[op.x()] <<= 1;
    trace!("{:#05X} SHL V{:X}", origin(state), op.x());
    Ok(())
}

/// if Vx != Vy then pc += 2
pub fn skrne(op: u16, state: &mut State) -> Result<(), Fault> {
    let skip = state.v[op.x()] != state.v[op.y()];
    trace!("{:#05X} SNE V{:X}, V{:X}: skip={}", origin(state), op.x(), op.y(), skip);
    skip_if(state, skip);
    Ok(())
}

/// I = addr
pub fn loadi(op: u16, state: &mut State) -> Result<(), Fault> {
    state.i = op.addr();
    trace!("{:#05X} LD I, {:#05X}", origin(state), op.addr());
    Ok(())
}

/// PC = V0 + addr
pub fn jumpi(op: u16, state: &mut State) -> Result<(), Fault> {
    let target = u16::from(state.v[0x0]) + op.addr();
    trace!("{:#05X} JP V0, {:#05X}: to {:#05X}", origin(state), op.addr(), target);
    state.pc = target;
    Ok(())
}

/// Vx = rand_byte & kk
pub fn rand(op: u16, state: &mut State) -> Result<(), Fault> {
    let rand_byte: u8 = state.rng.gen();
    state.v[op.x()] = rand_byte & op.kk();
    trace!("{:#05X} RND V{:X}, {:#04X}: {:#04X}", origin(state), op.x(), op.kk(), state.v[op.x()]);
    Ok(())
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs an n byte sprite from memory at I onto the FrameBuffer at Vx, Vy.
/// The origin wraps around the display but the sprite itself is clipped at the edges.
/// Sets VF if any lit pixel is erased
pub fn draw(op: u16, state: &mut State) -> Result<(), Fault> {
    let origin_x = state.v[op.x()] as usize % DISPLAY_WIDTH;
    let origin_y = state.v[op.y()] as usize % DISPLAY_HEIGHT;
    // Rows clipped off the bottom are never read
    let visible = (op.n() as usize).min(DISPLAY_HEIGHT - origin_y);
    let rows = memory_range(state, state.i as usize, visible)?;

    let mut collision = false;

    for (row, address) in rows.enumerate() {
        let y = origin_y + row;
        let sprite_byte = state.memory[address];
        for bit in 0..8 {
            let x = origin_x + bit;
            if x == DISPLAY_WIDTH {
                break;
            }
            if (sprite_byte >> (7 - bit)) & 0x1 == 0x0 {
                continue;
            }
            let pixel = &mut state.frame_buffer[y][x];
            if *pixel == PIXEL_ON {
                collision = true;
            }
            *pixel ^= PIXEL_ON;
        }
    }

    state.set_flag(collision);
    state.draw_flag = true;
    trace!(
        "{:#05X} DRW V{:X}, V{:X}, {}: at ({}, {}) collision={}",
        origin(state),
        op.x(),
        op.y(),
        op.n(),
        origin_x,
        origin_y,
        collision
    );
    Ok(())
}

/// Pressed status of the key named by Vx; keys beyond F are never pressed
fn key_pressed(op: u16, state: &State) -> bool {
    state
        .keys
        .get(state.v[op.x()] as usize)
        .copied()
        .unwrap_or(false)
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: u16, state: &mut State) -> Result<(), Fault> {
    let skip = key_pressed(op, state);
    trace!("{:#05X} SKP V{:X}: skip={}", origin(state), op.x(), skip);
    skip_if(state, skip);
    Ok(())
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: u16, state: &mut State) -> Result<(), Fault> {
    let skip = !key_pressed(op, state);
    trace!("{:#05X} SKNP V{:X}: skip={}", origin(state), op.x(), skip);
    skip_if(state, skip);
    Ok(())
}

/// Vx = DT
pub fn moved(op: u16, state: &mut State) -> Result<(), Fault> {
    state.v[op.x()] = state.delay_timer;
    trace!("{:#05X} LD V{:X}, DT", origin(state), op.x());
    Ok(())
}

/// Vx = first pressed key
/// Rewinds the pc while nothing is pressed so this instruction runs again next cycle
pub fn keyd(op: u16, state: &mut State) -> Result<(), Fault> {
    match state.keys.iter().position(|&pressed| pressed) {
        Some(key) => {
            state.v[op.x()] = key as u8;
            trace!("{:#05X} LD V{:X}, K: key {:X}", origin(state), op.x(), key);
        }
        None => {
            state.pc -= 0x2;
            trace!("{:#05X} LD V{:X}, K: waiting", state.pc, op.x());
        }
    }
    Ok(())
}

/// DT = Vx
pub fn loads(op: u16, state: &mut State) -> Result<(), Fault> {
    state.delay_timer = state.v[op.x()];
    trace!("{:#05X} LD DT, V{:X}", origin(state), op.x());
    Ok(())
}

/// ST = Vx
pub fn ld(op: u16, state: &mut State) -> Result<(), Fault> {
    state.sound_timer = state.v[op.x()];
    trace!("{:#05X} LD ST, V{:X}", origin(state), op.x());
    Ok(())
}

/// I += Vx
/// Full 16-bit arithmetic; I may point past memory afterwards
pub fn addi(op: u16, state: &mut State) -> Result<(), Fault> {
    state.i = state.i.wrapping_add(u16::from(state.v[op.x()]));
    trace!("{:#05X} ADD I, V{:X}: {:#06X}", origin(state), op.x(), state.i);
    Ok(())
}

/// I = FONT_START + Vx * 5
/// Set I to the memory address of the glyph for Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(op: u16, state: &mut State) -> Result<(), Fault> {
    state.i = FONT_START + u16::from(state.v[op.x()]) * FONT_GLYPH_SIZE;
    trace!("{:#05X} LD F, V{:X}: {:#05X}", origin(state), op.x(), state.i);
    Ok(())
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(op: u16, state: &mut State) -> Result<(), Fault> {
    let range = memory_range(state, state.i as usize, 3)?;
    let vx = state.v[op.x()];
    state.memory[range].copy_from_slice(&[vx / 100, vx / 10 % 10, vx % 10]);
    trace!("{:#05X} LD B, V{:X}: {}", origin(state), op.x(), vx);
    Ok(())
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(op: u16, state: &mut State) -> Result<(), Fault> {
    let range = memory_range(state, state.i as usize, op.x() + 1)?;
    state.memory[range].copy_from_slice(&state.v[0x0..=op.x()]);
    trace!("{:#05X} LD [I], V{:X}", origin(state), op.x());
    Ok(())
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(op: u16, state: &mut State) -> Result<(), Fault> {
    let range = memory_range(state, state.i as usize, op.x() + 1)?;
    state.v[0x0..=op.x()].copy_from_slice(&state.memory[range]);
    trace!("{:#05X} LD V{:X}, [I]", origin(state), op.x());
    Ok(())
}

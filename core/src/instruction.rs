use crate::error::Fault;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// Every instruction handler takes the opcode's residual and mutates the state in place
pub type Operation = fn(op: u16, state: &mut State) -> Result<(), Fault>;

/// # Families
/// The most significant nibble of an opcode.
///
/// Twelve families map straight onto a single operation; `System`, `Arithmetic`,
/// `Key` and `Misc` pick their operation from the residual.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Family {
    System,
    Jump,
    Call,
    SkipEqual,
    SkipNotEqual,
    SkipRegistersEqual,
    Load,
    Add,
    Arithmetic,
    SkipRegistersNotEqual,
    LoadIndex,
    JumpOffset,
    Random,
    Draw,
    Key,
    Misc,
}

impl From<u16> for Family {
    fn from(op: u16) -> Self {
        match op.family() {
            0x0 => Family::System,
            0x1 => Family::Jump,
            0x2 => Family::Call,
            0x3 => Family::SkipEqual,
            0x4 => Family::SkipNotEqual,
            0x5 => Family::SkipRegistersEqual,
            0x6 => Family::Load,
            0x7 => Family::Add,
            0x8 => Family::Arithmetic,
            0x9 => Family::SkipRegistersNotEqual,
            0xA => Family::LoadIndex,
            0xB => Family::JumpOffset,
            0xC => Family::Random,
            0xD => Family::Draw,
            0xE => Family::Key,
            _ => Family::Misc,
        }
    }
}

/// `0x0rrr`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum System {
    Clear,
    Return,
}

impl System {
    fn from_residual(residual: u16) -> Option<Self> {
        match residual {
            0x0E0 => Some(System::Clear),
            0x0EE => Some(System::Return),
            _ => None,
        }
    }
}

/// `0x8xyn`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arithmetic {
    Move,
    Or,
    And,
    Xor,
    Add,
    Sub,
    ShiftRight,
    SubN,
    ShiftLeft,
}

impl Arithmetic {
    fn from_residual(residual: u16) -> Option<Self> {
        match residual.n() {
            0x0 => Some(Arithmetic::Move),
            0x1 => Some(Arithmetic::Or),
            0x2 => Some(Arithmetic::And),
            0x3 => Some(Arithmetic::Xor),
            0x4 => Some(Arithmetic::Add),
            0x5 => Some(Arithmetic::Sub),
            0x6 => Some(Arithmetic::ShiftRight),
            0x7 => Some(Arithmetic::SubN),
            0xE => Some(Arithmetic::ShiftLeft),
            _ => None,
        }
    }
}

/// `0xExkk`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    SkipPressed,
    SkipNotPressed,
}

impl Key {
    fn from_residual(residual: u16) -> Option<Self> {
        match residual.kk() {
            0x9E => Some(Key::SkipPressed),
            0xA1 => Some(Key::SkipNotPressed),
            _ => None,
        }
    }
}

/// `0xFxkk`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Misc {
    GetDelay,
    AwaitKey,
    SetDelay,
    SetSound,
    AddIndex,
    Glyph,
    Bcd,
    Store,
    Read,
}

impl Misc {
    fn from_residual(residual: u16) -> Option<Self> {
        match residual.kk() {
            0x07 => Some(Misc::GetDelay),
            0x0A => Some(Misc::AwaitKey),
            0x15 => Some(Misc::SetDelay),
            0x18 => Some(Misc::SetSound),
            0x1E => Some(Misc::AddIndex),
            0x29 => Some(Misc::Glyph),
            0x33 => Some(Misc::Bcd),
            0x55 => Some(Misc::Store),
            0x65 => Some(Misc::Read),
            _ => None,
        }
    }
}

/// Splits an opcode into its family and residual. Total over every `u16`.
pub fn decode(op: u16) -> (Family, u16) {
    (Family::from(op), op.residual())
}

/// Selects the correct Operation for a given Opcode
///
/// Returns `None` when a branching family doesn't recognise the residual.
pub fn from_op(op: u16) -> Option<Operation> {
    let (family, residual) = decode(op);
    let operation: Operation = match family {
        Family::System => match System::from_residual(residual)? {
            System::Clear => clr,
            System::Return => rts,
        },
        Family::Jump => jump,
        Family::Call => call,
        Family::SkipEqual => ske,
        Family::SkipNotEqual => skne,
        Family::SkipRegistersEqual => skre,
        Family::Load => load,
        Family::Add => add,
        Family::Arithmetic => match Arithmetic::from_residual(residual)? {
            Arithmetic::Move => mv,
            Arithmetic::Or => or,
            Arithmetic::And => and,
            Arithmetic::Xor => xor,
            Arithmetic::Add => addr,
            Arithmetic::Sub => sub,
            Arithmetic::ShiftRight => shr,
            Arithmetic::SubN => subn,
            Arithmetic::ShiftLeft => shl,
        },
        Family::SkipRegistersNotEqual => skrne,
        Family::LoadIndex => loadi,
        Family::JumpOffset => jumpi,
        Family::Random => rand,
        Family::Draw => draw,
        Family::Key => match Key::from_residual(residual)? {
            Key::SkipPressed => skpr,
            Key::SkipNotPressed => skup,
        },
        Family::Misc => match Misc::from_residual(residual)? {
            Misc::GetDelay => moved,
            Misc::AwaitKey => keyd,
            Misc::SetDelay => loads,
            Misc::SetSound => ld,
            Misc::AddIndex => addi,
            Misc::Glyph => ldspr,
            Misc::Bcd => bcd,
            Misc::Store => stor,
            Misc::Read => read,
        },
    };
    Some(operation)
}

/// Runs a single already-fetched opcode against the state.
///
/// The program counter must already point past the opcode.
pub fn execute(op: u16, state: &mut State) -> Result<(), Fault> {
    match from_op(op) {
        Some(operation) => operation(op.residual(), state),
        None => Err(Fault::UnknownInstruction {
            op,
            pc: state.pc.wrapping_sub(0x2),
        }),
    }
}

#[cfg(test)]
mod test_instruction {
    use super::*;
    use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, PIXEL_OFF, PIXEL_ON};
    use crate::state::State;

    const ON: u8 = PIXEL_ON;
    const OFF: u8 = PIXEL_OFF;

    /// A fresh state positioned as if `op` had just been fetched from 0x200
    fn fetched() -> State {
        let mut state = State::with_seed(0);
        state.pc = 0x202;
        state
    }

    fn run(op: u16, state: &mut State) {
        execute(op, state).unwrap();
    }

    #[test]
    fn test_decode_splits_family_and_residual() {
        assert_eq!(decode(0xD123), (Family::Draw, 0x123));
        assert_eq!(decode(0x0000), (Family::System, 0x000));
        assert_eq!(decode(0xFFFF), (Family::Misc, 0xFFF));
    }

    #[test]
    fn test_every_family_decodes() {
        let families: Vec<Family> = (0x0..=0xFu16).map(|f| Family::from(f << 12)).collect();
        assert_eq!(families.len(), 16);
        assert_eq!(families[0x8], Family::Arithmetic);
        assert_eq!(families[0xE], Family::Key);
    }

    #[test]
    fn test_unknown_residuals_have_no_operation() {
        for op in [0x0123, 0x00E1, 0x01E0, 0x8128, 0x812F, 0xE19F, 0xF100, 0xF1FF] {
            assert!(from_op(op).is_none(), "{:04X} should not decode", op);
        }
    }

    #[test]
    fn test_unknown_instruction_only_reports() {
        let mut state = fetched();
        state.v[0x1] = 0x5;
        let before = state.clone();
        let fault = execute(0x8128, &mut state).unwrap_err();
        assert_eq!(fault, Fault::UnknownInstruction { op: 0x8128, pc: 0x200 });
        assert_eq!(state.v, before.v);
        assert_eq!(state.pc, before.pc);
    }

    #[test]
    fn test_00e0_cls() {
        let mut state = fetched();
        state.frame_buffer[0][0] = ON;
        run(0x00E0, &mut state);
        assert_eq!(state.frame_buffer[0][0], OFF);
        assert!(state.draw_flag);
        assert_eq!(state.pc, 0x202);
    }

    #[test]
    fn test_00ee_ret() {
        let mut state = fetched();
        state.sp = 0x1;
        state.stack[0x0] = 0x0ABC;
        run(0x00EE, &mut state);
        assert_eq!(state.sp, 0x0);
        assert_eq!(state.pc, 0x0ABC);
    }

    #[test]
    fn test_00ee_ret_underflows() {
        let mut state = fetched();
        let fault = execute(0x00EE, &mut state).unwrap_err();
        assert_eq!(fault, Fault::StackUnderflow { pc: 0x200 });
        assert_eq!(state.sp, 0x0);
        assert_eq!(state.pc, 0x202);
    }

    #[test]
    fn test_1nnn_jp() {
        let mut state = fetched();
        run(0x1ABC, &mut state);
        assert_eq!(state.pc, 0x0ABC);
    }

    #[test]
    fn test_2nnn_call() {
        let mut state = fetched();
        run(0x2123, &mut state);
        assert_eq!(state.sp, 0x1);
        assert_eq!(state.stack[0x0], 0x0202);
        assert_eq!(state.pc, 0x0123);
    }

    #[test]
    fn test_2nnn_call_overflows() {
        let mut state = fetched();
        state.sp = 16;
        state.stack = [0x0300; 16];
        let fault = execute(0x2123, &mut state).unwrap_err();
        assert_eq!(fault, Fault::StackOverflow { pc: 0x200 });
        assert_eq!(state.sp, 16);
        assert_eq!(state.stack, [0x0300; 16]);
        assert_eq!(state.pc, 0x202);
    }

    #[test]
    fn test_3xkk_se_skips() {
        let mut state = fetched();
        state.v[0x1] = 0x11;
        run(0x3111, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_3xkk_se_doesntskip() {
        let mut state = fetched();
        run(0x3111, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_4xkk_sne_skips() {
        let mut state = fetched();
        run(0x4111, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_4xkk_sne_doesntskip() {
        let mut state = fetched();
        state.v[0x1] = 0x11;
        run(0x4111, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_5xy0_se_skips() {
        let mut state = fetched();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x11;
        run(0x5120, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_5xy0_se_doesntskip() {
        let mut state = fetched();
        state.v[0x1] = 0x11;
        run(0x5120, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_5xyn_ignores_low_nibble() {
        let mut state = fetched();
        run(0x5127, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_6xkk_ld() {
        let mut state = fetched();
        run(0x6122, &mut state);
        assert_eq!(state.v[0x1], 0x22);
    }

    #[test]
    fn test_7xkk_add() {
        let mut state = fetched();
        state.v[0x1] = 0x1;
        run(0x7122, &mut state);
        assert_eq!(state.v[0x1], 0x23);
    }

    #[test]
    fn test_7xkk_add_wraps_without_flag() {
        let mut state = fetched();
        state.v[0x1] = 0xFF;
        state.v[0xF] = 0x7;
        run(0x7102, &mut state);
        assert_eq!(state.v[0x1], 0x01);
        assert_eq!(state.v[0xF], 0x7);
    }

    #[test]
    fn test_8xy0_ld() {
        let mut state = fetched();
        state.v[0x2] = 0x1;
        run(0x8120, &mut state);
        assert_eq!(state.v[0x1], 0x1);
    }

    #[test]
    fn test_8xy1_or() {
        let mut state = fetched();
        state.v[0x1] = 0x6;
        state.v[0x2] = 0x3;
        run(0x8121, &mut state);
        assert_eq!(state.v[0x1], 0x7);
    }

    #[test]
    fn test_8xy2_and() {
        let mut state = fetched();
        state.v[0x1] = 0x6;
        state.v[0x2] = 0x3;
        run(0x8122, &mut state);
        assert_eq!(state.v[0x1], 0x2);
    }

    #[test]
    fn test_8xy3_xor() {
        let mut state = fetched();
        state.v[0x1] = 0x6;
        state.v[0x2] = 0x3;
        run(0x8123, &mut state);
        assert_eq!(state.v[0x1], 0x5);
    }

    #[test]
    fn test_8xy4_add_nocarry() {
        let mut state = fetched();
        state.v[0x1] = 0xEE;
        state.v[0x2] = 0x11;
        run(0x8124, &mut state);
        assert_eq!(state.v[0x1], 0xFF);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy4_add_carry() {
        let mut state = fetched();
        state.v[0x1] = 0xFF;
        state.v[0x2] = 0x11;
        run(0x8124, &mut state);
        assert_eq!(state.v[0x1], 0x10);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy5_sub_noborrow() {
        let mut state = fetched();
        state.v[0x1] = 0x33;
        state.v[0x2] = 0x11;
        run(0x8125, &mut state);
        assert_eq!(state.v[0x1], 0x22);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy5_sub_equal_is_noborrow() {
        let mut state = fetched();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x11;
        run(0x8125, &mut state);
        assert_eq!(state.v[0x1], 0x00);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy5_sub_borrow() {
        let mut state = fetched();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x12;
        run(0x8125, &mut state);
        assert_eq!(state.v[0x1], 0xFF);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy6_shr_lsb() {
        let mut state = fetched();
        state.v[0x1] = 0x5;
        run(0x8106, &mut state);
        assert_eq!(state.v[0x1], 0x2);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy6_shr_nolsb() {
        let mut state = fetched();
        state.v[0x1] = 0x4;
        run(0x8106, &mut state);
        assert_eq!(state.v[0x1], 0x2);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy7_subn_noborrow() {
        let mut state = fetched();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x33;
        run(0x8127, &mut state);
        assert_eq!(state.v[0x1], 0x22);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy7_subn_borrow() {
        let mut state = fetched();
        state.v[0x1] = 0x12;
        state.v[0x2] = 0x11;
        run(0x8127, &mut state);
        assert_eq!(state.v[0x1], 0xFF);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xye_shl_msb() {
        let mut state = fetched();
        state.v[0x1] = 0xFF;
        run(0x810E, &mut state);
        // 0xFF << 1 = 0x01FE
        assert_eq!(state.v[0x1], 0xFE);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xye_shl_nomsb() {
        let mut state = fetched();
        state.v[0x1] = 0x4;
        run(0x810E, &mut state);
        assert_eq!(state.v[0x1], 0x8);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy6_shr_vf_operand() {
        let mut state = fetched();
        state.v[0xF] = 0x03;
        run(0x8F06, &mut state);
        // the flag (1) is written first and then shifted
        assert_eq!(state.v[0xF], 0x00);
    }

    #[test]
    fn test_8xye_shl_vf_operand() {
        let mut state = fetched();
        state.v[0xF] = 0x81;
        run(0x8F0E, &mut state);
        assert_eq!(state.v[0xF], 0x02);
    }

    #[test]
    fn test_8xy4_flag_wins_when_x_is_vf() {
        let mut state = fetched();
        state.v[0xF] = 0xFF;
        state.v[0x1] = 0x02;
        run(0x8F14, &mut state);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_9xy0_sne_skips() {
        let mut state = fetched();
        state.v[0x1] = 0x11;
        run(0x9120, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_9xy0_sne_doesntskip() {
        let mut state = fetched();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x11;
        run(0x9120, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_annn_ld() {
        let mut state = fetched();
        run(0xAABC, &mut state);
        assert_eq!(state.i, 0xABC);
    }

    #[test]
    fn test_bnnn_jp() {
        let mut state = fetched();
        state.v[0x0] = 0x2;
        run(0xBABC, &mut state);
        assert_eq!(state.pc, 0xABE);
    }

    #[test]
    fn test_cxkk_rnd_masks() {
        let mut state = fetched();
        for _ in 0..32 {
            run(0xC10F, &mut state);
            assert_eq!(state.v[0x1] & 0xF0, 0x0);
        }
        run(0xC100, &mut state);
        assert_eq!(state.v[0x1], 0x0);
    }

    #[test]
    fn test_cxkk_rnd_is_seeded() {
        let mut a = fetched();
        let mut b = fetched();
        for _ in 0..8 {
            run(0xC1FF, &mut a);
            run(0xC1FF, &mut b);
            assert_eq!(a.v[0x1], b.v[0x1]);
        }
    }

    #[test]
    fn test_dxyn_drw_draws() {
        let mut state = fetched();
        state.v[0x0] = 0x1;
        // Draw the 0x0 glyph with a 1x 1y offset
        run(0xD005, &mut state);
        let mut expected = [[OFF; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        expected[1][1..5].copy_from_slice(&[ON, ON, ON, ON]);
        expected[2][1..5].copy_from_slice(&[ON, OFF, OFF, ON]);
        expected[3][1..5].copy_from_slice(&[ON, OFF, OFF, ON]);
        expected[4][1..5].copy_from_slice(&[ON, OFF, OFF, ON]);
        expected[5][1..5].copy_from_slice(&[ON, ON, ON, ON]);
        assert!(state
            .frame_buffer
            .iter()
            .zip(expected.iter())
            .all(|(a, b)| a[..] == b[..]));
        assert_eq!(state.v[0xF], 0x0);
        assert!(state.draw_flag);
    }

    #[test]
    fn test_dxyn_drw_collides() {
        let mut state = fetched();
        state.frame_buffer[0][0] = ON;
        run(0xD001, &mut state);
        assert_eq!(state.v[0xF], 0x1);
        assert_eq!(state.frame_buffer[0][0], OFF);
    }

    #[test]
    fn test_dxyn_drw_xors() {
        let mut state = fetched();
        // 0 1 0 1 -> Set
        state.frame_buffer[0][2..6].copy_from_slice(&[OFF, ON, OFF, ON]);
        state.v[0x0] = 0x2;
        state.v[0x1] = 0x0;
        // 1 1 1 1 -> Draw xor
        run(0xD011, &mut state);
        assert_eq!(state.frame_buffer[0][2..6], [ON, OFF, ON, OFF]);
    }

    #[test]
    fn test_dxyn_drw_wraps_origin() {
        let mut state = fetched();
        // 0x41 % 64 = 1, 0x22 % 32 = 2
        state.v[0x0] = 0x41;
        state.v[0x1] = 0x22;
        run(0xD011, &mut state);
        assert_eq!(state.frame_buffer[2][1..5], [ON, ON, ON, ON]);
    }

    #[test]
    fn test_dxyn_drw_clips_right_edge() {
        let mut state = fetched();
        state.v[0x0] = 62;
        run(0xD011, &mut state);
        assert_eq!(state.frame_buffer[0][62..], [ON, ON]);
        // nothing wraps around to the left
        assert_eq!(state.frame_buffer[0][0..2], [OFF, OFF]);
    }

    #[test]
    fn test_dxyn_drw_clips_bottom_edge() {
        let mut state = fetched();
        state.v[0x1] = 30;
        run(0xD015, &mut state);
        assert_eq!(state.frame_buffer[30][0..4], [ON, ON, ON, ON]);
        assert_eq!(state.frame_buffer[31][0..4], [ON, OFF, OFF, ON]);
        assert!(state.frame_buffer[0..30]
            .iter()
            .all(|row| row.iter().all(|&p| p == OFF)));
    }

    #[test]
    fn test_dxyn_drw_reads_only_visible_rows() {
        let mut state = fetched();
        state.i = 0xFFC;
        state.memory[0xFFC] = 0x80;
        state.v[0x1] = 31;
        run(0xD015, &mut state);
        assert_eq!(state.frame_buffer[31][0], ON);
        assert_eq!(state.v[0xF], 0x0);
        assert!(state.draw_flag);
    }

    #[test]
    fn test_dxyn_drw_out_of_memory_faults() {
        let mut state = fetched();
        state.i = 0xFFE;
        let fault = execute(0xD005, &mut state).unwrap_err();
        assert_eq!(fault, Fault::MemoryOutOfBounds { addr: 0x1002, pc: 0x200 });
        assert!(!state.draw_flag);
    }

    #[test]
    fn test_ex9e_skp_skips() {
        let mut state = fetched();
        state.keys[0xE] = true;
        state.v[0x1] = 0xE;
        run(0xE19E, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_ex9e_skp_doesntskip() {
        let mut state = fetched();
        run(0xE19E, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_ex9e_skp_ignores_keys_past_f() {
        let mut state = fetched();
        state.keys = [true; 16];
        state.v[0x1] = 0x10;
        run(0xE19E, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_exa1_sknp_skips() {
        let mut state = fetched();
        run(0xE1A1, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_exa1_sknp_doesntskip() {
        let mut state = fetched();
        state.keys[0xE] = true;
        state.v[0x1] = 0xE;
        run(0xE1A1, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_fx07_ld() {
        let mut state = fetched();
        state.delay_timer = 0xF;
        run(0xF107, &mut state);
        assert_eq!(state.v[0x1], 0xF);
    }

    #[test]
    fn test_fx0a_ld_waits_for_key() {
        let mut state = fetched();
        run(0xF10A, &mut state);
        assert_eq!(state.pc, 0x0200);
        assert_eq!(state.v[0x1], 0x0);
    }

    #[test]
    fn test_fx0a_ld_takes_lowest_key() {
        let mut state = fetched();
        state.keys[0x9] = true;
        state.keys[0x3] = true;
        run(0xF10A, &mut state);
        assert_eq!(state.pc, 0x0202);
        assert_eq!(state.v[0x1], 0x3);
    }

    #[test]
    fn test_fx15_ld() {
        let mut state = fetched();
        state.v[0x1] = 0xF;
        run(0xF115, &mut state);
        assert_eq!(state.delay_timer, 0xF);
    }

    #[test]
    fn test_fx18_ld() {
        let mut state = fetched();
        state.v[0x1] = 0xF;
        run(0xF118, &mut state);
        assert_eq!(state.sound_timer, 0xF);
    }

    #[test]
    fn test_fx1e_add() {
        let mut state = fetched();
        state.i = 0x1;
        state.v[0x1] = 0x1;
        run(0xF11E, &mut state);
        assert_eq!(state.i, 0x2);
    }

    #[test]
    fn test_fx1e_add_is_not_masked() {
        let mut state = fetched();
        state.i = 0x0FFF;
        state.v[0x1] = 0x2;
        run(0xF11E, &mut state);
        assert_eq!(state.i, 0x1001);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_fx29_ld() {
        let mut state = fetched();
        state.v[0x1] = 0x2;
        run(0xF129, &mut state);
        assert_eq!(state.i, 0xA);
    }

    #[test]
    fn test_fx29_ld_glyph_a() {
        let mut state = fetched();
        state.v[0x1] = 0xA;
        run(0xF129, &mut state);
        assert_eq!(state.i, 50);
        assert_eq!(state.memory[50..55], [0xF0, 0x90, 0xF0, 0x90, 0x90]);
    }

    #[test]
    fn test_fx33_ld() {
        let mut state = fetched();
        // 0x7B -> 123
        state.v[0x1] = 0x7B;
        state.i = 0x300;
        run(0xF133, &mut state);
        assert_eq!(state.memory[0x300..0x303], [0x1, 0x2, 0x3]);
    }

    #[test]
    fn test_fx33_ld_out_of_memory_faults() {
        let mut state = fetched();
        state.v[0x1] = 0xFF;
        state.i = 0xFFE;
        let fault = execute(0xF133, &mut state).unwrap_err();
        assert_eq!(fault, Fault::MemoryOutOfBounds { addr: 0x1000, pc: 0x200 });
        assert_eq!(state.memory[0xFFE..], [0x0, 0x0]);
    }

    #[test]
    fn test_fx55_ld() {
        let mut state = fetched();
        state.i = 0x300;
        state.v[0x0..0x5].copy_from_slice(&[0x1, 0x2, 0x3, 0x4, 0x5]);
        run(0xF455, &mut state);
        assert_eq!(state.memory[0x300..0x306], [0x1, 0x2, 0x3, 0x4, 0x5, 0x0]);
        assert_eq!(state.i, 0x300);
    }

    #[test]
    fn test_fx65_ld() {
        let mut state = fetched();
        state.i = 0x300;
        state.memory[0x300..0x306].copy_from_slice(&[0x1, 0x2, 0x3, 0x4, 0x5, 0x6]);
        run(0xF465, &mut state);
        assert_eq!(state.v[0x0..0x6], [0x1, 0x2, 0x3, 0x4, 0x5, 0x0]);
        assert_eq!(state.i, 0x300);
    }

    #[test]
    fn test_fx65_ld_out_of_memory_faults() {
        let mut state = fetched();
        state.i = 0xFFF;
        let fault = execute(0xF165, &mut state).unwrap_err();
        assert_eq!(fault, Fault::MemoryOutOfBounds { addr: 0x1000, pc: 0x200 });
        assert_eq!(state.v, [0x0; 16]);
    }
}

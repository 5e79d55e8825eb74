//! Operand widths.

use xdis_core::bytes::ReadBytes;

use crate::{
    decode::Inner,
    insn::{prefix, CpuMode},
    opcode::{FixedReg, Param, Size},
    operand::{usage, Operand, RegClass},
};

/// Width in bytes of a register of `class`.
pub(crate) fn reg_width(class: RegClass, cpu_mode: CpuMode) -> u8 {
    match class {
        RegClass::Gen8 => 1,
        RegClass::Gen16 | RegClass::Seg => 2,
        RegClass::Gen32 => 4,
        RegClass::Gen64 | RegClass::Mmx => 8,
        RegClass::Cr | RegClass::Dbg | RegClass::Test => cpu_mode.bytes().max(4),
        RegClass::Fp => 10,
        RegClass::Xmm => 16,
        RegClass::Ymm => 32,
    }
}

fn imm_width(op: &Operand) -> Option<u8> {
    let flags = op.usage;
    Some(if flags.any(usage::IMM8) {
        1
    } else if flags.any(usage::IMM16) {
        2
    } else if flags.any(usage::IMM32 | usage::IMM_FAR16) {
        4
    } else if flags.any(usage::IMM_FAR32) {
        6
    } else if flags.any(usage::IMM64) {
        8
    } else {
        return None;
    })
}

impl<R: ReadBytes + ?Sized> Inner<'_, R> {
    /// Width in bytes of the value accessed by operand `slot`.
    pub(crate) fn operand_size(&self, slot: usize) -> u8 {
        let op = &self.operands[slot];
        if let Some(reg) = op.reg() {
            return reg_width(reg.class(), self.cpu_mode);
        }
        if let Some(width) = imm_width(op) {
            return width;
        }
        match op.param {
            Param::None => 0,
            Param::Reg(FixedReg::Gen(_)) => self.op_mode.bytes(),
            Param::Reg(FixedReg::Gen16(_) | FixedReg::Seg(_)) => 2,
            Param::Reg(FixedReg::Gen8(_)) => 1,
            Param::Reg(FixedReg::St(_)) => 10,
            Param::Op(_, size) => self.size_code_width(size),
        }
    }

    /// Width in bytes selected by a size code in the current modes.
    pub(crate) fn size_code_width(&self, size: Size) -> u8 {
        let op16 = self.op_mode == CpuMode::Bits16;
        let wide = self.prefixes.any(prefix::VEX) && self.vex.l;
        match size {
            Size::None => 0,
            Size::A => {
                if op16 {
                    4
                } else {
                    8
                }
            }
            Size::B => 1,
            Size::W => 2,
            Size::D | Size::Ss => 4,
            Size::Q | Size::Sd | Size::Pi => 8,
            Size::Dq => 16,
            Size::Qq => 32,
            Size::T => 10,
            Size::P => match self.op_mode {
                CpuMode::Bits16 => 4,
                CpuMode::Bits32 => 6,
                CpuMode::Bits64 => 10,
            },
            Size::S => {
                if self.cpu_mode == CpuMode::Bits64 {
                    10
                } else {
                    6
                }
            }
            Size::Pd | Size::Ps | Size::X => {
                if wide {
                    32
                } else {
                    16
                }
            }
            Size::V => self.op_mode.bytes(),
            Size::Y => {
                if self.op_mode == CpuMode::Bits64 {
                    8
                } else {
                    4
                }
            }
            Size::Z => {
                if op16 {
                    2
                } else {
                    4
                }
            }
        }
    }
}

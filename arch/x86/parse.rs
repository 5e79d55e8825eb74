//! Operand parsers, evaluated either in full or for the length only.

use xdis_core::{bytes::ReadBytes, utils::sign_extend};

use crate::{
    decode::Inner,
    insn::{prefix, rex, CpuMode},
    opcode::{optype, FixedReg, Method, Param, Parse},
    operand::{usage, RegClass},
};

const SI: u8 = 6;
const DI: u8 = 7;

impl<R: ReadBytes + ?Sized> Inner<'_, R> {
    /// Runs `parse` for operand `slot`, materializing the operand.
    pub(crate) fn eval_full(&mut self, parse: Parse, off: usize, slot: usize) -> usize {
        match parse {
            Parse::Nop => off,
            Parse::ModRm => self.parse_modrm(off, slot),
            Parse::UseModRm => {
                self.use_modrm(slot);
                off
            }
            // only consumes the ModRM byte
            Parse::ModFence | Parse::InvOpModRm => off + 1,
            Parse::ImmByte => self.imm_byte(off, slot),
            Parse::ImmByteSx => self.imm_byte_sx(off, slot),
            Parse::ImmBRel => self.imm_brel(off, slot),
            Parse::ImmUshort => {
                let value = self.read_u16(off);
                self.set_imm(slot, usage::IMM16, value as u64);
                off + 2
            }
            Parse::ImmV => self.imm_v(off, slot),
            Parse::ImmVRel => self.imm_vrel(off, slot),
            Parse::ImmZ => self.imm_z(off, slot),
            Parse::ImmUlong => {
                let value = self.read_u32(off);
                self.set_imm(slot, usage::IMM32, value as u64);
                off + 4
            }
            Parse::ImmQword => {
                let value = self.read_u64(off);
                self.set_imm(slot, usage::IMM64, value);
                off + 8
            }
            Parse::ImmAddr => self.imm_addr(off, slot),
            Parse::ImmAddrF => self.imm_addr_far(off, slot),
            Parse::FixedReg => {
                self.fixed_reg(slot);
                off
            }
            Parse::Xb | Parse::Xv => {
                self.string_operand(slot, usage::POINTER_DS_BASED, SI);
                off
            }
            Parse::Yb | Parse::Yv => {
                self.string_operand(slot, usage::POINTER_ES_BASED, DI);
                off
            }
            Parse::VexDest => {
                self.vex_dest(slot);
                off
            }
            Parse::TwoByteEsc => self.two_byte_esc(off),
            Parse::ThreeByteEsc4 => self.three_byte_esc4(off),
            Parse::ThreeByteEsc5 => self.three_byte_esc5(off),
            Parse::EscFp => self.esc_fp(off),
            Parse::NopPause => self.nop_pause(off),
            Parse::Amd3DNow => self.amd_3dnow(off),
            Parse::Vex2b => self.vex2b(off),
            Parse::Vex3b => self.vex3b(off),
            Parse::Grp1
            | Parse::ShiftGrp2
            | Parse::Grp3
            | Parse::Grp4
            | Parse::Grp5
            | Parse::Grp6
            | Parse::Grp7
            | Parse::Grp8
            | Parse::Grp9
            | Parse::Grp10
            | Parse::Grp12
            | Parse::Grp13
            | Parse::Grp14
            | Parse::Grp15
            | Parse::Grp16
            | Parse::Grp17 => self.group(parse, off),
        }
    }

    /// Runs `parse` for operand `slot`, only advancing past its bytes.
    pub(crate) fn eval_size(&mut self, parse: Parse, off: usize, slot: usize) -> usize {
        let op16 = self.op_mode == CpuMode::Bits16;
        match parse {
            Parse::ModRm => self.parse_modrm_size(off, slot),
            Parse::UseModRm => {
                self.use_modrm_size(slot);
                off
            }
            Parse::ImmByte | Parse::ImmByteSx | Parse::ImmBRel => off + 1,
            Parse::ImmUshort => off + 2,
            Parse::ImmV => off + self.op_mode.bytes() as usize,
            Parse::ImmVRel | Parse::ImmZ => off + if op16 { 2 } else { 4 },
            Parse::ImmUlong => off + 4,
            Parse::ImmQword => off + 8,
            Parse::ImmAddr => off + self.imm_addr_len(),
            Parse::ImmAddrF => off + if self.op_mode == CpuMode::Bits32 { 6 } else { 4 },
            _ => self.eval_full(parse, off, slot),
        }
    }

    fn set_imm(&mut self, slot: usize, bits: u32, value: u64) {
        let op = &mut self.operands[slot];
        op.usage.set(bits);
        op.imm = value;
    }

    fn imm_byte(&mut self, off: usize, slot: usize) -> usize {
        let mut byte = self.read_u8(off);
        if self.operands[slot].param.method() == Some(Method::L) {
            // the top bit is ignored outside of 64-bit mode
            if self.cpu_mode == CpuMode::Bits32 {
                byte &= 0x7f;
            }
            let class = if self.vex.l {
                RegClass::Ymm
            } else {
                RegClass::Xmm
            };
            self.operands[slot].set_reg(class, byte >> 4);
        } else {
            self.set_imm(slot, usage::IMM8, byte as u64);
        }
        off + 1
    }

    fn imm_byte_sx(&mut self, off: usize, slot: usize) -> usize {
        let value = sign_extend(self.read_u8(off) as u64, 8);
        let (bits, value) = match self.op_mode {
            CpuMode::Bits16 => (usage::IMM16, value & 0xffff),
            CpuMode::Bits32 => (usage::IMM32, value & 0xffff_ffff),
            CpuMode::Bits64 => (usage::IMM64, value),
        };
        self.set_imm(slot, bits | usage::IMM_SX8, value);
        off + 1
    }

    fn imm_brel(&mut self, off: usize, slot: usize) -> usize {
        let value = sign_extend(self.read_u8(off) as u64, 8);
        self.set_imm(slot, usage::IMM8 | usage::IMM_REL, value);
        off + 1
    }

    fn imm_v(&mut self, off: usize, slot: usize) -> usize {
        match self.op_mode {
            CpuMode::Bits16 => {
                let value = self.read_u16(off);
                self.set_imm(slot, usage::IMM16, value as u64);
                off + 2
            }
            CpuMode::Bits32 => {
                let value = self.read_u32(off);
                self.set_imm(slot, usage::IMM32, value as u64);
                off + 4
            }
            CpuMode::Bits64 => {
                let value = self.read_u64(off);
                self.set_imm(slot, usage::IMM64, value);
                off + 8
            }
        }
    }

    fn imm_vrel(&mut self, off: usize, slot: usize) -> usize {
        match self.op_mode {
            CpuMode::Bits16 => {
                let value = sign_extend(self.read_u16(off) as u64, 16);
                self.set_imm(slot, usage::IMM16 | usage::IMM_REL, value);
                off + 2
            }
            CpuMode::Bits32 => {
                let value = sign_extend(self.read_u32(off) as u64, 32);
                self.set_imm(slot, usage::IMM32 | usage::IMM_REL, value);
                off + 4
            }
            CpuMode::Bits64 => {
                let value = sign_extend(self.read_u32(off) as u64, 32);
                self.set_imm(slot, usage::IMM64 | usage::IMM_REL, value);
                off + 4
            }
        }
    }

    /// Word for 16-bit operand size, otherwise a dword sign-extended in 64-bit operand size.
    fn imm_z(&mut self, off: usize, slot: usize) -> usize {
        match self.op_mode {
            CpuMode::Bits16 => {
                let value = self.read_u16(off);
                self.set_imm(slot, usage::IMM16, value as u64);
                off + 2
            }
            CpuMode::Bits32 => {
                let value = self.read_u32(off);
                self.set_imm(slot, usage::IMM32, value as u64);
                off + 4
            }
            CpuMode::Bits64 => {
                let value = sign_extend(self.read_u32(off) as u64, 32);
                self.set_imm(slot, usage::IMM64, value);
                off + 4
            }
        }
    }

    fn imm_addr_len(&self) -> usize {
        match self.addr_mode {
            CpuMode::Bits16 => 2,
            CpuMode::Bits32 => 4,
            CpuMode::Bits64 => 8,
        }
    }

    /// Absolute memory offset (`moffs`) sized by the address mode.
    fn imm_addr(&mut self, off: usize, slot: usize) -> usize {
        match self.addr_mode {
            CpuMode::Bits16 => {
                let value = self.read_u16(off);
                self.set_disp(slot, usage::DISP16, value as i64);
            }
            CpuMode::Bits32 => {
                let value = self.read_u32(off);
                self.set_disp(slot, usage::DISP32, value as i64);
            }
            CpuMode::Bits64 => {
                let value = self.read_u64(off);
                self.set_disp(slot, usage::DISP64, value as i64);
            }
        }
        off + self.imm_addr_len()
    }

    fn set_disp(&mut self, slot: usize, bits: u32, value: i64) {
        let op = &mut self.operands[slot];
        op.usage.set(bits);
        op.disp = value;
    }

    /// Direct far address `selector:offset`, the offset is sized by the operand mode.
    fn imm_addr_far(&mut self, off: usize, slot: usize) -> usize {
        if self.op_mode == CpuMode::Bits32 {
            let offset = self.read_u32(off) as u64;
            let selector = self.read_u16(off + 4) as u64;
            self.set_imm(slot, usage::IMM_FAR32, offset | selector << 32);
            off + 6
        } else {
            let value = self.read_u32(off) as u64;
            let (offset, selector) = (value & 0xffff, value >> 16);
            self.set_imm(slot, usage::IMM_FAR16, offset | selector << 32);
            off + 4
        }
    }

    fn fixed_reg(&mut self, slot: usize) {
        let fixed = match self.operands[slot].param {
            Param::Reg(fixed) => fixed,
            _ => return,
        };
        // REX.B selects r8..r15 for registers encoded in the opcode byte
        let extends = slot == 0
            && self.desc.has_flags(optype::REXB_EXTENDS_OPREG)
            && self.prefixes.any(prefix::REX);

        match fixed {
            FixedReg::Gen(index) => {
                let class = match self.op_mode {
                    CpuMode::Bits16 => RegClass::Gen16,
                    CpuMode::Bits32 => RegClass::Gen32,
                    CpuMode::Bits64 => RegClass::Gen64,
                };
                let index = if extends {
                    index + (self.rex_bit(rex::B) << 3)
                } else {
                    index
                };
                self.operands[slot].set_reg(class, index);
            }
            FixedReg::Gen16(index) => self.operands[slot].set_reg(RegClass::Gen16, index),
            FixedReg::Gen8(index) => {
                let index = if extends && self.cpu_mode == CpuMode::Bits64 {
                    index + (self.rex_bit(rex::B) << 3)
                } else if (4..8).contains(&index) {
                    // ah..bh
                    index + 12
                } else {
                    index
                };
                self.operands[slot].set_reg(RegClass::Gen8, index);
            }
            FixedReg::Seg(index) => self.operands[slot].set_reg(RegClass::Seg, index),
            FixedReg::St(index) => self.operands[slot].set_reg(RegClass::Fp, index),
        }
    }

    /// String instruction operand `[rSI]` or `[rDI]` sized by the address mode.
    fn string_operand(&mut self, slot: usize, pointer: u32, index: u8) {
        let class = match self.addr_mode {
            CpuMode::Bits16 => RegClass::Gen16,
            CpuMode::Bits32 => RegClass::Gen32,
            CpuMode::Bits64 => RegClass::Gen64,
        };
        let op = &mut self.operands[slot];
        op.usage.set(pointer);
        op.set_base(class, index);
    }

    /// Register encoded in VEX.vvvv.
    fn vex_dest(&mut self, slot: usize) {
        let vvvv = self.vex.vvvv;
        match self.operands[slot].param {
            Param::Op(Method::B, _) => {
                let class = if self.cpu_mode == CpuMode::Bits64 && self.vex.w {
                    RegClass::Gen64
                } else {
                    RegClass::Gen32
                };
                self.operands[slot].set_reg(class, vvvv);
            }
            Param::Op(_, size) => {
                let class = self.vector_class(size);
                self.operands[slot].set_reg(class, vvvv);
            }
            _ => {}
        }
    }
}

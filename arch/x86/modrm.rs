//! ModRM and SIB addressing forms.

use xdis_core::{bytes::ReadBytes, error::ErrorKind};

use crate::{
    decode::Inner,
    insn::{prefix, rex, CpuMode, ModRm, Sib},
    opcode::{opcode, optype, Method, Param, Size},
    operand::{usage, RegClass},
};

const BX: u8 = 3;
const BP: u8 = 5;
const SI: u8 = 6;
const DI: u8 = 7;

const BASE16: [u8; 8] = [BX, BX, BP, BP, SI, DI, BP, BX];
const INDEX16: [u8; 4] = [SI, DI, SI, DI];

impl<R: ReadBytes + ?Sized> Inner<'_, R> {
    fn set_modrm(&mut self, byte: u8) {
        let mut modrm = ModRm::from_byte(byte);
        if self.desc.has_flags(optype::MOD_FIXED_11) {
            modrm.mode = 3;
        }
        if self.prefixes.any(prefix::REX) {
            modrm.reg |= self.rex_bit(rex::R) << 3;
            // rm selects SIB or disp32 in these forms
            if !(modrm.mode != 3 && modrm.rm == 4) && !(modrm.mode == 0 && modrm.rm == 5) {
                modrm.rm |= self.rex_bit(rex::B) << 3;
            }
        }
        self.modrm = modrm;
    }

    pub(crate) fn parse_modrm(&mut self, off: usize, slot: usize) -> usize {
        let byte = self.read_u8(off);
        self.set_modrm(byte);
        let end = self.query_modrm(off + 1);
        self.use_modrm(slot);
        end
    }

    pub(crate) fn parse_modrm_size(&mut self, off: usize, slot: usize) -> usize {
        let byte = self.read_u8(off);
        self.set_modrm(byte);
        let end = self.query_modrm_with(off + 1, false);
        self.lock_selects_cr8(slot);
        end
    }

    /// Reads SIB and displacement bytes, returns the offset past them.
    pub(crate) fn query_modrm(&mut self, off: usize) -> usize {
        self.query_modrm_with(off, true)
    }

    fn query_modrm_with(&mut self, mut off: usize, read: bool) -> usize {
        let mode = self.modrm.mode;
        let rm = self.modrm.rm & 7;

        if self.addr_mode != CpuMode::Bits16 {
            if mode != 3 && rm == 4 {
                off = self.parse_sib(off, read);
            }
            match mode {
                0 if rm == 5 => {
                    if read {
                        self.disp = self.read_u32(off) as i32 as i64;
                    }
                    off += 4;
                }
                1 => {
                    if read {
                        self.disp = self.read_u8(off) as i8 as i64;
                    }
                    off += 1;
                }
                2 => {
                    if read {
                        self.disp = self.read_u32(off) as i32 as i64;
                    }
                    off += 4;
                }
                _ => {}
            }
        } else {
            match mode {
                0 if rm == 6 => {
                    if read {
                        self.disp = self.read_u16(off) as i64;
                    }
                    off += 2;
                }
                1 => {
                    if read {
                        self.disp = self.read_u8(off) as i8 as i64;
                    }
                    off += 1;
                }
                2 => {
                    if read {
                        self.disp = self.read_u16(off) as i16 as i64;
                    }
                    off += 2;
                }
                _ => {}
            }
        }
        off
    }

    fn parse_sib(&mut self, mut off: usize, read: bool) -> usize {
        let mut sib = Sib::from_byte(self.read_u8(off));
        off += 1;

        let no_base = sib.base == 5 && self.modrm.mode == 0;
        if self.prefixes.any(prefix::REX) {
            if !no_base {
                sib.base |= self.rex_bit(rex::B) << 3;
            }
            sib.index |= self.rex_bit(rex::X) << 3;
        }
        self.sib = sib;

        if no_base {
            if read {
                self.disp = self.read_u32(off) as i32 as i64;
            }
            off += 4;
        }
        off
    }

    /// `mov cr` with a `lock` prefix addresses CR8 outside of 64-bit mode.
    fn lock_selects_cr8(&mut self, slot: usize) -> bool {
        let selects = self.operands[slot].param.method() == Some(Method::C)
            && self.desc.opcode() == opcode::MOV_CR
            && self.op_mode == CpuMode::Bits32
            && self.prefixes.any(prefix::LOCK);
        if selects {
            self.prefixes.clear(prefix::LOCK);
        }
        selects
    }

    /// Size-only counterpart of [`use_modrm`](Self::use_modrm).
    pub(crate) fn use_modrm_size(&mut self, slot: usize) {
        self.lock_selects_cr8(slot);
    }

    /// Fills operand `slot` from the already parsed ModRM byte.
    pub(crate) fn use_modrm(&mut self, slot: usize) {
        let (method, size) = match self.operands[slot].param {
            Param::Op(method, size) => (method, size),
            _ => return,
        };
        let ModRm { mode, reg, rm } = self.modrm;

        match method {
            Method::G => {
                self.set_gen_reg(slot, reg, size);
                return;
            }
            Method::C => {
                let index = if self.lock_selects_cr8(slot) { 8 } else { reg };
                self.operands[slot].set_reg(RegClass::Cr, index);
                return;
            }
            Method::D => {
                self.operands[slot].set_reg(RegClass::Dbg, reg);
                return;
            }
            Method::Q | Method::W if mode != 3 => {}
            Method::Q | Method::N => {
                self.operands[slot].set_reg(RegClass::Mmx, rm & 7);
                return;
            }
            Method::P => {
                self.operands[slot].set_reg(RegClass::Mmx, reg & 7);
                return;
            }
            Method::S => {
                let index = reg & 7;
                if index > 5 {
                    log::debug!("{:#x}: invalid segment register {index}", self.address);
                    self.latch(ErrorKind::InvalidOperand);
                    return;
                }
                self.operands[slot].set_reg(RegClass::Seg, index);
                return;
            }
            Method::T => {
                self.operands[slot].set_reg(RegClass::Test, reg & 7);
                return;
            }
            Method::W | Method::U => {
                let class = self.vector_class(size);
                self.operands[slot].set_reg(class, rm);
                return;
            }
            Method::V => {
                let class = self.vector_class(size);
                self.operands[slot].set_reg(class, reg);
                return;
            }
            _ => {}
        }

        if mode == 3 {
            if method == Method::M {
                log::debug!("{:#x}: register form of a memory operand", self.address);
                self.latch(ErrorKind::InvalidOperand);
                return;
            }
            self.set_gen_reg(slot, rm, size);
            return;
        }

        if self.addr_mode == CpuMode::Bits16 {
            self.use_modrm16(slot);
            return;
        }

        let class = if self.addr_mode == CpuMode::Bits64 {
            RegClass::Gen64
        } else {
            RegClass::Gen32
        };
        let disp = self.disp;
        if rm & 7 == 4 {
            self.use_sib(slot);
        } else if mode == 0 && rm == 5 {
            let rip = self.cpu_mode == CpuMode::Bits64;
            let op = &mut self.operands[slot];
            op.usage.set(if rip { usage::RIPDISP32 } else { usage::DISP32 });
            op.disp = disp;
        } else {
            self.operands[slot].set_base(class, rm);
        }

        let op = &mut self.operands[slot];
        match mode {
            1 => {
                op.usage.set(usage::DISP8);
                op.disp = disp;
            }
            2 => {
                op.usage.set(usage::DISP32);
                op.disp = disp;
            }
            _ => {}
        }
    }

    fn use_modrm16(&mut self, slot: usize) {
        let ModRm { mode, rm, .. } = self.modrm;
        let rm = rm & 7;
        let disp = self.disp;
        let op = &mut self.operands[slot];
        if mode == 0 && rm == 6 {
            op.usage.set(usage::DISP16);
            op.disp = disp;
            return;
        }

        op.set_base(RegClass::Gen16, BASE16[rm as usize]);
        if let Some(&index) = INDEX16.get(rm as usize) {
            op.set_index(RegClass::Gen16, index);
        }
        match mode {
            1 => {
                op.usage.set(usage::DISP8);
                op.disp = disp;
            }
            2 => {
                op.usage.set(usage::DISP16);
                op.disp = disp;
            }
            _ => {}
        }
    }

    fn use_sib(&mut self, slot: usize) {
        let Sib { scale, index, base } = self.sib;
        let class = if self.addr_mode == CpuMode::Bits32 {
            RegClass::Gen32
        } else {
            RegClass::Gen64
        };
        let vsib = self.desc.has_flags(optype::VSIB);
        let vclass = if self.vex.l {
            RegClass::Ymm
        } else {
            RegClass::Xmm
        };
        let mode = self.modrm.mode;
        let wide = self.addr_mode != CpuMode::Bits32;
        let disp = self.disp;

        let op = &mut self.operands[slot];
        // a vector index has no "none" encoding
        if vsib || index != 4 {
            op.set_index(if vsib { vclass } else { class }, index);
            if scale != 0 {
                op.usage.set(usage::SCALE);
                op.scale = 1 << scale;
            }
        }

        if base == 5 && mode == 0 {
            op.usage.set(if wide { usage::DISP64 } else { usage::DISP32 });
            op.disp = disp;
        } else {
            op.set_base(class, base);
        }
    }

    /// General register operand sized by `size` and the operand mode.
    fn set_gen_reg(&mut self, slot: usize, index: u8, size: Size) {
        let op_mode = self.op_mode;
        let class = match size {
            Size::B => {
                // ah..bh unless a REX prefix turns them into spl..dil
                let index = if !self.prefixes.any(prefix::REX) && (4..8).contains(&index) {
                    index + 12
                } else {
                    index
                };
                self.operands[slot].set_reg(RegClass::Gen8, index);
                return;
            }
            Size::W => RegClass::Gen16,
            Size::D => {
                if self.desc.has_flags(optype::DEFAULT_64_OP_SIZE) && op_mode == CpuMode::Bits64 {
                    RegClass::Gen64
                } else {
                    RegClass::Gen32
                }
            }
            Size::Q => RegClass::Gen64,
            Size::V | Size::None => match op_mode {
                CpuMode::Bits16 => RegClass::Gen16,
                CpuMode::Bits32 => RegClass::Gen32,
                CpuMode::Bits64 => RegClass::Gen64,
            },
            Size::Y => match op_mode {
                CpuMode::Bits64 => RegClass::Gen64,
                _ => RegClass::Gen32,
            },
            Size::Z => match op_mode {
                CpuMode::Bits16 => RegClass::Gen16,
                _ => RegClass::Gen32,
            },
            _ => {
                log::debug!("{:#x}: no general register of size {size:?}", self.address);
                self.latch(ErrorKind::InvalidOperand);
                return;
            }
        };
        self.operands[slot].set_reg(class, index);
    }

    /// XMM or YMM depending on VEX.L, scalar and fixed 128-bit sizes stay XMM.
    pub(crate) fn vector_class(&self, size: Size) -> RegClass {
        match size {
            Size::Qq => RegClass::Ymm,
            Size::Dq | Size::Q | Size::D | Size::W | Size::B | Size::Ss | Size::Sd => {
                RegClass::Xmm
            }
            _ if self.prefixes.any(prefix::VEX) && self.vex.l => RegClass::Ymm,
            _ => RegClass::Xmm,
        }
    }
}

use xdis_core::flags::Flags;

use crate::opcode::Param;

/// Bits of [`Operand::usage`] describing which fields are populated.
pub mod usage {
    pub const IMM8: u32 = 1 << 0;
    pub const IMM16: u32 = 1 << 1;
    pub const IMM32: u32 = 1 << 2;
    pub const IMM64: u32 = 1 << 3;
    /// Immediate was sign-extended from a byte.
    pub const IMM_SX8: u32 = 1 << 4;
    /// Immediate is a branch offset relative to the next instruction.
    pub const IMM_REL: u32 = 1 << 5;
    /// `selector:offset16` immediate.
    pub const IMM_FAR16: u32 = 1 << 6;
    /// `selector:offset32` immediate.
    pub const IMM_FAR32: u32 = 1 << 7;

    pub const REG_GEN8: u32 = 1 << 8;
    pub const REG_GEN16: u32 = 1 << 9;
    pub const REG_GEN32: u32 = 1 << 10;
    pub const REG_GEN64: u32 = 1 << 11;
    pub const REG_SEG: u32 = 1 << 12;
    pub const REG_CR: u32 = 1 << 13;
    pub const REG_DBG: u32 = 1 << 14;
    pub const REG_TEST: u32 = 1 << 15;
    pub const REG_FP: u32 = 1 << 16;
    pub const REG_MMX: u32 = 1 << 17;
    pub const REG_XMM: u32 = 1 << 18;
    pub const REG_YMM: u32 = 1 << 19;

    pub const BASE: u32 = 1 << 20;
    pub const INDEX: u32 = 1 << 21;
    pub const SCALE: u32 = 1 << 22;
    pub const DISP8: u32 = 1 << 23;
    pub const DISP16: u32 = 1 << 24;
    pub const DISP32: u32 = 1 << 25;
    pub const DISP64: u32 = 1 << 26;
    pub const RIPDISP32: u32 = 1 << 27;

    /// String source `ds:rsi`.
    pub const POINTER_DS_BASED: u32 = 1 << 28;
    /// String destination `es:rdi`.
    pub const POINTER_ES_BASED: u32 = 1 << 29;

    pub const IMM: u32 = IMM8 | IMM16 | IMM32 | IMM64 | IMM_FAR16 | IMM_FAR32;
    pub const REG: u32 = REG_GEN8
        | REG_GEN16
        | REG_GEN32
        | REG_GEN64
        | REG_SEG
        | REG_CR
        | REG_DBG
        | REG_TEST
        | REG_FP
        | REG_MMX
        | REG_XMM
        | REG_YMM;
    pub const DISP: u32 = DISP8 | DISP16 | DISP32 | DISP64 | RIPDISP32;
    /// Effective address forms, never combined with a [`REG`] bit.
    pub const MEM: u32 = BASE | INDEX | DISP;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RegClass {
    Gen8,
    Gen16,
    Gen32,
    Gen64,
    Seg,
    Cr,
    Dbg,
    Test,
    Fp,
    Mmx,
    Xmm,
    Ymm,
}

impl RegClass {
    pub(crate) fn usage(&self) -> u32 {
        match self {
            Self::Gen8 => usage::REG_GEN8,
            Self::Gen16 => usage::REG_GEN16,
            Self::Gen32 => usage::REG_GEN32,
            Self::Gen64 => usage::REG_GEN64,
            Self::Seg => usage::REG_SEG,
            Self::Cr => usage::REG_CR,
            Self::Dbg => usage::REG_DBG,
            Self::Test => usage::REG_TEST,
            Self::Fp => usage::REG_FP,
            Self::Mmx => usage::REG_MMX,
            Self::Xmm => usage::REG_XMM,
            Self::Ymm => usage::REG_YMM,
        }
    }
}

/// Register reference.
///
/// Byte registers use indices `0..16` for `al..r15b` (with `spl..dil` at `4..8`) and
/// `16..20` for `ah..bh`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reg {
    class: RegClass,
    index: u8,
}

impl Reg {
    pub const fn new(class: RegClass, index: u8) -> Self {
        Self { class, index }
    }

    pub fn class(&self) -> RegClass {
        self.class
    }

    pub fn index(&self) -> u8 {
        self.index
    }
}

/// Decoded operand slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Operand {
    pub(crate) param: Param,
    pub(crate) usage: Flags,
    pub(crate) size: u8,
    pub(crate) reg: Reg,
    pub(crate) base: Reg,
    pub(crate) index: Reg,
    pub(crate) scale: u8,
    pub(crate) disp: i64,
    pub(crate) imm: u64,
}

impl Operand {
    pub(crate) const fn new(param: Param) -> Self {
        Self {
            param,
            usage: Flags::empty(),
            size: 0,
            reg: Reg::new(RegClass::Gen32, 0),
            base: Reg::new(RegClass::Gen32, 0),
            index: Reg::new(RegClass::Gen32, 0),
            scale: 0,
            disp: 0,
            imm: 0,
        }
    }

    pub(crate) fn set_reg(&mut self, class: RegClass, index: u8) {
        self.usage.set(class.usage());
        self.reg = Reg::new(class, index);
    }

    pub(crate) fn set_base(&mut self, class: RegClass, index: u8) {
        self.usage.set(usage::BASE);
        self.base = Reg::new(class, index);
    }

    pub(crate) fn set_index(&mut self, class: RegClass, index: u8) {
        self.usage.set(usage::INDEX);
        self.index = Reg::new(class, index);
    }

    /// Operand declaration from the opcode map.
    pub fn param(&self) -> Param {
        self.param
    }

    pub fn usage(&self) -> Flags {
        self.usage
    }

    pub fn has_usage(&self, bits: u32) -> bool {
        self.usage.any(bits)
    }

    /// Width of the operand in bytes, zero when it has no natural width.
    pub fn size(&self) -> usize {
        self.size as usize
    }

    pub fn is_none(&self) -> bool {
        self.usage.is_empty()
    }

    pub fn is_register(&self) -> bool {
        self.usage.any(usage::REG)
    }

    pub fn is_memory(&self) -> bool {
        self.usage.any(usage::MEM)
    }

    pub fn is_immediate(&self) -> bool {
        self.usage.any(usage::IMM)
    }

    pub fn is_relative(&self) -> bool {
        self.usage.any(usage::IMM_REL)
    }

    /// Register of a register-direct operand.
    pub fn reg(&self) -> Option<Reg> {
        self.is_register().then_some(self.reg)
    }

    pub fn base(&self) -> Option<Reg> {
        self.usage.any(usage::BASE).then_some(self.base)
    }

    pub fn index(&self) -> Option<Reg> {
        self.usage.any(usage::INDEX).then_some(self.index)
    }

    /// Index multiplier, `1` when an index is present without a scale.
    pub fn scale(&self) -> Option<u8> {
        if self.usage.any(usage::SCALE) {
            Some(self.scale)
        } else if self.usage.any(usage::INDEX) {
            Some(1)
        } else {
            None
        }
    }

    /// Displacement, sign-extended unless it is an absolute 16-bit address.
    pub fn disp(&self) -> Option<i64> {
        self.usage.any(usage::DISP).then_some(self.disp)
    }

    pub fn imm(&self) -> Option<u64> {
        self.is_immediate().then_some(self.imm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcode::param;

    #[test]
    fn register_and_memory_are_exclusive() {
        let mut op = Operand::new(param::Ev);
        assert!(op.is_none());
        op.set_base(RegClass::Gen64, 5);
        op.usage.set(usage::DISP8);
        op.disp = -8;
        assert!(op.is_memory());
        assert!(!op.is_register());
        assert_eq!(op.reg(), None);
        assert_eq!(op.base(), Some(Reg::new(RegClass::Gen64, 5)));
        assert_eq!(op.scale(), None);
        assert_eq!(op.disp(), Some(-8));

        let mut op = Operand::new(param::Gv);
        op.set_reg(RegClass::Gen32, 3);
        assert!(op.usage().all(usage::REG_GEN32));
        assert_eq!(op.reg().map(|r| r.index()), Some(3));
        assert!(!op.is_memory());
    }
}

use core::fmt;

use xdis_core::{bytes::MAX_INSN_LEN, flags::Flags, utils::zextract};

use crate::{
    opcode::{optype, Descriptor, Opcode, INVALID_NOMODRM},
    operand::Operand,
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CpuMode {
    Bits16,
    #[default]
    Bits32,
    Bits64,
}

impl CpuMode {
    pub fn bits(&self) -> u32 {
        match self {
            Self::Bits16 => 16,
            Self::Bits32 => 32,
            Self::Bits64 => 64,
        }
    }

    /// Width in bytes.
    pub fn bytes(&self) -> u8 {
        match self {
            Self::Bits16 => 2,
            Self::Bits32 => 4,
            Self::Bits64 => 8,
        }
    }
}

impl fmt::Display for CpuMode {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}-bit", self.bits())
    }
}

/// Bits of [`Instruction::prefixes`].
pub mod prefix {
    pub const SEG: u32 = 1 << 0;
    pub const LOCK: u32 = 1 << 1;
    pub const OPSIZE: u32 = 1 << 2;
    pub const ADDRSIZE: u32 = 1 << 3;
    pub const REP: u32 = 1 << 4;
    pub const REPNE: u32 = 1 << 5;
    pub const REX: u32 = 1 << 6;
    pub const VEX: u32 = 1 << 7;
}

/// REX extension bits as stored in [`Instruction::rex`].
pub mod rex {
    pub const B: u8 = 1 << 0;
    pub const X: u8 = 1 << 1;
    pub const R: u8 = 1 << 2;
    pub const W: u8 = 1 << 3;
}

/// Segment register indices.
pub mod seg {
    pub const ES: u8 = 0;
    pub const CS: u8 = 1;
    pub const SS: u8 = 2;
    pub const DS: u8 = 3;
    pub const FS: u8 = 4;
    pub const GS: u8 = 5;
}

/// ModRM fields, `reg` and `rm` already extended by REX.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ModRm {
    pub mode: u8,
    pub reg: u8,
    pub rm: u8,
}

impl ModRm {
    pub(crate) fn from_byte(byte: u8) -> Self {
        Self {
            mode: zextract(byte, 6, 2),
            reg: zextract(byte, 3, 3),
            rm: zextract(byte, 0, 3),
        }
    }
}

/// SIB fields, `index` and `base` already extended by REX.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sib {
    pub scale: u8,
    pub index: u8,
    pub base: u8,
}

impl Sib {
    pub(crate) fn from_byte(byte: u8) -> Self {
        Self {
            scale: zextract(byte, 6, 2),
            index: zextract(byte, 3, 3),
            base: zextract(byte, 0, 3),
        }
    }
}

/// Fields of a VEX prefix.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Vex {
    /// 256-bit vector length.
    pub l: bool,
    pub w: bool,
    /// Extra register operand, already un-inverted.
    pub vvvv: u8,
}

/// Decoded x86 instruction.
#[derive(Clone, Debug)]
pub struct Instruction {
    pub(crate) address: u64,
    pub(crate) bytes: [u8; MAX_INSN_LEN],
    pub(crate) len: u8,
    pub(crate) cpu_mode: CpuMode,
    pub(crate) op_mode: CpuMode,
    pub(crate) addr_mode: CpuMode,
    pub(crate) prefixes: Flags,
    pub(crate) last_prefix: Option<Opcode>,
    pub(crate) segment: u8,
    pub(crate) rex: u8,
    pub(crate) vex: Vex,
    pub(crate) desc: &'static Descriptor,
    pub(crate) opcode_byte: u8,
    pub(crate) prefix_len: u8,
    pub(crate) modrm: ModRm,
    pub(crate) sib: Sib,
    pub(crate) operands: [Operand; 4],
}

static NO_DESCRIPTOR: Descriptor = INVALID_NOMODRM;

impl Instruction {
    pub(crate) fn new(address: u64, mode: CpuMode) -> Self {
        let (op_mode, addr_mode) = match mode {
            CpuMode::Bits64 => (CpuMode::Bits32, CpuMode::Bits64),
            mode => (mode, mode),
        };
        Self {
            address,
            bytes: [0; MAX_INSN_LEN],
            len: 0,
            cpu_mode: mode,
            op_mode,
            addr_mode,
            prefixes: Flags::empty(),
            last_prefix: None,
            segment: seg::DS,
            rex: 0,
            vex: Vex::default(),
            desc: &NO_DESCRIPTOR,
            opcode_byte: 0,
            prefix_len: 0,
            modrm: ModRm::default(),
            sib: Sib::default(),
            operands: [Operand::new(crate::opcode::Param::None); 4],
        }
    }

    pub fn address(&self) -> u64 {
        self.address
    }

    /// Address of the next instruction.
    pub fn next_address(&self) -> u64 {
        self.address.wrapping_add(self.len as u64)
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw instruction bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn cpu_mode(&self) -> CpuMode {
        self.cpu_mode
    }

    /// Effective operand size mode.
    pub fn op_mode(&self) -> CpuMode {
        self.op_mode
    }

    /// Effective address size mode.
    pub fn addr_mode(&self) -> CpuMode {
        self.addr_mode
    }

    /// Active prefixes, see [`prefix`].
    ///
    /// Prefixes consumed by the opcode map selection (`66`, `f2` or `f3` choosing an SSE
    /// table) are not reported.
    pub fn prefixes(&self) -> Flags {
        self.prefixes
    }

    pub fn has_prefix(&self, bits: u32) -> bool {
        self.prefixes.any(bits)
    }

    /// Last legacy prefix seen before the opcode.
    pub fn last_prefix(&self) -> Option<Opcode> {
        self.last_prefix
    }

    /// Overridden segment register, see [`seg`].
    pub fn segment(&self) -> Option<u8> {
        self.prefixes.any(prefix::SEG).then_some(self.segment)
    }

    /// REX bits, see [`rex`].
    pub fn rex(&self) -> u8 {
        self.rex
    }

    pub fn vex(&self) -> Option<Vex> {
        self.prefixes.any(prefix::VEX).then_some(self.vex)
    }

    pub fn descriptor(&self) -> &'static Descriptor {
        self.desc
    }

    pub fn opcode(&self) -> Opcode {
        self.desc.opcode()
    }

    pub fn mnemonic(&self) -> &'static str {
        self.desc.mnemonic()
    }

    /// Instruction class bits, see [`optype`].
    pub fn optype(&self) -> u32 {
        self.desc.flags()
    }

    pub fn is_control_flow(&self) -> bool {
        self.desc.has_flags(optype::CONTROLFLOW)
    }

    /// Last opcode byte, the one that selected the final descriptor.
    pub fn opcode_byte(&self) -> u8 {
        self.opcode_byte
    }

    /// Number of prefix bytes before the first opcode byte.
    pub fn prefix_len(&self) -> usize {
        self.prefix_len as usize
    }

    pub fn modrm(&self) -> ModRm {
        self.modrm
    }

    pub fn sib(&self) -> Sib {
        self.sib
    }

    /// Operands declared by the descriptor.
    pub fn operands(&self) -> &[Operand] {
        &self.operands[..self.desc.operand_count()]
    }

    pub fn operand(&self, index: usize) -> Option<&Operand> {
        self.operands().get(index)
    }

    pub(crate) fn rex_bit(&self, bit: u8) -> u8 {
        if self.prefixes.any(prefix::REX) && self.rex & bit != 0 {
            1
        } else {
            0
        }
    }
}

impl PartialEq for Instruction {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.desc, other.desc)
            && self.address == other.address
            && self.bytes() == other.bytes()
            && self.cpu_mode == other.cpu_mode
            && self.op_mode == other.op_mode
            && self.addr_mode == other.addr_mode
            && self.prefixes == other.prefixes
            && self.last_prefix == other.last_prefix
            && self.segment == other.segment
            && self.rex == other.rex
            && self.vex == other.vex
            && self.opcode_byte == other.opcode_byte
            && self.prefix_len == other.prefix_len
            && self.modrm == other.modrm
            && self.sib == other.sib
            && self.operands == other.operands
    }
}

impl Eq for Instruction {}

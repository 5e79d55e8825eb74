use core::fmt;

/// Opcode identity shared by every descriptor of the same instruction.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Opcode(u16);

impl Opcode {
    pub const fn raw(&self) -> u16 {
        self.0
    }

    /// Returns `true` for the identities the prefix scanner consumes.
    pub fn is_prefix(&self) -> bool {
        self.0 <= opcode::PREFIX_REX.0
    }

    pub fn mnemonic(&self) -> &'static str {
        opcode::defined_mnemonic(*self).unwrap_or("(bad)")
    }
}

impl fmt::Debug for Opcode {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Opcode({})", self.mnemonic())
    }
}

pub mod opcode {
    use super::Opcode;

    include!("opcodes.rs");
}

/// Instruction classification bits stored in [`Descriptor::flags`].
pub mod optype {
    pub const INVALID: u32 = 0x0000_0001;
    pub const HARMLESS: u32 = 0x0000_0002;
    pub const CONTROLFLOW: u32 = 0x0000_0004;
    pub const POTENTIALLY_DANGEROUS: u32 = 0x0000_0008;
    pub const DANGEROUS: u32 = 0x0000_0010;
    pub const PORTIO: u32 = 0x0000_0020;
    pub const PRIVILEGED: u32 = 0x0000_0040;
    pub const PRIVILEGED_NOTRAP: u32 = 0x0000_0080;
    pub const UNCOND_CONTROLFLOW: u32 = 0x0000_0100;
    pub const RELATIVE_CONTROLFLOW: u32 = 0x0000_0200;
    pub const COND_CONTROLFLOW: u32 = 0x0000_0400;
    pub const INTERRUPT: u32 = 0x0000_0800;
    pub const ILLEGAL: u32 = 0x0000_1000;
    pub const RRM_DANGEROUS: u32 = 0x0000_2000;
    pub const INHIBIT_IRQS: u32 = 0x0000_4000;
    pub const PORTIO_READ: u32 = 0x0000_8000;
    pub const PORTIO_WRITE: u32 = 0x0001_0000;
    pub const INVALID_64: u32 = 0x0002_0000;
    pub const ONLY_64: u32 = 0x0004_0000;
    pub const DEFAULT_64_OP_SIZE: u32 = 0x0008_0000;
    pub const FORCED_64_OP_SIZE: u32 = 0x0010_0000;
    pub const REXB_EXTENDS_OPREG: u32 = 0x0020_0000;
    pub const MOD_FIXED_11: u32 = 0x0040_0000;
    pub const FORCED_32_OP_SIZE_X86: u32 = 0x0080_0000;
    pub const SSE: u32 = 0x0100_0000;
    pub const MMX: u32 = 0x0200_0000;
    pub const AVX: u32 = 0x0400_0000;
    pub const FPU: u32 = 0x0800_0000;
    pub const VSIB: u32 = 0x1000_0000;
    pub const ALL: u32 = 0xffff_ffff;
}

/// How an operand is encoded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Method {
    /// Direct far address.
    A,
    /// General register in VEX.vvvv.
    B,
    /// Control register in ModRM.reg.
    C,
    /// Debug register in ModRM.reg.
    D,
    /// General register or memory in ModRM.rm.
    E,
    /// General register in ModRM.reg.
    G,
    /// Vector register in VEX.vvvv.
    H,
    /// Immediate.
    I,
    /// Relative branch offset.
    J,
    /// Vector register in the high nibble of an 8-bit immediate.
    L,
    /// Memory in ModRM.rm.
    M,
    /// MMX register in ModRM.rm.
    N,
    /// Absolute memory offset.
    O,
    /// MMX register in ModRM.reg.
    P,
    /// MMX register or memory in ModRM.rm.
    Q,
    /// General register in ModRM.rm.
    R,
    /// Segment register in ModRM.reg.
    S,
    /// Test register in ModRM.reg.
    T,
    /// Vector register in ModRM.rm.
    U,
    /// Vector register in ModRM.reg.
    V,
    /// Vector register or memory in ModRM.rm.
    W,
    /// String source `DS:rSI`.
    X,
    /// String destination `ES:rDI`.
    Y,
}

/// Operand size code.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Size {
    None,
    /// Pair of words or dwords (`bound`).
    A,
    B,
    D,
    Dq,
    /// Far pointer.
    P,
    Pd,
    Pi,
    Ps,
    Q,
    Qq,
    /// Pseudo-descriptor.
    S,
    Sd,
    Ss,
    /// 80-bit x87 value.
    T,
    /// Word, dword or qword by operand size.
    V,
    W,
    /// 128 or 256 bits by VEX.L.
    X,
    /// Dword or qword by operand size.
    Y,
    /// Word for 16-bit operand size, dword otherwise.
    Z,
}

/// Register implied by the opcode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FixedReg {
    /// General register sized by the operand mode.
    Gen(u8),
    Gen16(u8),
    Gen8(u8),
    Seg(u8),
    St(u8),
}

/// Operand declared by a descriptor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Param {
    None,
    Op(Method, Size),
    Reg(FixedReg),
}

impl Param {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn method(&self) -> Option<Method> {
        match self {
            Self::Op(method, _) => Some(*method),
            _ => None,
        }
    }

    pub fn size(&self) -> Size {
        match self {
            Self::Op(_, size) => *size,
            _ => Size::None,
        }
    }
}

macro_rules! params {
    ($($name:ident = $method:ident $size:ident),* $(,)?) => {
        $(pub const $name: Param = Param::Op(Method::$method, Size::$size);)*
    };
}

/// Shorthands for operand declarations in the opcode maps.
#[allow(non_upper_case_globals)]
pub mod param {
    use super::{FixedReg, Method, Param, Size};

    pub const None: Param = Param::None;

    params! {
        Ap = A P,
        By = B Y,
        Cy = C Y,
        Dy = D Y,
        Eb = E B,
        Ed = E D,
        Ep = E P,
        Eq = E Q,
        Ev = E V,
        Ew = E W,
        Ey = E Y,
        Gb = G B,
        Gd = G D,
        Gq = G Q,
        Gv = G V,
        Gw = G W,
        Gy = G Y,
        Gz = G Z,
        Hdq = H Dq,
        Hpd = H Pd,
        Hps = H Ps,
        Hqq = H Qq,
        Hsd = H Sd,
        Hss = H Ss,
        Hx = H X,
        Ib = I B,
        Iv = I V,
        Iw = I W,
        Iz = I Z,
        Jb = J B,
        Jz = J Z,
        Lx = L X,
        M = M None,
        Ma = M A,
        Mb = M B,
        Md = M D,
        Mdq = M Dq,
        Mp = M P,
        Mq = M Q,
        Mqq = M Qq,
        Ms = M S,
        Mt = M T,
        Mv = M V,
        Mw = M W,
        Mx = M X,
        My = M Y,
        Nq = N Q,
        Ob = O B,
        Ov = O V,
        Pd = P D,
        Pq = P Q,
        Qd = Q D,
        Qq = Q Q,
        Rd = R D,
        Rv = R V,
        Ry = R Y,
        Sw = S W,
        Ty = T Y,
        Udq = U Dq,
        Upd = U Pd,
        Ups = U Ps,
        Uq = U Q,
        Ux = U X,
        Vdq = V Dq,
        Vpd = V Pd,
        Vps = V Ps,
        Vq = V Q,
        Vqq = V Qq,
        Vsd = V Sd,
        Vss = V Ss,
        Vx = V X,
        Vy = V Y,
        Wb = W B,
        Wd = W D,
        Wdq = W Dq,
        Wpd = W Pd,
        Wps = W Ps,
        Wq = W Q,
        Wqq = W Qq,
        Wsd = W Sd,
        Wss = W Ss,
        Ww = W W,
        Wx = W X,
        Xb = X B,
        Xv = X V,
        Yb = Y B,
        Yv = Y V,
    }

    pub const AL: Param = Param::Reg(FixedReg::Gen8(0));
    pub const CL: Param = Param::Reg(FixedReg::Gen8(1));
    pub const DL: Param = Param::Reg(FixedReg::Gen8(2));
    pub const BL: Param = Param::Reg(FixedReg::Gen8(3));
    pub const AH: Param = Param::Reg(FixedReg::Gen8(4));
    pub const CH: Param = Param::Reg(FixedReg::Gen8(5));
    pub const DH: Param = Param::Reg(FixedReg::Gen8(6));
    pub const BH: Param = Param::Reg(FixedReg::Gen8(7));

    pub const AX: Param = Param::Reg(FixedReg::Gen16(0));
    pub const DX: Param = Param::Reg(FixedReg::Gen16(2));

    pub const eAX: Param = Param::Reg(FixedReg::Gen(0));
    pub const eCX: Param = Param::Reg(FixedReg::Gen(1));
    pub const eDX: Param = Param::Reg(FixedReg::Gen(2));
    pub const eBX: Param = Param::Reg(FixedReg::Gen(3));
    pub const eSP: Param = Param::Reg(FixedReg::Gen(4));
    pub const eBP: Param = Param::Reg(FixedReg::Gen(5));
    pub const eSI: Param = Param::Reg(FixedReg::Gen(6));
    pub const eDI: Param = Param::Reg(FixedReg::Gen(7));

    pub const ES: Param = Param::Reg(FixedReg::Seg(0));
    pub const CS: Param = Param::Reg(FixedReg::Seg(1));
    pub const SS: Param = Param::Reg(FixedReg::Seg(2));
    pub const DS: Param = Param::Reg(FixedReg::Seg(3));
    pub const FS: Param = Param::Reg(FixedReg::Seg(4));
    pub const GS: Param = Param::Reg(FixedReg::Seg(5));

    pub const ST0: Param = Param::Reg(FixedReg::St(0));

    pub const fn st(index: u8) -> Param {
        Param::Reg(FixedReg::St(index))
    }
}

/// Operand parser selected by a descriptor slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Parse {
    Nop,
    ModRm,
    UseModRm,
    ModFence,
    ImmByte,
    ImmByteSx,
    ImmBRel,
    ImmUshort,
    ImmV,
    ImmVRel,
    ImmZ,
    ImmUlong,
    ImmQword,
    ImmAddr,
    ImmAddrF,
    FixedReg,
    Xb,
    Xv,
    Yb,
    Yv,
    VexDest,
    InvOpModRm,
    TwoByteEsc,
    ThreeByteEsc4,
    ThreeByteEsc5,
    EscFp,
    NopPause,
    Amd3DNow,
    Vex2b,
    Vex3b,
    Grp1,
    ShiftGrp2,
    Grp3,
    Grp4,
    Grp5,
    Grp6,
    Grp7,
    Grp8,
    Grp9,
    Grp10,
    Grp12,
    Grp13,
    Grp14,
    Grp15,
    Grp16,
    Grp17,
}

impl Parse {
    /// Returns `true` for parsers that consume the ModRM byte.
    pub fn reads_modrm(&self) -> bool {
        matches!(self, Self::ModRm | Self::InvOpModRm)
    }

    /// Returns `true` for parsers that select another descriptor instead of filling a slot.
    pub fn is_dispatch(&self) -> bool {
        matches!(
            self,
            Self::TwoByteEsc
                | Self::ThreeByteEsc4
                | Self::ThreeByteEsc5
                | Self::EscFp
                | Self::NopPause
                | Self::Amd3DNow
                | Self::Vex2b
                | Self::Vex3b
                | Self::Grp1
                | Self::ShiftGrp2
                | Self::Grp3
                | Self::Grp4
                | Self::Grp5
                | Self::Grp6
                | Self::Grp7
                | Self::Grp8
                | Self::Grp9
                | Self::Grp10
                | Self::Grp12
                | Self::Grp13
                | Self::Grp14
                | Self::Grp15
                | Self::Grp16
                | Self::Grp17
        )
    }
}

/// One entry of an opcode map.
#[derive(Copy, Clone, Debug)]
pub struct Descriptor {
    template: &'static str,
    opcode: Opcode,
    parse: [Parse; 4],
    params: [Param; 4],
    flags: u32,
}

impl Descriptor {
    pub const fn new(
        template: &'static str,
        opcode: Opcode,
        parse: &[Parse],
        params: &[Param],
        flags: u32,
    ) -> Self {
        let mut p = [Parse::Nop; 4];
        let mut i = 0;
        while i < parse.len() {
            p[i] = parse[i];
            i += 1;
        }
        let mut a = [Param::None; 4];
        let mut i = 0;
        while i < params.len() {
            a[i] = params[i];
            i += 1;
        }
        Self {
            template,
            opcode,
            parse: p,
            params: a,
            flags,
        }
    }

    /// Format template, the mnemonic followed by `%` operand escapes.
    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn parse(&self) -> &[Parse; 4] {
        &self.parse
    }

    pub fn params(&self) -> &[Param; 4] {
        &self.params
    }

    pub fn param(&self, index: usize) -> Param {
        self.params[index]
    }

    pub fn flags(&self) -> u32 {
        self.flags
    }

    pub fn has_flags(&self, flags: u32) -> bool {
        self.flags & flags != 0
    }

    pub fn mnemonic(&self) -> &'static str {
        match self.template.find(' ') {
            Some(end) => &self.template[..end],
            None => self.template,
        }
    }

    pub fn operand_count(&self) -> usize {
        self.params.iter().rposition(|p| !p.is_none()).map_or(0, |i| i + 1)
    }

    pub fn is_invalid(&self) -> bool {
        self.opcode == opcode::INVALID
    }

    /// Returns `true` if neither of the first two parsers consumes the ModRM byte.
    pub(crate) fn misses_modrm(&self) -> bool {
        !self.parse[0].reads_modrm() && !self.parse[1].reads_modrm()
    }
}

/// Builds a [`Descriptor`] from bare parser, operand and flag names.
macro_rules! op {
    ($template:literal, $opcode:ident) => {
        $crate::opcode::Descriptor::new(
            $template,
            $crate::opcode::opcode::$opcode,
            &[],
            &[],
            $crate::opcode::optype::HARMLESS,
        )
    };
    ($template:literal, $opcode:ident, [$($parse:ident),*], [$($param:expr),*]
        $(, $($flag:ident)|+)? $(,)?) => {
        $crate::opcode::Descriptor::new(
            $template,
            $crate::opcode::opcode::$opcode,
            &[$($crate::opcode::Parse::$parse),*],
            &[$({
                #[allow(unused_imports)]
                use $crate::opcode::param::*;
                $param
            }),*],
            0 $($(| $crate::opcode::optype::$flag)+)?,
        )
    };
}
pub(crate) use op;

/// Invalid descriptor that still consumes a ModRM byte.
pub(crate) const INVALID: Descriptor = Descriptor::new(
    "(bad)",
    opcode::INVALID,
    &[Parse::InvOpModRm],
    &[],
    optype::INVALID,
);

/// Invalid descriptor without operand bytes.
pub(crate) const INVALID_NOMODRM: Descriptor =
    Descriptor::new("(bad)", opcode::INVALID, &[], &[], optype::INVALID);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor() {
        let desc = op!("add %Eb,%Gb", ADD, [ModRm, UseModRm], [Eb, Gb], HARMLESS);
        assert_eq!(desc.mnemonic(), "add");
        assert_eq!(desc.operand_count(), 2);
        assert_eq!(desc.parse()[2], Parse::Nop);
        assert_eq!(desc.param(1), param::Gb);
        assert!(!desc.misses_modrm());
        assert_eq!(desc.opcode().mnemonic(), "add");
    }

    #[test]
    fn prefixes() {
        assert!(opcode::PREFIX_LOCK.is_prefix());
        assert!(opcode::PREFIX_REX.is_prefix());
        assert!(!opcode::ADD.is_prefix());
    }
}

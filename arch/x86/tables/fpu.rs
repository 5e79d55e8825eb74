use crate::opcode::{
    op, opcode,
    optype::{FPU, HARMLESS},
    param, Descriptor, Opcode, Parse, INVALID, INVALID_NOMODRM,
};

/// x87 escapes `d8`..`df` with a memory operand, indexed by `[opcode - 0xd8][reg]`.
pub(crate) static FPU_LOW: [[Descriptor; 8]; 8] = [
    [
        op!("fadd %Md", FADD, [ModRm], [Md], HARMLESS | FPU),
        op!("fmul %Md", FMUL, [ModRm], [Md], HARMLESS | FPU),
        op!("fcom %Md", FCOM, [ModRm], [Md], HARMLESS | FPU),
        op!("fcomp %Md", FCOMP, [ModRm], [Md], HARMLESS | FPU),
        op!("fsub %Md", FSUB, [ModRm], [Md], HARMLESS | FPU),
        op!("fsubr %Md", FSUBR, [ModRm], [Md], HARMLESS | FPU),
        op!("fdiv %Md", FDIV, [ModRm], [Md], HARMLESS | FPU),
        op!("fdivr %Md", FDIVR, [ModRm], [Md], HARMLESS | FPU),
    ],
    [
        op!("fld %Md", FLD, [ModRm], [Md], HARMLESS | FPU),
        INVALID,
        op!("fst %Md", FST, [ModRm], [Md], HARMLESS | FPU),
        op!("fstp %Md", FSTP, [ModRm], [Md], HARMLESS | FPU),
        op!("fldenv %M", FLDENV, [ModRm], [M], HARMLESS | FPU),
        op!("fldcw %Mw", FLDCW, [ModRm], [Mw], HARMLESS | FPU),
        op!("fnstenv %M", FNSTENV, [ModRm], [M], HARMLESS | FPU),
        op!("fnstcw %Mw", FNSTCW, [ModRm], [Mw], HARMLESS | FPU),
    ],
    [
        op!("fiadd %Md", FIADD, [ModRm], [Md], HARMLESS | FPU),
        op!("fimul %Md", FIMUL, [ModRm], [Md], HARMLESS | FPU),
        op!("ficom %Md", FICOM, [ModRm], [Md], HARMLESS | FPU),
        op!("ficomp %Md", FICOMP, [ModRm], [Md], HARMLESS | FPU),
        op!("fisub %Md", FISUB, [ModRm], [Md], HARMLESS | FPU),
        op!("fisubr %Md", FISUBR, [ModRm], [Md], HARMLESS | FPU),
        op!("fidiv %Md", FIDIV, [ModRm], [Md], HARMLESS | FPU),
        op!("fidivr %Md", FIDIVR, [ModRm], [Md], HARMLESS | FPU),
    ],
    [
        op!("fild %Md", FILD, [ModRm], [Md], HARMLESS | FPU),
        op!("fisttp %Md", FISTTP, [ModRm], [Md], HARMLESS | FPU),
        op!("fist %Md", FIST, [ModRm], [Md], HARMLESS | FPU),
        op!("fistp %Md", FISTP, [ModRm], [Md], HARMLESS | FPU),
        INVALID,
        op!("fld %Mt", FLD, [ModRm], [Mt], HARMLESS | FPU),
        INVALID,
        op!("fstp %Mt", FSTP, [ModRm], [Mt], HARMLESS | FPU),
    ],
    [
        op!("fadd %Mq", FADD, [ModRm], [Mq], HARMLESS | FPU),
        op!("fmul %Mq", FMUL, [ModRm], [Mq], HARMLESS | FPU),
        op!("fcom %Mq", FCOM, [ModRm], [Mq], HARMLESS | FPU),
        op!("fcomp %Mq", FCOMP, [ModRm], [Mq], HARMLESS | FPU),
        op!("fsub %Mq", FSUB, [ModRm], [Mq], HARMLESS | FPU),
        op!("fsubr %Mq", FSUBR, [ModRm], [Mq], HARMLESS | FPU),
        op!("fdiv %Mq", FDIV, [ModRm], [Mq], HARMLESS | FPU),
        op!("fdivr %Mq", FDIVR, [ModRm], [Mq], HARMLESS | FPU),
    ],
    [
        op!("fld %Mq", FLD, [ModRm], [Mq], HARMLESS | FPU),
        op!("fisttp %Mq", FISTTP, [ModRm], [Mq], HARMLESS | FPU),
        op!("fst %Mq", FST, [ModRm], [Mq], HARMLESS | FPU),
        op!("fstp %Mq", FSTP, [ModRm], [Mq], HARMLESS | FPU),
        op!("frstor %M", FRSTOR, [ModRm], [M], HARMLESS | FPU),
        INVALID,
        op!("fnsave %M", FNSAVE, [ModRm], [M], HARMLESS | FPU),
        op!("fnstsw %Mw", FNSTSW, [ModRm], [Mw], HARMLESS | FPU),
    ],
    [
        op!("fiadd %Mw", FIADD, [ModRm], [Mw], HARMLESS | FPU),
        op!("fimul %Mw", FIMUL, [ModRm], [Mw], HARMLESS | FPU),
        op!("ficom %Mw", FICOM, [ModRm], [Mw], HARMLESS | FPU),
        op!("ficomp %Mw", FICOMP, [ModRm], [Mw], HARMLESS | FPU),
        op!("fisub %Mw", FISUB, [ModRm], [Mw], HARMLESS | FPU),
        op!("fisubr %Mw", FISUBR, [ModRm], [Mw], HARMLESS | FPU),
        op!("fidiv %Mw", FIDIV, [ModRm], [Mw], HARMLESS | FPU),
        op!("fidivr %Mw", FIDIVR, [ModRm], [Mw], HARMLESS | FPU),
    ],
    [
        op!("fild %Mw", FILD, [ModRm], [Mw], HARMLESS | FPU),
        op!("fisttp %Mw", FISTTP, [ModRm], [Mw], HARMLESS | FPU),
        op!("fist %Mw", FIST, [ModRm], [Mw], HARMLESS | FPU),
        op!("fistp %Mw", FISTP, [ModRm], [Mw], HARMLESS | FPU),
        op!("fbld %Mt", FBLD, [ModRm], [Mt], HARMLESS | FPU),
        op!("fild %Mq", FILD, [ModRm], [Mq], HARMLESS | FPU),
        op!("fbstp %Mt", FBSTP, [ModRm], [Mt], HARMLESS | FPU),
        op!("fistp %Mq", FISTP, [ModRm], [Mq], HARMLESS | FPU),
    ],
];

const NONE: [Descriptor; 8] = [INVALID_NOMODRM; 8];

/// `op st0, sti`
const fn to_st0(template: &'static str, opcode: Opcode) -> [Descriptor; 8] {
    let mut row = NONE;
    let mut i = 0;
    while i < 8 {
        row[i] = Descriptor::new(
            template,
            opcode,
            &[Parse::FixedReg, Parse::FixedReg],
            &[param::ST0, param::st(i as u8)],
            HARMLESS | FPU,
        );
        i += 1;
    }
    row
}

/// `op sti, st0`
const fn from_st0(template: &'static str, opcode: Opcode) -> [Descriptor; 8] {
    let mut row = NONE;
    let mut i = 0;
    while i < 8 {
        row[i] = Descriptor::new(
            template,
            opcode,
            &[Parse::FixedReg, Parse::FixedReg],
            &[param::st(i as u8), param::ST0],
            HARMLESS | FPU,
        );
        i += 1;
    }
    row
}

/// `op sti`
const fn sti(template: &'static str, opcode: Opcode) -> [Descriptor; 8] {
    let mut row = NONE;
    let mut i = 0;
    while i < 8 {
        row[i] = Descriptor::new(
            template,
            opcode,
            &[Parse::FixedReg],
            &[param::st(i as u8)],
            HARMLESS | FPU,
        );
        i += 1;
    }
    row
}

const fn bare(template: &'static str, opcode: Opcode) -> Descriptor {
    Descriptor::new(template, opcode, &[], &[], HARMLESS | FPU)
}

const fn join(parts: [[Descriptor; 8]; 8]) -> [Descriptor; 64] {
    let mut out = [INVALID_NOMODRM; 64];
    let mut i = 0;
    while i < 64 {
        out[i] = parts[i / 8][i % 8];
        i += 1;
    }
    out
}

const N: Descriptor = INVALID_NOMODRM;

/// x87 escapes `d8`..`df` with `mod == 3`, indexed by `[opcode - 0xd8][modrm - 0xc0]`.
pub(crate) static FPU_HIGH: [[Descriptor; 64]; 8] = [
    join([
        to_st0("fadd %ST0,%STi", opcode::FADD),
        to_st0("fmul %ST0,%STi", opcode::FMUL),
        to_st0("fcom %ST0,%STi", opcode::FCOM),
        to_st0("fcomp %ST0,%STi", opcode::FCOMP),
        to_st0("fsub %ST0,%STi", opcode::FSUB),
        to_st0("fsubr %ST0,%STi", opcode::FSUBR),
        to_st0("fdiv %ST0,%STi", opcode::FDIV),
        to_st0("fdivr %ST0,%STi", opcode::FDIVR),
    ]),
    join([
        sti("fld %STi", opcode::FLD),
        sti("fxch %STi", opcode::FXCH),
        [bare("fnop", opcode::FNOP), N, N, N, N, N, N, N],
        NONE,
        [
            bare("fchs", opcode::FCHS),
            bare("fabs", opcode::FABS),
            N,
            N,
            bare("ftst", opcode::FTST),
            bare("fxam", opcode::FXAM),
            N,
            N,
        ],
        [
            bare("fld1", opcode::FLD1),
            bare("fldl2t", opcode::FLDL2T),
            bare("fldl2e", opcode::FLDL2E),
            bare("fldpi", opcode::FLDPI),
            bare("fldlg2", opcode::FLDLG2),
            bare("fldln2", opcode::FLDLN2),
            bare("fldz", opcode::FLDZ),
            N,
        ],
        [
            bare("f2xm1", opcode::F2XM1),
            bare("fyl2x", opcode::FYL2X),
            bare("fptan", opcode::FPTAN),
            bare("fpatan", opcode::FPATAN),
            bare("fxtract", opcode::FXTRACT),
            bare("fprem1", opcode::FPREM1),
            bare("fdecstp", opcode::FDECSTP),
            bare("fincstp", opcode::FINCSTP),
        ],
        [
            bare("fprem", opcode::FPREM),
            bare("fyl2xp1", opcode::FYL2XP1),
            bare("fsqrt", opcode::FSQRT),
            bare("fsincos", opcode::FSINCOS),
            bare("frndint", opcode::FRNDINT),
            bare("fscale", opcode::FSCALE),
            bare("fsin", opcode::FSIN),
            bare("fcos", opcode::FCOS),
        ],
    ]),
    join([
        to_st0("fcmovb %ST0,%STi", opcode::FCMOVB),
        to_st0("fcmove %ST0,%STi", opcode::FCMOVE),
        to_st0("fcmovbe %ST0,%STi", opcode::FCMOVBE),
        to_st0("fcmovu %ST0,%STi", opcode::FCMOVU),
        NONE,
        [N, bare("fucompp", opcode::FUCOMPP), N, N, N, N, N, N],
        NONE,
        NONE,
    ]),
    join([
        to_st0("fcmovnb %ST0,%STi", opcode::FCMOVNB),
        to_st0("fcmovne %ST0,%STi", opcode::FCMOVNE),
        to_st0("fcmovnbe %ST0,%STi", opcode::FCMOVNBE),
        to_st0("fcmovnu %ST0,%STi", opcode::FCMOVNU),
        [
            N,
            N,
            bare("fnclex", opcode::FNCLEX),
            bare("fninit", opcode::FNINIT),
            N,
            N,
            N,
            N,
        ],
        to_st0("fucomi %ST0,%STi", opcode::FUCOMI),
        to_st0("fcomi %ST0,%STi", opcode::FCOMI),
        NONE,
    ]),
    join([
        from_st0("fadd %STi,%ST0", opcode::FADD),
        from_st0("fmul %STi,%ST0", opcode::FMUL),
        NONE,
        NONE,
        from_st0("fsubr %STi,%ST0", opcode::FSUBR),
        from_st0("fsub %STi,%ST0", opcode::FSUB),
        from_st0("fdivr %STi,%ST0", opcode::FDIVR),
        from_st0("fdiv %STi,%ST0", opcode::FDIV),
    ]),
    join([
        sti("ffree %STi", opcode::FFREE),
        NONE,
        sti("fst %STi", opcode::FST),
        sti("fstp %STi", opcode::FSTP),
        sti("fucom %STi", opcode::FUCOM),
        sti("fucomp %STi", opcode::FUCOMP),
        NONE,
        NONE,
    ]),
    join([
        from_st0("faddp %STi,%ST0", opcode::FADDP),
        from_st0("fmulp %STi,%ST0", opcode::FMULP),
        NONE,
        [N, bare("fcompp", opcode::FCOMPP), N, N, N, N, N, N],
        from_st0("fsubrp %STi,%ST0", opcode::FSUBRP),
        from_st0("fsubp %STi,%ST0", opcode::FSUBP),
        from_st0("fdivrp %STi,%ST0", opcode::FDIVRP),
        from_st0("fdivp %STi,%ST0", opcode::FDIVP),
    ]),
    join([
        NONE,
        NONE,
        NONE,
        NONE,
        [
            Descriptor::new(
                "fnstsw %AX",
                opcode::FNSTSW,
                &[Parse::FixedReg],
                &[param::AX],
                HARMLESS | FPU,
            ),
            N,
            N,
            N,
            N,
            N,
            N,
            N,
        ],
        to_st0("fucomip %ST0,%STi", opcode::FUCOMIP),
        to_st0("fcomip %ST0,%STi", opcode::FCOMIP),
        NONE,
    ]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_forms() {
        // dc e9
        let desc = &FPU_HIGH[4][0x29];
        assert_eq!(desc.mnemonic(), "fsub");
        assert_eq!(desc.param(0), param::st(1));
        assert_eq!(desc.param(1), param::ST0);
        // df e0
        assert_eq!(FPU_HIGH[7][0x20].mnemonic(), "fnstsw");
        assert!(FPU_HIGH[7][0x21].is_invalid());
    }

    #[test]
    fn memory_forms() {
        assert_eq!(FPU_LOW[1][5].param(0), param::Mw);
        assert_eq!(FPU_LOW[7][5].param(0), param::Mq);
        assert!(FPU_LOW[3][4].is_invalid());
    }
}

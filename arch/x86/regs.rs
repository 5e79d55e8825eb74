use crate::operand::{Reg, RegClass};

#[rustfmt::skip]
const GEN8_NAME: [&str; 20] = [
    "al",   "cl",   "dl",    "bl",    "spl",   "bpl",   "sil",   "dil",
    "r8b",  "r9b",  "r10b",  "r11b",  "r12b",  "r13b",  "r14b",  "r15b",
    "ah",   "ch",   "dh",    "bh",
];

#[rustfmt::skip]
const GEN16_NAME: [&str; 16] = [
    "ax",   "cx",   "dx",    "bx",    "sp",    "bp",    "si",    "di",
    "r8w",  "r9w",  "r10w",  "r11w",  "r12w",  "r13w",  "r14w",  "r15w",
];

#[rustfmt::skip]
const GEN32_NAME: [&str; 16] = [
    "eax",  "ecx",  "edx",   "ebx",   "esp",   "ebp",   "esi",   "edi",
    "r8d",  "r9d",  "r10d",  "r11d",  "r12d",  "r13d",  "r14d",  "r15d",
];

#[rustfmt::skip]
const GEN64_NAME: [&str; 16] = [
    "rax",  "rcx",  "rdx",   "rbx",   "rsp",   "rbp",   "rsi",   "rdi",
    "r8",   "r9",   "r10",   "r11",   "r12",   "r13",   "r14",   "r15",
];

const SEG_NAME: [&str; 6] = ["es", "cs", "ss", "ds", "fs", "gs"];

#[rustfmt::skip]
const CR_NAME: [&str; 16] = [
    "cr0",  "cr1",  "cr2",   "cr3",   "cr4",   "cr5",   "cr6",   "cr7",
    "cr8",  "cr9",  "cr10",  "cr11",  "cr12",  "cr13",  "cr14",  "cr15",
];

#[rustfmt::skip]
const DBG_NAME: [&str; 16] = [
    "dr0",  "dr1",  "dr2",   "dr3",   "dr4",   "dr5",   "dr6",   "dr7",
    "dr8",  "dr9",  "dr10",  "dr11",  "dr12",  "dr13",  "dr14",  "dr15",
];

const TEST_NAME: [&str; 8] = ["tr0", "tr1", "tr2", "tr3", "tr4", "tr5", "tr6", "tr7"];

const FP_NAME: [&str; 8] = ["st0", "st1", "st2", "st3", "st4", "st5", "st6", "st7"];

const MMX_NAME: [&str; 8] = ["mm0", "mm1", "mm2", "mm3", "mm4", "mm5", "mm6", "mm7"];

#[rustfmt::skip]
const XMM_NAME: [&str; 16] = [
    "xmm0", "xmm1", "xmm2",  "xmm3",  "xmm4",  "xmm5",  "xmm6",  "xmm7",
    "xmm8", "xmm9", "xmm10", "xmm11", "xmm12", "xmm13", "xmm14", "xmm15",
];

#[rustfmt::skip]
const YMM_NAME: [&str; 16] = [
    "ymm0", "ymm1", "ymm2",  "ymm3",  "ymm4",  "ymm5",  "ymm6",  "ymm7",
    "ymm8", "ymm9", "ymm10", "ymm11", "ymm12", "ymm13", "ymm14", "ymm15",
];

pub(crate) fn register_name(reg: Reg) -> &'static str {
    let names: &[&str] = match reg.class() {
        RegClass::Gen8 => &GEN8_NAME,
        RegClass::Gen16 => &GEN16_NAME,
        RegClass::Gen32 => &GEN32_NAME,
        RegClass::Gen64 => &GEN64_NAME,
        RegClass::Seg => &SEG_NAME,
        RegClass::Cr => &CR_NAME,
        RegClass::Dbg => &DBG_NAME,
        RegClass::Test => &TEST_NAME,
        RegClass::Fp => &FP_NAME,
        RegClass::Mmx => &MMX_NAME,
        RegClass::Xmm => &XMM_NAME,
        RegClass::Ymm => &YMM_NAME,
    };
    names.get(reg.index() as usize).copied().unwrap_or("(bad)")
}

pub(crate) fn segment_name(index: u8) -> &'static str {
    SEG_NAME.get(index as usize).copied().unwrap_or("(bad)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(register_name(Reg::new(RegClass::Gen8, 4)), "spl");
        assert_eq!(register_name(Reg::new(RegClass::Gen8, 16)), "ah");
        assert_eq!(register_name(Reg::new(RegClass::Gen64, 13)), "r13");
        assert_eq!(register_name(Reg::new(RegClass::Cr, 8)), "cr8");
        assert_eq!(register_name(Reg::new(RegClass::Ymm, 15)), "ymm15");
        assert_eq!(register_name(Reg::new(RegClass::Seg, 7)), "(bad)");
        assert_eq!(segment_name(4), "fs");
    }
}

use crate::opcode::{op, Descriptor, INVALID, INVALID_NOMODRM};

/// `80`..`83`, indexed by `(opcode - 0x80) * 8 + reg`.
pub(crate) static GROUP1: [Descriptor; 32] = [
    // 0x80
    op!("add %Eb,%Ib", ADD, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    op!("or %Eb,%Ib", OR, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    op!("adc %Eb,%Ib", ADC, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    op!("sbb %Eb,%Ib", SBB, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    op!("and %Eb,%Ib", AND, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    op!("sub %Eb,%Ib", SUB, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    op!("xor %Eb,%Ib", XOR, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    op!("cmp %Eb,%Ib", CMP, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    // 0x81
    op!("add %Ev,%Iz", ADD, [ModRm, ImmZ], [Ev, Iz], HARMLESS),
    op!("or %Ev,%Iz", OR, [ModRm, ImmZ], [Ev, Iz], HARMLESS),
    op!("adc %Ev,%Iz", ADC, [ModRm, ImmZ], [Ev, Iz], HARMLESS),
    op!("sbb %Ev,%Iz", SBB, [ModRm, ImmZ], [Ev, Iz], HARMLESS),
    op!("and %Ev,%Iz", AND, [ModRm, ImmZ], [Ev, Iz], HARMLESS),
    op!("sub %Ev,%Iz", SUB, [ModRm, ImmZ], [Ev, Iz], HARMLESS),
    op!("xor %Ev,%Iz", XOR, [ModRm, ImmZ], [Ev, Iz], HARMLESS),
    op!("cmp %Ev,%Iz", CMP, [ModRm, ImmZ], [Ev, Iz], HARMLESS),
    // 0x82
    op!("add %Eb,%Ib", ADD, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    op!("or %Eb,%Ib", OR, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    op!("adc %Eb,%Ib", ADC, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    op!("sbb %Eb,%Ib", SBB, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    op!("and %Eb,%Ib", AND, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    op!("sub %Eb,%Ib", SUB, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    op!("xor %Eb,%Ib", XOR, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    op!("cmp %Eb,%Ib", CMP, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    // 0x83
    op!("add %Ev,%Ib", ADD, [ModRm, ImmByteSx], [Ev, Ib], HARMLESS),
    op!("or %Ev,%Ib", OR, [ModRm, ImmByteSx], [Ev, Ib], HARMLESS),
    op!("adc %Ev,%Ib", ADC, [ModRm, ImmByteSx], [Ev, Ib], HARMLESS),
    op!("sbb %Ev,%Ib", SBB, [ModRm, ImmByteSx], [Ev, Ib], HARMLESS),
    op!("and %Ev,%Ib", AND, [ModRm, ImmByteSx], [Ev, Ib], HARMLESS),
    op!("sub %Ev,%Ib", SUB, [ModRm, ImmByteSx], [Ev, Ib], HARMLESS),
    op!("xor %Ev,%Ib", XOR, [ModRm, ImmByteSx], [Ev, Ib], HARMLESS),
    op!("cmp %Ev,%Ib", CMP, [ModRm, ImmByteSx], [Ev, Ib], HARMLESS),
];

/// Rows for `c0`, `c1`, `d0`, `d1`, `d2` and `d3`.
pub(crate) static GROUP2: [Descriptor; 48] = [
    // 0xC0
    op!("rol %Eb,%Ib", ROL, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    op!("ror %Eb,%Ib", ROR, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    op!("rcl %Eb,%Ib", RCL, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    op!("rcr %Eb,%Ib", RCR, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    op!("shl %Eb,%Ib", SHL, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    op!("shr %Eb,%Ib", SHR, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    INVALID,
    op!("sar %Eb,%Ib", SAR, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    // 0xC1
    op!("rol %Ev,%Ib", ROL, [ModRm, ImmByte], [Ev, Ib], HARMLESS),
    op!("ror %Ev,%Ib", ROR, [ModRm, ImmByte], [Ev, Ib], HARMLESS),
    op!("rcl %Ev,%Ib", RCL, [ModRm, ImmByte], [Ev, Ib], HARMLESS),
    op!("rcr %Ev,%Ib", RCR, [ModRm, ImmByte], [Ev, Ib], HARMLESS),
    op!("shl %Ev,%Ib", SHL, [ModRm, ImmByte], [Ev, Ib], HARMLESS),
    op!("shr %Ev,%Ib", SHR, [ModRm, ImmByte], [Ev, Ib], HARMLESS),
    INVALID,
    op!("sar %Ev,%Ib", SAR, [ModRm, ImmByte], [Ev, Ib], HARMLESS),
    // 0xD0
    op!("rol %Eb,1", ROL, [ModRm], [Eb], HARMLESS),
    op!("ror %Eb,1", ROR, [ModRm], [Eb], HARMLESS),
    op!("rcl %Eb,1", RCL, [ModRm], [Eb], HARMLESS),
    op!("rcr %Eb,1", RCR, [ModRm], [Eb], HARMLESS),
    op!("shl %Eb,1", SHL, [ModRm], [Eb], HARMLESS),
    op!("shr %Eb,1", SHR, [ModRm], [Eb], HARMLESS),
    INVALID,
    op!("sar %Eb,1", SAR, [ModRm], [Eb], HARMLESS),
    // 0xD1
    op!("rol %Ev,1", ROL, [ModRm], [Ev], HARMLESS),
    op!("ror %Ev,1", ROR, [ModRm], [Ev], HARMLESS),
    op!("rcl %Ev,1", RCL, [ModRm], [Ev], HARMLESS),
    op!("rcr %Ev,1", RCR, [ModRm], [Ev], HARMLESS),
    op!("shl %Ev,1", SHL, [ModRm], [Ev], HARMLESS),
    op!("shr %Ev,1", SHR, [ModRm], [Ev], HARMLESS),
    INVALID,
    op!("sar %Ev,1", SAR, [ModRm], [Ev], HARMLESS),
    // 0xD2
    op!("rol %Eb,%CL", ROL, [ModRm, FixedReg], [Eb, CL], HARMLESS),
    op!("ror %Eb,%CL", ROR, [ModRm, FixedReg], [Eb, CL], HARMLESS),
    op!("rcl %Eb,%CL", RCL, [ModRm, FixedReg], [Eb, CL], HARMLESS),
    op!("rcr %Eb,%CL", RCR, [ModRm, FixedReg], [Eb, CL], HARMLESS),
    op!("shl %Eb,%CL", SHL, [ModRm, FixedReg], [Eb, CL], HARMLESS),
    op!("shr %Eb,%CL", SHR, [ModRm, FixedReg], [Eb, CL], HARMLESS),
    INVALID,
    op!("sar %Eb,%CL", SAR, [ModRm, FixedReg], [Eb, CL], HARMLESS),
    // 0xD3
    op!("rol %Ev,%CL", ROL, [ModRm, FixedReg], [Ev, CL], HARMLESS),
    op!("ror %Ev,%CL", ROR, [ModRm, FixedReg], [Ev, CL], HARMLESS),
    op!("rcl %Ev,%CL", RCL, [ModRm, FixedReg], [Ev, CL], HARMLESS),
    op!("rcr %Ev,%CL", RCR, [ModRm, FixedReg], [Ev, CL], HARMLESS),
    op!("shl %Ev,%CL", SHL, [ModRm, FixedReg], [Ev, CL], HARMLESS),
    op!("shr %Ev,%CL", SHR, [ModRm, FixedReg], [Ev, CL], HARMLESS),
    INVALID,
    op!("sar %Ev,%CL", SAR, [ModRm, FixedReg], [Ev, CL], HARMLESS),
];

/// `f6` and `f7`, indexed by `(opcode - 0xf6) * 8 + reg`.
pub(crate) static GROUP3: [Descriptor; 16] = [
    op!("test %Eb,%Ib", TEST, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    op!("test %Eb,%Ib", TEST, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    op!("not %Eb", NOT, [ModRm], [Eb], HARMLESS),
    op!("neg %Eb", NEG, [ModRm], [Eb], HARMLESS),
    op!("mul %Eb", MUL, [ModRm], [Eb], HARMLESS),
    op!("imul %Eb", IMUL, [ModRm], [Eb], HARMLESS),
    op!("div %Eb", DIV, [ModRm], [Eb], HARMLESS),
    op!("idiv %Eb", IDIV, [ModRm], [Eb], HARMLESS),
    op!("test %Ev,%Iz", TEST, [ModRm, ImmZ], [Ev, Iz], HARMLESS),
    op!("test %Ev,%Iz", TEST, [ModRm, ImmZ], [Ev, Iz], HARMLESS),
    op!("not %Ev", NOT, [ModRm], [Ev], HARMLESS),
    op!("neg %Ev", NEG, [ModRm], [Ev], HARMLESS),
    op!("mul %Ev", MUL, [ModRm], [Ev], HARMLESS),
    op!("imul %Ev", IMUL, [ModRm], [Ev], HARMLESS),
    op!("div %Ev", DIV, [ModRm], [Ev], HARMLESS),
    op!("idiv %Ev", IDIV, [ModRm], [Ev], HARMLESS),
];

/// `fe`
pub(crate) static GROUP4: [Descriptor; 8] = [
    op!("inc %Eb", INC, [ModRm], [Eb], HARMLESS),
    op!("dec %Eb", DEC, [ModRm], [Eb], HARMLESS),
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
];

/// `ff`
pub(crate) static GROUP5: [Descriptor; 8] = [
    op!("inc %Ev", INC, [ModRm], [Ev], HARMLESS),
    op!("dec %Ev", DEC, [ModRm], [Ev], HARMLESS),
    op!("call %Ev", CALL, [ModRm], [Ev], CONTROLFLOW | UNCOND_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("call %Ep", CALL, [ModRm], [Ep], CONTROLFLOW | UNCOND_CONTROLFLOW),
    op!("jmp %Ev", JMP, [ModRm], [Ev], CONTROLFLOW | UNCOND_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jmp %Ep", JMP, [ModRm], [Ep], CONTROLFLOW | UNCOND_CONTROLFLOW),
    op!("push %Ev", PUSH, [ModRm], [Ev], HARMLESS | DEFAULT_64_OP_SIZE),
    INVALID,
];

/// `0f 00`
pub(crate) static GROUP6: [Descriptor; 8] = [
    op!("sldt %Ew", SLDT, [ModRm], [Ew], DANGEROUS),
    op!("str %Ew", STR, [ModRm], [Ew], DANGEROUS),
    op!("lldt %Ew", LLDT, [ModRm], [Ew], PRIVILEGED),
    op!("ltr %Ew", LTR, [ModRm], [Ew], PRIVILEGED),
    op!("verr %Ew", VERR, [ModRm], [Ew], DANGEROUS),
    op!("verw %Ew", VERW, [ModRm], [Ew], DANGEROUS),
    INVALID,
    INVALID,
];

/// `0f 01` with a memory operand.
pub(crate) static GROUP7_MEM: [Descriptor; 8] = [
    op!("sgdt %Ms", SGDT, [ModRm], [Ms], DANGEROUS),
    op!("sidt %Ms", SIDT, [ModRm], [Ms], DANGEROUS),
    op!("lgdt %Ms", LGDT, [ModRm], [Ms], PRIVILEGED),
    op!("lidt %Ms", LIDT, [ModRm], [Ms], PRIVILEGED),
    op!("smsw %Ew", SMSW, [ModRm], [Ew], DANGEROUS),
    INVALID,
    op!("lmsw %Ew", LMSW, [ModRm], [Ew], PRIVILEGED),
    op!("invlpg %Mb", INVLPG, [ModRm], [Mb], PRIVILEGED),
];

const SMSW_REG: Descriptor = op!("smsw %Rv", SMSW, [ModRm], [Rv], DANGEROUS);
const LMSW_REG: Descriptor = op!("lmsw %Ew", LMSW, [ModRm], [Ew], PRIVILEGED);

/// `0f 01` with `mod == 3`, indexed by `[reg][rm]`.
pub(crate) static GROUP7_MOD11: [[Descriptor; 8]; 8] = [
    [
        INVALID_NOMODRM,
        op!("vmcall", VMCALL, [], [], PRIVILEGED_NOTRAP),
        op!("vmlaunch", VMLAUNCH, [], [], PRIVILEGED_NOTRAP),
        op!("vmresume", VMRESUME, [], [], PRIVILEGED_NOTRAP),
        op!("vmxoff", VMXOFF, [], [], PRIVILEGED_NOTRAP),
        INVALID_NOMODRM,
        INVALID_NOMODRM,
        INVALID_NOMODRM,
    ],
    [
        op!("monitor", MONITOR, [], [], PRIVILEGED),
        op!("mwait", MWAIT, [], [], PRIVILEGED),
        op!("clac", CLAC, [], [], PRIVILEGED),
        op!("stac", STAC, [], [], PRIVILEGED),
        INVALID_NOMODRM,
        INVALID_NOMODRM,
        INVALID_NOMODRM,
        INVALID_NOMODRM,
    ],
    [
        op!("xgetbv", XGETBV, [], [], HARMLESS),
        op!("xsetbv", XSETBV, [], [], PRIVILEGED),
        INVALID_NOMODRM,
        INVALID_NOMODRM,
        op!("vmfunc", VMFUNC, [], [], PRIVILEGED_NOTRAP),
        op!("xend", XEND, [], [], HARMLESS),
        op!("xtest", XTEST, [], [], HARMLESS),
        INVALID_NOMODRM,
    ],
    [
        op!("vmrun", VMRUN, [], [], PRIVILEGED_NOTRAP),
        op!("vmmcall", VMMCALL, [], [], PRIVILEGED_NOTRAP),
        op!("vmload", VMLOAD, [], [], PRIVILEGED_NOTRAP),
        op!("vmsave", VMSAVE, [], [], PRIVILEGED_NOTRAP),
        op!("stgi", STGI, [], [], PRIVILEGED_NOTRAP),
        op!("clgi", CLGI, [], [], PRIVILEGED_NOTRAP),
        op!("skinit", SKINIT, [], [], PRIVILEGED_NOTRAP),
        op!("invlpga", INVLPGA, [], [], PRIVILEGED_NOTRAP),
    ],
    [SMSW_REG, SMSW_REG, SMSW_REG, SMSW_REG, SMSW_REG, SMSW_REG, SMSW_REG, SMSW_REG],
    [
        INVALID_NOMODRM,
        INVALID_NOMODRM,
        INVALID_NOMODRM,
        INVALID_NOMODRM,
        INVALID_NOMODRM,
        INVALID_NOMODRM,
        INVALID_NOMODRM,
        INVALID_NOMODRM,
    ],
    [LMSW_REG, LMSW_REG, LMSW_REG, LMSW_REG, LMSW_REG, LMSW_REG, LMSW_REG, LMSW_REG],
    [
        op!("swapgs", SWAPGS, [], [], PRIVILEGED | ONLY_64),
        op!("rdtscp", RDTSCP, [], [], HARMLESS),
        INVALID_NOMODRM,
        INVALID_NOMODRM,
        INVALID_NOMODRM,
        INVALID_NOMODRM,
        INVALID_NOMODRM,
        INVALID_NOMODRM,
    ],
];

/// `0f ba`
pub(crate) static GROUP8: [Descriptor; 8] = [
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    op!("bt %Ev,%Ib", BT, [ModRm, ImmByte], [Ev, Ib], HARMLESS),
    op!("bts %Ev,%Ib", BTS, [ModRm, ImmByte], [Ev, Ib], HARMLESS),
    op!("btr %Ev,%Ib", BTR, [ModRm, ImmByte], [Ev, Ib], HARMLESS),
    op!("btc %Ev,%Ib", BTC, [ModRm, ImmByte], [Ev, Ib], HARMLESS),
];

/// `0f c7` with a memory operand.
pub(crate) static GROUP9_MEM: [Descriptor; 8] = [
    INVALID,
    op!("cmpxchg8b %Mq", CMPXCHG8B, [ModRm], [Mq], HARMLESS),
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    op!("vmptrld %Mq", VMPTRLD, [ModRm], [Mq], DANGEROUS),
    op!("vmptrst %Mq", VMPTRST, [ModRm], [Mq], DANGEROUS),
];

/// `0f c7` with `mod == 3`.
pub(crate) static GROUP9_MOD11: [Descriptor; 8] = [
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    op!("rdrand %Rv", RDRAND, [ModRm], [Rv], HARMLESS),
    op!("rdseed %Rv", RDSEED, [ModRm], [Rv], HARMLESS),
];

const UD1: Descriptor = op!("ud1 %Gv,%Ev", UD1, [ModRm, UseModRm], [Gv, Ev], ILLEGAL);

/// `0f b9`
pub(crate) static GROUP10: [Descriptor; 8] = [UD1, UD1, UD1, UD1, UD1, UD1, UD1, UD1];

/// `0f 71`, the second half is selected by the operand size prefix.
pub(crate) static GROUP12: [Descriptor; 16] = [
    INVALID,
    INVALID,
    op!("psrlw %Nq,%Ib", PSRLW, [ModRm, ImmByte], [Nq, Ib], HARMLESS | MMX),
    INVALID,
    op!("psraw %Nq,%Ib", PSRAW, [ModRm, ImmByte], [Nq, Ib], HARMLESS | MMX),
    INVALID,
    op!("psllw %Nq,%Ib", PSLLW, [ModRm, ImmByte], [Nq, Ib], HARMLESS | MMX),
    INVALID,
    INVALID,
    INVALID,
    op!("psrlw %Udq,%Ib", PSRLW, [ModRm, ImmByte], [Udq, Ib], HARMLESS | SSE),
    INVALID,
    op!("psraw %Udq,%Ib", PSRAW, [ModRm, ImmByte], [Udq, Ib], HARMLESS | SSE),
    INVALID,
    op!("psllw %Udq,%Ib", PSLLW, [ModRm, ImmByte], [Udq, Ib], HARMLESS | SSE),
    INVALID,
];

/// `0f 72`
pub(crate) static GROUP13: [Descriptor; 16] = [
    INVALID,
    INVALID,
    op!("psrld %Nq,%Ib", PSRLD, [ModRm, ImmByte], [Nq, Ib], HARMLESS | MMX),
    INVALID,
    op!("psrad %Nq,%Ib", PSRAD, [ModRm, ImmByte], [Nq, Ib], HARMLESS | MMX),
    INVALID,
    op!("pslld %Nq,%Ib", PSLLD, [ModRm, ImmByte], [Nq, Ib], HARMLESS | MMX),
    INVALID,
    INVALID,
    INVALID,
    op!("psrld %Udq,%Ib", PSRLD, [ModRm, ImmByte], [Udq, Ib], HARMLESS | SSE),
    INVALID,
    op!("psrad %Udq,%Ib", PSRAD, [ModRm, ImmByte], [Udq, Ib], HARMLESS | SSE),
    INVALID,
    op!("pslld %Udq,%Ib", PSLLD, [ModRm, ImmByte], [Udq, Ib], HARMLESS | SSE),
    INVALID,
];

/// `0f 73`
pub(crate) static GROUP14: [Descriptor; 16] = [
    INVALID,
    INVALID,
    op!("psrlq %Nq,%Ib", PSRLQ, [ModRm, ImmByte], [Nq, Ib], HARMLESS | MMX),
    INVALID,
    INVALID,
    INVALID,
    op!("psllq %Nq,%Ib", PSLLQ, [ModRm, ImmByte], [Nq, Ib], HARMLESS | MMX),
    INVALID,
    INVALID,
    INVALID,
    op!("psrlq %Udq,%Ib", PSRLQ, [ModRm, ImmByte], [Udq, Ib], HARMLESS | SSE),
    op!("psrldq %Udq,%Ib", PSRLDQ, [ModRm, ImmByte], [Udq, Ib], HARMLESS | SSE),
    INVALID,
    INVALID,
    op!("psllq %Udq,%Ib", PSLLQ, [ModRm, ImmByte], [Udq, Ib], HARMLESS | SSE),
    op!("pslldq %Udq,%Ib", PSLLDQ, [ModRm, ImmByte], [Udq, Ib], HARMLESS | SSE),
];

/// `0f ae` with a memory operand.
pub(crate) static GROUP15_MEM: [Descriptor; 8] = [
    op!("fxsave %M", FXSAVE, [ModRm], [M], HARMLESS),
    op!("fxrstor %M", FXRSTOR, [ModRm], [M], HARMLESS),
    op!("ldmxcsr %Md", LDMXCSR, [ModRm], [Md], HARMLESS | SSE),
    op!("stmxcsr %Md", STMXCSR, [ModRm], [Md], HARMLESS | SSE),
    op!("xsave %M", XSAVE, [ModRm], [M], HARMLESS),
    op!("xrstor %M", XRSTOR, [ModRm], [M], HARMLESS),
    op!("xsaveopt %M", XSAVEOPT, [ModRm], [M], HARMLESS),
    op!("clflush %Mb", CLFLUSH, [ModRm], [Mb], HARMLESS),
];

/// `0f ae` with `mod == 3`.
pub(crate) static GROUP15_MOD11: [Descriptor; 8] = [
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    op!("lfence", LFENCE, [ModFence], [], HARMLESS),
    op!("mfence", MFENCE, [ModFence], [], HARMLESS),
    op!("sfence", SFENCE, [ModFence], [], HARMLESS),
];

/// `0f 18`
pub(crate) static GROUP16: [Descriptor; 8] = [
    op!("prefetchnta %Mb", PREFETCHNTA, [ModRm], [Mb], HARMLESS),
    op!("prefetcht0 %Mb", PREFETCHT0, [ModRm], [Mb], HARMLESS),
    op!("prefetcht1 %Mb", PREFETCHT1, [ModRm], [Mb], HARMLESS),
    op!("prefetcht2 %Mb", PREFETCHT2, [ModRm], [Mb], HARMLESS),
    op!("nop %Ev", NOP, [ModRm], [Ev], HARMLESS),
    op!("nop %Ev", NOP, [ModRm], [Ev], HARMLESS),
    op!("nop %Ev", NOP, [ModRm], [Ev], HARMLESS),
    op!("nop %Ev", NOP, [ModRm], [Ev], HARMLESS),
];

/// VEX `0f 38 f3`, indexed by `reg << 1 | VEX.L`.
pub(crate) static GROUP17: [Descriptor; 16] = [
    INVALID,
    INVALID,
    op!("blsr %By,%Ey", BLSR, [VexDest, ModRm], [By, Ey], HARMLESS | AVX),
    INVALID,
    op!("blsmsk %By,%Ey", BLSMSK, [VexDest, ModRm], [By, Ey], HARMLESS | AVX),
    INVALID,
    op!("blsi %By,%Ey", BLSI, [VexDest, ModRm], [By, Ey], HARMLESS | AVX),
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
];

/// `90` as `nop`, `f3 90` as `pause` and `41 90` as `xchg r8, rax`.
pub(crate) static NOP_PAUSE: [Descriptor; 3] = [
    op!("nop", NOP, [], [], HARMLESS),
    op!("pause", PAUSE, [], [], HARMLESS),
    op!("xchg %eAX,%eAX", XCHG, [FixedReg, FixedReg], [eAX, eAX], HARMLESS | REXB_EXTENDS_OPREG),
];

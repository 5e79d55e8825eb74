xdis_core::define_opcodes! {
    INVALID = "(bad)",
    PREFIX_SEG = "seg",
    PREFIX_LOCK = "lock",
    PREFIX_OPSIZE = "opsize",
    PREFIX_ADDRSIZE = "addrsize",
    PREFIX_REP = "rep",
    PREFIX_REPNE = "repne",
    PREFIX_REX = "rex",
    ESCAPE = "(escape)",
    AAA = "aaa",
    AAD = "aad",
    AAM = "aam",
    AAS = "aas",
    ADC = "adc",
    ADCX = "adcx",
    ADD = "add",
    ADDPD = "addpd",
    ADDPS = "addps",
    ADDSD = "addsd",
    ADDSS = "addss",
    ADDSUBPD = "addsubpd",
    ADDSUBPS = "addsubps",
    ADOX = "adox",
    AESDEC = "aesdec",
    AESDECLAST = "aesdeclast",
    AESENC = "aesenc",
    AESENCLAST = "aesenclast",
    AESIMC = "aesimc",
    AESKEYGENASSIST = "aeskeygenassist",
    AND = "and",
    ANDN = "andn",
    ANDNPD = "andnpd",
    ANDNPS = "andnps",
    ANDPD = "andpd",
    ANDPS = "andps",
    ARPL = "arpl",
    BEXTR = "bextr",
    BLENDPD = "blendpd",
    BLENDPS = "blendps",
    BLENDVPD = "blendvpd",
    BLENDVPS = "blendvps",
    BLSI = "blsi",
    BLSMSK = "blsmsk",
    BLSR = "blsr",
    BOUND = "bound",
    BSF = "bsf",
    BSR = "bsr",
    BSWAP = "bswap",
    BT = "bt",
    BTC = "btc",
    BTR = "btr",
    BTS = "bts",
    BZHI = "bzhi",
    CALL = "call",
    CDQ = "cdq",
    CLAC = "clac",
    CLC = "clc",
    CLD = "cld",
    CLFLUSH = "clflush",
    CLGI = "clgi",
    CLI = "cli",
    CLTS = "clts",
    CMC = "cmc",
    CMOVA = "cmova",
    CMOVAE = "cmovae",
    CMOVB = "cmovb",
    CMOVBE = "cmovbe",
    CMOVE = "cmove",
    CMOVG = "cmovg",
    CMOVGE = "cmovge",
    CMOVL = "cmovl",
    CMOVLE = "cmovle",
    CMOVNE = "cmovne",
    CMOVNO = "cmovno",
    CMOVNP = "cmovnp",
    CMOVNS = "cmovns",
    CMOVO = "cmovo",
    CMOVP = "cmovp",
    CMOVS = "cmovs",
    CMP = "cmp",
    CMPPD = "cmppd",
    CMPPS = "cmpps",
    CMPSB = "cmpsb",
    CMPSD_SSE = "cmpsd",
    CMPSS = "cmpss",
    CMPSWD = "cmpsw",
    CMPXCHG = "cmpxchg",
    CMPXCHG8B = "cmpxchg8b",
    COMISD = "comisd",
    COMISS = "comiss",
    CPUID = "cpuid",
    CRC32 = "crc32",
    CVTDQ2PD = "cvtdq2pd",
    CVTDQ2PS = "cvtdq2ps",
    CVTPD2DQ = "cvtpd2dq",
    CVTPD2PI = "cvtpd2pi",
    CVTPD2PS = "cvtpd2ps",
    CVTPI2PD = "cvtpi2pd",
    CVTPI2PS = "cvtpi2ps",
    CVTPS2DQ = "cvtps2dq",
    CVTPS2PD = "cvtps2pd",
    CVTPS2PI = "cvtps2pi",
    CVTSD2SI = "cvtsd2si",
    CVTSD2SS = "cvtsd2ss",
    CVTSI2SD = "cvtsi2sd",
    CVTSI2SS = "cvtsi2ss",
    CVTSS2SD = "cvtss2sd",
    CVTSS2SI = "cvtss2si",
    CVTTPD2DQ = "cvttpd2dq",
    CVTTPD2PI = "cvttpd2pi",
    CVTTPS2DQ = "cvttps2dq",
    CVTTPS2PI = "cvttps2pi",
    CVTTSD2SI = "cvttsd2si",
    CVTTSS2SI = "cvttss2si",
    CWDE = "cwde",
    DAA = "daa",
    DAS = "das",
    DEC = "dec",
    DIV = "div",
    DIVPD = "divpd",
    DIVPS = "divps",
    DIVSD = "divsd",
    DIVSS = "divss",
    DPPD = "dppd",
    DPPS = "dpps",
    EMMS = "emms",
    ENTER = "enter",
    EXTRACTPS = "extractps",
    F2XM1 = "f2xm1",
    FABS = "fabs",
    FADD = "fadd",
    FADDP = "faddp",
    FBLD = "fbld",
    FBSTP = "fbstp",
    FCHS = "fchs",
    FCMOVB = "fcmovb",
    FCMOVBE = "fcmovbe",
    FCMOVE = "fcmove",
    FCMOVNB = "fcmovnb",
    FCMOVNBE = "fcmovnbe",
    FCMOVNE = "fcmovne",
    FCMOVNU = "fcmovnu",
    FCMOVU = "fcmovu",
    FCOM = "fcom",
    FCOMI = "fcomi",
    FCOMIP = "fcomip",
    FCOMP = "fcomp",
    FCOMPP = "fcompp",
    FCOS = "fcos",
    FDECSTP = "fdecstp",
    FDIV = "fdiv",
    FDIVP = "fdivp",
    FDIVR = "fdivr",
    FDIVRP = "fdivrp",
    FEMMS = "femms",
    FFREE = "ffree",
    FIADD = "fiadd",
    FICOM = "ficom",
    FICOMP = "ficomp",
    FIDIV = "fidiv",
    FIDIVR = "fidivr",
    FILD = "fild",
    FIMUL = "fimul",
    FINCSTP = "fincstp",
    FIST = "fist",
    FISTP = "fistp",
    FISTTP = "fisttp",
    FISUB = "fisub",
    FISUBR = "fisubr",
    FLD = "fld",
    FLD1 = "fld1",
    FLDCW = "fldcw",
    FLDENV = "fldenv",
    FLDL2E = "fldl2e",
    FLDL2T = "fldl2t",
    FLDLG2 = "fldlg2",
    FLDLN2 = "fldln2",
    FLDPI = "fldpi",
    FLDZ = "fldz",
    FMUL = "fmul",
    FMULP = "fmulp",
    FNCLEX = "fnclex",
    FNINIT = "fninit",
    FNOP = "fnop",
    FNSAVE = "fnsave",
    FNSTCW = "fnstcw",
    FNSTENV = "fnstenv",
    FNSTSW = "fnstsw",
    FPATAN = "fpatan",
    FPREM = "fprem",
    FPREM1 = "fprem1",
    FPTAN = "fptan",
    FRNDINT = "frndint",
    FRSTOR = "frstor",
    FSCALE = "fscale",
    FSIN = "fsin",
    FSINCOS = "fsincos",
    FSQRT = "fsqrt",
    FST = "fst",
    FSTP = "fstp",
    FSUB = "fsub",
    FSUBP = "fsubp",
    FSUBR = "fsubr",
    FSUBRP = "fsubrp",
    FTST = "ftst",
    FUCOM = "fucom",
    FUCOMI = "fucomi",
    FUCOMIP = "fucomip",
    FUCOMP = "fucomp",
    FUCOMPP = "fucompp",
    FXAM = "fxam",
    FXCH = "fxch",
    FXRSTOR = "fxrstor",
    FXSAVE = "fxsave",
    FXTRACT = "fxtract",
    FYL2X = "fyl2x",
    FYL2XP1 = "fyl2xp1",
    GETSEC = "getsec",
    HADDPD = "haddpd",
    HADDPS = "haddps",
    HLT = "hlt",
    HSUBPD = "hsubpd",
    HSUBPS = "hsubps",
    IDIV = "idiv",
    IMUL = "imul",
    IN = "in",
    INC = "inc",
    INSB = "insb",
    INSERTPS = "insertps",
    INSWD = "insw",
    INT = "int",
    INT1 = "int1",
    INT3 = "int3",
    INTO = "into",
    INVD = "invd",
    INVEPT = "invept",
    INVLPG = "invlpg",
    INVLPGA = "invlpga",
    INVPCID = "invpcid",
    INVVPID = "invvpid",
    IRET = "iret",
    JA = "ja",
    JAE = "jae",
    JB = "jb",
    JBE = "jbe",
    JCXZ = "jecxz",
    JE = "je",
    JG = "jg",
    JGE = "jge",
    JL = "jl",
    JLE = "jle",
    JMP = "jmp",
    JNE = "jne",
    JNO = "jno",
    JNP = "jnp",
    JNS = "jns",
    JO = "jo",
    JP = "jp",
    JS = "js",
    LAHF = "lahf",
    LAR = "lar",
    LDDQU = "lddqu",
    LDMXCSR = "ldmxcsr",
    LDS = "lds",
    LEA = "lea",
    LEAVE = "leave",
    LES = "les",
    LFENCE = "lfence",
    LFS = "lfs",
    LGDT = "lgdt",
    LGS = "lgs",
    LIDT = "lidt",
    LLDT = "lldt",
    LMSW = "lmsw",
    LODSB = "lodsb",
    LODSWD = "lodsw",
    LOOP = "loop",
    LOOPE = "loope",
    LOOPNE = "loopne",
    LSL = "lsl",
    LSS = "lss",
    LTR = "ltr",
    LZCNT = "lzcnt",
    MASKMOVDQU = "maskmovdqu",
    MASKMOVQ = "maskmovq",
    MAXPD = "maxpd",
    MAXPS = "maxps",
    MAXSD = "maxsd",
    MAXSS = "maxss",
    MFENCE = "mfence",
    MINPD = "minpd",
    MINPS = "minps",
    MINSD = "minsd",
    MINSS = "minss",
    MONITOR = "monitor",
    MOV = "mov",
    MOVAPD = "movapd",
    MOVAPS = "movaps",
    MOVBE = "movbe",
    MOVD = "movd",
    MOVDDUP = "movddup",
    MOVDQ2Q = "movdq2q",
    MOVDQA = "movdqa",
    MOVDQU = "movdqu",
    MOVHPD = "movhpd",
    MOVHPS = "movhps",
    MOVLPD = "movlpd",
    MOVLPS = "movlps",
    MOVMSKPD = "movmskpd",
    MOVMSKPS = "movmskps",
    MOVNTDQ = "movntdq",
    MOVNTDQA = "movntdqa",
    MOVNTI = "movnti",
    MOVNTPD = "movntpd",
    MOVNTPS = "movntps",
    MOVNTQ = "movntq",
    MOVQ = "movq",
    MOVQ2DQ = "movq2dq",
    MOVSB = "movsb",
    MOVSD_SSE = "movsd",
    MOVSHDUP = "movshdup",
    MOVSLDUP = "movsldup",
    MOVSS = "movss",
    MOVSWD = "movsw",
    MOVSX = "movsx",
    MOVSXD = "movsxd",
    MOVUPD = "movupd",
    MOVUPS = "movups",
    MOVZX = "movzx",
    MOV_CR = "mov",
    MOV_DR = "mov",
    MOV_TR = "mov",
    MPSADBW = "mpsadbw",
    MUL = "mul",
    MULPD = "mulpd",
    MULPS = "mulps",
    MULSD = "mulsd",
    MULSS = "mulss",
    MULX = "mulx",
    MWAIT = "mwait",
    NEG = "neg",
    NOP = "nop",
    NOT = "not",
    OR = "or",
    ORPD = "orpd",
    ORPS = "orps",
    OUT = "out",
    OUTSB = "outsb",
    OUTSWD = "outsw",
    PABSB = "pabsb",
    PABSD = "pabsd",
    PABSW = "pabsw",
    PACKSSDW = "packssdw",
    PACKSSWB = "packsswb",
    PACKUSDW = "packusdw",
    PACKUSWB = "packuswb",
    PADDB = "paddb",
    PADDD = "paddd",
    PADDQ = "paddq",
    PADDSB = "paddsb",
    PADDSW = "paddsw",
    PADDUSB = "paddusb",
    PADDUSW = "paddusw",
    PADDW = "paddw",
    PALIGNR = "palignr",
    PAND = "pand",
    PANDN = "pandn",
    PAUSE = "pause",
    PAVGB = "pavgb",
    PAVGUSB = "pavgusb",
    PAVGW = "pavgw",
    PBLENDVB = "pblendvb",
    PBLENDW = "pblendw",
    PCLMULQDQ = "pclmulqdq",
    PCMPEQB = "pcmpeqb",
    PCMPEQD = "pcmpeqd",
    PCMPEQQ = "pcmpeqq",
    PCMPEQW = "pcmpeqw",
    PCMPESTRI = "pcmpestri",
    PCMPESTRM = "pcmpestrm",
    PCMPGTB = "pcmpgtb",
    PCMPGTD = "pcmpgtd",
    PCMPGTQ = "pcmpgtq",
    PCMPGTW = "pcmpgtw",
    PCMPISTRI = "pcmpistri",
    PCMPISTRM = "pcmpistrm",
    PDEP = "pdep",
    PEXT = "pext",
    PEXTRB = "pextrb",
    PEXTRD = "pextrd",
    PEXTRW = "pextrw",
    PF2ID = "pf2id",
    PF2IW = "pf2iw",
    PFACC = "pfacc",
    PFADD = "pfadd",
    PFCMPEQ = "pfcmpeq",
    PFCMPGE = "pfcmpge",
    PFCMPGT = "pfcmpgt",
    PFMAX = "pfmax",
    PFMIN = "pfmin",
    PFMUL = "pfmul",
    PFNACC = "pfnacc",
    PFPNACC = "pfpnacc",
    PFRCP = "pfrcp",
    PFRCPIT1 = "pfrcpit1",
    PFRCPIT2 = "pfrcpit2",
    PFRSQIT1 = "pfrsqit1",
    PFRSQRT = "pfrsqrt",
    PFSUB = "pfsub",
    PFSUBR = "pfsubr",
    PHADDD = "phaddd",
    PHADDSW = "phaddsw",
    PHADDW = "phaddw",
    PHMINPOSUW = "phminposuw",
    PHSUBD = "phsubd",
    PHSUBSW = "phsubsw",
    PHSUBW = "phsubw",
    PI2FD = "pi2fd",
    PI2FW = "pi2fw",
    PINSRB = "pinsrb",
    PINSRD = "pinsrd",
    PINSRW = "pinsrw",
    PMADDUBSW = "pmaddubsw",
    PMADDWD = "pmaddwd",
    PMAXSB = "pmaxsb",
    PMAXSD = "pmaxsd",
    PMAXSW = "pmaxsw",
    PMAXUB = "pmaxub",
    PMAXUD = "pmaxud",
    PMAXUW = "pmaxuw",
    PMINSB = "pminsb",
    PMINSD = "pminsd",
    PMINSW = "pminsw",
    PMINUB = "pminub",
    PMINUD = "pminud",
    PMINUW = "pminuw",
    PMOVMSKB = "pmovmskb",
    PMOVSXBD = "pmovsxbd",
    PMOVSXBQ = "pmovsxbq",
    PMOVSXBW = "pmovsxbw",
    PMOVSXDQ = "pmovsxdq",
    PMOVSXWD = "pmovsxwd",
    PMOVSXWQ = "pmovsxwq",
    PMOVZXBD = "pmovzxbd",
    PMOVZXBQ = "pmovzxbq",
    PMOVZXBW = "pmovzxbw",
    PMOVZXDQ = "pmovzxdq",
    PMOVZXWD = "pmovzxwd",
    PMOVZXWQ = "pmovzxwq",
    PMULDQ = "pmuldq",
    PMULHRSW = "pmulhrsw",
    PMULHRW = "pmulhrw",
    PMULHUW = "pmulhuw",
    PMULHW = "pmulhw",
    PMULLD = "pmulld",
    PMULLW = "pmullw",
    PMULUDQ = "pmuludq",
    POP = "pop",
    POPA = "popa",
    POPCNT = "popcnt",
    POPF = "popf",
    POR = "por",
    PREFETCHNTA = "prefetchnta",
    PREFETCHT0 = "prefetcht0",
    PREFETCHT1 = "prefetcht1",
    PREFETCHT2 = "prefetcht2",
    PREFETCHW = "prefetchw",
    PSADBW = "psadbw",
    PSHUFB = "pshufb",
    PSHUFD = "pshufd",
    PSHUFHW = "pshufhw",
    PSHUFLW = "pshuflw",
    PSHUFW = "pshufw",
    PSIGNB = "psignb",
    PSIGND = "psignd",
    PSIGNW = "psignw",
    PSLLD = "pslld",
    PSLLDQ = "pslldq",
    PSLLQ = "psllq",
    PSLLW = "psllw",
    PSRAD = "psrad",
    PSRAW = "psraw",
    PSRLD = "psrld",
    PSRLDQ = "psrldq",
    PSRLQ = "psrlq",
    PSRLW = "psrlw",
    PSUBB = "psubb",
    PSUBD = "psubd",
    PSUBQ = "psubq",
    PSUBSB = "psubsb",
    PSUBSW = "psubsw",
    PSUBUSB = "psubusb",
    PSUBUSW = "psubusw",
    PSUBW = "psubw",
    PSWAPD = "pswapd",
    PTEST = "ptest",
    PUNPCKHBW = "punpckhbw",
    PUNPCKHDQ = "punpckhdq",
    PUNPCKHQDQ = "punpckhqdq",
    PUNPCKHWD = "punpckhwd",
    PUNPCKLBW = "punpcklbw",
    PUNPCKLDQ = "punpckldq",
    PUNPCKLQDQ = "punpcklqdq",
    PUNPCKLWD = "punpcklwd",
    PUSH = "push",
    PUSHA = "pusha",
    PUSHF = "pushf",
    PXOR = "pxor",
    RCL = "rcl",
    RCPPS = "rcpps",
    RCPSS = "rcpss",
    RCR = "rcr",
    RDMSR = "rdmsr",
    RDPMC = "rdpmc",
    RDRAND = "rdrand",
    RDSEED = "rdseed",
    RDTSC = "rdtsc",
    RDTSCP = "rdtscp",
    RETF = "retf",
    RETN = "retn",
    ROL = "rol",
    ROR = "ror",
    RORX = "rorx",
    ROUNDPD = "roundpd",
    ROUNDPS = "roundps",
    ROUNDSD = "roundsd",
    ROUNDSS = "roundss",
    RSM = "rsm",
    RSQRTPS = "rsqrtps",
    RSQRTSS = "rsqrtss",
    SAHF = "sahf",
    SALC = "salc",
    SAR = "sar",
    SARX = "sarx",
    SBB = "sbb",
    SCASB = "scasb",
    SCASWD = "scasw",
    SETA = "seta",
    SETAE = "setae",
    SETB = "setb",
    SETBE = "setbe",
    SETE = "sete",
    SETG = "setg",
    SETGE = "setge",
    SETL = "setl",
    SETLE = "setle",
    SETNE = "setne",
    SETNO = "setno",
    SETNP = "setnp",
    SETNS = "setns",
    SETO = "seto",
    SETP = "setp",
    SETS = "sets",
    SFENCE = "sfence",
    SGDT = "sgdt",
    SHL = "shl",
    SHLD = "shld",
    SHLX = "shlx",
    SHR = "shr",
    SHRD = "shrd",
    SHRX = "shrx",
    SHUFPD = "shufpd",
    SHUFPS = "shufps",
    SIDT = "sidt",
    SKINIT = "skinit",
    SLDT = "sldt",
    SMSW = "smsw",
    SQRTPD = "sqrtpd",
    SQRTPS = "sqrtps",
    SQRTSD = "sqrtsd",
    SQRTSS = "sqrtss",
    STAC = "stac",
    STC = "stc",
    STD = "std",
    STGI = "stgi",
    STI = "sti",
    STMXCSR = "stmxcsr",
    STOSB = "stosb",
    STOSWD = "stosw",
    STR = "str",
    SUB = "sub",
    SUBPD = "subpd",
    SUBPS = "subps",
    SUBSD = "subsd",
    SUBSS = "subss",
    SWAPGS = "swapgs",
    SYSCALL = "syscall",
    SYSENTER = "sysenter",
    SYSEXIT = "sysexit",
    SYSRET = "sysret",
    TEST = "test",
    TZCNT = "tzcnt",
    UCOMISD = "ucomisd",
    UCOMISS = "ucomiss",
    UD1 = "ud1",
    UD2 = "ud2",
    UNPCKHPD = "unpckhpd",
    UNPCKHPS = "unpckhps",
    UNPCKLPD = "unpcklpd",
    UNPCKLPS = "unpcklps",
    VADDPD = "vaddpd",
    VADDPS = "vaddps",
    VADDSD = "vaddsd",
    VADDSS = "vaddss",
    VADDSUBPD = "vaddsubpd",
    VADDSUBPS = "vaddsubps",
    VAESDEC = "vaesdec",
    VAESDECLAST = "vaesdeclast",
    VAESENC = "vaesenc",
    VAESENCLAST = "vaesenclast",
    VAESIMC = "vaesimc",
    VAESKEYGENASSIST = "vaeskeygenassist",
    VANDNPD = "vandnpd",
    VANDNPS = "vandnps",
    VANDPD = "vandpd",
    VANDPS = "vandps",
    VBLENDPD = "vblendpd",
    VBLENDPS = "vblendps",
    VBLENDVPD = "vblendvpd",
    VBLENDVPS = "vblendvps",
    VBROADCASTF128 = "vbroadcastf128",
    VBROADCASTI128 = "vbroadcasti128",
    VBROADCASTSD = "vbroadcastsd",
    VBROADCASTSS = "vbroadcastss",
    VCMPPD = "vcmppd",
    VCMPPS = "vcmpps",
    VCMPSD = "vcmpsd",
    VCMPSS = "vcmpss",
    VCOMISD = "vcomisd",
    VCOMISS = "vcomiss",
    VCVTDQ2PD = "vcvtdq2pd",
    VCVTDQ2PS = "vcvtdq2ps",
    VCVTPD2DQ = "vcvtpd2dq",
    VCVTPD2PS = "vcvtpd2ps",
    VCVTPH2PS = "vcvtph2ps",
    VCVTPS2DQ = "vcvtps2dq",
    VCVTPS2PD = "vcvtps2pd",
    VCVTPS2PH = "vcvtps2ph",
    VCVTSD2SI = "vcvtsd2si",
    VCVTSD2SS = "vcvtsd2ss",
    VCVTSI2SD = "vcvtsi2sd",
    VCVTSI2SS = "vcvtsi2ss",
    VCVTSS2SD = "vcvtss2sd",
    VCVTSS2SI = "vcvtss2si",
    VCVTTPD2DQ = "vcvttpd2dq",
    VCVTTPS2DQ = "vcvttps2dq",
    VCVTTSD2SI = "vcvttsd2si",
    VCVTTSS2SI = "vcvttss2si",
    VDIVPD = "vdivpd",
    VDIVPS = "vdivps",
    VDIVSD = "vdivsd",
    VDIVSS = "vdivss",
    VDPPS = "vdpps",
    VERR = "verr",
    VERW = "verw",
    VEXTRACTF128 = "vextractf128",
    VEXTRACTI128 = "vextracti128",
    VEXTRACTPS = "vextractps",
    VFMADD132PS = "vfmadd132ps",
    VFMADD132SS = "vfmadd132ss",
    VFMADD213PS = "vfmadd213ps",
    VFMADD213SS = "vfmadd213ss",
    VFMADD231PS = "vfmadd231ps",
    VFMADD231SS = "vfmadd231ss",
    VFMADDSUB132PS = "vfmaddsub132ps",
    VFMADDSUB213PS = "vfmaddsub213ps",
    VFMADDSUB231PS = "vfmaddsub231ps",
    VFMSUB132PS = "vfmsub132ps",
    VFMSUB132SS = "vfmsub132ss",
    VFMSUB213PS = "vfmsub213ps",
    VFMSUB213SS = "vfmsub213ss",
    VFMSUB231PS = "vfmsub231ps",
    VFMSUB231SS = "vfmsub231ss",
    VFMSUBADD132PS = "vfmsubadd132ps",
    VFMSUBADD213PS = "vfmsubadd213ps",
    VFMSUBADD231PS = "vfmsubadd231ps",
    VFNMADD132PS = "vfnmadd132ps",
    VFNMADD213PS = "vfnmadd213ps",
    VFNMADD231PS = "vfnmadd231ps",
    VFNMSUB132PS = "vfnmsub132ps",
    VFNMSUB213PS = "vfnmsub213ps",
    VFNMSUB231PS = "vfnmsub231ps",
    VGATHERDPS = "vgatherdps",
    VGATHERQPS = "vgatherqps",
    VHADDPD = "vhaddpd",
    VHADDPS = "vhaddps",
    VHSUBPD = "vhsubpd",
    VHSUBPS = "vhsubps",
    VINSERTF128 = "vinsertf128",
    VINSERTI128 = "vinserti128",
    VINSERTPS = "vinsertps",
    VLDDQU = "vlddqu",
    VMAXPD = "vmaxpd",
    VMAXPS = "vmaxps",
    VMAXSD = "vmaxsd",
    VMAXSS = "vmaxss",
    VMCALL = "vmcall",
    VMFUNC = "vmfunc",
    VMINPD = "vminpd",
    VMINPS = "vminps",
    VMINSD = "vminsd",
    VMINSS = "vminss",
    VMLAUNCH = "vmlaunch",
    VMLOAD = "vmload",
    VMMCALL = "vmmcall",
    VMOVAPD = "vmovapd",
    VMOVAPS = "vmovaps",
    VMOVD = "vmovd",
    VMOVDDUP = "vmovddup",
    VMOVDQA = "vmovdqa",
    VMOVDQU = "vmovdqu",
    VMOVHPD = "vmovhpd",
    VMOVHPS = "vmovhps",
    VMOVLPD = "vmovlpd",
    VMOVLPS = "vmovlps",
    VMOVMSKPD = "vmovmskpd",
    VMOVMSKPS = "vmovmskps",
    VMOVNTDQ = "vmovntdq",
    VMOVNTDQA = "vmovntdqa",
    VMOVNTPD = "vmovntpd",
    VMOVNTPS = "vmovntps",
    VMOVQ = "vmovq",
    VMOVSD = "vmovsd",
    VMOVSHDUP = "vmovshdup",
    VMOVSLDUP = "vmovsldup",
    VMOVSS = "vmovss",
    VMOVUPD = "vmovupd",
    VMOVUPS = "vmovups",
    VMPSADBW = "vmpsadbw",
    VMPTRLD = "vmptrld",
    VMPTRST = "vmptrst",
    VMREAD = "vmread",
    VMRESUME = "vmresume",
    VMRUN = "vmrun",
    VMSAVE = "vmsave",
    VMULPD = "vmulpd",
    VMULPS = "vmulps",
    VMULSD = "vmulsd",
    VMULSS = "vmulss",
    VMWRITE = "vmwrite",
    VMXOFF = "vmxoff",
    VORPD = "vorpd",
    VORPS = "vorps",
    VPABSB = "vpabsb",
    VPABSD = "vpabsd",
    VPABSW = "vpabsw",
    VPACKSSDW = "vpackssdw",
    VPACKSSWB = "vpacksswb",
    VPACKUSDW = "vpackusdw",
    VPACKUSWB = "vpackuswb",
    VPADDB = "vpaddb",
    VPADDD = "vpaddd",
    VPADDQ = "vpaddq",
    VPADDW = "vpaddw",
    VPALIGNR = "vpalignr",
    VPAND = "vpand",
    VPANDN = "vpandn",
    VPBLENDD = "vpblendd",
    VPBLENDVB = "vpblendvb",
    VPBLENDW = "vpblendw",
    VPBROADCASTB = "vpbroadcastb",
    VPBROADCASTD = "vpbroadcastd",
    VPBROADCASTQ = "vpbroadcastq",
    VPBROADCASTW = "vpbroadcastw",
    VPCLMULQDQ = "vpclmulqdq",
    VPCMPEQB = "vpcmpeqb",
    VPCMPEQD = "vpcmpeqd",
    VPCMPEQQ = "vpcmpeqq",
    VPCMPEQW = "vpcmpeqw",
    VPCMPESTRI = "vpcmpestri",
    VPCMPESTRM = "vpcmpestrm",
    VPCMPGTB = "vpcmpgtb",
    VPCMPGTD = "vpcmpgtd",
    VPCMPGTQ = "vpcmpgtq",
    VPCMPGTW = "vpcmpgtw",
    VPCMPISTRI = "vpcmpistri",
    VPCMPISTRM = "vpcmpistrm",
    VPERM2F128 = "vperm2f128",
    VPERM2I128 = "vperm2i128",
    VPERMD = "vpermd",
    VPERMILPD = "vpermilpd",
    VPERMILPS = "vpermilps",
    VPERMPD = "vpermpd",
    VPERMPS = "vpermps",
    VPERMQ = "vpermq",
    VPEXTRB = "vpextrb",
    VPEXTRD = "vpextrd",
    VPEXTRW = "vpextrw",
    VPGATHERDD = "vpgatherdd",
    VPGATHERQD = "vpgatherqd",
    VPHADDD = "vphaddd",
    VPHADDW = "vphaddw",
    VPINSRB = "vpinsrb",
    VPINSRD = "vpinsrd",
    VPMADDUBSW = "vpmaddubsw",
    VPMASKMOVD = "vpmaskmovd",
    VPMAXSB = "vpmaxsb",
    VPMAXSD = "vpmaxsd",
    VPMINSB = "vpminsb",
    VPMINSD = "vpminsd",
    VPMOVMSKB = "vpmovmskb",
    VPMOVSXBD = "vpmovsxbd",
    VPMOVSXBW = "vpmovsxbw",
    VPMOVSXDQ = "vpmovsxdq",
    VPMOVSXWD = "vpmovsxwd",
    VPMOVZXBD = "vpmovzxbd",
    VPMOVZXBW = "vpmovzxbw",
    VPMOVZXDQ = "vpmovzxdq",
    VPMOVZXWD = "vpmovzxwd",
    VPMULDQ = "vpmuldq",
    VPMULHRSW = "vpmulhrsw",
    VPMULLD = "vpmulld",
    VPMULLW = "vpmullw",
    VPOR = "vpor",
    VPSHUFB = "vpshufb",
    VPSHUFD = "vpshufd",
    VPSHUFLW = "vpshuflw",
    VPSIGNB = "vpsignb",
    VPSLLVD = "vpsllvd",
    VPSRAVD = "vpsravd",
    VPSRLVD = "vpsrlvd",
    VPSUBB = "vpsubb",
    VPSUBD = "vpsubd",
    VPSUBQ = "vpsubq",
    VPSUBW = "vpsubw",
    VPTEST = "vptest",
    VPUNPCKHBW = "vpunpckhbw",
    VPUNPCKHDQ = "vpunpckhdq",
    VPUNPCKHQDQ = "vpunpckhqdq",
    VPUNPCKHWD = "vpunpckhwd",
    VPUNPCKLBW = "vpunpcklbw",
    VPUNPCKLDQ = "vpunpckldq",
    VPUNPCKLQDQ = "vpunpcklqdq",
    VPUNPCKLWD = "vpunpcklwd",
    VPXOR = "vpxor",
    VRCPPS = "vrcpps",
    VRCPSS = "vrcpss",
    VROUNDPD = "vroundpd",
    VROUNDPS = "vroundps",
    VROUNDSD = "vroundsd",
    VROUNDSS = "vroundss",
    VRSQRTPS = "vrsqrtps",
    VRSQRTSS = "vrsqrtss",
    VSHUFPD = "vshufpd",
    VSHUFPS = "vshufps",
    VSQRTPD = "vsqrtpd",
    VSQRTPS = "vsqrtps",
    VSQRTSD = "vsqrtsd",
    VSQRTSS = "vsqrtss",
    VSUBPD = "vsubpd",
    VSUBPS = "vsubps",
    VSUBSD = "vsubsd",
    VSUBSS = "vsubss",
    VUCOMISD = "vucomisd",
    VUCOMISS = "vucomiss",
    VUNPCKHPD = "vunpckhpd",
    VUNPCKHPS = "vunpckhps",
    VUNPCKLPD = "vunpcklpd",
    VUNPCKLPS = "vunpcklps",
    VXORPD = "vxorpd",
    VXORPS = "vxorps",
    VZEROUPPER = "vzeroupper",
    WAIT = "wait",
    WBINVD = "wbinvd",
    WRMSR = "wrmsr",
    XADD = "xadd",
    XCHG = "xchg",
    XEND = "xend",
    XGETBV = "xgetbv",
    XLAT = "xlat",
    XOR = "xor",
    XORPD = "xorpd",
    XORPS = "xorps",
    XRSTOR = "xrstor",
    XSAVE = "xsave",
    XSAVEOPT = "xsaveopt",
    XSETBV = "xsetbv",
    XTEST = "xtest",
}

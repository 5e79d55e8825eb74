use super::SparseMap;
use crate::opcode::{op, Descriptor, INVALID};

/// `0f xx` map.
pub(crate) static TWO_BYTE: [Descriptor; 256] = [
    // 0x00
    op!("Grp6", ESCAPE, [Grp6], []),
    op!("Grp7", ESCAPE, [Grp7], []),
    op!("lar %Gv,%Ew", LAR, [ModRm, UseModRm], [Gv, Ew], HARMLESS),
    op!("lsl %Gv,%Ew", LSL, [ModRm, UseModRm], [Gv, Ew], HARMLESS),
    INVALID,
    op!("syscall", SYSCALL, [], [], DANGEROUS),
    op!("clts", CLTS, [], [], PRIVILEGED),
    op!("sysret", SYSRET, [], [], DANGEROUS),
    op!("invd", INVD, [], [], PRIVILEGED),
    op!("wbinvd", WBINVD, [], [], PRIVILEGED),
    INVALID,
    op!("ud2", UD2, [], [], ILLEGAL),
    INVALID,
    op!("prefetchw %Mb", PREFETCHW, [ModRm], [Mb], HARMLESS),
    op!("femms", FEMMS, [], [], HARMLESS | MMX),
    op!("3DNow! escape", ESCAPE, [Amd3DNow], []),
    // 0x10
    op!("movups %Vps,%Wps", MOVUPS, [ModRm, UseModRm], [Vps, Wps], HARMLESS | SSE),
    op!("movups %Wps,%Vps", MOVUPS, [ModRm, UseModRm], [Wps, Vps], HARMLESS | SSE),
    op!("movlps %Vq,%Wq", MOVLPS, [ModRm, UseModRm], [Vq, Wq], HARMLESS | SSE),
    op!("movlps %Mq,%Vq", MOVLPS, [ModRm, UseModRm], [Mq, Vq], HARMLESS | SSE),
    op!("unpcklps %Vps,%Wq", UNPCKLPS, [ModRm, UseModRm], [Vps, Wq], HARMLESS | SSE),
    op!("unpckhps %Vps,%Wq", UNPCKHPS, [ModRm, UseModRm], [Vps, Wq], HARMLESS | SSE),
    op!("movhps %Vq,%Wq", MOVHPS, [ModRm, UseModRm], [Vq, Wq], HARMLESS | SSE),
    op!("movhps %Mq,%Vq", MOVHPS, [ModRm, UseModRm], [Mq, Vq], HARMLESS | SSE),
    op!("Grp16", ESCAPE, [Grp16], []),
    op!("nop %Ev", NOP, [ModRm], [Ev], HARMLESS),
    op!("nop %Ev", NOP, [ModRm], [Ev], HARMLESS),
    op!("nop %Ev", NOP, [ModRm], [Ev], HARMLESS),
    op!("nop %Ev", NOP, [ModRm], [Ev], HARMLESS),
    op!("nop %Ev", NOP, [ModRm], [Ev], HARMLESS),
    op!("nop %Ev", NOP, [ModRm], [Ev], HARMLESS),
    op!("nop %Ev", NOP, [ModRm], [Ev], HARMLESS),
    // 0x20
    op!("mov %Ry,%Cy", MOV_CR, [ModRm, UseModRm], [Ry, Cy], PRIVILEGED | MOD_FIXED_11 | FORCED_32_OP_SIZE_X86 | FORCED_64_OP_SIZE),
    op!("mov %Ry,%Dy", MOV_DR, [ModRm, UseModRm], [Ry, Dy], PRIVILEGED | MOD_FIXED_11 | FORCED_32_OP_SIZE_X86 | FORCED_64_OP_SIZE),
    op!("mov %Cy,%Ry", MOV_CR, [ModRm, UseModRm], [Cy, Ry], PRIVILEGED | MOD_FIXED_11 | FORCED_32_OP_SIZE_X86 | FORCED_64_OP_SIZE),
    op!("mov %Dy,%Ry", MOV_DR, [ModRm, UseModRm], [Dy, Ry], PRIVILEGED | MOD_FIXED_11 | FORCED_32_OP_SIZE_X86 | FORCED_64_OP_SIZE),
    op!("mov %Ry,%Ty", MOV_TR, [ModRm, UseModRm], [Ry, Ty], PRIVILEGED | MOD_FIXED_11 | FORCED_32_OP_SIZE_X86 | INVALID_64),
    INVALID,
    op!("mov %Ty,%Ry", MOV_TR, [ModRm, UseModRm], [Ty, Ry], PRIVILEGED | MOD_FIXED_11 | FORCED_32_OP_SIZE_X86 | INVALID_64),
    INVALID,
    op!("movaps %Vps,%Wps", MOVAPS, [ModRm, UseModRm], [Vps, Wps], HARMLESS | SSE),
    op!("movaps %Wps,%Vps", MOVAPS, [ModRm, UseModRm], [Wps, Vps], HARMLESS | SSE),
    op!("cvtpi2ps %Vps,%Qq", CVTPI2PS, [ModRm, UseModRm], [Vps, Qq], HARMLESS | SSE),
    op!("movntps %Mdq,%Vps", MOVNTPS, [ModRm, UseModRm], [Mdq, Vps], HARMLESS | SSE),
    op!("cvttps2pi %Pq,%Wq", CVTTPS2PI, [ModRm, UseModRm], [Pq, Wq], HARMLESS | SSE),
    op!("cvtps2pi %Pq,%Wq", CVTPS2PI, [ModRm, UseModRm], [Pq, Wq], HARMLESS | SSE),
    op!("ucomiss %Vss,%Wss", UCOMISS, [ModRm, UseModRm], [Vss, Wss], HARMLESS | SSE),
    op!("comiss %Vss,%Wss", COMISS, [ModRm, UseModRm], [Vss, Wss], HARMLESS | SSE),
    // 0x30
    op!("wrmsr", WRMSR, [], [], PRIVILEGED),
    op!("rdtsc", RDTSC, [], [], HARMLESS),
    op!("rdmsr", RDMSR, [], [], PRIVILEGED),
    op!("rdpmc", RDPMC, [], [], PRIVILEGED),
    op!("sysenter", SYSENTER, [], [], DANGEROUS),
    op!("sysexit", SYSEXIT, [], [], DANGEROUS),
    INVALID,
    op!("getsec", GETSEC, [], [], DANGEROUS),
    op!("3-byte escape 0f 38", ESCAPE, [ThreeByteEsc4], []),
    INVALID,
    op!("3-byte escape 0f 3a", ESCAPE, [ThreeByteEsc5], []),
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    // 0x40
    op!("cmovo %Gv,%Ev", CMOVO, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("cmovno %Gv,%Ev", CMOVNO, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("cmovb %Gv,%Ev", CMOVB, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("cmovae %Gv,%Ev", CMOVAE, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("cmove %Gv,%Ev", CMOVE, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("cmovne %Gv,%Ev", CMOVNE, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("cmovbe %Gv,%Ev", CMOVBE, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("cmova %Gv,%Ev", CMOVA, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("cmovs %Gv,%Ev", CMOVS, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("cmovns %Gv,%Ev", CMOVNS, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("cmovp %Gv,%Ev", CMOVP, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("cmovnp %Gv,%Ev", CMOVNP, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("cmovl %Gv,%Ev", CMOVL, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("cmovge %Gv,%Ev", CMOVGE, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("cmovle %Gv,%Ev", CMOVLE, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("cmovg %Gv,%Ev", CMOVG, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    // 0x50
    op!("movmskps %Gd,%Ups", MOVMSKPS, [ModRm, UseModRm], [Gd, Ups], HARMLESS | SSE),
    op!("sqrtps %Vps,%Wps", SQRTPS, [ModRm, UseModRm], [Vps, Wps], HARMLESS | SSE),
    op!("rsqrtps %Vps,%Wps", RSQRTPS, [ModRm, UseModRm], [Vps, Wps], HARMLESS | SSE),
    op!("rcpps %Vps,%Wps", RCPPS, [ModRm, UseModRm], [Vps, Wps], HARMLESS | SSE),
    op!("andps %Vps,%Wps", ANDPS, [ModRm, UseModRm], [Vps, Wps], HARMLESS | SSE),
    op!("andnps %Vps,%Wps", ANDNPS, [ModRm, UseModRm], [Vps, Wps], HARMLESS | SSE),
    op!("orps %Vps,%Wps", ORPS, [ModRm, UseModRm], [Vps, Wps], HARMLESS | SSE),
    op!("xorps %Vps,%Wps", XORPS, [ModRm, UseModRm], [Vps, Wps], HARMLESS | SSE),
    op!("addps %Vps,%Wps", ADDPS, [ModRm, UseModRm], [Vps, Wps], HARMLESS | SSE),
    op!("mulps %Vps,%Wps", MULPS, [ModRm, UseModRm], [Vps, Wps], HARMLESS | SSE),
    op!("cvtps2pd %Vpd,%Wq", CVTPS2PD, [ModRm, UseModRm], [Vpd, Wq], HARMLESS | SSE),
    op!("cvtdq2ps %Vps,%Wdq", CVTDQ2PS, [ModRm, UseModRm], [Vps, Wdq], HARMLESS | SSE),
    op!("subps %Vps,%Wps", SUBPS, [ModRm, UseModRm], [Vps, Wps], HARMLESS | SSE),
    op!("minps %Vps,%Wps", MINPS, [ModRm, UseModRm], [Vps, Wps], HARMLESS | SSE),
    op!("divps %Vps,%Wps", DIVPS, [ModRm, UseModRm], [Vps, Wps], HARMLESS | SSE),
    op!("maxps %Vps,%Wps", MAXPS, [ModRm, UseModRm], [Vps, Wps], HARMLESS | SSE),
    // 0x60
    op!("punpcklbw %Pq,%Qd", PUNPCKLBW, [ModRm, UseModRm], [Pq, Qd], HARMLESS | MMX),
    op!("punpcklwd %Pq,%Qd", PUNPCKLWD, [ModRm, UseModRm], [Pq, Qd], HARMLESS | MMX),
    op!("punpckldq %Pq,%Qd", PUNPCKLDQ, [ModRm, UseModRm], [Pq, Qd], HARMLESS | MMX),
    op!("packsswb %Pq,%Qq", PACKSSWB, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("pcmpgtb %Pq,%Qq", PCMPGTB, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("pcmpgtw %Pq,%Qq", PCMPGTW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("pcmpgtd %Pq,%Qq", PCMPGTD, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("packuswb %Pq,%Qq", PACKUSWB, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("punpckhbw %Pq,%Qq", PUNPCKHBW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("punpckhwd %Pq,%Qq", PUNPCKHWD, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("punpckhdq %Pq,%Qq", PUNPCKHDQ, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("packssdw %Pq,%Qq", PACKSSDW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    INVALID,
    INVALID,
    op!("movd %Pq,%Ey", MOVD, [ModRm, UseModRm], [Pq, Ey], HARMLESS | MMX),
    op!("movq %Pq,%Qq", MOVQ, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    // 0x70
    op!("pshufw %Pq,%Qq,%Ib", PSHUFW, [ModRm, UseModRm, ImmByte], [Pq, Qq, Ib], HARMLESS | MMX),
    op!("Grp12", ESCAPE, [Grp12], []),
    op!("Grp13", ESCAPE, [Grp13], []),
    op!("Grp14", ESCAPE, [Grp14], []),
    op!("pcmpeqb %Pq,%Qq", PCMPEQB, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("pcmpeqw %Pq,%Qq", PCMPEQW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("pcmpeqd %Pq,%Qq", PCMPEQD, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("emms", EMMS, [], [], HARMLESS | MMX),
    op!("vmread %Ey,%Gy", VMREAD, [ModRm, UseModRm], [Ey, Gy], DANGEROUS | FORCED_64_OP_SIZE),
    op!("vmwrite %Gy,%Ey", VMWRITE, [ModRm, UseModRm], [Gy, Ey], DANGEROUS | FORCED_64_OP_SIZE),
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    op!("movd %Ey,%Pq", MOVD, [ModRm, UseModRm], [Ey, Pq], HARMLESS | MMX),
    op!("movq %Qq,%Pq", MOVQ, [ModRm, UseModRm], [Qq, Pq], HARMLESS | MMX),
    // 0x80
    op!("jo %Jz", JO, [ImmVRel], [Jz], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jno %Jz", JNO, [ImmVRel], [Jz], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jb %Jz", JB, [ImmVRel], [Jz], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jae %Jz", JAE, [ImmVRel], [Jz], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("je %Jz", JE, [ImmVRel], [Jz], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jne %Jz", JNE, [ImmVRel], [Jz], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jbe %Jz", JBE, [ImmVRel], [Jz], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("ja %Jz", JA, [ImmVRel], [Jz], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("js %Jz", JS, [ImmVRel], [Jz], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jns %Jz", JNS, [ImmVRel], [Jz], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jp %Jz", JP, [ImmVRel], [Jz], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jnp %Jz", JNP, [ImmVRel], [Jz], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jl %Jz", JL, [ImmVRel], [Jz], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jge %Jz", JGE, [ImmVRel], [Jz], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jle %Jz", JLE, [ImmVRel], [Jz], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jg %Jz", JG, [ImmVRel], [Jz], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    // 0x90
    op!("seto %Eb", SETO, [ModRm], [Eb], HARMLESS),
    op!("setno %Eb", SETNO, [ModRm], [Eb], HARMLESS),
    op!("setb %Eb", SETB, [ModRm], [Eb], HARMLESS),
    op!("setae %Eb", SETAE, [ModRm], [Eb], HARMLESS),
    op!("sete %Eb", SETE, [ModRm], [Eb], HARMLESS),
    op!("setne %Eb", SETNE, [ModRm], [Eb], HARMLESS),
    op!("setbe %Eb", SETBE, [ModRm], [Eb], HARMLESS),
    op!("seta %Eb", SETA, [ModRm], [Eb], HARMLESS),
    op!("sets %Eb", SETS, [ModRm], [Eb], HARMLESS),
    op!("setns %Eb", SETNS, [ModRm], [Eb], HARMLESS),
    op!("setp %Eb", SETP, [ModRm], [Eb], HARMLESS),
    op!("setnp %Eb", SETNP, [ModRm], [Eb], HARMLESS),
    op!("setl %Eb", SETL, [ModRm], [Eb], HARMLESS),
    op!("setge %Eb", SETGE, [ModRm], [Eb], HARMLESS),
    op!("setle %Eb", SETLE, [ModRm], [Eb], HARMLESS),
    op!("setg %Eb", SETG, [ModRm], [Eb], HARMLESS),
    // 0xA0
    op!("push %FS", PUSH, [FixedReg], [FS], HARMLESS | DEFAULT_64_OP_SIZE),
    op!("pop %FS", POP, [FixedReg], [FS], HARMLESS | DEFAULT_64_OP_SIZE),
    op!("cpuid", CPUID, [], [], HARMLESS),
    op!("bt %Ev,%Gv", BT, [ModRm, UseModRm], [Ev, Gv], HARMLESS),
    op!("shld %Ev,%Gv,%Ib", SHLD, [ModRm, UseModRm, ImmByte], [Ev, Gv, Ib], HARMLESS),
    op!("shld %Ev,%Gv,%CL", SHLD, [ModRm, UseModRm, FixedReg], [Ev, Gv, CL], HARMLESS),
    INVALID,
    INVALID,
    op!("push %GS", PUSH, [FixedReg], [GS], HARMLESS | DEFAULT_64_OP_SIZE),
    op!("pop %GS", POP, [FixedReg], [GS], HARMLESS | DEFAULT_64_OP_SIZE),
    op!("rsm", RSM, [], [], DANGEROUS),
    op!("bts %Ev,%Gv", BTS, [ModRm, UseModRm], [Ev, Gv], HARMLESS),
    op!("shrd %Ev,%Gv,%Ib", SHRD, [ModRm, UseModRm, ImmByte], [Ev, Gv, Ib], HARMLESS),
    op!("shrd %Ev,%Gv,%CL", SHRD, [ModRm, UseModRm, FixedReg], [Ev, Gv, CL], HARMLESS),
    op!("Grp15", ESCAPE, [Grp15], []),
    op!("imul %Gv,%Ev", IMUL, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    // 0xB0
    op!("cmpxchg %Eb,%Gb", CMPXCHG, [ModRm, UseModRm], [Eb, Gb], HARMLESS),
    op!("cmpxchg %Ev,%Gv", CMPXCHG, [ModRm, UseModRm], [Ev, Gv], HARMLESS),
    op!("lss %Gv,%Mp", LSS, [ModRm, UseModRm], [Gv, Mp], HARMLESS),
    op!("btr %Ev,%Gv", BTR, [ModRm, UseModRm], [Ev, Gv], HARMLESS),
    op!("lfs %Gv,%Mp", LFS, [ModRm, UseModRm], [Gv, Mp], HARMLESS),
    op!("lgs %Gv,%Mp", LGS, [ModRm, UseModRm], [Gv, Mp], HARMLESS),
    op!("movzx %Gv,%Eb", MOVZX, [ModRm, UseModRm], [Gv, Eb], HARMLESS),
    op!("movzx %Gv,%Ew", MOVZX, [ModRm, UseModRm], [Gv, Ew], HARMLESS),
    INVALID,
    op!("Grp10", ESCAPE, [Grp10], []),
    op!("Grp8", ESCAPE, [Grp8], []),
    op!("btc %Ev,%Gv", BTC, [ModRm, UseModRm], [Ev, Gv], HARMLESS),
    op!("bsf %Gv,%Ev", BSF, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("bsr %Gv,%Ev", BSR, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("movsx %Gv,%Eb", MOVSX, [ModRm, UseModRm], [Gv, Eb], HARMLESS),
    op!("movsx %Gv,%Ew", MOVSX, [ModRm, UseModRm], [Gv, Ew], HARMLESS),
    // 0xC0
    op!("xadd %Eb,%Gb", XADD, [ModRm, UseModRm], [Eb, Gb], HARMLESS),
    op!("xadd %Ev,%Gv", XADD, [ModRm, UseModRm], [Ev, Gv], HARMLESS),
    op!("cmpps %Vps,%Wps,%Ib", CMPPS, [ModRm, UseModRm, ImmByte], [Vps, Wps, Ib], HARMLESS | SSE),
    op!("movnti %My,%Gy", MOVNTI, [ModRm, UseModRm], [My, Gy], HARMLESS),
    op!("pinsrw %Pq,%Ed,%Ib", PINSRW, [ModRm, UseModRm, ImmByte], [Pq, Ed, Ib], HARMLESS | MMX),
    op!("pextrw %Gd,%Nq,%Ib", PEXTRW, [ModRm, UseModRm, ImmByte], [Gd, Nq, Ib], HARMLESS | MMX),
    op!("shufps %Vps,%Wps,%Ib", SHUFPS, [ModRm, UseModRm, ImmByte], [Vps, Wps, Ib], HARMLESS | SSE),
    op!("Grp9", ESCAPE, [Grp9], []),
    op!("bswap %eAX", BSWAP, [FixedReg], [eAX], HARMLESS | REXB_EXTENDS_OPREG),
    op!("bswap %eCX", BSWAP, [FixedReg], [eCX], HARMLESS | REXB_EXTENDS_OPREG),
    op!("bswap %eDX", BSWAP, [FixedReg], [eDX], HARMLESS | REXB_EXTENDS_OPREG),
    op!("bswap %eBX", BSWAP, [FixedReg], [eBX], HARMLESS | REXB_EXTENDS_OPREG),
    op!("bswap %eSP", BSWAP, [FixedReg], [eSP], HARMLESS | REXB_EXTENDS_OPREG),
    op!("bswap %eBP", BSWAP, [FixedReg], [eBP], HARMLESS | REXB_EXTENDS_OPREG),
    op!("bswap %eSI", BSWAP, [FixedReg], [eSI], HARMLESS | REXB_EXTENDS_OPREG),
    op!("bswap %eDI", BSWAP, [FixedReg], [eDI], HARMLESS | REXB_EXTENDS_OPREG),
    // 0xD0
    INVALID,
    op!("psrlw %Pq,%Qq", PSRLW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("psrld %Pq,%Qq", PSRLD, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("psrlq %Pq,%Qq", PSRLQ, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("paddq %Pq,%Qq", PADDQ, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("pmullw %Pq,%Qq", PMULLW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    INVALID,
    op!("pmovmskb %Gd,%Nq", PMOVMSKB, [ModRm, UseModRm], [Gd, Nq], HARMLESS | MMX | DEFAULT_64_OP_SIZE),
    op!("psubusb %Pq,%Qq", PSUBUSB, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("psubusw %Pq,%Qq", PSUBUSW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("pminub %Pq,%Qq", PMINUB, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("pand %Pq,%Qq", PAND, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("paddusb %Pq,%Qq", PADDUSB, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("paddusw %Pq,%Qq", PADDUSW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("pmaxub %Pq,%Qq", PMAXUB, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("pandn %Pq,%Qq", PANDN, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    // 0xE0
    op!("pavgb %Pq,%Qq", PAVGB, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("psraw %Pq,%Qq", PSRAW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("psrad %Pq,%Qq", PSRAD, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("pavgw %Pq,%Qq", PAVGW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("pmulhuw %Pq,%Qq", PMULHUW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("pmulhw %Pq,%Qq", PMULHW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    INVALID,
    op!("movntq %Mq,%Pq", MOVNTQ, [ModRm, UseModRm], [Mq, Pq], HARMLESS | MMX),
    op!("psubsb %Pq,%Qq", PSUBSB, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("psubsw %Pq,%Qq", PSUBSW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("pminsw %Pq,%Qq", PMINSW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("por %Pq,%Qq", POR, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("paddsb %Pq,%Qq", PADDSB, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("paddsw %Pq,%Qq", PADDSW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("pmaxsw %Pq,%Qq", PMAXSW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("pxor %Pq,%Qq", PXOR, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    // 0xF0
    INVALID,
    op!("psllw %Pq,%Qq", PSLLW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("pslld %Pq,%Qq", PSLLD, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("psllq %Pq,%Qq", PSLLQ, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("pmuludq %Pq,%Qq", PMULUDQ, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("pmaddwd %Pq,%Qq", PMADDWD, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("psadbw %Pq,%Qq", PSADBW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("maskmovq %Pq,%Nq", MASKMOVQ, [ModRm, UseModRm], [Pq, Nq], HARMLESS | MMX),
    op!("psubb %Pq,%Qq", PSUBB, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("psubw %Pq,%Qq", PSUBW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("psubd %Pq,%Qq", PSUBD, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("psubq %Pq,%Qq", PSUBQ, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("paddb %Pq,%Qq", PADDB, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("paddw %Pq,%Qq", PADDW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    op!("paddd %Pq,%Qq", PADDD, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX),
    INVALID,
];

/// `66 0f xx` map.
pub(crate) static TWO_BYTE_66: SparseMap = SparseMap::new(&[
    (0x10, op!("movupd %Vpd,%Wpd", MOVUPD, [ModRm, UseModRm], [Vpd, Wpd], HARMLESS | SSE)),
    (0x11, op!("movupd %Wpd,%Vpd", MOVUPD, [ModRm, UseModRm], [Wpd, Vpd], HARMLESS | SSE)),
    (0x12, op!("movlpd %Vq,%Mq", MOVLPD, [ModRm, UseModRm], [Vq, Mq], HARMLESS | SSE)),
    (0x13, op!("movlpd %Mq,%Vq", MOVLPD, [ModRm, UseModRm], [Mq, Vq], HARMLESS | SSE)),
    (0x14, op!("unpcklpd %Vpd,%Wq", UNPCKLPD, [ModRm, UseModRm], [Vpd, Wq], HARMLESS | SSE)),
    (0x15, op!("unpckhpd %Vpd,%Wq", UNPCKHPD, [ModRm, UseModRm], [Vpd, Wq], HARMLESS | SSE)),
    (0x16, op!("movhpd %Vq,%Mq", MOVHPD, [ModRm, UseModRm], [Vq, Mq], HARMLESS | SSE)),
    (0x17, op!("movhpd %Mq,%Vq", MOVHPD, [ModRm, UseModRm], [Mq, Vq], HARMLESS | SSE)),
    (0x28, op!("movapd %Vpd,%Wpd", MOVAPD, [ModRm, UseModRm], [Vpd, Wpd], HARMLESS | SSE)),
    (0x29, op!("movapd %Wpd,%Vpd", MOVAPD, [ModRm, UseModRm], [Wpd, Vpd], HARMLESS | SSE)),
    (0x2a, op!("cvtpi2pd %Vpd,%Qq", CVTPI2PD, [ModRm, UseModRm], [Vpd, Qq], HARMLESS | SSE)),
    (0x2b, op!("movntpd %Mdq,%Vpd", MOVNTPD, [ModRm, UseModRm], [Mdq, Vpd], HARMLESS | SSE)),
    (0x2c, op!("cvttpd2pi %Pq,%Wpd", CVTTPD2PI, [ModRm, UseModRm], [Pq, Wpd], HARMLESS | SSE)),
    (0x2d, op!("cvtpd2pi %Pq,%Wpd", CVTPD2PI, [ModRm, UseModRm], [Pq, Wpd], HARMLESS | SSE)),
    (0x2e, op!("ucomisd %Vsd,%Wsd", UCOMISD, [ModRm, UseModRm], [Vsd, Wsd], HARMLESS | SSE)),
    (0x2f, op!("comisd %Vsd,%Wsd", COMISD, [ModRm, UseModRm], [Vsd, Wsd], HARMLESS | SSE)),
    (0x50, op!("movmskpd %Gd,%Upd", MOVMSKPD, [ModRm, UseModRm], [Gd, Upd], HARMLESS | SSE)),
    (0x51, op!("sqrtpd %Vpd,%Wpd", SQRTPD, [ModRm, UseModRm], [Vpd, Wpd], HARMLESS | SSE)),
    (0x54, op!("andpd %Vpd,%Wpd", ANDPD, [ModRm, UseModRm], [Vpd, Wpd], HARMLESS | SSE)),
    (0x55, op!("andnpd %Vpd,%Wpd", ANDNPD, [ModRm, UseModRm], [Vpd, Wpd], HARMLESS | SSE)),
    (0x56, op!("orpd %Vpd,%Wpd", ORPD, [ModRm, UseModRm], [Vpd, Wpd], HARMLESS | SSE)),
    (0x57, op!("xorpd %Vpd,%Wpd", XORPD, [ModRm, UseModRm], [Vpd, Wpd], HARMLESS | SSE)),
    (0x58, op!("addpd %Vpd,%Wpd", ADDPD, [ModRm, UseModRm], [Vpd, Wpd], HARMLESS | SSE)),
    (0x59, op!("mulpd %Vpd,%Wpd", MULPD, [ModRm, UseModRm], [Vpd, Wpd], HARMLESS | SSE)),
    (0x5a, op!("cvtpd2ps %Vps,%Wpd", CVTPD2PS, [ModRm, UseModRm], [Vps, Wpd], HARMLESS | SSE)),
    (0x5b, op!("cvtps2dq %Vdq,%Wps", CVTPS2DQ, [ModRm, UseModRm], [Vdq, Wps], HARMLESS | SSE)),
    (0x5c, op!("subpd %Vpd,%Wpd", SUBPD, [ModRm, UseModRm], [Vpd, Wpd], HARMLESS | SSE)),
    (0x5d, op!("minpd %Vpd,%Wpd", MINPD, [ModRm, UseModRm], [Vpd, Wpd], HARMLESS | SSE)),
    (0x5e, op!("divpd %Vpd,%Wpd", DIVPD, [ModRm, UseModRm], [Vpd, Wpd], HARMLESS | SSE)),
    (0x5f, op!("maxpd %Vpd,%Wpd", MAXPD, [ModRm, UseModRm], [Vpd, Wpd], HARMLESS | SSE)),
    (0x60, op!("punpcklbw %Vdq,%Wdq", PUNPCKLBW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x61, op!("punpcklwd %Vdq,%Wdq", PUNPCKLWD, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x62, op!("punpckldq %Vdq,%Wdq", PUNPCKLDQ, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x63, op!("packsswb %Vdq,%Wdq", PACKSSWB, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x64, op!("pcmpgtb %Vdq,%Wdq", PCMPGTB, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x65, op!("pcmpgtw %Vdq,%Wdq", PCMPGTW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x66, op!("pcmpgtd %Vdq,%Wdq", PCMPGTD, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x67, op!("packuswb %Vdq,%Wdq", PACKUSWB, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x68, op!("punpckhbw %Vdq,%Wdq", PUNPCKHBW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x69, op!("punpckhwd %Vdq,%Wdq", PUNPCKHWD, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x6a, op!("punpckhdq %Vdq,%Wdq", PUNPCKHDQ, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x6b, op!("packssdw %Vdq,%Wdq", PACKSSDW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x6c, op!("punpcklqdq %Vdq,%Wdq", PUNPCKLQDQ, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x6d, op!("punpckhqdq %Vdq,%Wdq", PUNPCKHQDQ, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x6e, op!("movd %Vdq,%Ey", MOVD, [ModRm, UseModRm], [Vdq, Ey], HARMLESS | SSE)),
    (0x6f, op!("movdqa %Vdq,%Wdq", MOVDQA, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x70, op!("pshufd %Vdq,%Wdq,%Ib", PSHUFD, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | SSE)),
    (0x74, op!("pcmpeqb %Vdq,%Wdq", PCMPEQB, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x75, op!("pcmpeqw %Vdq,%Wdq", PCMPEQW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x76, op!("pcmpeqd %Vdq,%Wdq", PCMPEQD, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x7c, op!("haddpd %Vpd,%Wpd", HADDPD, [ModRm, UseModRm], [Vpd, Wpd], HARMLESS | SSE)),
    (0x7d, op!("hsubpd %Vpd,%Wpd", HSUBPD, [ModRm, UseModRm], [Vpd, Wpd], HARMLESS | SSE)),
    (0x7e, op!("movd %Ey,%Vdq", MOVD, [ModRm, UseModRm], [Ey, Vdq], HARMLESS | SSE)),
    (0x7f, op!("movdqa %Wdq,%Vdq", MOVDQA, [ModRm, UseModRm], [Wdq, Vdq], HARMLESS | SSE)),
    (0xc2, op!("cmppd %Vpd,%Wpd,%Ib", CMPPD, [ModRm, UseModRm, ImmByte], [Vpd, Wpd, Ib], HARMLESS | SSE)),
    (0xc4, op!("pinsrw %Vdq,%Ed,%Ib", PINSRW, [ModRm, UseModRm, ImmByte], [Vdq, Ed, Ib], HARMLESS | SSE)),
    (0xc5, op!("pextrw %Gd,%Udq,%Ib", PEXTRW, [ModRm, UseModRm, ImmByte], [Gd, Udq, Ib], HARMLESS | SSE)),
    (0xc6, op!("shufpd %Vpd,%Wpd,%Ib", SHUFPD, [ModRm, UseModRm, ImmByte], [Vpd, Wpd, Ib], HARMLESS | SSE)),
    (0xd0, op!("addsubpd %Vpd,%Wpd", ADDSUBPD, [ModRm, UseModRm], [Vpd, Wpd], HARMLESS | SSE)),
    (0xd1, op!("psrlw %Vdq,%Wdq", PSRLW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xd2, op!("psrld %Vdq,%Wdq", PSRLD, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xd3, op!("psrlq %Vdq,%Wdq", PSRLQ, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xd4, op!("paddq %Vdq,%Wdq", PADDQ, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xd5, op!("pmullw %Vdq,%Wdq", PMULLW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xd6, op!("movq %Wq,%Vq", MOVQ, [ModRm, UseModRm], [Wq, Vq], HARMLESS | SSE)),
    (0xd7, op!("pmovmskb %Gd,%Udq", PMOVMSKB, [ModRm, UseModRm], [Gd, Udq], HARMLESS | SSE | DEFAULT_64_OP_SIZE)),
    (0xd8, op!("psubusb %Vdq,%Wdq", PSUBUSB, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xd9, op!("psubusw %Vdq,%Wdq", PSUBUSW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xda, op!("pminub %Vdq,%Wdq", PMINUB, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xdb, op!("pand %Vdq,%Wdq", PAND, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xdc, op!("paddusb %Vdq,%Wdq", PADDUSB, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xdd, op!("paddusw %Vdq,%Wdq", PADDUSW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xde, op!("pmaxub %Vdq,%Wdq", PMAXUB, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xdf, op!("pandn %Vdq,%Wdq", PANDN, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xe0, op!("pavgb %Vdq,%Wdq", PAVGB, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xe1, op!("psraw %Vdq,%Wdq", PSRAW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xe2, op!("psrad %Vdq,%Wdq", PSRAD, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xe3, op!("pavgw %Vdq,%Wdq", PAVGW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xe4, op!("pmulhuw %Vdq,%Wdq", PMULHUW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xe5, op!("pmulhw %Vdq,%Wdq", PMULHW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xe6, op!("cvttpd2dq %Vdq,%Wpd", CVTTPD2DQ, [ModRm, UseModRm], [Vdq, Wpd], HARMLESS | SSE)),
    (0xe7, op!("movntdq %Mdq,%Vdq", MOVNTDQ, [ModRm, UseModRm], [Mdq, Vdq], HARMLESS | SSE)),
    (0xe8, op!("psubsb %Vdq,%Wdq", PSUBSB, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xe9, op!("psubsw %Vdq,%Wdq", PSUBSW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xea, op!("pminsw %Vdq,%Wdq", PMINSW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xeb, op!("por %Vdq,%Wdq", POR, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xec, op!("paddsb %Vdq,%Wdq", PADDSB, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xed, op!("paddsw %Vdq,%Wdq", PADDSW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xee, op!("pmaxsw %Vdq,%Wdq", PMAXSW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xef, op!("pxor %Vdq,%Wdq", PXOR, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xf1, op!("psllw %Vdq,%Wdq", PSLLW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xf2, op!("pslld %Vdq,%Wdq", PSLLD, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xf3, op!("psllq %Vdq,%Wdq", PSLLQ, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xf4, op!("pmuludq %Vdq,%Wdq", PMULUDQ, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xf5, op!("pmaddwd %Vdq,%Wdq", PMADDWD, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xf6, op!("psadbw %Vdq,%Wdq", PSADBW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xf7, op!("maskmovdqu %Vdq,%Udq", MASKMOVDQU, [ModRm, UseModRm], [Vdq, Udq], HARMLESS | SSE)),
    (0xf8, op!("psubb %Vdq,%Wdq", PSUBB, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xf9, op!("psubw %Vdq,%Wdq", PSUBW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xfa, op!("psubd %Vdq,%Wdq", PSUBD, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xfb, op!("psubq %Vdq,%Wdq", PSUBQ, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xfc, op!("paddb %Vdq,%Wdq", PADDB, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xfd, op!("paddw %Vdq,%Wdq", PADDW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xfe, op!("paddd %Vdq,%Wdq", PADDD, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
]);

/// `f2 0f xx` map.
pub(crate) static TWO_BYTE_F2: SparseMap = SparseMap::new(&[
    (0x10, op!("movsd %Vsd,%Wsd", MOVSD_SSE, [ModRm, UseModRm], [Vsd, Wsd], HARMLESS | SSE)),
    (0x11, op!("movsd %Wsd,%Vsd", MOVSD_SSE, [ModRm, UseModRm], [Wsd, Vsd], HARMLESS | SSE)),
    (0x12, op!("movddup %Vpd,%Wq", MOVDDUP, [ModRm, UseModRm], [Vpd, Wq], HARMLESS | SSE)),
    (0x2a, op!("cvtsi2sd %Vsd,%Ey", CVTSI2SD, [ModRm, UseModRm], [Vsd, Ey], HARMLESS | SSE)),
    (0x2c, op!("cvttsd2si %Gy,%Wsd", CVTTSD2SI, [ModRm, UseModRm], [Gy, Wsd], HARMLESS | SSE)),
    (0x2d, op!("cvtsd2si %Gy,%Wsd", CVTSD2SI, [ModRm, UseModRm], [Gy, Wsd], HARMLESS | SSE)),
    (0x51, op!("sqrtsd %Vsd,%Wsd", SQRTSD, [ModRm, UseModRm], [Vsd, Wsd], HARMLESS | SSE)),
    (0x58, op!("addsd %Vsd,%Wsd", ADDSD, [ModRm, UseModRm], [Vsd, Wsd], HARMLESS | SSE)),
    (0x59, op!("mulsd %Vsd,%Wsd", MULSD, [ModRm, UseModRm], [Vsd, Wsd], HARMLESS | SSE)),
    (0x5a, op!("cvtsd2ss %Vss,%Wsd", CVTSD2SS, [ModRm, UseModRm], [Vss, Wsd], HARMLESS | SSE)),
    (0x5c, op!("subsd %Vsd,%Wsd", SUBSD, [ModRm, UseModRm], [Vsd, Wsd], HARMLESS | SSE)),
    (0x5d, op!("minsd %Vsd,%Wsd", MINSD, [ModRm, UseModRm], [Vsd, Wsd], HARMLESS | SSE)),
    (0x5e, op!("divsd %Vsd,%Wsd", DIVSD, [ModRm, UseModRm], [Vsd, Wsd], HARMLESS | SSE)),
    (0x5f, op!("maxsd %Vsd,%Wsd", MAXSD, [ModRm, UseModRm], [Vsd, Wsd], HARMLESS | SSE)),
    (0x70, op!("pshuflw %Vdq,%Wdq,%Ib", PSHUFLW, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | SSE)),
    (0x7c, op!("haddps %Vps,%Wps", HADDPS, [ModRm, UseModRm], [Vps, Wps], HARMLESS | SSE)),
    (0x7d, op!("hsubps %Vps,%Wps", HSUBPS, [ModRm, UseModRm], [Vps, Wps], HARMLESS | SSE)),
    (0xc2, op!("cmpsd %Vsd,%Wsd,%Ib", CMPSD_SSE, [ModRm, UseModRm, ImmByte], [Vsd, Wsd, Ib], HARMLESS | SSE)),
    (0xd0, op!("addsubps %Vps,%Wps", ADDSUBPS, [ModRm, UseModRm], [Vps, Wps], HARMLESS | SSE)),
    (0xd6, op!("movdq2q %Pq,%Uq", MOVDQ2Q, [ModRm, UseModRm], [Pq, Uq], HARMLESS | SSE)),
    (0xe6, op!("cvtpd2dq %Vdq,%Wpd", CVTPD2DQ, [ModRm, UseModRm], [Vdq, Wpd], HARMLESS | SSE)),
    (0xf0, op!("lddqu %Vdq,%Mdq", LDDQU, [ModRm, UseModRm], [Vdq, Mdq], HARMLESS | SSE)),
]);

/// `f3 0f xx` map.
pub(crate) static TWO_BYTE_F3: SparseMap = SparseMap::new(&[
    (0x10, op!("movss %Vss,%Wss", MOVSS, [ModRm, UseModRm], [Vss, Wss], HARMLESS | SSE)),
    (0x11, op!("movss %Wss,%Vss", MOVSS, [ModRm, UseModRm], [Wss, Vss], HARMLESS | SSE)),
    (0x12, op!("movsldup %Vps,%Wps", MOVSLDUP, [ModRm, UseModRm], [Vps, Wps], HARMLESS | SSE)),
    (0x16, op!("movshdup %Vps,%Wps", MOVSHDUP, [ModRm, UseModRm], [Vps, Wps], HARMLESS | SSE)),
    (0x2a, op!("cvtsi2ss %Vss,%Ey", CVTSI2SS, [ModRm, UseModRm], [Vss, Ey], HARMLESS | SSE)),
    (0x2c, op!("cvttss2si %Gy,%Wss", CVTTSS2SI, [ModRm, UseModRm], [Gy, Wss], HARMLESS | SSE)),
    (0x2d, op!("cvtss2si %Gy,%Wss", CVTSS2SI, [ModRm, UseModRm], [Gy, Wss], HARMLESS | SSE)),
    (0x51, op!("sqrtss %Vss,%Wss", SQRTSS, [ModRm, UseModRm], [Vss, Wss], HARMLESS | SSE)),
    (0x52, op!("rsqrtss %Vss,%Wss", RSQRTSS, [ModRm, UseModRm], [Vss, Wss], HARMLESS | SSE)),
    (0x53, op!("rcpss %Vss,%Wss", RCPSS, [ModRm, UseModRm], [Vss, Wss], HARMLESS | SSE)),
    (0x58, op!("addss %Vss,%Wss", ADDSS, [ModRm, UseModRm], [Vss, Wss], HARMLESS | SSE)),
    (0x59, op!("mulss %Vss,%Wss", MULSS, [ModRm, UseModRm], [Vss, Wss], HARMLESS | SSE)),
    (0x5a, op!("cvtss2sd %Vsd,%Wss", CVTSS2SD, [ModRm, UseModRm], [Vsd, Wss], HARMLESS | SSE)),
    (0x5b, op!("cvttps2dq %Vdq,%Wps", CVTTPS2DQ, [ModRm, UseModRm], [Vdq, Wps], HARMLESS | SSE)),
    (0x5c, op!("subss %Vss,%Wss", SUBSS, [ModRm, UseModRm], [Vss, Wss], HARMLESS | SSE)),
    (0x5d, op!("minss %Vss,%Wss", MINSS, [ModRm, UseModRm], [Vss, Wss], HARMLESS | SSE)),
    (0x5e, op!("divss %Vss,%Wss", DIVSS, [ModRm, UseModRm], [Vss, Wss], HARMLESS | SSE)),
    (0x5f, op!("maxss %Vss,%Wss", MAXSS, [ModRm, UseModRm], [Vss, Wss], HARMLESS | SSE)),
    (0x6f, op!("movdqu %Vdq,%Wdq", MOVDQU, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x70, op!("pshufhw %Vdq,%Wdq,%Ib", PSHUFHW, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | SSE)),
    (0x7e, op!("movq %Vq,%Wq", MOVQ, [ModRm, UseModRm], [Vq, Wq], HARMLESS | SSE)),
    (0x7f, op!("movdqu %Wdq,%Vdq", MOVDQU, [ModRm, UseModRm], [Wdq, Vdq], HARMLESS | SSE)),
    (0xb8, op!("popcnt %Gv,%Ev", POPCNT, [ModRm, UseModRm], [Gv, Ev], HARMLESS)),
    (0xbc, op!("tzcnt %Gv,%Ev", TZCNT, [ModRm, UseModRm], [Gv, Ev], HARMLESS)),
    (0xbd, op!("lzcnt %Gv,%Ev", LZCNT, [ModRm, UseModRm], [Gv, Ev], HARMLESS)),
    (0xc2, op!("cmpss %Vss,%Wss,%Ib", CMPSS, [ModRm, UseModRm, ImmByte], [Vss, Wss, Ib], HARMLESS | SSE)),
    (0xd6, op!("movq2dq %Vdq,%Nq", MOVQ2DQ, [ModRm, UseModRm], [Vdq, Nq], HARMLESS | SSE)),
    (0xe6, op!("cvtdq2pd %Vpd,%Wq", CVTDQ2PD, [ModRm, UseModRm], [Vpd, Wq], HARMLESS | SSE)),
]);

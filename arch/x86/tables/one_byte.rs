use crate::opcode::{op, Descriptor, INVALID_NOMODRM};

const X86_MAP: [Descriptor; 256] = [
    // 0x00
    op!("add %Eb,%Gb", ADD, [ModRm, UseModRm], [Eb, Gb], HARMLESS),
    op!("add %Ev,%Gv", ADD, [ModRm, UseModRm], [Ev, Gv], HARMLESS),
    op!("add %Gb,%Eb", ADD, [ModRm, UseModRm], [Gb, Eb], HARMLESS),
    op!("add %Gv,%Ev", ADD, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("add %AL,%Ib", ADD, [FixedReg, ImmByte], [AL, Ib], HARMLESS),
    op!("add %eAX,%Iz", ADD, [FixedReg, ImmZ], [eAX, Iz], HARMLESS),
    op!("push %ES", PUSH, [FixedReg], [ES], HARMLESS | INVALID_64),
    op!("pop %ES", POP, [FixedReg], [ES], HARMLESS | INVALID_64),
    op!("or %Eb,%Gb", OR, [ModRm, UseModRm], [Eb, Gb], HARMLESS),
    op!("or %Ev,%Gv", OR, [ModRm, UseModRm], [Ev, Gv], HARMLESS),
    op!("or %Gb,%Eb", OR, [ModRm, UseModRm], [Gb, Eb], HARMLESS),
    op!("or %Gv,%Ev", OR, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("or %AL,%Ib", OR, [FixedReg, ImmByte], [AL, Ib], HARMLESS),
    op!("or %eAX,%Iz", OR, [FixedReg, ImmZ], [eAX, Iz], HARMLESS),
    op!("push %CS", PUSH, [FixedReg], [CS], HARMLESS | INVALID_64),
    op!("2-byte escape", ESCAPE, [TwoByteEsc], []),
    // 0x10
    op!("adc %Eb,%Gb", ADC, [ModRm, UseModRm], [Eb, Gb], HARMLESS),
    op!("adc %Ev,%Gv", ADC, [ModRm, UseModRm], [Ev, Gv], HARMLESS),
    op!("adc %Gb,%Eb", ADC, [ModRm, UseModRm], [Gb, Eb], HARMLESS),
    op!("adc %Gv,%Ev", ADC, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("adc %AL,%Ib", ADC, [FixedReg, ImmByte], [AL, Ib], HARMLESS),
    op!("adc %eAX,%Iz", ADC, [FixedReg, ImmZ], [eAX, Iz], HARMLESS),
    op!("push %SS", PUSH, [FixedReg], [SS], HARMLESS | INVALID_64),
    op!("pop %SS", POP, [FixedReg], [SS], HARMLESS | INHIBIT_IRQS | INVALID_64),
    op!("sbb %Eb,%Gb", SBB, [ModRm, UseModRm], [Eb, Gb], HARMLESS),
    op!("sbb %Ev,%Gv", SBB, [ModRm, UseModRm], [Ev, Gv], HARMLESS),
    op!("sbb %Gb,%Eb", SBB, [ModRm, UseModRm], [Gb, Eb], HARMLESS),
    op!("sbb %Gv,%Ev", SBB, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("sbb %AL,%Ib", SBB, [FixedReg, ImmByte], [AL, Ib], HARMLESS),
    op!("sbb %eAX,%Iz", SBB, [FixedReg, ImmZ], [eAX, Iz], HARMLESS),
    op!("push %DS", PUSH, [FixedReg], [DS], HARMLESS | INVALID_64),
    op!("pop %DS", POP, [FixedReg], [DS], HARMLESS | INVALID_64),
    // 0x20
    op!("and %Eb,%Gb", AND, [ModRm, UseModRm], [Eb, Gb], HARMLESS),
    op!("and %Ev,%Gv", AND, [ModRm, UseModRm], [Ev, Gv], HARMLESS),
    op!("and %Gb,%Eb", AND, [ModRm, UseModRm], [Gb, Eb], HARMLESS),
    op!("and %Gv,%Ev", AND, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("and %AL,%Ib", AND, [FixedReg, ImmByte], [AL, Ib], HARMLESS),
    op!("and %eAX,%Iz", AND, [FixedReg, ImmZ], [eAX, Iz], HARMLESS),
    op!("seg es", PREFIX_SEG, [], [ES]),
    op!("daa", DAA, [], [], HARMLESS | INVALID_64),
    op!("sub %Eb,%Gb", SUB, [ModRm, UseModRm], [Eb, Gb], HARMLESS),
    op!("sub %Ev,%Gv", SUB, [ModRm, UseModRm], [Ev, Gv], HARMLESS),
    op!("sub %Gb,%Eb", SUB, [ModRm, UseModRm], [Gb, Eb], HARMLESS),
    op!("sub %Gv,%Ev", SUB, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("sub %AL,%Ib", SUB, [FixedReg, ImmByte], [AL, Ib], HARMLESS),
    op!("sub %eAX,%Iz", SUB, [FixedReg, ImmZ], [eAX, Iz], HARMLESS),
    op!("seg cs", PREFIX_SEG, [], [CS]),
    op!("das", DAS, [], [], HARMLESS | INVALID_64),
    // 0x30
    op!("xor %Eb,%Gb", XOR, [ModRm, UseModRm], [Eb, Gb], HARMLESS),
    op!("xor %Ev,%Gv", XOR, [ModRm, UseModRm], [Ev, Gv], HARMLESS),
    op!("xor %Gb,%Eb", XOR, [ModRm, UseModRm], [Gb, Eb], HARMLESS),
    op!("xor %Gv,%Ev", XOR, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("xor %AL,%Ib", XOR, [FixedReg, ImmByte], [AL, Ib], HARMLESS),
    op!("xor %eAX,%Iz", XOR, [FixedReg, ImmZ], [eAX, Iz], HARMLESS),
    op!("seg ss", PREFIX_SEG, [], [SS]),
    op!("aaa", AAA, [], [], HARMLESS | INVALID_64),
    op!("cmp %Eb,%Gb", CMP, [ModRm, UseModRm], [Eb, Gb], HARMLESS),
    op!("cmp %Ev,%Gv", CMP, [ModRm, UseModRm], [Ev, Gv], HARMLESS),
    op!("cmp %Gb,%Eb", CMP, [ModRm, UseModRm], [Gb, Eb], HARMLESS),
    op!("cmp %Gv,%Ev", CMP, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("cmp %AL,%Ib", CMP, [FixedReg, ImmByte], [AL, Ib], HARMLESS),
    op!("cmp %eAX,%Iz", CMP, [FixedReg, ImmZ], [eAX, Iz], HARMLESS),
    op!("seg ds", PREFIX_SEG, [], [DS]),
    op!("aas", AAS, [], [], HARMLESS | INVALID_64),
    // 0x40
    op!("inc %eAX", INC, [FixedReg], [eAX], HARMLESS),
    op!("inc %eCX", INC, [FixedReg], [eCX], HARMLESS),
    op!("inc %eDX", INC, [FixedReg], [eDX], HARMLESS),
    op!("inc %eBX", INC, [FixedReg], [eBX], HARMLESS),
    op!("inc %eSP", INC, [FixedReg], [eSP], HARMLESS),
    op!("inc %eBP", INC, [FixedReg], [eBP], HARMLESS),
    op!("inc %eSI", INC, [FixedReg], [eSI], HARMLESS),
    op!("inc %eDI", INC, [FixedReg], [eDI], HARMLESS),
    op!("dec %eAX", DEC, [FixedReg], [eAX], HARMLESS),
    op!("dec %eCX", DEC, [FixedReg], [eCX], HARMLESS),
    op!("dec %eDX", DEC, [FixedReg], [eDX], HARMLESS),
    op!("dec %eBX", DEC, [FixedReg], [eBX], HARMLESS),
    op!("dec %eSP", DEC, [FixedReg], [eSP], HARMLESS),
    op!("dec %eBP", DEC, [FixedReg], [eBP], HARMLESS),
    op!("dec %eSI", DEC, [FixedReg], [eSI], HARMLESS),
    op!("dec %eDI", DEC, [FixedReg], [eDI], HARMLESS),
    // 0x50
    op!("push %eAX", PUSH, [FixedReg], [eAX], HARMLESS | DEFAULT_64_OP_SIZE | REXB_EXTENDS_OPREG),
    op!("push %eCX", PUSH, [FixedReg], [eCX], HARMLESS | DEFAULT_64_OP_SIZE | REXB_EXTENDS_OPREG),
    op!("push %eDX", PUSH, [FixedReg], [eDX], HARMLESS | DEFAULT_64_OP_SIZE | REXB_EXTENDS_OPREG),
    op!("push %eBX", PUSH, [FixedReg], [eBX], HARMLESS | DEFAULT_64_OP_SIZE | REXB_EXTENDS_OPREG),
    op!("push %eSP", PUSH, [FixedReg], [eSP], HARMLESS | DEFAULT_64_OP_SIZE | REXB_EXTENDS_OPREG),
    op!("push %eBP", PUSH, [FixedReg], [eBP], HARMLESS | DEFAULT_64_OP_SIZE | REXB_EXTENDS_OPREG),
    op!("push %eSI", PUSH, [FixedReg], [eSI], HARMLESS | DEFAULT_64_OP_SIZE | REXB_EXTENDS_OPREG),
    op!("push %eDI", PUSH, [FixedReg], [eDI], HARMLESS | DEFAULT_64_OP_SIZE | REXB_EXTENDS_OPREG),
    op!("pop %eAX", POP, [FixedReg], [eAX], HARMLESS | DEFAULT_64_OP_SIZE | REXB_EXTENDS_OPREG),
    op!("pop %eCX", POP, [FixedReg], [eCX], HARMLESS | DEFAULT_64_OP_SIZE | REXB_EXTENDS_OPREG),
    op!("pop %eDX", POP, [FixedReg], [eDX], HARMLESS | DEFAULT_64_OP_SIZE | REXB_EXTENDS_OPREG),
    op!("pop %eBX", POP, [FixedReg], [eBX], HARMLESS | DEFAULT_64_OP_SIZE | REXB_EXTENDS_OPREG),
    op!("pop %eSP", POP, [FixedReg], [eSP], HARMLESS | DEFAULT_64_OP_SIZE | REXB_EXTENDS_OPREG),
    op!("pop %eBP", POP, [FixedReg], [eBP], HARMLESS | DEFAULT_64_OP_SIZE | REXB_EXTENDS_OPREG),
    op!("pop %eSI", POP, [FixedReg], [eSI], HARMLESS | DEFAULT_64_OP_SIZE | REXB_EXTENDS_OPREG),
    op!("pop %eDI", POP, [FixedReg], [eDI], HARMLESS | DEFAULT_64_OP_SIZE | REXB_EXTENDS_OPREG),
    // 0x60
    op!("pusha", PUSHA, [], [], HARMLESS | INVALID_64),
    op!("popa", POPA, [], [], HARMLESS | INVALID_64),
    op!("bound %Gv,%Ma", BOUND, [ModRm, UseModRm], [Gv, Ma], HARMLESS | INVALID_64),
    op!("arpl %Ew,%Gw", ARPL, [ModRm, UseModRm], [Ew, Gw], HARMLESS | INVALID_64),
    op!("seg fs", PREFIX_SEG, [], [FS]),
    op!("seg gs", PREFIX_SEG, [], [GS]),
    op!("opsize", PREFIX_OPSIZE, [], []),
    op!("addrsize", PREFIX_ADDRSIZE, [], []),
    op!("push %Iz", PUSH, [ImmZ], [Iz], HARMLESS | DEFAULT_64_OP_SIZE),
    op!("imul %Gv,%Ev,%Iz", IMUL, [ModRm, UseModRm, ImmZ], [Gv, Ev, Iz], HARMLESS),
    op!("push %Ib", PUSH, [ImmByteSx], [Ib], HARMLESS | DEFAULT_64_OP_SIZE),
    op!("imul %Gv,%Ev,%Ib", IMUL, [ModRm, UseModRm, ImmByteSx], [Gv, Ev, Ib], HARMLESS),
    op!("insb", INSB, [Yb, FixedReg], [Yb, DX], PORTIO | PORTIO_READ),
    op!("insw", INSWD, [Yv, FixedReg], [Yv, DX], PORTIO | PORTIO_READ),
    op!("outsb", OUTSB, [FixedReg, Xb], [DX, Xb], PORTIO | PORTIO_WRITE),
    op!("outsw", OUTSWD, [FixedReg, Xv], [DX, Xv], PORTIO | PORTIO_WRITE),
    // 0x70
    op!("jo %Jb", JO, [ImmBRel], [Jb], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jno %Jb", JNO, [ImmBRel], [Jb], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jb %Jb", JB, [ImmBRel], [Jb], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jae %Jb", JAE, [ImmBRel], [Jb], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("je %Jb", JE, [ImmBRel], [Jb], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jne %Jb", JNE, [ImmBRel], [Jb], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jbe %Jb", JBE, [ImmBRel], [Jb], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("ja %Jb", JA, [ImmBRel], [Jb], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("js %Jb", JS, [ImmBRel], [Jb], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jns %Jb", JNS, [ImmBRel], [Jb], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jp %Jb", JP, [ImmBRel], [Jb], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jnp %Jb", JNP, [ImmBRel], [Jb], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jl %Jb", JL, [ImmBRel], [Jb], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jge %Jb", JGE, [ImmBRel], [Jb], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jle %Jb", JLE, [ImmBRel], [Jb], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jg %Jb", JG, [ImmBRel], [Jb], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    // 0x80
    op!("Imm Grp1", ESCAPE, [Grp1], []),
    op!("Imm Grp1", ESCAPE, [Grp1], []),
    op!("Imm Grp1", ESCAPE, [Grp1], [], INVALID_64),
    op!("Imm Grp1", ESCAPE, [Grp1], []),
    op!("test %Eb,%Gb", TEST, [ModRm, UseModRm], [Eb, Gb], HARMLESS),
    op!("test %Ev,%Gv", TEST, [ModRm, UseModRm], [Ev, Gv], HARMLESS),
    op!("xchg %Eb,%Gb", XCHG, [ModRm, UseModRm], [Eb, Gb], HARMLESS),
    op!("xchg %Ev,%Gv", XCHG, [ModRm, UseModRm], [Ev, Gv], HARMLESS),
    op!("mov %Eb,%Gb", MOV, [ModRm, UseModRm], [Eb, Gb], HARMLESS),
    op!("mov %Ev,%Gv", MOV, [ModRm, UseModRm], [Ev, Gv], HARMLESS),
    op!("mov %Gb,%Eb", MOV, [ModRm, UseModRm], [Gb, Eb], HARMLESS),
    op!("mov %Gv,%Ev", MOV, [ModRm, UseModRm], [Gv, Ev], HARMLESS),
    op!("mov %Ev,%Sw", MOV, [ModRm, UseModRm], [Ev, Sw], HARMLESS),
    op!("lea %Gv,%M", LEA, [ModRm, UseModRm], [Gv, M], HARMLESS),
    op!("mov %Sw,%Ew", MOV, [ModRm, UseModRm], [Sw, Ew], HARMLESS | INHIBIT_IRQS),
    op!("pop %Ev", POP, [ModRm], [Ev], HARMLESS | DEFAULT_64_OP_SIZE),
    // 0x90
    op!("nop", NOP, [NopPause], []),
    op!("xchg %eCX,%eAX", XCHG, [FixedReg, FixedReg], [eCX, eAX], HARMLESS | REXB_EXTENDS_OPREG),
    op!("xchg %eDX,%eAX", XCHG, [FixedReg, FixedReg], [eDX, eAX], HARMLESS | REXB_EXTENDS_OPREG),
    op!("xchg %eBX,%eAX", XCHG, [FixedReg, FixedReg], [eBX, eAX], HARMLESS | REXB_EXTENDS_OPREG),
    op!("xchg %eSP,%eAX", XCHG, [FixedReg, FixedReg], [eSP, eAX], HARMLESS | REXB_EXTENDS_OPREG),
    op!("xchg %eBP,%eAX", XCHG, [FixedReg, FixedReg], [eBP, eAX], HARMLESS | REXB_EXTENDS_OPREG),
    op!("xchg %eSI,%eAX", XCHG, [FixedReg, FixedReg], [eSI, eAX], HARMLESS | REXB_EXTENDS_OPREG),
    op!("xchg %eDI,%eAX", XCHG, [FixedReg, FixedReg], [eDI, eAX], HARMLESS | REXB_EXTENDS_OPREG),
    op!("cwde", CWDE, [], [], HARMLESS),
    op!("cdq", CDQ, [], [], HARMLESS),
    op!("call %Ap", CALL, [ImmAddrF], [Ap], CONTROLFLOW | UNCOND_CONTROLFLOW | INVALID_64),
    op!("wait", WAIT, [], [], HARMLESS),
    op!("pushf", PUSHF, [], [], POTENTIALLY_DANGEROUS | DEFAULT_64_OP_SIZE),
    op!("popf", POPF, [], [], POTENTIALLY_DANGEROUS | DEFAULT_64_OP_SIZE),
    op!("sahf", SAHF, [], [], HARMLESS),
    op!("lahf", LAHF, [], [], HARMLESS),
    // 0xA0
    op!("mov %AL,%Ob", MOV, [FixedReg, ImmAddr], [AL, Ob], HARMLESS),
    op!("mov %eAX,%Ov", MOV, [FixedReg, ImmAddr], [eAX, Ov], HARMLESS),
    op!("mov %Ob,%AL", MOV, [ImmAddr, FixedReg], [Ob, AL], HARMLESS),
    op!("mov %Ov,%eAX", MOV, [ImmAddr, FixedReg], [Ov, eAX], HARMLESS),
    op!("movsb", MOVSB, [Yb, Xb], [Yb, Xb], HARMLESS),
    op!("movsw", MOVSWD, [Yv, Xv], [Yv, Xv], HARMLESS),
    op!("cmpsb", CMPSB, [Xb, Yb], [Xb, Yb], HARMLESS),
    op!("cmpsw", CMPSWD, [Xv, Yv], [Xv, Yv], HARMLESS),
    op!("test %AL,%Ib", TEST, [FixedReg, ImmByte], [AL, Ib], HARMLESS),
    op!("test %eAX,%Iz", TEST, [FixedReg, ImmZ], [eAX, Iz], HARMLESS),
    op!("stosb", STOSB, [Yb, FixedReg], [Yb, AL], HARMLESS),
    op!("stosw", STOSWD, [Yv, FixedReg], [Yv, eAX], HARMLESS),
    op!("lodsb", LODSB, [FixedReg, Xb], [AL, Xb], HARMLESS),
    op!("lodsw", LODSWD, [FixedReg, Xv], [eAX, Xv], HARMLESS),
    op!("scasb", SCASB, [FixedReg, Yb], [AL, Yb], HARMLESS),
    op!("scasw", SCASWD, [FixedReg, Yv], [eAX, Yv], HARMLESS),
    // 0xB0
    op!("mov %AL,%Ib", MOV, [FixedReg, ImmByte], [AL, Ib], HARMLESS | REXB_EXTENDS_OPREG),
    op!("mov %CL,%Ib", MOV, [FixedReg, ImmByte], [CL, Ib], HARMLESS | REXB_EXTENDS_OPREG),
    op!("mov %DL,%Ib", MOV, [FixedReg, ImmByte], [DL, Ib], HARMLESS | REXB_EXTENDS_OPREG),
    op!("mov %BL,%Ib", MOV, [FixedReg, ImmByte], [BL, Ib], HARMLESS | REXB_EXTENDS_OPREG),
    op!("mov %AH,%Ib", MOV, [FixedReg, ImmByte], [AH, Ib], HARMLESS | REXB_EXTENDS_OPREG),
    op!("mov %CH,%Ib", MOV, [FixedReg, ImmByte], [CH, Ib], HARMLESS | REXB_EXTENDS_OPREG),
    op!("mov %DH,%Ib", MOV, [FixedReg, ImmByte], [DH, Ib], HARMLESS | REXB_EXTENDS_OPREG),
    op!("mov %BH,%Ib", MOV, [FixedReg, ImmByte], [BH, Ib], HARMLESS | REXB_EXTENDS_OPREG),
    op!("mov %eAX,%Iv", MOV, [FixedReg, ImmV], [eAX, Iv], HARMLESS | REXB_EXTENDS_OPREG),
    op!("mov %eCX,%Iv", MOV, [FixedReg, ImmV], [eCX, Iv], HARMLESS | REXB_EXTENDS_OPREG),
    op!("mov %eDX,%Iv", MOV, [FixedReg, ImmV], [eDX, Iv], HARMLESS | REXB_EXTENDS_OPREG),
    op!("mov %eBX,%Iv", MOV, [FixedReg, ImmV], [eBX, Iv], HARMLESS | REXB_EXTENDS_OPREG),
    op!("mov %eSP,%Iv", MOV, [FixedReg, ImmV], [eSP, Iv], HARMLESS | REXB_EXTENDS_OPREG),
    op!("mov %eBP,%Iv", MOV, [FixedReg, ImmV], [eBP, Iv], HARMLESS | REXB_EXTENDS_OPREG),
    op!("mov %eSI,%Iv", MOV, [FixedReg, ImmV], [eSI, Iv], HARMLESS | REXB_EXTENDS_OPREG),
    op!("mov %eDI,%Iv", MOV, [FixedReg, ImmV], [eDI, Iv], HARMLESS | REXB_EXTENDS_OPREG),
    // 0xC0
    op!("Shift Grp2", ESCAPE, [ShiftGrp2], []),
    op!("Shift Grp2", ESCAPE, [ShiftGrp2], []),
    op!("retn %Iw", RETN, [ImmUshort], [Iw], CONTROLFLOW | UNCOND_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("retn", RETN, [], [], CONTROLFLOW | UNCOND_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("les %Gv,%Mp", LES, [ModRm, UseModRm], [Gv, Mp], HARMLESS | INVALID_64),
    op!("lds %Gv,%Mp", LDS, [ModRm, UseModRm], [Gv, Mp], HARMLESS | INVALID_64),
    op!("mov %Eb,%Ib", MOV, [ModRm, ImmByte], [Eb, Ib], HARMLESS),
    op!("mov %Ev,%Iz", MOV, [ModRm, ImmZ], [Ev, Iz], HARMLESS),
    op!("enter %Iw,%Ib", ENTER, [ImmUshort, ImmByte], [Iw, Ib], HARMLESS | DEFAULT_64_OP_SIZE),
    op!("leave", LEAVE, [], [], HARMLESS | DEFAULT_64_OP_SIZE),
    op!("retf %Iw", RETF, [ImmUshort], [Iw], CONTROLFLOW | UNCOND_CONTROLFLOW),
    op!("retf", RETF, [], [], CONTROLFLOW | UNCOND_CONTROLFLOW),
    op!("int3", INT3, [], [], INTERRUPT),
    op!("int %Ib", INT, [ImmByte], [Ib], INTERRUPT),
    op!("into", INTO, [], [], INTERRUPT | INVALID_64),
    op!("iret", IRET, [], [], CONTROLFLOW | UNCOND_CONTROLFLOW),
    // 0xD0
    op!("Shift Grp2", ESCAPE, [ShiftGrp2], []),
    op!("Shift Grp2", ESCAPE, [ShiftGrp2], []),
    op!("Shift Grp2", ESCAPE, [ShiftGrp2], []),
    op!("Shift Grp2", ESCAPE, [ShiftGrp2], []),
    op!("aam %Ib", AAM, [ImmByte], [Ib], HARMLESS | INVALID_64),
    op!("aad %Ib", AAD, [ImmByte], [Ib], HARMLESS | INVALID_64),
    op!("salc", SALC, [], [], HARMLESS | INVALID_64),
    op!("xlat", XLAT, [], [], HARMLESS),
    op!("esc 0", ESCAPE, [EscFp], []),
    op!("esc 1", ESCAPE, [EscFp], []),
    op!("esc 2", ESCAPE, [EscFp], []),
    op!("esc 3", ESCAPE, [EscFp], []),
    op!("esc 4", ESCAPE, [EscFp], []),
    op!("esc 5", ESCAPE, [EscFp], []),
    op!("esc 6", ESCAPE, [EscFp], []),
    op!("esc 7", ESCAPE, [EscFp], []),
    // 0xE0
    op!("loopne %Jb", LOOPNE, [ImmBRel], [Jb], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("loope %Jb", LOOPE, [ImmBRel], [Jb], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("loop %Jb", LOOP, [ImmBRel], [Jb], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jecxz %Jb", JCXZ, [ImmBRel], [Jb], CONTROLFLOW | COND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("in %AL,%Ib", IN, [FixedReg, ImmByte], [AL, Ib], PORTIO | PORTIO_READ),
    op!("in %eAX,%Ib", IN, [FixedReg, ImmByte], [eAX, Ib], PORTIO | PORTIO_READ),
    op!("out %Ib,%AL", OUT, [ImmByte, FixedReg], [Ib, AL], PORTIO | PORTIO_WRITE),
    op!("out %Ib,%eAX", OUT, [ImmByte, FixedReg], [Ib, eAX], PORTIO | PORTIO_WRITE),
    op!("call %Jz", CALL, [ImmVRel], [Jz], CONTROLFLOW | UNCOND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jmp %Jz", JMP, [ImmVRel], [Jz], CONTROLFLOW | UNCOND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("jmp %Ap", JMP, [ImmAddrF], [Ap], CONTROLFLOW | UNCOND_CONTROLFLOW | INVALID_64),
    op!("jmp %Jb", JMP, [ImmBRel], [Jb], CONTROLFLOW | UNCOND_CONTROLFLOW | RELATIVE_CONTROLFLOW | FORCED_64_OP_SIZE),
    op!("in %AL,%DX", IN, [FixedReg, FixedReg], [AL, DX], PORTIO | PORTIO_READ),
    op!("in %eAX,%DX", IN, [FixedReg, FixedReg], [eAX, DX], PORTIO | PORTIO_READ),
    op!("out %DX,%AL", OUT, [FixedReg, FixedReg], [DX, AL], PORTIO | PORTIO_WRITE),
    op!("out %DX,%eAX", OUT, [FixedReg, FixedReg], [DX, eAX], PORTIO | PORTIO_WRITE),
    // 0xF0
    op!("lock", PREFIX_LOCK, [], []),
    op!("int1", INT1, [], [], INTERRUPT),
    op!("repne", PREFIX_REPNE, [], []),
    op!("rep", PREFIX_REP, [], []),
    op!("hlt", HLT, [], [], PRIVILEGED),
    op!("cmc", CMC, [], [], HARMLESS),
    op!("Unary Grp3", ESCAPE, [Grp3], []),
    op!("Unary Grp3", ESCAPE, [Grp3], []),
    op!("clc", CLC, [], [], HARMLESS),
    op!("stc", STC, [], [], HARMLESS),
    op!("cli", CLI, [], [], PRIVILEGED_NOTRAP),
    op!("sti", STI, [], [], PRIVILEGED_NOTRAP | INHIBIT_IRQS),
    op!("cld", CLD, [], [], HARMLESS),
    op!("std", STD, [], [], HARMLESS),
    op!("inc/dec Grp4", ESCAPE, [Grp4], []),
    op!("Indirect Grp5", ESCAPE, [Grp5], []),
];

const fn long_mode(map: [Descriptor; 256]) -> [Descriptor; 256] {
    const INVALID_64: [u8; 21] = [
        0x06, 0x07, 0x0e, 0x16, 0x17, 0x1e, 0x1f, 0x27, 0x2f, 0x37, 0x3f, 0x60, 0x61, 0x62, 0x82,
        0x9a, 0xce, 0xd4, 0xd5, 0xd6, 0xea,
    ];
    const REX: Descriptor = op!("rex", PREFIX_REX, [], []);

    let mut map = map;
    let mut i = 0;
    while i < INVALID_64.len() {
        map[INVALID_64[i] as usize] = INVALID_NOMODRM;
        i += 1;
    }
    let mut i = 0x40;
    while i < 0x50 {
        map[i] = REX;
        i += 1;
    }
    map[0x63] = op!("movsxd %Gv,%Ed", MOVSXD, [ModRm, UseModRm], [Gv, Ed], HARMLESS);
    map[0xc4] = op!("vex 3-byte", ESCAPE, [Vex3b], []);
    map[0xc5] = op!("vex 2-byte", ESCAPE, [Vex2b], []);
    map
}

/// Primary map for 16 and 32-bit code.
pub(crate) static ONE_BYTE_X86: [Descriptor; 256] = X86_MAP;

/// Primary map for 64-bit code, also used for VEX encoded `c4`/`c5` in legacy modes.
pub(crate) static ONE_BYTE_X64: [Descriptor; 256] = long_mode(X86_MAP);

use super::SparseMap;

use crate::opcode::op;

/// `0f 38 xx` map.
pub(crate) static THREE_BYTE_38: SparseMap = SparseMap::new(&[
    (0x00, op!("pshufb %Pq,%Qq", PSHUFB, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x01, op!("phaddw %Pq,%Qq", PHADDW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x02, op!("phaddd %Pq,%Qq", PHADDD, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x03, op!("phaddsw %Pq,%Qq", PHADDSW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x04, op!("pmaddubsw %Pq,%Qq", PMADDUBSW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x05, op!("phsubw %Pq,%Qq", PHSUBW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x06, op!("phsubd %Pq,%Qq", PHSUBD, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x07, op!("phsubsw %Pq,%Qq", PHSUBSW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x08, op!("psignb %Pq,%Qq", PSIGNB, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x09, op!("psignw %Pq,%Qq", PSIGNW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x0a, op!("psignd %Pq,%Qq", PSIGND, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x0b, op!("pmulhrsw %Pq,%Qq", PMULHRSW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x1c, op!("pabsb %Pq,%Qq", PABSB, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x1d, op!("pabsw %Pq,%Qq", PABSW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x1e, op!("pabsd %Pq,%Qq", PABSD, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0xf0, op!("movbe %Gv,%Mv", MOVBE, [ModRm, UseModRm], [Gv, Mv], HARMLESS)),
    (0xf1, op!("movbe %Mv,%Gv", MOVBE, [ModRm, UseModRm], [Mv, Gv], HARMLESS)),
]);

/// `66 0f 38 xx` map.
pub(crate) static THREE_BYTE_66_38: SparseMap = SparseMap::new(&[
    (0x00, op!("pshufb %Vdq,%Wdq", PSHUFB, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x01, op!("phaddw %Vdq,%Wdq", PHADDW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x02, op!("phaddd %Vdq,%Wdq", PHADDD, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x03, op!("phaddsw %Vdq,%Wdq", PHADDSW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x04, op!("pmaddubsw %Vdq,%Wdq", PMADDUBSW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x05, op!("phsubw %Vdq,%Wdq", PHSUBW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x06, op!("phsubd %Vdq,%Wdq", PHSUBD, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x07, op!("phsubsw %Vdq,%Wdq", PHSUBSW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x08, op!("psignb %Vdq,%Wdq", PSIGNB, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x09, op!("psignw %Vdq,%Wdq", PSIGNW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x0a, op!("psignd %Vdq,%Wdq", PSIGND, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x0b, op!("pmulhrsw %Vdq,%Wdq", PMULHRSW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x10, op!("pblendvb %Vdq,%Wdq", PBLENDVB, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x14, op!("blendvps %Vdq,%Wdq", BLENDVPS, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x15, op!("blendvpd %Vdq,%Wdq", BLENDVPD, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x17, op!("ptest %Vdq,%Wdq", PTEST, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x1c, op!("pabsb %Vdq,%Wdq", PABSB, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x1d, op!("pabsw %Vdq,%Wdq", PABSW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x1e, op!("pabsd %Vdq,%Wdq", PABSD, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x20, op!("pmovsxbw %Vdq,%Wq", PMOVSXBW, [ModRm, UseModRm], [Vdq, Wq], HARMLESS | SSE)),
    (0x21, op!("pmovsxbd %Vdq,%Wd", PMOVSXBD, [ModRm, UseModRm], [Vdq, Wd], HARMLESS | SSE)),
    (0x22, op!("pmovsxbq %Vdq,%Ww", PMOVSXBQ, [ModRm, UseModRm], [Vdq, Ww], HARMLESS | SSE)),
    (0x23, op!("pmovsxwd %Vdq,%Wq", PMOVSXWD, [ModRm, UseModRm], [Vdq, Wq], HARMLESS | SSE)),
    (0x24, op!("pmovsxwq %Vdq,%Wd", PMOVSXWQ, [ModRm, UseModRm], [Vdq, Wd], HARMLESS | SSE)),
    (0x25, op!("pmovsxdq %Vdq,%Wq", PMOVSXDQ, [ModRm, UseModRm], [Vdq, Wq], HARMLESS | SSE)),
    (0x28, op!("pmuldq %Vdq,%Wdq", PMULDQ, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x29, op!("pcmpeqq %Vdq,%Wdq", PCMPEQQ, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x2a, op!("movntdqa %Vdq,%Mdq", MOVNTDQA, [ModRm, UseModRm], [Vdq, Mdq], HARMLESS | SSE)),
    (0x2b, op!("packusdw %Vdq,%Wdq", PACKUSDW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x30, op!("pmovzxbw %Vdq,%Wq", PMOVZXBW, [ModRm, UseModRm], [Vdq, Wq], HARMLESS | SSE)),
    (0x31, op!("pmovzxbd %Vdq,%Wd", PMOVZXBD, [ModRm, UseModRm], [Vdq, Wd], HARMLESS | SSE)),
    (0x32, op!("pmovzxbq %Vdq,%Ww", PMOVZXBQ, [ModRm, UseModRm], [Vdq, Ww], HARMLESS | SSE)),
    (0x33, op!("pmovzxwd %Vdq,%Wq", PMOVZXWD, [ModRm, UseModRm], [Vdq, Wq], HARMLESS | SSE)),
    (0x34, op!("pmovzxwq %Vdq,%Wd", PMOVZXWQ, [ModRm, UseModRm], [Vdq, Wd], HARMLESS | SSE)),
    (0x35, op!("pmovzxdq %Vdq,%Wq", PMOVZXDQ, [ModRm, UseModRm], [Vdq, Wq], HARMLESS | SSE)),
    (0x37, op!("pcmpgtq %Vdq,%Wdq", PCMPGTQ, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x38, op!("pminsb %Vdq,%Wdq", PMINSB, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x39, op!("pminsd %Vdq,%Wdq", PMINSD, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x3a, op!("pminuw %Vdq,%Wdq", PMINUW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x3b, op!("pminud %Vdq,%Wdq", PMINUD, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x3c, op!("pmaxsb %Vdq,%Wdq", PMAXSB, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x3d, op!("pmaxsd %Vdq,%Wdq", PMAXSD, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x3e, op!("pmaxuw %Vdq,%Wdq", PMAXUW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x3f, op!("pmaxud %Vdq,%Wdq", PMAXUD, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x40, op!("pmulld %Vdq,%Wdq", PMULLD, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x41, op!("phminposuw %Vdq,%Wdq", PHMINPOSUW, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0x80, op!("invept %Gy,%Mdq", INVEPT, [ModRm, UseModRm], [Gy, Mdq], DANGEROUS | FORCED_64_OP_SIZE)),
    (0x81, op!("invvpid %Gy,%Mdq", INVVPID, [ModRm, UseModRm], [Gy, Mdq], DANGEROUS | FORCED_64_OP_SIZE)),
    (0x82, op!("invpcid %Gy,%Mdq", INVPCID, [ModRm, UseModRm], [Gy, Mdq], DANGEROUS | FORCED_64_OP_SIZE)),
    (0xdb, op!("aesimc %Vdq,%Wdq", AESIMC, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xdc, op!("aesenc %Vdq,%Wdq", AESENC, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xdd, op!("aesenclast %Vdq,%Wdq", AESENCLAST, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xde, op!("aesdec %Vdq,%Wdq", AESDEC, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xdf, op!("aesdeclast %Vdq,%Wdq", AESDECLAST, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | SSE)),
    (0xf6, op!("adcx %Gy,%Ey", ADCX, [ModRm, UseModRm], [Gy, Ey], HARMLESS)),
]);

/// `f2 0f 38 xx` map.
pub(crate) static THREE_BYTE_F2_38: SparseMap = SparseMap::new(&[
    (0xf0, op!("crc32 %Gy,%Eb", CRC32, [ModRm, UseModRm], [Gy, Eb], HARMLESS)),
    (0xf1, op!("crc32 %Gy,%Ev", CRC32, [ModRm, UseModRm], [Gy, Ev], HARMLESS)),
]);

/// `66 f2 0f 38 xx` map.
pub(crate) static THREE_BYTE_66F2_38: SparseMap = SparseMap::new(&[
    (0xf0, op!("crc32 %Gy,%Eb", CRC32, [ModRm, UseModRm], [Gy, Eb], HARMLESS)),
    (0xf1, op!("crc32 %Gy,%Ew", CRC32, [ModRm, UseModRm], [Gy, Ew], HARMLESS)),
]);

/// `f3 0f 38 xx` map.
pub(crate) static THREE_BYTE_F3_38: SparseMap = SparseMap::new(&[
    (0xf6, op!("adox %Gy,%Ey", ADOX, [ModRm, UseModRm], [Gy, Ey], HARMLESS)),
]);

/// `0f 3a xx` map.
pub(crate) static THREE_BYTE_3A: SparseMap = SparseMap::new(&[
    (0x0f, op!("palignr %Pq,%Qq,%Ib", PALIGNR, [ModRm, UseModRm, ImmByte], [Pq, Qq, Ib], HARMLESS | MMX)),
]);

/// `66 0f 3a xx` map.
pub(crate) static THREE_BYTE_66_3A: SparseMap = SparseMap::new(&[
    (0x08, op!("roundps %Vdq,%Wdq,%Ib", ROUNDPS, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | SSE)),
    (0x09, op!("roundpd %Vdq,%Wdq,%Ib", ROUNDPD, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | SSE)),
    (0x0a, op!("roundss %Vss,%Wss,%Ib", ROUNDSS, [ModRm, UseModRm, ImmByte], [Vss, Wss, Ib], HARMLESS | SSE)),
    (0x0b, op!("roundsd %Vsd,%Wsd,%Ib", ROUNDSD, [ModRm, UseModRm, ImmByte], [Vsd, Wsd, Ib], HARMLESS | SSE)),
    (0x0c, op!("blendps %Vdq,%Wdq,%Ib", BLENDPS, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | SSE)),
    (0x0d, op!("blendpd %Vdq,%Wdq,%Ib", BLENDPD, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | SSE)),
    (0x0e, op!("pblendw %Vdq,%Wdq,%Ib", PBLENDW, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | SSE)),
    (0x0f, op!("palignr %Vdq,%Wdq,%Ib", PALIGNR, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | SSE)),
    (0x14, op!("pextrb %Ed,%Vdq,%Ib", PEXTRB, [ModRm, UseModRm, ImmByte], [Ed, Vdq, Ib], HARMLESS | SSE)),
    (0x15, op!("pextrw %Ed,%Vdq,%Ib", PEXTRW, [ModRm, UseModRm, ImmByte], [Ed, Vdq, Ib], HARMLESS | SSE)),
    (0x16, op!("pextrd %Ey,%Vdq,%Ib", PEXTRD, [ModRm, UseModRm, ImmByte], [Ey, Vdq, Ib], HARMLESS | SSE)),
    (0x17, op!("extractps %Ed,%Vdq,%Ib", EXTRACTPS, [ModRm, UseModRm, ImmByte], [Ed, Vdq, Ib], HARMLESS | SSE)),
    (0x20, op!("pinsrb %Vdq,%Ed,%Ib", PINSRB, [ModRm, UseModRm, ImmByte], [Vdq, Ed, Ib], HARMLESS | SSE)),
    (0x21, op!("insertps %Vdq,%Wd,%Ib", INSERTPS, [ModRm, UseModRm, ImmByte], [Vdq, Wd, Ib], HARMLESS | SSE)),
    (0x22, op!("pinsrd %Vdq,%Ey,%Ib", PINSRD, [ModRm, UseModRm, ImmByte], [Vdq, Ey, Ib], HARMLESS | SSE)),
    (0x40, op!("dpps %Vdq,%Wdq,%Ib", DPPS, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | SSE)),
    (0x41, op!("dppd %Vdq,%Wdq,%Ib", DPPD, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | SSE)),
    (0x42, op!("mpsadbw %Vdq,%Wdq,%Ib", MPSADBW, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | SSE)),
    (0x44, op!("pclmulqdq %Vdq,%Wdq,%Ib", PCLMULQDQ, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | SSE)),
    (0x60, op!("pcmpestrm %Vdq,%Wdq,%Ib", PCMPESTRM, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | SSE)),
    (0x61, op!("pcmpestri %Vdq,%Wdq,%Ib", PCMPESTRI, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | SSE)),
    (0x62, op!("pcmpistrm %Vdq,%Wdq,%Ib", PCMPISTRM, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | SSE)),
    (0x63, op!("pcmpistri %Vdq,%Wdq,%Ib", PCMPISTRI, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | SSE)),
    (0xdf, op!("aeskeygenassist %Vdq,%Wdq,%Ib", AESKEYGENASSIST, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | SSE)),
]);

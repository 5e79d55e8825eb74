use super::SparseMap;

use crate::opcode::op;

/// VEX `0f xx` map.
static VEX_MAP1: SparseMap = SparseMap::new(&[
    (0x10, op!("vmovups %Vx,%Wx", VMOVUPS, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x11, op!("vmovups %Wx,%Vx", VMOVUPS, [ModRm, UseModRm], [Wx, Vx], HARMLESS | AVX)),
    (0x12, op!("vmovlps %Vdq,%Hdq,%Mq", VMOVLPS, [ModRm, VexDest, UseModRm], [Vdq, Hdq, Mq], HARMLESS | AVX)),
    (0x13, op!("vmovlps %Mq,%Vdq", VMOVLPS, [ModRm, UseModRm], [Mq, Vdq], HARMLESS | AVX)),
    (0x14, op!("vunpcklps %Vx,%Hx,%Wx", VUNPCKLPS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x15, op!("vunpckhps %Vx,%Hx,%Wx", VUNPCKHPS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x16, op!("vmovhps %Vdq,%Hdq,%Mq", VMOVHPS, [ModRm, VexDest, UseModRm], [Vdq, Hdq, Mq], HARMLESS | AVX)),
    (0x17, op!("vmovhps %Mq,%Vdq", VMOVHPS, [ModRm, UseModRm], [Mq, Vdq], HARMLESS | AVX)),
    (0x28, op!("vmovaps %Vx,%Wx", VMOVAPS, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x29, op!("vmovaps %Wx,%Vx", VMOVAPS, [ModRm, UseModRm], [Wx, Vx], HARMLESS | AVX)),
    (0x2b, op!("vmovntps %Mx,%Vx", VMOVNTPS, [ModRm, UseModRm], [Mx, Vx], HARMLESS | AVX)),
    (0x2e, op!("vucomiss %Vss,%Wss", VUCOMISS, [ModRm, UseModRm], [Vss, Wss], HARMLESS | AVX)),
    (0x2f, op!("vcomiss %Vss,%Wss", VCOMISS, [ModRm, UseModRm], [Vss, Wss], HARMLESS | AVX)),
    (0x50, op!("vmovmskps %Gy,%Ux", VMOVMSKPS, [ModRm, UseModRm], [Gy, Ux], HARMLESS | AVX)),
    (0x51, op!("vsqrtps %Vx,%Wx", VSQRTPS, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x52, op!("vrsqrtps %Vx,%Wx", VRSQRTPS, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x53, op!("vrcpps %Vx,%Wx", VRCPPS, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x54, op!("vandps %Vx,%Hx,%Wx", VANDPS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x55, op!("vandnps %Vx,%Hx,%Wx", VANDNPS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x56, op!("vorps %Vx,%Hx,%Wx", VORPS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x57, op!("vxorps %Vx,%Hx,%Wx", VXORPS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x58, op!("vaddps %Vx,%Hx,%Wx", VADDPS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x59, op!("vmulps %Vx,%Hx,%Wx", VMULPS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x5a, op!("vcvtps2pd %Vx,%Wx", VCVTPS2PD, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x5b, op!("vcvtdq2ps %Vx,%Wx", VCVTDQ2PS, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x5c, op!("vsubps %Vx,%Hx,%Wx", VSUBPS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x5d, op!("vminps %Vx,%Hx,%Wx", VMINPS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x5e, op!("vdivps %Vx,%Hx,%Wx", VDIVPS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x5f, op!("vmaxps %Vx,%Hx,%Wx", VMAXPS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x77, op!("vzeroupper", VZEROUPPER, [], [], HARMLESS | AVX)),
    (0xc2, op!("vcmpps %Vx,%Hx,%Wx,%Ib", VCMPPS, [ModRm, VexDest, UseModRm, ImmByte], [Vx, Hx, Wx, Ib], HARMLESS | AVX)),
    (0xc6, op!("vshufps %Vx,%Hx,%Wx,%Ib", VSHUFPS, [ModRm, VexDest, UseModRm, ImmByte], [Vx, Hx, Wx, Ib], HARMLESS | AVX)),
]);

/// VEX `66 0f xx` map.
static VEX_66_MAP1: SparseMap = SparseMap::new(&[
    (0x10, op!("vmovupd %Vx,%Wx", VMOVUPD, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x11, op!("vmovupd %Wx,%Vx", VMOVUPD, [ModRm, UseModRm], [Wx, Vx], HARMLESS | AVX)),
    (0x12, op!("vmovlpd %Vdq,%Hdq,%Mq", VMOVLPD, [ModRm, VexDest, UseModRm], [Vdq, Hdq, Mq], HARMLESS | AVX)),
    (0x13, op!("vmovlpd %Mq,%Vdq", VMOVLPD, [ModRm, UseModRm], [Mq, Vdq], HARMLESS | AVX)),
    (0x14, op!("vunpcklpd %Vx,%Hx,%Wx", VUNPCKLPD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x15, op!("vunpckhpd %Vx,%Hx,%Wx", VUNPCKHPD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x16, op!("vmovhpd %Vdq,%Hdq,%Mq", VMOVHPD, [ModRm, VexDest, UseModRm], [Vdq, Hdq, Mq], HARMLESS | AVX)),
    (0x17, op!("vmovhpd %Mq,%Vdq", VMOVHPD, [ModRm, UseModRm], [Mq, Vdq], HARMLESS | AVX)),
    (0x28, op!("vmovapd %Vx,%Wx", VMOVAPD, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x29, op!("vmovapd %Wx,%Vx", VMOVAPD, [ModRm, UseModRm], [Wx, Vx], HARMLESS | AVX)),
    (0x2b, op!("vmovntpd %Mx,%Vx", VMOVNTPD, [ModRm, UseModRm], [Mx, Vx], HARMLESS | AVX)),
    (0x2e, op!("vucomisd %Vsd,%Wsd", VUCOMISD, [ModRm, UseModRm], [Vsd, Wsd], HARMLESS | AVX)),
    (0x2f, op!("vcomisd %Vsd,%Wsd", VCOMISD, [ModRm, UseModRm], [Vsd, Wsd], HARMLESS | AVX)),
    (0x50, op!("vmovmskpd %Gy,%Ux", VMOVMSKPD, [ModRm, UseModRm], [Gy, Ux], HARMLESS | AVX)),
    (0x51, op!("vsqrtpd %Vx,%Wx", VSQRTPD, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x54, op!("vandpd %Vx,%Hx,%Wx", VANDPD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x55, op!("vandnpd %Vx,%Hx,%Wx", VANDNPD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x56, op!("vorpd %Vx,%Hx,%Wx", VORPD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x57, op!("vxorpd %Vx,%Hx,%Wx", VXORPD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x58, op!("vaddpd %Vx,%Hx,%Wx", VADDPD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x59, op!("vmulpd %Vx,%Hx,%Wx", VMULPD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x5a, op!("vcvtpd2ps %Vx,%Wx", VCVTPD2PS, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x5b, op!("vcvtps2dq %Vx,%Wx", VCVTPS2DQ, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x5c, op!("vsubpd %Vx,%Hx,%Wx", VSUBPD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x5d, op!("vminpd %Vx,%Hx,%Wx", VMINPD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x5e, op!("vdivpd %Vx,%Hx,%Wx", VDIVPD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x5f, op!("vmaxpd %Vx,%Hx,%Wx", VMAXPD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x60, op!("vpunpcklbw %Vx,%Hx,%Wx", VPUNPCKLBW, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x61, op!("vpunpcklwd %Vx,%Hx,%Wx", VPUNPCKLWD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x62, op!("vpunpckldq %Vx,%Hx,%Wx", VPUNPCKLDQ, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x63, op!("vpacksswb %Vx,%Hx,%Wx", VPACKSSWB, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x64, op!("vpcmpgtb %Vx,%Hx,%Wx", VPCMPGTB, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x65, op!("vpcmpgtw %Vx,%Hx,%Wx", VPCMPGTW, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x66, op!("vpcmpgtd %Vx,%Hx,%Wx", VPCMPGTD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x67, op!("vpackuswb %Vx,%Hx,%Wx", VPACKUSWB, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x68, op!("vpunpckhbw %Vx,%Hx,%Wx", VPUNPCKHBW, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x69, op!("vpunpckhwd %Vx,%Hx,%Wx", VPUNPCKHWD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x6a, op!("vpunpckhdq %Vx,%Hx,%Wx", VPUNPCKHDQ, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x6b, op!("vpackssdw %Vx,%Hx,%Wx", VPACKSSDW, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x6c, op!("vpunpcklqdq %Vx,%Hx,%Wx", VPUNPCKLQDQ, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x6d, op!("vpunpckhqdq %Vx,%Hx,%Wx", VPUNPCKHQDQ, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x6e, op!("vmovd %Vdq,%Ey", VMOVD, [ModRm, UseModRm], [Vdq, Ey], HARMLESS | AVX)),
    (0x6f, op!("vmovdqa %Vx,%Wx", VMOVDQA, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x70, op!("vpshufd %Vx,%Wx,%Ib", VPSHUFD, [ModRm, UseModRm, ImmByte], [Vx, Wx, Ib], HARMLESS | AVX)),
    (0x74, op!("vpcmpeqb %Vx,%Hx,%Wx", VPCMPEQB, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x75, op!("vpcmpeqw %Vx,%Hx,%Wx", VPCMPEQW, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x76, op!("vpcmpeqd %Vx,%Hx,%Wx", VPCMPEQD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x7c, op!("vhaddpd %Vx,%Hx,%Wx", VHADDPD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x7d, op!("vhsubpd %Vx,%Hx,%Wx", VHSUBPD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x7e, op!("vmovd %Ey,%Vdq", VMOVD, [ModRm, UseModRm], [Ey, Vdq], HARMLESS | AVX)),
    (0x7f, op!("vmovdqa %Wx,%Vx", VMOVDQA, [ModRm, UseModRm], [Wx, Vx], HARMLESS | AVX)),
    (0xc2, op!("vcmppd %Vx,%Hx,%Wx,%Ib", VCMPPD, [ModRm, VexDest, UseModRm, ImmByte], [Vx, Hx, Wx, Ib], HARMLESS | AVX)),
    (0xc6, op!("vshufpd %Vx,%Hx,%Wx,%Ib", VSHUFPD, [ModRm, VexDest, UseModRm, ImmByte], [Vx, Hx, Wx, Ib], HARMLESS | AVX)),
    (0xd0, op!("vaddsubpd %Vx,%Hx,%Wx", VADDSUBPD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xd4, op!("vpaddq %Vx,%Hx,%Wx", VPADDQ, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xd5, op!("vpmullw %Vx,%Hx,%Wx", VPMULLW, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xd6, op!("vmovq %Wq,%Vq", VMOVQ, [ModRm, UseModRm], [Wq, Vq], HARMLESS | AVX)),
    (0xd7, op!("vpmovmskb %Gd,%Ux", VPMOVMSKB, [ModRm, UseModRm], [Gd, Ux], HARMLESS | AVX | DEFAULT_64_OP_SIZE)),
    (0xdb, op!("vpand %Vx,%Hx,%Wx", VPAND, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xdf, op!("vpandn %Vx,%Hx,%Wx", VPANDN, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xe6, op!("vcvttpd2dq %Vx,%Wx", VCVTTPD2DQ, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0xe7, op!("vmovntdq %Mx,%Vx", VMOVNTDQ, [ModRm, UseModRm], [Mx, Vx], HARMLESS | AVX)),
    (0xeb, op!("vpor %Vx,%Hx,%Wx", VPOR, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xef, op!("vpxor %Vx,%Hx,%Wx", VPXOR, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xf8, op!("vpsubb %Vx,%Hx,%Wx", VPSUBB, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xf9, op!("vpsubw %Vx,%Hx,%Wx", VPSUBW, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xfa, op!("vpsubd %Vx,%Hx,%Wx", VPSUBD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xfb, op!("vpsubq %Vx,%Hx,%Wx", VPSUBQ, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xfc, op!("vpaddb %Vx,%Hx,%Wx", VPADDB, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xfd, op!("vpaddw %Vx,%Hx,%Wx", VPADDW, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xfe, op!("vpaddd %Vx,%Hx,%Wx", VPADDD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
]);

/// VEX `f3 0f xx` map.
static VEX_F3_MAP1: SparseMap = SparseMap::new(&[
    (0x10, op!("vmovss %Vss,%Hss,%Wss", VMOVSS, [ModRm, VexDest, UseModRm], [Vss, Hss, Wss], HARMLESS | AVX)),
    (0x11, op!("vmovss %Wss,%Hss,%Vss", VMOVSS, [ModRm, VexDest, UseModRm], [Wss, Hss, Vss], HARMLESS | AVX)),
    (0x12, op!("vmovsldup %Vx,%Wx", VMOVSLDUP, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x16, op!("vmovshdup %Vx,%Wx", VMOVSHDUP, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x2a, op!("vcvtsi2ss %Vss,%Hss,%Ey", VCVTSI2SS, [ModRm, VexDest, UseModRm], [Vss, Hss, Ey], HARMLESS | AVX)),
    (0x2c, op!("vcvttss2si %Gy,%Wss", VCVTTSS2SI, [ModRm, UseModRm], [Gy, Wss], HARMLESS | AVX)),
    (0x2d, op!("vcvtss2si %Gy,%Wss", VCVTSS2SI, [ModRm, UseModRm], [Gy, Wss], HARMLESS | AVX)),
    (0x51, op!("vsqrtss %Vss,%Hss,%Wss", VSQRTSS, [ModRm, VexDest, UseModRm], [Vss, Hss, Wss], HARMLESS | AVX)),
    (0x52, op!("vrsqrtss %Vss,%Hss,%Wss", VRSQRTSS, [ModRm, VexDest, UseModRm], [Vss, Hss, Wss], HARMLESS | AVX)),
    (0x53, op!("vrcpss %Vss,%Hss,%Wss", VRCPSS, [ModRm, VexDest, UseModRm], [Vss, Hss, Wss], HARMLESS | AVX)),
    (0x58, op!("vaddss %Vss,%Hss,%Wss", VADDSS, [ModRm, VexDest, UseModRm], [Vss, Hss, Wss], HARMLESS | AVX)),
    (0x59, op!("vmulss %Vss,%Hss,%Wss", VMULSS, [ModRm, VexDest, UseModRm], [Vss, Hss, Wss], HARMLESS | AVX)),
    (0x5a, op!("vcvtss2sd %Vsd,%Hsd,%Wss", VCVTSS2SD, [ModRm, VexDest, UseModRm], [Vsd, Hsd, Wss], HARMLESS | AVX)),
    (0x5b, op!("vcvttps2dq %Vx,%Wx", VCVTTPS2DQ, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x5c, op!("vsubss %Vss,%Hss,%Wss", VSUBSS, [ModRm, VexDest, UseModRm], [Vss, Hss, Wss], HARMLESS | AVX)),
    (0x5d, op!("vminss %Vss,%Hss,%Wss", VMINSS, [ModRm, VexDest, UseModRm], [Vss, Hss, Wss], HARMLESS | AVX)),
    (0x5e, op!("vdivss %Vss,%Hss,%Wss", VDIVSS, [ModRm, VexDest, UseModRm], [Vss, Hss, Wss], HARMLESS | AVX)),
    (0x5f, op!("vmaxss %Vss,%Hss,%Wss", VMAXSS, [ModRm, VexDest, UseModRm], [Vss, Hss, Wss], HARMLESS | AVX)),
    (0x6f, op!("vmovdqu %Vx,%Wx", VMOVDQU, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x7e, op!("vmovq %Vq,%Wq", VMOVQ, [ModRm, UseModRm], [Vq, Wq], HARMLESS | AVX)),
    (0x7f, op!("vmovdqu %Wx,%Vx", VMOVDQU, [ModRm, UseModRm], [Wx, Vx], HARMLESS | AVX)),
    (0xc2, op!("vcmpss %Vss,%Hss,%Wss,%Ib", VCMPSS, [ModRm, VexDest, UseModRm, ImmByte], [Vss, Hss, Wss, Ib], HARMLESS | AVX)),
    (0xe6, op!("vcvtdq2pd %Vx,%Wx", VCVTDQ2PD, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
]);

/// VEX `f2 0f xx` map.
static VEX_F2_MAP1: SparseMap = SparseMap::new(&[
    (0x10, op!("vmovsd %Vsd,%Hsd,%Wsd", VMOVSD, [ModRm, VexDest, UseModRm], [Vsd, Hsd, Wsd], HARMLESS | AVX)),
    (0x11, op!("vmovsd %Wsd,%Hsd,%Vsd", VMOVSD, [ModRm, VexDest, UseModRm], [Wsd, Hsd, Vsd], HARMLESS | AVX)),
    (0x12, op!("vmovddup %Vx,%Wx", VMOVDDUP, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x2a, op!("vcvtsi2sd %Vsd,%Hsd,%Ey", VCVTSI2SD, [ModRm, VexDest, UseModRm], [Vsd, Hsd, Ey], HARMLESS | AVX)),
    (0x2c, op!("vcvttsd2si %Gy,%Wsd", VCVTTSD2SI, [ModRm, UseModRm], [Gy, Wsd], HARMLESS | AVX)),
    (0x2d, op!("vcvtsd2si %Gy,%Wsd", VCVTSD2SI, [ModRm, UseModRm], [Gy, Wsd], HARMLESS | AVX)),
    (0x51, op!("vsqrtsd %Vsd,%Hsd,%Wsd", VSQRTSD, [ModRm, VexDest, UseModRm], [Vsd, Hsd, Wsd], HARMLESS | AVX)),
    (0x58, op!("vaddsd %Vsd,%Hsd,%Wsd", VADDSD, [ModRm, VexDest, UseModRm], [Vsd, Hsd, Wsd], HARMLESS | AVX)),
    (0x59, op!("vmulsd %Vsd,%Hsd,%Wsd", VMULSD, [ModRm, VexDest, UseModRm], [Vsd, Hsd, Wsd], HARMLESS | AVX)),
    (0x5a, op!("vcvtsd2ss %Vss,%Hss,%Wsd", VCVTSD2SS, [ModRm, VexDest, UseModRm], [Vss, Hss, Wsd], HARMLESS | AVX)),
    (0x5c, op!("vsubsd %Vsd,%Hsd,%Wsd", VSUBSD, [ModRm, VexDest, UseModRm], [Vsd, Hsd, Wsd], HARMLESS | AVX)),
    (0x5d, op!("vminsd %Vsd,%Hsd,%Wsd", VMINSD, [ModRm, VexDest, UseModRm], [Vsd, Hsd, Wsd], HARMLESS | AVX)),
    (0x5e, op!("vdivsd %Vsd,%Hsd,%Wsd", VDIVSD, [ModRm, VexDest, UseModRm], [Vsd, Hsd, Wsd], HARMLESS | AVX)),
    (0x5f, op!("vmaxsd %Vsd,%Hsd,%Wsd", VMAXSD, [ModRm, VexDest, UseModRm], [Vsd, Hsd, Wsd], HARMLESS | AVX)),
    (0x70, op!("vpshuflw %Vx,%Wx,%Ib", VPSHUFLW, [ModRm, UseModRm, ImmByte], [Vx, Wx, Ib], HARMLESS | AVX)),
    (0x7c, op!("vhaddps %Vx,%Hx,%Wx", VHADDPS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x7d, op!("vhsubps %Vx,%Hx,%Wx", VHSUBPS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xc2, op!("vcmpsd %Vsd,%Hsd,%Wsd,%Ib", VCMPSD, [ModRm, VexDest, UseModRm, ImmByte], [Vsd, Hsd, Wsd, Ib], HARMLESS | AVX)),
    (0xd0, op!("vaddsubps %Vx,%Hx,%Wx", VADDSUBPS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xe6, op!("vcvtpd2dq %Vx,%Wx", VCVTPD2DQ, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0xf0, op!("vlddqu %Vx,%Mx", VLDDQU, [ModRm, UseModRm], [Vx, Mx], HARMLESS | AVX)),
]);

/// VEX `0f 38 xx` map.
static VEX_MAP2: SparseMap = SparseMap::new(&[
    (0xf2, op!("andn %Gy,%By,%Ey", ANDN, [ModRm, VexDest, UseModRm], [Gy, By, Ey], HARMLESS | AVX)),
    (0xf3, op!("vex grp17", ESCAPE, [Grp17], [])),
    (0xf5, op!("bzhi %Gy,%Ey,%By", BZHI, [ModRm, UseModRm, VexDest], [Gy, Ey, By], HARMLESS | AVX)),
    (0xf7, op!("bextr %Gy,%Ey,%By", BEXTR, [ModRm, UseModRm, VexDest], [Gy, Ey, By], HARMLESS | AVX)),
]);

/// VEX `66 0f 38 xx` map.
static VEX_66_MAP2: SparseMap = SparseMap::new(&[
    (0x00, op!("vpshufb %Vx,%Hx,%Wx", VPSHUFB, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x01, op!("vphaddw %Vx,%Hx,%Wx", VPHADDW, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x02, op!("vphaddd %Vx,%Hx,%Wx", VPHADDD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x04, op!("vpmaddubsw %Vx,%Hx,%Wx", VPMADDUBSW, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x08, op!("vpsignb %Vx,%Hx,%Wx", VPSIGNB, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x0b, op!("vpmulhrsw %Vx,%Hx,%Wx", VPMULHRSW, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x0c, op!("vpermilps %Vx,%Hx,%Wx", VPERMILPS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x0d, op!("vpermilpd %Vx,%Hx,%Wx", VPERMILPD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x13, op!("vcvtph2ps %Vx,%Wx", VCVTPH2PS, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x16, op!("vpermps %Vqq,%Hqq,%Wqq", VPERMPS, [ModRm, VexDest, UseModRm], [Vqq, Hqq, Wqq], HARMLESS | AVX)),
    (0x17, op!("vptest %Vx,%Wx", VPTEST, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x18, op!("vbroadcastss %Vx,%Wd", VBROADCASTSS, [ModRm, UseModRm], [Vx, Wd], HARMLESS | AVX)),
    (0x19, op!("vbroadcastsd %Vqq,%Wq", VBROADCASTSD, [ModRm, UseModRm], [Vqq, Wq], HARMLESS | AVX)),
    (0x1a, op!("vbroadcastf128 %Vqq,%Mdq", VBROADCASTF128, [ModRm, UseModRm], [Vqq, Mdq], HARMLESS | AVX)),
    (0x1c, op!("vpabsb %Vx,%Wx", VPABSB, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x1d, op!("vpabsw %Vx,%Wx", VPABSW, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x1e, op!("vpabsd %Vx,%Wx", VPABSD, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x20, op!("vpmovsxbw %Vx,%Wx", VPMOVSXBW, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x21, op!("vpmovsxbd %Vx,%Wx", VPMOVSXBD, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x23, op!("vpmovsxwd %Vx,%Wx", VPMOVSXWD, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x25, op!("vpmovsxdq %Vx,%Wx", VPMOVSXDQ, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x28, op!("vpmuldq %Vx,%Hx,%Wx", VPMULDQ, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x29, op!("vpcmpeqq %Vx,%Hx,%Wx", VPCMPEQQ, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x2a, op!("vmovntdqa %Vx,%Mx", VMOVNTDQA, [ModRm, UseModRm], [Vx, Mx], HARMLESS | AVX)),
    (0x2b, op!("vpackusdw %Vx,%Hx,%Wx", VPACKUSDW, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x30, op!("vpmovzxbw %Vx,%Wx", VPMOVZXBW, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x31, op!("vpmovzxbd %Vx,%Wx", VPMOVZXBD, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x33, op!("vpmovzxwd %Vx,%Wx", VPMOVZXWD, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x35, op!("vpmovzxdq %Vx,%Wx", VPMOVZXDQ, [ModRm, UseModRm], [Vx, Wx], HARMLESS | AVX)),
    (0x36, op!("vpermd %Vqq,%Hqq,%Wqq", VPERMD, [ModRm, VexDest, UseModRm], [Vqq, Hqq, Wqq], HARMLESS | AVX)),
    (0x37, op!("vpcmpgtq %Vx,%Hx,%Wx", VPCMPGTQ, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x38, op!("vpminsb %Vx,%Hx,%Wx", VPMINSB, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x39, op!("vpminsd %Vx,%Hx,%Wx", VPMINSD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x3c, op!("vpmaxsb %Vx,%Hx,%Wx", VPMAXSB, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x3d, op!("vpmaxsd %Vx,%Hx,%Wx", VPMAXSD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x40, op!("vpmulld %Vx,%Hx,%Wx", VPMULLD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x45, op!("vpsrlvd %Vx,%Hx,%Wx", VPSRLVD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x46, op!("vpsravd %Vx,%Hx,%Wx", VPSRAVD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x47, op!("vpsllvd %Vx,%Hx,%Wx", VPSLLVD, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x58, op!("vpbroadcastd %Vx,%Wd", VPBROADCASTD, [ModRm, UseModRm], [Vx, Wd], HARMLESS | AVX)),
    (0x59, op!("vpbroadcastq %Vx,%Wq", VPBROADCASTQ, [ModRm, UseModRm], [Vx, Wq], HARMLESS | AVX)),
    (0x5a, op!("vbroadcasti128 %Vqq,%Mdq", VBROADCASTI128, [ModRm, UseModRm], [Vqq, Mdq], HARMLESS | AVX)),
    (0x78, op!("vpbroadcastb %Vx,%Wb", VPBROADCASTB, [ModRm, UseModRm], [Vx, Wb], HARMLESS | AVX)),
    (0x79, op!("vpbroadcastw %Vx,%Ww", VPBROADCASTW, [ModRm, UseModRm], [Vx, Ww], HARMLESS | AVX)),
    (0x8c, op!("vpmaskmovd %Vx,%Hx,%Mx", VPMASKMOVD, [ModRm, VexDest, UseModRm], [Vx, Hx, Mx], HARMLESS | AVX)),
    (0x8e, op!("vpmaskmovd %Mx,%Vx,%Hx", VPMASKMOVD, [ModRm, UseModRm, VexDest], [Mx, Vx, Hx], HARMLESS | AVX)),
    (0x90, op!("vpgatherdd %Vx,%Mx,%Hx", VPGATHERDD, [ModRm, UseModRm, VexDest], [Vx, Mx, Hx], HARMLESS | AVX | VSIB)),
    (0x91, op!("vpgatherqd %Vx,%Mx,%Hx", VPGATHERQD, [ModRm, UseModRm, VexDest], [Vx, Mx, Hx], HARMLESS | AVX | VSIB)),
    (0x92, op!("vgatherdps %Vx,%Mx,%Hx", VGATHERDPS, [ModRm, UseModRm, VexDest], [Vx, Mx, Hx], HARMLESS | AVX | VSIB)),
    (0x93, op!("vgatherqps %Vx,%Mx,%Hx", VGATHERQPS, [ModRm, UseModRm, VexDest], [Vx, Mx, Hx], HARMLESS | AVX | VSIB)),
    (0x96, op!("vfmaddsub132ps %Vx,%Hx,%Wx", VFMADDSUB132PS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x97, op!("vfmsubadd132ps %Vx,%Hx,%Wx", VFMSUBADD132PS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x98, op!("vfmadd132ps %Vx,%Hx,%Wx", VFMADD132PS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x99, op!("vfmadd132ss %Vss,%Hss,%Wss", VFMADD132SS, [ModRm, VexDest, UseModRm], [Vss, Hss, Wss], HARMLESS | AVX)),
    (0x9a, op!("vfmsub132ps %Vx,%Hx,%Wx", VFMSUB132PS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x9b, op!("vfmsub132ss %Vss,%Hss,%Wss", VFMSUB132SS, [ModRm, VexDest, UseModRm], [Vss, Hss, Wss], HARMLESS | AVX)),
    (0x9c, op!("vfnmadd132ps %Vx,%Hx,%Wx", VFNMADD132PS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0x9e, op!("vfnmsub132ps %Vx,%Hx,%Wx", VFNMSUB132PS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xa6, op!("vfmaddsub213ps %Vx,%Hx,%Wx", VFMADDSUB213PS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xa7, op!("vfmsubadd213ps %Vx,%Hx,%Wx", VFMSUBADD213PS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xa8, op!("vfmadd213ps %Vx,%Hx,%Wx", VFMADD213PS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xa9, op!("vfmadd213ss %Vss,%Hss,%Wss", VFMADD213SS, [ModRm, VexDest, UseModRm], [Vss, Hss, Wss], HARMLESS | AVX)),
    (0xaa, op!("vfmsub213ps %Vx,%Hx,%Wx", VFMSUB213PS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xab, op!("vfmsub213ss %Vss,%Hss,%Wss", VFMSUB213SS, [ModRm, VexDest, UseModRm], [Vss, Hss, Wss], HARMLESS | AVX)),
    (0xac, op!("vfnmadd213ps %Vx,%Hx,%Wx", VFNMADD213PS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xae, op!("vfnmsub213ps %Vx,%Hx,%Wx", VFNMSUB213PS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xb6, op!("vfmaddsub231ps %Vx,%Hx,%Wx", VFMADDSUB231PS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xb7, op!("vfmsubadd231ps %Vx,%Hx,%Wx", VFMSUBADD231PS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xb8, op!("vfmadd231ps %Vx,%Hx,%Wx", VFMADD231PS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xb9, op!("vfmadd231ss %Vss,%Hss,%Wss", VFMADD231SS, [ModRm, VexDest, UseModRm], [Vss, Hss, Wss], HARMLESS | AVX)),
    (0xba, op!("vfmsub231ps %Vx,%Hx,%Wx", VFMSUB231PS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xbb, op!("vfmsub231ss %Vss,%Hss,%Wss", VFMSUB231SS, [ModRm, VexDest, UseModRm], [Vss, Hss, Wss], HARMLESS | AVX)),
    (0xbc, op!("vfnmadd231ps %Vx,%Hx,%Wx", VFNMADD231PS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xbe, op!("vfnmsub231ps %Vx,%Hx,%Wx", VFNMSUB231PS, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xdb, op!("vaesimc %Vdq,%Wdq", VAESIMC, [ModRm, UseModRm], [Vdq, Wdq], HARMLESS | AVX)),
    (0xdc, op!("vaesenc %Vx,%Hx,%Wx", VAESENC, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xdd, op!("vaesenclast %Vx,%Hx,%Wx", VAESENCLAST, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xde, op!("vaesdec %Vx,%Hx,%Wx", VAESDEC, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xdf, op!("vaesdeclast %Vx,%Hx,%Wx", VAESDECLAST, [ModRm, VexDest, UseModRm], [Vx, Hx, Wx], HARMLESS | AVX)),
    (0xf7, op!("shlx %Gy,%Ey,%By", SHLX, [ModRm, UseModRm, VexDest], [Gy, Ey, By], HARMLESS | AVX)),
]);

/// VEX `f3 0f 38 xx` map.
static VEX_F3_MAP2: SparseMap = SparseMap::new(&[
    (0xf5, op!("pext %Gy,%By,%Ey", PEXT, [ModRm, VexDest, UseModRm], [Gy, By, Ey], HARMLESS | AVX)),
    (0xf7, op!("sarx %Gy,%Ey,%By", SARX, [ModRm, UseModRm, VexDest], [Gy, Ey, By], HARMLESS | AVX)),
]);

/// VEX `f2 0f 38 xx` map.
static VEX_F2_MAP2: SparseMap = SparseMap::new(&[
    (0xf5, op!("pdep %Gy,%By,%Ey", PDEP, [ModRm, VexDest, UseModRm], [Gy, By, Ey], HARMLESS | AVX)),
    (0xf6, op!("mulx %By,%Gy,%Ey", MULX, [VexDest, ModRm, UseModRm], [By, Gy, Ey], HARMLESS | AVX)),
    (0xf7, op!("shrx %Gy,%Ey,%By", SHRX, [ModRm, UseModRm, VexDest], [Gy, Ey, By], HARMLESS | AVX)),
]);

/// VEX `66 0f 3a xx` map.
static VEX_66_MAP3: SparseMap = SparseMap::new(&[
    (0x00, op!("vpermq %Vqq,%Wqq,%Ib", VPERMQ, [ModRm, UseModRm, ImmByte], [Vqq, Wqq, Ib], HARMLESS | AVX)),
    (0x01, op!("vpermpd %Vqq,%Wqq,%Ib", VPERMPD, [ModRm, UseModRm, ImmByte], [Vqq, Wqq, Ib], HARMLESS | AVX)),
    (0x02, op!("vpblendd %Vx,%Hx,%Wx,%Ib", VPBLENDD, [ModRm, VexDest, UseModRm, ImmByte], [Vx, Hx, Wx, Ib], HARMLESS | AVX)),
    (0x04, op!("vpermilps %Vx,%Wx,%Ib", VPERMILPS, [ModRm, UseModRm, ImmByte], [Vx, Wx, Ib], HARMLESS | AVX)),
    (0x05, op!("vpermilpd %Vx,%Wx,%Ib", VPERMILPD, [ModRm, UseModRm, ImmByte], [Vx, Wx, Ib], HARMLESS | AVX)),
    (0x06, op!("vperm2f128 %Vqq,%Hqq,%Wqq,%Ib", VPERM2F128, [ModRm, VexDest, UseModRm, ImmByte], [Vqq, Hqq, Wqq, Ib], HARMLESS | AVX)),
    (0x08, op!("vroundps %Vx,%Wx,%Ib", VROUNDPS, [ModRm, UseModRm, ImmByte], [Vx, Wx, Ib], HARMLESS | AVX)),
    (0x09, op!("vroundpd %Vx,%Wx,%Ib", VROUNDPD, [ModRm, UseModRm, ImmByte], [Vx, Wx, Ib], HARMLESS | AVX)),
    (0x0a, op!("vroundss %Vss,%Hss,%Wss,%Ib", VROUNDSS, [ModRm, VexDest, UseModRm, ImmByte], [Vss, Hss, Wss, Ib], HARMLESS | AVX)),
    (0x0b, op!("vroundsd %Vsd,%Hsd,%Wsd,%Ib", VROUNDSD, [ModRm, VexDest, UseModRm, ImmByte], [Vsd, Hsd, Wsd, Ib], HARMLESS | AVX)),
    (0x0c, op!("vblendps %Vx,%Hx,%Wx,%Ib", VBLENDPS, [ModRm, VexDest, UseModRm, ImmByte], [Vx, Hx, Wx, Ib], HARMLESS | AVX)),
    (0x0d, op!("vblendpd %Vx,%Hx,%Wx,%Ib", VBLENDPD, [ModRm, VexDest, UseModRm, ImmByte], [Vx, Hx, Wx, Ib], HARMLESS | AVX)),
    (0x0e, op!("vpblendw %Vx,%Hx,%Wx,%Ib", VPBLENDW, [ModRm, VexDest, UseModRm, ImmByte], [Vx, Hx, Wx, Ib], HARMLESS | AVX)),
    (0x0f, op!("vpalignr %Vx,%Hx,%Wx,%Ib", VPALIGNR, [ModRm, VexDest, UseModRm, ImmByte], [Vx, Hx, Wx, Ib], HARMLESS | AVX)),
    (0x14, op!("vpextrb %Ed,%Vdq,%Ib", VPEXTRB, [ModRm, UseModRm, ImmByte], [Ed, Vdq, Ib], HARMLESS | AVX)),
    (0x15, op!("vpextrw %Ed,%Vdq,%Ib", VPEXTRW, [ModRm, UseModRm, ImmByte], [Ed, Vdq, Ib], HARMLESS | AVX)),
    (0x16, op!("vpextrd %Ey,%Vdq,%Ib", VPEXTRD, [ModRm, UseModRm, ImmByte], [Ey, Vdq, Ib], HARMLESS | AVX)),
    (0x17, op!("vextractps %Ed,%Vdq,%Ib", VEXTRACTPS, [ModRm, UseModRm, ImmByte], [Ed, Vdq, Ib], HARMLESS | AVX)),
    (0x18, op!("vinsertf128 %Vqq,%Hqq,%Wdq,%Ib", VINSERTF128, [ModRm, VexDest, UseModRm, ImmByte], [Vqq, Hqq, Wdq, Ib], HARMLESS | AVX)),
    (0x19, op!("vextractf128 %Wdq,%Vqq,%Ib", VEXTRACTF128, [ModRm, UseModRm, ImmByte], [Wdq, Vqq, Ib], HARMLESS | AVX)),
    (0x1d, op!("vcvtps2ph %Wx,%Vx,%Ib", VCVTPS2PH, [ModRm, UseModRm, ImmByte], [Wx, Vx, Ib], HARMLESS | AVX)),
    (0x20, op!("vpinsrb %Vdq,%Hdq,%Ed,%Ib", VPINSRB, [ModRm, VexDest, UseModRm, ImmByte], [Vdq, Hdq, Ed, Ib], HARMLESS | AVX)),
    (0x21, op!("vinsertps %Vdq,%Hdq,%Wd,%Ib", VINSERTPS, [ModRm, VexDest, UseModRm, ImmByte], [Vdq, Hdq, Wd, Ib], HARMLESS | AVX)),
    (0x22, op!("vpinsrd %Vdq,%Hdq,%Ey,%Ib", VPINSRD, [ModRm, VexDest, UseModRm, ImmByte], [Vdq, Hdq, Ey, Ib], HARMLESS | AVX)),
    (0x38, op!("vinserti128 %Vqq,%Hqq,%Wdq,%Ib", VINSERTI128, [ModRm, VexDest, UseModRm, ImmByte], [Vqq, Hqq, Wdq, Ib], HARMLESS | AVX)),
    (0x39, op!("vextracti128 %Wdq,%Vqq,%Ib", VEXTRACTI128, [ModRm, UseModRm, ImmByte], [Wdq, Vqq, Ib], HARMLESS | AVX)),
    (0x40, op!("vdpps %Vx,%Hx,%Wx,%Ib", VDPPS, [ModRm, VexDest, UseModRm, ImmByte], [Vx, Hx, Wx, Ib], HARMLESS | AVX)),
    (0x42, op!("vmpsadbw %Vx,%Hx,%Wx,%Ib", VMPSADBW, [ModRm, VexDest, UseModRm, ImmByte], [Vx, Hx, Wx, Ib], HARMLESS | AVX)),
    (0x44, op!("vpclmulqdq %Vdq,%Hdq,%Wdq,%Ib", VPCLMULQDQ, [ModRm, VexDest, UseModRm, ImmByte], [Vdq, Hdq, Wdq, Ib], HARMLESS | AVX)),
    (0x46, op!("vperm2i128 %Vqq,%Hqq,%Wqq,%Ib", VPERM2I128, [ModRm, VexDest, UseModRm, ImmByte], [Vqq, Hqq, Wqq, Ib], HARMLESS | AVX)),
    (0x4a, op!("vblendvps %Vx,%Hx,%Wx,%Lx", VBLENDVPS, [ModRm, VexDest, UseModRm, ImmByte], [Vx, Hx, Wx, Lx], HARMLESS | AVX)),
    (0x4b, op!("vblendvpd %Vx,%Hx,%Wx,%Lx", VBLENDVPD, [ModRm, VexDest, UseModRm, ImmByte], [Vx, Hx, Wx, Lx], HARMLESS | AVX)),
    (0x4c, op!("vpblendvb %Vx,%Hx,%Wx,%Lx", VPBLENDVB, [ModRm, VexDest, UseModRm, ImmByte], [Vx, Hx, Wx, Lx], HARMLESS | AVX)),
    (0x60, op!("vpcmpestrm %Vdq,%Wdq,%Ib", VPCMPESTRM, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | AVX)),
    (0x61, op!("vpcmpestri %Vdq,%Wdq,%Ib", VPCMPESTRI, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | AVX)),
    (0x62, op!("vpcmpistrm %Vdq,%Wdq,%Ib", VPCMPISTRM, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | AVX)),
    (0x63, op!("vpcmpistri %Vdq,%Wdq,%Ib", VPCMPISTRI, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | AVX)),
    (0xdf, op!("vaeskeygenassist %Vdq,%Wdq,%Ib", VAESKEYGENASSIST, [ModRm, UseModRm, ImmByte], [Vdq, Wdq, Ib], HARMLESS | AVX)),
]);

/// VEX `f2 0f 3a xx` map.
static VEX_F2_MAP3: SparseMap = SparseMap::new(&[
    (0xf0, op!("rorx %Gy,%Ey,%Ib", RORX, [ModRm, UseModRm, ImmByte], [Gy, Ey, Ib], HARMLESS | AVX)),
]);

/// VEX opcode maps indexed by `[pp][map]`, `pp` selecting no prefix, `66`, `f3` or `f2`.
pub(crate) static VEX_MAPS: [[Option<&SparseMap>; 4]; 4] = [
    [None, Some(&VEX_MAP1), Some(&VEX_MAP2), None],
    [None, Some(&VEX_66_MAP1), Some(&VEX_66_MAP2), Some(&VEX_66_MAP3)],
    [None, Some(&VEX_F3_MAP1), Some(&VEX_F3_MAP2), None],
    [None, Some(&VEX_F2_MAP1), Some(&VEX_F2_MAP2), Some(&VEX_F2_MAP3)],
];

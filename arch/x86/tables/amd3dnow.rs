use super::SparseMap;
use crate::opcode::op;

/// 3DNow! instructions, `0f 0f /r ib` with the suffix byte selecting the entry.
pub(crate) static AMD_3DNOW: SparseMap = SparseMap::new(&[
    (0x0c, op!("pi2fw %Pq,%Qq", PI2FW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x0d, op!("pi2fd %Pq,%Qq", PI2FD, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x1c, op!("pf2iw %Pq,%Qq", PF2IW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x1d, op!("pf2id %Pq,%Qq", PF2ID, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x8a, op!("pfnacc %Pq,%Qq", PFNACC, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x8e, op!("pfpnacc %Pq,%Qq", PFPNACC, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x90, op!("pfcmpge %Pq,%Qq", PFCMPGE, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x94, op!("pfmin %Pq,%Qq", PFMIN, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x96, op!("pfrcp %Pq,%Qq", PFRCP, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x97, op!("pfrsqrt %Pq,%Qq", PFRSQRT, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x9a, op!("pfsub %Pq,%Qq", PFSUB, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0x9e, op!("pfadd %Pq,%Qq", PFADD, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0xa0, op!("pfcmpgt %Pq,%Qq", PFCMPGT, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0xa4, op!("pfmax %Pq,%Qq", PFMAX, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0xa6, op!("pfrcpit1 %Pq,%Qq", PFRCPIT1, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0xa7, op!("pfrsqit1 %Pq,%Qq", PFRSQIT1, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0xaa, op!("pfsubr %Pq,%Qq", PFSUBR, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0xae, op!("pfacc %Pq,%Qq", PFACC, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0xb0, op!("pfcmpeq %Pq,%Qq", PFCMPEQ, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0xb4, op!("pfmul %Pq,%Qq", PFMUL, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0xb6, op!("pfrcpit2 %Pq,%Qq", PFRCPIT2, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0xb7, op!("pmulhrw %Pq,%Qq", PMULHRW, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0xbb, op!("pswapd %Pq,%Qq", PSWAPD, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
    (0xbf, op!("pavgusb %Pq,%Qq", PAVGUSB, [ModRm, UseModRm], [Pq, Qq], HARMLESS | MMX)),
]);


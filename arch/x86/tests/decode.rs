use std::cell::Cell;

use xdis_x86::{
    format, opcode::opcode, opcode::optype, operand::RegClass, prefix, seg, CpuMode, Decoder,
    ErrorKind, Options, Printer, ReadError,
};

fn decoder(mode: CpuMode) -> Decoder {
    Decoder::new(&Options::with_mode(mode))
}

fn text(mode: CpuMode, bytes: &[u8]) -> String {
    let insn = decoder(mode).decode(0x1000, bytes).unwrap();
    let s = Printer::new(0).display(&(), &insn).to_string();
    s
}

const MODES: [CpuMode; 3] = [CpuMode::Bits16, CpuMode::Bits32, CpuMode::Bits64];

#[test]
fn scenarios() {
    for mode in MODES {
        let insn = decoder(mode).decode(0, &[0x90]).unwrap();
        assert_eq!((insn.len(), insn.mnemonic()), (1, "nop"), "{mode}");

        let insn = decoder(mode).decode(0, &[0x0f, 0x1f, 0x00]).unwrap();
        assert_eq!((insn.len(), insn.opcode()), (3, opcode::NOP), "{mode}");

        let insn = decoder(mode).decode(0, &[0xc3]).unwrap();
        assert_eq!((insn.len(), insn.mnemonic()), (1, "retn"), "{mode}");
        assert!(insn.optype() & optype::UNCOND_CONTROLFLOW != 0);
    }

    let insn = decoder(CpuMode::Bits32)
        .decode(0, &[0xb8, 0x04, 0x00, 0x00, 0x00])
        .unwrap();
    assert_eq!(insn.len(), 5);
    let imm = insn.operand(1).unwrap();
    assert_eq!((imm.imm(), imm.size()), (Some(4), 4));
    assert_eq!(text(CpuMode::Bits32, &[0xb8, 0x04, 0x00, 0x00, 0x00]), "mov eax, 000000004h");

    let insn = decoder(CpuMode::Bits64).decode(0, &[0x48, 0x89, 0xd8]).unwrap();
    assert_eq!(insn.len(), 3);
    for op in insn.operands() {
        assert_eq!(op.reg().map(|r| r.class()), Some(RegClass::Gen64));
    }

    let insn = decoder(CpuMode::Bits32).decode(0, &[0xf0, 0xff, 0xc0]).unwrap();
    assert_eq!(insn.opcode(), opcode::UD2);
}

#[test]
fn operands_are_materialized() {
    let insn = decoder(CpuMode::Bits32)
        .decode(0x1000, &[0x8b, 0x44, 0x98, 0x10])
        .unwrap();
    assert_eq!(insn.len(), 4);
    assert_eq!(insn.opcode(), opcode::MOV);

    let dst = insn.operand(0).unwrap();
    let reg = dst.reg().unwrap();
    assert_eq!((reg.class(), reg.index()), (RegClass::Gen32, 0));

    let src = insn.operand(1).unwrap();
    assert!(src.is_memory());
    assert_eq!(src.base().map(|r| r.index()), Some(0));
    assert_eq!(src.index().map(|r| r.index()), Some(3));
    assert_eq!(src.scale(), Some(4));
    assert_eq!(src.disp(), Some(0x10));
    assert_eq!(src.size(), 4);
}

#[test]
fn relative_immediate_is_sign_extended() {
    let insn = decoder(CpuMode::Bits32).decode(0x2000, &[0xeb, 0xfe]).unwrap();
    let op = insn.operand(0).unwrap();
    assert!(op.is_relative());
    assert_eq!(op.imm(), Some(-2i64 as u64));
    assert!(insn.is_control_flow());
}

#[test]
fn starved_reader() {
    let err = decoder(CpuMode::Bits32).decode(0, &[0x8b]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Read);
    assert_eq!(err.len(), 2);

    let err = decoder(CpuMode::Bits32).decode(0, &[0xe8, 0x00]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Read);
    assert_eq!(err.len(), 5);

    let err = decoder(CpuMode::Bits64).decode(0, &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Read);
}

#[test]
fn reader_callback() {
    let memory = [0x90, 0x48, 0x89, 0xd8];
    let calls = Cell::new(0);
    let mut reader = |address: u64, buf: &mut [u8], min_len: usize| {
        calls.set(calls.get() + 1);
        let start = address as usize;
        let avail = memory.get(start..).unwrap_or_default();
        let len = avail.len().min(buf.len());
        buf[..len].copy_from_slice(&avail[..len]);
        if len < min_len {
            Err(ReadError { address, read: len })
        } else {
            Ok(len)
        }
    };
    let insn = decoder(CpuMode::Bits64).decode_with(1, &mut reader).unwrap();
    assert_eq!(insn.len(), 3);
    assert_eq!(insn.bytes(), &[0x48, 0x89, 0xd8]);
    assert!(calls.get() >= 1);
}

#[test]
fn prefetched_bytes_skip_the_reader() {
    let mut reader = |_: u64, _: &mut [u8], _: usize| -> Result<usize, ReadError> {
        panic!("reader must not be called");
    };
    let insn = decoder(CpuMode::Bits32)
        .decode_prefetched(0x1000, &[0xb8, 0x78, 0x56, 0x34, 0x12], &mut reader)
        .unwrap();
    assert_eq!(insn.len(), 5);
    assert_eq!(insn.operand(1).and_then(|op| op.imm()), Some(0x1234_5678));
}

#[test]
fn prefetched_bytes_are_extended() {
    let rest = [0x34, 0x12];
    let mut reader = |address: u64, buf: &mut [u8], min_len: usize| {
        let avail = rest.get((address - 0x1003) as usize..).unwrap_or_default();
        let len = avail.len().min(buf.len());
        buf[..len].copy_from_slice(&avail[..len]);
        if len < min_len {
            Err(ReadError { address, read: len })
        } else {
            Ok(len)
        }
    };
    let insn = decoder(CpuMode::Bits32)
        .decode_prefetched(0x1000, &[0xb8, 0x78, 0x56], &mut reader)
        .unwrap();
    assert_eq!(insn.bytes(), &[0xb8, 0x78, 0x56, 0x34, 0x12]);
}

#[test]
fn filter_takes_size_only_path() {
    let opts = Options {
        mode: CpuMode::Bits32,
        filter: optype::CONTROLFLOW,
        strict_segments: false,
    };
    let decoder = Decoder::new(&opts);

    let insn = decoder.decode(0, &[0x89, 0xd8]).unwrap();
    assert_eq!(insn.len(), 2);
    assert!(insn.operands().iter().all(|op| op.is_none()));

    let insn = decoder.decode(0, &[0xe8, 0x10, 0x00, 0x00, 0x00]).unwrap();
    assert!(insn.operand(0).unwrap().is_relative());
}

#[test]
fn length_matches_full_decode() {
    let cases: &[(CpuMode, &[u8])] = &[
        (CpuMode::Bits32, &[0x8b, 0x84, 0x24, 0x00, 0x01, 0x00, 0x00]),
        (CpuMode::Bits32, &[0xc7, 0x45, 0xf8, 0x01, 0x00, 0x00, 0x00]),
        (CpuMode::Bits32, &[0x66, 0x0f, 0x3a, 0x0f, 0xc1, 0x08]),
        (CpuMode::Bits32, &[0x9a, 0x78, 0x56, 0x34, 0x12, 0x08, 0x00]),
        (CpuMode::Bits32, &[0x67, 0x8b, 0x46, 0x04]),
        (CpuMode::Bits32, &[0xdd, 0x04, 0x24]),
        (CpuMode::Bits16, &[0x8b, 0x82, 0x00, 0x01]),
        (CpuMode::Bits16, &[0x66, 0xb8, 0x78, 0x56, 0x34, 0x12]),
        (CpuMode::Bits64, &[0x48, 0xb8, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]),
        (CpuMode::Bits64, &[0x48, 0x8d, 0x04, 0x25, 0x00, 0x10, 0x00, 0x00]),
        (CpuMode::Bits64, &[0xc4, 0xe3, 0x71, 0x4a, 0xc2, 0x30]),
        (CpuMode::Bits64, &[0x67, 0xa1, 0x00, 0x10, 0x00, 0x00]),
    ];
    for (mode, bytes) in cases {
        let decoder = decoder(*mode);
        let insn = decoder.decode(0, bytes).unwrap();
        assert_eq!(insn.len(), bytes.len(), "{bytes:02x?}");
        assert_eq!(decoder.length_of(0, bytes), Ok(bytes.len()), "{bytes:02x?}");
    }
}

#[test]
fn too_long() {
    let mut bytes = vec![0x66; 15];
    bytes.push(0x90);
    let err = decoder(CpuMode::Bits32).decode(0, &bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TooLong);
    assert_eq!(err.len(), 15);

    let insn = decoder(CpuMode::Bits32).decode(0, &bytes[1..]).unwrap();
    assert_eq!(insn.len(), 15);
}

#[test]
fn rex_before_prefix_is_ignored() {
    let insn = decoder(CpuMode::Bits64)
        .decode(0, &[0x48, 0x66, 0x89, 0xc8])
        .unwrap();
    assert!(!insn.has_prefix(prefix::REX));
    assert!(insn.has_prefix(prefix::OPSIZE));
    assert_eq!(insn.op_mode(), CpuMode::Bits16);

    let insn = decoder(CpuMode::Bits64).decode(0, &[0x48, 0x89, 0xc8]).unwrap();
    assert!(insn.has_prefix(prefix::REX));
    assert_eq!(insn.op_mode(), CpuMode::Bits64);
}

#[test]
fn illegal_lock_becomes_ud2() {
    let insn = decoder(CpuMode::Bits32).decode(0, &[0xf0, 0x01, 0xd8]).unwrap();
    assert_eq!(insn.opcode(), opcode::UD2);
    assert!(insn.has_prefix(prefix::LOCK));
    assert!(insn.operands().is_empty());

    let insn = decoder(CpuMode::Bits32).decode(0, &[0xf0, 0x01, 0x18]).unwrap();
    assert_eq!(insn.opcode(), opcode::ADD);
}

#[test]
fn lock_mov_cr_selects_cr8() {
    let insn = decoder(CpuMode::Bits32)
        .decode(0, &[0xf0, 0x0f, 0x20, 0xc0])
        .unwrap();
    assert!(!insn.has_prefix(prefix::LOCK));
    let reg = insn.operand(1).and_then(|op| op.reg()).unwrap();
    assert_eq!((reg.class(), reg.index()), (RegClass::Cr, 8));
}

#[test]
fn vex_or_les() {
    let insn = decoder(CpuMode::Bits32).decode(0, &[0xc4, 0x00]).unwrap();
    assert_eq!(insn.opcode(), opcode::LES);
    assert!(insn.vex().is_none());

    let insn = decoder(CpuMode::Bits32).decode(0, &[0xc5, 0xf8, 0x77]).unwrap();
    assert_eq!(insn.opcode(), opcode::VZEROUPPER);
    assert!(insn.has_prefix(prefix::VEX));

    let insn = decoder(CpuMode::Bits64).decode(0, &[0xc5, 0xfc, 0x28, 0xc1]).unwrap();
    let vex = insn.vex().unwrap();
    assert!(vex.l);
    assert_eq!(vex.vvvv, 0);
}

#[test]
fn segment_overrides() {
    let lenient = decoder(CpuMode::Bits64);
    let strict = Decoder::new(&Options {
        strict_segments: true,
        ..Options::with_mode(CpuMode::Bits64)
    });

    let bytes = [0x2e, 0x8b, 0x00];
    assert_eq!(lenient.decode(0, &bytes).unwrap().segment(), Some(seg::CS));
    assert_eq!(strict.decode(0, &bytes).unwrap().segment(), None);

    let bytes = [0x64, 0x8b, 0x00];
    assert_eq!(strict.decode(0, &bytes).unwrap().segment(), Some(seg::FS));
}

#[test]
fn invalid_in_long_mode() {
    for byte in [0x06, 0x27, 0x60, 0x9a, 0xd4] {
        let err = decoder(CpuMode::Bits64).decode(0, &[byte, 0, 0, 0, 0, 0, 0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOpcode, "{byte:#04x}");
        assert_eq!(err.len(), 1, "{byte:#04x}");
    }
}

#[test]
fn register_names() {
    assert_eq!(text(CpuMode::Bits32, &[0x88, 0xe0]), "mov al, ah");
    assert_eq!(text(CpuMode::Bits64, &[0x40, 0x88, 0xe0]), "mov al, spl");
    assert_eq!(text(CpuMode::Bits64, &[0x45, 0x88, 0xc8]), "mov r8b, r9b");
}

#[test]
fn column_layout() {
    let insn = decoder(CpuMode::Bits32).decode(0x1000, &[0x55]).unwrap();

    let printer = Printer::new(format::ADDR_LEFT | format::BYTES_LEFT);
    assert_eq!(
        printer.display(&(), &insn).to_string(),
        "00001000 55             push ebp"
    );

    let printer = Printer::new(format::BYTES_RIGHT);
    assert_eq!(
        printer.display(&(), &insn).to_string(),
        "push ebp                        ; 55"
    );

    let printer = Printer::new(format::ADDR_RIGHT | format::BYTES_RIGHT);
    assert_eq!(
        printer.display(&(), &insn).to_string(),
        "push ebp                        ; 00001000 55"
    );

    let insn = decoder(CpuMode::Bits64).decode(0x1000, &[0x48, 0x89, 0xe5]).unwrap();
    let printer = Printer::new(format::BYTES_LEFT | format::BYTES_SPACED | format::BYTES_BRACKETS);
    assert_eq!(
        printer.display(&(), &insn).to_string(),
        "[48 89 e5]             mov rbp, rsp"
    );
}

#[test]
fn format_into_truncates() {
    let insn = decoder(CpuMode::Bits32).decode(0, &[0x89, 0xe5]).unwrap();
    let printer = Printer::new(0);

    let mut buf = [0; 8];
    assert_eq!(printer.format_into(&(), &insn, &mut buf), 12);
    assert_eq!(&buf, b"mov ebp,");

    let mut buf = [0; 32];
    let len = printer.format_into(&(), &insn, &mut buf);
    assert_eq!(&buf[..len], b"mov ebp, esp");
}

#[test]
fn disassemble_ignores_filter() {
    let opts = Options {
        filter: 0,
        ..Options::default()
    };
    let mut reader = slice_reader(&[0x8b, 0x45, 0x08]);
    let (insn, text) = Decoder::new(&opts)
        .disassemble(0, &mut reader, &Printer::new(0), &())
        .unwrap();
    assert_eq!(insn.len(), 3);
    assert_eq!(text, "mov eax, [ebp+008h]");
}

fn slice_reader(
    data: &[u8],
) -> impl FnMut(u64, &mut [u8], usize) -> Result<usize, ReadError> + '_ {
    move |address, buf, min_len| {
        let avail = data.get(address as usize..).unwrap_or_default();
        let len = avail.len().min(buf.len());
        buf[..len].copy_from_slice(&avail[..len]);
        if len < min_len {
            Err(ReadError { address, read: len })
        } else {
            Ok(len)
        }
    }
}

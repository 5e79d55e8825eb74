use proptest::prelude::*;
use xdis_x86::{CpuMode, Decoder, ErrorKind, Options, Printer, MAX_INSN_LEN};

fn cpu_mode() -> impl Strategy<Value = CpuMode> {
    prop_oneof![
        Just(CpuMode::Bits16),
        Just(CpuMode::Bits32),
        Just(CpuMode::Bits64),
    ]
}

fn insn_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..20)
}

proptest! {
    #[test]
    fn length_is_bounded(mode in cpu_mode(), bytes in insn_bytes()) {
        let decoder = Decoder::new(&Options::with_mode(mode));
        match decoder.decode(0x1000, &bytes) {
            Ok(insn) => {
                prop_assert!(insn.len() >= 1 && insn.len() <= MAX_INSN_LEN);
                prop_assert!(insn.len() <= bytes.len());
                prop_assert_eq!(insn.bytes(), &bytes[..insn.len()]);
            }
            Err(err) => prop_assert!(err.len() <= MAX_INSN_LEN),
        }
    }

    #[test]
    fn decode_is_deterministic(mode in cpu_mode(), bytes in insn_bytes()) {
        let decoder = Decoder::new(&Options::with_mode(mode));
        prop_assert_eq!(decoder.decode(0, &bytes), decoder.decode(0, &bytes));
    }

    #[test]
    fn length_only_agrees(mode in cpu_mode(), bytes in insn_bytes()) {
        let decoder = Decoder::new(&Options::with_mode(mode));
        let full = decoder.decode(0, &bytes).map(|insn| insn.len());
        let size = decoder.length_of(0, &bytes);
        // the size-only path does not validate operands
        let len = |res: Result<usize, xdis_x86::Error>| res.unwrap_or_else(|err| err.len());
        if let Err(err) = &full {
            if err.kind() == ErrorKind::Read {
                prop_assert_eq!(size.clone().map_err(|e| e.kind()), Err(ErrorKind::Read));
            }
        }
        prop_assert_eq!(len(full), len(size));
    }

    #[test]
    fn printer_is_deterministic(mode in cpu_mode(), bytes in insn_bytes(), flags in 0u32..256) {
        let decoder = Decoder::new(&Options::with_mode(mode));
        if let Ok(insn) = decoder.decode(0x40_0000, &bytes) {
            let printer = Printer::new(flags);
            let a = printer.display(&(), &insn).to_string();
            let b = printer.display(&(), &insn).to_string();
            prop_assert!(!a.is_empty());
            prop_assert_eq!(a, b);
        }
    }
}

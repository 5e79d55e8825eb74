use xdis_test::test::{self, Runner, Test};
use xdis_x86::{format, CpuMode, Decoder, Options, Printer, SymbolsInfo};

#[derive(Default)]
struct X86 {
    flags: &'static str,
}

impl Runner for X86 {
    fn decode(&mut self, test: &Test, symbols: &SymbolsInfo) -> (usize, String) {
        let mut opts = Options::default();
        let mut fmt = 0;

        let flags = test::parse_flags(self.flags).chain(test::parse_flags(test.comment));
        for (name, state) in flags {
            match name {
                "mode16" if state => opts.mode = CpuMode::Bits16,
                "mode32" if state => opts.mode = CpuMode::Bits32,
                "mode64" if state => opts.mode = CpuMode::Bits64,
                "mode16" | "mode32" | "mode64" => {}
                "strict" if state => fmt |= format::STRICT,
                "relative" if state => fmt |= format::RELATIVE_BRANCH,
                "strict" | "relative" => {}
                "strict_segments" => opts.strict_segments = state,
                _ => panic!("unexpected flag {name}"),
            }
        }

        match Decoder::new(&opts).decode(test.address, &test.bytes) {
            Ok(insn) => {
                let text = Printer::new(fmt).display(symbols, &insn).to_string();
                (insn.len(), text)
            }
            Err(err) => (err.len(), format!("!{:?}", err.kind())),
        }
    }
}

macro_rules! test {
    ($name:ident, $file:expr, $flags:expr) => {
        #[test]
        fn $name() -> Result<(), String> {
            X86 { flags: $flags }.run($file, include_str!($file))
        }
    };
}

test!(mode16, "mode16.test", "+mode16");
test!(mode32, "mode32.test", "+mode32");
test!(mode64, "mode64.test", "+mode64");

test!(sse, "sse.test", "+mode32");
test!(vex, "vex.test", "+mode64");
test!(x87, "x87.test", "+mode32");

test!(strict, "strict.test", "+mode32 +strict");
test!(relative, "relative.test", "+mode32 +relative");
test!(symbols, "symbols.test", "+mode32");

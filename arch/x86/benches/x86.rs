#[cfg(feature = "print")]
use std::io::{Cursor, Write};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use xdis_test::test::Parser;
use xdis_x86::{CpuMode, Decoder, Options};
#[cfg(feature = "print")]
use xdis_x86::Printer;

const SOURCES: &[(&str, CpuMode, &str)] = &[
    (
        "legacy32",
        CpuMode::Bits32,
        concat!(
            include_str!("../tests/mode32.test"),
            include_str!("../tests/x87.test"),
        ),
    ),
    ("legacy64", CpuMode::Bits64, include_str!("../tests/mode64.test")),
    ("sse", CpuMode::Bits32, include_str!("../tests/sse.test")),
    ("vex", CpuMode::Bits64, include_str!("../tests/vex.test")),
];

fn bench_impl<const PRINT: bool>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(name);
    for (name, mode, source) in SOURCES {
        let (address, code) = Parser::parse_all(source).unwrap();
        let decoder = Decoder::new(&Options::with_mode(*mode));
        #[cfg(feature = "print")]
        let printer = Printer::new(0);
        #[cfg(feature = "print")]
        let mut buffer = Cursor::new(Vec::new());

        group.throughput(Throughput::Bytes(code.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &code, |b, code| {
            b.iter(|| {
                let mut offset = 0;
                let mut count = 0;
                while offset < code.len() {
                    let pc = address + offset as u64;
                    match decoder.decode(pc, &code[offset..]) {
                        Ok(insn) => {
                            count += 1;
                            offset += insn.len();

                            #[cfg(feature = "print")]
                            if PRINT {
                                buffer.set_position(0);
                                write!(&mut buffer, "{}", printer.display(&(), &insn)).unwrap();
                            }
                        }
                        Err(err) => offset += err.len().max(1),
                    }
                }
                count
            })
        });
    }
}

fn x86_bench(c: &mut Criterion) {
    bench_impl::<false>(c, "decode");
    #[cfg(feature = "print")]
    bench_impl::<true>(c, "print");
}

criterion_group!(benches, x86_bench);
criterion_main!(benches);

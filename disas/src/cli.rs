use std::{cmp, fmt, num::ParseIntError, str::FromStr};

use bpaf::{doc::Style, *};
use xdis_x86::CpuMode;

#[derive(Copy, Clone, Debug)]
pub enum Color {
    Off,
    On,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Demangle {
    None,
    Auto,
    Gnuv3,
    Rust,
}

impl fmt::Display for Demangle {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Demangle::None => "none",
            Demangle::Auto => "auto",
            Demangle::Gnuv3 => "gnu-v3",
            Demangle::Rust => "rust",
        };
        fmt.write_str(s)
    }
}

impl FromStr for Demangle {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Demangle::None),
            "auto" => Ok(Demangle::Auto),
            "gnu-v3" => Ok(Demangle::Gnuv3),
            "rust" => Ok(Demangle::Rust),
            _ => Err("invalid demangle style"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cli {
    pub mode: Option<CpuMode>,
    pub raw: bool,
    pub base: u64,
    pub sections: Vec<String>,
    pub disassemble_zeroes: bool,
    pub color: Color,
    pub show_raw_insn: bool,
    pub address_right: bool,
    pub relative: bool,
    pub strict: bool,
    pub strict_segments: bool,
    pub length_only: bool,
    pub demangle: Demangle,
    pub start_address: u64,
    pub stop_address: u64,
    pub threads: usize,
    pub path: String,
}

fn parse_address(s: &str) -> Result<u64, ParseIntError> {
    if s.starts_with("0x") || s.starts_with("0X") {
        u64::from_str_radix(&s[2..], 16)
    } else {
        s.parse()
    }
}

fn parse_mode(s: &str) -> Result<CpuMode, String> {
    match s {
        "16" => Ok(CpuMode::Bits16),
        "32" => Ok(CpuMode::Bits32),
        "64" => Ok(CpuMode::Bits64),
        _ => Err(format!("invalid mode {s}, expected 16, 32 or 64")),
    }
}

pub fn parse_cli() -> Cli {
    let mode = short('m')
        .long("mode")
        .help("Decode as 16, 32 or 64-bit code [default: from the file, 32 for raw]")
        .argument::<String>("BITS")
        .parse(|s| parse_mode(&s))
        .optional();

    let raw = short('r')
        .long("raw")
        .help("Treat FILE as a flat binary image")
        .switch();

    let base = long("base")
        .help("Load address of a raw image [default: 0]")
        .argument::<String>("ADDR")
        .parse(|s| parse_address(&s))
        .fallback(0);

    let sections = short('j')
        .long("section")
        .help("Only display information for section NAME")
        .argument("NAME")
        .many();

    let disassemble_zeroes = short('z')
        .long("disassemble-zeroes")
        .help("Do not skip blocks of zeroes when disassembling")
        .switch();

    #[cfg(feature = "color")]
    let auto_color =
        supports_color::on(supports_color::Stream::Stdout).map_or(Color::Off, |_| Color::On);

    #[cfg(not(feature = "color"))]
    let auto_color = Color::Off;

    let color = long("color")
        .help("Enable or disable color output [default: auto, valid modes: off, on, auto]")
        .argument::<String>("MODE")
        .parse(move |s| match s.as_str() {
            "off" => Ok(Color::Off),
            "on" => Ok(Color::On),
            "auto" => Ok(auto_color),
            _ => Err(format!("invalid color {s}")),
        })
        .fallback(auto_color);

    let show_raw_insn = long("show-raw-insn")
        .help("Display hex alongside symbolic disassembly")
        .switch()
        .map(|_| true);
    let no_show_raw_insn = long("no-show-raw-insn")
        .switch()
        .hide_usage()
        .map(|_| false);
    let show_raw_insn = construct!([show_raw_insn, no_show_raw_insn])
        .custom_usage(&[("--[no-]show-raw-insn", Style::Literal)])
        .fallback(true)
        .last();

    let address_right = long("address-right")
        .help("Print addresses and bytes in a trailing comment")
        .switch();

    let relative = long("relative")
        .help("Print branch targets relative to the instruction")
        .switch();

    let strict = long("strict")
        .help("Print size keywords on every memory operand")
        .switch();

    let strict_segments = long("strict-segments")
        .help("Ignore cs, ds, es and ss overrides in 64-bit code")
        .switch();

    let length_only = short('l')
        .long("length-only")
        .help("Only print the address and length of each instruction")
        .switch();

    let demangle_flag = short('C')
        .long("demangle")
        .switch()
        .hide()
        .map(|_| Demangle::Auto);
    let demangle_arg = short('C')
        .long("demangle")
        .help("Decode mangled symbol names [default: auto]")
        .argument::<Demangle>("STYLE");
    let demangle = construct!([demangle_arg, demangle_flag])
        .last()
        .fallback(Demangle::Auto);

    let start_address = long("start-address")
        .help("Only process data whose address is >= ADDR")
        .argument::<String>("ADDR")
        .parse(move |s| parse_address(&s))
        .fallback(0);

    let stop_address = long("stop-address")
        .help("Only process data whose address is < ADDR")
        .argument::<String>("ADDR")
        .parse(move |s| parse_address(&s))
        .fallback(u64::MAX);

    let num_cpus = std::thread::available_parallelism()
        .map(|i| i.get())
        .unwrap_or(1);

    #[cfg(feature = "parallel")]
    let threads_help = &*format!("Set the number of threads to use [default: {num_cpus}]");

    #[cfg(not(feature = "parallel"))]
    let threads_help = "Set the number of threads to use [disabled at compile]";

    let threads = long("threads")
        .help(threads_help)
        .argument("NUM")
        .map(move |i| match i {
            0 => num_cpus,
            _ => i,
        })
        .fallback(cmp::min(4, num_cpus));

    let path = positional("FILE")
        .help("File to process")
        .fallback("a.out".into());

    construct!(Cli {
        mode,
        raw,
        base,
        sections,
        disassemble_zeroes,
        color,
        show_raw_insn,
        address_right,
        relative,
        strict,
        strict_segments,
        length_only,
        demangle,
        start_address,
        stop_address,
        threads,
        path,
    })
    .to_options()
    .version(env!("CARGO_PKG_VERSION"))
    .descr("Disassemble x86 and x64 machine code")
    .fallback_to_usage()
    .run()
}

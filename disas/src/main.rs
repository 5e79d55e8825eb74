#[macro_use]
extern crate log;

mod cli;

#[cfg(feature = "parallel")]
mod parallel;

use std::{
    error::Error,
    fmt, fs,
    io::{self, BufWriter, Write},
    process,
};

use object::{Object, ObjectSection, SymbolMap, SymbolMapName};
use xdis_x86::{format, CpuMode, Decoder, Options, Printer, PrinterExt};

#[cfg(feature = "color")]
use xdis_x86::Style;

use crate::cli::{Cli, Color, Demangle};

/// Runs of zero bytes at least this long are printed as `...`.
const ZERO_BLOCK: usize = 16;

fn unsupported_arch() -> ! {
    eprintln!("error: unsupported architecture");
    process::exit(1);
}

enum SymbolName<'a> {
    Plain(&'a str),
    #[cfg(feature = "demangle")]
    Cpp(cpp_demangle::Symbol<&'a str>),
    #[cfg(feature = "demangle")]
    Rust(rustc_demangle::Demangle<'a>),
}

impl fmt::Display for SymbolName<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Plain(s) => fmt.write_str(s),
            #[cfg(feature = "demangle")]
            Self::Cpp(s) => s.fmt(fmt),
            #[cfg(feature = "demangle")]
            Self::Rust(s) => s.fmt(fmt),
        }
    }
}

#[derive(Copy, Clone)]
struct Info<'a> {
    #[cfg_attr(not(feature = "color"), allow(dead_code))]
    color: Color,
    symbols: &'a SymbolMap<SymbolMapName<'a>>,
    #[cfg_attr(not(feature = "demangle"), allow(dead_code))]
    demangle: Demangle,
}

impl<'a> Info<'a> {
    fn symbol_name<'s>(&self, name: &'s str) -> SymbolName<'s> {
        #[cfg(feature = "demangle")]
        match self.demangle {
            Demangle::Auto | Demangle::Gnuv3 => {
                if let Ok(symbol) = cpp_demangle::Symbol::new(name) {
                    return SymbolName::Cpp(symbol);
                }
                if self.demangle == Demangle::Auto {
                    if let Ok(symbol) = rustc_demangle::try_demangle(name) {
                        return SymbolName::Rust(symbol);
                    }
                }
            }
            Demangle::Rust => return SymbolName::Rust(rustc_demangle::demangle(name)),
            Demangle::None => {}
        }
        SymbolName::Plain(name)
    }

    /// Symbol that starts exactly at `address`.
    fn symbol_at(&self, address: u64) -> Option<&'a str> {
        self.symbols
            .get(address)
            .filter(|s| s.address() == address)
            .map(|s| s.name())
    }
}

impl PrinterExt for Info<'_> {
    fn get_symbol(&self, address: u64) -> Option<(u64, &str)> {
        self.symbols.get(address).map(|s| (s.address(), s.name()))
    }

    fn print_symbol(&self, fmt: &mut fmt::Formatter, display: impl fmt::Display) -> fmt::Result {
        let name = display.to_string();
        self.print_styled(fmt, xdis_x86::Style::Symbol, self.symbol_name(&name))
    }

    #[cfg(feature = "color")]
    fn print_styled(
        &self,
        fmt: &mut fmt::Formatter,
        style: Style,
        display: impl fmt::Display,
    ) -> fmt::Result {
        use owo_colors::OwoColorize;
        use std::fmt::Display;

        match self.color {
            Color::Off => display.fmt(fmt),
            Color::On => match style {
                Style::Prefix => display.yellow().fmt(fmt),
                Style::Mnemonic => display.yellow().fmt(fmt),
                Style::Register => display.blue().fmt(fmt),
                Style::Immediate => display.magenta().fmt(fmt),
                Style::Address => display.magenta().fmt(fmt),
                Style::AddressOffset => display.magenta().fmt(fmt),
                Style::Symbol => display.green().fmt(fmt),
                Style::Comment => display.fmt(fmt),
            },
        }
    }
}

/// Bytes to disassemble mapped at `address`.
struct Code<'a> {
    name: &'a str,
    address: u64,
    data: &'a [u8],
}

struct App<'a> {
    decoder: Decoder,
    printer: Printer,
    symbols: SymbolMap<SymbolMapName<'a>>,
    color: Color,
    demangle: Demangle,
    disassemble_zeroes: bool,
    length_only: bool,
    start_address: u64,
    stop_address: u64,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    threads: usize,
}

impl<'a> App<'a> {
    fn get_mode(file: &object::File) -> CpuMode {
        use object::Architecture as A;

        match file.architecture() {
            A::I386 => CpuMode::Bits32,
            A::X86_64 | A::X86_64_X32 => CpuMode::Bits64,
            _ => unsupported_arch(),
        }
    }

    fn get_file_format(file: &object::File) -> String {
        use object::{Architecture as A, BinaryFormat as B};

        let mut format = String::new();

        match (file.format(), file.is_64()) {
            (B::Elf, false) => format.push_str("elf32"),
            (B::Elf, true) => format.push_str("elf64"),
            (B::Pe, false) => format.push_str("pei"),
            (B::Pe, true) => format.push_str("pe64"),
            (B::MachO, _) => format.push_str("mach-o"),
            (B::Coff, _) => format.push_str("coff"),
            _ => format.push_str("unknown"),
        }

        format.push('-');

        match file.architecture() {
            A::I386 => format.push_str("i386"),
            A::X86_64 | A::X86_64_X32 => format.push_str("x86-64"),
            _ => format.push_str("unknown"),
        }

        format
    }

    fn new(cli: &Cli, mode: CpuMode, symbols: SymbolMap<SymbolMapName<'a>>) -> Self {
        let opts = Options {
            mode,
            strict_segments: cli.strict_segments,
            ..Options::default()
        };

        let mut flags = 0;
        if cli.address_right {
            flags |= format::ADDR_RIGHT;
            if cli.show_raw_insn {
                flags |= format::BYTES_RIGHT | format::BYTES_SPACED;
            }
        } else {
            flags |= format::ADDR_LEFT;
            if cli.show_raw_insn {
                flags |= format::BYTES_LEFT | format::BYTES_SPACED;
            }
        }
        if cli.relative {
            flags |= format::RELATIVE_BRANCH;
        }
        if cli.strict {
            flags |= format::STRICT;
        }
        debug!("{mode} code, format flags {flags:#x}");

        Self {
            decoder: Decoder::new(&opts),
            printer: Printer::new(flags),
            symbols,
            color: cli.color,
            demangle: cli.demangle,
            disassemble_zeroes: cli.disassemble_zeroes,
            length_only: cli.length_only,
            start_address: cli.start_address,
            stop_address: cli.stop_address,
            threads: cli.threads,
        }
    }

    fn create_info(&self) -> Info {
        Info {
            color: self.color,
            symbols: &self.symbols,
            demangle: self.demangle,
        }
    }

    fn address_width(&self) -> usize {
        match self.decoder.options().mode {
            CpuMode::Bits64 => 16,
            _ => 8,
        }
    }

    fn zero_run(&self, data: &[u8]) -> usize {
        if self.disassemble_zeroes {
            return 0;
        }
        let len = data.iter().position(|i| *i != 0).unwrap_or(data.len());
        if len >= ZERO_BLOCK {
            len
        } else {
            0
        }
    }

    /// Number of bytes the item at `offset` takes in the listing.
    pub fn step(&self, code: &Code, offset: usize) -> usize {
        let data = &code.data[offset..];
        let zeroes = self.zero_run(data);
        if zeroes != 0 {
            return zeroes;
        }
        let address = code.address + offset as u64;
        let len = match self.decoder.length_of(address, data) {
            Ok(len) => len,
            Err(err) => err.len(),
        };
        len.clamp(1, data.len())
    }

    /// Prints the listing of `code.data[start..end]`, `start` must be an item boundary.
    pub fn disassemble_range<W: Write>(
        &self,
        code: &Code,
        start: usize,
        end: usize,
        out: &mut W,
    ) -> io::Result<()> {
        let info = self.create_info();
        let width = self.address_width();
        let mut offset = start;
        while offset < end {
            let address = code.address + offset as u64;
            let data = &code.data[offset..];

            if let Some(name) = info.symbol_at(address) {
                writeln!(out, "\n{address:0width$x} <{}>:", info.symbol_name(name))?;
            }

            let zeroes = self.zero_run(data);
            if zeroes != 0 {
                writeln!(out, "\t...")?;
                offset += zeroes;
                continue;
            }

            if self.length_only {
                let len = match self.decoder.length_of(address, data) {
                    Ok(len) => {
                        writeln!(out, "{address:0width$x} {len}")?;
                        len
                    }
                    Err(err) => {
                        writeln!(out, "{address:0width$x} {} ; {err}", err.len())?;
                        err.len()
                    }
                };
                offset += len.clamp(1, data.len());
                continue;
            }

            let len = match self.decoder.decode(address, data) {
                Ok(insn) => {
                    writeln!(out, "{}", self.printer.display(&info, &insn))?;
                    insn.len()
                }
                Err(err) => {
                    writeln!(out, "{address:0width$x} (bad) ; {err}")?;
                    err.len()
                }
            };
            offset += len.clamp(1, data.len());
        }
        Ok(())
    }

    fn disassemble_code(&self, code: &Code) -> io::Result<()> {
        let mut out = BufWriter::new(io::stdout().lock());
        self.disassemble_range(code, 0, code.data.len(), &mut out)?;
        out.flush()
    }

    fn disassemble(&self, code: Code) -> Result<(), Box<dyn Error>> {
        // ignore broken pipe error
        fn helper(result: io::Result<()>) -> io::Result<()> {
            if matches!(result, Err(ref e) if e.kind() == io::ErrorKind::BrokenPipe) {
                Ok(())
            } else {
                result
            }
        }

        let mut data = code.data;
        let mut start_address = code.address;
        let stop_address = start_address + data.len() as u64;

        if start_address >= self.stop_address || stop_address <= self.start_address {
            return Ok(());
        }

        if self.stop_address < stop_address {
            data = &data[..(self.stop_address - start_address) as usize];
        }

        if start_address < self.start_address {
            data = &data[(self.start_address - start_address) as usize..];
            start_address = self.start_address;
        }

        helper({
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "\nDisassembly of section {}:", code.name)
        })?;

        let code = Code {
            name: code.name,
            address: start_address,
            data,
        };

        #[cfg(feature = "parallel")]
        if self.threads > 1 && data.len() >= 1024 * 64 {
            helper(parallel::disassemble_code(self, &code))?;
            return Ok(());
        }
        helper(self.disassemble_code(&code))?;
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = cli::parse_cli();
    let data = fs::read(&cli.path)?;
    debug!("{}: {} bytes", cli.path, data.len());

    if cli.raw {
        let mode = cli.mode.unwrap_or(CpuMode::Bits32);
        let app = App::new(&cli, mode, SymbolMap::new(Vec::new()));

        println!();
        println!("{}:     file format binary", cli.path);
        println!();

        app.disassemble(Code {
            name: ".data",
            address: cli.base,
            data: &data,
        })?;
        return Ok(());
    }

    let file = object::File::parse(&*data)?;
    let mode = cli.mode.unwrap_or_else(|| App::get_mode(&file));
    let format = App::get_file_format(&file);
    let symbols = file.symbol_map();
    debug!("{} symbols", symbols.symbols().len());
    let app = App::new(&cli, mode, symbols);

    println!();
    println!("{}:     file format {format}", cli.path);
    println!();

    let disassemble_section = |section: object::Section| -> Result<(), Box<dyn Error>> {
        app.disassemble(Code {
            name: section.name()?,
            address: section.address(),
            data: section.data()?,
        })
    };

    if cli.sections.is_empty() {
        for section in file.sections() {
            if object::SectionKind::Text == section.kind() {
                disassemble_section(section)?;
            }
        }
    } else {
        for section_name in &cli.sections {
            match file.section_by_name(section_name) {
                Some(section) => disassemble_section(section)?,
                None => warn!("section {section_name} not found"),
            }
        }
    }

    Ok(())
}

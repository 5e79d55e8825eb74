#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "print")]
extern crate alloc;

mod decode;
mod insn;
mod modrm;
pub mod opcode;
pub mod operand;
mod parse;
mod size;
mod tables;

#[cfg(feature = "print")]
mod printer;
#[cfg(feature = "print")]
mod regs;

use xdis_core::bytes::{ByteCache, SliceReader};

use crate::{decode::Inner, opcode::optype};

pub use xdis_core::{
    bytes::{ReadBytes, MAX_INSN_LEN},
    error::{Error, ErrorKind, ReadError},
    flags::Flags,
};

pub use crate::insn::{prefix, rex, seg, CpuMode, Instruction, ModRm, Sib, Vex};

#[cfg(feature = "print")]
pub use crate::printer::{format, Printer};
#[cfg(feature = "print")]
pub use xdis_core::{
    printer::{PrinterExt, Style},
    symbols::{Symbols, SymbolsInfo},
};

type Result<T = (), E = Error> = core::result::Result<T, E>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub mode: CpuMode,
    /// Instruction classes (see [`optype`]) that get their operands materialized.
    ///
    /// Other instructions take the size-only path: the length is exact but operand
    /// values are left empty.
    pub filter: u32,
    /// Drop `cs`, `ds`, `es` and `ss` overrides in 64-bit mode where they have no effect.
    pub strict_segments: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: CpuMode::default(),
            filter: optype::ALL,
            strict_segments: false,
        }
    }
}

impl Options {
    pub fn with_mode(mode: CpuMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

pub struct Decoder {
    opts: Options,
}

impl Decoder {
    pub fn new(opts: &Options) -> Self {
        Self { opts: *opts }
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Decodes the instruction at the start of `bytes` mapped at `address`.
    pub fn decode(&self, address: u64, bytes: &[u8]) -> Result<Instruction> {
        self.decode_with(address, &mut SliceReader::new(address, bytes))
    }

    /// Decodes the instruction at `address` fetching bytes through `reader`.
    pub fn decode_with<R>(&self, address: u64, reader: &mut R) -> Result<Instruction>
    where
        R: ReadBytes + ?Sized,
    {
        self.run(ByteCache::new(address), reader, self.opts.filter)
    }

    /// Decodes with already fetched `bytes`, `reader` is only called if they run out.
    pub fn decode_prefetched<R>(
        &self,
        address: u64,
        bytes: &[u8],
        reader: &mut R,
    ) -> Result<Instruction>
    where
        R: ReadBytes + ?Sized,
    {
        let mut cache = ByteCache::new(address);
        cache.prefetch(bytes);
        self.run(cache, reader, self.opts.filter)
    }

    /// Length of the instruction at `address` without materializing any operand.
    pub fn length<R>(&self, address: u64, reader: &mut R) -> Result<usize>
    where
        R: ReadBytes + ?Sized,
    {
        self.run(ByteCache::new(address), reader, 0)
            .map(|insn| insn.len())
    }

    /// Same as [`length`](Self::length) for an in-memory buffer.
    pub fn length_of(&self, address: u64, bytes: &[u8]) -> Result<usize> {
        self.length(address, &mut SliceReader::new(address, bytes))
    }

    /// Decodes and formats the instruction at `address`.
    ///
    /// The filter from [`Options`] is ignored, formatting needs every operand.
    #[cfg(feature = "print")]
    pub fn disassemble<R, E>(
        &self,
        address: u64,
        reader: &mut R,
        printer: &Printer,
        ext: &E,
    ) -> Result<(Instruction, alloc::string::String)>
    where
        R: ReadBytes + ?Sized,
        E: PrinterExt,
    {
        use alloc::string::ToString;

        let insn = self.run(ByteCache::new(address), reader, optype::ALL)?;
        let text = printer.display(ext, &insn).to_string();
        Ok((insn, text))
    }

    fn run<R>(&self, cache: ByteCache, reader: &mut R, filter: u32) -> Result<Instruction>
    where
        R: ReadBytes + ?Sized,
    {
        let mut inner = Inner::new(&self.opts, reader, cache, filter);
        let len = inner.decode();
        // the size-only path skips operand bytes, they still must be readable
        inner.cache.ensure(&mut *inner.reader, 0, len);

        if let Some(kind) = inner.cache.status() {
            return Err(Error::new(kind, len));
        }

        let mut insn = inner.insn;
        insn.bytes[..len].copy_from_slice(&inner.cache.as_slice()[..len]);
        Ok(insn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(opts.mode, CpuMode::Bits32);
        assert_eq!(opts.filter, optype::ALL);
        assert!(!opts.strict_segments);
    }

    #[test]
    fn bytes_are_copied() {
        let decoder = Decoder::new(&Options::with_mode(CpuMode::Bits64));
        let insn = decoder.decode(0x1000, &[0x48, 0x89, 0xd8, 0xcc]).unwrap();
        assert_eq!(insn.bytes(), &[0x48, 0x89, 0xd8]);
        assert_eq!(insn.next_address(), 0x1003);
    }
}

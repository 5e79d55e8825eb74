//! yasm flavoured text output.

use core::{
    cmp,
    fmt::{self, Write},
};

use xdis_core::{
    flags::Flags,
    printer::{FormatterFn, PrinterExt},
};

use crate::{
    insn::{prefix, CpuMode, Instruction},
    opcode::{opcode, Opcode},
    operand::{usage, Operand},
    regs::{register_name, segment_name},
};

/// Bits accepted by [`Printer::new`].
///
/// If both the left and the right variant of a column are requested the left one wins.
pub mod format {
    /// Raw bytes before the instruction text.
    pub const BYTES_LEFT: u32 = 1 << 0;
    /// Raw bytes in the trailing comment.
    pub const BYTES_RIGHT: u32 = 1 << 1;
    /// Raw bytes enclosed in `[` and `]`.
    pub const BYTES_BRACKETS: u32 = 1 << 2;
    /// Raw bytes separated by spaces.
    pub const BYTES_SPACED: u32 = 1 << 3;
    pub const ADDR_LEFT: u32 = 1 << 4;
    pub const ADDR_RIGHT: u32 = 1 << 5;
    /// Branch targets as `$+offset` from the instruction start.
    pub const RELATIVE_BRANCH: u32 = 1 << 6;
    /// Size keywords on every memory operand and sign-extended immediate.
    pub const STRICT: u32 = 1 << 7;
}

/// Bytes the left byte column has room for.
const BYTES_COLUMN: usize = 7;
/// Width of the instruction text before a trailing comment.
const TEXT_COLUMN: usize = 32;

#[derive(Copy, Clone)]
enum Key {
    OpMode,
    AddrMode,
}

/// Mnemonic that depends on the operand or address mode.
struct Special {
    opcode: Opcode,
    key: Key,
    names: [&'static str; 3],
}

macro_rules! special {
    ($($opcode:ident $key:ident [$n16:literal, $n32:literal, $n64:literal]),* $(,)?) => {
        &[$(Special {
            opcode: opcode::$opcode,
            key: Key::$key,
            names: [$n16, $n32, $n64],
        }),*]
    };
}

#[rustfmt::skip]
static SPECIAL: &[Special] = special! {
    PUSHF       OpMode      ["pushfw", "pushfd", "pushfq"],
    POPF        OpMode      ["popfw", "popfd", "popfq"],
    PUSHA       OpMode      ["pushaw", "pushad", "pushad"],
    POPA        OpMode      ["popaw", "popad", "popad"],
    IRET        OpMode      ["iret", "iretd", "iretq"],
    CWDE        OpMode      ["cbw", "cwde", "cdqe"],
    CDQ         OpMode      ["cwd", "cdq", "cqo"],
    MOVSWD      OpMode      ["movsw", "movsd", "movsq"],
    CMPSWD      OpMode      ["cmpsw", "cmpsd", "cmpsq"],
    STOSWD      OpMode      ["stosw", "stosd", "stosq"],
    LODSWD      OpMode      ["lodsw", "lodsd", "lodsq"],
    SCASWD      OpMode      ["scasw", "scasd", "scasq"],
    INSWD       OpMode      ["insw", "insd", "insd"],
    OUTSWD      OpMode      ["outsw", "outsd", "outsd"],
    CMPXCHG8B   OpMode      ["cmpxchg8b", "cmpxchg8b", "cmpxchg16b"],
    JCXZ        AddrMode    ["jcxz", "jecxz", "jrcxz"],
};

fn mode_index(mode: CpuMode) -> usize {
    match mode {
        CpuMode::Bits16 => 0,
        CpuMode::Bits32 => 1,
        CpuMode::Bits64 => 2,
    }
}

fn mnemonic(insn: &Instruction) -> &'static str {
    let op = insn.opcode();
    match SPECIAL.iter().find(|i| i.opcode == op) {
        Some(special) => {
            let mode = match special.key {
                Key::OpMode => insn.op_mode(),
                Key::AddrMode => insn.addr_mode(),
            };
            special.names[mode_index(mode)]
        }
        None => insn.mnemonic(),
    }
}

fn size_keyword(size: usize) -> Option<&'static str> {
    Some(match size {
        1 => "byte",
        2 => "word",
        4 => "dword",
        6 => "fword",
        8 => "qword",
        10 => "tword",
        16 => "oword",
        32 => "yword",
        _ => return None,
    })
}

/// Hex digits of an immediate of `op`.
fn imm_digits(op: &Operand) -> usize {
    if op.has_usage(usage::IMM8) {
        2
    } else if op.has_usage(usage::IMM16) {
        4
    } else if op.has_usage(usage::IMM32) {
        8
    } else {
        16
    }
}

/// Hex digits and mask of a displacement of `op`.
fn disp_width(op: &Operand) -> (usize, u64) {
    if op.has_usage(usage::DISP8) {
        (2, 0xff)
    } else if op.has_usage(usage::DISP16) {
        (4, 0xffff)
    } else if op.has_usage(usage::DISP32 | usage::RIPDISP32) {
        (8, 0xffff_ffff)
    } else {
        (16, u64::MAX)
    }
}

fn addr_mask(mode: CpuMode) -> u64 {
    match mode {
        CpuMode::Bits16 => 0xffff,
        CpuMode::Bits32 => 0xffff_ffff,
        CpuMode::Bits64 => u64::MAX,
    }
}

/// Assembler hex number, the leading zero keeps it from being read as a name.
struct Hex {
    value: u64,
    digits: usize,
}

impl fmt::Display for Hex {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "0{:0width$x}h", self.value, width = self.digits)
    }
}

struct SignedHex {
    value: i64,
    digits: usize,
    plus: bool,
}

impl fmt::Display for SignedHex {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        if self.value < 0 {
            fmt.write_char('-')?;
        } else if self.plus {
            fmt.write_char('+')?;
        }
        let hex = Hex {
            value: self.value.unsigned_abs(),
            digits: self.digits,
        };
        hex.fmt(fmt)
    }
}

fn write_spaces<W: Write + ?Sized>(out: &mut W, mut width: usize) -> fmt::Result {
    const FILL: &str = "                                ";
    while width > 0 {
        let len = cmp::min(width, FILL.len());
        out.write_str(&FILL[..len])?;
        width -= len;
    }
    Ok(())
}

/// Passes writes through and counts them.
struct Counter<W> {
    out: W,
    len: usize,
}

impl<W: Write> Write for Counter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.len += s.len();
        self.out.write_str(s)
    }
}

/// Fills a byte buffer, the overflow is counted but dropped.
struct Truncate<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl Write for Truncate<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        if let Some(free) = self.buf.get_mut(self.len..) {
            let n = cmp::min(free.len(), bytes.len());
            free[..n].copy_from_slice(&bytes[..n]);
        }
        self.len += bytes.len();
        Ok(())
    }
}

/// Formats decoded instructions, see [`format`] for the flags.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Printer {
    flags: Flags,
}

impl Printer {
    pub fn new(flags: u32) -> Self {
        Self {
            flags: Flags::from_raw(flags),
        }
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    fn has(&self, flag: u32) -> bool {
        self.flags.any(flag)
    }

    pub fn display<'a, E: PrinterExt>(
        &'a self,
        ext: &'a E,
        insn: &'a Instruction,
    ) -> impl fmt::Display + 'a {
        FormatterFn(move |fmt| self.print(fmt, ext, insn))
    }

    /// Writes as much of the line as fits into `buf`.
    ///
    /// Returns the length of the whole line, a result greater than `buf.len()` means the
    /// output was truncated.
    pub fn format_into<E: PrinterExt>(&self, ext: &E, insn: &Instruction, buf: &mut [u8]) -> usize {
        let mut out = Truncate { buf, len: 0 };
        if write!(out, "{}", self.display(ext, insn)).is_err() {
            log::debug!("{:#x}: symbol printer failed", insn.address());
        }
        out.len
    }

    pub fn print<E: PrinterExt>(
        &self,
        fmt: &mut fmt::Formatter,
        ext: &E,
        insn: &Instruction,
    ) -> fmt::Result {
        let addr_left = self.has(format::ADDR_LEFT);
        let bytes_left = self.has(format::BYTES_LEFT);
        let addr_right = !addr_left && self.has(format::ADDR_RIGHT);
        let bytes_right = !bytes_left && self.has(format::BYTES_RIGHT);

        if addr_left {
            self.print_address(fmt, ext, insn)?;
            fmt.write_char(' ')?;
        }
        if bytes_left {
            let len = self.print_bytes(fmt, insn)?;
            write_spaces(fmt, self.bytes_width().saturating_sub(len) + 1)?;
        }

        if !addr_right && !bytes_right {
            return self.print_insn(fmt, ext, insn);
        }

        let mut out = Counter {
            out: &mut *fmt,
            len: 0,
        };
        write!(out, "{}", FormatterFn(|fmt| self.print_insn(fmt, ext, insn)))?;
        let len = out.len;
        write_spaces(fmt, cmp::max(TEXT_COLUMN.saturating_sub(len), 1))?;
        ext.print_comment(fmt, "; ")?;
        if addr_right {
            self.print_address(fmt, ext, insn)?;
            if bytes_right {
                fmt.write_char(' ')?;
            }
        }
        if bytes_right {
            self.print_bytes(fmt, insn)?;
        }
        Ok(())
    }

    fn print_address<E: PrinterExt>(
        &self,
        fmt: &mut fmt::Formatter,
        ext: &E,
        insn: &Instruction,
    ) -> fmt::Result {
        let width = if insn.cpu_mode() == CpuMode::Bits64 {
            16
        } else {
            8
        };
        let address = insn.address();
        ext.print_address(fmt, FormatterFn(|fmt| write!(fmt, "{address:0width$x}")))
    }

    fn bytes_width(&self) -> usize {
        let mut width = BYTES_COLUMN * 2;
        if self.has(format::BYTES_SPACED) {
            width += BYTES_COLUMN - 1;
        }
        if self.has(format::BYTES_BRACKETS) {
            width += 2;
        }
        width
    }

    fn print_bytes(&self, fmt: &mut fmt::Formatter, insn: &Instruction) -> Result<usize, fmt::Error> {
        let brackets = self.has(format::BYTES_BRACKETS);
        let spaced = self.has(format::BYTES_SPACED);
        let mut out = Counter { out: fmt, len: 0 };
        if brackets {
            out.write_char('[')?;
        }
        for (i, byte) in insn.bytes().iter().enumerate() {
            if spaced && i != 0 {
                out.write_char(' ')?;
            }
            write!(out, "{byte:02x}")?;
        }
        if brackets {
            out.write_char(']')?;
        }
        Ok(out.len)
    }

    fn print_insn<E: PrinterExt>(
        &self,
        fmt: &mut fmt::Formatter,
        ext: &E,
        insn: &Instruction,
    ) -> fmt::Result {
        let template = insn.descriptor().template();
        let args = template.find(' ').map_or("", |i| &template[i + 1..]);
        let operands = insn.operands();
        let shown = &operands[..cmp::min(args.matches('%').count(), operands.len())];
        let segment_used = shown
            .iter()
            .any(|op| op.is_memory() && !op.has_usage(usage::POINTER_ES_BASED));

        if insn.has_prefix(prefix::LOCK) {
            ext.print_prefix(fmt, "lock")?;
            fmt.write_char(' ')?;
        }
        if insn.has_prefix(prefix::REP) {
            let repe = matches!(
                insn.opcode(),
                opcode::CMPSB | opcode::CMPSWD | opcode::SCASB | opcode::SCASWD
            );
            ext.print_prefix(fmt, if repe { "repe" } else { "rep" })?;
            fmt.write_char(' ')?;
        }
        if insn.has_prefix(prefix::REPNE) {
            ext.print_prefix(fmt, "repne")?;
            fmt.write_char(' ')?;
        }
        if let Some(segment) = insn.segment() {
            if !segment_used {
                ext.print_prefix(fmt, segment_name(segment))?;
                fmt.write_char(' ')?;
            }
        }

        ext.print_mnemonic(fmt, mnemonic(insn))?;
        if shown.is_empty() {
            return Ok(());
        }
        fmt.write_char(' ')?;

        let bytes = args.as_bytes();
        let mut slot = 0;
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'%' => {
                    i += 1;
                    while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
                        i += 1;
                    }
                    if let Some(op) = shown.get(slot) {
                        self.print_operand(fmt, ext, insn, op, shown)?;
                    }
                    slot += 1;
                    continue;
                }
                b',' => fmt.write_str(", ")?,
                c => fmt.write_char(c as char)?,
            }
            i += 1;
        }
        Ok(())
    }

    fn print_operand<E: PrinterExt>(
        &self,
        fmt: &mut fmt::Formatter,
        ext: &E,
        insn: &Instruction,
        op: &Operand,
        shown: &[Operand],
    ) -> fmt::Result {
        if let Some(reg) = op.reg() {
            ext.print_register(fmt, register_name(reg))
        } else if op.is_relative() {
            self.print_branch(fmt, ext, insn, op)
        } else if op.is_immediate() {
            self.print_immediate(fmt, ext, op)
        } else if op.is_memory() {
            self.print_memory(fmt, ext, insn, op, shown)
        } else {
            Ok(())
        }
    }

    fn print_branch<E: PrinterExt>(
        &self,
        fmt: &mut fmt::Formatter,
        ext: &E,
        insn: &Instruction,
        op: &Operand,
    ) -> fmt::Result {
        let offset = op.imm as i64;
        if self.has(format::RELATIVE_BRANCH) {
            let value = offset.wrapping_add(insn.len() as i64);
            let digits = cmp::min(imm_digits(op), 8);
            fmt.write_char('$')?;
            return ext.print_address_offset(
                fmt,
                SignedHex {
                    value,
                    digits,
                    plus: true,
                },
            );
        }

        let (mask, digits) = match (insn.cpu_mode(), insn.op_mode()) {
            (CpuMode::Bits64, _) => (u64::MAX, 16),
            (_, CpuMode::Bits16) => (0xffff, 4),
            _ => (0xffff_ffff, 8),
        };
        let target = insn.next_address().wrapping_add(offset as u64) & mask;
        ext.print_address(
            fmt,
            Hex {
                value: target,
                digits,
            },
        )?;
        ext.print_symbol_annotation(fmt, target)
    }

    fn print_immediate<E: PrinterExt>(
        &self,
        fmt: &mut fmt::Formatter,
        ext: &E,
        op: &Operand,
    ) -> fmt::Result {
        let imm = op.imm;
        if op.has_usage(usage::IMM_FAR16 | usage::IMM_FAR32) {
            let digits = if op.has_usage(usage::IMM_FAR32) { 8 } else { 4 };
            let offset = imm & 0xffff_ffff;
            ext.print_immediate(
                fmt,
                Hex {
                    value: imm >> 32,
                    digits: 4,
                },
            )?;
            fmt.write_char(':')?;
            ext.print_address(
                fmt,
                Hex {
                    value: offset,
                    digits,
                },
            )?;
            return ext.print_symbol_annotation(fmt, offset);
        }

        if op.has_usage(usage::IMM_SX8) {
            if self.has(format::STRICT) {
                fmt.write_str("byte ")?;
            }
            let value = imm as u8 as i8 as i64;
            return ext.print_immediate(
                fmt,
                SignedHex {
                    value,
                    digits: 2,
                    plus: false,
                },
            );
        }

        ext.print_immediate(
            fmt,
            Hex {
                value: imm,
                digits: imm_digits(op),
            },
        )
    }

    /// Memory operands carry a size keyword unless a register of the same width names it.
    fn needs_size(&self, op: &Operand, shown: &[Operand]) -> bool {
        if op.size() == 0 {
            return false;
        }
        self.has(format::STRICT)
            || !shown
                .iter()
                .any(|other| other.is_register() && other.size() == op.size())
    }

    fn print_memory<E: PrinterExt>(
        &self,
        fmt: &mut fmt::Formatter,
        ext: &E,
        insn: &Instruction,
        op: &Operand,
        shown: &[Operand],
    ) -> fmt::Result {
        if self.needs_size(op, shown) {
            if let Some(keyword) = size_keyword(op.size()) {
                fmt.write_str(keyword)?;
                fmt.write_char(' ')?;
            }
        }

        fmt.write_char('[')?;
        if let Some(segment) = insn.segment() {
            if !op.has_usage(usage::POINTER_ES_BASED) {
                ext.print_register(fmt, segment_name(segment))?;
                fmt.write_char(':')?;
            }
        }

        let rip = op.has_usage(usage::RIPDISP32);
        let mut empty = true;
        if rip {
            let name = if insn.addr_mode() == CpuMode::Bits32 {
                "eip"
            } else {
                "rip"
            };
            ext.print_register(fmt, name)?;
            empty = false;
        }
        if let Some(base) = op.base() {
            ext.print_register(fmt, register_name(base))?;
            empty = false;
        }
        if let Some(index) = op.index() {
            if !empty {
                fmt.write_char('+')?;
            }
            ext.print_register(fmt, register_name(index))?;
            match op.scale() {
                Some(scale) if scale > 1 => write!(fmt, "*{scale}")?,
                _ => {}
            }
            empty = false;
        }

        let disp = match op.disp() {
            Some(disp) => disp,
            None => return fmt.write_char(']'),
        };

        let (digits, mask) = disp_width(op);
        if empty {
            let address = disp as u64 & mask;
            ext.print_address(
                fmt,
                Hex {
                    value: address,
                    digits,
                },
            )?;
            fmt.write_char(']')?;
            return ext.print_symbol_annotation(fmt, address);
        }

        let digits = if digits == 16 && i32::try_from(disp).is_ok() {
            8
        } else {
            digits
        };
        ext.print_address_offset(
            fmt,
            SignedHex {
                value: disp,
                digits,
                plus: true,
            },
        )?;
        fmt.write_char(']')?;

        if rip {
            let mask = addr_mask(insn.addr_mode());
            let target = insn.next_address().wrapping_add(disp as u64) & mask;
            ext.print_symbol_annotation(fmt, target)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn hex() {
        assert_eq!(Hex { value: 4, digits: 8 }.to_string(), "000000004h");
        assert_eq!(Hex { value: 0xff, digits: 2 }.to_string(), "0ffh");
        let neg = SignedHex {
            value: -1,
            digits: 2,
            plus: true,
        };
        assert_eq!(neg.to_string(), "-001h");
        let pos = SignedHex {
            value: 8,
            digits: 2,
            plus: true,
        };
        assert_eq!(pos.to_string(), "+008h");
    }

    #[test]
    fn truncate() {
        let mut buf = [0; 4];
        let mut out = Truncate {
            buf: &mut buf,
            len: 0,
        };
        out.write_str("mov ").unwrap();
        out.write_str("eax").unwrap();
        assert_eq!(out.len, 7);
        assert_eq!(&buf, b"mov ");
    }

    struct MarkComments;

    impl PrinterExt for MarkComments {
        fn get_symbol(&self, _: u64) -> Option<(u64, &str)> {
            None
        }

        fn print_styled(
            &self,
            fmt: &mut fmt::Formatter,
            style: crate::Style,
            display: impl fmt::Display,
        ) -> fmt::Result {
            match style {
                crate::Style::Comment => write!(fmt, "{{{display}}}"),
                _ => display.fmt(fmt),
            }
        }
    }

    #[test]
    fn comment_is_styled() {
        let decoder = crate::Decoder::new(&crate::Options::with_mode(CpuMode::Bits32));
        let insn = decoder.decode(0x1000, &[0x55]).unwrap();
        let text = Printer::new(format::BYTES_RIGHT)
            .display(&MarkComments, &insn)
            .to_string();
        assert_eq!(text, alloc::format!("push ebp{}{{; }}55", " ".repeat(24)));
    }

    #[test]
    fn special_names() {
        assert!(SPECIAL.iter().all(|i| !i.names.iter().any(|n| n.is_empty())));
        assert_eq!(mode_index(CpuMode::Bits64), 2);
    }
}

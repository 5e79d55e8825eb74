use core::fmt::{self, Write};

pub struct FormatterFn<F>(pub F)
where
    F: Fn(&mut fmt::Formatter) -> fmt::Result;

impl<F> fmt::Display for FormatterFn<F>
where
    F: Fn(&mut fmt::Formatter) -> fmt::Result,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        self.0(fmt)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Style {
    Prefix,
    Mnemonic,
    Register,
    Immediate,
    Address,
    AddressOffset,
    Symbol,
    Comment,
}

pub trait PrinterExt {
    /// Get symbol with address less then or equal to `address`.
    fn get_symbol(&self, address: u64) -> Option<(u64, &str)>;

    fn print_styled(
        &self,
        fmt: &mut fmt::Formatter,
        #[allow(unused_variables)] style: Style,
        display: impl fmt::Display,
    ) -> fmt::Result {
        display.fmt(fmt)
    }

    fn print_prefix(&self, fmt: &mut fmt::Formatter, display: impl fmt::Display) -> fmt::Result {
        self.print_styled(fmt, Style::Prefix, display)
    }

    fn print_mnemonic(&self, fmt: &mut fmt::Formatter, display: impl fmt::Display) -> fmt::Result {
        self.print_styled(fmt, Style::Mnemonic, display)
    }

    fn print_register(&self, fmt: &mut fmt::Formatter, display: impl fmt::Display) -> fmt::Result {
        self.print_styled(fmt, Style::Register, display)
    }

    fn print_immediate(&self, fmt: &mut fmt::Formatter, display: impl fmt::Display) -> fmt::Result {
        self.print_styled(fmt, Style::Immediate, display)
    }

    fn print_address(&self, fmt: &mut fmt::Formatter, display: impl fmt::Display) -> fmt::Result {
        self.print_styled(fmt, Style::Address, display)
    }

    fn print_address_offset(
        &self,
        fmt: &mut fmt::Formatter,
        display: impl fmt::Display,
    ) -> fmt::Result {
        self.print_styled(fmt, Style::AddressOffset, display)
    }

    fn print_symbol(&self, fmt: &mut fmt::Formatter, display: impl fmt::Display) -> fmt::Result {
        self.print_styled(fmt, Style::Symbol, display)
    }

    fn print_comment(&self, fmt: &mut fmt::Formatter, display: impl fmt::Display) -> fmt::Result {
        self.print_styled(fmt, Style::Comment, display)
    }

    /// Prints ` <symbol+offset>` if a symbol covers `address`.
    fn print_symbol_annotation(&self, fmt: &mut fmt::Formatter, address: u64) -> fmt::Result {
        if let Some((sym_addr, sym_name)) = self.get_symbol(address) {
            fmt.write_str(" <")?;
            self.print_symbol(fmt, sym_name)?;
            let diff = address.wrapping_sub(sym_addr);
            if diff != 0 {
                fmt.write_char('+')?;
                self.print_address_offset(fmt, FormatterFn(|fmt| write!(fmt, "{diff:#x}")))?;
            }
            fmt.write_char('>')?;
        }
        Ok(())
    }
}

impl PrinterExt for () {
    fn get_symbol(&self, _: u64) -> Option<(u64, &str)> {
        None
    }
}

impl<E: PrinterExt + ?Sized> PrinterExt for &E {
    fn get_symbol(&self, address: u64) -> Option<(u64, &str)> {
        (**self).get_symbol(address)
    }

    fn print_styled(
        &self,
        fmt: &mut fmt::Formatter,
        style: Style,
        display: impl fmt::Display,
    ) -> fmt::Result {
        (**self).print_styled(fmt, style, display)
    }

    fn print_symbol(&self, fmt: &mut fmt::Formatter, display: impl fmt::Display) -> fmt::Result {
        (**self).print_symbol(fmt, display)
    }
}

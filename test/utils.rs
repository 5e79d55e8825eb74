use std::fmt::{self, Write as _};

struct Hex<'a>(&'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut sep = "";
        for b in self.0 {
            write!(fmt, "{sep}{b:02x}")?;
            sep = " ";
        }
        Ok(())
    }
}

/// Makes spaces at the end of a line and tabs visible.
struct Visible<'a>(&'a str);

impl fmt::Display for Visible<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let body = self.0.trim_end();
        let mut column = 0;
        for (i, c) in self.0.char_indices() {
            column += 1;
            match c {
                '\t' => {
                    fmt.write_char('→')?;
                    while column % 8 != 0 {
                        column += 1;
                        fmt.write_char(' ')?;
                    }
                }
                ' ' if i >= body.len() => fmt.write_char('•')?,
                _ => fmt.write_char(c)?,
            }
        }
        Ok(())
    }
}

/// Line diff between the expected and produced text of one test.
pub struct Diff<'a> {
    file: &'a str,
    line: usize,
    bytes: &'a [u8],
    expect: &'a str,
    result: &'a str,
}

impl<'a> Diff<'a> {
    pub fn new(
        file: &'a str,
        line: usize,
        bytes: &'a [u8],
        expect: &'a str,
        result: &'a str,
    ) -> Self {
        Self {
            file,
            line,
            bytes,
            expect,
            result,
        }
    }
}

impl fmt::Display for Diff<'_> {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        const W: usize = 5;

        if !self.file.is_empty() {
            writeln!(out, "{:W$}--> {}:{}", "", self.file, self.line)?;
        }
        for (i, chunk) in self.bytes.chunks(8).enumerate() {
            let head = if i == 0 { "raw |" } else { "|" };
            writeln!(out, "{head:>7} {}", Hex(chunk))?;
        }

        let line = self.line.max(1);
        for diff in diff::lines(self.expect, self.result) {
            match diff {
                diff::Result::Left(l) => writeln!(out, "{line:W$} - {}↴", Visible(l))?,
                diff::Result::Both(l, _) => writeln!(out, "{line:W$} | {}↴", Visible(l))?,
                diff::Result::Right(r) => writeln!(out, "{line:W$} + {}↴", Visible(r))?,
            }
        }
        Ok(())
    }
}

/// Compares two texts and prints a diff on mismatch.
pub fn check(file: &str, line: usize, expect: &str, result: &str) -> Result<(), String> {
    if expect == result {
        return Ok(());
    }
    eprintln!("error: invalid result");
    eprintln!("{}", Diff::new(file, line, &[], expect, result));
    Err(format!("invalid result, {file}:{line}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_whitespace() {
        assert_eq!(Visible("a b  ").to_string(), "a b••");
        assert_eq!(Visible("\tx").to_string(), "→       x");
        assert_eq!(Hex(&[0x0f, 0xa2]).to_string(), "0f a2");
    }
}

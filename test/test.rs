use std::{fmt, str::Lines};

use xdis_core::symbols::{Symbols, SymbolsInfo};

use super::utils::Diff;

#[derive(Clone, Debug, PartialEq, Eq)]
struct ParserError {
    file: String,
    line: usize,
    msg: String,
}

impl ParserError {
    fn new(file: &str, line: usize, msg: String) -> Self {
        Self {
            file: file.to_owned(),
            line,
            msg,
        }
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "error: {}, {}:{}", self.msg, self.file, self.line)
    }
}

/// One fixture line: `address: bytes  text # flags`.
#[derive(Clone, Debug, Default)]
pub struct Test<'a> {
    pub line: usize,
    pub comment: &'a str,
    pub address: u64,
    pub bytes: Vec<u8>,
    pub asm: &'a str,
}

pub struct Parser<'a> {
    file: String,
    lines: Lines<'a>,
    line: usize,
    address: u64,
    symbols: Symbols,
}

impl<'a> Parser<'a> {
    pub fn new(file: &str, input: &'a str) -> Self {
        Self {
            file: file.to_owned(),
            lines: input.lines(),
            line: 0,
            address: 0,
            symbols: Symbols::default(),
        }
    }

    fn error<T>(&self, msg: String) -> Result<T, String> {
        Err(ParserError::new(&self.file, self.line, msg).to_string())
    }

    pub fn symbols(&mut self) -> SymbolsInfo<'_> {
        self.symbols.as_info()
    }

    pub fn into_symbols(self) -> Symbols {
        self.symbols
    }

    /// Reads the next test, returns `false` at the end of input.
    ///
    /// A line without an address continues after the previous test. Lines of the form
    /// `address <name>:` define symbols.
    pub fn parse(&mut self, output: &mut Test<'a>) -> Result<bool, String> {
        output.bytes.clear();
        output.asm = "";

        while let Some(line) = self.lines.next() {
            self.line += 1;

            let (line, comment) = line.split_once('#').unwrap_or((line, ""));
            let mut cur = line.trim();
            if cur.is_empty() {
                continue;
            }

            output.line = self.line;
            output.comment = comment.trim();
            output.address = self.address;

            if let Some((head, tail)) = cur.split_once(':') {
                if let Some((addr, name)) = head.split_once('<') {
                    let addr = addr.trim();
                    let address = match u64::from_str_radix(addr, 16) {
                        Ok(i) => i,
                        Err(_) => return self.error(format!("invalid symbol address \"{addr}\"")),
                    };
                    let name = match name.trim().strip_suffix('>') {
                        Some(name) => name,
                        None => return self.error(format!("invalid symbol \"{name}\"")),
                    };
                    self.symbols.push(address, name);
                    self.address = address;
                    continue;
                }
                let head = head.trim();
                if !head.is_empty() && head.len() <= 16 && !head.contains(' ') {
                    match u64::from_str_radix(head, 16) {
                        Ok(i) => output.address = i,
                        Err(_) => return self.error(format!("invalid address \"{head}\"")),
                    }
                    cur = tail.trim_start();
                }
            }

            // two or more spaces end the byte list
            loop {
                let (word, rest) = match cur.find(char::is_whitespace) {
                    Some(pos) => cur.split_at(pos),
                    None => (cur, ""),
                };
                if word.is_empty()
                    || word.len() % 2 != 0
                    || !word.chars().all(|c| c.is_ascii_hexdigit())
                {
                    break;
                }
                // multi-byte groups are little-endian words
                for i in (0..word.len()).step_by(2).rev() {
                    let byte = &word[i..i + 2];
                    match u8::from_str_radix(byte, 16) {
                        Ok(b) => output.bytes.push(b),
                        Err(_) => return self.error(format!("invalid byte \"{byte}\"")),
                    }
                }
                let spaces = rest.chars().take_while(|c| c.is_whitespace()).count();
                cur = rest.trim_start();
                if spaces > 1 {
                    break;
                }
            }

            if output.bytes.is_empty() {
                return self.error("no instruction bytes".to_owned());
            }
            output.asm = cur;
            self.address = output.address + output.bytes.len() as u64;
            return Ok(true);
        }

        Ok(false)
    }

    /// Concatenates the bytes of every test, gaps between addresses are zero-filled.
    pub fn parse_all(src: &str) -> Result<(u64, Vec<u8>), String> {
        let mut parser = Parser::new("input", src);
        let mut test = Test::default();
        let mut start = None;
        let mut data = vec![];
        while parser.parse(&mut test)? {
            let start = *start.get_or_insert(test.address);
            let offset = test.address.saturating_sub(start) as usize;
            if data.len() < offset {
                data.resize(offset, 0);
            }
            data.extend_from_slice(&test.bytes);
        }
        Ok((start.unwrap_or(0), data))
    }
}

pub fn parse_flags(s: &str) -> impl Iterator<Item = (&str, bool)> {
    s.split_whitespace().filter_map(|i| {
        let state = match i.chars().next() {
            Some('+') => true,
            Some('-') => false,
            _ => return None,
        };
        let name = &i[1..];
        Some((name, state))
    })
}

/// Collapses whitespace runs.
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, word) in s.split_whitespace().enumerate() {
        if i != 0 {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

pub trait Runner {
    /// Decodes the bytes of `test`, returns the consumed length and the text.
    fn decode(&mut self, test: &Test, symbols: &SymbolsInfo) -> (usize, String);

    fn run(&mut self, file: &str, tests: &str) -> Result<(), String> {
        let mut test = Test::default();
        let mut parser = Parser::new(file, tests);
        let mut failed = 0;
        while parser.parse(&mut test)? {
            let symbols = parser.symbols();
            let (len, result) = self.decode(&test, &symbols);
            let result = normalize(&result);
            let expect = normalize(test.asm);
            let expect_len = test.bytes.len();

            if len != expect_len || result != expect {
                failed += 1;
                if len != expect_len {
                    eprintln!("error: invalid length, {}:{}", file, test.line);
                    eprintln!("  expect: {expect_len}");
                    eprintln!("  result: {len}");
                }
                if result != expect {
                    eprintln!("error: invalid output, {}:{}", file, test.line);
                }
                eprintln!("{}", Diff::new(file, test.line, &test.bytes, &expect, &result));
            }
        }
        if failed == 0 {
            Ok(())
        } else {
            Err(format!("failed {failed} tests"))
        }
    }
}

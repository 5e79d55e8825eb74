use core::fmt;

/// Status latched while decoding an instruction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Dispatch ended in an invalid opcode.
    InvalidOpcode,
    /// The instruction does not fit in 15 bytes.
    TooLong,
    /// The byte reader failed.
    Read,
    /// Operand encoding is not valid for the instruction.
    InvalidOperand,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidOpcode => fmt.write_str("Invalid opcode"),
            Self::TooLong => fmt.write_str("Instruction too long"),
            Self::Read => fmt.write_str("Failed to read instruction bytes"),
            Self::InvalidOperand => fmt.write_str("Invalid operand encoding"),
        }
    }
}

/// Failed decode with the number of bytes the instruction still occupies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    len: usize,
}

impl Error {
    pub fn new(kind: ErrorKind, len: usize) -> Self {
        Self { kind, len }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Length of the instruction in bytes, never greater than 15.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{} (length {})", self.kind, self.len)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Failure reported by a byte reader.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReadError {
    /// Address of the first byte requested.
    pub address: u64,
    /// Number of leading bytes that were still written.
    pub read: usize,
}

impl fmt::Display for ReadError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "failed to read memory at {:#x} ({} bytes available)",
            self.address, self.read
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadError {}

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Flags {
    raw: u32,
}

impl Flags {
    pub const fn empty() -> Self {
        Self { raw: 0 }
    }

    pub const fn from_raw(raw: u32) -> Self {
        Self { raw }
    }

    pub const fn raw(&self) -> u32 {
        self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw == 0
    }

    pub fn clear(&mut self, flags: u32) -> &mut Self {
        self.raw &= !flags;
        self
    }

    pub fn set(&mut self, flags: u32) -> &mut Self {
        self.raw |= flags;
        self
    }

    pub fn set_if(&mut self, flags: u32, cond: bool) -> &mut Self {
        if cond {
            self.raw |= flags;
        } else {
            self.raw &= !flags;
        }
        self
    }

    pub fn any(&self, flags: u32) -> bool {
        self.raw & flags != 0
    }

    pub fn all(&self, flags: u32) -> bool {
        self.raw & flags == flags
    }
}

impl From<u32> for Flags {
    fn from(raw: u32) -> Self {
        Self::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_clear() {
        let mut flags = Flags::empty();
        flags.set(0b0101);
        assert!(flags.any(0b0001));
        assert!(flags.all(0b0101));
        assert!(!flags.all(0b0111));
        flags.clear(0b0001);
        assert_eq!(flags.raw(), 0b0100);
        flags.set_if(0b1000, true).set_if(0b0100, false);
        assert_eq!(flags, Flags::from_raw(0b1000));
    }
}

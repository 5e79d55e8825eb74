use alloc::{string::String, vec::Vec};

use crate::printer::PrinterExt;

#[derive(Clone, Default)]
pub struct Symbols {
    sorted: bool,
    list: Vec<(u64, String)>,
}

impl Symbols {
    pub fn push<S: Into<String>>(&mut self, address: u64, name: S) {
        self.sorted = false;
        self.list.push((address, name.into()));
    }

    pub fn as_slice(&self) -> &[(u64, String)] {
        &self.list
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn as_info(&mut self) -> SymbolsInfo {
        if !self.sorted {
            self.list.sort_by_key(|(addr, _)| *addr);
            self.sorted = true;
        }
        SymbolsInfo { list: &self.list }
    }
}

pub struct SymbolsInfo<'a> {
    list: &'a [(u64, String)],
}

impl SymbolsInfo<'_> {
    /// Get symbol starting exactly at `address`.
    pub fn get_exact(&self, address: u64) -> Option<&str> {
        self.list
            .binary_search_by_key(&address, |(addr, _)| *addr)
            .ok()
            .map(|index| self.list[index].1.as_str())
    }
}

impl PrinterExt for SymbolsInfo<'_> {
    fn get_symbol(&self, address: u64) -> Option<(u64, &str)> {
        let index = match self.list.binary_search_by_key(&address, |(addr, _)| *addr) {
            Ok(index) => index,
            Err(index) => index.checked_sub(1)?,
        };
        self.list
            .get(index)
            .map(|(addr, name)| (*addr, name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        let mut symbols = Symbols::default();
        symbols.push(0x2000, "second");
        symbols.push(0x1000, "first");
        let info = symbols.as_info();
        assert_eq!(info.get_symbol(0x0fff), None);
        assert_eq!(info.get_symbol(0x1000), Some((0x1000, "first")));
        assert_eq!(info.get_symbol(0x1fff), Some((0x1000, "first")));
        assert_eq!(info.get_symbol(0x2010), Some((0x2000, "second")));
        assert_eq!(info.get_exact(0x2000), Some("second"));
        assert_eq!(info.get_exact(0x2001), None);
    }
}

//! Opcode maps.

mod amd3dnow;
mod fpu;
mod groups;
mod one_byte;
mod three_byte;
mod two_byte;
mod vex;

use crate::opcode::{Descriptor, INVALID};

pub(crate) use self::{
    amd3dnow::AMD_3DNOW,
    fpu::{FPU_HIGH, FPU_LOW},
    groups::*,
    one_byte::{ONE_BYTE_X64, ONE_BYTE_X86},
    three_byte::*,
    two_byte::*,
    vex::VEX_MAPS,
};

/// Target of lookups in maps without an entry.
pub(crate) static INVALID_DESC: Descriptor = INVALID;

/// Opcode map with only a few defined entries, sorted by the opcode byte.
pub(crate) struct SparseMap {
    entries: &'static [(u8, Descriptor)],
}

impl SparseMap {
    pub(crate) const fn new(entries: &'static [(u8, Descriptor)]) -> Self {
        Self { entries }
    }

    pub(crate) fn get(&self, byte: u8) -> Option<&'static Descriptor> {
        let entries: &'static [(u8, Descriptor)] = self.entries;
        entries
            .binary_search_by_key(&byte, |(b, _)| *b)
            .ok()
            .map(|i| &entries[i].1)
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> &'static [(u8, Descriptor)] {
        self.entries
    }
}

/// Every sparse map with a name, used by table sanity tests.
#[cfg(test)]
pub(crate) fn sparse_maps() -> impl Iterator<Item = (&'static str, &'static SparseMap)> {
    let vex = VEX_MAPS
        .iter()
        .flatten()
        .filter_map(|map| *map)
        .map(|map| ("vex", map));
    legacy_sparse_maps()
        .into_iter()
        .map(|(name, _, map)| (name, map))
        .chain([("3dnow", &AMD_3DNOW)])
        .chain(vex)
}

/// Sparse maps reached through legacy prefixes and escapes, with the bytes that select them.
#[cfg(test)]
fn legacy_sparse_maps() -> [(&'static str, &'static [u8], &'static SparseMap); 10] {
    [
        ("66 0f", &[0x66, 0x0f], &TWO_BYTE_66),
        ("f2 0f", &[0xf2, 0x0f], &TWO_BYTE_F2),
        ("f3 0f", &[0xf3, 0x0f], &TWO_BYTE_F3),
        ("0f 38", &[0x0f, 0x38], &THREE_BYTE_38),
        ("66 0f 38", &[0x66, 0x0f, 0x38], &THREE_BYTE_66_38),
        ("f2 0f 38", &[0xf2, 0x0f, 0x38], &THREE_BYTE_F2_38),
        ("66 f2 0f 38", &[0x66, 0xf2, 0x0f, 0x38], &THREE_BYTE_66F2_38),
        ("f3 0f 38", &[0xf3, 0x0f, 0x38], &THREE_BYTE_F3_38),
        ("0f 3a", &[0x0f, 0x3a], &THREE_BYTE_3A),
        ("66 0f 3a", &[0x66, 0x0f, 0x3a], &THREE_BYTE_66_3A),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_maps_sorted() {
        for (name, map) in sparse_maps() {
            for pair in map.entries().windows(2) {
                assert!(pair[0].0 < pair[1].0, "{name}: {:#04x} is out of order", pair[1].0);
            }
        }
    }

    #[test]
    fn sparse_lookup() {
        let desc = TWO_BYTE_F3.get(0xb8).unwrap();
        assert_eq!(desc.mnemonic(), "popcnt");
        assert!(TWO_BYTE_F3.get(0xb9).is_none());
    }

    #[test]
    fn template_escapes_have_operands() {
        let flat = ONE_BYTE_X86
            .iter()
            .chain(&ONE_BYTE_X64)
            .chain(&TWO_BYTE)
            .chain(&GROUP1)
            .chain(&GROUP2)
            .chain(&GROUP3)
            .chain(&GROUP5)
            .chain(GROUP7_MOD11.iter().flatten())
            .chain(FPU_LOW.iter().flatten())
            .chain(FPU_HIGH.iter().flatten());
        let sparse = sparse_maps().flat_map(|(_, map)| map.entries().iter().map(|(_, d)| d));
        for desc in flat.chain(sparse) {
            let escapes = desc.template().matches('%').count();
            assert!(
                escapes <= desc.operand_count(),
                "\"{}\" has {escapes} escapes",
                desc.template()
            );
        }
    }

    /// ModRM byte followed by the SIB and displacement forms worth trying with it.
    fn modrm_tails() -> Vec<[u8; 2]> {
        let mut tails = Vec::new();
        for modrm in 0..=0xffu8 {
            tails.push([modrm, 0x25]);
            if modrm >> 6 != 3 && modrm & 7 == 4 {
                tails.push([modrm, 0x24]);
                tails.push([modrm, 0x8d]);
            }
        }
        tails
    }

    /// Opcode bytes selecting every entry of the dense, legacy sparse and VEX maps.
    fn heads() -> Vec<Vec<u8>> {
        let mut heads = Vec::new();
        let leading: [&[u8]; 5] = [&[], &[0x66], &[0x67], &[0x48], &[0xf0]];
        for prefix in leading {
            for byte in 0..=0xffu8 {
                heads.push([prefix, &[byte][..]].concat());
                heads.push([prefix, &[0x0f, byte][..]].concat());
            }
        }
        for (_, escape, map) in legacy_sparse_maps() {
            for &(byte, _) in map.entries() {
                heads.push([escape, &[byte][..]].concat());
            }
        }
        for (pp, maps) in VEX_MAPS.iter().enumerate() {
            for (index, map) in maps.iter().enumerate() {
                let Some(map) = map else { continue };
                for &(byte, _) in map.entries() {
                    // vvvv unused, W and L both ways
                    for wl in [0x00, 0x04, 0x80, 0x84] {
                        heads.push(vec![0xc4, 0xe0 | index as u8, 0x78 | wl | pp as u8, byte]);
                    }
                    if index == 1 {
                        heads.push(vec![0xc5, 0xf8 | pp as u8, byte]);
                    }
                }
            }
        }
        heads
    }

    /// Calls `f` with every encoding padded to 16 bytes.
    fn for_each_encoding(mut f: impl FnMut(&[u8])) {
        let tails = modrm_tails();
        let mut bytes = Vec::with_capacity(16);
        for head in heads() {
            for tail in &tails {
                bytes.clear();
                bytes.extend_from_slice(&head);
                bytes.extend_from_slice(tail);
                bytes.resize(16, 0x11);
                f(&bytes);
            }
        }
        // 3DNow! selects the entry with the byte after the addressing bytes
        let addressing: [&[u8]; 6] = [
            &[0x00],
            &[0x04, 0x24],
            &[0x05, 0x00, 0x10, 0x00, 0x00],
            &[0x45, 0x08],
            &[0x84, 0x24, 0x00, 0x10, 0x00, 0x00],
            &[0xc1],
        ];
        for &(byte, _) in AMD_3DNOW.entries() {
            for modrm in addressing {
                bytes.clear();
                bytes.extend_from_slice(&[0x0f, 0x0f]);
                bytes.extend_from_slice(modrm);
                bytes.push(byte);
                bytes.resize(16, 0x11);
                f(&bytes);
            }
        }
    }

    #[test]
    fn length_parity_over_maps() {
        use crate::{CpuMode, Decoder, Error, Options};

        let len = |res: Result<usize, Error>| res.unwrap_or_else(|err| err.len());
        for mode in [CpuMode::Bits16, CpuMode::Bits32, CpuMode::Bits64] {
            let decoder = Decoder::new(&Options::with_mode(mode));
            for_each_encoding(|bytes| {
                let full = decoder.decode(0, bytes).map(|insn| insn.len());
                let size = decoder.length_of(0, bytes);
                assert_eq!(len(full), len(size), "{mode:?} {bytes:02x?}");
            });
        }
    }

    #[test]
    fn ud2_is_illegal() {
        assert_eq!(TWO_BYTE[0x0b].mnemonic(), "ud2");
    }
}

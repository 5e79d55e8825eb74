use core::mem;

pub trait ZExtract<U>: Sized {
    fn zextract(&self, pos: u32, len: u32) -> U;
}

pub trait SExtract<S>: Sized {
    fn sextract(&self, pos: u32, len: u32) -> S;
}

macro_rules! impl_extract {
    ($($uint:ty = $sint:ty),+ $(,)?) => (
        $(
            impl ZExtract<$uint> for $uint {
                fn zextract(&self, pos: u32, len: u32) -> $uint {
                    let w = mem::size_of::<$uint>() as u32 * 8;
                    (*self as $uint << (w - pos - len)) >> (w - len)
                }
            }

            impl SExtract<$sint> for $uint {
                fn sextract(&self, pos: u32, len: u32) -> $sint {
                    let w = mem::size_of::<$uint>() as u32 * 8;
                    (*self as $uint << (w - pos - len)) as $sint >> (w - len)
                }
            }
        )+
    );
}

impl_extract! {
    u8 = i8,
    u16 = i16,
    u32 = i32,
    u64 = i64,
}

pub fn zextract<U, T: ZExtract<U>>(value: T, pos: u32, len: u32) -> U {
    value.zextract(pos, len)
}

pub fn sextract<S, T: SExtract<S>>(value: T, pos: u32, len: u32) -> S {
    value.sextract(pos, len)
}

/// Sign-extends the low `bits` of `value` to 64 bits.
pub fn sign_extend(value: u64, bits: u32) -> u64 {
    sextract::<i64, u64>(value, 0, bits) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract() {
        assert_eq!(zextract::<u8, u8>(0b1101_0110, 6, 2), 0b11);
        assert_eq!(zextract::<u8, u8>(0b1101_0110, 3, 3), 0b010);
        assert_eq!(zextract::<u8, u8>(0b1101_0110, 0, 3), 0b110);
        assert_eq!(sextract::<i8, u8>(0b1111_0000, 4, 4), -1);
        assert_eq!(sextract::<i32, u32>(0x8000, 0, 16), -0x8000);
    }

    #[test]
    fn sign_extension() {
        assert_eq!(sign_extend(0xff, 8), u64::MAX);
        assert_eq!(sign_extend(0x7f, 8), 0x7f);
        assert_eq!(sign_extend(0xffff_fffe, 32), (-2i64) as u64);
    }
}

use core::cmp;

use crate::error::{ErrorKind, ReadError};

/// Architectural limit of the x86 instruction length.
pub const MAX_INSN_LEN: usize = 15;

/// Source of instruction bytes.
pub trait ReadBytes {
    /// Reads bytes starting at `address` into `buf`.
    ///
    /// On success at least `min_len` and at most `buf.len()` bytes must be written and the
    /// number of written bytes returned.
    fn read_bytes(&mut self, address: u64, buf: &mut [u8], min_len: usize)
        -> Result<usize, ReadError>;
}

impl<F> ReadBytes for F
where
    F: FnMut(u64, &mut [u8], usize) -> Result<usize, ReadError>,
{
    fn read_bytes(
        &mut self,
        address: u64,
        buf: &mut [u8],
        min_len: usize,
    ) -> Result<usize, ReadError> {
        self(address, buf, min_len)
    }
}

/// Reader over a byte slice mapped at `address`.
#[derive(Copy, Clone, Debug)]
pub struct SliceReader<'a> {
    address: u64,
    data: &'a [u8],
}

impl<'a> SliceReader<'a> {
    pub fn new(address: u64, data: &'a [u8]) -> Self {
        Self { address, data }
    }
}

impl ReadBytes for SliceReader<'_> {
    fn read_bytes(
        &mut self,
        address: u64,
        buf: &mut [u8],
        min_len: usize,
    ) -> Result<usize, ReadError> {
        let avail = address
            .checked_sub(self.address)
            .and_then(|offset| usize::try_from(offset).ok())
            .and_then(|offset| self.data.get(offset..))
            .unwrap_or_default();
        let len = cmp::min(avail.len(), buf.len());
        buf[..len].copy_from_slice(&avail[..len]);
        if len < min_len {
            Err(ReadError { address, read: len })
        } else {
            Ok(len)
        }
    }
}

/// Lazily filled copy of the bytes of one instruction.
///
/// The cache never has gaps: a failed read zero-fills the rest of the buffer and latches
/// [`ErrorKind::Read`]. The first latched status is kept.
#[derive(Clone, Debug)]
pub struct ByteCache {
    address: u64,
    buf: [u8; MAX_INSN_LEN],
    cached: usize,
    status: Option<ErrorKind>,
}

impl ByteCache {
    pub fn new(address: u64) -> Self {
        Self {
            address,
            buf: [0; MAX_INSN_LEN],
            cached: 0,
            status: None,
        }
    }

    pub fn address(&self) -> u64 {
        self.address
    }

    /// Number of valid bytes in the cache.
    pub fn cached(&self) -> usize {
        self.cached
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.cached]
    }

    pub fn status(&self) -> Option<ErrorKind> {
        self.status
    }

    pub fn latch(&mut self, kind: ErrorKind) {
        if self.status.is_none() {
            self.status = Some(kind);
        }
    }

    /// Seeds the cache with already fetched bytes.
    pub fn prefetch(&mut self, bytes: &[u8]) -> usize {
        let len = cmp::min(bytes.len(), MAX_INSN_LEN);
        self.buf[..len].copy_from_slice(&bytes[..len]);
        self.cached = len;
        len
    }

    /// Guarantees that `min_len` bytes starting at `offset` are cached.
    ///
    /// Returns `false` if a read failed, the missing bytes are zeroes in this case.
    pub fn ensure<R>(&mut self, reader: &mut R, offset: usize, min_len: usize) -> bool
    where
        R: ReadBytes + ?Sized,
    {
        let end = cmp::min(offset + min_len, MAX_INSN_LEN);
        if end <= self.cached {
            return true;
        }

        let start = self.cached;
        let need = end - start;
        let address = self.address.wrapping_add(start as u64);
        log::trace!("read {address:#x}, min {need}, max {}", MAX_INSN_LEN - start);
        match reader.read_bytes(address, &mut self.buf[start..], need) {
            Ok(len) if len >= need => {
                self.cached = start + len;
                true
            }
            Ok(len) => self.read_failed(ReadError { address, read: len }),
            Err(err) => self.read_failed(err),
        }
    }

    fn read_failed(&mut self, err: ReadError) -> bool {
        log::debug!("{err}");
        let valid = cmp::min(self.cached + err.read, MAX_INSN_LEN);
        self.buf[valid..].fill(0);
        self.cached = MAX_INSN_LEN;
        self.latch(ErrorKind::Read);
        false
    }

    #[inline]
    fn read_array<R, const N: usize>(&mut self, reader: &mut R, offset: usize) -> [u8; N]
    where
        R: ReadBytes + ?Sized,
    {
        let mut out = [0; N];
        if offset + N <= self.cached {
            out.copy_from_slice(&self.buf[offset..offset + N]);
            return out;
        }

        if offset + N > MAX_INSN_LEN {
            log::debug!("{:#x}: instruction longer than {MAX_INSN_LEN} bytes", self.address);
            self.latch(ErrorKind::TooLong);
        }
        let end = cmp::min(offset + N, MAX_INSN_LEN);
        if offset < end {
            self.ensure(reader, offset, end - offset);
            out[..end - offset].copy_from_slice(&self.buf[offset..end]);
        }
        out
    }

    pub fn read_u8<R: ReadBytes + ?Sized>(&mut self, reader: &mut R, offset: usize) -> u8 {
        u8::from_le_bytes(self.read_array(reader, offset))
    }

    pub fn read_u16<R: ReadBytes + ?Sized>(&mut self, reader: &mut R, offset: usize) -> u16 {
        u16::from_le_bytes(self.read_array(reader, offset))
    }

    pub fn read_u32<R: ReadBytes + ?Sized>(&mut self, reader: &mut R, offset: usize) -> u32 {
        u32::from_le_bytes(self.read_array(reader, offset))
    }

    pub fn read_u64<R: ReadBytes + ?Sized>(&mut self, reader: &mut R, offset: usize) -> u64 {
        u64::from_le_bytes(self.read_array(reader, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter<'a> {
        inner: SliceReader<'a>,
        calls: usize,
    }

    impl ReadBytes for Counter<'_> {
        fn read_bytes(
            &mut self,
            address: u64,
            buf: &mut [u8],
            min_len: usize,
        ) -> Result<usize, ReadError> {
            self.calls += 1;
            self.inner.read_bytes(address, buf, min_len)
        }
    }

    #[test]
    fn slice_reader() {
        let data = [1, 2, 3, 4];
        let mut reader = SliceReader::new(0x1000, &data);
        let mut buf = [0; 8];
        assert_eq!(reader.read_bytes(0x1001, &mut buf, 1), Ok(3));
        assert_eq!(&buf[..3], &[2, 3, 4]);
        assert_eq!(
            reader.read_bytes(0x1002, &mut buf, 4),
            Err(ReadError {
                address: 0x1002,
                read: 2
            })
        );
        assert!(reader.read_bytes(0x0fff, &mut buf, 1).is_err());
    }

    #[test]
    fn hot_path() {
        let data = [0x11, 0x22, 0x33, 0x44, 0x55];
        let mut reader = Counter {
            inner: SliceReader::new(0, &data),
            calls: 0,
        };
        let mut cache = ByteCache::new(0);
        assert!(cache.ensure(&mut reader, 0, 1));
        assert_eq!(reader.calls, 1);
        assert_eq!(cache.cached(), 5);
        assert_eq!(cache.read_u8(&mut reader, 0), 0x11);
        assert_eq!(cache.read_u16(&mut reader, 1), 0x3322);
        assert_eq!(cache.read_u32(&mut reader, 1), 0x5544_3322);
        assert_eq!(reader.calls, 1);
        assert_eq!(cache.status(), None);
    }

    #[test]
    fn zero_fill_on_failure() {
        let data = [0xb8, 0x04];
        let mut reader = SliceReader::new(0x100, &data);
        let mut cache = ByteCache::new(0x100);
        assert_eq!(cache.read_u8(&mut reader, 0), 0xb8);
        assert_eq!(cache.read_u32(&mut reader, 1), 0x04);
        assert_eq!(cache.status(), Some(ErrorKind::Read));
        assert_eq!(cache.cached(), MAX_INSN_LEN);
        assert_eq!(&cache.as_slice()[..4], &[0xb8, 0x04, 0, 0]);
    }

    #[test]
    fn too_long() {
        let data = [0x90; 32];
        let mut reader = SliceReader::new(0, &data);
        let mut cache = ByteCache::new(0);
        assert_eq!(cache.read_u8(&mut reader, 14), 0x90);
        assert_eq!(cache.status(), None);
        assert_eq!(cache.read_u16(&mut reader, 14), 0x0090);
        assert_eq!(cache.status(), Some(ErrorKind::TooLong));
        assert_eq!(cache.read_u8(&mut reader, 20), 0);
    }

    #[test]
    fn first_error_wins() {
        let mut cache = ByteCache::new(0);
        cache.latch(ErrorKind::Read);
        cache.latch(ErrorKind::TooLong);
        assert_eq!(cache.status(), Some(ErrorKind::Read));
    }

    #[test]
    fn prefetched() {
        let mut reader = |_: u64, _: &mut [u8], _: usize| -> Result<usize, ReadError> {
            panic!("reader must not be called")
        };
        let mut cache = ByteCache::new(0);
        assert_eq!(cache.prefetch(&[0x0f, 0x1f, 0x00]), 3);
        assert_eq!(cache.read_u16(&mut reader, 1), 0x001f);
    }
}

//! Byte slice cursor for reading a log chunk region.

/// Read position over a borrowed byte slice.
///
/// `strata_codec::Decoder` can only read fixed amounts and has no way to ask
/// how much input is left.  A log chunk region has no count, so the only way
/// to find its end is to check for exhaustion before every length field,
/// which this cursor can do.
#[derive(Clone, Debug)]
pub struct ChunkCursor<'b> {
    buf: &'b [u8],
    pos: usize,
}

impl<'b> ChunkCursor<'b> {
    pub fn new(buf: &'b [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> &'b [u8] {
        &self.buf[self.pos..]
    }

    pub fn remaining_len(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining_len() == 0
    }

    /// Takes the next `n` bytes.
    ///
    /// Returns `None` and leaves the position alone if fewer than `n` remain.
    pub fn take(&mut self, n: usize) -> Option<&'b [u8]> {
        if n > self.remaining_len() {
            return None;
        }

        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Some(out)
    }

    /// Takes the next `N` bytes as an array.
    pub fn take_arr<const N: usize>(&mut self) -> Option<[u8; N]> {
        let mut arr = [0u8; N];
        arr.copy_from_slice(self.take(N)?);
        Some(arr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_advances() {
        let buf = [1u8, 2, 3, 4, 5];
        let mut cur = ChunkCursor::new(&buf);

        assert_eq!(cur.take(2), Some(&[1u8, 2][..]));
        assert_eq!(cur.position(), 2);
        assert_eq!(cur.take_arr::<3>(), Some([3, 4, 5]));
        assert!(cur.is_exhausted());
        assert_eq!(cur.take(0), Some(&[][..]));
    }

    #[test]
    fn test_short_take_does_not_advance() {
        let buf = [1u8, 2, 3];
        let mut cur = ChunkCursor::new(&buf);
        cur.take(1).unwrap();

        assert_eq!(cur.take(3), None);
        assert_eq!(cur.take_arr::<4>(), None);
        assert_eq!(cur.position(), 1);
        assert_eq!(cur.remaining(), &[2, 3]);
        assert_eq!(cur.remaining_len(), 2);
    }

    #[test]
    fn test_huge_take_is_rejected() {
        let mut cur = ChunkCursor::new(&[0u8; 4]);
        assert_eq!(cur.take(usize::MAX), None);
        assert_eq!(cur.position(), 0);
    }
}

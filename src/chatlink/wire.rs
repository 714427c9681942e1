//! Little-endian byte writer and reader for link payloads.

use super::error::ChatLinkError;

/// Largest value a 24-bit field can carry.
pub const MAX_U24: u32 = 0x00FF_FFFF;

#[derive(Debug)]
pub(crate) struct LinkWriter {
    buf: Vec<u8>,
}

impl LinkWriter {
    pub(crate) fn new(header: u8) -> Self {
        let mut buf = Vec::with_capacity(16);
        buf.push(header);
        Self { buf }
    }

    pub(crate) fn put_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    /// Write the low three bytes of `value`. Fails if the high byte is set.
    pub(crate) fn put_u24(&mut self, field: &'static str, value: u32) -> Result<(), ChatLinkError> {
        if value > MAX_U24 {
            return Err(ChatLinkError::FieldOutOfRange {
                field,
                value,
                max: MAX_U24,
            });
        }
        self.buf.extend_from_slice(&value.to_le_bytes()[..3]);
        Ok(())
    }

    pub(crate) fn put_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        self.buf
    }
}

#[derive(Debug)]
pub(crate) struct LinkReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> LinkReader<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], ChatLinkError> {
        let end = self.pos.checked_add(n).ok_or(ChatLinkError::UnexpectedEnd)?;
        let slice = self
            .bytes
            .get(self.pos..end)
            .ok_or(ChatLinkError::UnexpectedEnd)?;
        self.pos = end;
        Ok(slice)
    }

    pub(crate) fn get_u8(&mut self) -> Result<u8, ChatLinkError> {
        Ok(self.take(1)?[0])
    }

    pub(crate) fn get_u24(&mut self) -> Result<u32, ChatLinkError> {
        let b = self.take(3)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], 0]))
    }

    pub(crate) fn get_u32(&mut self) -> Result<u32, ChatLinkError> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Succeeds only if every byte has been consumed.
    pub(crate) fn finish(self) -> Result<(), ChatLinkError> {
        match self.bytes.len() - self.pos {
            0 => Ok(()),
            n => Err(ChatLinkError::TrailingBytes(n)),
        }
    }
}

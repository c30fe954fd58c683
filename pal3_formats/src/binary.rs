use std::io::{self, Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{Result, ScnError};
use crate::text::TextCodec;

/// Sequential little-endian reader over a seekable byte source.
///
/// The stream length is measured once up front so every read and seek is
/// bounds checked before touching the source, which lets truncation errors
/// report the exact offset that ran out of data.
#[derive(Debug)]
pub struct BinaryCursor<R> {
    inner: R,
    position: u64,
    len: u64,
}

impl<R: Read + Seek> BinaryCursor<R> {
    /// Wrap `inner`, rewinding it to the start of the stream.
    pub fn new(mut inner: R) -> Result<Self> {
        let len = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(0))?;
        Ok(Self {
            inner,
            position: 0,
            len,
        })
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn remaining(&self) -> u64 {
        self.len.saturating_sub(self.position)
    }

    /// Move to an absolute offset from the start of the stream.
    ///
    /// Seeking exactly to the end is allowed; anything past it is reported as
    /// truncation.
    pub fn seek_to(&mut self, offset: u64) -> Result<()> {
        if offset > self.len {
            return Err(ScnError::Truncated {
                offset: self.len,
                needed: offset - self.len,
                available: 0,
            });
        }
        self.inner.seek(SeekFrom::Start(offset))?;
        self.position = offset;
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_with(1, |r| r.read_u8())
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        self.read_with(2, |r| r.read_i16::<LittleEndian>())
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_with(2, |r| r.read_u16::<LittleEndian>())
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_with(4, |r| r.read_i32::<LittleEndian>())
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_with(4, |r| r.read_u32::<LittleEndian>())
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        self.read_with(4, |r| r.read_f32::<LittleEndian>())
    }

    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        self.read_with(count as u64, |r| {
            let mut buf = vec![0u8; count];
            r.read_exact(&mut buf)?;
            Ok(buf)
        })
    }

    pub fn read_byte_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.read_with(N as u64, |r| {
            let mut buf = [0u8; N];
            r.read_exact(&mut buf)?;
            Ok(buf)
        })
    }

    pub fn read_u32_vec(&mut self, count: usize) -> Result<Vec<u32>> {
        self.require(count as u64 * 4)?;
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.read_u32()?);
        }
        Ok(values)
    }

    pub fn read_i32_array<const N: usize>(&mut self) -> Result<[i32; N]> {
        self.read_array(Self::read_i32)
    }

    pub fn read_f32_array<const N: usize>(&mut self) -> Result<[f32; N]> {
        self.read_array(Self::read_f32)
    }

    pub fn read_vec3(&mut self) -> Result<[f32; 3]> {
        Ok([self.read_f32()?, self.read_f32()?, self.read_f32()?])
    }

    pub fn read_vec3_array<const N: usize>(&mut self) -> Result<[[f32; 3]; N]> {
        self.read_array(Self::read_vec3)
    }

    /// Read a fixed-width text field of `len` bytes, cut at the first NUL.
    pub fn read_fixed_string(&mut self, len: usize, codec: &TextCodec) -> Result<String> {
        let raw = self.read_bytes(len)?;
        Ok(codec.decode_fixed(&raw))
    }

    fn read_array<T, const N: usize>(
        &mut self,
        mut read: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<[T; N]>
    where
        T: Copy + Default,
    {
        let mut values = [T::default(); N];
        for slot in &mut values {
            *slot = read(self)?;
        }
        Ok(values)
    }

    fn read_with<T>(
        &mut self,
        width: u64,
        read: impl FnOnce(&mut R) -> io::Result<T>,
    ) -> Result<T> {
        self.require(width)?;
        let value = read(&mut self.inner)?;
        self.position += width;
        Ok(value)
    }

    fn require(&self, needed: u64) -> Result<()> {
        let available = self.remaining();
        if needed > available {
            return Err(ScnError::Truncated {
                offset: self.position,
                needed,
                available,
            });
        }
        Ok(())
    }
}

use crate::utils;
use std::error::Error;

/// Bounds checked, endian aware, access to the bytes of an ELF file. Offsets come from
/// the file itself so every read has to be checked: files may be truncated or simply
/// garbage.
#[derive(Clone, Copy)]
pub struct Reader<'a> {
    pub little_endian: bool,
    bytes: &'a [u8],
}

impl<'a> Reader<'a> {
    /// EI_DATA is the only thing looked at here. ELFDATA2MSB means big endian and
    /// anything else (including garbage) is treated as little endian.
    pub fn new(bytes: &'a [u8]) -> Self {
        let ei_data = bytes.get(0x05).copied().unwrap_or(1);
        Reader {
            little_endian: ei_data != 2,
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn slice(&self, offset: usize, size: usize) -> Result<&'a [u8], Box<dyn Error>> {
        match offset.checked_add(size) {
            Some(end) if end <= self.bytes.len() => Ok(&self.bytes[offset..end]),
            _ => Err(format!(
                "{size} bytes at offset {offset} are past the end of the file ({} bytes)",
                self.bytes.len()
            )
            .into()),
        }
    }

    pub fn read_byte(&self, offset: usize) -> Result<u8, Box<dyn Error>> {
        self.bytes
            .get(offset)
            .copied()
            .ok_or_else(|| format!("couldn't read byte at offset {offset}").into())
    }

    pub fn read_half(&self, offset: usize) -> Result<u16, Box<dyn Error>> {
        let slice = self.slice(offset, 2)?;
        if self.little_endian {
            Ok(u16::from_le_bytes(slice.try_into()?))
        } else {
            Ok(u16::from_be_bytes(slice.try_into()?))
        }
    }

    pub fn read_word(&self, offset: usize) -> Result<u32, Box<dyn Error>> {
        let slice = self.slice(offset, 4)?;
        if self.little_endian {
            Ok(u32::from_le_bytes(slice.try_into()?))
        } else {
            Ok(u32::from_be_bytes(slice.try_into()?))
        }
    }

    pub fn read_xword(&self, offset: usize) -> Result<u64, Box<dyn Error>> {
        let slice = self.slice(offset, 8)?;
        if self.little_endian {
            Ok(u64::from_le_bytes(slice.try_into()?))
        } else {
            Ok(u64::from_be_bytes(slice.try_into()?))
        }
    }

    /// Read a null-terminated string starting at offset. The string stops at the first
    /// NUL, at limit, or at the end of the file, whichever comes first. Bytes that aren't
    /// UTF-8 are replaced.
    pub fn read_string(&self, offset: usize, limit: usize) -> Result<String, Box<dyn Error>> {
        let (raw, _) = self.raw_string(offset, limit)?;
        Ok(String::from_utf8_lossy(raw).into_owned())
    }

    /// Returns the bytes of the string (without the terminator) along with the number of
    /// bytes it occupies in the file (with the terminator, if there was one).
    fn raw_string(&self, offset: usize, limit: usize) -> Result<(&'a [u8], usize), Box<dyn Error>> {
        let limit = limit.min(self.bytes.len());
        utils::require(
            offset < limit,
            &format!("string at offset {offset} is past the end of its table"),
        )?;
        let bytes = &self.bytes[offset..limit];
        match bytes.iter().position(|&b| b == 0) {
            Some(len) => Ok((&bytes[..len], len + 1)),
            None => Ok((bytes, bytes.len())),
        }
    }
}

pub struct Stream<'a> {
    pub reader: &'a Reader<'a>,
    pub offset: usize,
}

impl<'a> Stream<'a> {
    pub fn new(reader: &'a Reader<'a>, offset: usize) -> Self {
        Stream { reader, offset }
    }

    pub fn read_byte(&mut self) -> Result<u8, Box<dyn Error>> {
        let byte = self.reader.read_byte(self.offset)?;
        self.offset += 1;
        Ok(byte)
    }

    pub fn read_half(&mut self) -> Result<u16, Box<dyn Error>> {
        let half = self.reader.read_half(self.offset)?;
        self.offset += 2;
        Ok(half)
    }

    pub fn read_word(&mut self) -> Result<u32, Box<dyn Error>> {
        let word = self.reader.read_word(self.offset)?;
        self.offset += 4;
        Ok(word)
    }

    pub fn read_xword(&mut self) -> Result<u64, Box<dyn Error>> {
        let xword = self.reader.read_xword(self.offset)?;
        self.offset += 8;
        Ok(xword)
    }

    pub fn read_sxword(&mut self) -> Result<i64, Box<dyn Error>> {
        Ok(self.read_xword()? as i64)
    }

    // Only 64-bit files are supported so addresses and offsets are always 8 bytes.
    pub fn read_addr(&mut self) -> Result<u64, Box<dyn Error>> {
        self.read_xword()
    }

    pub fn read_offset(&mut self) -> Result<u64, Box<dyn Error>> {
        self.read_xword()
    }

    /// Read a null-terminated string and advance past its terminator. See
    /// Reader::read_string for what limit means.
    pub fn read_string(&mut self, limit: usize) -> Result<String, Box<dyn Error>> {
        let (raw, consumed) = self.reader.raw_string(self.offset, limit)?;
        self.offset += consumed;
        Ok(String::from_utf8_lossy(raw).into_owned())
    }
}

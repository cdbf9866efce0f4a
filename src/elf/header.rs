use super::{DecodeError, Field, Name, Reader, Stream};
use crate::utils;
use std::error::Error;

const MAGIC: [u8; 4] = [0x7f, b'E', b'L', b'F'];
const ELFCLASS64: u8 = 2;

/// Size of Elf64_Ehdr.
pub const HEADER_SIZE: usize = 64;

/// The e_ident bytes we care about.
#[derive(Clone, Debug)]
pub struct Ident {
    pub magic: [u8; 4],
    pub class: u8,
    pub data: u8,
    pub version: u8,
    pub osabi: u8,
    pub abiversion: u8,
}

/// Elf64_Ehdr. Apart from the class nothing is validated: values are echoed as-is
/// and it's up to the renderer to decide what they mean.
#[derive(Clone, Debug)]
pub struct ElfHeader {
    pub ident: Ident,

    /// Relocatable, executable, shared object, core, etc.
    pub etype: u16,

    /// CPU architecture.
    pub machine: u16,

    pub version: u32,

    /// Virtual address of the entry point, zero if there is none.
    pub entry: u64,

    /// Offset in the ELF file to the Program Header table.
    pub ph_offset: u64,

    /// Offset in the ELF file to the section header table.
    pub section_offset: u64,

    /// Processor specific.
    pub flags: u32,

    pub eh_size: u16,

    pub ph_entry_size: u16,

    pub num_ph_entries: u16,

    pub section_entry_size: u16,

    pub num_section_entries: u16,

    /// Index of the section holding section names.
    pub string_table_index: u16,
}

impl ElfHeader {
    pub fn new(reader: &Reader) -> Result<Self, Box<dyn Error>> {
        // See https://en.wikipedia.org/wiki/Executable_and_Linkable_Format
        let class = reader.read_byte(0x04).map_err(|_| truncated(reader))?;
        if class != ELFCLASS64 {
            return Err(DecodeError::UnsupportedClass(class).into());
        }
        if reader.len() < HEADER_SIZE {
            return Err(truncated(reader).into());
        }

        let mut s = Stream::new(reader, 0);
        let magic: [u8; 4] = reader.slice(0, 4)?.try_into()?;
        if magic != MAGIC {
            utils::warn(&format!("bad ELF magic: {magic:02x?}"));
        }
        s.offset = 0x04;
        let ident = Ident {
            magic,
            class: s.read_byte()?,
            data: s.read_byte()?,
            version: s.read_byte()?,
            osabi: s.read_byte()?,
            abiversion: s.read_byte()?,
        };

        s.offset = 0x10;
        Ok(ElfHeader {
            ident,
            etype: s.read_half()?,
            machine: s.read_half()?,
            version: s.read_word()?,
            entry: s.read_addr()?,
            ph_offset: s.read_offset()?,
            section_offset: s.read_offset()?,
            flags: s.read_word()?,
            eh_size: s.read_half()?,
            ph_entry_size: s.read_half()?,
            num_ph_entries: s.read_half()?,
            section_entry_size: s.read_half()?,
            num_section_entries: s.read_half()?,
            string_table_index: s.read_half()?,
        })
    }

    pub fn stype(&self) -> Name {
        Field::FileType(self.etype).name()
    }

    pub fn machine(&self) -> Name {
        Field::Machine(self.machine).name()
    }

    pub fn abi(&self) -> Name {
        Field::OsAbi(self.ident.osabi).name()
    }
}

fn truncated(reader: &Reader) -> DecodeError {
    DecodeError::Truncated {
        what: "ELF header",
        offset: 0,
        needed: HEADER_SIZE as u64,
        available: reader.len() as u64,
    }
}

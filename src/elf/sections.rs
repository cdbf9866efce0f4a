//! Used by the linker and debugger. Also see segments.
use super::{Bytes, ElfHeader, Reader, SectionIndex, Stream, StringIndex};
use crate::utils;
use std::error::Error;

/// Returned when a name can't be found, e.g. because there is no `.strtab` section or
/// the index is out of range.
pub const NOT_FOUND: &str = "Not found";

/// Size of Elf64_Shdr.
const SECTION_HEADER_SIZE: usize = 64;

/// Only the section types whose contents get decoded are broken out.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SectionType {
    /// Relocation entries with addends (SHT_RELA).
    RelocationsWith,

    /// Relocation entries without addends (SHT_REL).
    RelocationsWithout,

    /// Strings for use by the linker and debugger (SHT_STRTAB).
    StringTable,

    /// Symbols for the linker and debugger (SHT_SYMTAB).
    SymbolTable,

    /// Everything else, including types we've never heard of.
    Other(u32),
}

impl SectionType {
    pub fn from_u32(value: u32) -> Self {
        match value {
            0x2 => SectionType::SymbolTable,
            0x3 => SectionType::StringTable,
            0x4 => SectionType::RelocationsWith,
            0x9 => SectionType::RelocationsWithout,
            _ => SectionType::Other(value),
        }
    }
}

/// Describes a section.
#[derive(Clone, Debug)]
pub struct SectionHeader {
    // Elf64_Shdr, see https://gist.github.com/x0nu11byt3/bcb35c3de461e5fb66173071a2379779
    /// Index into the section name string table. Zero means no name.
    pub name: StringIndex,

    /// The raw sh_type.
    pub stype: u32,

    /// Write, alloc, exec, etc.
    pub flags: u64,

    /// Virtual address of the section in memory, zero if it isn't loaded.
    pub addr: u64,

    /// Addressing for the bytes in the section using offsets from the start of the ELF file.
    pub obytes: Bytes,

    /// Link to another section with related information, usually a string
    /// or symbol table.
    pub link: u32,

    /// Additional section info.
    pub info: u32,

    /// Section alignment.
    pub align: u64,

    /// Set if the section holds a table of entries.
    pub entry_size: u64,
}

impl SectionHeader {
    pub fn new(reader: &Reader, offset: usize) -> Result<Self, Box<dyn Error>> {
        // Check up front so we don't get a partially read header.
        reader.slice(offset, SECTION_HEADER_SIZE)?;

        let mut s = Stream::new(reader, offset);
        let name = s.read_word()?;
        let stype = s.read_word()?;
        let flags = s.read_xword()?;
        let addr = s.read_addr()?;
        let offset = s.read_offset()?;
        let size = s.read_xword()?;
        let link = s.read_word()?;
        let info = s.read_word()?;
        let align = s.read_xword()?;
        let entry_size = s.read_xword()?;
        Ok(SectionHeader {
            name: StringIndex(name),
            stype,
            flags,
            addr,
            obytes: Bytes::from_raw(offset, size),
            link,
            info,
            align,
            entry_size,
        })
    }

    pub fn section_type(&self) -> SectionType {
        SectionType::from_u32(self.stype)
    }

    /// Number of fixed size entries in a table section. Zero if entry_size is zero.
    pub fn num_entries(&self) -> u64 {
        self.obytes.size.checked_div(self.entry_size).unwrap_or(0)
    }
}

/// Random access to the section headers along with the two string tables needed to
/// name things.
pub struct SectionTable<'a> {
    reader: Reader<'a>,
    headers: Vec<SectionHeader>,

    /// The section e_shstrndx points to.
    section_names: Option<SectionIndex>,

    /// The first string table named `.strtab`.
    symbol_names: Option<SectionIndex>,
}

impl<'a> SectionTable<'a> {
    pub fn new(reader: Reader<'a>, header: &ElfHeader) -> Self {
        let headers = load_headers(&reader, header);

        let mut index = header.string_table_index as u32;
        if index == 0xffff {
            // SHN_XINDEX: the real index is too large for e_shstrndx.
            index = headers.first().map(|h| h.link).unwrap_or(0);
        }
        let section_names = if (index as usize) < headers.len() {
            Some(SectionIndex(index))
        } else {
            utils::warn(&format!(
                "section name string table index {index} is out of range ({} sections)",
                headers.len()
            ));
            None
        };

        let mut table = SectionTable {
            reader,
            headers,
            section_names,
            symbol_names: None,
        };
        table.symbol_names = table.find_symbol_names();
        if table.symbol_names.is_none() {
            utils::warn("no .strtab section, symbol names will not be resolved");
        }
        table
    }

    pub fn section(&self, index: SectionIndex) -> Option<&SectionHeader> {
        self.headers.get(index.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionHeader> {
        self.headers.iter()
    }

    pub fn section_names(&self) -> Option<SectionIndex> {
        self.section_names
    }

    pub fn symbol_names(&self) -> Option<SectionIndex> {
        self.symbol_names
    }

    /// Returns a string from the section name string table. Note that index can point into
    /// the middle of a string.
    pub fn section_name(&self, name: StringIndex) -> String {
        self.find_string(self.section_names, name)
    }

    /// Returns a string from the symbol name string table.
    pub fn symbol_name(&self, name: StringIndex) -> String {
        self.find_string(self.symbol_names, name)
    }

    /// Returns the name of the section at index.
    pub fn name_of(&self, index: SectionIndex) -> String {
        match self.section(index) {
            Some(h) => self.section_name(h.name),
            None => NOT_FOUND.to_string(),
        }
    }

    fn find_string(&self, table: Option<SectionIndex>, name: StringIndex) -> String {
        let Some(h) = table.and_then(|t| self.section(t)) else {
            return NOT_FOUND.to_string();
        };
        if name.0 as u64 >= h.obytes.size {
            return NOT_FOUND.to_string();
        }
        // sh_offset comes from the file so it can be anything.
        let Some(offset) = h.obytes.start.0.checked_add(name.0 as u64) else {
            return NOT_FOUND.to_string();
        };
        match self
            .reader
            .read_string(offset as usize, h.obytes.end().0 as usize)
        {
            Ok(s) => s,
            Err(err) => {
                utils::warn(&format!("failed to read string {}: {err}", name.0));
                NOT_FOUND.to_string()
            }
        }
    }

    // Note that this is deliberately picky: .dynstr and other string tables are never used
    // for symbol names.
    fn find_symbol_names(&self) -> Option<SectionIndex> {
        self.headers
            .iter()
            .position(|h| {
                h.section_type() == SectionType::StringTable && self.section_name(h.name) == ".strtab"
            })
            .map(|i| SectionIndex(i as u32))
    }
}

// Truncated tables are cut short at the first header we can't read so that indices stay
// valid for the ones we can.
fn load_headers(reader: &Reader, header: &ElfHeader) -> Vec<SectionHeader> {
    let mut headers = Vec::new();
    for i in 0..header.num_section_entries {
        let offset = (i as u64)
            .checked_mul(header.section_entry_size as u64)
            .and_then(|delta| header.section_offset.checked_add(delta));
        let Some(offset) = offset else {
            utils::warn(&format!("section header {i} has an impossible offset"));
            break;
        };
        match SectionHeader::new(reader, offset as usize) {
            Ok(h) => headers.push(h),
            Err(err) => {
                utils::warn(&format!("failed to read section header {i} at {offset}: {err}"));
                break;
            }
        }
    }
    headers
}

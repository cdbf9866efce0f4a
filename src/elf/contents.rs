//! Decoding for the contents of string, symbol, and relocation table sections. Which
//! decoder is used depends only on sh_type.
use super::{
    DecodeContext, Field, Name, Reader, SectionHeader, SectionIndex, SectionTable, SectionType,
    Stream, StringIndex,
};
use crate::utils;
use std::error::Error;

/// Size of Elf64_Sym.
const SYMBOL_SIZE: usize = 24;

/// Size of Elf64_Rel. Elf64_Rela has an extra 8 byte addend.
const RELOCATION_SIZE: usize = 16;

#[derive(Clone, Debug)]
pub enum SectionContent {
    /// The section type isn't one we decode.
    None,

    StringTable(Vec<String>),

    SymbolTable(Vec<Symbol>),

    RelocationTable(Vec<Relocation>),
}

/// Where a symbol lives: st_shndx.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SymbolIndex {
    /// Symbol has an absolute value that will not change with relocation.
    Abs,

    /// A common block that has not yet been allocated. Value has alignment.
    Common,

    /// Symbol value refers to another section at this index.
    Index(SectionIndex),

    /// Value is undefined. Linker will fix these up.
    Undef,

    /// Used when Index overflows. The real index lives in a SHT_SYMTAB_SHNDX section
    /// which isn't consulted, so these are only ever rendered as XINDEX.
    XIndex,
}

impl SymbolIndex {
    pub fn from_u16(value: u16) -> Self {
        match value {
            0 => SymbolIndex::Undef,
            0xfff1 => SymbolIndex::Abs,
            0xfff2 => SymbolIndex::Common,
            0xffff => SymbolIndex::XIndex,
            _ => SymbolIndex::Index(SectionIndex(value as u32)),
        }
    }

    /// Reserved indices get short names, anything else is the name of the section.
    pub fn resolve(self, sections: &SectionTable) -> String {
        match self {
            SymbolIndex::Undef => "UND".to_string(),
            SymbolIndex::Abs => "ABS".to_string(),
            SymbolIndex::Common => "COMMON".to_string(),
            SymbolIndex::XIndex => "XINDEX".to_string(),
            SymbolIndex::Index(index) => sections.name_of(index),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Symbol {
    // see https://refspecs.linuxbase.org/elf/gabi4+/ch4.symtab.html
    /// Name from `.strtab`, or NOT_FOUND.
    pub name: String,

    /// Type in the low nibble, binding in the high nibble.
    pub info: u8,

    /// Visibility.
    pub other: u8,

    /// st_shndx resolved to a section name, or one of the reserved names.
    pub section: String,

    /// Can be an address, absolute value, etc.
    pub value: u64,

    /// Size of the symbol. Zero if the symbol has no or unknown size.
    pub size: u64,
}

impl Symbol {
    pub fn new(context: &DecodeContext, offset: usize) -> Result<Self, Box<dyn Error>> {
        let reader = &context.reader;
        reader.slice(offset, SYMBOL_SIZE)?;

        let mut s = Stream::new(reader, offset);
        let name = s.read_word()?; // 4
        let info = s.read_byte()?; // 1
        let other = s.read_byte()?; // 1
        let index = SymbolIndex::from_u16(s.read_half()?); // 2
        let value = s.read_addr()?; // 8
        let size = s.read_xword()?; // 8
        Ok(Symbol {
            name: context.sections.symbol_name(StringIndex(name)),
            info,
            other,
            section: index.resolve(&context.sections),
            value,
            size,
        })
    }
}

// see https://intezer.com/blog/executable-and-linkable-format-101-part-3-relocations/
#[derive(Clone, Debug)]
pub struct Relocation {
    pub offset: u64,

    /// Symbol index in the high 32 bits, relocation type in the low 32 bits.
    pub info: u64,

    /// Only present for SHT_RELA sections.
    pub addend: Option<i64>,

    /// Index into the symbol table the section links to.
    pub symbol_index: u32,

    /// Machine specific relocation type, from the low 32 bits of info.
    pub rtype_name: Name,
}

impl Relocation {
    pub fn new(
        reader: &Reader,
        machine: u16,
        offset: usize,
        has_addend: bool,
    ) -> Result<Self, Box<dyn Error>> {
        let size = if has_addend {
            RELOCATION_SIZE + 8
        } else {
            RELOCATION_SIZE
        };
        reader.slice(offset, size)?;

        let mut s = Stream::new(reader, offset);
        let r_offset = s.read_addr()?;
        let info = s.read_xword()?;
        let addend = if has_addend {
            Some(s.read_sxword()?)
        } else {
            None
        };
        let rtype = (info & 0xffffffff) as u32;
        Ok(Relocation {
            offset: r_offset,
            info,
            addend,
            symbol_index: (info >> 32) as u32,
            rtype_name: Field::relocation(machine, rtype)?.name(),
        })
    }
}

/// Decodes the contents of a section based on its type. The only error is an unsupported
/// machine for a relocation section: problems with the section bytes themselves are
/// reported and whatever could be decoded is returned.
pub fn decode_contents(
    context: &DecodeContext,
    section: &SectionHeader,
) -> Result<SectionContent, Box<dyn Error>> {
    let contents = match section.section_type() {
        SectionType::StringTable => {
            SectionContent::StringTable(decode_strings(&context.reader, section))
        }
        SectionType::SymbolTable => SectionContent::SymbolTable(decode_symbols(context, section)),
        SectionType::RelocationsWith => {
            SectionContent::RelocationTable(decode_relocations(context, section, true)?)
        }
        SectionType::RelocationsWithout => {
            SectionContent::RelocationTable(decode_relocations(context, section, false)?)
        }
        SectionType::Other(_) => SectionContent::None,
    };
    Ok(contents)
}

/// Splits the section on NUL bytes. Reading stops at the end of the section so a table
/// that is missing its final NUL still produces its last string and nothing past the
/// section is ever read.
fn decode_strings(reader: &Reader, section: &SectionHeader) -> Vec<String> {
    let mut strings = Vec::new();
    let end = section.obytes.end().0 as usize;
    let mut s = Stream::new(reader, section.obytes.start.0 as usize);
    while s.offset < end {
        match s.read_string(end) {
            Ok(string) => strings.push(string),
            Err(err) => {
                utils::warn(&format!("string table truncated: {err}"));
                break;
            }
        }
    }
    strings
}

fn decode_symbols(context: &DecodeContext, section: &SectionHeader) -> Vec<Symbol> {
    let mut symbols = Vec::new();
    for offset in entry_offsets(section) {
        match Symbol::new(context, offset) {
            Ok(symbol) => symbols.push(symbol),
            Err(err) => {
                utils::warn(&format!("failed to read symbol at offset {offset}: {err}"));
                break;
            }
        }
    }
    symbols
}

fn decode_relocations(
    context: &DecodeContext,
    section: &SectionHeader,
    has_addend: bool,
) -> Result<Vec<Relocation>, Box<dyn Error>> {
    let mut relocations = Vec::new();
    let machine = context.header.machine;
    if section.num_entries() > 0 {
        // Relocation types can't be named without a table for the machine.
        Field::relocation(machine, 0)?;
    }
    for offset in entry_offsets(section) {
        match Relocation::new(&context.reader, machine, offset, has_addend) {
            Ok(r) => relocations.push(r),
            Err(err) => {
                utils::warn(&format!("failed to read relocation at offset {offset}: {err}"));
                break;
            }
        }
    }
    Ok(relocations)
}

/// Offsets of the sh_size / sh_entsize entries in a table section.
fn entry_offsets(section: &SectionHeader) -> impl Iterator<Item = usize> {
    if section.entry_size == 0 && section.obytes.size > 0 {
        utils::warn(&format!(
            "section at offset {} has no entry size, skipping its entries",
            section.obytes.start.0
        ));
    }
    let start = section.obytes.start.0;
    let entry_size = section.entry_size;
    (0..section.num_entries())
        .map_while(move |i| i.checked_mul(entry_size)?.checked_add(start))
        .map(|offset| offset as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elf::{DecodeError, ElfHeader, NOT_FOUND};
    use crate::utils::{ImageBuilder, rel, rela, symbol};

    const SHT_SYMTAB: u32 = 2;
    const SHT_STRTAB: u32 = 3;
    const SHT_RELA: u32 = 4;
    const SHT_REL: u32 = 9;
    const SHT_NOTE: u32 = 7;

    fn with_context<F: FnOnce(&DecodeContext)>(bytes: &[u8], f: F) {
        let reader = Reader::new(bytes);
        let header = ElfHeader::new(&reader).unwrap();
        let sections = SectionTable::new(reader, &header);
        let context = DecodeContext {
            reader,
            header,
            sections,
        };
        f(&context);
    }

    fn contents(context: &DecodeContext, index: u32) -> SectionContent {
        let section = context.sections.section(SectionIndex(index)).unwrap();
        decode_contents(context, section).unwrap()
    }

    fn symtab(entries: &[Vec<u8>]) -> Vec<u8> {
        entries.concat()
    }

    #[test]
    fn string_tables_split_on_nul() {
        let bytes = ImageBuilder::new()
            .section(".strtab", SHT_STRTAB, b"\0abc\0de\0".to_vec())
            .build();
        with_context(&bytes, |context| match contents(context, 1) {
            SectionContent::StringTable(strings) => assert_eq!(strings, vec!["", "abc", "de"]),
            other => panic!("expected strings, got {other:?}"),
        });
    }

    #[test]
    fn string_tables_stop_at_section_end() {
        // The section is followed by more bytes (the next section's data). Reading stops
        // at the end of the section instead of picking up an extra string from there.
        let bytes = ImageBuilder::new()
            .section(".strtab", SHT_STRTAB, b"\0x\0yz".to_vec())
            .section(".data", 1, b"next\0".to_vec())
            .build();
        with_context(&bytes, |context| match contents(context, 1) {
            SectionContent::StringTable(strings) => assert_eq!(strings, vec!["", "x", "yz"]),
            other => panic!("expected strings, got {other:?}"),
        });
    }

    #[test]
    fn empty_string_table() {
        let bytes = ImageBuilder::new()
            .section(".strtab", SHT_STRTAB, vec![])
            .build();
        with_context(&bytes, |context| match contents(context, 1) {
            SectionContent::StringTable(strings) => assert!(strings.is_empty()),
            other => panic!("expected strings, got {other:?}"),
        });
    }

    #[test]
    fn string_table_past_end_of_file() {
        let bytes = ImageBuilder::new()
            .section(".strtab", SHT_STRTAB, b"\0abc\0".to_vec())
            .size(1 << 40)
            .build();
        with_context(&bytes, |context| match contents(context, 1) {
            // Everything up to the end of the file gets read, but no further.
            SectionContent::StringTable(strings) => {
                assert_eq!(&strings[..2], &["", "abc"]);
            }
            other => panic!("expected strings, got {other:?}"),
        });
    }

    #[test]
    fn symbols_are_resolved() {
        let symbols = symtab(&[
            symbol(0, 0, 0, 0, 0, 0),
            symbol(1, 0x04, 0, 0xfff1, 0, 0),   // FILE LOCAL ABS
            symbol(8, 0x12, 2, 2, 0x10, 0x20),  // FUNC GLOBAL in .text
            symbol(13, 0x10, 0, 0, 0, 0),       // NOTYPE GLOBAL UND
            symbol(500, 0x11, 0, 0xfff2, 8, 4), // bad name, COMMON
        ]);
        let bytes = ImageBuilder::new()
            .table(".symtab", SHT_SYMTAB, 24, 3, symbols)
            .section(".text", 1, vec![0xc3; 0x40])
            .section(".strtab", SHT_STRTAB, b"\0main.c\0main\0puts\0".to_vec())
            .build();
        with_context(&bytes, |context| {
            let SectionContent::SymbolTable(symbols) = contents(context, 1) else {
                panic!("expected symbols");
            };
            assert_eq!(symbols.len(), 5);

            assert_eq!(symbols[0].name, "");
            assert_eq!(symbols[0].section, "UND");

            assert_eq!(symbols[1].name, "main.c");
            assert_eq!(symbols[1].section, "ABS");

            let main = &symbols[2];
            assert_eq!(main.name, "main");
            assert_eq!(main.info, 0x12);
            assert_eq!(main.other, 2);
            assert_eq!(main.section, ".text");
            assert_eq!(main.value, 0x10);
            assert_eq!(main.size, 0x20);

            assert_eq!(symbols[3].name, "puts");
            assert_eq!(symbols[3].section, "UND");

            assert_eq!(symbols[4].name, NOT_FOUND);
            assert_eq!(symbols[4].section, "COMMON");
        });
    }

    #[test]
    fn reserved_section_indices() {
        assert_eq!(SymbolIndex::from_u16(0), SymbolIndex::Undef);
        assert_eq!(SymbolIndex::from_u16(0xfff1), SymbolIndex::Abs);
        assert_eq!(SymbolIndex::from_u16(0xfff2), SymbolIndex::Common);
        assert_eq!(SymbolIndex::from_u16(0xffff), SymbolIndex::XIndex);
        assert_eq!(
            SymbolIndex::from_u16(2),
            SymbolIndex::Index(SectionIndex(2))
        );

        let bytes = ImageBuilder::new()
            .table(".symtab", SHT_SYMTAB, 24, 0, symbol(0, 0, 0, 0xffff, 0, 0))
            .build();
        with_context(&bytes, |context| {
            assert_eq!(SymbolIndex::XIndex.resolve(&context.sections), "XINDEX");
            assert_eq!(
                SymbolIndex::Index(SectionIndex(1)).resolve(&context.sections),
                ".symtab"
            );
            assert_eq!(
                SymbolIndex::Index(SectionIndex(40)).resolve(&context.sections),
                NOT_FOUND
            );
        });
    }

    #[test]
    fn symbol_count_is_size_over_entry_size() {
        for n in [0usize, 1, 7] {
            let symbols = symtab(&vec![symbol(0, 0, 0, 0, 0, 0); n]);
            let bytes = ImageBuilder::new()
                .table(".symtab", SHT_SYMTAB, 24, 0, symbols)
                .build();
            with_context(&bytes, |context| match contents(context, 1) {
                SectionContent::SymbolTable(symbols) => assert_eq!(symbols.len(), n),
                other => panic!("expected symbols, got {other:?}"),
            });
        }

        // Trailing bytes that don't make up a whole entry are ignored.
        let mut symbols = symtab(&[symbol(0, 0, 0, 0, 0, 0), symbol(0, 0, 0, 0, 0, 0)]);
        symbols.extend_from_slice(&[0; 10]);
        let bytes = ImageBuilder::new()
            .table(".symtab", SHT_SYMTAB, 24, 0, symbols)
            .build();
        with_context(&bytes, |context| match contents(context, 1) {
            SectionContent::SymbolTable(symbols) => assert_eq!(symbols.len(), 2),
            other => panic!("expected symbols, got {other:?}"),
        });
    }

    #[test]
    fn symbols_without_strtab() {
        let bytes = ImageBuilder::new()
            .table(".symtab", SHT_SYMTAB, 24, 0, symbol(1, 0x12, 0, 0xfff1, 0, 0))
            .section(".dynstr", SHT_STRTAB, b"\0puts\0".to_vec())
            .build();
        with_context(&bytes, |context| match contents(context, 1) {
            SectionContent::SymbolTable(symbols) => assert_eq!(symbols[0].name, NOT_FOUND),
            other => panic!("expected symbols, got {other:?}"),
        });
    }

    #[test]
    fn zero_entry_size_decodes_nothing() {
        let bytes = ImageBuilder::new()
            .table(".symtab", SHT_SYMTAB, 0, 0, symbol(0, 0, 0, 0, 0, 0))
            .build();
        with_context(&bytes, |context| match contents(context, 1) {
            SectionContent::SymbolTable(symbols) => assert!(symbols.is_empty()),
            other => panic!("expected symbols, got {other:?}"),
        });
    }

    #[test]
    fn truncated_symbol_table() {
        let bytes = ImageBuilder::new()
            .table(".symtab", SHT_SYMTAB, 24, 0, symbol(0, 0, 0, 0, 0, 0))
            .size(24 * 1_000_000)
            .build();
        with_context(&bytes, |context| match contents(context, 1) {
            SectionContent::SymbolTable(symbols) => assert!(symbols.len() < 1_000_000),
            other => panic!("expected symbols, got {other:?}"),
        });
    }

    #[test]
    fn relocations_with_addends() {
        let relocs = [rela(0x10, 5, 2, -4), rela(0x20, 7, 4, 12)].concat();
        let bytes = ImageBuilder::new()
            .table(".rela.text", SHT_RELA, 24, 0, relocs)
            .build();
        with_context(&bytes, |context| {
            let SectionContent::RelocationTable(relocs) = contents(context, 1) else {
                panic!("expected relocations");
            };
            assert_eq!(relocs.len(), 2);

            let r = &relocs[0];
            assert_eq!(r.offset, 0x10);
            assert_eq!(r.info, (5 << 32) | 2);
            assert_eq!(r.addend, Some(-4));
            assert_eq!(r.symbol_index, 5);
            assert_eq!(r.info & 0xffffffff, 2);
            assert_eq!(r.rtype_name.to_string(), "R_X86_64_PC32");

            let r = &relocs[1];
            assert_eq!(r.addend, Some(12));
            assert_eq!(r.rtype_name.to_string(), "R_X86_64_PLT32");
            for r in relocs.iter() {
                assert_eq!((r.info >> 32) as u32, r.symbol_index);
            }
        });
    }

    #[test]
    fn relocations_without_addends() {
        let relocs = [rel(0x10, 1, 1), rel(0x18, 0xffffffff, 8), rel(0x20, 3, 999)].concat();
        let bytes = ImageBuilder::new()
            .table(".rel.dyn", SHT_REL, 16, 0, relocs)
            .build();
        with_context(&bytes, |context| {
            let SectionContent::RelocationTable(relocs) = contents(context, 1) else {
                panic!("expected relocations");
            };
            assert_eq!(relocs.len(), 3);
            assert!(relocs.iter().all(|r| r.addend.is_none()));
            assert_eq!(relocs[0].rtype_name.to_string(), "R_X86_64_64");
            assert_eq!(relocs[1].symbol_index, 0xffffffff);
            assert_eq!(relocs[1].rtype_name.to_string(), "R_X86_64_RELATIVE");
            assert_eq!(relocs[2].rtype_name, Name::Unknown(999));
        });
    }

    #[test]
    fn relocations_for_other_machines() {
        let bytes = ImageBuilder::new()
            .machine(183)
            .table(".rela.text", SHT_RELA, 24, 0, rela(0, 1, 0x11b, 0))
            .build();
        with_context(&bytes, |context| match contents(context, 1) {
            SectionContent::RelocationTable(relocs) => {
                assert_eq!(relocs[0].rtype_name.to_string(), "R_AARCH64_CALL26")
            }
            other => panic!("expected relocations, got {other:?}"),
        });
    }

    #[test]
    fn unsupported_machine_is_fatal() {
        let bytes = ImageBuilder::new()
            .machine(2)
            .table(".rela.text", SHT_RELA, 24, 0, rela(0, 1, 1, 0))
            .build();
        with_context(&bytes, |context| {
            let section = context.sections.section(SectionIndex(1)).unwrap();
            let err = decode_contents(context, section).unwrap_err();
            assert_eq!(
                err.downcast_ref::<DecodeError>(),
                Some(&DecodeError::UnsupportedMachine(2))
            );
        });

        // But only if there's actually a relocation to name.
        let bytes = ImageBuilder::new()
            .machine(2)
            .table(".rela.text", SHT_RELA, 24, 0, vec![])
            .build();
        with_context(&bytes, |context| match contents(context, 1) {
            SectionContent::RelocationTable(relocs) => assert!(relocs.is_empty()),
            other => panic!("expected relocations, got {other:?}"),
        });
    }

    #[test]
    fn other_sections_are_not_decoded() {
        let bytes = ImageBuilder::new()
            .section(".note", SHT_NOTE, vec![1, 2, 3, 4])
            .build();
        with_context(&bytes, |context| {
            assert!(matches!(contents(context, 1), SectionContent::None));
        });
    }
}

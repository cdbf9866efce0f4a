//! The JSON document. Key names and their order are relied upon by downstream tools so
//! don't change them: serde writes struct fields in declaration order.
use crate::elf::{
    ElfFile, Field, ProgramHeader, Relocation, Section, SectionContent, Symbol, symbol_info,
};
use serde::Serialize;
use std::error::Error;
use std::io::Write;

#[derive(Serialize)]
pub struct Document<'a> {
    pub e_ident: IdentDoc,
    pub e_type: String,
    pub e_machine: String,
    pub e_version: String,
    pub e_entry: u64,
    pub e_phoff: u64,
    pub e_shoff: u64,
    pub e_flags: u32,
    pub e_ehsize: u16,
    pub e_phentsize: u16,
    pub e_phnum: u16,
    pub e_shentsize: u16,
    pub e_shnum: u16,
    pub e_shstrndx: u16,
    pub program_headers: Vec<SegmentDoc>,
    pub section_headers: Vec<SectionDoc<'a>>,
}

#[derive(Serialize)]
pub struct IdentDoc {
    pub ei_class: String,
    pub ei_data: String,
    pub ei_version: String,
    pub ei_osabi: String,
    pub ei_abiversion: u8,
}

#[derive(Serialize)]
pub struct SegmentDoc {
    pub p_type: String,
    pub p_flags: String,
    pub p_offset: u64,
    pub p_vaddr: u64,
    pub p_paddr: u64,
    pub p_filesz: u64,
    pub p_memsz: u64,
    pub p_align: u64,
}

#[derive(Serialize)]
pub struct SectionDoc<'a> {
    pub sh_name: &'a str,
    pub sh_type: String,
    pub sh_flags: String,
    pub sh_addr: u64,
    pub sh_offset: u64,
    pub sh_size: u64,
    pub sh_link: u32,
    pub sh_info: u32,
    pub sh_addralign: u64,
    pub sh_entsize: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strings: Option<&'a [String]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbols: Option<Vec<SymbolDoc<'a>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub relocations: Option<Vec<RelocationDoc>>,
}

#[derive(Serialize)]
pub struct SymbolDoc<'a> {
    pub st_name: &'a str,
    pub st_info: String,
    pub st_other: String,
    pub st_shndx: &'a str,
    pub st_value: u64,
    pub st_size: u64,
}

#[derive(Serialize)]
pub struct RelocationDoc {
    pub r_offset: u64,
    pub r_info: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_addend: Option<i64>,

    #[serde(rename = "__sym_table")]
    pub sym_table: u32,

    #[serde(rename = "__relo_type")]
    pub relo_type: String,
}

impl<'a> Document<'a> {
    pub fn new(file: &'a ElfFile) -> Self {
        let h = &file.header;
        Document {
            e_ident: IdentDoc {
                ei_class: Field::Class(h.ident.class).name().to_string(),
                ei_data: Field::Data(h.ident.data).name().to_string(),
                ei_version: Field::IdentVersion(h.ident.version).name().to_string(),
                ei_osabi: Field::OsAbi(h.ident.osabi).name().to_string(),
                ei_abiversion: h.ident.abiversion,
            },
            e_type: h.stype().to_string(),
            e_machine: h.machine().to_string(),
            e_version: Field::Version(h.version).name().to_string(),
            e_entry: h.entry,
            e_phoff: h.ph_offset,
            e_shoff: h.section_offset,
            e_flags: h.flags,
            e_ehsize: h.eh_size,
            e_phentsize: h.ph_entry_size,
            e_phnum: h.num_ph_entries,
            e_shentsize: h.section_entry_size,
            e_shnum: h.num_section_entries,
            e_shstrndx: h.string_table_index,
            program_headers: file.segments.iter().map(SegmentDoc::new).collect(),
            section_headers: file.sections.iter().map(SectionDoc::new).collect(),
        }
    }
}

impl SegmentDoc {
    fn new(ph: &ProgramHeader) -> Self {
        SegmentDoc {
            p_type: ph.segment_type().to_string(),
            p_flags: ph.segment_flags().to_string(),
            p_offset: ph.offset,
            p_vaddr: ph.vaddr,
            p_paddr: ph.paddr,
            p_filesz: ph.file_size,
            p_memsz: ph.mem_size,
            p_align: ph.align,
        }
    }
}

impl<'a> SectionDoc<'a> {
    fn new(section: &'a Section) -> Self {
        let h = &section.header;
        let mut doc = SectionDoc {
            sh_name: &section.name,
            sh_type: Field::SectionType(h.stype).name().to_string(),
            sh_flags: Field::SectionFlags(h.flags).name().to_string(),
            sh_addr: h.addr,
            sh_offset: h.obytes.start.0,
            sh_size: h.obytes.size,
            sh_link: h.link,
            sh_info: h.info,
            sh_addralign: h.align,
            sh_entsize: h.entry_size,
            strings: None,
            symbols: None,
            relocations: None,
        };
        match &section.contents {
            SectionContent::None => (),
            SectionContent::StringTable(strings) => doc.strings = Some(strings.as_slice()),
            SectionContent::SymbolTable(symbols) => {
                doc.symbols = Some(symbols.iter().map(SymbolDoc::new).collect())
            }
            SectionContent::RelocationTable(relocs) => {
                doc.relocations = Some(relocs.iter().map(RelocationDoc::new).collect())
            }
        }
        doc
    }
}

impl<'a> SymbolDoc<'a> {
    fn new(symbol: &'a Symbol) -> Self {
        SymbolDoc {
            st_name: &symbol.name,
            st_info: symbol_info(symbol.info),
            st_other: Field::SymbolVisibility(symbol.other).name().to_string(),
            st_shndx: &symbol.section,
            st_value: symbol.value,
            st_size: symbol.size,
        }
    }
}

impl RelocationDoc {
    fn new(r: &Relocation) -> Self {
        RelocationDoc {
            r_offset: r.offset,
            r_info: r.info,
            r_addend: r.addend,
            sym_table: r.symbol_index,
            relo_type: r.rtype_name.to_string(),
        }
    }
}

/// Writes the document followed by a newline.
pub fn write_json(mut out: impl Write, file: &ElfFile, pretty: bool) -> Result<(), Box<dyn Error>> {
    let doc = Document::new(file);
    if pretty {
        serde_json::to_writer_pretty(&mut out, &doc)?;
    } else {
        serde_json::to_writer(&mut out, &doc)?;
    }
    writeln!(out)?;
    Ok(())
}

//! Renders a decoded ElfFile, either as the JSON document or as tables for people.
pub mod json;
pub mod tables;

pub use json::*;

use crate::elf::{ElfFile, Field, SectionContent, SectionIndex};
use std::io::{self, Write};
use tables::{SimpleTableBuilder, TableBuilder, add_field, add_simple};

/// The file header, program headers, and section headers, separated by blank lines.
pub fn write_tables(mut out: impl Write, file: &ElfFile, titles: bool, explain: bool) -> io::Result<()> {
    write_header(&mut out, file, explain)?;
    writeln!(out)?;
    write_segments(&mut out, file, titles, explain)?;
    writeln!(out)?;
    write_sections(&mut out, file, titles, explain)
}

pub fn write_header(out: impl Write, file: &ElfFile, explain: bool) -> io::Result<()> {
    let h = &file.header;
    let mut b = SimpleTableBuilder::new();
    add_simple!(b, "e_type", h.stype(), "type of ELF file");
    add_simple!(b, "e_machine", h.machine(), "CPU architecture");
    add_simple!(
        b,
        "ei_mag",
        "{:02x?}",
        h.ident.magic,
        "should be 7f 'E' 'L' 'F'"
    );
    add_simple!(
        b,
        "ei_data",
        Field::Data(h.ident.data).name(),
        "byte order used for multi-byte fields"
    );
    add_simple!(b, "ei_osabi", h.abi(), "the OS the binary was compiled for");
    add_simple!(b, "ei_abiversion", h.ident.abiversion, "zero for Linux");
    add_simple!(b, "e_version", Field::Version(h.version).name(), "object file version");
    add_simple!(b, "e_entry", "0x{:x}", h.entry, "virtual address where execution starts");
    add_simple!(b, "e_flags", "0x{:x}", h.flags, "processor specific flags");
    add_simple!(
        b,
        "e_phoff",
        h.ph_offset,
        "offset in the ELF file to the program header table"
    );
    add_simple!(
        b,
        "e_phnum",
        h.num_ph_entries,
        "number of entries in the program header table"
    );
    add_simple!(
        b,
        "e_shoff",
        h.section_offset,
        "offset in the ELF file to the section header table"
    );
    add_simple!(
        b,
        "e_shnum",
        h.num_section_entries,
        "number of entries in the section header table"
    );
    add_simple!(
        b,
        "e_shstrndx",
        h.string_table_index,
        "section index containing section names"
    );
    add_simple!(
        b,
        "section names",
        table_name(file, file.section_names),
        "the string table used to name sections"
    );
    add_simple!(
        b,
        "symbol names",
        table_name(file, file.symbol_names),
        "the string table used to name symbols, the first one named .strtab"
    );
    b.writeln(out, explain)
}

fn table_name(file: &ElfFile, index: Option<SectionIndex>) -> String {
    let Some(index) = index else {
        return "none".to_string();
    };
    match file.sections.get(index.0 as usize) {
        Some(section) => format!("{} ({})", section.name, index.0),
        None => "none".to_string(),
    }
}

pub fn write_segments(out: impl Write, file: &ElfFile, titles: bool, explain: bool) -> io::Result<()> {
    let mut builder = TableBuilder::new();
    builder.add_col_l("type", "the segment type");
    builder.add_col_l("flags", "executable, writeable, and/or readable");
    builder.add_col_r(
        "offset",
        "the offset into the ELF file at which the segment appears",
    );
    builder.add_col_r("vaddr", "the virtual address the segment starts at");
    builder.add_col_r("paddr", "the physical address, usually the same as vaddr");
    builder.add_col_r("filesz", "the size of the segment in the file");
    builder.add_col_r("memsz", "the size of the segment in memory");
    builder.add_col_r("align", "alignment of the segment in memory and in the file");

    for segment in file.segments.iter() {
        add_field!(builder, "type", segment.segment_type());
        add_field!(builder, "flags", segment.segment_flags());
        add_field!(builder, "offset", "{:x}", segment.offset);
        add_field!(builder, "vaddr", "{:x}", segment.vaddr);
        add_field!(builder, "paddr", "{:x}", segment.paddr);
        add_field!(builder, "filesz", "{:x}", segment.file_size);
        add_field!(builder, "memsz", "{:x}", segment.mem_size);
        add_field!(builder, "align", "{:x}", segment.align);
    }

    builder.writeln(out, titles, explain)
}

pub fn write_sections(out: impl Write, file: &ElfFile, titles: bool, explain: bool) -> io::Result<()> {
    let mut builder = TableBuilder::new();
    builder.add_col_r("index", "the section header index");
    builder.add_col_l("name", "the section name");
    builder.add_col_l("type", "the section type");
    builder.add_col_l("flags", "write, alloc, exec, etc");
    builder.add_col_r("addr", "virtual address of the section, zero if not loaded");
    builder.add_col_r(
        "offset",
        "the offset into the ELF file at which the section appears",
    );
    builder.add_col_r("size", "the size of the section in the file");
    builder.add_col_r("link", "index of a related section");
    builder.add_col_r("entsize", "size of each entry for table sections");
    builder.add_col_l("contents", "what was decoded from the section");

    for (i, section) in file.sections.iter().enumerate() {
        let h = &section.header;
        let contents = match &section.contents {
            SectionContent::None => String::new(),
            SectionContent::StringTable(strings) => format!("{} strings", strings.len()),
            SectionContent::SymbolTable(symbols) => format!("{} symbols", symbols.len()),
            SectionContent::RelocationTable(relocs) => format!("{} relocations", relocs.len()),
        };
        add_field!(builder, "index", i);
        add_field!(builder, "name", section.name);
        add_field!(builder, "type", Field::SectionType(h.stype).name());
        add_field!(builder, "flags", Field::SectionFlags(h.flags).name());
        add_field!(builder, "addr", "{:x}", h.addr);
        add_field!(builder, "offset", "{:x}", h.obytes.start.0);
        add_field!(builder, "size", "{:x}", h.obytes.size);
        add_field!(builder, "link", h.link);
        add_field!(builder, "entsize", "{:x}", h.entry_size);
        add_field!(builder, "contents", contents);
    }

    builder.writeln(out, titles, explain)
}

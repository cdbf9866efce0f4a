//! The decoded form of an ELF file.
use super::{
    ElfHeader, ProgramHeader, Reader, SectionContent, SectionHeader, SectionIndex, SectionTable,
    decode_contents, find_segments,
};
use std::error::Error;

/// Everything the decoders need to know about the file. This is built once, never
/// mutated, and passed explicitly to whatever needs it.
pub struct DecodeContext<'a> {
    pub reader: Reader<'a>,
    pub header: ElfHeader,
    pub sections: SectionTable<'a>,
}

impl<'a> DecodeContext<'a> {
    pub fn new(bytes: &'a [u8]) -> Result<Self, Box<dyn Error>> {
        let reader = Reader::new(bytes);
        let header = ElfHeader::new(&reader)?;
        let sections = SectionTable::new(reader, &header);
        Ok(DecodeContext {
            reader,
            header,
            sections,
        })
    }
}

/// A section header along with its resolved name and decoded contents.
#[derive(Clone, Debug)]
pub struct Section {
    pub header: SectionHeader,
    pub name: String,
    pub contents: SectionContent,
}

pub struct ElfFile {
    pub header: ElfHeader,
    pub segments: Vec<ProgramHeader>,
    pub sections: Vec<Section>,

    /// Section holding section names, if e_shstrndx was usable.
    pub section_names: Option<SectionIndex>,

    /// Section holding symbol names, i.e. the first `.strtab`.
    pub symbol_names: Option<SectionIndex>,
}

impl ElfFile {
    /// Decodes the whole file in one pass. This fails only for files that aren't 64-bit,
    /// files too small to hold an ELF header, and relocation sections for machines we
    /// don't know about. Anything else odd is warned about and decoding carries on.
    pub fn decode(bytes: &[u8]) -> Result<Self, Box<dyn Error>> {
        let context = DecodeContext::new(bytes)?;
        ElfFile::from_context(&context)
    }

    pub fn from_context(context: &DecodeContext) -> Result<Self, Box<dyn Error>> {
        let segments = find_segments(&context.reader, &context.header);
        let sections = context
            .sections
            .iter()
            .map(|h| -> Result<Section, Box<dyn Error>> {
                Ok(Section {
                    header: h.clone(),
                    name: context.sections.section_name(h.name),
                    contents: decode_contents(context, h)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ElfFile {
            header: context.header.clone(),
            segments,
            sections,
            section_names: context.sections.section_names(),
            symbol_names: context.sections.symbol_names(),
        })
    }
}

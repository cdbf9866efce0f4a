//! Used by the run-time loader. Also see sections.
use super::{ElfHeader, Field, Name, Offset, Reader, Stream};
use crate::utils;
use std::error::Error;

/// Size of Elf64_Phdr.
const PROGRAM_HEADER_SIZE: usize = 56;

/// Describes a segment. There's no per-type decoding, type and flags are rendered
/// symbolically and everything else is echoed.
#[derive(Clone, Debug)]
pub struct ProgramHeader {
    // Elf64_Phdr, see https://llvm.org/doxygen/BinaryFormat_2ELF_8h_source.html
    /// The raw p_type, e.g. PT_LOAD.
    pub stype: u32,

    /// Read/Write/Execute flags.
    pub flags: u32,

    /// Offset to the first byte of the segment.
    pub offset: u64,

    /// Virtual address of the first byte in the segment.
    pub vaddr: u64,

    /// Physical address of the first byte in the segment.
    pub paddr: u64,

    /// Number of bytes in the segment in the file.
    pub file_size: u64,

    /// Number of bytes in the segment in memory.
    pub mem_size: u64,

    pub align: u64,
}

impl ProgramHeader {
    pub fn new(reader: &Reader, offset: Offset) -> Result<Self, Box<dyn Error>> {
        let offset = offset.0 as usize;
        reader.slice(offset, PROGRAM_HEADER_SIZE)?;

        // Note that 64-bit headers put p_flags second, 32-bit ones put it near the end.
        let mut s = Stream::new(reader, offset);
        let p_type = s.read_word()?;
        let p_flags = s.read_word()?;
        let p_offset = s.read_offset()?;
        let p_vaddr = s.read_addr()?;
        let p_paddr = s.read_addr()?;
        let p_filesz = s.read_xword()?;
        let p_memsz = s.read_xword()?;
        let p_align = s.read_xword()?;
        Ok(ProgramHeader {
            stype: p_type,
            flags: p_flags,
            offset: p_offset,
            vaddr: p_vaddr,
            paddr: p_paddr,
            file_size: p_filesz,
            mem_size: p_memsz,
            align: p_align,
        })
    }

    pub fn segment_type(&self) -> Name {
        Field::SegmentType(self.stype).name()
    }

    pub fn segment_flags(&self) -> Name {
        Field::SegmentFlags(self.flags).name()
    }
}

/// Reads e_phnum entries, e_phentsize bytes apart, starting at e_phoff.
pub fn find_segments(reader: &Reader, header: &ElfHeader) -> Vec<ProgramHeader> {
    let mut segments = Vec::new();
    for i in 0..header.num_ph_entries {
        let offset = (i as u64)
            .checked_mul(header.ph_entry_size as u64)
            .and_then(|delta| header.ph_offset.checked_add(delta));
        let Some(offset) = offset else {
            utils::warn(&format!("program header {i} has an impossible offset"));
            break;
        };
        match ProgramHeader::new(reader, Offset(offset)) {
            Ok(ph) => segments.push(ph),
            Err(err) => {
                utils::warn(&format!("failed to read program header {i} at {offset}: {err}"));
                break;
            }
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ImageBuilder;

    const PT_LOAD: u32 = 1;
    const PT_GNU_STACK: u32 = 0x6474e551;

    #[test]
    fn reads_every_segment() {
        let bytes = ImageBuilder::new()
            .etype(2)
            .segment(PT_LOAD, 5, 0x400000, 0x1234)
            .segment(PT_LOAD, 6, 0x600000, 0x80)
            .segment(PT_GNU_STACK, 6, 0, 0)
            .build();
        let reader = Reader::new(&bytes);
        let header = ElfHeader::new(&reader).unwrap();
        assert_eq!(header.num_ph_entries, 3);
        assert_eq!(header.ph_entry_size, 56);

        let segments = find_segments(&reader, &header);
        assert_eq!(segments.len(), 3);

        let text = &segments[0];
        assert_eq!(text.segment_type().to_string(), "PT_LOAD");
        assert_eq!(text.segment_flags().to_string(), "PF_X | PF_R");
        assert_eq!(text.vaddr, 0x400000);
        assert_eq!(text.paddr, 0x400000);
        assert_eq!(text.file_size, 0x1234);
        assert_eq!(text.mem_size, 0x1234);
        assert_eq!(text.align, 0x1000);

        assert_eq!(segments[1].segment_flags().to_string(), "PF_W | PF_R");
        assert_eq!(segments[2].segment_type().to_string(), "PT_GNU_STACK");
    }

    #[test]
    fn honors_entry_size() {
        let mut bytes = ImageBuilder::new()
            .segment(PT_LOAD, 4, 0x1000, 0x10)
            .segment(PT_LOAD, 4, 0x2000, 0x10)
            .build();
        // Pretend entries are 112 bytes apart: the second entry then comes from past the
        // end of the table (the start of section data) rather than the real entry.
        bytes[54..56].copy_from_slice(&112u16.to_le_bytes());
        let reader = Reader::new(&bytes);
        let header = ElfHeader::new(&reader).unwrap();
        let segments = find_segments(&reader, &header);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].vaddr, 0x1000);
        assert_ne!(segments[1].vaddr, 0x2000);
    }

    #[test]
    fn truncated_table_is_cut_short() {
        let mut bytes = ImageBuilder::new().segment(PT_LOAD, 4, 0x1000, 0x10).build();
        // e_phnum
        bytes[56..58].copy_from_slice(&1000u16.to_le_bytes());
        let reader = Reader::new(&bytes);
        let header = ElfHeader::new(&reader).unwrap();
        let segments = find_segments(&reader, &header);
        assert!(segments.len() < 1000);
        assert_eq!(segments[0].vaddr, 0x1000);
    }
}

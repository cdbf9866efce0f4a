//! ELF64 decoding. Everything in here is a pure function of an immutable byte buffer:
//! the loader hands us a `&[u8]` and we hand back an `ElfFile` that can be rendered
//! however the caller likes.
//! Quick ELF reference: https://gist.github.com/x0nu11byt3/bcb35c3de461e5fb66173071a2379779
//!
//! ELF files start with an ELF header which includes:
//! * A magic number to identify the file as an ELF file.
//! * The class (32 or 64 bit) and byte order. Only 64-bit files are supported.
//! * The architecture, e.g. AMD x86-64.
//! * The offset to and number of program headers.
//! * The offset to and number of section headers.
//!
//! Program headers identify segments. Segments are used by the OS to load an exe into
//! memory. We only echo them.
//!
//! Section headers identify sections. Sections are used for static linking. Three kinds
//! of section get their contents decoded: string tables, symbol tables, and relocation
//! tables. Names of sections come from the section name string table (the one
//! `e_shstrndx` points at) and names of symbols come from the `.strtab` section.
pub mod contents;
pub mod elf_file;
pub mod header;
pub mod io;
pub mod names;
pub mod sections;
pub mod segments;

pub use contents::*;
pub use elf_file::*;
pub use header::*;
pub use io::*;
pub use names::*;
pub use sections::*;
pub use segments::*;
use std::error::Error;
use std::fmt;

/// Index into the section table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct SectionIndex(pub u32);

/// Index into a string table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct StringIndex(pub u32);

/// An index into a byte within an ELF file.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct Offset(pub u64);

/// A range of bytes within the ELF file. Note that the range comes from the file itself
/// so it may well extend past the end of the buffer.
#[derive(Copy, Clone, Debug)]
pub struct Bytes {
    pub start: Offset,
    pub size: u64,
}

impl Bytes {
    pub fn from_raw(start: u64, size: u64) -> Self {
        Bytes {
            start: Offset(start),
            size,
        }
    }

    pub fn end(&self) -> Offset {
        Offset(self.start.0.saturating_add(self.size))
    }
}

/// Conditions that stop decoding altogether. Everything else is rendered as best we can.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// EI_CLASS was not ELFCLASS64.
    UnsupportedClass(u8),

    /// The file header itself didn't fit in the buffer.
    Truncated {
        what: &'static str,
        offset: u64,
        needed: u64,
        available: u64,
    },

    /// A relocation section was found but we have no relocation type table for the
    /// machine.
    UnsupportedMachine(u16),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnsupportedClass(class) => {
                write!(f, "only 64-bit files are supported (EI_CLASS is {class})")
            }
            DecodeError::Truncated {
                what,
                offset,
                needed,
                available,
            } => write!(
                f,
                "{what} at offset {offset} needs {needed} bytes but the file has {available}"
            ),
            DecodeError::UnsupportedMachine(machine) => write!(
                f,
                "no relocation types are known for e_machine {machine} ({})",
                Field::Machine(*machine).name()
            ),
        }
    }
}

impl Error for DecodeError {}

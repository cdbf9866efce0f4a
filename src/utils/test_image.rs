//! Builds small ELF64 images for unit tests. Section 0 is always the null section,
//! sections added with `section` or `table` follow in order (so the first one is index
//! 1), and `.shstrtab` comes last.

const SHT_STRTAB: u32 = 3;

struct TestSegment {
    ptype: u32,
    flags: u32,
    vaddr: u64,
    size: u64,
}

struct TestSection {
    name: String,
    stype: u32,
    flags: u64,
    link: u32,
    info: u32,
    entry_size: u64,
    size: Option<u64>,
    data: Vec<u8>,
}

pub struct ImageBuilder {
    big_endian: bool,
    etype: u16,
    machine: u16,
    entry: u64,
    segments: Vec<TestSegment>,
    sections: Vec<TestSection>,
}

impl ImageBuilder {
    /// Little endian x86-64 relocatable file.
    pub fn new() -> Self {
        ImageBuilder {
            big_endian: false,
            etype: 1,
            machine: 62,
            entry: 0,
            segments: Vec::new(),
            sections: Vec::new(),
        }
    }

    pub fn big_endian(mut self) -> Self {
        self.big_endian = true;
        self
    }

    pub fn etype(mut self, etype: u16) -> Self {
        self.etype = etype;
        self
    }

    pub fn machine(mut self, machine: u16) -> Self {
        self.machine = machine;
        self
    }

    pub fn entry(mut self, entry: u64) -> Self {
        self.entry = entry;
        self
    }

    pub fn segment(mut self, ptype: u32, flags: u32, vaddr: u64, size: u64) -> Self {
        self.segments.push(TestSegment {
            ptype,
            flags,
            vaddr,
            size,
        });
        self
    }

    pub fn section(self, name: &str, stype: u32, data: Vec<u8>) -> Self {
        self.table(name, stype, 0, 0, data)
    }

    pub fn table(mut self, name: &str, stype: u32, entry_size: u64, link: u32, data: Vec<u8>) -> Self {
        self.sections.push(TestSection {
            name: name.to_string(),
            stype,
            flags: 0,
            link,
            info: 0,
            entry_size,
            size: None,
            data,
        });
        self
    }

    /// Sets sh_flags on the most recently added section.
    pub fn flags(mut self, flags: u64) -> Self {
        if let Some(section) = self.sections.last_mut() {
            section.flags = flags;
        }
        self
    }

    /// Overrides sh_size on the most recently added section.
    pub fn size(mut self, size: u64) -> Self {
        if let Some(section) = self.sections.last_mut() {
            section.size = Some(size);
        }
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = Writer {
            big_endian: self.big_endian,
            bytes: vec![0; 64],
        };

        let ph_offset = if self.segments.is_empty() { 0 } else { 64 };
        for segment in self.segments.iter() {
            out.word(segment.ptype);
            out.word(segment.flags);
            out.xword(0); // p_offset
            out.xword(segment.vaddr);
            out.xword(segment.vaddr); // p_paddr
            out.xword(segment.size);
            out.xword(segment.size);
            out.xword(0x1000);
        }

        let mut data_offsets = Vec::new();
        for section in self.sections.iter() {
            out.align(8);
            data_offsets.push(out.bytes.len() as u64);
            out.bytes.extend_from_slice(&section.data);
        }

        let mut names = vec![0u8];
        let mut name_offsets = Vec::new();
        for name in self
            .sections
            .iter()
            .map(|s| s.name.as_str())
            .chain(std::iter::once(".shstrtab"))
        {
            name_offsets.push(names.len() as u32);
            names.extend_from_slice(name.as_bytes());
            names.push(0);
        }
        out.align(8);
        let names_offset = out.bytes.len() as u64;
        out.bytes.extend_from_slice(&names);

        out.align(8);
        let section_offset = out.bytes.len() as u64;
        out.bytes.extend_from_slice(&[0; 64]);
        for (i, section) in self.sections.iter().enumerate() {
            out.word(name_offsets[i]);
            out.word(section.stype);
            out.xword(section.flags);
            out.xword(0); // sh_addr
            out.xword(data_offsets[i]);
            out.xword(section.size.unwrap_or(section.data.len() as u64));
            out.word(section.link);
            out.word(section.info);
            out.xword(1);
            out.xword(section.entry_size);
        }
        out.word(name_offsets[self.sections.len()]);
        out.word(SHT_STRTAB);
        out.xword(0);
        out.xword(0);
        out.xword(names_offset);
        out.xword(names.len() as u64);
        out.word(0);
        out.word(0);
        out.xword(1);
        out.xword(0);

        let num_sections = self.sections.len() as u16 + 2;
        let mut header = Writer {
            big_endian: self.big_endian,
            bytes: Vec::with_capacity(64),
        };
        header.bytes.extend_from_slice(&[0x7f, b'E', b'L', b'F']);
        header.bytes.push(2); // ELFCLASS64
        header.bytes.push(if self.big_endian { 2 } else { 1 });
        header.bytes.push(1); // EV_CURRENT
        header.bytes.extend_from_slice(&[0; 9]);
        header.half(self.etype);
        header.half(self.machine);
        header.word(1);
        header.xword(self.entry);
        header.xword(ph_offset);
        header.xword(section_offset);
        header.word(0);
        header.half(64);
        header.half(56);
        header.half(self.segments.len() as u16);
        header.half(64);
        header.half(num_sections);
        header.half(num_sections - 1);
        out.bytes[..64].copy_from_slice(&header.bytes);

        out.bytes
    }
}

/// Little endian Elf64_Sym.
pub fn symbol(name: u32, info: u8, other: u8, shndx: u16, value: u64, size: u64) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(24);
    bytes.extend_from_slice(&name.to_le_bytes());
    bytes.push(info);
    bytes.push(other);
    bytes.extend_from_slice(&shndx.to_le_bytes());
    bytes.extend_from_slice(&value.to_le_bytes());
    bytes.extend_from_slice(&size.to_le_bytes());
    bytes
}

/// Little endian Elf64_Rela.
pub fn rela(offset: u64, symbol: u32, rtype: u32, addend: i64) -> Vec<u8> {
    let mut bytes = rel(offset, symbol, rtype);
    bytes.extend_from_slice(&addend.to_le_bytes());
    bytes
}

/// Little endian Elf64_Rel.
pub fn rel(offset: u64, symbol: u32, rtype: u32) -> Vec<u8> {
    let info = ((symbol as u64) << 32) | rtype as u64;
    let mut bytes = Vec::with_capacity(16);
    bytes.extend_from_slice(&offset.to_le_bytes());
    bytes.extend_from_slice(&info.to_le_bytes());
    bytes
}

struct Writer {
    big_endian: bool,
    bytes: Vec<u8>,
}

impl Writer {
    fn align(&mut self, align: usize) {
        let len = (self.bytes.len() + align - 1) & !(align - 1);
        self.bytes.resize(len, 0);
    }

    fn half(&mut self, value: u16) {
        if self.big_endian {
            self.bytes.extend_from_slice(&value.to_be_bytes());
        } else {
            self.bytes.extend_from_slice(&value.to_le_bytes());
        }
    }

    fn word(&mut self, value: u32) {
        if self.big_endian {
            self.bytes.extend_from_slice(&value.to_be_bytes());
        } else {
            self.bytes.extend_from_slice(&value.to_le_bytes());
        }
    }

    fn xword(&mut self, value: u64) {
        if self.big_endian {
            self.bytes.extend_from_slice(&value.to_be_bytes());
        } else {
            self.bytes.extend_from_slice(&value.to_le_bytes());
        }
    }
}

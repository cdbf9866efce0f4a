//! Symbolic names for the numeric fields of an ELF file. Names are the ones used by
//! `<elf.h>`. When several names share a value they are all listed, joined by " | ", in
//! the order `<elf.h>` declares them. Values with no name render as "unknown(value)":
//! one odd field shouldn't prevent the rest of the file from being dumped.
use super::DecodeError;
use std::fmt;

const EM_X86_64: u16 = 62;
const EM_AARCH64: u16 = 183;
const EM_RISCV: u16 = 243;

// In declaration order, which is also the order they are rendered in.
const SECTION_FLAGS: [(u64, &str); 15] = [
    (1 << 0, "SHF_WRITE"),
    (1 << 1, "SHF_ALLOC"),
    (1 << 2, "SHF_EXECINSTR"),
    (1 << 4, "SHF_MERGE"),
    (1 << 5, "SHF_STRINGS"),
    (1 << 6, "SHF_INFO_LINK"),
    (1 << 7, "SHF_LINK_ORDER"),
    (1 << 8, "SHF_OS_NONCONFORMING"),
    (1 << 9, "SHF_GROUP"),
    (1 << 10, "SHF_TLS"),
    (1 << 11, "SHF_COMPRESSED"),
    (0x0ff00000, "SHF_MASKOS"),
    (0xf0000000, "SHF_MASKPROC"),
    (1 << 30, "SHF_ORDERED"),
    (1 << 31, "SHF_EXCLUDE"),
];

/// A numeric field that has a symbolic rendering. Relocation types are per-machine so
/// use Field::relocation to build those.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Field {
    /// EI_CLASS
    Class(u8),

    /// EI_DATA
    Data(u8),

    /// EI_VERSION
    IdentVersion(u8),

    /// EI_OSABI
    OsAbi(u8),

    /// e_type
    FileType(u16),

    /// e_machine
    Machine(u16),

    /// e_version
    Version(u32),

    /// p_type
    SegmentType(u32),

    /// p_flags, these are matched exactly rather than bit by bit.
    SegmentFlags(u32),

    /// sh_type
    SectionType(u32),

    /// sh_flags
    SectionFlags(u64),

    /// Low nibble of st_info.
    SymbolType(u8),

    /// High nibble of st_info.
    SymbolBinding(u8),

    /// st_other
    SymbolVisibility(u8),

    /// Low 32 bits of r_info for EM_X86_64.
    RelocationX86_64(u32),

    /// Low 32 bits of r_info for EM_AARCH64.
    RelocationAarch64(u32),

    /// Low 32 bits of r_info for EM_RISCV.
    RelocationRiscV(u32),
}

/// The rendering of a Field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Name {
    /// Name (or names) from `<elf.h>`.
    Known(&'static str),

    /// A bit mask: the names of every flag that was set plus whatever bits were left over.
    Flags {
        names: Vec<&'static str>,
        unknown: u64,
    },

    /// The value had no name.
    Unknown(u64),
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Name::Known(s) => write!(f, "{s}"),
            Name::Flags { names, unknown } => {
                write!(f, "{}", names.join(" | "))?;
                if *unknown != 0 {
                    if !names.is_empty() {
                        write!(f, " | ")?;
                    }
                    write!(f, "unknown({unknown})")?;
                }
                Ok(())
            }
            Name::Unknown(value) => write!(f, "unknown({value})"),
        }
    }
}

impl Field {
    /// Returns the relocation type field for a machine. Relocation numbering is specific
    /// to each architecture so there is nothing sensible to fall back to when the machine
    /// isn't one we know about.
    pub fn relocation(machine: u16, rtype: u32) -> Result<Field, DecodeError> {
        match machine {
            EM_X86_64 => Ok(Field::RelocationX86_64(rtype)),
            EM_AARCH64 => Ok(Field::RelocationAarch64(rtype)),
            EM_RISCV => Ok(Field::RelocationRiscV(rtype)),
            _ => Err(DecodeError::UnsupportedMachine(machine)),
        }
    }

    pub fn name(self) -> Name {
        let (value, name) = match self {
            Field::Class(v) => (v as u64, class(v)),
            Field::Data(v) => (v as u64, data(v)),
            Field::IdentVersion(v) => (v as u64, version(v as u32)),
            Field::OsAbi(v) => (v as u64, osabi(v)),
            Field::FileType(v) => (v as u64, file_type(v)),
            Field::Machine(v) => (v as u64, machine(v)),
            Field::Version(v) => (v as u64, version(v)),
            Field::SegmentType(v) => (v as u64, segment_type(v)),
            Field::SegmentFlags(v) => (v as u64, segment_flags(v)),
            Field::SectionType(v) => (v as u64, section_type(v)),
            Field::SectionFlags(v) => return section_flags(v),
            Field::SymbolType(v) => (v as u64, symbol_type(v)),
            Field::SymbolBinding(v) => (v as u64, symbol_binding(v)),
            Field::SymbolVisibility(v) => (v as u64, symbol_visibility(v)),
            Field::RelocationX86_64(v) => (v as u64, relocation_x86_64(v)),
            Field::RelocationAarch64(v) => (v as u64, relocation_aarch64(v)),
            Field::RelocationRiscV(v) => (v as u64, relocation_riscv(v)),
        };
        match name {
            Some(s) => Name::Known(s),
            None => Name::Unknown(value),
        }
    }
}

/// st_info packs the symbol type and binding together, they're rendered as
/// "type | binding".
pub fn symbol_info(info: u8) -> String {
    format!(
        "{} | {}",
        Field::SymbolType(info & 0xf).name(),
        Field::SymbolBinding(info >> 4).name()
    )
}

fn section_flags(flags: u64) -> Name {
    let mut names = Vec::new();
    let mut known = 0;
    for (bit, name) in SECTION_FLAGS {
        if flags & bit != 0 {
            names.push(name);
        }
        known |= bit;
    }
    Name::Flags {
        names,
        unknown: flags & !known,
    }
}

fn segment_flags(flags: u32) -> Option<&'static str> {
    match flags {
        0 => Some(""),
        1 => Some("PF_X"),
        2 => Some("PF_W"),
        3 => Some("PF_X | PF_W"),
        4 => Some("PF_R"),
        5 => Some("PF_X | PF_R"),
        6 => Some("PF_W | PF_R"),
        7 => Some("PF_X | PF_W | PF_R"),
        0x0ff00000 => Some("PF_MASKOS"),
        0xf0000000 => Some("PF_MASKPROC"),
        _ => None,
    }
}

fn class(value: u8) -> Option<&'static str> {
    let name = match value {
        0 => "ELFCLASSNONE",
        1 => "ELFCLASS32",
        2 => "ELFCLASS64",
        _ => return None,
    };
    Some(name)
}

fn data(value: u8) -> Option<&'static str> {
    let name = match value {
        0 => "ELFDATANONE",
        1 => "ELFDATA2LSB",
        2 => "ELFDATA2MSB",
        _ => return None,
    };
    Some(name)
}

fn version(value: u32) -> Option<&'static str> {
    let name = match value {
        0 => "EV_NONE",
        1 => "EV_CURRENT",
        _ => return None,
    };
    Some(name)
}

fn osabi(value: u8) -> Option<&'static str> {
    let name = match value {
        0 => "ELFOSABI_NONE | ELFOSABI_SYSV",
        1 => "ELFOSABI_HPUX",
        2 => "ELFOSABI_NETBSD",
        3 => "ELFOSABI_GNU | ELFOSABI_LINUX",
        6 => "ELFOSABI_SOLARIS",
        7 => "ELFOSABI_AIX",
        8 => "ELFOSABI_IRIX",
        9 => "ELFOSABI_FREEBSD",
        10 => "ELFOSABI_TRU64",
        11 => "ELFOSABI_MODESTO",
        12 => "ELFOSABI_OPENBSD",
        64 => "ELFOSABI_ARM_AEABI",
        97 => "ELFOSABI_ARM",
        255 => "ELFOSABI_STANDALONE",
        _ => return None,
    };
    Some(name)
}

fn file_type(value: u16) -> Option<&'static str> {
    let name = match value {
        0 => "ET_NONE",
        1 => "ET_REL",
        2 => "ET_EXEC",
        3 => "ET_DYN",
        4 => "ET_CORE",
        0xfe00 => "ET_LOOS",
        0xfeff => "ET_HIOS",
        0xff00 => "ET_LOPROC",
        0xffff => "ET_HIPROC",
        _ => return None,
    };
    Some(name)
}

fn machine(value: u16) -> Option<&'static str> {
    let name = match value {
        0 => "EM_NONE",
        1 => "EM_M32",
        2 => "EM_SPARC",
        3 => "EM_386",
        4 => "EM_68K",
        5 => "EM_88K",
        6 => "EM_IAMCU",
        7 => "EM_860",
        8 => "EM_MIPS",
        9 => "EM_S370",
        10 => "EM_MIPS_RS3_LE",
        15 => "EM_PARISC",
        17 => "EM_VPP500",
        18 => "EM_SPARC32PLUS",
        19 => "EM_960",
        20 => "EM_PPC",
        21 => "EM_PPC64",
        22 => "EM_S390",
        23 => "EM_SPU",
        36 => "EM_V800",
        37 => "EM_FR20",
        38 => "EM_RH32",
        39 => "EM_RCE",
        40 => "EM_ARM",
        41 => "EM_FAKE_ALPHA",
        42 => "EM_SH",
        43 => "EM_SPARCV9",
        44 => "EM_TRICORE",
        45 => "EM_ARC",
        46 => "EM_H8_300",
        47 => "EM_H8_300H",
        48 => "EM_H8S",
        49 => "EM_H8_500",
        50 => "EM_IA_64",
        51 => "EM_MIPS_X",
        52 => "EM_COLDFIRE",
        53 => "EM_68HC12",
        54 => "EM_MMA",
        55 => "EM_PCP",
        56 => "EM_NCPU",
        57 => "EM_NDR1",
        58 => "EM_STARCORE",
        59 => "EM_ME16",
        60 => "EM_ST100",
        61 => "EM_TINYJ",
        62 => "EM_X86_64",
        63 => "EM_PDSP",
        64 => "EM_PDP10",
        65 => "EM_PDP11",
        66 => "EM_FX66",
        67 => "EM_ST9PLUS",
        68 => "EM_ST7",
        69 => "EM_68HC16",
        70 => "EM_68HC11",
        71 => "EM_68HC08",
        72 => "EM_68HC05",
        73 => "EM_SVX",
        74 => "EM_ST19",
        75 => "EM_VAX",
        76 => "EM_CRIS",
        77 => "EM_JAVELIN",
        78 => "EM_FIREPATH",
        79 => "EM_ZSP",
        80 => "EM_MMIX",
        81 => "EM_HUANY",
        82 => "EM_PRISM",
        83 => "EM_AVR",
        84 => "EM_FR30",
        85 => "EM_D10V",
        86 => "EM_D30V",
        87 => "EM_V850",
        88 => "EM_M32R",
        89 => "EM_MN10300",
        90 => "EM_MN10200",
        91 => "EM_PJ",
        92 => "EM_OPENRISC",
        93 => "EM_ARC_COMPACT | EM_ARC_A5",
        94 => "EM_XTENSA",
        95 => "EM_VIDEOCORE",
        96 => "EM_TMM_GPP",
        97 => "EM_NS32K",
        98 => "EM_TPC",
        99 => "EM_SNP1K",
        100 => "EM_ST200",
        101 => "EM_IP2K",
        102 => "EM_MAX",
        103 => "EM_CR",
        104 => "EM_F2MC16",
        105 => "EM_MSP430",
        106 => "EM_BLACKFIN",
        107 => "EM_SE_C33",
        108 => "EM_SEP",
        109 => "EM_ARCA",
        110 => "EM_UNICORE",
        111 => "EM_EXCESS",
        112 => "EM_DXP",
        113 => "EM_ALTERA_NIOS2",
        114 => "EM_CRX",
        115 => "EM_XGATE",
        116 => "EM_C166",
        117 => "EM_M16C",
        118 => "EM_DSPIC30F",
        119 => "EM_CE",
        120 => "EM_M32C",
        131 => "EM_TSK3000",
        132 => "EM_RS08",
        133 => "EM_SHARC",
        134 => "EM_ECOG2",
        135 => "EM_SCORE7",
        136 => "EM_DSP24",
        137 => "EM_VIDEOCORE3",
        138 => "EM_LATTICEMICO32",
        139 => "EM_SE_C17",
        140 => "EM_TI_C6000",
        141 => "EM_TI_C2000",
        142 => "EM_TI_C5500",
        143 => "EM_TI_ARP32",
        144 => "EM_TI_PRU",
        160 => "EM_MMDSP_PLUS",
        161 => "EM_CYPRESS_M8C",
        162 => "EM_R32C",
        163 => "EM_TRIMEDIA",
        164 => "EM_QDSP6",
        165 => "EM_8051",
        166 => "EM_STXP7X",
        167 => "EM_NDS32",
        168 => "EM_ECOG1X",
        169 => "EM_MAXQ30",
        170 => "EM_XIMO16",
        171 => "EM_MANIK",
        172 => "EM_CRAYNV2",
        173 => "EM_RX",
        174 => "EM_METAG",
        175 => "EM_MCST_ELBRUS",
        176 => "EM_ECOG16",
        177 => "EM_CR16",
        178 => "EM_ETPU",
        179 => "EM_SLE9X",
        180 => "EM_L10M",
        181 => "EM_K10M",
        183 => "EM_AARCH64",
        185 => "EM_AVR32",
        186 => "EM_STM8",
        187 => "EM_TILE64",
        188 => "EM_TILEPRO",
        189 => "EM_MICROBLAZE",
        190 => "EM_CUDA",
        191 => "EM_TILEGX",
        192 => "EM_CLOUDSHIELD",
        193 => "EM_COREA_1ST",
        194 => "EM_COREA_2ND",
        195 => "EM_ARCV2",
        196 => "EM_OPEN8",
        197 => "EM_RL78",
        198 => "EM_VIDEOCORE5",
        199 => "EM_78KOR",
        200 => "EM_56800EX",
        201 => "EM_BA1",
        202 => "EM_BA2",
        203 => "EM_XCORE",
        204 => "EM_MCHP_PIC",
        205 => "EM_INTELGT",
        210 => "EM_KM32",
        211 => "EM_KMX32",
        212 => "EM_EMX16",
        213 => "EM_EMX8",
        214 => "EM_KVARC",
        215 => "EM_CDP",
        216 => "EM_COGE",
        217 => "EM_COOL",
        218 => "EM_NORC",
        219 => "EM_CSR_KALIMBA",
        220 => "EM_Z80",
        221 => "EM_VISIUM",
        222 => "EM_FT32",
        223 => "EM_MOXIE",
        224 => "EM_AMDGPU",
        243 => "EM_RISCV",
        247 => "EM_BPF",
        252 => "EM_CSKY",
        258 => "EM_LOONGARCH",
        0x9026 => "EM_ALPHA",
        _ => return None,
    };
    Some(name)
}

fn segment_type(value: u32) -> Option<&'static str> {
    let name = match value {
        0 => "PT_NULL",
        1 => "PT_LOAD",
        2 => "PT_DYNAMIC",
        3 => "PT_INTERP",
        4 => "PT_NOTE",
        5 => "PT_SHLIB",
        6 => "PT_PHDR",
        7 => "PT_TLS",
        0x60000000 => "PT_LOOS",
        0x6474e550 => "PT_GNU_EH_FRAME",
        0x6474e551 => "PT_GNU_STACK",
        0x6474e552 => "PT_GNU_RELRO",
        0x6474e553 => "PT_GNU_PROPERTY",
        0x6474e554 => "PT_GNU_SFRAME",
        0x6ffffffa => "PT_LOSUNW | PT_SUNWBSS",
        0x6ffffffb => "PT_SUNWSTACK",
        0x6fffffff => "PT_HISUNW | PT_HIOS",
        0x70000000 => "PT_LOPROC",
        0x7fffffff => "PT_HIPROC",
        _ => return None,
    };
    Some(name)
}

fn section_type(value: u32) -> Option<&'static str> {
    let name = match value {
        0 => "SHT_NULL",
        1 => "SHT_PROGBITS",
        2 => "SHT_SYMTAB",
        3 => "SHT_STRTAB",
        4 => "SHT_RELA",
        5 => "SHT_HASH",
        6 => "SHT_DYNAMIC",
        7 => "SHT_NOTE",
        8 => "SHT_NOBITS",
        9 => "SHT_REL",
        10 => "SHT_SHLIB",
        11 => "SHT_DYNSYM",
        14 => "SHT_INIT_ARRAY",
        15 => "SHT_FINI_ARRAY",
        16 => "SHT_PREINIT_ARRAY",
        17 => "SHT_GROUP",
        18 => "SHT_SYMTAB_SHNDX",
        19 => "SHT_RELR",
        0x60000000 => "SHT_LOOS",
        0x6ffffff5 => "SHT_GNU_ATTRIBUTES",
        0x6ffffff6 => "SHT_GNU_HASH",
        0x6ffffff7 => "SHT_GNU_LIBLIST",
        0x6ffffff8 => "SHT_CHECKSUM",
        0x6ffffffa => "SHT_LOSUNW | SHT_SUNW_move",
        0x6ffffffb => "SHT_SUNW_COMDAT",
        0x6ffffffc => "SHT_SUNW_syminfo",
        0x6ffffffd => "SHT_GNU_verdef",
        0x6ffffffe => "SHT_GNU_verneed",
        0x6fffffff => "SHT_GNU_versym | SHT_HISUNW | SHT_HIOS",
        0x70000000 => "SHT_LOPROC",
        0x7fffffff => "SHT_HIPROC",
        0x80000000 => "SHT_LOUSER",
        0x8fffffff => "SHT_HIUSER",
        _ => return None,
    };
    Some(name)
}

fn symbol_type(value: u8) -> Option<&'static str> {
    let name = match value {
        0 => "STT_NOTYPE",
        1 => "STT_OBJECT",
        2 => "STT_FUNC",
        3 => "STT_SECTION",
        4 => "STT_FILE",
        5 => "STT_COMMON",
        6 => "STT_TLS",
        10 => "STT_LOOS | STT_GNU_IFUNC",
        12 => "STT_HIOS",
        13 => "STT_LOPROC",
        15 => "STT_HIPROC",
        _ => return None,
    };
    Some(name)
}

fn symbol_binding(value: u8) -> Option<&'static str> {
    let name = match value {
        0 => "STB_LOCAL",
        1 => "STB_GLOBAL",
        2 => "STB_WEAK",
        10 => "STB_LOOS | STB_GNU_UNIQUE",
        12 => "STB_HIOS",
        13 => "STB_LOPROC",
        15 => "STB_HIPROC",
        _ => return None,
    };
    Some(name)
}

fn symbol_visibility(value: u8) -> Option<&'static str> {
    let name = match value {
        0 => "STV_DEFAULT",
        1 => "STV_INTERNAL",
        2 => "STV_HIDDEN",
        3 => "STV_PROTECTED",
        _ => return None,
    };
    Some(name)
}

fn relocation_x86_64(value: u32) -> Option<&'static str> {
    let name = match value {
        0 => "R_X86_64_NONE",
        1 => "R_X86_64_64",
        2 => "R_X86_64_PC32",
        3 => "R_X86_64_GOT32",
        4 => "R_X86_64_PLT32",
        5 => "R_X86_64_COPY",
        6 => "R_X86_64_GLOB_DAT",
        7 => "R_X86_64_JUMP_SLOT",
        8 => "R_X86_64_RELATIVE",
        9 => "R_X86_64_GOTPCREL",
        10 => "R_X86_64_32",
        11 => "R_X86_64_32S",
        12 => "R_X86_64_16",
        13 => "R_X86_64_PC16",
        14 => "R_X86_64_8",
        15 => "R_X86_64_PC8",
        16 => "R_X86_64_DTPMOD64",
        17 => "R_X86_64_DTPOFF64",
        18 => "R_X86_64_TPOFF64",
        19 => "R_X86_64_TLSGD",
        20 => "R_X86_64_TLSLD",
        21 => "R_X86_64_DTPOFF32",
        22 => "R_X86_64_GOTTPOFF",
        23 => "R_X86_64_TPOFF32",
        24 => "R_X86_64_PC64",
        25 => "R_X86_64_GOTOFF64",
        26 => "R_X86_64_GOTPC32",
        27 => "R_X86_64_GOT64",
        28 => "R_X86_64_GOTPCREL64",
        29 => "R_X86_64_GOTPC64",
        30 => "R_X86_64_GOTPLT64",
        31 => "R_X86_64_PLTOFF64",
        32 => "R_X86_64_SIZE32",
        33 => "R_X86_64_SIZE64",
        34 => "R_X86_64_GOTPC32_TLSDESC",
        35 => "R_X86_64_TLSDESC_CALL",
        36 => "R_X86_64_TLSDESC",
        37 => "R_X86_64_IRELATIVE",
        38 => "R_X86_64_RELATIVE64",
        41 => "R_X86_64_GOTPCRELX",
        42 => "R_X86_64_REX_GOTPCRELX",
        _ => return None,
    };
    Some(name)
}

fn relocation_aarch64(value: u32) -> Option<&'static str> {
    let name = match value {
        0 => "R_AARCH64_NONE",
        257 => "R_AARCH64_ABS64",
        258 => "R_AARCH64_ABS32",
        259 => "R_AARCH64_ABS16",
        260 => "R_AARCH64_PREL64",
        261 => "R_AARCH64_PREL32",
        262 => "R_AARCH64_PREL16",
        263 => "R_AARCH64_MOVW_UABS_G0",
        264 => "R_AARCH64_MOVW_UABS_G0_NC",
        265 => "R_AARCH64_MOVW_UABS_G1",
        266 => "R_AARCH64_MOVW_UABS_G1_NC",
        267 => "R_AARCH64_MOVW_UABS_G2",
        268 => "R_AARCH64_MOVW_UABS_G2_NC",
        269 => "R_AARCH64_MOVW_UABS_G3",
        270 => "R_AARCH64_MOVW_SABS_G0",
        271 => "R_AARCH64_MOVW_SABS_G1",
        272 => "R_AARCH64_MOVW_SABS_G2",
        273 => "R_AARCH64_LD_PREL_LO19",
        274 => "R_AARCH64_ADR_PREL_LO21",
        275 => "R_AARCH64_ADR_PREL_PG_HI21",
        276 => "R_AARCH64_ADR_PREL_PG_HI21_NC",
        277 => "R_AARCH64_ADD_ABS_LO12_NC",
        278 => "R_AARCH64_LDST8_ABS_LO12_NC",
        279 => "R_AARCH64_TSTBR14",
        280 => "R_AARCH64_CONDBR19",
        282 => "R_AARCH64_JUMP26",
        283 => "R_AARCH64_CALL26",
        284 => "R_AARCH64_LDST16_ABS_LO12_NC",
        285 => "R_AARCH64_LDST32_ABS_LO12_NC",
        286 => "R_AARCH64_LDST64_ABS_LO12_NC",
        287 => "R_AARCH64_MOVW_PREL_G0",
        288 => "R_AARCH64_MOVW_PREL_G0_NC",
        289 => "R_AARCH64_MOVW_PREL_G1",
        290 => "R_AARCH64_MOVW_PREL_G1_NC",
        291 => "R_AARCH64_MOVW_PREL_G2",
        292 => "R_AARCH64_MOVW_PREL_G2_NC",
        293 => "R_AARCH64_MOVW_PREL_G3",
        299 => "R_AARCH64_LDST128_ABS_LO12_NC",
        300 => "R_AARCH64_MOVW_GOTOFF_G0",
        301 => "R_AARCH64_MOVW_GOTOFF_G0_NC",
        302 => "R_AARCH64_MOVW_GOTOFF_G1",
        303 => "R_AARCH64_MOVW_GOTOFF_G1_NC",
        304 => "R_AARCH64_MOVW_GOTOFF_G2",
        305 => "R_AARCH64_MOVW_GOTOFF_G2_NC",
        306 => "R_AARCH64_MOVW_GOTOFF_G3",
        307 => "R_AARCH64_GOTREL64",
        308 => "R_AARCH64_GOTREL32",
        309 => "R_AARCH64_GOT_LD_PREL19",
        310 => "R_AARCH64_LD64_GOTOFF_LO15",
        311 => "R_AARCH64_ADR_GOT_PAGE",
        312 => "R_AARCH64_LD64_GOT_LO12_NC",
        313 => "R_AARCH64_LD64_GOTPAGE_LO15",
        512 => "R_AARCH64_TLSGD_ADR_PREL21",
        513 => "R_AARCH64_TLSGD_ADR_PAGE21",
        514 => "R_AARCH64_TLSGD_ADD_LO12_NC",
        515 => "R_AARCH64_TLSGD_MOVW_G1",
        516 => "R_AARCH64_TLSGD_MOVW_G0_NC",
        517 => "R_AARCH64_TLSLD_ADR_PREL21",
        518 => "R_AARCH64_TLSLD_ADR_PAGE21",
        519 => "R_AARCH64_TLSLD_ADD_LO12_NC",
        520 => "R_AARCH64_TLSLD_MOVW_G1",
        521 => "R_AARCH64_TLSLD_MOVW_G0_NC",
        522 => "R_AARCH64_TLSLD_LD_PREL19",
        523 => "R_AARCH64_TLSLD_MOVW_DTPREL_G2",
        524 => "R_AARCH64_TLSLD_MOVW_DTPREL_G1",
        525 => "R_AARCH64_TLSLD_MOVW_DTPREL_G1_NC",
        526 => "R_AARCH64_TLSLD_MOVW_DTPREL_G0",
        527 => "R_AARCH64_TLSLD_MOVW_DTPREL_G0_NC",
        528 => "R_AARCH64_TLSLD_ADD_DTPREL_HI12",
        529 => "R_AARCH64_TLSLD_ADD_DTPREL_LO12",
        530 => "R_AARCH64_TLSLD_ADD_DTPREL_LO12_NC",
        531 => "R_AARCH64_TLSLD_LDST8_DTPREL_LO12",
        532 => "R_AARCH64_TLSLD_LDST8_DTPREL_LO12_NC",
        533 => "R_AARCH64_TLSLD_LDST16_DTPREL_LO12",
        534 => "R_AARCH64_TLSLD_LDST16_DTPREL_LO12_NC",
        535 => "R_AARCH64_TLSLD_LDST32_DTPREL_LO12",
        536 => "R_AARCH64_TLSLD_LDST32_DTPREL_LO12_NC",
        537 => "R_AARCH64_TLSLD_LDST64_DTPREL_LO12",
        538 => "R_AARCH64_TLSLD_LDST64_DTPREL_LO12_NC",
        539 => "R_AARCH64_TLSIE_MOVW_GOTTPREL_G1",
        540 => "R_AARCH64_TLSIE_MOVW_GOTTPREL_G0_NC",
        541 => "R_AARCH64_TLSIE_ADR_GOTTPREL_PAGE21",
        542 => "R_AARCH64_TLSIE_LD64_GOTTPREL_LO12_NC",
        543 => "R_AARCH64_TLSIE_LD_GOTTPREL_PREL19",
        544 => "R_AARCH64_TLSLE_MOVW_TPREL_G2",
        545 => "R_AARCH64_TLSLE_MOVW_TPREL_G1",
        546 => "R_AARCH64_TLSLE_MOVW_TPREL_G1_NC",
        547 => "R_AARCH64_TLSLE_MOVW_TPREL_G0",
        548 => "R_AARCH64_TLSLE_MOVW_TPREL_G0_NC",
        549 => "R_AARCH64_TLSLE_ADD_TPREL_HI12",
        550 => "R_AARCH64_TLSLE_ADD_TPREL_LO12",
        551 => "R_AARCH64_TLSLE_ADD_TPREL_LO12_NC",
        552 => "R_AARCH64_TLSLE_LDST8_TPREL_LO12",
        553 => "R_AARCH64_TLSLE_LDST8_TPREL_LO12_NC",
        554 => "R_AARCH64_TLSLE_LDST16_TPREL_LO12",
        555 => "R_AARCH64_TLSLE_LDST16_TPREL_LO12_NC",
        556 => "R_AARCH64_TLSLE_LDST32_TPREL_LO12",
        557 => "R_AARCH64_TLSLE_LDST32_TPREL_LO12_NC",
        558 => "R_AARCH64_TLSLE_LDST64_TPREL_LO12",
        559 => "R_AARCH64_TLSLE_LDST64_TPREL_LO12_NC",
        560 => "R_AARCH64_TLSDESC_LD_PREL19",
        561 => "R_AARCH64_TLSDESC_ADR_PREL21",
        562 => "R_AARCH64_TLSDESC_ADR_PAGE21",
        563 => "R_AARCH64_TLSDESC_LD64_LO12",
        564 => "R_AARCH64_TLSDESC_ADD_LO12",
        565 => "R_AARCH64_TLSDESC_OFF_G1",
        566 => "R_AARCH64_TLSDESC_OFF_G0_NC",
        567 => "R_AARCH64_TLSDESC_LDR",
        568 => "R_AARCH64_TLSDESC_ADD",
        569 => "R_AARCH64_TLSDESC_CALL",
        570 => "R_AARCH64_TLSLE_LDST128_TPREL_LO12",
        571 => "R_AARCH64_TLSLE_LDST128_TPREL_LO12_NC",
        572 => "R_AARCH64_TLSLD_LDST128_DTPREL_LO12",
        573 => "R_AARCH64_TLSLD_LDST128_DTPREL_LO12_NC",
        1024 => "R_AARCH64_COPY",
        1025 => "R_AARCH64_GLOB_DAT",
        1026 => "R_AARCH64_JUMP_SLOT",
        1027 => "R_AARCH64_RELATIVE",
        1028 => "R_AARCH64_TLS_DTPMOD",
        1029 => "R_AARCH64_TLS_DTPREL",
        1030 => "R_AARCH64_TLS_TPREL",
        1031 => "R_AARCH64_TLSDESC",
        1032 => "R_AARCH64_IRELATIVE",
        _ => return None,
    };
    Some(name)
}

fn relocation_riscv(value: u32) -> Option<&'static str> {
    let name = match value {
        0 => "R_RISCV_NONE",
        1 => "R_RISCV_32",
        2 => "R_RISCV_64",
        3 => "R_RISCV_RELATIVE",
        4 => "R_RISCV_COPY",
        5 => "R_RISCV_JUMP_SLOT",
        6 => "R_RISCV_TLS_DTPMOD32",
        7 => "R_RISCV_TLS_DTPMOD64",
        8 => "R_RISCV_TLS_DTPREL32",
        9 => "R_RISCV_TLS_DTPREL64",
        10 => "R_RISCV_TLS_TPREL32",
        11 => "R_RISCV_TLS_TPREL64",
        16 => "R_RISCV_BRANCH",
        17 => "R_RISCV_JAL",
        18 => "R_RISCV_CALL",
        19 => "R_RISCV_CALL_PLT",
        20 => "R_RISCV_GOT_HI20",
        21 => "R_RISCV_TLS_GOT_HI20",
        22 => "R_RISCV_TLS_GD_HI20",
        23 => "R_RISCV_PCREL_HI20",
        24 => "R_RISCV_PCREL_LO12_I",
        25 => "R_RISCV_PCREL_LO12_S",
        26 => "R_RISCV_HI20",
        27 => "R_RISCV_LO12_I",
        28 => "R_RISCV_LO12_S",
        29 => "R_RISCV_TPREL_HI20",
        30 => "R_RISCV_TPREL_LO12_I",
        31 => "R_RISCV_TPREL_LO12_S",
        32 => "R_RISCV_TPREL_ADD",
        33 => "R_RISCV_ADD8",
        34 => "R_RISCV_ADD16",
        35 => "R_RISCV_ADD32",
        36 => "R_RISCV_ADD64",
        37 => "R_RISCV_SUB8",
        38 => "R_RISCV_SUB16",
        39 => "R_RISCV_SUB32",
        40 => "R_RISCV_SUB64",
        41 => "R_RISCV_GNU_VTINHERIT",
        42 => "R_RISCV_GNU_VTENTRY",
        43 => "R_RISCV_ALIGN",
        44 => "R_RISCV_RVC_BRANCH",
        45 => "R_RISCV_RVC_JUMP",
        46 => "R_RISCV_RVC_LUI",
        47 => "R_RISCV_GPREL_I",
        48 => "R_RISCV_GPREL_S",
        49 => "R_RISCV_TPREL_I",
        50 => "R_RISCV_TPREL_S",
        51 => "R_RISCV_RELAX",
        52 => "R_RISCV_SUB6",
        53 => "R_RISCV_SET6",
        54 => "R_RISCV_SET8",
        55 => "R_RISCV_SET16",
        56 => "R_RISCV_SET32",
        57 => "R_RISCV_32_PCREL",
        58 => "R_RISCV_IRELATIVE",
        _ => return None,
    };
    Some(name)
}

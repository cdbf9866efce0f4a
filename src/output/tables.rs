//! Helpers for building tables using the tabled crate.
use std::io::{self, Write};
use tabled::{
    builder::Builder,
    settings::{Alignment, Padding, Style, object::Columns},
};

struct TableCol {
    header: String,
    align: Alignment,
    help: String,
    fields: Vec<String>,
}

/// General table. They look like this:
/// type     flags        offset   vaddr   filesz   memsz   align      if titles
/// ----     -----        ------   -----   ------   -----   -----
/// PT_PHDR  PF_R             40   400040      2d8    2d8       8
/// PT_LOAD  PF_X | PF_R       0   400000     1234   1234    1000
///
/// type: the segment type                                             if explain
/// flags: executable, writeable, and/or readable
/// ...
pub struct TableBuilder {
    cols: Vec<TableCol>,
}

impl TableBuilder {
    pub fn new() -> TableBuilder {
        TableBuilder { cols: Vec::new() }
    }

    /// Left aligned column
    pub fn add_col_l(&mut self, header: &str, help: &str) {
        self.add_col(header, help, Alignment::left());
    }

    /// Right aligned column
    pub fn add_col_r(&mut self, header: &str, help: &str) {
        self.add_col(header, help, Alignment::right());
    }

    /// Typically add_field! is used instead.
    pub fn add_str_field(&mut self, header: &str, value: String) {
        if let Some(col) = self.cols.iter_mut().find(|c| c.header == header) {
            if value.is_empty() {
                // For some reason empty fields screw up tabled formatting.
                col.fields.push(" ".to_string());
            } else {
                col.fields.push(value);
            }
        } else {
            debug_assert!(false, "no {header} column");
        }
    }

    pub fn writeln(&self, mut out: impl Write, titles: bool, explain: bool) -> io::Result<()> {
        writeln!(out, "{}", self.table_str(titles))?;

        if explain {
            writeln!(out)?;
            writeln!(out, "{}", self.explain_str())?;
        }
        Ok(())
    }

    // We need to preserve add_col ordering so we can't use a HashMap
    // but O(n) should be fine for tables.
    fn add_col(&mut self, header: &str, help: &str, align: Alignment) {
        debug_assert!(!self.cols.iter().any(|c| c.header == header));
        self.cols.push(TableCol {
            header: header.to_string(),
            align,
            help: help.to_string(),
            fields: Vec::new(),
        });
    }

    fn table_str(&self, titles: bool) -> String {
        let height = self.cols.first().map(|c| c.fields.len()).unwrap_or(0);
        let mut builder = Builder::with_capacity(height + 2, self.cols.len());
        if titles {
            let names: Vec<String> = self.cols.iter().map(|c| c.header.to_string()).collect();
            let dashes: Vec<String> = names.iter().map(|s| "-".repeat(s.len())).collect();
            builder.push_record(&names);
            builder.push_record(&dashes);
        }
        for i in 0..height {
            let row: Vec<String> = self.cols.iter().map(|c| c.fields[i].clone()).collect();
            builder.push_record(&row);
        }

        let mut table = builder.build();
        for (i, col) in self.cols.iter().enumerate() {
            table.modify(Columns::one(i), col.align);
        }
        table.modify(Columns::first(), Padding::new(0, 1, 0, 0));
        table.with(Style::empty());

        table.to_string()
    }

    fn explain_str(&self) -> String {
        let explains: Vec<String> = self
            .cols
            .iter()
            .map(|c| format!("{}: {}", c.header, c.help))
            .collect();
        explains.join("\n")
    }
}

macro_rules! add_field {
    ($builder:ident, $header:literal, $value:expr) => {
        let s = format!("{}", $value);
        $builder.add_str_field($header, s);
    };
    ($builder:ident, $header:literal, $format:literal, $value:expr) => {
        let s = format!($format, $value);
        $builder.add_str_field($header, s);
    };
}
pub(crate) use add_field;

struct SimpleRow {
    name: String,
    value: String,
    help: String,
}

/// Table with just name and value columns. They look like this:
/// e_type        ET_DYN                    these have no titles
/// e_machine     EM_X86_64
///
/// e_type: type of ELF file                if explain
/// e_machine: CPU architecture
pub struct SimpleTableBuilder {
    rows: Vec<SimpleRow>,
}

impl SimpleTableBuilder {
    pub fn new() -> SimpleTableBuilder {
        SimpleTableBuilder { rows: Vec::new() }
    }

    /// Typically add_simple! is used instead.
    pub fn add_str_row(&mut self, name: &str, value: String, help: &str) {
        let value = if value.is_empty() {
            " ".to_string()
        } else {
            value
        };
        self.rows.push(SimpleRow {
            name: name.to_string(),
            value,
            help: help.to_string(),
        });
    }

    pub fn writeln(&self, mut out: impl Write, explain: bool) -> io::Result<()> {
        writeln!(out, "{}", self.table_str())?;

        if explain {
            writeln!(out)?;
            writeln!(out, "{}", self.explain_str())?;
        }
        Ok(())
    }

    fn table_str(&self) -> String {
        let mut builder = Builder::with_capacity(self.rows.len(), 2);
        for row in self.rows.iter() {
            builder.push_record([row.name.clone(), row.value.clone()]);
        }

        let mut table = builder.build();
        table.modify(Columns::one(0), Alignment::left());
        table.modify(Columns::one(1), Alignment::left());
        table.modify(Columns::first(), Padding::new(0, 1, 0, 0));
        table.with(Style::empty());

        table.to_string()
    }

    fn explain_str(&self) -> String {
        let explains: Vec<String> = self
            .rows
            .iter()
            .map(|r| format!("{}: {}", r.name, r.help))
            .collect();
        explains.join("\n")
    }
}

macro_rules! add_simple {
    ($builder:ident, $name:literal, $value:expr, $help:expr) => {
        let s = format!("{}", $value);
        $builder.add_str_row($name, s, $help);
    };
    ($builder:ident, $name:literal, $format:literal, $value:expr, $help:expr) => {
        let s = format!($format, $value);
        $builder.add_str_row($name, s, $help);
    };
}
pub(crate) use add_simple;

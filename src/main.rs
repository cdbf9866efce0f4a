mod elf;
mod loader;
mod output;
mod utils;
use clap::Parser;
use elf::{DecodeError, ElfFile};
use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

/// Dumps the headers, symbols, relocations, and string tables of a 64-bit ELF file.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// path to an ELF64 file
    file: PathBuf,

    /// write the JSON on a single line
    #[arg(long, conflicts_with = "table")]
    compact: bool,

    /// print tables instead of JSON
    #[arg(long)]
    table: bool,

    /// print column titles, requires --table
    #[arg(long, requires = "table")]
    titles: bool,

    /// print what each column means, requires --table
    #[arg(long, requires = "table")]
    explain: bool,

    /// don't print warnings about malformed files
    #[arg(short, long)]
    quiet: bool,
}

fn decode_exit_code(err: &(dyn Error + 'static)) -> i32 {
    match err.downcast_ref::<DecodeError>() {
        Some(DecodeError::UnsupportedClass(_)) => 6,
        _ => 7,
    }
}

fn write(cli: &Cli, file: &ElfFile) -> Result<(), Box<dyn Error>> {
    let mut out = BufWriter::new(io::stdout().lock());
    if cli.table {
        output::write_tables(&mut out, file, cli.titles, cli.explain)?;
    } else {
        output::write_json(&mut out, file, !cli.compact)?;
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    utils::set_quiet(cli.quiet);

    let image = match loader::load(&cli.file) {
        Ok(image) => image,
        Err(err) => {
            utils::error(&err.to_string());
            process::exit(err.exit_code());
        }
    };

    let file = match ElfFile::decode(&image) {
        Ok(file) => file,
        Err(err) => {
            utils::error(&format!("couldn't decode {}: {err}", cli.file.display()));
            process::exit(decode_exit_code(err.as_ref()));
        }
    };

    if let Err(err) = write(&cli, &file) {
        utils::error(&format!("couldn't write output: {err}"));
        process::exit(1);
    }
}

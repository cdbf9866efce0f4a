#[cfg(test)]
mod test_image;

#[cfg(test)]
pub use test_image::*;

use nu_ansi_term::Color;
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn require(predicate: bool, err: &str) -> Result<(), Box<dyn Error>> {
    if predicate { Ok(()) } else { Err(err.into()) }
}

/// Report something odd about the file. These go to stderr so they don't mess up the
/// document written to stdout.
pub fn warn(mesg: &str) {
    if !QUIET.load(Ordering::Relaxed) {
        eprintln!("{}", Color::Yellow.paint(mesg));
    }
}

/// Report why we're giving up. Unlike warnings these are never suppressed.
pub fn error(mesg: &str) {
    eprintln!("{}", Color::Red.paint(mesg));
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

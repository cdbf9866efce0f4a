//! Turns a path into the bytes the decoder works on.
use memmap2::Mmap;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// The contents of a file. Empty files can't be memory mapped so they get no map at all.
pub struct FileImage {
    map: Option<Mmap>,
}

impl Deref for FileImage {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match &self.map {
            Some(map) => map,
            None => &[],
        }
    }
}

#[derive(Debug)]
pub enum LoadError {
    Open(PathBuf, io::Error),
    Stat(PathBuf, io::Error),
    Read(PathBuf, io::Error),
}

impl LoadError {
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadError::Open(..) => 3,
            LoadError::Stat(..) => 4,
            LoadError::Read(..) => 5,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Open(path, err) => write!(f, "couldn't open {}: {err}", path.display()),
            LoadError::Stat(path, err) => write!(f, "couldn't stat {}: {err}", path.display()),
            LoadError::Read(path, err) => write!(f, "couldn't read {}: {err}", path.display()),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Open(_, err) | LoadError::Stat(_, err) | LoadError::Read(_, err) => Some(err),
        }
    }
}

pub fn load(path: &Path) -> Result<FileImage, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::Open(path.to_path_buf(), e))?;
    let metadata = file
        .metadata()
        .map_err(|e| LoadError::Stat(path.to_path_buf(), e))?;
    if !metadata.is_file() {
        let err = io::Error::new(io::ErrorKind::InvalidInput, "not a regular file");
        return Err(LoadError::Read(path.to_path_buf(), err));
    }
    if metadata.len() == 0 {
        return Ok(FileImage { map: None });
    }

    // This is unsafe because it has undefined behavior if the underlying file is
    // modified while the memory map is in use.
    let map = unsafe { Mmap::map(&file) }.map_err(|e| LoadError::Read(path.to_path_buf(), e))?;
    Ok(FileImage { map: Some(map) })
}

//! Reads corpus documents from disk.

use std::path::{Path, PathBuf};

use encoding::all::ISO_8859_1;
use encoding::{DecoderTrap, Encoding};
use log::{debug, trace};
use walkdir::WalkDir;

use crate::error::{CorpusError, Result};
use crate::tokenize::{tokenize, WordSequence};

pub fn filelist<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| CorpusError::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

pub fn get_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    ISO_8859_1
        .decode(&bytes, DecoderTrap::Strict)
        .map_err(|reason| CorpusError::Decode {
            path: path.to_path_buf(),
            reason: reason.into_owned(),
        })
}

fn is_text_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".txt"))
}

/// Tokenizes every non-empty `.txt` file below `dir`, in [`filelist`] order.
pub fn load_docs<P: AsRef<Path>>(dir: P) -> Result<Vec<WordSequence>> {
    let dir = dir.as_ref();
    let mut docs = Vec::new();

    for path in filelist(dir)? {
        if !is_text_file(&path) {
            trace!("skipping {}", path.display());
            continue;
        }
        let text = get_text(&path)?;
        if text.is_empty() {
            trace!("skipping empty {}", path.display());
            continue;
        }
        docs.push(tokenize(&text));
    }

    debug!("loaded {} documents from {}", docs.len(), dir.display());
    Ok(docs)
}

// src/loader/mod.rs
use std::fs;
use std::path::Path;

use encoding_rs::{Encoding, EUC_KR, UTF_8};
use scraper::Html;

use crate::utils::error::LoadError;

/// Encoding candidates, tried in order. DART filings are served either as
/// UTF-8 or as a legacy Korean codepage; the `cp949` and `euc-kr` labels both
/// resolve to the windows-949 decoder in encoding_rs, so one entry covers
/// both legacy forms.
const CANDIDATE_ENCODINGS: &[&Encoding] = &[UTF_8, EUC_KR];

/// Reads a markup document of unknown byte encoding and parses it into a
/// document tree.
///
/// The file is read exactly once; every candidate encoding is then tried
/// against the raw bytes with strict (non-lossy) decoding. The first
/// candidate that decodes cleanly wins and its text is parsed as HTML. If
/// every candidate is rejected the document is unreadable; the caller must
/// not silently guess an encoding.
pub fn load(path: &Path) -> Result<Html, LoadError> {
    let bytes = fs::read(path)?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());

    for encoding in CANDIDATE_ENCODINGS {
        match encoding.decode_without_bom_handling_and_without_replacement(&bytes) {
            Some(text) => {
                tracing::info!("Decoded {} as {}", path.display(), encoding.name());
                return Ok(Html::parse_document(&text));
            }
            None => {
                tracing::debug!(
                    "Candidate encoding {} rejected for {}",
                    encoding.name(),
                    path.display()
                );
            }
        }
    }

    tracing::warn!("All candidate encodings rejected for {}", path.display());
    Err(LoadError::UnreadableDocument(path.to_path_buf()))
}

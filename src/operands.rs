//! Provides the `contents_of` function, which reads one operand file into
//! memory, translating UTF16 files into UTF8.
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Return the entire contents of the file at `path` as a Vec<u8>.
pub fn contents_of(path: &Path) -> Result<Vec<u8>> {
    fs::read(path)
        .with_context(|| format!("Can't read file: {}", path.display()))
        .map(decode_if_utf16)
}

/// Decode UTF-16 to UTF-8 if we see a UTF-16 Byte Order Mark at the beginning of `candidate`.
/// Otherwise return `candidate` unchanged
fn decode_if_utf16(candidate: Vec<u8>) -> Vec<u8> {
    // Translate UTF16 to UTF8
    // Note: `decode_without_bom_handling` will change malformed sequences to the
    // Unicode REPLACEMENT CHARACTER. Should we report an error instead?
    //
    // "with BOM handling" means that the UTF-16 BOM is translated to a UTF-8 BOM
    //
    if let Some((enc, _)) = encoding_rs::Encoding::for_bom(&candidate) {
        if [encoding_rs::UTF_16LE, encoding_rs::UTF_16BE].contains(&enc) {
            let (translated, _had_malformed_sequences) =
                enc.decode_without_bom_handling(&candidate);
            return translated.into_owned().into_bytes();
        }
    }
    return candidate;
}

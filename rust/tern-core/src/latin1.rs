//! One byte per character text encoding shared by every primitive that turns
//! text into bytes.

use crate::error::PalError;

/// Append `text` encoded one byte per character. Characters above U+00FF
/// have no single-byte form.
pub fn encode_into(text: &str, out: &mut Vec<u8>) -> Result<(), PalError> {
    out.reserve(text.len());
    for (position, ch) in text.chars().enumerate() {
        let code = u32::from(ch);
        if code > 0xFF {
            return Err(PalError::type_error(format!(
                "character {:?} at position {} has no latin-1 encoding",
                ch, position
            )));
        }
        out.push(code as u8);
    }
    Ok(())
}

pub fn encode(text: &str) -> Result<Vec<u8>, PalError> {
    let mut out = Vec::with_capacity(text.len());
    encode_into(text, &mut out)?;
    Ok(out)
}

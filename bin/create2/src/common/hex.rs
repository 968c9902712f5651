//! Hex loading utilities

use std::{fs, io::Read, path::Path};

use alloy_primitives::{hex, Bytes};

use super::Result;

/// Load hex-encoded bytes from an argument or a file. If the file is a dash (-), read from stdin.
/// Priority: arg > file. Returns `None` if neither is provided.
pub fn load_hex(arg: Option<&str>, file: Option<&Path>) -> Result<Option<Bytes>> {
    let hex_string = if let Some(arg) = arg {
        arg.to_owned()
    } else if let Some(file) = file {
        if file.as_os_str() == "-" {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            fs::read_to_string(file)?
        }
    } else {
        return Ok(None);
    };

    decode_hex(&hex_string).map(|bytes| Some(bytes.into()))
}

/// Decode a hex string, with or without the `0x` prefix. Surrounding whitespace is ignored.
pub fn decode_hex(s: &str) -> Result<Vec<u8>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }
    Ok(hex::decode(s)?)
}

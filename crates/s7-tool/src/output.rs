//! Result rendering for the command-line tool.

use s7_address::{
    catalog, AccessRequest, AddressingMode, DecodeError, Dialect, MemoryAddress, OutputFormat,
};
use serde_json::json;
use std::io::{self, Write};

/// Writes command results in the configured format.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    /// Create a renderer for `format`.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// One decode outcome.
    pub fn decoded(
        &self,
        out: &mut impl Write,
        token: &str,
        result: &Result<(Dialect, MemoryAddress), DecodeError>,
    ) -> io::Result<()> {
        match (self.format, result) {
            (OutputFormat::Text, Ok((_, address))) => writeln!(out, "{token}: {address}"),
            (OutputFormat::Text, Err(e)) => writeln!(out, "{token}: ERROR: {e}"),
            (OutputFormat::Json, Ok((dialect, address))) => writeln!(
                out,
                "{}",
                json!({ "token": token, "dialect": dialect, "address": address })
            ),
            (OutputFormat::Json, Err(e)) => writeln!(
                out,
                "{}",
                json!({ "token": token, "error": e.to_string() })
            ),
        }
    }

    /// One validity check outcome.
    pub fn checked(&self, out: &mut impl Write, token: &str, valid: bool) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                let verdict = if valid { "valid" } else { "invalid" };
                writeln!(out, "{token}: {verdict}")
            }
            OutputFormat::Json => writeln!(out, "{}", json!({ "token": token, "valid": valid })),
        }
    }

    /// The data type catalog, aliases included.
    pub fn types(&self, out: &mut impl Write) -> io::Result<()> {
        for info in catalog() {
            let aliases: Vec<_> = info.data_type.aliases().collect();
            match self.format {
                OutputFormat::Text => {
                    write!(out, "{:<10} {:>8}  {}", info.name, info.width, info.description)?;
                    if !aliases.is_empty() {
                        write!(out, " [alias: {}]", aliases.join(", "))?;
                    }
                    writeln!(out)?;
                }
                OutputFormat::Json => writeln!(
                    out,
                    "{}",
                    json!({
                        "name": info.name,
                        "width": info.width.fixed(),
                        "description": info.description,
                        "aliases": aliases,
                    })
                )?,
            }
        }
        Ok(())
    }

    /// The memory regions and whether they can be decoded.
    pub fn modes(&self, out: &mut impl Write) -> io::Result<()> {
        for mode in AddressingMode::ALL {
            if mode == AddressingMode::Unknown {
                continue;
            }
            match self.format {
                OutputFormat::Text => {
                    let support = if mode.is_decodable() {
                        "supported"
                    } else {
                        "unsupported"
                    };
                    writeln!(
                        out,
                        "{:<17} {:<7} {}",
                        mode.to_string(),
                        mode.mnemonics().join(", "),
                        support
                    )?;
                }
                OutputFormat::Json => writeln!(
                    out,
                    "{}",
                    json!({
                        "mode": mode,
                        "mnemonics": mode.mnemonics(),
                        "area_code": mode.area_code(),
                        "decodable": mode.is_decodable(),
                    })
                )?,
            }
        }
        Ok(())
    }

    /// A planned access request.
    pub fn request(
        &self,
        out: &mut impl Write,
        token: &str,
        request: &AccessRequest,
    ) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(out, "{token}: {request}"),
            OutputFormat::Json => writeln!(
                out,
                "{}",
                json!({ "token": token, "request": request })
            ),
        }
    }
}

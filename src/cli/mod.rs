mod addons;
mod combine;
mod plan;

pub use addons::addons;
pub use combine::combine;
pub use plan::{plan, rates};

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{Read, Write};

/// Source name meaning standard input
pub const STDIN: &str = "-";

/// Renders command results as JSON.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub pretty: bool,
}

impl Output {
    pub fn write<T: Serialize>(&self, out: &mut impl Write, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, value)?;
        } else {
            serde_json::to_writer(&mut *out, value)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

/// Read a whole JSON document from a file path or from stdin.
pub fn read_source(source: &str) -> Result<String> {
    if source == STDIN {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(source).with_context(|| format!("Failed to read {source}"))
}

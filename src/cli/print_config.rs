//! `-P`: show the effective configuration

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::ConfigLoad;
use crate::error::Result;

/// Write `config: <tab-indented JSON>` and, if loading failed, the error
pub fn write_config(out: &mut impl Write, load: &ConfigLoad) -> Result<()> {
    write!(out, "config: ")?;

    let mut ser = Serializer::with_formatter(&mut *out, PrettyFormatter::with_indent(b"\t"));
    load.config.serialize(&mut ser)?;
    writeln!(out)?;

    if let Some(e) = &load.error {
        writeln!(out, "parse error: {}", e)?;
    }

    Ok(())
}

pub fn run(load: &ConfigLoad) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_config(&mut stdout, load)?;
    stdout.flush()?;
    Ok(())
}

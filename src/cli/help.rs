//! Usage text

use std::io::{self, Write};

use colored::Colorize;

use crate::config::{CONFIG_FILE, DEFAULT_DISTRO, DEFAULT_SSH_PATH, DEFAULT_WSL_PATH};
use crate::error::Result;

pub fn write_help(out: &mut impl Write, program: &str) -> io::Result<()> {
    writeln!(
        out,
        "{} {} [-options...] destination [command]",
        "Usage:".bold(),
        program
    )?;
    writeln!(out, "Refer to `man ssh` for more information about the ssh arguments.")?;
    writeln!(out)?;
    writeln!(
        out,
        "To configure bypassh, create \"{}\" in the same directory as the binary",
        CONFIG_FILE
    )?;
    writeln!(out, "with any of the following fields (default values shown):")?;
    writeln!(out)?;
    writeln!(out, "{{")?;
    writeln!(out, "  // The target WSL2 distro")?;
    writeln!(out, "  \"distro\":   {},", json_string(DEFAULT_DISTRO))?;
    writeln!(out)?;
    writeln!(out, "  // Path to the SSH binary inside WSL")?;
    writeln!(out, "  \"ssh_path\": {},", json_string(DEFAULT_SSH_PATH))?;
    writeln!(out)?;
    writeln!(out, "  // Path to the WSL binary in Windows")?;
    writeln!(out, "  \"wsl_path\": {}", json_string(DEFAULT_WSL_PATH))?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(
        out,
        "With the default Ubuntu distro no configuration is needed. Use `-P` to"
    )?;
    writeln!(
        out,
        "print the effective configuration and any error met while parsing it."
    )?;
    Ok(())
}

fn json_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

pub fn run(program: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_help(&mut stdout, program)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_config_fields() {
        let mut out = Vec::new();
        write_help(&mut out, "bypassh").unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("bypassh [-options...] destination [command]"));
        assert!(text.contains(CONFIG_FILE));
        assert!(text.contains(r#""distro":   "Ubuntu","#));
        assert!(text.contains(r#""wsl_path": "C:\\Windows\\system32\\wsl.exe""#));
    }
}

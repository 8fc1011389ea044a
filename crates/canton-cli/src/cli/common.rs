//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use canton::FlagSpec;

/// Load a flag config from YAML, or the built-in defaults when no path is given.
///
/// Keys left out of the file keep their default values. The result is
/// validated before it is returned.
pub fn load_spec(path: Option<&Path>) -> Result<FlagSpec> {
    let spec = match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            let spec = parse_spec(&content)
                .with_context(|| format!("failed to parse config {}", path.display()))?;
            debug!(path = %path.display(), "loaded flag config");
            spec
        }
        None => FlagSpec::default(),
    };

    spec.validate()?;
    Ok(spec)
}

/// Parse a YAML flag config. An empty document yields the defaults.
pub fn parse_spec(content: &str) -> Result<FlagSpec> {
    if content.trim().is_empty() {
        return Ok(FlagSpec::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Whether `path` means stdin/stdout.
pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Write `content` to `path`, or to stdout for `-`.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if is_stdio(path) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes()).context("failed to write to stdout")?;
        stdout.flush().context("failed to flush stdout")?;
    } else {
        fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
}

/// Read `path`, or stdin for `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if is_stdio(path) {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("failed to read from stdin")?;
        Ok(content)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

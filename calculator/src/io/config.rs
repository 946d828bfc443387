//! Calculator configuration stored in `calculator.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::number::Number;
use crate::core::operation::Operation;

/// Config file name looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "calculator.toml";

/// Left and right operand of a binary operation (a two-element TOML array).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Operands(pub Number, pub Number);

impl Operands {
    fn ints(a: i64, b: i64) -> Self {
        Self(Number::Int(a), Number::Int(b))
    }
}

/// Calculator configuration (TOML).
///
/// Every field is optional; a missing file or missing table yields the
/// defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CalculatorConfig {
    pub demo: DemoConfig,
}

/// Operands used by the demo, one pair per operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub add: Operands,
    pub subtract: Operands,
    pub multiply: Operands,
    pub divide: Operands,
    pub power: Operands,
    pub modulo: Operands,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            add: Operands::ints(5, 3),
            subtract: Operands::ints(5, 3),
            multiply: Operands::ints(5, 3),
            divide: Operands::ints(6, 3),
            power: Operands::ints(2, 3),
            modulo: Operands::ints(5, 2),
        }
    }
}

impl DemoConfig {
    pub fn operands(&self, op: Operation) -> Operands {
        match op {
            Operation::Add => self.add,
            Operation::Subtract => self.subtract,
            Operation::Multiply => self.multiply,
            Operation::Divide => self.divide,
            Operation::Power => self.power,
            Operation::Modulo => self.modulo,
        }
    }
}

impl CalculatorConfig {
    pub fn validate(&self) -> Result<()> {
        for op in Operation::ALL {
            let Operands(_, rhs) = self.demo.operands(op);
            if op.rejects_zero_divisor() && rhs.is_zero() {
                return Err(anyhow!("demo.{op} divisor must be non-zero"));
            }
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `CalculatorConfig::default()`.
pub fn load_config(path: &Path) -> Result<CalculatorConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = CalculatorConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CalculatorConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &CalculatorConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

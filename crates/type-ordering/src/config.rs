//! Configuration for rendering the relation table

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::domain::errors::OrderingError;

/// Narrowest line a wrapped literal may use
pub const MIN_LINE_WIDTH: usize = 40;

/// Target of the generated artifact
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `var <table> = [256]<enum>{...}`
    #[default]
    Go,
    /// `pub static <TABLE>: [<Enum>; 256] = [...];`
    Rust,
    /// Array of relation names
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Go => "go",
            OutputFormat::Rust => "rust",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = OrderingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "go" => Ok(OutputFormat::Go),
            "rust" | "rs" => Ok(OutputFormat::Rust),
            "json" => Ok(OutputFormat::Json),
            other => Err(OrderingError::UnknownFormat(other.to_string())),
        }
    }
}

/// Render configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output language
    pub format: OutputFormat,
    /// Name of the relation enumeration in the target language
    pub enum_name: String,
    /// Identifier of the generated array
    pub table_name: String,
    /// Go package clause, omitted when `None`
    pub package: Option<String>,
    /// Wrap the literal before this column
    pub max_line_width: usize,
    /// Emit the "generated, do not edit" banner
    pub emit_header: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Go,
            enum_name: "typesRelation".to_string(),
            table_name: "typesRelations".to_string(),
            package: None,
            max_line_width: 80,
            emit_header: true,
        }
    }
}

impl RenderConfig {
    /// Parse a JSON config; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, OrderingError> {
        let config: RenderConfig = serde_json::from_str(json)
            .map_err(|e| OrderingError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, OrderingError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            OrderingError::InvalidConfig(format!("{}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), OrderingError> {
        check_identifier("enum_name", &self.enum_name)?;
        check_identifier("table_name", &self.table_name)?;
        if let Some(package) = &self.package {
            check_identifier("package", package)?;
        }
        if self.max_line_width < MIN_LINE_WIDTH {
            return Err(OrderingError::InvalidConfig(format!(
                "max_line_width {} < {}",
                self.max_line_width, MIN_LINE_WIDTH
            )));
        }
        Ok(())
    }
}

fn check_identifier(field: &str, value: &str) -> Result<(), OrderingError> {
    let mut chars = value.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if !valid {
        return Err(OrderingError::InvalidConfig(format!(
            "{} is not an identifier: {:?}",
            field, value
        )));
    }
    Ok(())
}

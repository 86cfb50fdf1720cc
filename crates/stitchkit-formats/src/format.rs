//! Export format selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use stitchkit_core::UnsupportedFormatError;

/// Output formats the encoders can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Tajima DST binary
    Dst,
    /// EXP binary
    Exp,
    /// SVG preview
    Svg,
    /// G-code program
    Gcode,
}

impl ExportFormat {
    /// Every supported format
    pub const ALL: [ExportFormat; 4] = [Self::Dst, Self::Exp, Self::Svg, Self::Gcode];

    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Dst => "dst",
            Self::Exp => "exp",
            Self::Svg => "svg",
            Self::Gcode => "gcode",
        }
    }

    /// MIME type handed to file-save collaborators
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Dst | Self::Exp => "application/octet-stream",
            Self::Svg => "image/svg+xml",
            Self::Gcode => "text/plain",
        }
    }

    /// Whether the encoded output is binary
    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Dst | Self::Exp)
    }

    /// File name for a design exported in this format
    pub fn file_name(&self, design_name: &str) -> String {
        format!("{}.{}", design_name, self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = UnsupportedFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dst" => Ok(Self::Dst),
            "exp" => Ok(Self::Exp),
            "svg" => Ok(Self::Svg),
            "gcode" => Ok(Self::Gcode),
            _ => Err(UnsupportedFormatError::new(s)),
        }
    }
}

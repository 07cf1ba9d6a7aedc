use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeTone {
    Destructive,
    SeverityHigh,
    Warning,
    Success,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
}

impl AccentColor {
    pub const fn ansi_code(self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Orange => "\x1b[38;5;208m",
            Self::Yellow => "\x1b[33m",
            Self::Green => "\x1b[32m",
            Self::Blue => "\x1b[34m",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeIcon {
    AlertTriangle,
    CheckCircle,
    Info,
}

impl BadgeIcon {
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::AlertTriangle => "⚠️",
            Self::CheckCircle => "✅",
            Self::Info => "ℹ️",
        }
    }
}

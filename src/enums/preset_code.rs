use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetCode {
    SqlInjection,
    Xss,
    HardcodedSecret,
    MissingAuth,
}

impl PresetCode {
    pub const ALL: [Self; 4] = [Self::SqlInjection, Self::Xss, Self::HardcodedSecret, Self::MissingAuth];

    pub const fn slug(self) -> &'static str {
        match self {
            Self::SqlInjection => "sql-injection",
            Self::Xss => "xss",
            Self::HardcodedSecret => "hardcoded-secret",
            Self::MissingAuth => "missing-auth",
        }
    }
}

use serde::Serialize;
use crate::enums::preset_code::PresetCode;

/// A built-in example snippet used to demonstrate the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub code: PresetCode,
    pub title: &'static str,
    pub snippet: &'static str,
    pub rationale: &'static str,
}

pub static PRESETS: [Preset; 4] = [
    Preset {
        code: PresetCode::SqlInjection,
        title: "SQL Injection",
        snippet: r#"db.query("SELECT * FROM users WHERE email = '" + email + "'")"#,
        rationale: "User input in SQL query",
    },
    Preset {
        code: PresetCode::Xss,
        title: "XSS Vulnerability",
        snippet: r#"document.getElementById("output").innerHTML = userComment"#,
        rationale: "Unsanitized HTML injection",
    },
    Preset {
        code: PresetCode::HardcodedSecret,
        title: "Hardcoded Secret",
        snippet: r#"const API_KEY = "sk_live_1234567890abcdef""#,
        rationale: "Exposed API key in code",
    },
    Preset {
        code: PresetCode::MissingAuth,
        title: "Missing Authentication",
        snippet: r#"app.get("/admin/users", (req, res) => { /* no auth check */ })"#,
        rationale: "No authentication check",
    },
];

impl Preset {
    pub fn find(code: PresetCode) -> &'static Self {
        match code {
            PresetCode::SqlInjection => &PRESETS[0],
            PresetCode::Xss => &PRESETS[1],
            PresetCode::HardcodedSecret => &PRESETS[2],
            PresetCode::MissingAuth => &PRESETS[3],
        }
    }
}

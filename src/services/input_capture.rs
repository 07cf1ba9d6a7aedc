use crate::config::constants::DEFAULT_INPUT;
use crate::enums::preset_code::PresetCode;
use crate::structs::preset::Preset;

/// Holds the text the user wants analyzed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputCapture {
    text: String,
}

impl Default for InputCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl InputCapture {
    pub fn new() -> Self {
        Self {
            text: DEFAULT_INPUT.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text unconditionally; validation happens at trigger time.
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.text = value.into();
    }

    pub fn load_preset(&mut self, code: PresetCode) -> &'static Preset {
        let preset = Preset::find(code);
        self.text = preset.snippet.to_string();
        preset
    }

    pub fn load_default_example(&mut self) {
        self.text = DEFAULT_INPUT.to_string();
    }

    /// Whether the analyze trigger should be enabled.
    pub fn can_trigger(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

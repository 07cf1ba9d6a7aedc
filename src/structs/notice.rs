use serde::{Deserialize, Serialize};
use crate::config::constants::{
    NOTICE_COMPLETE_TITLE, NOTICE_EMPTY_DESCRIPTION, NOTICE_EMPTY_TITLE, NOTICE_FAILED_GENERIC,
    NOTICE_FAILED_TITLE,
};
use crate::enums::notice_variant::NoticeVariant;

/// A transient, toast-style status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn new(title: &str, description: &str, variant: NoticeVariant) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant,
        }
    }

    pub fn empty_input() -> Self {
        Self::new(NOTICE_EMPTY_TITLE, NOTICE_EMPTY_DESCRIPTION, NoticeVariant::Destructive)
    }

    pub fn analysis_complete(severity: &str) -> Self {
        Self::new(
            NOTICE_COMPLETE_TITLE,
            &format!("Found {severity} severity issue"),
            NoticeVariant::Default,
        )
    }

    pub fn analysis_failed(message: &str) -> Self {
        let description = if message.trim().is_empty() { NOTICE_FAILED_GENERIC } else { message };
        Self::new(NOTICE_FAILED_TITLE, description, NoticeVariant::Destructive)
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

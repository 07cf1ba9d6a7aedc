use serde::Serialize;
use crate::enums::badge_style::{AccentColor, BadgeIcon, BadgeTone};
use crate::enums::severity::Severity;

/// Display attributes for a severity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityBadge {
    pub severity: Severity,
    pub tone: BadgeTone,
    pub label: &'static str,
    pub accent: AccentColor,
    pub icon: BadgeIcon,
}

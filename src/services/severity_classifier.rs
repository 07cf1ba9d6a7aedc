use std::collections::HashMap;
use once_cell::sync::Lazy;
use crate::enums::badge_style::{AccentColor, BadgeIcon, BadgeTone};
use crate::enums::cvss_bucket::CvssBucket;
use crate::enums::severity::Severity;
use crate::structs::severity_badge::SeverityBadge;

static BADGES: Lazy<HashMap<&'static str, SeverityBadge>> = Lazy::new(|| {
    [
        (Severity::Critical, BadgeTone::Destructive, "Critical", AccentColor::Red, BadgeIcon::AlertTriangle),
        (Severity::High, BadgeTone::SeverityHigh, "High", AccentColor::Orange, BadgeIcon::AlertTriangle),
        (Severity::Medium, BadgeTone::Warning, "Medium", AccentColor::Yellow, BadgeIcon::AlertTriangle),
        (Severity::Low, BadgeTone::Success, "Low", AccentColor::Green, BadgeIcon::CheckCircle),
        (Severity::Info, BadgeTone::Info, "Info", AccentColor::Blue, BadgeIcon::Info),
    ]
    .into_iter()
    .map(|(severity, tone, label, accent, icon)| {
        (severity.key(), SeverityBadge { severity, tone, label, accent, icon })
    })
    .collect()
});

pub struct SeverityClassifier;

impl SeverityClassifier {
    /// Badge for a severity label. Unknown or missing labels get the MEDIUM badge.
    pub fn classify(severity: Option<&str>) -> SeverityBadge {
        severity
            .map(str::to_uppercase)
            .and_then(|key| BADGES.get(key.as_str()).copied())
            .unwrap_or_else(Self::default_badge)
    }

    pub fn badge(severity: Severity) -> SeverityBadge {
        BADGES
            .get(severity.key())
            .copied()
            .unwrap_or_else(Self::default_badge)
    }

    /// Score wording, independent of [`classify`](Self::classify). The two may disagree.
    pub fn cvss_bucket(score: f64) -> CvssBucket {
        CvssBucket::from_score(score)
    }

    fn default_badge() -> SeverityBadge {
        SeverityBadge {
            severity: Severity::Medium,
            tone: BadgeTone::Warning,
            label: "Medium",
            accent: AccentColor::Yellow,
            icon: BadgeIcon::AlertTriangle,
        }
    }
}

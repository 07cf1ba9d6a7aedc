use std::io::Write;
use crate::enums::notice_variant::NoticeVariant;
use crate::structs::notice::Notice;
use crate::traits::notifier::Notifier;

/// Prints notices to stderr, toast style.
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn format(notice: &Notice) -> String {
        let icon = match notice.variant {
            NoticeVariant::Default => "🔔",
            NoticeVariant::Destructive => "🚫",
        };
        format!("{icon} {}: {}", notice.title, notice.description)
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "\r\x1b[K{}", Self::format(&notice));
    }
}

/// Routes notices through the `log` facade instead of printing them.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.variant {
            NoticeVariant::Default => log::info!("🔔 {}: {}", notice.title, notice.description),
            NoticeVariant::Destructive => log::warn!("🚫 {}: {}", notice.title, notice.description),
        }
    }
}

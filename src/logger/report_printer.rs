use std::fmt::Write;
use terminal_size::{terminal_size, Width};
use crate::config::constants::REPORT_MAX_WIDTH;
use crate::structs::report::{Report, ReportSection};

const RESET: &str = "\x1b[0m";

pub struct ReportPrinter;

impl ReportPrinter {
    pub fn print(report: &Report, color: bool) {
        print!("{}", Self::format(report, color, Self::rule_width()));
    }

    fn rule_width() -> usize {
        terminal_size()
            .map_or(REPORT_MAX_WIDTH, |(Width(width), _)| usize::from(width))
            .min(REPORT_MAX_WIDTH)
    }

    pub fn format(report: &Report, color: bool, width: usize) -> String {
        let rule = "━".repeat(width);
        let badge = &report.header.badge;
        let label = if color {
            format!("{}[{}]{RESET}", badge.accent.ansi_code(), badge.label)
        } else {
            format!("[{}]", badge.label)
        };

        let mut out = String::new();
        let _ = writeln!(out, "\n🛡️  AI Analysis Results");
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "{} {} {}", badge.icon.glyph(), report.header.title, label);
        let _ = writeln!(out, "📊 CVSS Score: {}", report.score.annotation());

        for section in &report.sections {
            match section {
                ReportSection::RiskExplanation(text) => {
                    let _ = writeln!(out, "\n{text}");
                }
                ReportSection::SecureFix(fix) => {
                    let _ = writeln!(out, "\n✅ Secure Fix");
                    for line in fix.lines() {
                        let _ = writeln!(out, "    {line}");
                    }
                }
                ReportSection::ImmediateActions(actions) => {
                    let _ = writeln!(out, "\n🚨 Immediate Actions");
                    for action in actions {
                        let _ = writeln!(out, "  • {action}");
                    }
                }
                ReportSection::AttackScenario(scenario) => {
                    let _ = writeln!(out, "\n⚔️  Attack Scenario");
                    let _ = writeln!(out, "  {scenario}");
                }
            }
        }

        let _ = writeln!(out, "{rule}");
        out
    }
}

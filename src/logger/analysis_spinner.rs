use std::future::Future;
use std::io::Write;
use std::time::{Duration, Instant};
use crate::config::constants::SPINNER_INTERVAL_MS;
use crate::enums::analysis_outcome::AnalysisOutcome;
use crate::services::severity_classifier::SeverityClassifier;

const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Redraws a stderr status line for as long as an analysis future is pending.
///
/// The spinner never outlives the request: it is polled alongside the
/// analysis in the same task and stops the moment the outcome is ready.
pub struct AnalysisSpinner {
    label: String,
    interval: Duration,
}

impl AnalysisSpinner {
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_interval(label, Duration::from_millis(SPINNER_INTERVAL_MS))
    }

    pub fn with_interval(label: impl Into<String>, interval: Duration) -> Self {
        Self {
            label: label.into(),
            interval,
        }
    }

    /// Awaits `analysis`, then replaces the spinner line with a one-line summary.
    pub async fn run<F>(&self, analysis: F) -> AnalysisOutcome
    where
        F: Future<Output = AnalysisOutcome>,
    {
        let (outcome, _) = self.drive(analysis, |line| Self::write_line(&format!("\r{line}"))).await;

        match Self::summary(&outcome) {
            Some(summary) => Self::write_line(&format!("\r\x1b[K{summary}\n")),
            None => Self::write_line("\r\x1b[K"),
        }
        outcome
    }

    async fn drive<F, D>(&self, analysis: F, mut draw: D) -> (AnalysisOutcome, usize)
    where
        F: Future<Output = AnalysisOutcome>,
        D: FnMut(&str),
    {
        tokio::pin!(analysis);
        let started = Instant::now();
        let mut ticker = tokio::time::interval(self.interval);
        let mut frames = 0;

        loop {
            tokio::select! {
                outcome = &mut analysis => return (outcome, frames),
                _ = ticker.tick() => {
                    draw(&self.frame_line(frames, started.elapsed()));
                    frames += 1;
                }
            }
        }
    }

    fn frame_line(&self, frame: usize, elapsed: Duration) -> String {
        format!(
            "{} {} {:.1}s ",
            FRAMES[frame % FRAMES.len()],
            self.label,
            elapsed.as_secs_f64()
        )
    }

    fn summary(outcome: &AnalysisOutcome) -> Option<String> {
        match outcome {
            AnalysisOutcome::Completed(result) => {
                let badge = SeverityClassifier::classify(result.severity.as_deref());
                Some(format!("✅ Analysis complete: {} severity", badge.label))
            }
            AnalysisOutcome::Fallback { error, .. } => Some(format!(
                "❌ Live analysis unavailable ({}), showing fallback result",
                error.message()
            )),
            AnalysisOutcome::Busy | AnalysisOutcome::EmptyInput => None,
        }
    }

    fn write_line(text: &str) {
        let mut stderr = std::io::stderr();
        let _ = stderr.write_all(text.as_bytes());
        let _ = stderr.flush();
    }
}

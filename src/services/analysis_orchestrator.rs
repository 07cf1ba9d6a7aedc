use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use chrono::Utc;
use uuid::Uuid;
use crate::config::constants::UNKNOWN_SEVERITY;
use crate::enums::analysis_outcome::AnalysisOutcome;
use crate::enums::analysis_phase::AnalysisPhase;
use crate::enums::service_error::ServiceError;
use crate::services::report_renderer::ReportRenderer;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::request_defaults::RequestDefaults;
use crate::structs::notice::Notice;
use crate::structs::report::Report;
use crate::structs::widget_state::WidgetState;
use crate::traits::analysis_service::AnalysisService;
use crate::traits::notifier::Notifier;

/// Owns the analysis request lifecycle and the currently displayed result.
///
/// Triggers are strictly serialized: while one request is in flight every
/// other trigger returns [`AnalysisOutcome::Busy`] without touching the
/// service. A trigger with non-empty input always ends with a result on
/// display, falling back to a canned finding when the service fails.
pub struct AnalysisOrchestrator<S, N> {
    service: S,
    notifier: N,
    defaults: RequestDefaults,
    busy: AtomicBool,
    state: Mutex<DisplayState>,
}

#[derive(Default)]
struct DisplayState {
    current: Option<AnalysisResult>,
    results_visible: bool,
    resolved_at: Option<chrono::DateTime<Utc>>,
}

/// Holds the busy flag for the duration of one trigger and clears it on drop.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl<S: AnalysisService, N: Notifier> AnalysisOrchestrator<S, N> {
    pub fn new(service: S, notifier: N, defaults: RequestDefaults) -> Self {
        Self {
            service,
            notifier,
            defaults,
            busy: AtomicBool::new(false),
            state: Mutex::new(DisplayState::default()),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn phase(&self) -> AnalysisPhase {
        self.snapshot().phase()
    }

    pub fn snapshot(&self) -> WidgetState {
        let state = self.lock_state();
        WidgetState {
            busy: self.is_busy(),
            results_visible: state.results_visible,
            current: state.current.clone(),
            resolved_at: state.resolved_at,
        }
    }

    /// Report for whatever is currently displayed, if anything.
    pub fn report(&self) -> Option<Report> {
        let state = self.lock_state();
        state
            .current
            .as_ref()
            .and_then(|result| ReportRenderer::render(result, state.results_visible))
    }

    pub async fn run_analysis(&self, current_text: &str) -> AnalysisOutcome {
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            log::debug!("⏳ Analysis already in flight, ignoring trigger");
            return AnalysisOutcome::Busy;
        };

        if current_text.trim().is_empty() {
            log::warn!("⚠️ Refusing to analyze empty input");
            self.notifier.notify(Notice::empty_input());
            return AnalysisOutcome::EmptyInput;
        }

        self.lock_state().results_visible = false;

        let request_id = Uuid::new_v4();
        let request = AnalysisRequest::for_code(current_text, &self.defaults);
        log::debug!(
            "🚀 [{}] Dispatching analysis request ({} chars, app_type={}, environment={})",
            request_id,
            request.issue.len(),
            request.app_type,
            request.environment
        );

        match self.dispatch(request).await {
            Ok(result) => {
                let severity = result
                    .severity
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_SEVERITY.to_string());
                log::info!("✅ [{}] Analysis complete: {} severity", request_id, severity);

                self.display(result.clone());
                self.notifier.notify(Notice::analysis_complete(&severity));
                AnalysisOutcome::Completed(result)
            }
            Err(error) => {
                log::warn!("⚠️ [{}] Analysis failed, showing fallback result: {}", request_id, error);

                let result = AnalysisResult::fallback();
                self.display(result.clone());
                self.notifier.notify(Notice::analysis_failed(&error.message()));
                AnalysisOutcome::Fallback { result, error }
            }
        }
    }

    async fn dispatch(&self, request: AnalysisRequest) -> Result<AnalysisResult, ServiceError> {
        self.service.analyze(request).await?.into_result()
    }

    fn display(&self, result: AnalysisResult) {
        let mut state = self.lock_state();
        state.current = Some(result);
        state.results_visible = true;
        state.resolved_at = Some(Utc::now());
    }

    fn lock_state(&self) -> MutexGuard<'_, DisplayState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

use std::sync::Arc;
use securescan::enums::analysis_outcome::AnalysisOutcome;
use securescan::enums::analysis_phase::AnalysisPhase;
use securescan::enums::badge_style::AccentColor;
use securescan::enums::notice_variant::NoticeVariant;
use securescan::enums::preset_code::PresetCode;
use securescan::enums::service_error::ServiceError;
use securescan::services::analysis_orchestrator::AnalysisOrchestrator;
use securescan::services::input_capture::InputCapture;
use securescan::structs::analysis_result::AnalysisResult;
use securescan::structs::config::request_defaults::RequestDefaults;
use securescan::structs::service_envelope::ServiceEnvelope;
use serde_json::json;
use super::support::{RecordingNotifier, ScriptedService};

type Orchestrator = AnalysisOrchestrator<Arc<ScriptedService>, Arc<RecordingNotifier>>;

fn orchestrator(service: &Arc<ScriptedService>, notifier: &Arc<RecordingNotifier>) -> Orchestrator {
    AnalysisOrchestrator::new(Arc::clone(service), Arc::clone(notifier), RequestDefaults::default())
}

#[tokio::test]
async fn successful_eval_analysis_shows_low_badge() {
    let service = Arc::new(ScriptedService::new(vec![Ok(ServiceEnvelope::succeeded(json!({
        "severity": "low",
        "cvssScore": 3.2,
        "title": "Use of eval"
    })))]));
    let notifier = Arc::new(RecordingNotifier::default());
    let orchestrator = orchestrator(&service, &notifier);

    let mut capture = InputCapture::new();
    capture.set_text("eval(userInput)");
    let outcome = orchestrator.run_analysis(capture.text()).await;

    assert!(matches!(outcome, AnalysisOutcome::Completed(_)));
    let report = orchestrator.report().unwrap();
    assert_eq!(report.header.badge.label, "Low");
    assert_eq!(report.header.badge.accent, AccentColor::Green);
    assert_eq!(report.score.annotation(), "3.2 (Low)");

    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].variant, NoticeVariant::Default);
    assert_eq!(notices[0].description, "Found low severity issue");

    let requests = service.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].issue, "Analyze this code for security vulnerabilities:\n\neval(userInput)");
    assert_eq!(requests[0].tech_stack, "JavaScript, Node.js, Database");
}

#[tokio::test]
async fn network_failure_falls_back_to_canned_finding() {
    let service = Arc::new(ScriptedService::new(vec![Err(ServiceError::NetworkError(
        "error sending request: connection refused".to_string(),
    ))]));
    let notifier = Arc::new(RecordingNotifier::default());
    let orchestrator = orchestrator(&service, &notifier);

    let outcome = orchestrator.run_analysis("SELECT 1").await;

    assert!(outcome.is_fallback());
    assert_eq!(outcome.result(), Some(&AnalysisResult::fallback()));
    assert_eq!(orchestrator.phase(), AnalysisPhase::ResultsVisible);

    let report = orchestrator.report().unwrap();
    assert_eq!(report.header.title, "SQL Injection Vulnerability");
    assert_eq!(report.score.annotation(), "8.5 (High)");

    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].is_destructive());
    assert_eq!(notices[0].description, "error sending request: connection refused");
}

#[tokio::test]
async fn malformed_payload_is_treated_as_failure() {
    let service = Arc::new(ScriptedService::new(vec![Ok(ServiceEnvelope::succeeded(json!("not an object")))]));
    let notifier = Arc::new(RecordingNotifier::default());
    let orchestrator = orchestrator(&service, &notifier);

    let outcome = orchestrator.run_analysis("SELECT 1").await;

    assert!(matches!(outcome.error(), Some(ServiceError::MalformedResponse(_))));
    assert_eq!(orchestrator.snapshot().current, Some(AnalysisResult::fallback()));
}

#[tokio::test]
async fn whitespace_input_never_calls_service() {
    let service = Arc::new(ScriptedService::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let orchestrator = orchestrator(&service, &notifier);

    for input in ["", " ", "\n\t  \r\n"] {
        assert_eq!(orchestrator.run_analysis(input).await, AnalysisOutcome::EmptyInput);
    }

    assert_eq!(service.calls(), 0);
    assert_eq!(orchestrator.phase(), AnalysisPhase::Idle);
    assert!(orchestrator.report().is_none());
    assert!(notifier
        .notices()
        .iter()
        .all(|notice| notice.title == "No code provided" && notice.is_destructive()));
}

#[tokio::test]
async fn second_trigger_while_busy_is_ignored() {
    let service = Arc::new(ScriptedService::gated(vec![Ok(ServiceEnvelope::succeeded(json!({
        "severity": "critical",
        "cvss_score": 9.1
    })))]));
    let notifier = Arc::new(RecordingNotifier::default());
    let orchestrator = orchestrator(&service, &notifier);

    let first = orchestrator.run_analysis("SELECT 1");
    let second = async {
        tokio::task::yield_now().await;
        assert!(orchestrator.is_busy());
        assert_eq!(orchestrator.phase(), AnalysisPhase::Busy);
        let outcome = orchestrator.run_analysis("SELECT 2").await;
        service.release();
        outcome
    };

    let (first, second) = futures::join!(first, second);

    assert!(matches!(first, AnalysisOutcome::Completed(_)));
    assert_eq!(second, AnalysisOutcome::Busy);
    assert_eq!(service.calls(), 1);
    assert_eq!(notifier.notices().len(), 1);
    assert!(!orchestrator.is_busy());
    assert_eq!(orchestrator.report().unwrap().score.annotation(), "9.1 (Critical)");
}

#[tokio::test]
async fn results_are_hidden_while_a_new_request_is_in_flight() {
    let service = Arc::new(ScriptedService::gated(vec![
        Ok(ServiceEnvelope::succeeded(json!({ "severity": "info" }))),
        Err(ServiceError::Unsuccessful),
    ]));
    let notifier = Arc::new(RecordingNotifier::default());
    let orchestrator = orchestrator(&service, &notifier);

    service.release();
    orchestrator.run_analysis("first").await;
    assert_eq!(orchestrator.phase(), AnalysisPhase::ResultsVisible);

    let second = orchestrator.run_analysis("second");
    let observer = async {
        tokio::task::yield_now().await;
        let hidden = orchestrator.report().is_none();
        service.release();
        hidden
    };
    let (outcome, hidden_while_busy) = futures::join!(second, observer);

    assert!(hidden_while_busy);
    assert!(outcome.is_fallback());
    assert_eq!(orchestrator.report().unwrap().header.badge.label, "High");
}

#[tokio::test]
async fn requests_are_serialized_and_results_replaced_wholesale() {
    let service = Arc::new(ScriptedService::new(vec![
        Ok(ServiceEnvelope::succeeded(json!({
            "severity": "critical",
            "title": "RCE",
            "ai_analysis": { "attack_scenario": "shell" }
        }))),
        Ok(ServiceEnvelope::succeeded(json!({ "severity": "info" }))),
    ]));
    let notifier = Arc::new(RecordingNotifier::default());
    let orchestrator = orchestrator(&service, &notifier);

    orchestrator.run_analysis("one").await;
    orchestrator.run_analysis("two").await;

    let report = orchestrator.report().unwrap();
    assert_eq!(report.header.title, "Security Analysis");
    assert_eq!(report.header.badge.label, "Info");
    assert!(report.sections.is_empty());
    assert_eq!(service.calls(), 2);
}

#[test]
fn xss_preset_replaces_captured_text() {
    let mut capture = InputCapture::new();
    capture.set_text("whatever was typed before");

    capture.load_preset(PresetCode::Xss);

    assert_eq!(capture.text(), r#"document.getElementById("output").innerHTML = userComment"#);
}

#[test]
fn orchestrator_runs_on_a_plain_blocking_executor() {
    let service = Arc::new(ScriptedService::new(vec![Err(ServiceError::Unsuccessful)]));
    let notifier = Arc::new(RecordingNotifier::default());
    let orchestrator = orchestrator(&service, &notifier);

    let outcome = tokio_test::block_on(orchestrator.run_analysis("SELECT 1"));

    assert_eq!(outcome.error(), Some(&ServiceError::Unsuccessful));
    assert_eq!(notifier.notices()[0].description, "Analysis failed");
}

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use async_trait::async_trait;
use securescan::enums::service_error::ServiceError;
use securescan::structs::analysis_request::AnalysisRequest;
use securescan::structs::notice::Notice;
use securescan::structs::service_envelope::ServiceEnvelope;
use securescan::traits::analysis_service::AnalysisService;
use securescan::traits::notifier::Notifier;
use tokio::sync::Notify;

/// Answers requests from a queue of canned responses.
#[derive(Default)]
pub struct ScriptedService {
    responses: Mutex<VecDeque<Result<ServiceEnvelope, ServiceError>>>,
    requests: Mutex<Vec<AnalysisRequest>>,
    calls: AtomicUsize,
    gate: Option<Notify>,
}

impl ScriptedService {
    pub fn new(responses: Vec<Result<ServiceEnvelope, ServiceError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            ..Self::default()
        }
    }

    /// Every call waits for [`release`](Self::release) before answering.
    pub fn gated(responses: Vec<Result<ServiceEnvelope, ServiceError>>) -> Self {
        Self {
            gate: Some(Notify::new()),
            ..Self::new(responses)
        }
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<AnalysisRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalysisService for ScriptedService {
    async fn analyze(&self, request: AnalysisRequest) -> Result<ServiceEnvelope, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::NetworkError("no scripted response".to_string())))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

use ps_auth::BearerGate;
use ps_db::PersonRepository;

use std::sync::Arc;
use std::time::Duration;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(4);

/// Shared state handed to every handler and middleware
#[derive(Clone)]
pub struct AppState {
    pub persons: PersonRepository,
    pub gate: Arc<BearerGate>,
    /// Deadline the router puts around every request
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(persons: PersonRepository, gate: BearerGate) -> Self {
        Self {
            persons,
            gate: Arc::new(gate),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

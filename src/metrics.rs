use std::time::Instant;
use tracing::debug;

/// Logs how long a handler took once it goes out of scope.
///
/// ```ignore
/// async fn list_items(State(state): State<AppState>) -> Response {
///     let _timer = OperationTimer::new("list_items");
///     // ...
/// }
/// ```
pub struct OperationTimer {
    operation: &'static str,
    start: Instant,
}

impl OperationTimer {
    #[must_use]
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            start: Instant::now(),
        }
    }

    #[must_use]
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl Drop for OperationTimer {
    fn drop(&mut self) {
        debug!(
            operation = %self.operation,
            duration_us = %self.start.elapsed().as_micros(),
            "Operation completed"
        );
    }
}

/// Short id used to correlate the start and end log lines of one request.
#[must_use]
pub fn generate_request_id() -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    uuid.get(..8).unwrap_or(&uuid).to_string()
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod metrics_tests;

//! Reusable busy/error flags for page-level mutations.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

/// Tracks one in-flight operation and its last failure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadingState {
    pub loading: bool,
    pub error: Option<String>,
}

impl LoadingState {
    /// Mark the start of an operation, clearing any previous error.
    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Mark a successful finish.
    pub fn finish(&mut self) {
        self.loading = false;
    }

    /// Record a failure and stop loading.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Drop the recorded error.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

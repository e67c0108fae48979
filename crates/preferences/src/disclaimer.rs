use crate::error::PreferenceError;
use crate::store::PreferenceStore;
use std::sync::Arc;

/// Key recording that the legal disclaimer was accepted.
pub const DISCLAIMER_KEY: &str = "fundwise_legal_accepted";

/// Whether `path` is the home page, the only page that shows the disclaimer.
pub fn is_home_path(path: &str) -> bool {
    path.is_empty() || path == "/" || path.ends_with("index.html")
}

/// Decides whether the legal disclaimer popup is shown.
#[derive(Clone)]
pub struct DisclaimerGate {
    store: Arc<dyn PreferenceStore>,
}

impl DisclaimerGate {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Any stored value counts as accepted.
    pub fn is_accepted(&self) -> Result<bool, PreferenceError> {
        Ok(self.store.get(DISCLAIMER_KEY)?.is_some_and(|value| !value.is_empty()))
    }

    /// True on the home page until the disclaimer has been accepted.
    pub fn should_show(&self, path: &str) -> Result<bool, PreferenceError> {
        if !is_home_path(path) {
            return Ok(false);
        }
        Ok(!self.is_accepted()?)
    }

    pub fn accept(&self) -> Result<(), PreferenceError> {
        tracing::info!("Legal disclaimer accepted.");
        self.store.set(DISCLAIMER_KEY, "true")
    }
}

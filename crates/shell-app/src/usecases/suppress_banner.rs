//! SuppressStartupBanner use case - turns off the UI framework's
//! non-production startup banner.

use std::sync::Arc;

use shell_core::ports::UiFrameworkPort;

/// Suppresses the framework's startup diagnostic banner. Idempotent,
/// side-effect only.
pub struct SuppressStartupBanner {
    ui: Arc<dyn UiFrameworkPort>,
}

impl SuppressStartupBanner {
    pub fn from_port(ui: Arc<dyn UiFrameworkPort>) -> Self {
        Self { ui }
    }

    pub fn execute(&self) {
        self.ui.set_startup_banner(false);
    }
}

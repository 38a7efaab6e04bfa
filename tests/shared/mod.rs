//! Helpers shared by the integration tests.

use std::sync::Once;

/// Proof of the global environment for a test case having been set up.
pub struct Environment(());

static ENVIRONMENT_ONCE: Once = Once::new();

impl Environment {
    /// Set up a logger that prints to the captured stderr.
    pub fn init() -> Self {
        ENVIRONMENT_ONCE.call_once(|| {
            env_logger::Builder::new()
                .is_test(true)
                .filter_level(log::LevelFilter::Trace)
                .init();
        });
        Environment(())
    }
}

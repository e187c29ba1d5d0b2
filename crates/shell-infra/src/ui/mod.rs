mod logging;

pub use logging::LoggingUi;

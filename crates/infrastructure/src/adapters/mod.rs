//! Adapter implementations of the application ports.

mod console_reporter;
mod reqwest_client;
mod system_clock;

pub use console_reporter::ConsoleReporter;
pub use reqwest_client::ReqwestDetectionClient;
pub use system_clock::SystemClock;

mod health;
mod report;
pub mod transcribe;

pub use health::health_handler;
pub use report::report_handler;
pub use transcribe::transcribe_handler;

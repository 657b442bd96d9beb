pub mod bearer_gate;
pub mod recovery;
pub mod request_logger;

pub mod chat_loop;
pub mod dependency_injection;
pub mod telemetry;

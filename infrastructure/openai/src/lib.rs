pub mod chat_completion;
pub mod client;
mod wire;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChatError {
    #[error("chat.empty_message")]
    EmptyMessage,
    #[error("chat.request_failed")]
    RequestFailed,
    #[error("chat.unauthorized")]
    Unauthorized,
    #[error("chat.rate_limited")]
    RateLimited,
    #[error("chat.service_error")]
    ServiceError(u16),
    #[error("chat.invalid_response")]
    InvalidResponse,
}

/// Kernel errors are reported back to the model as tool results, so the
/// messages are readable sentences rather than i18n codes.
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    #[error("Invalid plugin or function name '{0}'. Use letters, digits and underscores only.")]
    InvalidName(String),
    #[error("A plugin named '{0}' is already registered.")]
    DuplicatePlugin(String),
    #[error("Function '{0}' is not registered.")]
    FunctionNotFound(String),
    #[error("Missing required argument '{parameter}' for function '{function}'.")]
    MissingArgument { function: String, parameter: String },
    #[error("Argument '{parameter}' for function '{function}' must be a {expected}.")]
    InvalidArgument {
        function: String,
        parameter: String,
        expected: String,
    },
    #[error("Function '{function}' failed: {reason}")]
    InvocationFailed { function: String, reason: String },
}

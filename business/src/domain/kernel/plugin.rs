use async_trait::async_trait;
use serde_json::Value;

use super::errors::KernelError;
use super::model::{FunctionMetadata, KernelArguments};

/// A group of functions the model may call.
///
/// The kernel validates arguments against `functions()` and fills defaults
/// before calling `invoke`, so implementations can rely on every declared
/// parameter being present with the declared type.
#[async_trait]
pub trait Plugin: Send + Sync {
    fn functions(&self) -> Vec<FunctionMetadata>;

    async fn invoke(
        &self,
        function_name: &str,
        arguments: &KernelArguments,
    ) -> Result<Value, KernelError>;
}

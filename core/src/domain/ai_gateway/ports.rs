use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// A generative text service: one prompt out, one completion in.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

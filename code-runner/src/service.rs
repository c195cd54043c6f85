use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, error};

use crate::{
    config::Config,
    executor::CodeExecutor,
    types::{ExecutionRequest, ExecutionResult},
};

/// Clonable front for [`CodeExecutor`] that bounds how many executions run at once.
#[derive(Clone)]
pub struct CodeExecutionService {
    executor: Arc<CodeExecutor>,
    semaphore: Arc<Semaphore>,
}

impl CodeExecutionService {
    pub fn new(config: &Config) -> Self {
        Self {
            executor: Arc::new(CodeExecutor::new(config)),
            semaphore: Arc::new(Semaphore::new(config.max_concurrent_executions.max(1))),
        }
    }

    pub async fn execute(&self, request: ExecutionRequest) -> ExecutionResult {
        // Acquire execution permit
        let _permit = match self.semaphore.acquire().await {
            Ok(permit) => permit,
            Err(e) => {
                error!("Failed to acquire execution permit: {}", e);
                return ExecutionResult::failure(format!(
                    "Failed to acquire execution permit: {}",
                    e
                ));
            }
        };

        debug!(
            "Starting code execution for language: {}",
            request.language
        );

        self.executor.execute(&request).await
    }

    pub fn executor(&self) -> &CodeExecutor {
        &self.executor
    }

    pub fn get_available_slots(&self) -> usize {
        self.semaphore.available_permits()
    }
}

use crate::core::errors::SettleUpError;
use crate::core::models::audit::AppLog;
use crate::infrastructure::logging::LoggingService;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct InMemoryLogging {
    logs: Arc<RwLock<Vec<AppLog>>>,
}

impl InMemoryLogging {
    pub fn new() -> Self {
        InMemoryLogging {
            logs: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl LoggingService for InMemoryLogging {
    async fn log_action(
        &self,
        action: &str,
        details: Value,
        group_id: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<(), SettleUpError> {
        let Value::Object(fields) = details else {
            return Err(SettleUpError::LoggingError(format!(
                "Audit details for `{}` must be a JSON object",
                action
            )));
        };
        let entry = AppLog {
            id: Uuid::new_v4().to_string(),
            action: action.to_string(),
            group_id: group_id.map(String::from),
            user_id: user_id.map(String::from),
            details: fields.into_iter().collect(),
            timestamp: chrono::Utc::now(),
        };
        debug!(action = %entry.action, group_id = ?entry.group_id, "audit entry recorded");
        self.logs.write().await.push(entry);
        Ok(())
    }

    async fn get_logs(&self) -> Result<Vec<AppLog>, SettleUpError> {
        let logs = self.logs.read().await;
        Ok(logs.clone())
    }

    async fn get_group_logs(&self, group_id: &str) -> Result<Vec<AppLog>, SettleUpError> {
        let logs = self.logs.read().await;
        Ok(logs
            .iter()
            .filter(|log| log.group_id.as_deref() == Some(group_id))
            .cloned()
            .collect())
    }
}

use serde_json::Value;

use crate::config::{Config, SERVICE_KEY_VAR};
use crate::db::SCHEMA_SQL;
use crate::error::{ProvisionError, Result};
use crate::services::sql_rpc::SqlExecutor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionState {
    AwaitingCredential,
    Submitting,
    Succeeded,
    Failed,
}

/// Applies [`SCHEMA_SQL`] once. No retries: a failed run may leave the schema
/// partially applied and the whole batch is simply submitted again next time.
pub struct Provisioner<'a> {
    config: &'a Config,
    state: ProvisionState,
}

impl<'a> Provisioner<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            state: ProvisionState::AwaitingCredential,
        }
    }

    pub fn state(&self) -> ProvisionState {
        self.state
    }

    /// Checks the credential, then builds an executor with `connect` and
    /// submits the schema through it. `connect` is never called when the
    /// credential is missing.
    pub async fn run<E, F>(&mut self, connect: F) -> Result<Value>
    where
        E: SqlExecutor,
        F: FnOnce(&str) -> E,
    {
        if self.state != ProvisionState::AwaitingCredential {
            tracing::warn!(state = ?self.state, "provisioner already ran");
        }

        let Some(key) = self.config.service_key.as_deref() else {
            return Err(ProvisionError::MissingCredential { var: SERVICE_KEY_VAR });
        };

        self.state = ProvisionState::Submitting;
        tracing::info!("Applying schema via {}", self.config.rpc_endpoint());

        let executor = connect(key);
        match executor.execute_sql(SCHEMA_SQL).await {
            Ok(result) => {
                self.state = ProvisionState::Succeeded;
                tracing::info!("Schema applied");
                Ok(result)
            }
            Err(e) => {
                self.state = ProvisionState::Failed;
                tracing::error!("Schema apply failed: {e}");
                Err(e)
            }
        }
    }
}

/// One-shot helper around [`Provisioner`].
pub async fn provision<E, F>(config: &Config, connect: F) -> Result<Value>
where
    E: SqlExecutor,
    F: FnOnce(&str) -> E,
{
    Provisioner::new(config).run(connect).await
}

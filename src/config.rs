use std::env;

/// Environment variable holding the service_role key.
pub const SERVICE_KEY_VAR: &str = "SUPABASE_SERVICE_KEY";
pub const URL_VAR: &str = "SUPABASE_URL";
pub const RPC_VAR: &str = "SUPABASE_SQL_RPC";

pub const DEFAULT_URL: &str = "https://ydxeavrjmaujmoysrhqx.supabase.co";
pub const DEFAULT_RPC: &str = "exec_sql";

#[derive(Clone)]
pub struct Config {
    /// Project base URL, without trailing slash.
    pub supabase_url: String,
    /// Name of the Postgres function exposed under `/rest/v1/rpc/` that runs raw SQL.
    pub sql_rpc: String,
    pub service_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|s| !s.is_empty());
        Self {
            supabase_url: get(URL_VAR)
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_URL.into()),
            sql_rpc: get(RPC_VAR).unwrap_or_else(|| DEFAULT_RPC.into()),
            service_key: get(SERVICE_KEY_VAR),
        }
    }

    /// Full URL of the SQL execution endpoint.
    pub fn rpc_endpoint(&self) -> String {
        format!("{}/rest/v1/rpc/{}", self.supabase_url, self.sql_rpc)
    }

    /// Dashboard address given to operators in instructions.
    pub fn dashboard_url(&self) -> &str {
        &self.supabase_url
    }
}

// Hand-written so the service key never ends up in logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("supabase_url", &self.supabase_url)
            .field("sql_rpc", &self.sql_rpc)
            .field("service_key", &self.service_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

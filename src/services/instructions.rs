//! Operator-facing text. Everything here is deterministic for a given config
//! so it can be printed verbatim and asserted on.

use crate::config::{Config, SERVICE_KEY_VAR};

const BIN: &str = "setup-database";

/// Printed instead of contacting the database when the key is missing.
pub fn missing_credential(config: &Config) -> String {
    let url = config.dashboard_url();
    [
        format!("ERROR: {SERVICE_KEY_VAR} environment variable not set!"),
        String::new(),
        "Instructions:".to_string(),
        format!("1. Go to {url}"),
        "2. Navigate to Settings > API".to_string(),
        "3. Copy the service_role key".to_string(),
        format!("4. Run: export {SERVICE_KEY_VAR}=your_service_key"),
        format!("   (On Windows: set {SERVICE_KEY_VAR}=your_service_key)"),
        format!("5. Run this tool again: {BIN}"),
    ]
    .join("\n")
}

pub fn startup_banner() -> String {
    [
        "=== Tournament Database Setup ===",
        "",
        "NOTE: the SQL RPC route is not enabled on every project.",
        "      If this run fails, use the SQL Editor in the dashboard instead.",
    ]
    .join("\n")
}

/// The SQL Editor procedure, which works regardless of which RPC functions exist.
pub fn manual_steps(config: &Config) -> String {
    let url = config.dashboard_url();
    [
        "Recommended approach:".to_string(),
        format!("1. Go to {url}"),
        "2. Navigate to SQL Editor".to_string(),
        format!("3. Paste the output of: {BIN} --print-sql"),
        "4. Execute it in the SQL Editor".to_string(),
        String::new(),
        "The script is idempotent; running it again is safe.".to_string(),
    ]
    .join("\n")
}

/// Shown after the endpoint rejected the batch.
pub fn remote_failure(config: &Config, detail: &str) -> String {
    format!(
        "Schema setup failed via {}:\n{}\n\nThe schema may be partially applied.\n{}",
        config.rpc_endpoint(),
        detail,
        manual_steps(config)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_URL;

    fn default_config() -> Config {
        Config::from_lookup(|_| None)
    }

    #[test]
    fn test_missing_credential_names_url_and_var() {
        let text = missing_credential(&default_config());
        assert!(text.contains("https://ydxeavrjmaujmoysrhqx.supabase.co"));
        assert!(text.contains("SUPABASE_SERVICE_KEY"));
        assert!(text.contains("export SUPABASE_SERVICE_KEY="));
    }

    #[test]
    fn test_missing_credential_is_deterministic() {
        let cfg = default_config();
        assert_eq!(missing_credential(&cfg), missing_credential(&cfg));
    }

    #[test]
    fn test_instructions_follow_configured_url() {
        let cfg = Config::from_lookup(|key| match key {
            "SUPABASE_URL" => Some("https://example.supabase.co".into()),
            _ => None,
        });
        assert!(missing_credential(&cfg).contains("https://example.supabase.co"));
        assert!(!manual_steps(&cfg).contains(DEFAULT_URL));
    }

    #[test]
    fn test_remote_failure_includes_detail() {
        let text = remote_failure(&default_config(), "permission denied");
        assert!(text.contains("permission denied"));
        assert!(text.contains("SQL Editor"));
    }
}

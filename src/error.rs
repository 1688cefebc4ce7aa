use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("{var} environment variable not set")]
    MissingCredential { var: &'static str },

    /// Non-success status from the SQL endpoint; `body` is the response text as received.
    #[error("remote execution failed ({status}): {body}")]
    RemoteExecutionFailed { status: u16, body: String },

    #[error("request to SQL endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("SQL endpoint returned invalid JSON: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl ProvisionError {
    /// Process exit status for this failure: 1 for an unmet precondition,
    /// 2 for anything that went wrong after submitting.
    pub fn exit_code(&self) -> u8 {
        match self {
            ProvisionError::MissingCredential { .. } => 1,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProvisionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_failure_keeps_body() {
        let err = ProvisionError::RemoteExecutionFailed {
            status: 500,
            body: "permission denied".into(),
        };
        assert!(err.to_string().ends_with("permission denied"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_missing_credential_exit_code() {
        let err = ProvisionError::MissingCredential { var: "SUPABASE_SERVICE_KEY" };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "SUPABASE_SERVICE_KEY environment variable not set");
    }
}

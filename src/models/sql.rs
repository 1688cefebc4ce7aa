use serde::{Deserialize, Serialize};

/// Body of a `POST /rest/v1/rpc/<fn>` call to the SQL execution function.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExecSqlRequest<'a> {
    pub query: &'a str,
}

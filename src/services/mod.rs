pub mod instructions;
pub mod provision;
pub mod sql_rpc;

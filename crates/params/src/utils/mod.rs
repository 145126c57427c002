//! Parameter sets grouped by primitive family

pub mod mac;
pub mod symmetric;

//! Application-level services layered over the ledger engine.

pub mod services;
pub mod session;

pub use session::LedgerSession;

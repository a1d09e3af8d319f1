//! Command abstractions.

/// Trait implemented by every typed mutation accepted by a service.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Stable name of the command, used in logs.
    fn command_type(&self) -> &'static str;
}

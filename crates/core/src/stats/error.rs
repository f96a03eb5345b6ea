use thiserror::Error;

/// Errors that can occur while deriving dashboard statistics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// Inventory share was requested against a total of zero products.
    #[error("Cannot compute inventory share of an empty catalog")]
    EmptyInventory,
}

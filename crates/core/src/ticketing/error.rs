//! Ticketing error types.

use boxoffice_shared::AccountId;
use thiserror::Error;

/// Reasons a ticket purchase is rejected.
///
/// Every rejection is raised before any collaborator is invoked; a rejected
/// purchase has no observable side effects.
#[derive(Debug, Error)]
pub enum PurchaseError {
    /// Account ID is not a positive integer.
    #[error("Invalid account ID: {0}")]
    InvalidAccount(AccountId),

    /// Ticket category is not one of ADULT, CHILD, or INFANT.
    #[error("Invalid ticket type: {0}")]
    InvalidTicketType(String),

    /// Purchases must include at least one adult ticket.
    #[error("At least one adult ticket must be purchased with child or infant tickets")]
    MissingAdult,

    /// Total ticket count exceeds the per-purchase cap.
    #[error("Cannot purchase more than {max} tickets in a single transaction (requested {requested})")]
    TooManyTickets {
        /// Number of tickets requested across all line items.
        requested: u32,
        /// Per-purchase ticket cap.
        max: u32,
    },
}

//! Ticketing domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::PurchaseError;

/// Price of one adult ticket in pounds.
pub const ADULT_TICKET_PRICE: u32 = 25;

/// Price of one child ticket in pounds.
pub const CHILD_TICKET_PRICE: u32 = 15;

/// Maximum number of tickets allowed in a single purchase.
pub const MAX_TICKETS_PER_PURCHASE: u32 = 25;

/// Ticket categories sold by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    /// Full-price ticket with its own seat.
    Adult,
    /// Reduced-price ticket with its own seat.
    Child,
    /// Free ticket; the infant sits on an adult's lap and takes no seat.
    Infant,
}

impl TicketType {
    /// Price of one ticket of this category in GBP.
    #[must_use]
    pub fn price(self) -> Decimal {
        match self {
            Self::Adult => Decimal::from(ADULT_TICKET_PRICE),
            Self::Child => Decimal::from(CHILD_TICKET_PRICE),
            Self::Infant => Decimal::ZERO,
        }
    }

    /// Seats occupied by one ticket of this category.
    #[must_use]
    pub const fn seats_per_ticket(self) -> u32 {
        match self {
            Self::Adult | Self::Child => 1,
            Self::Infant => 0,
        }
    }
}

impl std::fmt::Display for TicketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Adult => write!(f, "ADULT"),
            Self::Child => write!(f, "CHILD"),
            Self::Infant => write!(f, "INFANT"),
        }
    }
}

impl std::str::FromStr for TicketType {
    type Err = PurchaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADULT" => Ok(Self::Adult),
            "CHILD" => Ok(Self::Child),
            "INFANT" => Ok(Self::Infant),
            _ => Err(PurchaseError::InvalidTicketType(s.to_string())),
        }
    }
}

/// One line item of a purchase: a ticket category and how many of it.
///
/// Multiple line items for the same category may appear in one purchase;
/// their counts are additive and are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    /// Requested ticket category.
    pub ticket_type: TicketType,
    /// Number of tickets requested in this line item.
    pub count: u32,
}

impl TicketRequest {
    /// Creates a new ticket request line item.
    #[must_use]
    pub const fn new(ticket_type: TicketType, count: u32) -> Self {
        Self { ticket_type, count }
    }

    /// Parses a line item from an untyped category token and a count.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InvalidTicketType`] if the token is not a
    /// known category.
    pub fn from_parts(ticket_type: &str, count: u32) -> Result<Self, PurchaseError> {
        Ok(Self {
            ticket_type: ticket_type.parse()?,
            count,
        })
    }
}

/// Aggregated totals for a purchase request.
///
/// Derived in a single pass over the line items and discarded with the call;
/// totals are never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseTotals {
    /// Total number of tickets across all categories.
    pub total_tickets: u32,
    /// Total payable amount in GBP.
    pub total_amount: Decimal,
    /// Seats to reserve; infants take no seat.
    pub total_seats: u32,
    /// Whether at least one adult ticket is present.
    pub has_adult: bool,
}

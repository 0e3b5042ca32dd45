//! Ticket purchase validation and aggregation.
//!
//! This module implements the purchase policy for the booking platform:
//! - Ticket categories with per-category pricing and seat rules
//! - Single-pass validation and aggregation of a purchase request
//! - Error types for rejected purchases
//! - Purchase service dispatching payment and seat reservation

pub mod error;
pub mod service;
pub mod types;
pub mod validation;

#[cfg(test)]
mod service_props;

pub use error::PurchaseError;
pub use service::{PaymentGateway, SeatReservation, TicketService};
pub use types::{
    ADULT_TICKET_PRICE, CHILD_TICKET_PRICE, MAX_TICKETS_PER_PURCHASE, PurchaseTotals,
    TicketRequest, TicketType,
};
pub use validation::aggregate_requests;

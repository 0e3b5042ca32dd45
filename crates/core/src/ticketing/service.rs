//! Ticket purchase service: validation, aggregation, and collaborator dispatch.

use std::sync::Arc;

use tracing::info;

use boxoffice_shared::{AccountId, Currency, Money};

use super::error::PurchaseError;
use super::types::TicketRequest;
use super::validation::aggregate_requests;

/// Payment collaborator contract.
///
/// Implemented by the payment gateway integration. Calls complete
/// synchronously and are assumed to succeed.
pub trait PaymentGateway: Send + Sync {
    /// Charges `amount` against the given account.
    fn make_payment(&self, account_id: AccountId, amount: Money);
}

/// Seat reservation collaborator contract.
///
/// Implemented by the venue's seat booking integration. Calls complete
/// synchronously and are assumed to succeed.
pub trait SeatReservation: Send + Sync {
    /// Reserves `seat_count` seats for the given account.
    fn reserve_seats(&self, account_id: AccountId, seat_count: u32);
}

/// Ticket purchase service.
///
/// Validates a purchase request, aggregates its totals, and on success
/// invokes the payment gateway and the seat reservation collaborator, in
/// that order. Both collaborators are injected at construction; there are
/// no default instances.
pub struct TicketService<P, S> {
    payment: Arc<P>,
    seats: Arc<S>,
}

impl<P: PaymentGateway, S: SeatReservation> TicketService<P, S> {
    /// Creates a new ticket service with its two collaborators.
    #[must_use]
    pub fn new(payment: Arc<P>, seats: Arc<S>) -> Self {
        Self { payment, seats }
    }

    /// Purchases tickets for an account.
    ///
    /// The request set is validated and aggregated as one atomic
    /// transaction: on success the payment gateway is charged with the
    /// total amount and the seat reservation collaborator is invoked with
    /// the total seat count, exactly once each. If any rule is violated,
    /// no collaborator is invoked.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InvalidAccount`] for a non-positive account
    /// number, and propagates every rejection from [`aggregate_requests`].
    pub fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketRequest],
    ) -> Result<(), PurchaseError> {
        if !account_id.is_valid() {
            return Err(PurchaseError::InvalidAccount(account_id));
        }

        let totals = aggregate_requests(requests)?;

        // Fixed order: payment first, then seat reservation. No rollback if
        // reservation fails; collaborator panics propagate to the caller.
        self.payment
            .make_payment(account_id, Money::new(totals.total_amount, Currency::Gbp));
        self.seats.reserve_seats(account_id, totals.total_seats);

        info!(
            account_id = %account_id,
            total_amount = %totals.total_amount,
            total_seats = totals.total_seats,
            total_tickets = totals.total_tickets,
            "Ticket purchase completed"
        );

        Ok(())
    }
}

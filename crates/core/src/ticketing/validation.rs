//! Business rule validation for ticket purchases.

use rust_decimal::Decimal;

use super::error::PurchaseError;
use super::types::{MAX_TICKETS_PER_PURCHASE, PurchaseTotals, TicketRequest, TicketType};

/// Validates a purchase request set and aggregates its totals.
///
/// Scans the line items once, in input order, accumulating the ticket count,
/// payable amount, and seat count. After the scan two cross-cutting rules
/// apply: the purchase must contain at least one adult ticket (an empty
/// purchase or one holding only child and infant tickets is rejected), and
/// the total ticket count must not exceed [`MAX_TICKETS_PER_PURCHASE`].
/// A total of exactly [`MAX_TICKETS_PER_PURCHASE`] is allowed.
///
/// # Errors
///
/// Returns an error if the request set violates a purchase rule.
pub fn aggregate_requests(requests: &[TicketRequest]) -> Result<PurchaseTotals, PurchaseError> {
    let mut total_tickets: u32 = 0;
    let mut total_amount = Decimal::ZERO;
    let mut total_seats: u32 = 0;
    let mut has_adult = false;

    for request in requests {
        total_amount += request.ticket_type.price() * Decimal::from(request.count);
        // Saturating: an overflowing total is already far past the cap and
        // still fails the cap check below.
        total_seats = total_seats.saturating_add(request.ticket_type.seats_per_ticket() * request.count);
        total_tickets = total_tickets.saturating_add(request.count);

        if request.ticket_type == TicketType::Adult && request.count > 0 {
            has_adult = true;
        }
    }

    if !has_adult {
        return Err(PurchaseError::MissingAdult);
    }

    if total_tickets > MAX_TICKETS_PER_PURCHASE {
        return Err(PurchaseError::TooManyTickets {
            requested: total_tickets,
            max: MAX_TICKETS_PER_PURCHASE,
        });
    }

    Ok(PurchaseTotals {
        total_tickets,
        total_amount,
        total_seats,
        has_adult,
    })
}

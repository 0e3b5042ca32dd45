//! Property-based tests for ticket purchase aggregation and dispatch.

use std::sync::{Arc, Mutex};

use proptest::prelude::*;
use rust_decimal::Decimal;

use boxoffice_shared::{AccountId, Money};

use super::error::PurchaseError;
use super::service::{PaymentGateway, SeatReservation, TicketService};
use super::types::{MAX_TICKETS_PER_PURCHASE, TicketRequest, TicketType};
use super::validation::aggregate_requests;

/// Strategy to generate any ticket category.
fn ticket_type() -> impl Strategy<Value = TicketType> {
    prop_oneof![
        Just(TicketType::Adult),
        Just(TicketType::Child),
        Just(TicketType::Infant),
    ]
}

/// Strategy to generate one line item (counts 0 to 9).
fn ticket_request() -> impl Strategy<Value = TicketRequest> {
    (ticket_type(), 0u32..10).prop_map(|(ticket_type, count)| TicketRequest::new(ticket_type, count))
}

/// Strategy to generate a purchase request set (0 to 7 line items).
fn request_batch() -> impl Strategy<Value = Vec<TicketRequest>> {
    prop::collection::vec(ticket_request(), 0..8)
}

/// Strategy to generate a line item that is never an adult ticket.
fn adultless_request() -> impl Strategy<Value = TicketRequest> {
    (
        prop_oneof![Just(TicketType::Child), Just(TicketType::Infant)],
        0u32..10,
    )
        .prop_map(|(ticket_type, count)| TicketRequest::new(ticket_type, count))
}

/// Records collaborator calls and their order.
#[derive(Default)]
struct Recorder {
    payments: Mutex<Vec<(AccountId, Money)>>,
    reservations: Mutex<Vec<(AccountId, u32)>>,
    order: Mutex<Vec<&'static str>>,
}

struct RecordingPayment(Arc<Recorder>);

impl PaymentGateway for RecordingPayment {
    fn make_payment(&self, account_id: AccountId, amount: Money) {
        self.0.payments.lock().unwrap().push((account_id, amount));
        self.0.order.lock().unwrap().push("payment");
    }
}

struct RecordingReservation(Arc<Recorder>);

impl SeatReservation for RecordingReservation {
    fn reserve_seats(&self, account_id: AccountId, seat_count: u32) {
        self.0
            .reservations
            .lock()
            .unwrap()
            .push((account_id, seat_count));
        self.0.order.lock().unwrap().push("reservation");
    }
}

proptest! {
    /// Accepted batches aggregate exactly the per-category arithmetic:
    /// amount is the sum of count x price, seats exclude infants, and the
    /// ticket count spans every category.
    #[test]
    fn prop_totals_match_line_item_arithmetic(batch in request_batch()) {
        if let Ok(totals) = aggregate_requests(&batch) {
            let expected_tickets: u32 = batch.iter().map(|r| r.count).sum();
            let expected_seats: u32 = batch
                .iter()
                .map(|r| r.ticket_type.seats_per_ticket() * r.count)
                .sum();
            let expected_amount: Decimal = batch
                .iter()
                .map(|r| r.ticket_type.price() * Decimal::from(r.count))
                .sum();

            prop_assert_eq!(totals.total_tickets, expected_tickets);
            prop_assert_eq!(totals.total_seats, expected_seats);
            prop_assert_eq!(totals.total_amount, expected_amount);
            prop_assert!(totals.has_adult);
        }
    }

    /// Aggregation has no hidden state: the same batch always produces the
    /// same outcome.
    #[test]
    fn prop_aggregation_is_deterministic(batch in request_batch()) {
        let first = aggregate_requests(&batch);
        let second = aggregate_requests(&batch);

        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => {
                prop_assert_eq!(std::mem::discriminant(&a), std::mem::discriminant(&b));
            }
            _ => prop_assert!(false, "same batch produced different outcomes"),
        }
    }

    /// Batches without an adult ticket are always rejected.
    #[test]
    fn prop_adultless_batches_rejected(
        batch in prop::collection::vec(adultless_request(), 0..8),
    ) {
        let result = aggregate_requests(&batch);
        prop_assert!(matches!(result, Err(PurchaseError::MissingAdult)));
    }

    /// With an adult ticket present, acceptance depends only on the cap:
    /// totals of up to 25 tickets pass, anything larger is rejected.
    #[test]
    fn prop_cap_is_the_only_remaining_limit(
        batch in request_batch(),
        adult_count in 1u32..5,
    ) {
        let mut batch = batch;
        batch.push(TicketRequest::new(TicketType::Adult, adult_count));
        let total: u32 = batch.iter().map(|r| r.count).sum();

        let result = aggregate_requests(&batch);
        if total > MAX_TICKETS_PER_PURCHASE {
            let matched = matches!(
                result,
                Err(PurchaseError::TooManyTickets { requested, max })
                    if requested == total && max == MAX_TICKETS_PER_PURCHASE
            );
            prop_assert!(matched);
        } else {
            prop_assert!(result.is_ok());
        }
    }

    /// Appending infant line items never changes the amount or the seat
    /// count, only the ticket count.
    #[test]
    fn prop_infants_change_neither_amount_nor_seats(
        batch in request_batch(),
        infants in 0u32..5,
    ) {
        let mut extended = batch.clone();
        extended.push(TicketRequest::new(TicketType::Infant, infants));

        if let (Ok(base), Ok(with_infants)) =
            (aggregate_requests(&batch), aggregate_requests(&extended))
        {
            prop_assert_eq!(base.total_amount, with_infants.total_amount);
            prop_assert_eq!(base.total_seats, with_infants.total_seats);
            prop_assert_eq!(base.total_tickets + infants, with_infants.total_tickets);
        }
    }

    /// A purchase either succeeds with exactly one payment call followed by
    /// one reservation call, or is rejected with no collaborator calls.
    #[test]
    fn prop_collaborators_all_or_nothing(
        batch in request_batch(),
        raw_account in -3i64..20,
    ) {
        let recorder = Arc::new(Recorder::default());
        let service = TicketService::new(
            Arc::new(RecordingPayment(Arc::clone(&recorder))),
            Arc::new(RecordingReservation(Arc::clone(&recorder))),
        );

        let result = service.purchase_tickets(AccountId::new(raw_account), &batch);

        let payments = recorder.payments.lock().unwrap().clone();
        let reservations = recorder.reservations.lock().unwrap().clone();
        let order = recorder.order.lock().unwrap().clone();

        match result {
            Ok(()) => {
                prop_assert!(raw_account > 0);
                prop_assert_eq!(payments.len(), 1);
                prop_assert_eq!(reservations.len(), 1);
                prop_assert_eq!(order, vec!["payment", "reservation"]);
            }
            Err(_) => {
                prop_assert!(payments.is_empty());
                prop_assert!(reservations.is_empty());
            }
        }
    }
}

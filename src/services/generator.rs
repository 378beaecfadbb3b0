use crate::models::{
    CleaningInput, EntityType, Listing, Mission, MissionType, MissionsOutput, PriceTable,
    RejectionLogEntry, Stay,
};

use super::containment::is_crossing;
use super::dates::{parse_stay, ParsedStay};

/// Missions of one generation call together with the records it rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Generation {
    pub output: MissionsOutput,
    pub rejections: Vec<RejectionLogEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct MissionGenerator {
    prices: PriceTable,
}

impl MissionGenerator {
    pub fn new(prices: PriceTable) -> Self {
        Self { prices }
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    pub fn generate(&self, input: &CleaningInput) -> Generation {
        let mut generation = Generation::default();

        for listing in &input.listings {
            let bookings = parse_for_listing(
                &input.bookings,
                listing,
                EntityType::Booking,
                &mut generation.rejections,
            );
            let reservations = parse_for_listing(
                &input.reservations,
                listing,
                EntityType::Reservation,
                &mut generation.rejections,
            );

            for booking in &bookings {
                let missions = &mut generation.output.missions;
                missions.push(self.mission(listing, booking.start_text, MissionType::FirstCheckin));
                missions.push(self.mission(listing, booking.end_text, MissionType::LastCheckout));

                for reservation in reservations.iter().filter(|r| is_crossing(booking, r)) {
                    if reservation.end_text != booking.end_text {
                        missions.push(self.mission(
                            listing,
                            reservation.end_text,
                            MissionType::CheckoutCheckin,
                        ));
                    }
                }
            }
        }

        log_orphans(input);
        tracing::debug!(
            missions = generation.output.missions.len(),
            rejections = generation.rejections.len(),
            "generated cleaning missions"
        );

        generation
    }

    fn mission(&self, listing: &Listing, date: &str, mission_type: MissionType) -> Mission {
        Mission {
            listing_id: listing.id,
            mission_type,
            date: date.to_string(),
            price: self.prices.price(mission_type, listing.num_rooms),
        }
    }
}

fn parse_for_listing<'a>(
    stays: &'a [Stay],
    listing: &Listing,
    entity_type: EntityType,
    rejections: &mut Vec<RejectionLogEntry>,
) -> Vec<ParsedStay<'a>> {
    stays
        .iter()
        .filter(|stay| stay.belongs_to(listing.id))
        .filter_map(|stay| match parse_stay(stay) {
            Ok(parsed) => Some(parsed),
            Err(reason) => {
                tracing::warn!(
                    entity_type = entity_type.as_str(),
                    id = ?stay.id,
                    listing_id = ?stay.listing_id,
                    reason = ?reason,
                    "rejected {} with invalid date",
                    entity_type.as_str()
                );
                rejections.push(RejectionLogEntry::for_stay(stay, entity_type, reason.to_string()));
                None
            }
        })
        .collect()
}

// Records pointing at an unknown listing are skipped without a rejection entry.
fn log_orphans(input: &CleaningInput) {
    let known = |stay: &&Stay| {
        stay.listing_id
            .map_or(false, |id| input.listings.iter().any(|l| l.id == id))
    };
    let orphaned = input.bookings.iter().filter(|s| !known(s)).count()
        + input.reservations.iter().filter(|s| !known(s)).count();
    if orphaned > 0 {
        tracing::debug!(orphaned, "ignored records without a matching listing");
    }
}

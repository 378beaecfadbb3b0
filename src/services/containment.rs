use super::dates::ParsedStay;

/// Whether `reservation` lies inside `booking`, both endpoints inclusive.
///
/// Zero-length and reversed reservations never cross.
pub fn is_crossing(booking: &ParsedStay<'_>, reservation: &ParsedStay<'_>) -> bool {
    let period = booking.period();
    reservation.end > reservation.start
        && period.contains(&reservation.start)
        && period.contains(&reservation.end)
}

pub mod input;
pub mod listing;
pub mod mission;
pub mod price_table;
pub mod rejection;
pub mod stay;

pub use input::CleaningInput;
pub use listing::Listing;
pub use mission::{Mission, MissionType, MissionsOutput};
pub use price_table::PriceTable;
pub use rejection::RejectionLogEntry;
pub use stay::{Booking, EntityType, Reservation, Stay};

pub mod auth_link;
pub mod day_type;
pub mod entry;
pub mod user;

pub use auth_link::AuthorizationLink;
pub use day_type::{DayType, Family, ALL_DAY_TYPES};
pub use entry::TrackingEntry;
pub use user::{UserProfile, UserType};

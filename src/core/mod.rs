pub mod balance;
pub mod calendar;
pub mod registry;
pub mod team;

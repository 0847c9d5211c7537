pub mod add;
pub mod balance;
pub mod calendar;
pub mod config;
pub mod daytypes;
pub mod db;
pub mod del;
pub mod holidays;
pub mod init;
pub mod log;
pub mod team;
pub mod user;

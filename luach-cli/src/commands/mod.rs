pub mod config;
pub mod convert;
pub mod events;
pub mod month;
pub mod onot;

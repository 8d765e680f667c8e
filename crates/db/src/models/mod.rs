pub mod actor;
pub mod dorama;
pub mod genre;
pub mod permission;
pub mod token;
pub mod user;

pub mod details;
pub mod race;
pub mod standings;

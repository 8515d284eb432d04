pub mod engine;
pub mod locations;
pub mod report;

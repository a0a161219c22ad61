pub mod application;
pub mod donation;
pub mod government;

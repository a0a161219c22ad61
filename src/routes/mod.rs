pub mod admin;
pub mod donation_routes;
pub mod government_routes;
pub mod health;
pub mod wizard;

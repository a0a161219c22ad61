pub mod fields;
pub mod membership;
pub mod session;
pub mod store;

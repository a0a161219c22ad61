pub mod application_service;
pub mod document_service;
pub mod donation_service;
pub mod feed_service;
pub mod government_service;

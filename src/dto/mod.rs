pub mod admin_dto;
pub mod donation_dto;
pub mod government_dto;
pub mod wizard_dto;

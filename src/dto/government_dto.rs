use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct GovernmentApplicationPayload {
    #[validate(length(min = 1))]
    pub position_id: String,
    #[validate(length(min = 1))]
    pub position_title: String,
    #[validate(length(min = 1))]
    pub department: String,
    #[validate(length(min = 2))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1))]
    pub qualifications: String,
    #[validate(length(min = 1))]
    pub experience: String,
    #[validate(length(min = 1))]
    pub vision: String,
}

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::government_dto::GovernmentApplicationPayload;
use crate::error::{Error, Result};
use crate::models::government::{
    GovernmentApplication, GovernmentPosition, GOVERNMENT_APPLICATION_STATUSES,
};

const GOVERNMENT_COLUMNS: &str = "id, position_id, position_title, department, name, email, \
     phone, qualifications, experience, vision, status, created_at, updated_at";

/// Seats advertised on the vacancies page.
pub const POSITIONS: &[GovernmentPosition] = &[
    GovernmentPosition {
        id: "minister-foreign-affairs",
        title: "Minister of Foreign Affairs",
        department: "Ministry of Foreign Affairs",
        status: "vacant",
        requirements: "Diplomatic experience, international relations background",
    },
    GovernmentPosition {
        id: "minister-justice",
        title: "Minister of Justice",
        department: "Ministry of Justice",
        status: "vacant",
        requirements: "Legal background, judicial experience preferred",
    },
    GovernmentPosition {
        id: "minister-defense",
        title: "Minister of Defense",
        department: "Ministry of Defense",
        status: "vacant",
        requirements: "Military or security background, strategic planning experience",
    },
    GovernmentPosition {
        id: "minister-development",
        title: "Minister of Development",
        department: "Ministry of Development",
        status: "vacant",
        requirements: "Infrastructure or economic development experience",
    },
    GovernmentPosition {
        id: "member-parliament",
        title: "Member of Parliament",
        department: "Verdian Parliament",
        status: "vacant",
        requirements: "Parliamentary experience, strong communication skills",
    },
    GovernmentPosition {
        id: "ambassador",
        title: "Ambassador",
        department: "Ministry of Foreign Affairs",
        status: "vacant",
        requirements: "Diplomatic experience, multilingual abilities, international relations background",
    },
];

#[derive(Clone)]
pub struct GovernmentService {
    pool: PgPool,
}

impl GovernmentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn positions(&self) -> &'static [GovernmentPosition] {
        POSITIONS
    }

    pub async fn create(
        &self,
        payload: GovernmentApplicationPayload,
    ) -> Result<GovernmentApplication> {
        let sql = format!(
            "INSERT INTO government_applications (
                position_id, position_title, department, name, email, phone,
                qualifications, experience, vision, status
            ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,'pending')
            RETURNING {GOVERNMENT_COLUMNS}"
        );
        let application = sqlx::query_as::<_, GovernmentApplication>(&sql)
            .bind(&payload.position_id)
            .bind(&payload.position_title)
            .bind(&payload.department)
            .bind(&payload.name)
            .bind(&payload.email)
            .bind(&payload.phone)
            .bind(&payload.qualifications)
            .bind(&payload.experience)
            .bind(&payload.vision)
            .fetch_one(&self.pool)
            .await?;
        Ok(application)
    }

    pub async fn list(&self) -> Result<Vec<GovernmentApplication>> {
        let sql = format!(
            "SELECT {GOVERNMENT_COLUMNS}
             FROM government_applications
             ORDER BY created_at DESC"
        );
        let applications = sqlx::query_as::<_, GovernmentApplication>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(applications)
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<GovernmentApplication> {
        if !GOVERNMENT_APPLICATION_STATUSES.contains(&status) {
            return Err(Error::BadRequest(format!(
                "Invalid application status: {}",
                status
            )));
        }
        let sql = format!(
            "UPDATE government_applications
             SET status = $1, updated_at = NOW()
             WHERE id = $2
             RETURNING {GOVERNMENT_COLUMNS}"
        );
        let application = sqlx::query_as::<_, GovernmentApplication>(&sql)
            .bind(status)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(application)
    }
}

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::application::{ApplicationRecord, CitizenshipApplication, APPLICATION_STATUSES};

const APPLICATION_COLUMNS: &str = "id, membership_id, first_name, last_name, email, phone, \
     date_of_birth, nationality, address, occupation, education, skills, motivation, \
     criminal_record, agree_terms, status, created_at, updated_at";

#[derive(Clone)]
pub struct ApplicationService {
    pool: PgPool,
}

impl ApplicationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a frozen application with its membership id, status `pending`.
    pub async fn insert(
        &self,
        record: &ApplicationRecord,
        membership_id: &str,
    ) -> Result<CitizenshipApplication> {
        let sql = format!(
            "INSERT INTO citizenship_applications (
                membership_id, first_name, last_name, email, phone, date_of_birth,
                nationality, address, occupation, education, skills, motivation,
                criminal_record, agree_terms, status
            ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11,$12,$13,$14,'pending')
            RETURNING {APPLICATION_COLUMNS}"
        );
        let application = sqlx::query_as::<_, CitizenshipApplication>(&sql)
            .bind(membership_id)
            .bind(&record.first_name)
            .bind(&record.last_name)
            .bind(&record.email)
            .bind(&record.phone)
            .bind(&record.date_of_birth)
            .bind(&record.nationality)
            .bind(&record.address)
            .bind(&record.occupation)
            .bind(&record.education)
            .bind(&record.skills)
            .bind(&record.motivation)
            .bind(&record.criminal_record)
            .bind(record.agree_terms)
            .fetch_one(&self.pool)
            .await?;
        Ok(application)
    }

    pub async fn list(&self) -> Result<Vec<CitizenshipApplication>> {
        let sql = format!(
            "SELECT {APPLICATION_COLUMNS}
             FROM citizenship_applications
             ORDER BY created_at DESC"
        );
        let applications = sqlx::query_as::<_, CitizenshipApplication>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(applications)
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<CitizenshipApplication> {
        if !APPLICATION_STATUSES.contains(&status) {
            return Err(Error::BadRequest(format!(
                "Invalid application status: {}",
                status
            )));
        }
        let sql = format!(
            "UPDATE citizenship_applications
             SET status = $1, updated_at = NOW()
             WHERE id = $2
             RETURNING {APPLICATION_COLUMNS}"
        );
        let application = sqlx::query_as::<_, CitizenshipApplication>(&sql)
            .bind(status)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(application)
    }

    pub async fn status_counts(&self) -> Result<HashMap<String, i64>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT status, COUNT(*) FROM citizenship_applications GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().collect())
    }
}

use std::collections::HashMap;

use sqlx::PgPool;

use crate::error::Result;
use crate::models::donation::Donation;

/// Static receiving address shown after a donation press. Payments are
/// never verified against it.
pub const DONATION_ADDRESS: &str =
    "bc1p53vpr7getgck5d4xva8xjgm7kldkwd7m0l837v7vv79j8vutxn3s3uux47";

#[derive(Clone)]
pub struct DonationService {
    pool: PgPool,
}

impl DonationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a donation-category button press.
    pub async fn track(&self, category: &str, email: Option<&str>) -> Result<Donation> {
        let donation = sqlx::query_as::<_, Donation>(
            "INSERT INTO donations (category, email)
             VALUES ($1, $2)
             RETURNING id, category, email, clicked_at",
        )
        .bind(category)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        Ok(donation)
    }

    pub async fn list(&self) -> Result<Vec<Donation>> {
        let donations = sqlx::query_as::<_, Donation>(
            "SELECT id, category, email, clicked_at
             FROM donations
             ORDER BY clicked_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(donations)
    }

    pub async fn category_counts(&self) -> Result<HashMap<String, i64>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT category, COUNT(*) FROM donations GROUP BY category",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().collect())
    }
}

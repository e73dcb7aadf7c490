use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

/// A parking spot row. `availability == false` exactly when `user_id` is set.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpot {
    pub id: i32,
    pub spot_number: i32,
    pub floor: i32,
    pub availability: bool,
    pub occupancy_time: Option<i32>,
    pub user_id: Option<i32>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl ParkingSpot {
    /// New spots start free with a zeroed occupancy counter. Duplicate spot
    /// numbers are allowed.
    pub async fn create(db: &PgPool, spot_number: i32, floor: i32) -> anyhow::Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO parking_spots
                (spot_number, floor, availability, occupancy_time, created_at, updated_at)
            VALUES ($1, $2, TRUE, 0, NOW(), NOW())
            RETURNING id
            "#,
        )
        .bind(spot_number)
        .bind(floor)
        .fetch_one(db)
        .await?;
        Ok(id)
    }

    /// Binds the spot to a user in a single unconditional statement. An
    /// existing assignment is overwritten; concurrent assigns on the same
    /// spot resolve last-write-wins at the storage layer.
    pub async fn assign(
        db: &PgPool,
        spot_id: i32,
        user_id: i32,
        occupancy_time: i32,
    ) -> anyhow::Result<u64> {
        let res = sqlx::query(
            r#"
            UPDATE parking_spots
            SET user_id = $1, occupancy_time = $2, availability = FALSE, updated_at = NOW()
            WHERE id = $3
            "#,
        )
        .bind(user_id)
        .bind(occupancy_time)
        .bind(spot_id)
        .execute(db)
        .await?;
        Ok(res.rows_affected())
    }

    /// Clears the assignment and marks the spot free again. Idempotent on an
    /// already-free spot; the stored occupancy_time value is left untouched.
    pub async fn unassign(db: &PgPool, spot_id: i32) -> anyhow::Result<u64> {
        let res = sqlx::query(
            r#"
            UPDATE parking_spots
            SET user_id = NULL, availability = TRUE, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(spot_id)
        .execute(db)
        .await?;
        Ok(res.rows_affected())
    }

    /// All free spots on a floor, storage order.
    pub async fn free_by_floor(db: &PgPool, floor: i32) -> anyhow::Result<Vec<ParkingSpot>> {
        let rows = sqlx::query_as::<_, ParkingSpot>(
            r#"
            SELECT id, spot_number, floor, availability, occupancy_time, user_id,
                   created_at, updated_at
            FROM parking_spots
            WHERE floor = $1 AND availability = TRUE
            "#,
        )
        .bind(floor)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// The spot currently held by `user_id`, if any.
    pub async fn find_by_user(db: &PgPool, user_id: i32) -> anyhow::Result<Option<ParkingSpot>> {
        let spot = sqlx::query_as::<_, ParkingSpot>(
            r#"
            SELECT id, spot_number, floor, availability, occupancy_time, user_id,
                   created_at, updated_at
            FROM parking_spots
            WHERE user_id = $1
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(spot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn spot_serializes_camel_case() {
        let spot = ParkingSpot {
            id: 5,
            spot_number: 12,
            floor: 2,
            availability: false,
            occupancy_time: Some(30),
            user_id: Some(3),
            created_at: datetime!(2024-01-01 00:00:00 UTC),
            updated_at: datetime!(2024-01-01 00:00:00 UTC),
        };
        let json = serde_json::to_string(&spot).expect("serializes");
        assert!(json.contains(r#""spotNumber":12"#));
        assert!(json.contains(r#""occupancyTime":30"#));
        assert!(json.contains(r#""userId":3"#));
        assert!(json.contains(r#""availability":false"#));
    }

    #[test]
    fn free_spot_has_null_user() {
        let spot = ParkingSpot {
            id: 1,
            spot_number: 1,
            floor: 0,
            availability: true,
            occupancy_time: Some(0),
            user_id: None,
            created_at: datetime!(2024-01-01 00:00:00 UTC),
            updated_at: datetime!(2024-01-01 00:00:00 UTC),
        };
        let json = serde_json::to_string(&spot).expect("serializes");
        assert!(json.contains(r#""userId":null"#));
    }
}

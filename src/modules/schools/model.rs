use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Public view of a school, returned from login and provisioning.
#[derive(Debug, Clone, Serialize, ToSchema, sqlx::FromRow)]
pub struct School {
    pub id: Uuid,
    pub school_code: String,
    pub lga_code: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// School row including the PIN hash; never serialized.
#[derive(Debug, sqlx::FromRow)]
pub struct SchoolWithPin {
    pub id: Uuid,
    pub school_code: String,
    pub lga_code: String,
    pub name: String,
    pub pin_hash: String,
    pub created_at: DateTime<Utc>,
}

impl SchoolWithPin {
    pub fn into_school(self) -> School {
        School {
            id: self.id,
            school_code: self.school_code,
            lga_code: self.lga_code,
            name: self.name,
            created_at: self.created_at,
        }
    }
}

//! User entity

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// A listener account mirrored from the external identity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    /// Subject assigned by the identity provider; also the ID used on the gateway
    pub external_id: String,
    pub full_name: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: Snowflake, external_id: String, full_name: String, image_url: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            external_id,
            full_name,
            image_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Join first and last name, skipping empty parts
    pub fn display_name(first_name: &str, last_name: &str) -> String {
        [first_name.trim(), last_name.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

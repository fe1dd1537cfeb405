//! Cafe API DTOs.
//!
//! The public payload shape is a compile-time contract: an explicit field
//! list on [`CafeDto`] and one envelope struct per response shape, instead of
//! reflecting over table columns.

use serde::{Deserialize, Serialize};

use crate::core::persistence::cafe::cafe_entity::CafeEntity;

#[derive(Debug, Serialize)]
pub struct CafeDto {
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

impl From<CafeEntity> for CafeDto {
    fn from(cafe: CafeEntity) -> Self {
        Self {
            id: cafe.id,
            name: cafe.name,
            map_url: cafe.map_url,
            img_url: cafe.img_url,
            location: cafe.location,
            seats: cafe.seats,
            has_toilet: cafe.has_toilet,
            has_wifi: cafe.has_wifi,
            has_sockets: cafe.has_sockets,
            can_take_calls: cafe.can_take_calls,
            coffee_price: cafe.coffee_price,
        }
    }
}

/// `{"cafe": {...}}`
#[derive(Serialize)]
pub struct CafeEnvelope {
    pub cafe: CafeDto,
}

/// `{"cafe": [...]}` — the list route keeps the singular key.
#[derive(Serialize)]
pub struct CafeListEnvelope {
    pub cafe: Vec<CafeDto>,
}

/// `{"cafes": [...]}`
#[derive(Serialize)]
pub struct SearchEnvelope {
    pub cafes: Vec<CafeDto>,
}

/// `{"response": {"success": "..."}}`
#[derive(Serialize)]
pub struct StatusEnvelope {
    pub response: StatusBody,
}

#[derive(Serialize)]
pub struct StatusBody {
    pub success: String,
}

impl StatusEnvelope {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            response: StatusBody {
                success: message.into(),
            },
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct SearchQuery {
    pub loc: String,
}

#[derive(Deserialize, Debug)]
pub struct UpdatePriceQuery {
    pub new_price: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ApiKeyQuery {
    pub api_key: Option<String>,
}

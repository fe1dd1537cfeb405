use sqlx::FromRow;

/// One row of the `cafe` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CafeEntity {
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    /// Exact-match search key.
    pub location: String,
    /// Free-form capacity description, e.g. "20-30".
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    /// The only field mutable after creation.
    pub coffee_price: Option<String>,
}

/// Insert input: everything except the generated id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCafe {
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

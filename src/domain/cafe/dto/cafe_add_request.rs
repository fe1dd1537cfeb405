use serde::Deserialize;
use validator::Validate;

use crate::core::persistence::cafe::cafe_entity::NewCafe;
use crate::errors::AppError;

/// Form payload for the add route. Field names are the wire contract
/// (`loc`, `toilet`, `wifi`, `sockets`, `calls`); amenity flags arrive as
/// strings and are parsed with [`parse_flag`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CafeAddRequest {
    #[validate(length(min = 1, max = 250))]
    pub name: String,
    #[validate(length(min = 1, max = 500))]
    pub map_url: String,
    #[validate(length(min = 1, max = 500))]
    pub img_url: String,
    #[serde(rename = "loc")]
    #[validate(length(min = 1, max = 250))]
    pub location: String,
    #[validate(length(min = 1, max = 250))]
    pub seats: String,
    #[serde(rename = "toilet")]
    pub has_toilet: String,
    #[serde(rename = "wifi")]
    pub has_wifi: String,
    #[serde(rename = "sockets")]
    pub has_sockets: String,
    #[serde(rename = "calls")]
    pub can_take_calls: String,
    #[validate(length(max = 250))]
    pub coffee_price: Option<String>,
}

impl CafeAddRequest {
    /// Parse the flag fields and produce the insert input.
    pub fn into_new_cafe(self) -> Result<NewCafe, AppError> {
        Ok(NewCafe {
            has_toilet: parse_flag("toilet", &self.has_toilet)?,
            has_wifi: parse_flag("wifi", &self.has_wifi)?,
            has_sockets: parse_flag("sockets", &self.has_sockets)?,
            can_take_calls: parse_flag("calls", &self.can_take_calls)?,
            name: self.name,
            map_url: self.map_url,
            img_url: self.img_url,
            location: self.location,
            seats: self.seats,
            coffee_price: self.coffee_price.filter(|p| !p.is_empty()),
        })
    }
}

/// Explicit boolean rule: "true"/"1" and "false"/"0", case-insensitive.
/// The empty string counts as false so an unchecked checkbox posting an
/// empty value behaves as absent. Anything else is a client error.
fn parse_flag(field: &str, value: &str) -> Result<bool, AppError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        other => Err(AppError::BadRequest(format!(
            "Invalid value {other:?} for {field}: expected true/false/1/0"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CafeAddRequest {
        CafeAddRequest {
            name: "Joe's".into(),
            map_url: "https://maps.example.com/joe".into(),
            img_url: "https://img.example.com/joe.jpg".into(),
            location: "NYC".into(),
            seats: "10-20".into(),
            has_toilet: "yes".into(),
            has_wifi: "".into(),
            has_sockets: "yes".into(),
            can_take_calls: "".into(),
            coffee_price: Some("$3".into()),
        }
    }

    #[test]
    fn parse_flag_accepts_the_documented_literals() {
        assert!(parse_flag("wifi", "true").unwrap());
        assert!(parse_flag("wifi", "TRUE").unwrap());
        assert!(parse_flag("wifi", "1").unwrap());
        assert!(!parse_flag("wifi", "false").unwrap());
        assert!(!parse_flag("wifi", "0").unwrap());
        assert!(!parse_flag("wifi", "").unwrap());
    }

    #[test]
    fn parse_flag_rejects_anything_else() {
        // "yes" was truthy in the old presence-based rule; now it is a 400.
        assert!(parse_flag("wifi", "yes").is_err());
        assert!(parse_flag("wifi", "maybe").is_err());
    }

    #[test]
    fn into_new_cafe_rejects_non_literal_flags() {
        let err = request().into_new_cafe();
        assert!(matches!(err, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn into_new_cafe_maps_fields() {
        let mut req = request();
        req.has_toilet = "true".into();
        req.has_sockets = "1".into();

        let cafe = req.into_new_cafe().unwrap();
        assert_eq!(cafe.location, "NYC");
        assert!(cafe.has_toilet);
        assert!(cafe.has_sockets);
        assert!(!cafe.has_wifi);
        assert!(!cafe.can_take_calls);
        assert_eq!(cafe.coffee_price.as_deref(), Some("$3"));
    }

    #[test]
    fn empty_coffee_price_becomes_none() {
        let mut req = request();
        req.has_toilet = "true".into();
        req.has_sockets = "true".into();
        req.coffee_price = Some("".into());

        let cafe = req.into_new_cafe().unwrap();
        assert_eq!(cafe.coffee_price, None);
    }
}

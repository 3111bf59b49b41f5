use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Country catalog document, collection `country`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CountryEntity {
    /// Store-generated identifier; absent until the first insert.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub name: String,
    /// ISO country code.
    pub cca: String,
    pub currency_code: String,
    pub currency: String,
    pub capital: String,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subregion: Option<String>,
    /// Surface area in square kilometres.
    pub area: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
    pub population: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_url: Option<String>,
    /// Epoch millis.
    pub created_at: i64,
    /// Epoch millis, refreshed on every mutation.
    pub updated_at: i64,
}

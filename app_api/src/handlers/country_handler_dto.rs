use biz_service::entitys::country_entity::CountryEntity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body of `POST /countries`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCountryDto {
    #[validate(length(min = 1))]
    pub name: String,
    /// ISO country code.
    #[validate(length(min = 1))]
    pub cca: String,
    #[validate(length(min = 1))]
    pub currency_code: String,
    #[validate(length(min = 1))]
    pub currency: String,
    #[validate(length(min = 1))]
    pub capital: String,
    #[validate(length(min = 1))]
    pub region: String,
    pub subregion: Option<String>,
    pub area: f64,
    pub map_url: Option<String>,
    pub population: i64,
    pub flag_url: Option<String>,
}

impl CreateCountryDto {
    /// Unsaved entity; the service stamps the timestamps on insert.
    pub fn into_entity(self) -> CountryEntity {
        CountryEntity {
            id: None,
            name: self.name,
            cca: self.cca,
            currency_code: self.currency_code,
            currency: self.currency,
            capital: self.capital,
            region: self.region,
            subregion: self.subregion,
            area: self.area,
            map_url: self.map_url,
            population: self.population,
            flag_url: self.flag_url,
            created_at: 0,
            updated_at: 0,
        }
    }
}

/// Query string of `GET /countries`.
#[derive(Debug, Deserialize)]
pub struct ListCountriesQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub sort_by: Option<String>,
}

/// Body of the 201 response to `POST /countries`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CountryCreatedResponse {
    pub name: String,
    #[serde(rename = "_id")]
    pub id: String,
    pub request: RequestEcho,
}

/// Follow-up request pointing at the created resource.
#[derive(Debug, Serialize, ToSchema)]
pub struct RequestEcho {
    #[serde(rename = "type")]
    pub method: String,
    pub url: String,
}

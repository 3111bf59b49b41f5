use serde::Deserialize;
use utoipa::ToSchema;

/// Request body of `POST /countries/{id}/neighbours`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddNeighbourDto {
    pub neighbour_country_id: String,
}

/// Query string of `GET /countries/{id}/neighbours`.
#[derive(Debug, Deserialize)]
pub struct NeighbourPageQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

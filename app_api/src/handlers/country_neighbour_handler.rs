use crate::handlers::country_neighbour_handler_dto::{AddNeighbourDto, NeighbourPageQuery};
use crate::result::ApiResponse;
use actix_web::{HttpResponse, Responder, get, post, web};
use biz_service::biz_service::country_neighbour_service::{CountryNeighbourService, NeighbourPage};
use biz_service::biz_service::country_service::CountryService;
use common::errors::AppError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_neighbours);
    cfg.service(add_neighbour);
}

#[utoipa::path(
    get,
    path = "/countries/{country_id}/neighbours",
    tag = "Neighbour",
    responses(
        (status = 200, description = "Resolved neighbour countries", body = ApiResponse<NeighbourPage>),
        (status = 400, description = "Malformed country id")
    )
)]
#[get("/countries/{country_id}/neighbours")]
pub async fn list_neighbours(
    path: web::Path<String>,
    query: web::Query<NeighbourPageQuery>,
    countries: web::Data<CountryService>,
    neighbours: web::Data<CountryNeighbourService>,
) -> Result<impl Responder, AppError> {
    let page = query.page.unwrap_or(1);
    let per_page = query.per_page.unwrap_or(10);
    let data = neighbours.list_neighbours(&countries, &path.into_inner(), page, per_page).await?;
    Ok(web::Json(ApiResponse::new("Neighbour Countries", data)))
}

#[utoipa::path(
    post,
    path = "/countries/{country_id}/neighbours",
    tag = "Neighbour",
    request_body = AddNeighbourDto,
    responses(
        (status = 201, description = "Neighbour relation recorded"),
        (status = 400, description = "Malformed id or already neighbours"),
        (status = 404, description = "Either country is missing")
    )
)]
#[post("/countries/{country_id}/neighbours")]
pub async fn add_neighbour(
    path: web::Path<String>,
    payload: web::Json<AddNeighbourDto>,
    countries: web::Data<CountryService>,
    neighbours: web::Data<CountryNeighbourService>,
) -> Result<impl Responder, AppError> {
    neighbours.add_neighbour(&countries, &path.into_inner(), &payload.neighbour_country_id).await?;
    Ok(HttpResponse::Created().json(serde_json::json!({ "message": "Neighbour added successfully" })))
}

use crate::handlers::{common_handler, country_handler, country_neighbour_handler};
use crate::result::ApiResponse;
use actix_web::{HttpResponse, Responder, get, web};
use biz_service::biz_service::country_neighbour_service::NeighbourPage;
use biz_service::biz_service::country_service::CountryPage;
use biz_service::entitys::country_entity::CountryEntity;
use common::models::property_value::PropertyValue;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        common_handler::status,
        country_handler::list_countries,
        country_handler::create_country,
        country_handler::get_country,
        country_handler::update_country,
        country_neighbour_handler::list_neighbours,
        country_neighbour_handler::add_neighbour,
    ),
    components(schemas(
        CountryEntity,
        PropertyValue,
        ApiResponse<CountryPage>,
        ApiResponse<NeighbourPage>,
    )),
    tags(
        (name = "Country", description = "Country catalog endpoints"),
        (name = "Neighbour", description = "Country adjacency endpoints")
    )
)]
struct ApiDoc;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(openapi_json);
}

#[get("/openapi.json")]
async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().content_type("application/json").body(ApiDoc::openapi().to_json().unwrap())
}

use crate::handlers::country_handler_dto::{
    CountryCreatedResponse, CreateCountryDto, ListCountriesQuery, RequestEcho,
};
use crate::result::ApiResponse;
use actix_web::{HttpRequest, HttpResponse, Responder, get, patch, post, web};
use biz_service::biz_service::country_service::{CountryPage, CountryService};
use biz_service::entitys::country_entity::CountryEntity;
use common::errors::AppError;
use common::models::property_value::PropertyValue;
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_countries);
    cfg.service(create_country);
    cfg.service(get_country);
    cfg.service(update_country);
}

#[utoipa::path(
    get,
    path = "/countries",
    tag = "Country",
    responses(
        (status = 200, description = "Paginated country list", body = ApiResponse<CountryPage>),
        (status = 400, description = "Invalid page number"),
        (status = 404, description = "Page beyond the last one")
    )
)]
#[get("/countries")]
pub async fn list_countries(
    query: web::Query<ListCountriesQuery>,
    service: web::Data<CountryService>,
) -> Result<impl Responder, AppError> {
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(10);
    let data = service.list_countries(page, limit, query.sort_by.as_deref()).await?;
    Ok(web::Json(ApiResponse::new("List of Countries", data)))
}

#[utoipa::path(
    post,
    path = "/countries",
    tag = "Country",
    request_body = CreateCountryDto,
    responses(
        (status = 201, description = "Country created", body = CountryCreatedResponse),
        (status = 400, description = "Missing or empty required field"),
        (status = 500, description = "Store failure")
    )
)]
#[post("/countries")]
pub async fn create_country(
    req: HttpRequest,
    payload: web::Json<CreateCountryDto>,
    service: web::Data<CountryService>,
) -> Result<impl Responder, AppError> {
    payload.validate().map_err(|e| AppError::Validation(e.to_string()))?;
    let created = service.create_country(payload.into_inner().into_entity()).await?;

    let id = created.id.map(|id| id.to_hex()).unwrap_or_default();
    let info = req.connection_info();
    let url = format!("{}://{}{}/{}", info.scheme(), info.host(), req.path(), id);
    Ok(HttpResponse::Created().json(CountryCreatedResponse {
        name: created.name,
        id,
        request: RequestEcho { method: "GET".to_string(), url },
    }))
}

#[utoipa::path(
    get,
    path = "/countries/{country_id}",
    tag = "Country",
    responses(
        (status = 200, description = "Country document", body = CountryEntity),
        (status = 400, description = "Malformed country id"),
        (status = 404, description = "No country with that id")
    )
)]
#[get("/countries/{country_id}")]
pub async fn get_country(
    path: web::Path<String>,
    service: web::Data<CountryService>,
) -> Result<impl Responder, AppError> {
    let country = service.get_country(&path.into_inner()).await?;
    Ok(web::Json(country))
}

#[utoipa::path(
    patch,
    path = "/countries/{country_id}",
    tag = "Country",
    request_body = Vec<PropertyValue>,
    responses(
        (status = 200, description = "Country updated"),
        (status = 400, description = "Malformed id, unknown property or bad value type"),
        (status = 404, description = "No country with that id")
    )
)]
#[patch("/countries/{country_id}")]
pub async fn update_country(
    path: web::Path<String>,
    ops: web::Json<Vec<PropertyValue>>,
    service: web::Data<CountryService>,
) -> Result<impl Responder, AppError> {
    service.update_country(&path.into_inner(), ops.as_slice()).await?;
    Ok(web::Json(serde_json::json!({ "message": "Country updated successfully" })))
}

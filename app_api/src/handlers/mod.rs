pub mod common_handler;
pub mod country_handler;
pub mod country_handler_dto;
pub mod country_neighbour_handler;
pub mod country_neighbour_handler_dto;
pub mod swagger;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    common_handler::configure(cfg);
    country_handler::configure(cfg);
    country_neighbour_handler::configure(cfg);
    swagger::configure(cfg);
}

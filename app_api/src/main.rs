use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use app_api::handlers;
use biz_service::biz_service::country_neighbour_service::CountryNeighbourService;
use biz_service::biz_service::country_service::CountryService;
use common::config::AppConfig;
use log::{LevelFilter, warn};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use std::str::FromStr;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::load("api-config.toml").expect("Failed to load configuration");
    init_log(&config);

    let db = init_mongo_db(&config).await;
    let country_service = web::Data::new(CountryService::new(&db));
    let neighbour_service = web::Data::new(CountryNeighbourService::new(&db));
    neighbour_service.ensure_indexes().await.expect("Failed to create MongoDB indexes");

    let address_and_port = format!("{}:{}", &config.server.host, &config.server.port);
    warn!("Starting server on {}", address_and_port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(country_service.clone())
            .app_data(neighbour_service.clone())
            .configure(|cfg| {
                handlers::configure(cfg);
            })
    })
    .keep_alive(actix_web::http::KeepAlive::Timeout(std::time::Duration::from_secs(600)))
    .bind(address_and_port)?
    .run()
    .await
}

fn init_log(config: &AppConfig) {
    let level = LevelFilter::from_str(&config.sys.log_level).unwrap_or(LevelFilter::Info);
    env_logger::Builder::new().filter(None, level).init();
}

async fn init_mongo_db(config: &AppConfig) -> Database {
    let client_options = ClientOptions::parse(&config.database.url).await.expect("MongoDB URI ERROR");
    let client = Client::with_options(client_options).expect("CLIENT MongoDB ERROR");
    client.database(&config.database.db_name)
}

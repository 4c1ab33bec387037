mod api;
mod config;
mod data_source;
mod validation;

use crate::config::Config;
use crate::data_source::store::PlayerStore;
use crate::data_source::writer::Persistence;
use crate::data_source::{load_players, PlayerRepository};
use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use log::{error, info};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();

    let players = match load_players(&config.data_file) {
        Ok(players) => players,
        Err(e) => {
            error!("Data couldn't be read! Error: {}", e);
            return Err(io::Error::new(io::ErrorKind::InvalidData, e.to_string()));
        }
    };

    let store = PlayerStore::new(players);
    info!("Loaded {} players", store.len());

    let (persistence, writer) = Persistence::spawn(config.data_file.clone());
    let repo = web::Data::new(PlayerRepository::new(store, persistence));
    let public_dir = config.public_dir.clone();

    info!("Listening on {}:{}...", config.host, config.port);

    let app_repo = repo.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(app_repo.clone())
            .configure(api::configure)
            .service(api::public_files(&public_dir))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    repo.persistence().shutdown().await;
    if let Err(e) = writer.await {
        error!("Writer task failed: {}", e);
    }

    Ok(())
}

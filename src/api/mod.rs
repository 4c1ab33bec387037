pub mod player;

use actix_files::Files;
use actix_web::http::header::ContentType;
use actix_web::{error, web, HttpResponse};

use crate::api::player::create_player::create_player;
use crate::api::player::delete_player::delete_player;
use crate::api::player::get_all_players::get_all_players;
use crate::api::player::get_player::get_player;
use crate::api::player::update_player::update_player;
use std::path::Path;

pub const NOT_FOUND_MESSAGE: &str = "Záznam nebyl nalezen.";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(get_all_players)
        .service(get_player)
        .service(create_player)
        .service(update_player)
        .service(delete_player);
}

/// The browser client, mounted at `/`. Register after the API routes.
pub fn public_files(dir: &Path) -> Files {
    Files::new("/", dir).index_file("index.html")
}

/// Malformed JSON bodies get the same plain-text 400 as validation failures.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = bad_request(err.to_string());
        error::InternalError::from_response(err, response).into()
    })
}

pub fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .insert_header(ContentType::plaintext())
        .body(NOT_FOUND_MESSAGE)
}

pub fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest()
        .insert_header(ContentType::plaintext())
        .body(message)
}

/// Ids that are not positive integers cannot match any record.
pub fn parse_id(raw: &str) -> Option<u64> {
    match raw.parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(id) => Some(id),
    }
}

#[cfg(test)]
mod tests;

use crate::api::{bad_request, not_found, parse_id};
use crate::data_source::{MutationError, PlayerRepository};
use actix_web::{put, web, HttpResponse, Responder};
use log::warn;
use serde_json::Value;

#[put("/players/{id}")]
pub async fn update_player(
    path: web::Path<String>,
    body: web::Json<Value>,
    repo: web::Data<PlayerRepository>,
) -> impl Responder {
    let id = match parse_id(&path.into_inner()) {
        Some(id) => id,
        None => return not_found(),
    };

    match repo.update(id, &body) {
        Ok(player) => HttpResponse::Ok().json(player),
        Err(MutationError::NotFound) => not_found(),
        Err(MutationError::Invalid(e)) => {
            warn!("Rejected update of player {}, field {}: {}", id, e.field().unwrap_or("body"), e);
            bad_request(e.to_string())
        }
    }
}

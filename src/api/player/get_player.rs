use crate::api::{not_found, parse_id};
use crate::data_source::PlayerRepository;
use actix_web::{get, web, HttpResponse, Responder};

#[get("/players/{id}")]
pub async fn get_player(path: web::Path<String>, repo: web::Data<PlayerRepository>) -> impl Responder {
    let id = match parse_id(&path.into_inner()) {
        Some(id) => id,
        None => return not_found(),
    };

    match repo.get(id) {
        Some(player) => HttpResponse::Ok().json(player),
        None => not_found(),
    }
}

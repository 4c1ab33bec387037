use crate::api::{not_found, parse_id};
use crate::data_source::PlayerRepository;
use actix_web::{delete, web, HttpResponse, Responder};
use log::info;

#[delete("/players/{id}")]
pub async fn delete_player(path: web::Path<String>, repo: web::Data<PlayerRepository>) -> impl Responder {
    let id = match parse_id(&path.into_inner()) {
        Some(id) => id,
        None => return not_found(),
    };

    match repo.delete(id) {
        Some(player) => {
            info!("Deleted player {}", player.id);
            HttpResponse::Ok().json(player)
        }
        None => not_found(),
    }
}

use crate::api::bad_request;
use crate::data_source::PlayerRepository;
use actix_web::{post, web, HttpResponse, Responder};
use log::{info, warn};
use serde_json::Value;

#[post("/players")]
pub async fn create_player(body: web::Json<Value>, repo: web::Data<PlayerRepository>) -> impl Responder {
    match repo.create(&body) {
        Ok(player) => {
            info!("Created player {}", player.id);
            HttpResponse::Ok().json(player)
        }
        Err(e) => {
            warn!("Rejected new player, field {}: {}", e.field().unwrap_or("body"), e);
            bad_request(e.to_string())
        }
    }
}

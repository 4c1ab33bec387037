use crate::data_source::PlayerRepository;
use actix_web::{get, web, HttpResponse, Responder};

#[get("/players")]
pub async fn get_all_players(repo: web::Data<PlayerRepository>) -> impl Responder {
    HttpResponse::Ok().json(repo.list())
}

use super::*;
use crate::data_source::player::Player;
use crate::data_source::store::PlayerStore;
use crate::data_source::writer::Persistence;
use crate::data_source::{load_players, PlayerRepository};
use actix_web::http::StatusCode;
use actix_web::{test, App};
use serde_json::json;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

struct Fixture {
    _dir: TempDir,
    path: PathBuf,
    repo: web::Data<PlayerRepository>,
}

fn fixture(players: Vec<Player>) -> Fixture {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("players.json");
    let (persistence, _handle) = Persistence::spawn(path.clone());
    let repo = web::Data::new(PlayerRepository::new(PlayerStore::new(players), persistence));

    Fixture {
        _dir: dir,
        path,
        repo,
    }
}

fn seed() -> Vec<Player> {
    vec![
        Player {
            id: 1,
            name: "Jan Novak".to_string(),
            state: Some("CZE".to_string()),
            points: 120.5,
        },
        Player {
            id: 2,
            name: "Eva Kral".to_string(),
            state: None,
            points: 88.0,
        },
    ]
}

macro_rules! app {
    ($fixture:expr) => {
        test::init_service(
            App::new()
                .app_data($fixture.repo.clone())
                .configure(configure),
        )
        .await
    };
}

#[actix_web::test]
async fn lists_all_players() {
    let fx = fixture(seed());
    let app = app!(fx);

    let req = test::TestRequest::get().uri("/players").to_request();
    let players: Vec<Player> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(players, seed());
}

#[actix_web::test]
async fn gets_one_player_by_id() {
    let fx = fixture(seed());
    let app = app!(fx);

    let req = test::TestRequest::get().uri("/players/2").to_request();
    let player: Player = test::call_and_read_body_json(&app, req).await;

    assert_eq!(player, seed()[1]);
}

#[actix_web::test]
async fn unknown_ids_are_404_for_get_put_and_delete() {
    let fx = fixture(seed());
    let app = app!(fx);
    let body = json!({"name": "Jan", "points": 1});

    let requests = vec![
        test::TestRequest::get().uri("/players/99").to_request(),
        test::TestRequest::put()
            .uri("/players/99")
            .set_json(&body)
            .to_request(),
        test::TestRequest::delete().uri("/players/99").to_request(),
        test::TestRequest::get().uri("/players/abc").to_request(),
        test::TestRequest::delete().uri("/players/0").to_request(),
    ];

    for req in requests {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let text = test::read_body(resp).await;
        assert_eq!(text, NOT_FOUND_MESSAGE.as_bytes());
    }
}

#[actix_web::test]
async fn create_assigns_next_id_and_appends() {
    let fx = fixture(seed());
    let app = app!(fx);

    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(json!({"name": "Petr", "state": "USA", "points": 10.25}))
        .to_request();
    let created: Player = test::call_and_read_body_json(&app, req).await;

    assert_eq!(created.id, 3);
    assert_eq!(created.state.as_deref(), Some("USA"));
    assert_eq!(fx.repo.list().len(), 3);
}

#[actix_web::test]
async fn first_player_gets_id_one() {
    let fx = fixture(vec![]);
    let app = app!(fx);

    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(json!({"name": "Petr", "points": 1}))
        .to_request();
    let created: Player = test::call_and_read_body_json(&app, req).await;

    assert_eq!(created.id, 1);
}

#[actix_web::test]
async fn invalid_create_is_400_and_appends_nothing() {
    let fx = fixture(seed());
    let app = app!(fx);

    let cases = [
        (
            json!({"name": "P", "points": 1}),
            "\"name\" length must be at least 2 characters long",
        ),
        (
            json!({"name": "Petr", "points": 0}),
            "\"points\" must be a positive number",
        ),
        (
            json!({"name": "Petr", "points": -5}),
            "\"points\" must be a positive number",
        ),
        (
            json!({"name": "Petr", "state": "usa", "points": 1}),
            "\"state\" with value \"usa\" fails to match the required pattern: /^[A-Z]{3}$/",
        ),
    ];

    for (body, message) in cases {
        let req = test::TestRequest::post()
            .uri("/players")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {}", body);
        let text = test::read_body(resp).await;
        assert_eq!(text, message.as_bytes());
    }

    assert_eq!(fx.repo.list().len(), 2);
}

#[actix_web::test]
async fn malformed_json_is_400() {
    let fx = fixture(seed());
    let app = app!(fx);

    let req = test::TestRequest::post()
        .uri("/players")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(fx.repo.list().len(), 2);
}

#[actix_web::test]
async fn update_then_get_returns_new_fields() {
    let fx = fixture(seed());
    let app = app!(fx);

    let req = test::TestRequest::put()
        .uri("/players/1")
        .set_json(json!({"name": "Jan Novy", "state": "SVK", "points": "99.9"}))
        .to_request();
    let updated: Player = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated.id, 1);

    let req = test::TestRequest::get().uri("/players/1").to_request();
    let fetched: Player = test::call_and_read_body_json(&app, req).await;

    assert_eq!(fetched, updated);
    assert_eq!(fetched.name, "Jan Novy");
    assert_eq!(fetched.state.as_deref(), Some("SVK"));
    assert_eq!(fetched.points, 99.9);
}

#[actix_web::test]
async fn invalid_update_is_400_and_changes_nothing() {
    let fx = fixture(seed());
    let app = app!(fx);

    let req = test::TestRequest::put()
        .uri("/players/1")
        .set_json(json!({"name": "Jan", "points": 0.001}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(fx.repo.get(1), Some(seed()[0].clone()));
}

#[actix_web::test]
async fn extra_decimals_are_rounded_and_stored() {
    let fx = fixture(seed());
    let app = app!(fx);

    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(json!({"name": "Petr", "points": 12.346}))
        .to_request();
    let created: Player = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created.points, 12.35);

    let req = test::TestRequest::put()
        .uri("/players/1")
        .set_json(json!({"name": "Jan", "points": "1.234"}))
        .to_request();
    let updated: Player = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated.points, 1.23);
    assert_eq!(fx.repo.get(1).map(|p| p.points), Some(1.23));
}

#[actix_web::test]
async fn create_after_deleting_everything_gets_id_one() {
    let fx = fixture(seed());
    let app = app!(fx);

    for id in [1, 2] {
        let req = test::TestRequest::delete()
            .uri(&format!("/players/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
    assert!(fx.repo.list().is_empty());

    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(json!({"name": "Petr", "points": 5}))
        .to_request();
    let created: Player = test::call_and_read_body_json(&app, req).await;

    assert_eq!(created.id, 1);
}

#[actix_web::test]
async fn serves_the_client_next_to_the_api() {
    let fx = fixture(seed());
    let public = tempdir().expect("tempdir");
    std::fs::write(public.path().join("index.html"), "<h1>Hráči</h1>").expect("index");
    std::fs::create_dir(public.path().join("js")).expect("js dir");
    std::fs::write(public.path().join("js").join("main.js"), "getAll();").expect("main.js");

    let app = test::init_service(
        App::new()
            .app_data(fx.repo.clone())
            .configure(configure)
            .service(public_files(public.path())),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "<h1>Hráči</h1>".as_bytes());

    let req = test::TestRequest::get().uri("/js/main.js").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, "getAll();".as_bytes());

    let req = test::TestRequest::get().uri("/players").to_request();
    let players: Vec<Player> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(players, seed());

    let req = test::TestRequest::get().uri("/missing.css").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_removes_exactly_one() {
    let fx = fixture(seed());
    let app = app!(fx);

    let req = test::TestRequest::delete().uri("/players/1").to_request();
    let deleted: Player = test::call_and_read_body_json(&app, req).await;
    assert_eq!(deleted, seed()[0]);

    let req = test::TestRequest::get().uri("/players/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/players").to_request();
    let players: Vec<Player> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(players.len(), 1);
}

#[actix_web::test]
async fn restart_sees_the_last_saved_collection() {
    let fx = fixture(seed());
    let app = app!(fx);

    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(json!({"name": "Petr", "points": 3}))
        .to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::delete().uri("/players/2").to_request();
    test::call_service(&app, req).await;

    fx.repo.persistence().flush().await;

    let reloaded = load_players(&fx.path).expect("reload");
    assert_eq!(reloaded, fx.repo.list());

    let restarted = fixture(reloaded);
    let app = app!(restarted);
    let req = test::TestRequest::get().uri("/players").to_request();
    let players: Vec<Player> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(players, fx.repo.list());
}

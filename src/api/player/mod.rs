pub mod create_player;
pub mod delete_player;
pub mod get_all_players;
pub mod get_player;
pub mod update_player;

pub mod error;
pub mod json_file;
pub mod player;
pub mod store;
pub mod writer;

use crate::data_source::error::DataSourceError;
use crate::data_source::json_file::read_json;
use crate::data_source::player::Player;
use crate::data_source::store::PlayerStore;
use crate::data_source::writer::Persistence;
use crate::validation::{validate_player, ValidationError};
use log::{info, warn};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MutationError {
    #[error("player not found")]
    NotFound,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Reads the player list from `path`.
///
/// A missing file is an empty list; anything else that goes wrong is an error.
pub fn load_players(path: &Path) -> Result<Vec<Player>, DataSourceError> {
    match read_json::<Vec<Player>>(path) {
        Ok(players) => {
            info!("Data was read successfully from file {}", path.display());
            Ok(players)
        }
        Err(DataSourceError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
            warn!("{} does not exist, starting with no players", path.display());
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

/// Shared application state: the player store plus the writer that persists it.
///
/// Each mutation schedules a snapshot while still holding the store lock, so
/// snapshots reach the writer in the same order as the mutations.
pub struct PlayerRepository {
    store: Mutex<PlayerStore>,
    persistence: Persistence,
}

impl PlayerRepository {
    pub fn new(store: PlayerStore, persistence: Persistence) -> Self {
        PlayerRepository {
            store: Mutex::new(store),
            persistence,
        }
    }

    fn lock(&self) -> MutexGuard<'_, PlayerStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self) -> Vec<Player> {
        self.lock().all().to_vec()
    }

    pub fn get(&self, id: u64) -> Option<Player> {
        self.lock().get(id).cloned()
    }

    pub fn create(&self, body: &Value) -> Result<Player, ValidationError> {
        let draft = validate_player(body)?;

        let mut store = self.lock();
        let player = store.create(draft);
        self.persistence.schedule(store.all().to_vec());

        Ok(player)
    }

    pub fn update(&self, id: u64, body: &Value) -> Result<Player, MutationError> {
        let mut store = self.lock();
        if !store.contains(id) {
            return Err(MutationError::NotFound);
        }

        let draft = validate_player(body)?;
        let player = store.update(id, draft).ok_or(MutationError::NotFound)?;
        self.persistence.schedule(store.all().to_vec());

        Ok(player)
    }

    pub fn delete(&self, id: u64) -> Option<Player> {
        let mut store = self.lock();
        let player = store.delete(id)?;
        self.persistence.schedule(store.all().to_vec());

        Some(player)
    }

    pub fn persistence(&self) -> &Persistence {
        &self.persistence
    }
}

use crate::data_source::player::{Player, PlayerDraft};

/// The in-memory player collection.
///
/// Ids come from a counter owned by the store, seeded from the largest id
/// present at load time. While the collection holds any record, an id handed
/// out once is not handed out again, even after its record is deleted. An
/// empty collection starts over at 1.
#[derive(Debug)]
pub struct PlayerStore {
    players: Vec<Player>,
    next_id: u64,
}

impl PlayerStore {
    pub fn new(players: Vec<Player>) -> Self {
        let next_id = players.iter().map(|p| p.id).max().unwrap_or(0) + 1;

        PlayerStore { players, next_id }
    }

    pub fn all(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn get(&self, id: u64) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.get(id).is_some()
    }

    pub fn create(&mut self, draft: PlayerDraft) -> Player {
        if self.players.is_empty() {
            self.next_id = 1;
        }

        let player = Player::from_draft(self.next_id, draft);
        self.next_id += 1;
        self.players.push(player.clone());

        player
    }

    pub fn update(&mut self, id: u64, draft: PlayerDraft) -> Option<Player> {
        let player = self.players.iter_mut().find(|p| p.id == id)?;
        player.apply(draft);

        Some(player.clone())
    }

    pub fn delete(&mut self, id: u64) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id == id)?;

        Some(self.players.remove(index))
    }
}

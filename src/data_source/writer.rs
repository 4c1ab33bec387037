use crate::data_source::json_file::write_json;
use crate::data_source::player::Player;
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

enum Command {
    Save(Vec<Player>),
    Flush(oneshot::Sender<()>),
    Shutdown(oneshot::Sender<()>),
}

/// Handle to the task that owns the data file.
///
/// Every snapshot goes through one channel to one task, so writes to the file
/// never overlap and land in the order they were scheduled.
#[derive(Clone)]
pub struct Persistence {
    tx: mpsc::UnboundedSender<Command>,
}

impl Persistence {
    /// Spawns the writer task on the current tokio runtime.
    pub fn spawn(path: PathBuf) -> (Self, JoinHandle<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_writer(path, rx));

        (Persistence { tx }, handle)
    }

    /// Queues a snapshot of the whole collection. Does not wait for the write.
    pub fn schedule(&self, snapshot: Vec<Player>) {
        if self.tx.send(Command::Save(snapshot)).is_err() {
            warn!("Writer is stopped, snapshot dropped");
        }
    }

    /// Resolves once everything scheduled before this call has been written.
    pub async fn flush(&self) {
        let (ack, done) = oneshot::channel();
        if self.tx.send(Command::Flush(ack)).is_ok() {
            let _ = done.await;
        }
    }

    /// Writes pending snapshots and stops the writer task.
    pub async fn shutdown(&self) {
        let (ack, done) = oneshot::channel();
        if self.tx.send(Command::Shutdown(ack)).is_ok() {
            let _ = done.await;
        }
    }
}

async fn run_writer(path: PathBuf, mut rx: mpsc::UnboundedReceiver<Command>) {
    let mut next = rx.recv().await;

    while let Some(command) = next.take() {
        match command {
            Command::Save(mut snapshot) => {
                // Only the newest of a run of queued snapshots needs to hit the disk.
                loop {
                    match rx.try_recv() {
                        Ok(Command::Save(newer)) => snapshot = newer,
                        Ok(other) => {
                            next = Some(other);
                            break;
                        }
                        Err(_) => break,
                    }
                }
                save(&path, &snapshot).await;
            }
            Command::Flush(ack) => {
                let _ = ack.send(());
            }
            Command::Shutdown(ack) => {
                info!("Writer for {} stopped", path.display());
                let _ = ack.send(());
                return;
            }
        }

        if next.is_none() {
            next = rx.recv().await;
        }
    }
}

async fn save(path: &Path, players: &[Player]) {
    match write_json(path, &players).await {
        Ok(_) => info!("Data was saved successfully to {}", path.display()),
        Err(e) => error!("Data couldn't be saved! Error: {}", e),
    }
}

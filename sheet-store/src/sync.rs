//! Sequenced roster sync.
//!
//! One event queue orders the initial load completion against local
//! edits, so the load-vs-edit race is a deliberate last-write-wins
//! instead of incidental timing. Saves are fire-and-forget: spawned,
//! never awaited by callers, and failures only logged.

use crate::client::CharacterStore;
use sheet_core::{Character, Intent, Roster};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::warn;

/// Events processed by the worker, strictly in arrival order.
#[derive(Debug)]
enum Event {
    /// The startup load finished. `None` when there was nothing to
    /// load (no document yet, or a logged failure).
    Loaded(Option<Vec<Character>>),
    Edit(Intent),
    Save,
}

/// Handle for issuing intents to a running [`SyncWorker`].
#[derive(Clone)]
pub struct RosterHandle {
    events: mpsc::UnboundedSender<Event>,
    snapshot: watch::Receiver<Roster>,
}

impl RosterHandle {
    /// Queue a mutation intent. Rejected intents are silent no-ops,
    /// applied (or not) in queue order.
    pub fn apply(&self, intent: Intent) {
        let _ = self.events.send(Event::Edit(intent));
    }

    /// Queue a save of the collection as it stands when the save event
    /// is processed.
    pub fn save(&self) {
        let _ = self.events.send(Event::Save);
    }

    /// Watch roster snapshots as they change.
    pub fn subscribe(&self) -> watch::Receiver<Roster> {
        self.snapshot.clone()
    }

    /// The current roster contents.
    pub fn snapshot(&self) -> Roster {
        self.snapshot.borrow().clone()
    }
}

/// Single-threaded owner of the roster. All mutations flow through its
/// event queue; the store is read once at startup and written only on
/// explicit save requests.
pub struct SyncWorker<S> {
    store: Arc<S>,
    roster: Roster,
    events: mpsc::UnboundedReceiver<Event>,
    loopback: Option<mpsc::UnboundedSender<Event>>,
    snapshot: watch::Sender<Roster>,
}

impl<S: CharacterStore> SyncWorker<S> {
    /// Create a worker and its handle. Nothing happens until
    /// [`SyncWorker::run`] is polled.
    pub fn new(store: S) -> (Self, RosterHandle) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(Roster::new());

        let worker = Self {
            store: Arc::new(store),
            roster: Roster::new(),
            events: events_rx,
            loopback: Some(events_tx.clone()),
            snapshot: snapshot_tx,
        };
        let handle = RosterHandle {
            events: events_tx,
            snapshot: snapshot_rx,
        };
        (worker, handle)
    }

    /// Request the startup load, then apply events until every handle
    /// is dropped.
    pub async fn run(mut self) {
        self.request_load();
        while let Some(event) = self.events.recv().await {
            match event {
                Event::Loaded(Some(characters)) => {
                    // A late-arriving load replaces whatever local
                    // edits landed first: last writer wins.
                    self.roster.replace(characters);
                }
                Event::Loaded(None) => {}
                Event::Edit(intent) => {
                    self.roster.apply(intent);
                }
                Event::Save => self.request_save(),
            }
            self.snapshot.send_replace(self.roster.clone());
        }
    }

    fn request_load(&mut self) {
        // The loopback sender is dropped with the load task, so `run`
        // ends once all handles are gone.
        let Some(events) = self.loopback.take() else {
            return;
        };
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            let loaded = match store.load().await {
                Ok(found) => found,
                Err(err) => {
                    warn!("failed to load characters: {err}");
                    None
                }
            };
            let _ = events.send(Event::Loaded(loaded));
        });
    }

    fn request_save(&self) {
        let store = Arc::clone(&self.store);
        let characters = self.roster.characters().to_vec();
        tokio::spawn(async move {
            if let Err(err) = store.save(&characters).await {
                warn!("failed to save characters: {err}");
            }
        });
    }
}

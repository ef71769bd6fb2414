//! Persistence for the character roster.
//!
//! This crate provides:
//! - An HTTP client for the key-value document endpoint that stores
//!   the whole character collection as one JSON array
//! - A single-queue sync worker that sequences load completions
//!   against local edits, making the load-vs-edit race an explicit
//!   last-write-wins
//!
//! Persistence is fire-and-forget: save failures are logged and local
//! state keeps going; a failed or missing load leaves the roster
//! empty.

pub mod client;
pub mod sync;

// Primary public API
pub use client::{CharacterStore, SheetClient, StoreError};
pub use sync::{RosterHandle, SyncWorker};

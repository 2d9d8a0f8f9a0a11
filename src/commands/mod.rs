// Film List - Commands Module
// Tauri commands called from the window

pub mod movies;

pub use movies::*;

use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::watchlist::Watchlist;

/// Presenter state managed by Tauri.
/// Holds only the database path and the current search text, NOT a Connection.
/// Each command opens a short-lived connection through the presenter.
pub struct WatchlistState(pub Mutex<Watchlist>);

impl WatchlistState {
    pub fn new(watchlist: Watchlist) -> Self {
        Self(Mutex::new(watchlist))
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, Watchlist>, String> {
        self.0.lock().map_err(|e| e.to_string())
    }
}

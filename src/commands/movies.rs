// Film List - Movie Commands
// Every command returns a fresh render of the whole list

use tauri::{AppHandle, State};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

use crate::constants::WARNING_DIALOG_TITLE;
use crate::error::FilmListError;
use crate::watchlist::WatchlistView;
use super::WatchlistState;

/// Render the list with the current search
#[tauri::command]
pub fn get_watchlist(state: State<WatchlistState>) -> Result<WatchlistView, String> {
    let list = state.lock()?;
    list.refresh().map_err(|e| e.to_string())
}

/// Add a movie from the form.
/// A blank title pops the warning dialog and leaves the form untouched.
#[tauri::command]
pub fn add_movie(app: AppHandle, state: State<WatchlistState>, title: String, genre: String) -> Result<WatchlistView, String> {
    let mut list = state.lock()?;
    match list.add(&title, &genre) {
        Ok(view) => Ok(view),
        Err(e @ FilmListError::EmptyTitle) => {
            app.dialog()
                .message(e.to_string())
                .kind(MessageDialogKind::Warning)
                .title(WARNING_DIALOG_TITLE)
                .show(|_| {});
            Err(e.to_string())
        }
        Err(e) => Err(e.to_string()),
    }
}

/// Flip a movie between Pending and Watched.
/// A row deleted elsewhere just re-renders without it.
#[tauri::command]
pub fn toggle_movie(state: State<WatchlistState>, id: i64) -> Result<WatchlistView, String> {
    let mut list = state.lock()?;
    let result = list.toggle(id);
    list.refresh_on_missing(result).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn delete_movie(state: State<WatchlistState>, id: i64) -> Result<WatchlistView, String> {
    let mut list = state.lock()?;
    let result = list.delete(id);
    list.refresh_on_missing(result).map_err(|e| e.to_string())
}

/// Live search, called on every key release
#[tauri::command]
pub fn search_movies(state: State<WatchlistState>, query: String) -> Result<WatchlistView, String> {
    let mut list = state.lock()?;
    list.set_search(&query).map_err(|e| e.to_string())
}

// Film List - Library Entry Point

pub mod constants;
pub mod error;
pub mod config;
pub mod db;
pub mod watchlist;

#[cfg(feature = "gui")]
pub mod commands;

#[cfg(feature = "gui")]
pub use commands::WatchlistState;

#[cfg(feature = "gui")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use config::AppConfig;
    use watchlist::Watchlist;

    let config = AppConfig::load(None);
    let db_path = config.db_path.clone();

    tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(config.log_level)
                .build(),
        )
        .plugin(tauri_plugin_dialog::init())
        .manage(WatchlistState::new(Watchlist::new(db_path.clone())))
        .setup(move |_app| {
            config.report_warnings();

            // Create the database file and table on launch
            db::open_db(&db_path)?;
            log::info!("{} using database {}", constants::APP_NAME, db_path.display());
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_watchlist,
            commands::add_movie,
            commands::toggle_movie,
            commands::delete_movie,
            commands::search_movies,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

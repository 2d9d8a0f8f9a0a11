fn main() {
    // tauri.conf.json and the window context are only needed for the desktop build
    #[cfg(feature = "gui")]
    tauri_build::build();
}

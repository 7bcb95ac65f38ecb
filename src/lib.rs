// WEE Site Engine - Core Library
// Exposes all modules for use in the TUI preview, web server, and tests

pub mod assets;
pub mod carousel;
pub mod content;
pub mod pages;
pub mod roster;
pub mod routes;

// Re-export commonly used types
pub use assets::{AssetIndex, ImageAsset, RoleDeclaration};
pub use carousel::{Carousel, Key, AUTOPLAY_INTERVAL};
pub use pages::{render, render_board, render_events, render_home, render_not_found, render_resources};
pub use roster::{build_roster, display_name_from_file, display_year, Member, YearGroup};
pub use routes::Route;

use std::path::PathBuf;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the photo scan root
pub const PHOTOS_DIR_ENV: &str = "WEE_PHOTOS_DIR";

/// Photo scan root: `WEE_PHOTOS_DIR` if set, `./photos` otherwise
pub fn photos_dir() -> PathBuf {
    std::env::var_os(PHOTOS_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("photos"))
}

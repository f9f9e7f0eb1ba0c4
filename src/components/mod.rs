pub mod app;
pub mod coin_badge;
pub mod complete_overlay;
pub mod game_screen;
pub mod piece_view;
pub mod settings_modal;
pub mod start_screen;
pub mod theme_screen;

pub use app::App;

pub mod genius;
pub mod genius_blocking;
pub mod root;
pub mod song;
pub use root::RootController;
pub use song::SongController;

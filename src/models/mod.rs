pub mod genius;
pub mod song;

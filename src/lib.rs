pub mod config;
pub mod difficulty;
pub mod game;
pub mod logging;
pub mod scores;
pub mod ui;

//! Text front end: configuration, rendering, interactive players and the
//! game loop.

pub mod config;
pub mod player;
pub mod render;
pub mod session;

pub use config::{CliOptions, GameConfig, PlayerKind};
pub use player::{HumanPlayer, SharedInput};
pub use render::render_board;
pub use session::{GameEnd, GameSession, SessionStatus};

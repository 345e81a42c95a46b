mod game_rng;
mod game_state;
mod settings;
mod snake;
pub mod topology;
mod types;

pub use game_rng::GameRng;
pub use game_state::CubeGameState;
pub use settings::CubeSettings;
pub use snake::Snake;
pub use types::{Cell, Command, Direction, Point};

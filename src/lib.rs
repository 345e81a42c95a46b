pub mod game;
pub mod logger;

pub use game::topology;
pub use game::{Cell, Command, CubeGameState, CubeSettings, Direction, GameRng, Point, Snake};

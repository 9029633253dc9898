mod config;
mod die;
mod game;
mod player;
mod rules;
mod state;
mod turn;
mod variant;

pub use config::*;
pub use die::*;
pub use game::*;
pub use player::*;
pub use rules::*;
pub use state::*;
pub use turn::*;
pub use variant::*;

pub mod fixture;
pub mod player;
pub mod team;

pub use fixture::{Fixture, PENDING_RESULT};
pub use player::Player;
pub use team::Team;

//! Rule-based inference of the next game situation (down, distance,
//! spot, possession) from a play-by-play feed's free-text summaries.

pub mod engine;
pub mod error;
pub mod feed;
pub mod patterns;
pub mod roster;
pub mod schema;

pub use engine::SituationEngine;
pub use error::{Result, SituationError};
pub use roster::{TeamCode, TeamRoster};

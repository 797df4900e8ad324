pub mod models;
pub mod play_type;
pub mod situation;

pub use models::*;
pub use play_type::*;
pub use situation::*;

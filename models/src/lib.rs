pub mod enhancement;
pub mod gold;
pub mod level;
pub mod repetition;

pub use enhancement::*;
pub use gold::*;
pub use level::*;
pub use repetition::*;

pub mod breakdown;
pub mod describe;
pub mod error;
pub mod request;
pub mod statics;
pub mod tariff;

pub use breakdown::*;
pub use describe::*;
pub use error::*;
pub use request::*;
pub use statics::*;
pub use tariff::*;

pub use models::{EnhancementKind, Gold, Level, RepetitionCount};

mod award;
mod level;
mod reward;
mod snapshot;

pub use award::*;
pub use level::*;
pub use reward::*;
pub use snapshot::*;

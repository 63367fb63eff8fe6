pub use self::{board::*, level::*};

pub(crate) mod board;
pub(crate) mod level;

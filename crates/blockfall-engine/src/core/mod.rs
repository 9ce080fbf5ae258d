pub use self::{board::*, collision::*, piece::*, render_board::*, shape::*};

pub(crate) mod board;
pub(crate) mod collision;
pub(crate) mod piece;
pub(crate) mod render_board;
pub(crate) mod shape;

pub mod constraint;
pub mod effects;
pub mod fold_line;
pub mod path;
pub mod split;

pub use constraint::ConstraintSet;
pub use fold_line::FoldLine;
pub use path::PeelPath;
pub use split::{split_box, BoundaryBox, RegionSplit};

mod expand;

pub use expand::{ExpandArgs, cmd_expand};

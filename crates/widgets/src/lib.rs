use workspace_hack as _;

pub use input::*;
pub use widget::*;

pub mod input;
pub mod widget;

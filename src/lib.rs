pub use graphics;
pub use widgets;

pub use crate::menu::MenuScreen;

mod menu;

mod layout;
mod route_pattern;
mod sidebar;
mod visibility;

pub mod prelude {
    pub use crate::layout::*;
    pub use crate::route_pattern::*;
    pub use crate::sidebar::*;
    pub use crate::visibility::*;
}

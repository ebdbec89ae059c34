mod keyboard;
mod pointer;
mod resize;

pub use keyboard::wire_escape_closes_modals;
pub use pointer::wire_pointer_parallax;
pub use resize::wire_container_resize;

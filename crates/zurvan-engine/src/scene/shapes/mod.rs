pub mod circle;
pub mod rect;

pub use circle::CircleCmd;
pub use rect::RectCmd;

pub mod direction;
pub mod numeric;
pub mod transform;
pub mod vector;

pub use direction::Direction;
pub use numeric::{frac, num, Numeric};
pub use transform::{Orientation, Transform};
pub use vector::{Vec2, Vec3};

mod image_point;
mod xzpoint;

pub use image_point::ImagePoint;
pub use xzpoint::XZPoint;

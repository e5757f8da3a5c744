pub mod icons;
pub mod progress;
pub mod review;

pub use progress::GenerationUI;

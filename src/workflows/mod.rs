pub mod hierarchy;
pub mod normalize;

// Pod classification
pub mod pods;

pub use pods::classify;

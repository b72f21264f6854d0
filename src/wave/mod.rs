pub mod clock;
pub mod params;
pub mod sampler;

pub mod area;
pub mod bayes;
pub mod config;
pub mod error;
pub mod renderer;
pub mod sampler;
pub mod search;
pub mod simulation;
pub mod strategy;
pub mod target;

pub use area::*;
pub use bayes::*;
pub use config::*;
pub use error::*;
pub use renderer::*;
pub use sampler::*;
pub use search::*;
pub use simulation::*;
pub use strategy::*;
pub use target::*;

pub mod resolvers;
pub mod types;

pub use resolvers::{MovieMutation, MovieQuery};
pub use types::Movie;

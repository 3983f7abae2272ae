pub mod directors;
pub mod movies;

pub use directors::{CreateDirectorData, UpdateDirectorData};
pub use movies::{CreateMovieData, UpdateMovieData};

pub mod first_fit;
pub mod least_loaded;
pub mod most_loaded;

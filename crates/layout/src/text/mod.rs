pub mod inline;
pub mod lines;
pub mod wrapper;

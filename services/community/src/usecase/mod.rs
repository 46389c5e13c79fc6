pub mod comment;
pub mod department;
pub mod directory;
pub mod keyword;
pub mod map;
pub mod school;
pub mod user;

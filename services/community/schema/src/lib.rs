//! sea-orm entities for the community service tables.

pub mod keyword_users;
pub mod keywords;
pub mod map_comments;
pub mod maps;
pub mod school_departments;
pub mod schools;
pub mod users;

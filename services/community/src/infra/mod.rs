pub mod db;
pub mod neis;

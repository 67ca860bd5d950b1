pub mod database;
pub mod repositories;
pub mod translations;
pub mod util;

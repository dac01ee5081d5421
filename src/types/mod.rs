pub mod record;
pub mod soil;
pub mod weather;

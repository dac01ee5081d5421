pub mod derive;
pub mod fetcher;

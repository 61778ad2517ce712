pub mod book;
pub mod collection;
pub mod stats;

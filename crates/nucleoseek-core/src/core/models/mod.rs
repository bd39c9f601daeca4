pub mod nucleus;
pub mod verdict;

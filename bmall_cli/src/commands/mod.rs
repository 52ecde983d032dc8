pub mod brands;
pub mod items;
pub mod skus;

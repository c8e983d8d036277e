pub mod a001_category;
pub mod a002_language;
pub mod a003_blog;
pub mod a004_product;
pub mod a005_order;
pub mod common;

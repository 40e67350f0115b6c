pub mod a001_category;

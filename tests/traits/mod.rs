pub mod iter_ext;
pub mod option_ext;

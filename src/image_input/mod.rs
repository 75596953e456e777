pub mod convert;
pub mod interface;

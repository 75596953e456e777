pub mod logger;
pub mod observable;

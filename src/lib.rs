pub mod classification;
pub mod config;
pub mod image_classifier;
pub mod image_input;
pub mod library;
pub mod result_display;

pub mod coordinator;
pub mod core;
pub mod render;

#[cfg(test)]
mod tests;

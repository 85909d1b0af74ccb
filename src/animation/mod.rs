pub mod beat;
pub mod spring;

pub mod def;
pub mod dsl;
pub mod model;
pub mod roster;

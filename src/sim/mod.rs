pub mod components;
pub mod module;
pub mod store;
pub mod systems;

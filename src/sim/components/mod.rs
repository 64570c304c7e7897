pub mod position;
pub mod unit;
pub mod vehicle;
pub mod velocity;

pub use position::Position;
pub use unit::Unit;
pub use vehicle::Vehicle;
pub use velocity::Velocity;

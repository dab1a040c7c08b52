mod unit;

pub use unit::{Unit, UnitKind};

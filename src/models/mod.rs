pub mod country;
pub mod currency;
pub mod event;
pub mod holiday;
pub mod plan;
pub mod selection;
pub mod sun;
pub mod weather;

pub mod explorer;
pub mod places;

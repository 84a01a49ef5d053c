pub mod activity;
pub mod participant;

pub use activity::{Activity, Catalog, NamedActivity};
pub use participant::initials;

pub mod admins;
pub mod lookup;
pub mod reporters;
pub mod reports;

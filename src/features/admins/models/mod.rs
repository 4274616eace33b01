mod admin;

pub use admin::Administrator;

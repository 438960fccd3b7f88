pub mod errors;
pub mod policy;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::run;

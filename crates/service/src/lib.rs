pub mod collection;
pub mod contact;
pub mod errors;

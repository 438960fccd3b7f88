pub mod contact_message;
pub mod db;
pub mod document;
pub mod errors;
pub mod oid;
pub mod project;
pub mod service;
pub mod team_member;

pub mod account;
pub mod check;
pub mod dashboard;
pub mod feedback;
pub mod quiz;
pub mod scan;
pub mod skin;

pub mod inspect;
pub mod provision;

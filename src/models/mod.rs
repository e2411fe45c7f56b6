// Model exports
pub mod domain;

pub use domain::{Address, BankAccount, Company, Product, User};

pub mod arithmetic;
pub mod control;
pub mod functions;
pub mod loops;
pub mod polymorphism;
pub mod tour;

pub use crate::domain::model::{Car, Employee, Person, Profile};
pub use crate::domain::ports::{Console, Vehicle, Worker};
pub use crate::utils::error::Result;

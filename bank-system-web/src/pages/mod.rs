pub mod register;

pub use register::{PageResult, RegisterPage, RegisterPageModel};

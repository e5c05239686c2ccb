//! Teamgate Accounts — account and department lifecycle orchestration.

pub mod service;

pub use service::{
    AccountService, ChangePasswordInput, DepartmentService, RegisterInput, UpdateProfileInput,
};

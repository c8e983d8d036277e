pub mod forgot_password;
pub mod login;

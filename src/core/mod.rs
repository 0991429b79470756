pub mod generator;
pub mod self_check;
pub mod validator;

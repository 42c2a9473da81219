pub mod print;
pub mod session;

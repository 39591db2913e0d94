pub mod commands;
pub mod session;
pub mod terminal;

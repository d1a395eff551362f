pub mod cycle;
pub mod session;

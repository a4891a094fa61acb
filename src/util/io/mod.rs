pub mod bus;
pub mod mqtt;

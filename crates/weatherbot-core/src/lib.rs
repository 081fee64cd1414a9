pub mod session;
pub mod ports;
pub mod event_bus;
pub mod runtime;

#[cfg(test)]
mod tests;

pub mod actions;
pub mod api;
pub mod bootstrap;
pub mod bulk;
pub mod polling;
pub mod state;
pub mod stats;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;

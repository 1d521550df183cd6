pub(crate) mod driver;
pub(crate) mod export;
pub(crate) mod schedule;
pub(crate) mod state;

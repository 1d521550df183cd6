pub(crate) mod command;
pub(crate) mod context;
pub(crate) mod cpu;
pub(crate) mod lip;
pub(crate) mod painter;

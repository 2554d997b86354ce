mod nullable;
pub mod spec;

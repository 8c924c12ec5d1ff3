// Route handlers, one module per surface.

pub mod classify;
pub mod form;

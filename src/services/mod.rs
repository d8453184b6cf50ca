// Service module exports

pub mod layout;
pub mod now;
pub mod source;

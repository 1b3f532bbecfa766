//! Record construction and rendering.

pub(crate) mod formatter;
pub(crate) mod record;

pub mod convert;
pub mod polygonize;
pub mod probe;

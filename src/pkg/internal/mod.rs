pub mod adaptors;
pub mod uploads;
pub mod validate;

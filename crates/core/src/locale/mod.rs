//! Locale module - locale selection and user-visible text tables.

mod locale_model;
mod texts;

pub use locale_model::{Locale, DEFAULT_LOCALE_KEY};
pub use texts::{Texts, EN_CA, FR_CA};

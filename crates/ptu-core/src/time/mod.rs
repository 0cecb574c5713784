mod calendar;
mod field;
mod ptu;
mod quarter;
mod unit;
pub mod zoned;

pub use calendar::PtuCalendar;
pub use field::TimeField;
pub use ptu::Ptu;
pub use quarter::Quarters;
pub use unit::TimeUnit;

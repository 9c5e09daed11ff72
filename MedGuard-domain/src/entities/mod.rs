// Domain entities
// Public shapes of everything the services accept and return.

pub mod auth;
pub mod bmi;
pub mod conversions;
pub mod disease;
pub mod drug;
pub mod metrics;
pub mod navigation;
pub mod notice;
pub mod pill;
pub mod reminder;
pub mod scan;

pub use notice::{Notice, NoticeVariant};

pub mod booking;
pub mod faq;
pub mod recommendation;

pub use booking::{BookingConfirmation, BookingRequest};
pub use faq::FaqTopic;
pub use recommendation::{Recommendation, UnitType};

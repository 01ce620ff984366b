pub mod booking;
pub mod budget;
pub mod faq;
pub mod recommend;

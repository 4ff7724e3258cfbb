//! Reusable presentation components.

pub mod common;

mod chat_input;
mod message_list;
mod profile_form;
mod turn_limit_banner;

pub use chat_input::ChatInput;
pub use message_list::MessageList;
pub use profile_form::ProfileForm;
pub use turn_limit_banner::TurnLimitBanner;

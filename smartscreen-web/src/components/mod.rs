pub mod chat_widget;
pub mod forms;
pub mod not_found;
pub mod page_host;
pub mod result_card;
pub mod splash;
pub mod veil;

//! SmartScreen Core
//!
//! Platform-agnostic logic for the SmartScreen bilingual front end: form
//! validation, the prediction API contract, result interpretation, the FAQ
//! chat state and the navigation shell's decisions. Nothing in this crate
//! touches the DOM or the network.

pub mod api;
pub mod chat;
pub mod forms;
pub mod fragment;
pub mod lang;
pub mod nav;
pub mod result;
pub mod session;
pub mod submit;

// Re-export commonly used types
pub use api::{
    ApiConfig, ApiError, ApiRequest, DEFAULT_API_BASE, Endpoint, Submission, decode_response,
};
pub use chat::{
    AVATAR_FRAME_MS, AvatarRotator, ChatMessage, ChatRole, ChatWidget, FaqBook, FaqEntry,
    FaqScript, FeedEntry, TYPING_DELAY_MS, TypingTicket,
};
pub use forms::{
    AdPayload, FormBinding, FormFields, FormKind, FormRegistry, InputTip, MaintenancePayload,
    ValidationError,
};
pub use fragment::{Fragment, FragmentError, FragmentOutcome, decode_fragment};
pub use lang::{Lang, UnknownLang};
pub use nav::{LanguageSwitch, NavEntry, SHOW_LANG_AFTER_MS, ShellView, resolve_location};
pub use result::{MaintenanceView, PlacementView, Prediction, StatusCode, Tip};
pub use session::{MemorySessionStore, SessionContext, SessionStore};
pub use submit::{FORMS, PredictionView, PreparedRequest, SubmitError, prepare};

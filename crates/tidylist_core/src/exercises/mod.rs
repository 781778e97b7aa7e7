//! Small standalone functions used to practise testing techniques.
//!
//! Each submodule exposes one pure or near-pure function plus the
//! collaborator traits it needs, so tests can swap in fakes and spies.

pub mod array_utils;
pub mod element;
pub mod greeting;
pub mod notification;
pub mod string_utils;
pub mod user_service;
pub mod visibility;

pub use array_utils::{get_element, get_value_element, ArrayIndexError, ElementIndex};
pub use element::{Element, StyleTarget, TextTarget};
pub use greeting::delayed_greeting;
pub use notification::{send_notification, NotificationOutcome, NotificationSender};
pub use string_utils::{capitalize, reverse_string};
pub use user_service::{fetch_and_display_user, ApiError, UserApi, UserRecord, UserServiceError};
pub use visibility::toggle_visibility;

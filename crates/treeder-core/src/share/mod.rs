//! Share intent translation.
//!
//! Turns the free-form text the OS delivers with a share action into an
//! optional URL that the hosted app receives as a query parameter.

mod extract;
mod intent;

pub use extract::extract_url;
pub use intent::{IntentAction, ShareIntent};

//! Application state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module holds plain data plus the operations that mutate it, so the
//! rules can be unit tested without a browser. Components wrap these types
//! in signals.

pub mod carousel;
pub mod contact;
pub mod section;
pub mod theme;
pub mod ui;

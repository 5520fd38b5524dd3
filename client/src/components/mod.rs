//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page sections while reading shared state and
//! content from Leptos context providers.

pub mod about;
pub mod certifications;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod navbar;
pub mod projects;
pub mod section_title;
pub mod skills;

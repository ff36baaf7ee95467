//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Each module holds one small piece of state owned by a single component
//! instance. Plain types carry the rules so they can be tested without a
//! browser; components wrap them in signals.

pub mod auth_form;
pub mod boot;
pub mod health;
pub mod input;
pub mod viewport;

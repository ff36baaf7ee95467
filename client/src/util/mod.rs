//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (window size, the
//! `<html>` element, outbound requests) from page and component logic.

pub mod boot;
pub mod health;
pub mod viewport;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the pieces pages are built from: the variant button,
//! bound text inputs, the two account forms, and the responsive logo.

pub mod bound_input;
pub mod button;
pub mod login_form;
pub mod register_form;
pub mod responsive_logo;

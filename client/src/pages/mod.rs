//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state (the active form, the viewport mode
//! through `ResponsiveLogo`) and delegates rendering details to `components`.

pub mod authorization;
pub mod not_found;
pub mod splash;

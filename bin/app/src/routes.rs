//! Role requirements for every guarded route.
//!
//! Each route declares its required role set here as configuration; the
//! guard component reads these instead of every page re-stating its own
//! list.

use slateboard_core::Role;

/// Routes open to every authenticated role.
pub const EVERYONE: &[Role] = &[Role::Admin, Role::Teacher, Role::Student];

/// Routes restricted to staff: result uploads, attendance marking,
/// library stocking, and student registration.
pub const STAFF: &[Role] = &[Role::Admin, Role::Teacher];

/// Routes restricted to administrators: teacher registration.
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];

//! Route-level screens.
//!
//! Pages read the session through context and reach the backend through the
//! session store's credential interceptor. Access control lives in the route
//! guards that wrap them, not here.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod records;
pub mod register;
pub mod submit_report;
pub mod unauthorized;

//! Domain-level frontend features (auth, registration, camera) and their shared
//! logic. Routes import these modules to keep view code focused while the flow
//! rules and API handling live in dedicated feature areas.

pub(crate) mod auth;
pub(crate) mod camera;
pub(crate) mod registration;
pub(crate) mod status;

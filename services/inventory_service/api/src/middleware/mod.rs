//! Ambient middleware for the inventory service.
//!
//! No authentication or authorization middleware is configured here; the
//! core accepts already-authenticated requests (see the routing layer).

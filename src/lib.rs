//! Greeter - a minimal HTTP greeting service.
//!
//! Exposes two read-only JSON endpoints: a liveness probe at `/health` and a
//! static greeting at `/hello`. The library target exists so integration
//! tests can build the router in-process.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;

//! Networking: wire types, the HTTP transport, credential storage, and the
//! bearer-attaching request client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `interceptor` is the only path to the backend. `api` names the endpoints,
//! `storage` owns the persisted credential, `http` abstracts the transport.

pub mod api;
pub mod http;
pub mod interceptor;
pub mod storage;
#[cfg(test)]
pub(crate) mod test_support;
pub mod types;

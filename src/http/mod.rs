//! HTTP protocol implementation.
//!
//! Just enough HTTP/1.1 to answer one request per connection.
//!
//! - **`connection`**: The per-connection state machine
//! - **`parser`**: Splits method and path off the request line
//! - **`request`**: Method and request representation
//! - **`response`**: Status codes and response bodies
//! - **`writer`**: Serializes and writes responses, honoring HEAD
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One read of up to 4096 bytes
//!        └──────┬──────┘
//!               │ Request line received (nothing read → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Method gate, route dispatch
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Headers, then body unless HEAD
//!        └──────┬───────────┘
//!               │ Sent or failed
//!               ▼
//!             Closed
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;

//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: one GET per connection, no headers
//! or bodies read, the connection closed after the response.
//!
//! # Architecture
//!
//! - **`connection`**: Per-client state machine driving read, resolve and write
//! - **`parser`**: Turns the received bytes into a [`request::Request`]
//! - **`request`**: Method and request-line representation
//! - **`response`**: Status codes, ordered headers and the response record
//! - **`writer`**: Serializes and writes responses to the client
//! - **`mime`**: Content type lookup by file extension
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the request line
//!        └──────┬──────┘
//!               │ Bytes received (or peer closed → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Parse, resolve against the document root
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Closed
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;

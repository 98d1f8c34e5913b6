//! These models represent the two message formats the proxy sits between:
//!
//! - UI messages, sent from the chat interface. Each carries an ordered list
//!   of typed parts, of which only text parts hold payload we forward. Older
//!   clients send a plain `content` string instead of parts.
//! - Backend messages, the flat `{role, content}` unit every downstream chat
//!   backend accepts.
//!
//! The UI shape is whatever the browser sends, so the types here are parsed
//! defensively: anything that does not match degrades to an empty default
//! rather than failing the request.
pub mod message;
pub mod ui;

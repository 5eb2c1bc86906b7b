//! Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is the serialization format used throughout BitTorrent for storing
//! and transmitting structured data, including `.torrent` files and tracker
//! responses. This crate turns a byte buffer into a tree of [`Value`]s and
//! back; reading the buffer from disk or the network is the caller's job.
//!
//! # Data Types
//!
//! Bencode supports four data types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! # Examples
//!
//! ## Decoding bencode data
//!
//! ```
//! use rbenc::{decode, Value};
//!
//! // Decode an integer
//! let value = decode(b"i42e").unwrap();
//! assert_eq!(value.as_integer(), Some(42));
//!
//! // Decode a string
//! let value = decode(b"4:spam").unwrap();
//! assert_eq!(value.as_str(), Some("spam"));
//!
//! // Decode a list
//! let value = decode(b"l4:spami42ee").unwrap();
//! let list = value.as_list().unwrap();
//! assert_eq!(list.len(), 2);
//!
//! // Decode a dictionary
//! let value = decode(b"d3:foo3:bare").unwrap();
//! let foo = value.get(b"foo").unwrap();
//! assert_eq!(foo.as_str(), Some("bar"));
//! ```
//!
//! ## Encoding bencode data
//!
//! ```
//! use rbenc::{encode, Value};
//! use bytes::Bytes;
//!
//! // Encode an integer
//! let encoded = encode(&Value::Integer(42)).unwrap();
//! assert_eq!(encoded, b"i42e");
//!
//! // Encode a string
//! let encoded = encode(&Value::string("hello")).unwrap();
//! assert_eq!(encoded, b"5:hello");
//!
//! // Encode a dictionary
//! let dict = Value::Dict(vec![
//!     (Bytes::from_static(b"key"), Value::string("value")),
//! ]);
//! let encoded = encode(&dict).unwrap();
//! assert_eq!(encoded, b"d3:key5:valuee");
//! ```
//!
//! ## Configuring the decoder
//!
//! The decoder rejects trailing bytes and deep nesting by default; both are
//! adjustable through [`DecodeOpts`]:
//!
//! ```
//! use rbenc::{decode, decode_with, DecodeOpts, Value};
//!
//! assert!(decode(b"i1ei2e").is_err());
//!
//! let opts = DecodeOpts {
//!     allow_trailing: true,
//!     ..DecodeOpts::default()
//! };
//! assert_eq!(decode_with(b"i1ei2e", opts).unwrap(), Value::Integer(1));
//! ```
//!
//! # Error Handling
//!
//! Decoding can fail for various reasons:
//!
//! - [`BencodeError::UnexpectedEof`] - Input ended unexpectedly
//! - [`BencodeError::InvalidInteger`] - Malformed integer (e.g., leading zeros)
//! - [`BencodeError::InvalidTypeMarker`] - Byte in value position is not a marker
//! - [`BencodeError::NestingTooDeep`] - Nesting limit exceeded (default 64 levels)
//! - [`BencodeError::TrailingData`] - Extra data after the value
//!
//! Every decode error carries the byte offset where it was detected.
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod cursor;
mod decode;
mod encode;
mod error;
mod value;

pub use decode::{decode, decode_with, DecodeOpts};
pub use encode::encode;
pub use error::BencodeError;
pub use value::Value;

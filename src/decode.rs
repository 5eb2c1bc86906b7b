use bytes::Bytes;

use crate::cursor::Cursor;
use crate::error::BencodeError;
use crate::value::Value;

const DEFAULT_MAX_DEPTH: usize = 64;

/// Options controlling how [`decode_with`] treats its input.
#[derive(Debug, Clone, Copy)]
pub struct DecodeOpts {
    /// Maximum container nesting depth. Input whose containers nest this
    /// deep or deeper fails with [`BencodeError::NestingTooDeep`].
    /// Defaults to 64.
    pub max_depth: usize,
    /// Accept (and ignore) bytes after the first complete value instead of
    /// failing with [`BencodeError::TrailingData`]. Defaults to `false`: a
    /// well-formed torrent file is exactly one dictionary with nothing after
    /// it.
    pub allow_trailing: bool,
}

impl Default for DecodeOpts {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_trailing: false,
        }
    }
}

/// A partially built container on the parse stack.
enum Frame {
    List(Vec<Value>),
    Dict {
        pairs: Vec<(Bytes, Value)>,
        /// A key that has been decoded but not yet paired with its value.
        key: Option<Bytes>,
    },
}

/// Decodes a single bencode value with default options.
///
/// # Errors
///
/// Returns an error if the input is not a single well-formed bencode value;
/// see [`BencodeError`] for the conditions. Every decode error reports the
/// byte offset at which it was detected.
///
/// # Examples
///
/// ```
/// use rbenc::decode;
///
/// let value = decode(b"i42e").unwrap();
/// assert_eq!(value.as_integer(), Some(42));
///
/// let value = decode(b"d3:foo3:bare").unwrap();
/// assert_eq!(value.get(b"foo").and_then(|v| v.as_str()), Some("bar"));
/// ```
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    decode_with(data, DecodeOpts::default())
}

/// Decodes a single bencode value.
///
/// The decoder runs a single forward pass over `data`, driven by an explicit
/// stack of open containers rather than recursion, so nesting depth is
/// bounded by [`DecodeOpts::max_depth`] instead of the call stack.
///
/// # Examples
///
/// ```
/// use rbenc::{decode_with, DecodeOpts, Value};
///
/// let opts = DecodeOpts {
///     allow_trailing: true,
///     ..DecodeOpts::default()
/// };
/// assert_eq!(decode_with(b"i1ei2e", opts).unwrap(), Value::Integer(1));
/// ```
pub fn decode_with(data: &[u8], opts: DecodeOpts) -> Result<Value, BencodeError> {
    if data.is_empty() {
        return Err(BencodeError::EmptyInput);
    }

    let mut cur = Cursor::new(data);
    let mut stack: Vec<Frame> = Vec::new();

    loop {
        let start = cur.offset();
        let completed = match cur.peek()? {
            b'e' => {
                cur.next_byte()?;
                match stack.pop() {
                    Some(Frame::List(items)) => Value::List(items),
                    Some(Frame::Dict { pairs, key: None }) => Value::Dict(pairs),
                    // Either no container is open, or the terminator would
                    // leave the top dictionary's last key without a value.
                    _ => return Err(BencodeError::UnexpectedTerminator { offset: start }),
                }
            }
            b'i' => {
                cur.next_byte()?;
                read_integer(&mut cur)?
            }
            b'l' => {
                if stack.len() + 1 >= opts.max_depth {
                    return Err(BencodeError::NestingTooDeep { offset: start });
                }
                cur.next_byte()?;
                stack.push(Frame::List(Vec::new()));
                continue;
            }
            b'd' => {
                if stack.len() + 1 >= opts.max_depth {
                    return Err(BencodeError::NestingTooDeep { offset: start });
                }
                cur.next_byte()?;
                stack.push(Frame::Dict {
                    pairs: Vec::new(),
                    key: None,
                });
                continue;
            }
            b'0'..=b'9' => read_string(&mut cur)?,
            byte => {
                return Err(BencodeError::InvalidTypeMarker {
                    byte,
                    offset: start,
                })
            }
        };

        // Hand the completed value to the enclosing container, or finish.
        match stack.last_mut() {
            None => {
                if !cur.is_empty() && !opts.allow_trailing {
                    return Err(BencodeError::TrailingData {
                        offset: cur.offset(),
                    });
                }
                tracing::trace!("decoded {} byte value", cur.offset());
                return Ok(completed);
            }
            Some(Frame::List(items)) => items.push(completed),
            Some(Frame::Dict { pairs, key }) => match key.take() {
                Some(k) => pairs.push((k, completed)),
                None => match completed {
                    Value::Bytes(b) => *key = Some(b),
                    _ => return Err(BencodeError::NonStringDictKey { offset: start }),
                },
            },
        }
    }
}

/// Reads an integer body and its `e` terminator; the `i` marker has already
/// been consumed.
fn read_integer(cur: &mut Cursor<'_>) -> Result<Value, BencodeError> {
    let start = cur.offset();
    while cur.peek()? != b'e' {
        cur.next_byte()?;
    }
    let body = cur.span(start);
    cur.next_byte()?;

    let invalid = || BencodeError::InvalidInteger { offset: start };
    let text = std::str::from_utf8(body).map_err(|_| invalid())?;
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    // BEP-3 canonical form: no leading zeros, and zero is never signed.
    if (digits.len() > 1 && digits.starts_with('0')) || text == "-0" {
        return Err(invalid());
    }
    // Out-of-range values are rejected rather than truncated.
    let value: i64 = text.parse().map_err(|_| invalid())?;

    Ok(Value::Integer(value))
}

/// Reads a length-prefixed string starting at its first length digit.
fn read_string(cur: &mut Cursor<'_>) -> Result<Value, BencodeError> {
    let start = cur.offset();
    while cur.peek()? != b':' {
        cur.next_byte()?;
    }
    let prefix = cur.span(start);
    cur.next_byte()?;

    let invalid = || BencodeError::InvalidStringLength { offset: start };
    let text = std::str::from_utf8(prefix).map_err(|_| invalid())?;
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if text.len() > 1 && text.starts_with('0') {
        return Err(invalid());
    }
    let len: usize = text.parse().map_err(|_| invalid())?;

    let payload = cur.take(len)?;
    Ok(Value::Bytes(Bytes::copy_from_slice(payload)))
}

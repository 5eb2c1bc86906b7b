use bytes::Bytes;

/// A bencode value.
///
/// Bencode has four data types: integers, byte strings, lists, and
/// dictionaries. This enum represents any bencode value and provides methods
/// for type-safe access.
///
/// Dictionaries are kept as a vector of key/value pairs in the order they
/// were encountered during decoding. BEP-3 requires keys to be sorted in
/// well-formed input, but the decoder is lenient: it preserves whatever order
/// the input used, and duplicate keys are passed through as repeated pairs.
/// [`encode`](crate::encode()) restores the canonical key order on output.
///
/// # Examples
///
/// ```
/// use rbenc::Value;
///
/// // Creating values directly
/// let int = Value::Integer(42);
/// let string = Value::string("hello");
/// let list = Value::List(vec![Value::Integer(1), Value::Integer(2)]);
///
/// // Using From implementations
/// let int: Value = 42i64.into();
/// let string: Value = "hello".into();
///
/// // Accessing values
/// assert_eq!(int.as_integer(), Some(42));
/// assert_eq!(string.as_str(), Some("hello"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A signed 64-bit integer.
    ///
    /// Bencode itself places no bound on integer magnitude; values outside
    /// the `i64` range are rejected during decoding rather than truncated.
    Integer(i64),
    /// A byte string (may or may not be valid UTF-8). The content is copied
    /// out of the input buffer, so a decoded tree does not borrow from it.
    Bytes(Bytes),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A dictionary as key/value pairs in encounter order.
    Dict(Vec<(Bytes, Value)>),
}

impl Value {
    /// Creates a byte string value from a UTF-8 string.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbenc::Value;
    ///
    /// let value = Value::string("hello");
    /// assert_eq!(value.as_str(), Some("hello"));
    /// ```
    pub fn string(s: &str) -> Self {
        Value::Bytes(Bytes::copy_from_slice(s.as_bytes()))
    }

    /// Returns the value as an integer, if it is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbenc::Value;
    ///
    /// let int = Value::Integer(42);
    /// assert_eq!(int.as_integer(), Some(42));
    ///
    /// let string = Value::string("hello");
    /// assert_eq!(string.as_integer(), None);
    /// ```
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a byte string, if it is one.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the value as a UTF-8 string, if it is a valid UTF-8 byte string.
    ///
    /// Returns `None` if the value is not a byte string or if the bytes are
    /// not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbenc::Value;
    ///
    /// let value = Value::string("hello");
    /// assert_eq!(value.as_str(), Some("hello"));
    ///
    /// let int = Value::Integer(42);
    /// assert_eq!(int.as_str(), None);
    /// ```
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    /// Returns the value as a list, if it is one.
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the value as dictionary pairs, if it is a dictionary.
    ///
    /// Pairs appear in the order they were encountered during decoding.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbenc::decode;
    ///
    /// let value = decode(b"d3:foo3:bare").unwrap();
    /// let pairs = value.as_dict().unwrap();
    /// assert_eq!(pairs.len(), 1);
    /// assert_eq!(&pairs[0].0[..], b"foo");
    /// ```
    pub fn as_dict(&self) -> Option<&Vec<(Bytes, Value)>> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Consumes the value and returns the dictionary pairs, if it is a
    /// dictionary.
    ///
    /// This avoids cloning the pairs when you need ownership.
    pub fn into_dict(self) -> Option<Vec<(Bytes, Value)>> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Looks up a key in this value if it is a dictionary.
    ///
    /// Returns the first pair with a matching key; when the input carried
    /// duplicate keys, later pairs are still present in
    /// [`as_dict`](Value::as_dict). Returns `None` if the value is not a
    /// dictionary or the key is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbenc::decode;
    ///
    /// let value = decode(b"d3:foo3:bare").unwrap();
    /// assert_eq!(value.get(b"foo").and_then(|v| v.as_str()), Some("bar"));
    /// assert_eq!(value.get(b"missing"), None);
    /// ```
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.as_dict()?
            .iter()
            .find(|(k, _)| &k[..] == key)
            .map(|(_, v)| v)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Value::List(l)
    }
}

impl From<Vec<(Bytes, Value)>> for Value {
    fn from(d: Vec<(Bytes, Value)>) -> Self {
        Value::Dict(d)
    }
}

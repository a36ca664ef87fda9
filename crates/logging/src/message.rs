//! Message payloads and trailing arguments.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Shared error value carried through to sinks and handlers unrendered.
pub type SharedError = Arc<dyn StdError + Send + Sync>;

/// The message passed to a log call.
///
/// Text converts from `&str` without allocating, so suppressed calls stay
/// free. An [`Message::Error`] is not stringified by the logger: it becomes
/// the first trailing [`Argument`] and the body is left empty.
#[derive(Clone, Debug)]
pub enum Message<'a> {
    /// Plain text body.
    Text(Cow<'a, str>),
    /// An error value.
    Error(SharedError),
}

impl Message<'_> {
    /// Wraps any error value.
    pub fn error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Error(Arc::new(error))
    }
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Message<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Message<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for Message<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Self::Text(text)
    }
}

impl From<SharedError> for Message<'_> {
    fn from(error: SharedError) -> Self {
        Self::Error(error)
    }
}

/// A trailing argument forwarded verbatim to the sink and handlers.
#[derive(Clone, Debug)]
pub enum Argument {
    /// A pre-rendered value.
    Text(String),
    /// An error value left for the sink to render.
    Error(SharedError),
}

impl Argument {
    /// Wraps any error value.
    pub fn error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Error(Arc::new(error))
    }

    /// Renders any [`fmt::Debug`] value as a text argument.
    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Self::Text(format!("{value:?}"))
    }

    /// Returns the error when this argument carries one.
    #[must_use]
    pub fn as_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            Self::Error(error) => Some(error.as_ref()),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Error(error) => write!(f, "{error}"),
        }
    }
}

impl From<&str> for Argument {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Argument {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<SharedError> for Argument {
    fn from(error: SharedError) -> Self {
        Self::Error(error)
    }
}

/// Splits a message into its body and the full argument list.
///
/// Text bodies borrow from the message; an error moves to the head of the
/// arguments and leaves the body empty.
pub(crate) fn normalize<'m>(message: &'m Message<'_>, args: &[Argument]) -> (&'m str, Vec<Argument>) {
    match message {
        Message::Text(text) => (text.as_ref(), args.to_vec()),
        Message::Error(error) => {
            let mut all = Vec::with_capacity(args.len() + 1);
            all.push(Argument::Error(Arc::clone(error)));
            all.extend_from_slice(args);
            ("", all)
        }
    }
}

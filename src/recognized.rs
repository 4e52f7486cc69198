use std::fmt;

/// A value that was either recognized as a known variant `T`, or is a raw
/// code `Raw` we have no typed meaning for.
///
/// Sheet codes are frequently only partly understood. Keeping the raw code
/// lets callers still act on it (usually by falling back to a default)
/// without pretending it was decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Recognized<T, Raw = u32> {
    Known(T),
    Unknown(Raw),
}

impl<T: Copy, Raw: Copy> Copy for Recognized<T, Raw> {}

impl<T, Raw> Recognized<T, Raw> {
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Recognized::Known(t) => t,
            Recognized::Unknown(_) => default,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Recognized<U, Raw> {
        match self {
            Recognized::Known(t) => Recognized::Known(f(t)),
            Recognized::Unknown(raw) => Recognized::Unknown(raw),
        }
    }
}

impl<T: fmt::Display, Raw: fmt::Display> fmt::Display for Recognized<T, Raw> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recognized::Known(t) => t.fmt(f),
            Recognized::Unknown(raw) => write!(f, "unknown({raw})"),
        }
    }
}

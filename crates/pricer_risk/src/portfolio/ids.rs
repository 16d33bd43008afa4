//! Identifier types for portfolio entities.

use std::fmt;

/// Unique identifier for a trade.
///
/// # Examples
///
/// ```
/// use pricer_risk::portfolio::TradeId;
///
/// let id = TradeId::new("BOND-5Y");
/// assert_eq!(id.as_str(), "BOND-5Y");
///
/// assert_eq!(TradeId::sequential(7).as_str(), "T0007");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeId(String);

impl TradeId {
    /// Creates a new trade ID.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generated ID for the `n`-th trade (1-based): `T0001`, `T0002`, ...
    #[inline]
    pub fn sequential(n: usize) -> Self {
        Self(format!("T{:04}", n))
    }

    /// Returns the ID as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TradeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TradeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_trade_id_from_str_and_string() {
        let a: TradeId = "TRADE002".into();
        let b: TradeId = String::from("TRADE002").into();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "TRADE002");
    }

    #[test]
    fn test_trade_id_display() {
        assert_eq!(format!("{}", TradeId::new("TRADE001")), "TRADE001");
    }

    #[test]
    fn test_sequential_ids_are_zero_padded() {
        assert_eq!(TradeId::sequential(1).as_str(), "T0001");
        assert_eq!(TradeId::sequential(42).as_str(), "T0042");
        assert_eq!(TradeId::sequential(12345).as_str(), "T12345");
    }

    #[test]
    fn test_trade_id_hash() {
        let mut set = HashSet::new();
        set.insert(TradeId::new("T1"));
        set.insert(TradeId::new("T2"));
        set.insert(TradeId::new("T1")); // Duplicate
        assert_eq!(set.len(), 2);
    }
}

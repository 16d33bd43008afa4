//! Portfolio of identified trades.
//!
//! A [`Portfolio`] is an ordered list of [`Trade`]s. Insertion order is the
//! summation order used by the scenario engine, and trade IDs are unique.
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{Bond, Caplet};
//! use pricer_risk::portfolio::{PortfolioBuilder, TradeId};
//!
//! let portfolio = PortfolioBuilder::<f64>::new()
//!     .add_trade("BOND-5Y", Bond::new(0.03_f64, 5.0, 2).unwrap())
//!     .add_trade("CAPLET-2Y", Caplet::new(2.0, 0.037, 0.04, 0.25, 0.5).unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(portfolio.len(), 2);
//! assert!(portfolio.get(&TradeId::new("BOND-5Y")).is_some());
//! ```

mod error;
mod ids;

pub use error::PortfolioError;
pub use ids::TradeId;

use num_traits::Float;
use pricer_models::instruments::Instrument;
use std::collections::HashMap;

/// Instrument held under a trade ID.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trade<T: Float> {
    id: TradeId,
    instrument: Instrument<T>,
}

impl<T: Float> Trade<T> {
    /// Creates a trade.
    pub fn new(id: impl Into<TradeId>, instrument: impl Into<Instrument<T>>) -> Self {
        Self {
            id: id.into(),
            instrument: instrument.into(),
        }
    }

    /// Trade identifier.
    #[inline]
    pub fn id(&self) -> &TradeId {
        &self.id
    }

    /// Underlying instrument.
    #[inline]
    pub fn instrument(&self) -> &Instrument<T> {
        &self.instrument
    }
}

/// Ordered collection of trades with unique IDs.
///
/// Lookups and duplicate checks go through an ID index, so adding `n` trades
/// is linear in `n`.
#[derive(Clone, Debug, PartialEq)]
pub struct Portfolio<T: Float> {
    trades: Vec<Trade<T>>,
    index: HashMap<TradeId, usize>,
}

impl<T: Float> Default for Portfolio<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Portfolio<T> {
    /// Creates an empty portfolio.
    pub fn new() -> Self {
        Self {
            trades: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Builds a portfolio with generated IDs `T0001, T0002, ...` in
    /// iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_models::instruments::{Bond, Instrument};
    /// use pricer_risk::portfolio::Portfolio;
    ///
    /// let instruments: Vec<Instrument<f64>> = vec![
    ///     Bond::new(0.03, 5.0, 2).unwrap().into(),
    ///     Bond::new(0.04, 10.0, 2).unwrap().into(),
    /// ];
    /// let portfolio = Portfolio::<f64>::from_instruments(instruments);
    ///
    /// let ids: Vec<&str> = portfolio.iter().map(|t| t.id().as_str()).collect();
    /// assert_eq!(ids, ["T0001", "T0002"]);
    /// ```
    pub fn from_instruments<I>(instruments: impl IntoIterator<Item = I>) -> Self
    where
        I: Into<Instrument<T>>,
    {
        let trades: Vec<Trade<T>> = instruments
            .into_iter()
            .enumerate()
            .map(|(i, instrument)| Trade::new(TradeId::sequential(i + 1), instrument))
            .collect();
        let index = trades
            .iter()
            .enumerate()
            .map(|(i, trade)| (trade.id.clone(), i))
            .collect();
        Self { trades, index }
    }

    /// Appends a trade.
    ///
    /// # Errors
    ///
    /// - `InvalidTradeId` if the ID is blank
    /// - `DuplicateTrade` if the ID is already present
    pub fn add(
        &mut self,
        id: impl Into<TradeId>,
        instrument: impl Into<Instrument<T>>,
    ) -> Result<(), PortfolioError> {
        let trade = Trade::new(id, instrument);
        if trade.id.as_str().trim().is_empty() {
            return Err(PortfolioError::InvalidTradeId(trade.id.to_string()));
        }
        if self.index.contains_key(&trade.id) {
            return Err(PortfolioError::DuplicateTrade(trade.id.to_string()));
        }
        self.index.insert(trade.id.clone(), self.trades.len());
        self.trades.push(trade);
        Ok(())
    }

    /// Builder-style [`add`](Self::add).
    pub fn with_trade(
        mut self,
        id: impl Into<TradeId>,
        instrument: impl Into<Instrument<T>>,
    ) -> Result<Self, PortfolioError> {
        self.add(id, instrument)?;
        Ok(self)
    }

    /// Looks up a trade by ID.
    pub fn get(&self, id: &TradeId) -> Option<&Trade<T>> {
        self.index.get(id).map(|&i| &self.trades[i])
    }

    /// Number of trades.
    #[inline]
    pub fn len(&self) -> usize {
        self.trades.len()
    }

    /// Returns `true` if the portfolio holds no trades.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// Trades in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Trade<T>> {
        self.trades.iter()
    }

    /// Trades as a slice.
    #[inline]
    pub fn trades(&self) -> &[Trade<T>] {
        &self.trades
    }

    /// Instruments in insertion order.
    pub fn instruments(&self) -> impl Iterator<Item = &Instrument<T>> + '_ {
        self.trades.iter().map(|t| &t.instrument)
    }
}

impl<'a, T: Float> IntoIterator for &'a Portfolio<T> {
    type Item = &'a Trade<T>;
    type IntoIter = std::slice::Iter<'a, Trade<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.trades.iter()
    }
}

/// Collects trades and validates them all at once in [`build`](Self::build).
#[derive(Clone, Debug)]
pub struct PortfolioBuilder<T: Float> {
    trades: Vec<Trade<T>>,
}

impl<T: Float> Default for PortfolioBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> PortfolioBuilder<T> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self { trades: Vec::new() }
    }

    /// Queues a trade.
    pub fn add_trade(
        mut self,
        id: impl Into<TradeId>,
        instrument: impl Into<Instrument<T>>,
    ) -> Self {
        self.trades.push(Trade::new(id, instrument));
        self
    }

    /// Builds the portfolio.
    ///
    /// # Errors
    ///
    /// Reports the first blank or duplicate trade ID in insertion order.
    pub fn build(self) -> Result<Portfolio<T>, PortfolioError> {
        let mut index = HashMap::with_capacity(self.trades.len());
        for (i, trade) in self.trades.iter().enumerate() {
            if trade.id.as_str().trim().is_empty() {
                return Err(PortfolioError::InvalidTradeId(trade.id.to_string()));
            }
            if index.insert(trade.id.clone(), i).is_some() {
                return Err(PortfolioError::DuplicateTrade(trade.id.to_string()));
            }
        }
        Ok(Portfolio {
            trades: self.trades,
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::instruments::{Bond, Caplet};

    fn bond() -> Bond<f64> {
        Bond::new(0.03, 5.0, 2).unwrap()
    }

    fn caplet() -> Caplet<f64> {
        Caplet::new(2.0, 0.037, 0.04, 0.25, 0.5).unwrap()
    }

    #[test]
    fn test_add_preserves_order() {
        let mut portfolio = Portfolio::<f64>::new();
        portfolio.add("B", bond()).unwrap();
        portfolio.add("A", caplet()).unwrap();

        let ids: Vec<&str> = portfolio.iter().map(|t| t.id().as_str()).collect();
        assert_eq!(ids, ["B", "A"]);
        assert_eq!(portfolio.instruments().count(), 2);
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let mut portfolio = Portfolio::<f64>::new();
        portfolio.add("T1", bond()).unwrap();
        assert_eq!(
            portfolio.add("T1", caplet()),
            Err(PortfolioError::DuplicateTrade("T1".to_string()))
        );
        assert_eq!(portfolio.len(), 1);
    }

    #[test]
    fn test_add_rejects_blank_id() {
        let mut portfolio = Portfolio::<f64>::new();
        assert!(matches!(
            portfolio.add(" ", bond()),
            Err(PortfolioError::InvalidTradeId(_))
        ));
        assert!(portfolio.is_empty());
    }

    #[test]
    fn test_with_trade_chain() {
        let portfolio = Portfolio::<f64>::new()
            .with_trade("T1", bond())
            .and_then(|p| p.with_trade("T2", caplet()))
            .unwrap();
        assert_eq!(portfolio.len(), 2);
        assert!(portfolio.get(&TradeId::new("T2")).unwrap().instrument().as_caplet().is_some());
    }

    #[test]
    fn test_builder_rejects_duplicate() {
        let result = PortfolioBuilder::<f64>::new()
            .add_trade("X", bond())
            .add_trade("Y", bond())
            .add_trade("X", caplet())
            .build();
        assert_eq!(result, Err(PortfolioError::DuplicateTrade("X".to_string())));
    }

    #[test]
    fn test_from_instruments_assigns_sequential_ids() {
        let portfolio = Portfolio::<f64>::from_instruments(vec![bond(), bond(), bond()]);
        let ids: Vec<String> = portfolio.iter().map(|t| t.id().to_string()).collect();
        assert_eq!(ids, ["T0001", "T0002", "T0003"]);
    }

    #[test]
    fn test_lookup_on_large_portfolio() {
        let mut portfolio = Portfolio::<f64>::new();
        for i in 0..20_000 {
            portfolio.add(format!("TRADE-{}", i), bond()).unwrap();
        }
        assert_eq!(
            portfolio.add("TRADE-19999", caplet()),
            Err(PortfolioError::DuplicateTrade("TRADE-19999".to_string()))
        );
        assert_eq!(portfolio.len(), 20_000);
        assert_eq!(
            portfolio.get(&TradeId::new("TRADE-12345")).unwrap().id().as_str(),
            "TRADE-12345"
        );
        assert_eq!(portfolio.trades()[12345].id().as_str(), "TRADE-12345");
    }

    #[test]
    fn test_built_and_generated_portfolios_are_indexed() {
        let built = PortfolioBuilder::<f64>::new()
            .add_trade("X", bond())
            .add_trade("Y", caplet())
            .build()
            .unwrap();
        assert!(built.get(&TradeId::new("Y")).unwrap().instrument().as_caplet().is_some());

        let mut generated = Portfolio::<f64>::from_instruments(vec![bond(), bond()]);
        assert!(generated.get(&TradeId::new("T0002")).is_some());
        assert!(matches!(
            generated.add("T0001", caplet()),
            Err(PortfolioError::DuplicateTrade(_))
        ));
    }

    #[test]
    fn test_empty_portfolio() {
        let portfolio = Portfolio::<f64>::default();
        assert!(portfolio.is_empty());
        assert_eq!((&portfolio).into_iter().count(), 0);
    }
}

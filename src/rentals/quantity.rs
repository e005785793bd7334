//! Stock-bounded quantity stepping.

/// A quantity kept within `1..=stock`.
///
/// Stepping saturates at either end instead of failing. A product with no
/// stock still reports a quantity of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockQuantity {
    value: u32,
    stock: u32,
}

impl StockQuantity {
    /// One unit of a product with `stock` available.
    pub fn new(stock: u32) -> Self {
        Self { value: 1, stock }
    }

    /// `value` clamped into `1..=stock`.
    pub fn clamped(value: u32, stock: u32) -> Self {
        Self {
            value: value.min(stock).max(1),
            stock,
        }
    }

    /// Current quantity.
    pub fn get(self) -> u32 {
        self.value
    }

    /// Units available.
    pub fn stock(self) -> u32 {
        self.stock
    }

    /// Step up by one unless already at stock.
    pub fn increase(&mut self) {
        if self.value < self.stock {
            self.value += 1;
        }
    }

    /// Step down by one unless already at one.
    pub fn decrease(&mut self) {
        if self.value > 1 {
            self.value -= 1;
        }
    }
}

use crate::state::rows::RowSet;
use crate::state::types::FilterCategory;

/// Mutually exclusive filter buttons.
///
/// Only the active button is remembered; the rows are recomputed from the
/// category on every activation.
#[derive(Clone, Copy, Debug, Default)]
pub struct FilterController {
    /// Currently active button.
    active: FilterCategory,
}

impl FilterController {
    /// Controller with the `All` button active.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Buttons in display order.
    #[must_use]
    pub const fn buttons(&self) -> [FilterCategory; 4] {
        FilterCategory::BUTTONS
    }

    /// Currently active category.
    #[must_use]
    pub const fn active(&self) -> FilterCategory {
        self.active
    }

    /// Whether `category`'s button carries the active marker.
    #[must_use]
    pub fn is_active(&self, category: FilterCategory) -> bool {
        self.active == category
    }

    /// What: Activate one button, deactivating the others, and filter the rows.
    ///
    /// Inputs:
    /// - `category`: Button pressed
    /// - `rows`: Row set to update
    pub fn activate(&mut self, category: FilterCategory, rows: &mut RowSet) {
        self.active = category;
        rows.set_filter(category);
        tracing::debug!(
            filter = category.label(),
            visible = rows.visible_count(),
            "filter applied"
        );
    }

    /// Activate the button after the current one, wrapping around.
    pub fn cycle(&mut self, rows: &mut RowSet) {
        let buttons = FilterCategory::BUTTONS;
        let pos = buttons.iter().position(|c| *c == self.active).unwrap_or(0);
        let next = buttons[(pos + 1) % buttons.len()];
        self.activate(next, rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::{Signal, StockRow};

    fn rows(signals: &[Signal]) -> RowSet {
        RowSet::new(
            signals
                .iter()
                .enumerate()
                .map(|(i, s)| StockRow::new(format!("T{i}"), "", "S", *s, vec![]))
                .collect(),
        )
    }

    #[test]
    /// What: Buy filter shows exactly the buy and buy-strong rows
    ///
    /// - Input: Signals [buy, sell, neutral, buy-strong]; activate Buy
    /// - Output: Visible indices 0 and 3
    fn buy_filter_scenario() {
        let mut set = rows(&[Signal::Buy, Signal::Sell, Signal::Neutral, Signal::BuyStrong]);
        let mut f = FilterController::new();
        f.activate(FilterCategory::Buy, &mut set);
        assert_eq!(set.visible_indices(), vec![0, 3]);
        assert!(f.is_active(FilterCategory::Buy));
        assert!(!f.is_active(FilterCategory::All));
    }

    #[test]
    /// What: Each category is a pure function of the signals
    fn every_category_is_pure() {
        let signals = [
            Signal::SellStrong,
            Signal::Neutral,
            Signal::Sell,
            Signal::BuyStrong,
        ];
        let mut set = rows(&signals);
        let mut f = FilterController::new();
        for cat in f.buttons() {
            f.activate(cat, &mut set);
            let expected: Vec<usize> = signals
                .iter()
                .enumerate()
                .filter(|(_, s)| cat.matches(**s))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(set.visible_indices(), expected, "category {cat:?}");
        }
        f.activate(FilterCategory::Sell, &mut set);
        f.activate(FilterCategory::Neutral, &mut set);
        assert_eq!(set.visible_indices(), vec![1]);
    }

    #[test]
    /// What: Cycling walks the buttons in display order and wraps
    fn cycle_wraps() {
        let mut set = rows(&[Signal::Buy]);
        let mut f = FilterController::new();
        let mut seen = Vec::new();
        for _ in 0..5 {
            f.cycle(&mut set);
            seen.push(f.active());
        }
        assert_eq!(
            seen,
            vec![
                FilterCategory::Buy,
                FilterCategory::Neutral,
                FilterCategory::Sell,
                FilterCategory::All,
                FilterCategory::Buy
            ]
        );
    }
}

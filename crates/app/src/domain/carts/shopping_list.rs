//! Shopping List
//!
//! Merges ingredient quantities across the recipes in a cart. Lines are keyed
//! by the exact `(name, measurement_unit)` pair, so `"flour" (g)` and
//! `"flour" (kg)` stay separate, and keep the order in which each pair was
//! first seen.

use std::fmt::{Display, Formatter, Result as FmtResult};

use rustc_hash::FxHashMap;

/// One ingredient line of one recipe, as fed into the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientQuantity {
    pub name: String,
    pub measurement_unit: String,
    pub amount: u16,
}

/// A merged shopping list line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListLine {
    pub name: String,
    pub measurement_unit: String,
    pub amount: u64,
}

impl Display for ShoppingListLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} - {} ({})", self.name, self.amount, self.measurement_unit)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    lines: Vec<ShoppingListLine>,
}

impl ShoppingList {
    /// Merge quantities in iteration order.
    pub fn aggregate<I>(quantities: I) -> Self
    where
        I: IntoIterator<Item = IngredientQuantity>,
    {
        let mut lines: Vec<ShoppingListLine> = Vec::new();
        let mut index: FxHashMap<(String, String), usize> = FxHashMap::default();

        for quantity in quantities {
            let key = (quantity.name, quantity.measurement_unit);

            if let Some(&i) = index.get(&key) {
                lines[i].amount += u64::from(quantity.amount);
                continue;
            }

            index.insert(key.clone(), lines.len());

            lines.push(ShoppingListLine {
                name: key.0,
                measurement_unit: key.1,
                amount: u64::from(quantity.amount),
            });
        }

        Self { lines }
    }

    #[must_use]
    pub fn lines(&self) -> &[ShoppingListLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain text body, one line per ingredient, no trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for ShoppingList {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }

            Display::fmt(line, f)?;
        }

        Ok(())
    }
}

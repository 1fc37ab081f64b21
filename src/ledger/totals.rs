use serde::Serialize;

/// Summed amount for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Per-category sums kept in the order each category was first seen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to `category`, appending the category if it is new.
    pub fn accumulate(&mut self, category: &str, amount: f64) {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.category == category)
        {
            Some(entry) => entry.amount += amount,
            None => self.entries.push(CategoryTotal {
                category: category.to_string(),
                amount,
            }),
        }
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.amount)
    }

    /// Category with the strictly largest sum; on ties the first-seen category wins.
    pub fn max(&self) -> Option<&CategoryTotal> {
        let mut best: Option<&CategoryTotal> = None;
        for entry in &self.entries {
            match best {
                Some(current) if entry.amount <= current.amount => {}
                _ => best = Some(entry),
            }
        }
        best
    }

    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|entry| entry.amount).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryTotal> {
        self.entries.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.category.as_str())
            .collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|entry| entry.amount).collect()
    }
}

impl<'a> IntoIterator for &'a CategoryTotals {
    type Item = &'a CategoryTotal;
    type IntoIter = std::slice::Iter<'a, CategoryTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Foods offered as one-tap preferences on the results screen.
pub const SUGGESTED_FOODS: [&str; 10] = [
    "Rice",
    "Pasta",
    "Bagels",
    "Oatmeal",
    "Bananas",
    "Potatoes",
    "Bread",
    "Pancakes",
    "Sports drinks",
    "Dried fruit",
];

/// Ordered set of food preferences sent along with a meal-plan request.
///
/// Insertion order is preserved and entries are unique (exact match after
/// trimming).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodPreferences {
    items: Vec<String>,
}

impl FoodPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, food: &str) -> bool {
        let food = food.trim();
        self.items.iter().any(|item| item == food)
    }

    /// Add a suggestion if absent, remove it if present.
    ///
    /// Returns true when the food is selected after the call.
    pub fn toggle(&mut self, food: &str) -> bool {
        let food = food.trim();
        if let Some(pos) = self.items.iter().position(|item| item == food) {
            self.items.remove(pos);
            false
        } else if food.is_empty() {
            false
        } else {
            self.items.push(food.to_string());
            true
        }
    }

    /// Add free-text input. Blank and duplicate entries are ignored.
    ///
    /// Returns true when a new entry was added.
    pub fn add_custom(&mut self, text: &str) -> bool {
        let food = text.trim();
        if food.is_empty() || self.contains(food) {
            return false;
        }
        self.items.push(food.to_string());
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for FoodPreferences {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut prefs = FoodPreferences::new();
        for item in iter {
            prefs.add_custom(item.as_ref());
        }
        prefs
    }
}

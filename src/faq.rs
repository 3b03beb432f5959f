//! FAQ view selector.
//!
//! Whether the FAQ is showing is kept outside the wizard, in a small
//! key/value store (the address bar's query string in a browser; plain
//! memory in the terminal). The wizard's own state is never touched.

use std::collections::HashMap;

/// Key under which the FAQ flag is stored.
pub const FAQ_KEY: &str = "faq";

const FAQ_OPEN_VALUE: &str = "open";

/// Read/write access to addressable view state.
pub trait QueryState {
    fn get(&self, key: &str) -> Option<&str>;

    /// `None` removes the key.
    fn set(&mut self, key: &str, value: Option<&str>);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryQueryState {
    values: HashMap<String, String>,
}

impl MemoryQueryState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QueryState for MemoryQueryState {
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: Option<&str>) {
        match value {
            Some(v) => {
                self.values.insert(key.to_string(), v.to_string());
            }
            None => {
                self.values.remove(key);
            }
        }
    }
}

/// Open/closed FAQ flag backed by a [`QueryState`].
#[derive(Debug, Clone, Default)]
pub struct FaqToggle<Q> {
    state: Q,
}

impl<Q: QueryState> FaqToggle<Q> {
    pub fn new(state: Q) -> Self {
        Self { state }
    }

    /// Open when the key holds a non-empty value; a bare `faq=` is closed.
    pub fn is_open(&self) -> bool {
        self.state.get(FAQ_KEY).is_some_and(|value| !value.is_empty())
    }

    pub fn open(&mut self) {
        self.state.set(FAQ_KEY, Some(FAQ_OPEN_VALUE));
    }

    pub fn close(&mut self) {
        self.state.set(FAQ_KEY, None);
    }
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "What is carb loading?",
        answer: "Carb loading is a dietary strategy endurance athletes use to top up glycogen \
                 stores in muscles and liver before a race. For marathoners this usually means \
                 8-12g of carbohydrate per kg of body weight for 2-3 days before the race.",
    },
    FaqEntry {
        question: "How is my recommended carb intake calculated?",
        answer: "Your weight is converted from pounds to kilograms. The 2-day protocol uses \
                 about 12g of carbohydrate per kg per day; the 3-day protocol uses about 8g per \
                 kg per day. The total is the daily amount times the number of loading days.",
    },
    FaqEntry {
        question: "What types of carbs should I eat?",
        answer: "Easily digestible carbohydrates that won't upset your stomach: pasta, rice, \
                 bread and oatmeal; bananas, dates and other fruit; sports drinks and energy \
                 bars. Avoid high-fiber, high-fat or unfamiliar foods.",
    },
    FaqEntry {
        question: "How accurate are these calculations?",
        answer: "They follow published sports nutrition guidelines, but individual needs vary \
                 with training status, body composition and tolerance. A sports nutritionist \
                 can give personalized advice.",
    },
    FaqEntry {
        question: "When should I start carb loading?",
        answer: "2-3 days before your marathon, depending on the protocol. The last day ends \
                 with your pre-race dinner. Taper your training over the same period.",
    },
    FaqEntry {
        question: "Should I carb load for shorter races?",
        answer: "Carb loading pays off for events longer than about 90 minutes. For 5K or 10K \
                 races normal carbohydrate intake is usually enough.",
    },
    FaqEntry {
        question: "What about hydration?",
        answer: "Every gram of stored glycogen holds 3-4 grams of water, so stay well hydrated \
                 throughout the loading period and watch your urine color.",
    },
];

//! Detail card slots
//!
//! Maps a detail lookup onto three fixed display slots. A slot is either
//! hidden or shows one card (or, for a failed lookup, the not-found
//! message in the first slot).

use super::record::{DetailOutcome, DetailRecord, RelatedItem};
use crate::sanitize::escape;

/// Number of fixed display slots
pub const CARD_SLOTS: usize = 3;

pub const LABEL_DEGREE: &str = "Degree";
pub const LABEL_YEARS: &str = "Years of schooling";
pub const LABEL_COST: &str = "Cost estimate";
pub const LABEL_CREDIT_HOURS: &str = "Credit Hours";

/// One labeled value on a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardField {
    pub label: &'static str,
    pub value: String,
}

/// What a slot displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardContent {
    Message(String),
    Card {
        heading: String,
        fields: Vec<CardField>,
    },
}

impl CardContent {
    /// Build a card from one related item plus the job's shared fields
    pub fn from_related(item: &RelatedItem, record: &DetailRecord) -> Self {
        let mut fields = Vec::new();
        push_field(&mut fields, LABEL_DEGREE, record.degree_label.clone());
        push_field(&mut fields, LABEL_YEARS, record.years_needed.clone());
        push_field(
            &mut fields,
            LABEL_COST,
            record.cost_estimate.as_ref().map(|cost| format!("${}", cost)),
        );
        push_field(&mut fields, LABEL_CREDIT_HOURS, item.credit_hours.clone());

        CardContent::Card {
            heading: item.name.clone().unwrap_or_default(),
            fields,
        }
    }

    /// Escaped markup for this content
    pub fn to_markup(&self) -> String {
        match self {
            CardContent::Message(message) => format!("<p>{}</p>", escape(message)),
            CardContent::Card { heading, fields } => {
                let mut out = format!("<h3>{}</h3>", escape(heading));
                for field in fields {
                    out.push_str(&format!(
                        "<p><strong>{}:</strong> {}</p>",
                        escape(field.label),
                        escape(&field.value)
                    ));
                }
                out
            }
        }
    }

    pub fn field(&self, label: &str) -> Option<&str> {
        match self {
            CardContent::Card { fields, .. } => fields
                .iter()
                .find(|f| f.label == label)
                .map(|f| f.value.as_str()),
            CardContent::Message(_) => None,
        }
    }
}

fn push_field(fields: &mut Vec<CardField>, label: &'static str, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        fields.push(CardField { label, value });
    }
}

/// A single display region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSlot {
    content: Option<CardContent>,
    visible: bool,
}

impl CardSlot {
    pub fn content(&self) -> Option<&CardContent> {
        self.content.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn clear(&mut self) {
        self.content = None;
        self.visible = false;
    }

    fn show(&mut self, content: CardContent) {
        self.content = Some(content);
        self.visible = true;
    }
}

/// Owns the three card slots and applies detail lookups to them
#[derive(Debug, Default)]
pub struct DetailRenderer {
    slots: [CardSlot; CARD_SLOTS],
}

impl DetailRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &[CardSlot; CARD_SLOTS] {
        &self.slots
    }

    pub fn visible_count(&self) -> usize {
        self.slots.iter().filter(|s| s.visible).count()
    }

    /// Apply a lookup result for `queried_name`
    pub fn present(&mut self, outcome: &DetailOutcome, queried_name: &str) {
        match outcome {
            DetailOutcome::NotFound { message } => {
                log::debug!("Detail lookup for {:?} found nothing: {}", queried_name, message);
                self.slots[0].show(CardContent::Message(format!(
                    "No job found for \"{}\"",
                    queried_name
                )));
                for slot in &mut self.slots[1..] {
                    slot.clear();
                }
            }
            DetailOutcome::Failed(e) => {
                // Cards keep whatever they showed before
                log::error!("Failed to fetch job info for {:?}: {}", queried_name, e);
            }
            DetailOutcome::Found(record) => self.present_record(record),
        }
    }

    fn present_record(&mut self, record: &DetailRecord) {
        for slot in &mut self.slots {
            slot.clear();
        }

        let items = record
            .related_items
            .iter()
            .filter(|item| !item.is_placeholder());
        for (slot, item) in self.slots.iter_mut().zip(items) {
            slot.show(CardContent::from_related(item, record));
        }
    }

    /// Escaped markup for every visible slot, in slot order
    pub fn to_markup(&self) -> Vec<String> {
        self.slots
            .iter()
            .filter(|s| s.visible)
            .filter_map(|s| s.content.as_ref().map(CardContent::to_markup))
            .collect()
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod renderer_tests;

mod card_render;
mod record;
mod renderer;

pub use card_render::render_cards;
pub use record::{DetailOutcome, DetailRecord, RelatedItem, parse_detail};
pub use renderer::{
    CARD_SLOTS, CardContent, CardField, CardSlot, DetailRenderer, LABEL_COST,
    LABEL_CREDIT_HOURS, LABEL_DEGREE, LABEL_YEARS,
};

//! Domain entities - Rows of the embedded reference tables

mod background;
mod spell;

pub use background::Background;
pub use spell::{Ability, Spell, SpellType};

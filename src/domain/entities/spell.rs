//! Spell entity - A row of the core spell list
//!
//! Field names stay camelCase on the wire so documents match the tables
//! the game client already reads.

use serde::{Deserialize, Serialize};

/// Ability score a spell is cast or resisted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

/// Mechanical category used by the client's spell automation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpellType {
    Damage,
    Healing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    pub name: String,
    pub tier: i32,
    pub casting_attribute: Ability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spell_type: Option<SpellType>,
    /// Distance band, usually Self, Touch, Close, Near, Far or Unlimited
    pub range: String,
    pub duration: String,
    pub dc: i32,
    pub description: String,

    // Damage / healing automation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_scaling: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<i32>,

    // Opposed checks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opposed: Option<i32>,
    /// 0 means the target rolls against the caster's check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opposed_dc: Option<i32>,
    /// Free-form ability name as written in the source table (`con`, `wisdom`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opposed_ability: Option<String>,
}

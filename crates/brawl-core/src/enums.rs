//! Enumeration types used throughout the simulation.
//!
//! Regions, moves, and reactions are closed enums rather than name
//! strings, keeping the region and move tables total and
//! exhaustiveness-checkable.

use serde::{Deserialize, Serialize};

/// A damage collision volume covering one body part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyRegion {
    Head,
    Chest,
    Torso,
    Hips,
    LeftUpperArm,
    RightUpperArm,
    LeftForearm,
    RightForearm,
    LeftThigh,
    RightThigh,
    LeftShin,
    RightShin,
}

impl BodyRegion {
    /// All damage regions, in declaration order.
    pub const ALL: [BodyRegion; 12] = [
        BodyRegion::Head,
        BodyRegion::Chest,
        BodyRegion::Torso,
        BodyRegion::Hips,
        BodyRegion::LeftUpperArm,
        BodyRegion::RightUpperArm,
        BodyRegion::LeftForearm,
        BodyRegion::RightForearm,
        BodyRegion::LeftThigh,
        BodyRegion::RightThigh,
        BodyRegion::LeftShin,
        BodyRegion::RightShin,
    ];

    /// Index into per-region arrays.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A weapon collision volume, collidable only during a strike window.
/// Shins double as feet during kicks and carry their own damage region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponRegion {
    LeftFist,
    RightFist,
    LeftFoot,
    RightFoot,
}

impl WeaponRegion {
    pub const ALL: [WeaponRegion; 4] = [
        WeaponRegion::LeftFist,
        WeaponRegion::RightFist,
        WeaponRegion::LeftFoot,
        WeaponRegion::RightFoot,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Weapon category; punches and kicks have separate strike windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponKind {
    Punch,
    Kick,
}

/// Coarse body-part grouping used for damage and reaction tables.
///
/// Chest is an alias of Torso for damage bookkeeping (`damage_key`) but
/// keeps its own reaction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageCategory {
    Head,
    Chest,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl DamageCategory {
    pub const ALL: [DamageCategory; 7] = [
        DamageCategory::Head,
        DamageCategory::Chest,
        DamageCategory::Torso,
        DamageCategory::LeftArm,
        DamageCategory::RightArm,
        DamageCategory::LeftLeg,
        DamageCategory::RightLeg,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The category under which damage, cooldown, and potential are
    /// bookkept. Chest hits share the torso's escalation state; reaction
    /// selection keeps them distinct.
    pub fn damage_key(self) -> DamageCategory {
        match self {
            DamageCategory::Chest => DamageCategory::Torso,
            other => other,
        }
    }

    /// Whether this category benefits from a raised guard while blocking.
    pub fn guardable(self) -> bool {
        matches!(
            self.damage_key(),
            DamageCategory::Head | DamageCategory::Torso
        )
    }
}

/// Reaction animation selected for the victim of a connecting hit.
///
/// Naming: body area, horizontal direction the blow arrives from
/// (Front / Left / Right), and force band (Small / Medium / Big).
/// `Back` overrides everything when the attacker is behind the victim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reaction {
    #[default]
    NoReact,
    FaceFrontSmall,
    FaceFrontMedium,
    FaceFrontBig,
    FaceLeftSmall,
    FaceLeftMedium,
    FaceLeftBig,
    FaceRightSmall,
    FaceRightMedium,
    FaceRightBig,
    TorsoFrontSmall,
    TorsoFrontMedium,
    TorsoFrontBig,
    TorsoLeftSmall,
    TorsoLeftMedium,
    TorsoLeftBig,
    TorsoRightSmall,
    TorsoRightMedium,
    TorsoRightBig,
    Back,
}

/// Move identifier assigned by the animation collaborator when a strike
/// window opens. One move maps to at most one reaction per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackMove {
    Jab,
    Cross,
    Hook,
    Uppercut,
    Backfist,
    SpinPunch,
    LowJab,
    FrontKick,
    PushKick,
    SideKick,
    RoundhouseKick,
    SpinningBackKick,
    AxeKick,
    KneeStrike,
    LowKick,
}

/// One sub-move in a combo sequence.
///
/// `code()` yields the montage-selection token the animation player keys
/// off: a plain continuation appends "1"/"2", a move-modifier opener "3"/"4",
/// taunts "5"/"55" and "6"/"66" (random variant), duck attacks "7"/"8".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComboToken {
    StrikePrimary,
    StrikeSecondary,
    ModPrimary,
    ModSecondary,
    TauntPrimary,
    TauntPrimaryAlt,
    TauntSecondary,
    TauntSecondaryAlt,
    DuckPrimary,
    DuckSecondary,
}

impl ComboToken {
    /// Montage-selection code for the animation player.
    pub fn code(self) -> &'static str {
        match self {
            ComboToken::StrikePrimary => "1",
            ComboToken::StrikeSecondary => "2",
            ComboToken::ModPrimary => "3",
            ComboToken::ModSecondary => "4",
            ComboToken::TauntPrimary => "5",
            ComboToken::TauntPrimaryAlt => "55",
            ComboToken::TauntSecondary => "6",
            ComboToken::TauntSecondaryAlt => "66",
            ComboToken::DuckPrimary => "7",
            ComboToken::DuckSecondary => "8",
        }
    }
}

/// Discrete input buttons bound by the input adapter.
/// Movement axes arrive separately via `MatchCommand::SetMoveAxis`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKey {
    AttackPrimary,
    AttackSecondary,
    Block,
    Duck,
    MoveModifier,
    Taunt,
    Jump,
    Run,
    ChangeCamera,
}

/// Match phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    #[default]
    Lobby,
    Active,
    Paused,
}

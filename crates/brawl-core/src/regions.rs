//! Body Region Map — static tables tying collision volumes to damage
//! categories, weapon kinds, base damage, and reaction animations.
//!
//! All tables are total `match` expressions: adding a region or a move
//! without extending its tables is a compile error.

use crate::constants::{BASE_DAMAGE_HEAD, BASE_DAMAGE_LIMB, BASE_DAMAGE_TORSO};
use crate::enums::{AttackMove, BodyRegion, DamageCategory, Reaction, WeaponKind, WeaponRegion};

/// Damage category of a struck collision volume.
pub fn damage_category(region: BodyRegion) -> DamageCategory {
    match region {
        BodyRegion::Head => DamageCategory::Head,
        BodyRegion::Chest => DamageCategory::Chest,
        BodyRegion::Torso | BodyRegion::Hips => DamageCategory::Torso,
        BodyRegion::LeftUpperArm | BodyRegion::LeftForearm => DamageCategory::LeftArm,
        BodyRegion::RightUpperArm | BodyRegion::RightForearm => DamageCategory::RightArm,
        BodyRegion::LeftThigh | BodyRegion::LeftShin => DamageCategory::LeftLeg,
        BodyRegion::RightThigh | BodyRegion::RightShin => DamageCategory::RightLeg,
    }
}

/// Weapon category of a striking collision volume.
pub fn weapon_kind(weapon: WeaponRegion) -> WeaponKind {
    match weapon {
        WeaponRegion::LeftFist | WeaponRegion::RightFist => WeaponKind::Punch,
        WeaponRegion::LeftFoot | WeaponRegion::RightFoot => WeaponKind::Kick,
    }
}

/// Whether an overlap on this region counts as the guard being interposed.
/// Either upper arm or forearm, either side.
pub fn is_guard_region(region: BodyRegion) -> bool {
    matches!(
        region,
        BodyRegion::LeftUpperArm
            | BodyRegion::RightUpperArm
            | BodyRegion::LeftForearm
            | BodyRegion::RightForearm
    )
}

/// Base damage of a category at the reference impact speed.
/// Callers are expected to pass the aliased `damage_key()` category;
/// Chest carries the torso value either way.
pub fn base_damage(category: DamageCategory) -> f32 {
    match category {
        DamageCategory::Head => BASE_DAMAGE_HEAD,
        DamageCategory::Chest | DamageCategory::Torso => BASE_DAMAGE_TORSO,
        DamageCategory::LeftArm
        | DamageCategory::RightArm
        | DamageCategory::LeftLeg
        | DamageCategory::RightLeg => BASE_DAMAGE_LIMB,
    }
}

/// Reaction for a hit to the head, keyed by the attacking move.
/// Moves absent from the table produce no flinch.
pub fn head_reaction(attack: AttackMove) -> Option<Reaction> {
    match attack {
        AttackMove::Jab => Some(Reaction::FaceFrontSmall),
        AttackMove::Cross => Some(Reaction::FaceFrontMedium),
        AttackMove::Hook => Some(Reaction::FaceRightMedium),
        AttackMove::Uppercut => Some(Reaction::FaceFrontBig),
        AttackMove::Backfist => Some(Reaction::FaceLeftMedium),
        AttackMove::SpinPunch => Some(Reaction::FaceRightBig),
        AttackMove::LowJab => Some(Reaction::FaceFrontSmall),
        AttackMove::FrontKick => Some(Reaction::FaceFrontMedium),
        AttackMove::PushKick => Some(Reaction::FaceFrontMedium),
        AttackMove::SideKick => Some(Reaction::FaceFrontBig),
        AttackMove::RoundhouseKick => Some(Reaction::FaceLeftBig),
        AttackMove::SpinningBackKick => Some(Reaction::Back),
        AttackMove::AxeKick => Some(Reaction::FaceFrontBig),
        AttackMove::KneeStrike => Some(Reaction::FaceFrontBig),
        AttackMove::LowKick => None,
    }
}

/// Reaction for a hit to the chest. Kept separate from the torso table;
/// the chest→torso aliasing applies to damage bookkeeping only.
pub fn chest_reaction(attack: AttackMove) -> Option<Reaction> {
    match attack {
        AttackMove::Jab => Some(Reaction::TorsoFrontSmall),
        AttackMove::Cross => Some(Reaction::TorsoFrontMedium),
        AttackMove::Hook => Some(Reaction::TorsoRightMedium),
        AttackMove::Uppercut => Some(Reaction::TorsoFrontMedium),
        AttackMove::Backfist => Some(Reaction::TorsoLeftSmall),
        AttackMove::SpinPunch => Some(Reaction::TorsoRightBig),
        AttackMove::LowJab => Some(Reaction::TorsoFrontSmall),
        AttackMove::FrontKick => Some(Reaction::TorsoFrontBig),
        AttackMove::PushKick => Some(Reaction::TorsoFrontBig),
        AttackMove::SideKick => Some(Reaction::TorsoFrontBig),
        AttackMove::RoundhouseKick => Some(Reaction::TorsoLeftBig),
        AttackMove::SpinningBackKick => Some(Reaction::TorsoFrontBig),
        AttackMove::KneeStrike => Some(Reaction::TorsoFrontMedium),
        AttackMove::AxeKick | AttackMove::LowKick => None,
    }
}

/// Reaction for a hit to the lower torso/hips.
pub fn torso_reaction(attack: AttackMove) -> Option<Reaction> {
    match attack {
        AttackMove::Jab => Some(Reaction::TorsoFrontSmall),
        AttackMove::Cross => Some(Reaction::TorsoFrontSmall),
        AttackMove::Hook => Some(Reaction::TorsoLeftMedium),
        AttackMove::Uppercut => Some(Reaction::TorsoFrontSmall),
        AttackMove::LowJab => Some(Reaction::TorsoFrontSmall),
        AttackMove::FrontKick => Some(Reaction::TorsoFrontMedium),
        AttackMove::PushKick => Some(Reaction::TorsoFrontMedium),
        AttackMove::SideKick => Some(Reaction::TorsoFrontMedium),
        AttackMove::RoundhouseKick => Some(Reaction::TorsoRightBig),
        AttackMove::KneeStrike => Some(Reaction::TorsoFrontBig),
        AttackMove::LowKick => Some(Reaction::TorsoFrontSmall),
        AttackMove::Backfist
        | AttackMove::SpinPunch
        | AttackMove::SpinningBackKick
        | AttackMove::AxeKick => None,
    }
}

/// Frontal reaction lookup for a struck category. Head, chest, and torso
/// each have their own move table; limb hits never flinch.
pub fn reaction_for(category: DamageCategory, attack: AttackMove) -> Option<Reaction> {
    match category {
        DamageCategory::Head => head_reaction(attack),
        DamageCategory::Chest => chest_reaction(attack),
        DamageCategory::Torso => torso_reaction(attack),
        DamageCategory::LeftArm
        | DamageCategory::RightArm
        | DamageCategory::LeftLeg
        | DamageCategory::RightLeg => None,
    }
}

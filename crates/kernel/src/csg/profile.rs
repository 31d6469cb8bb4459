//! 2D profiles used as extrusion cross-sections.

use crate::geometry::Vec2;

/// An ordered polygon outline in a local XY plane.
pub type Profile = Vec<Vec2>;

/// Shift every point of `profile` by `translation`.
pub fn translate_profile(profile: &[Vec2], translation: &Vec2) -> Profile {
    profile.iter().map(|p| p + translation).collect()
}

pub fn translate_profiles(profiles: &[Profile], translation: &Vec2) -> Vec<Profile> {
    profiles
        .iter()
        .map(|profile| translate_profile(profile, translation))
        .collect()
}

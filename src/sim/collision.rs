//! Avatar/platform collision and rift displacement
//!
//! Only top landings are resolved. An avatar that overlaps a platform from
//! the side or from below is left where it is.

use glam::Vec2;

use super::entity::{Collidable, Entity};
use super::state::{Avatar, Platform, Rift};
use crate::consts::{AVATAR_SIZE, LANDING_TOLERANCE, RIFT_PUSH_SPEED};

/// A landing candidate: the avatar overlaps the platform and its bottom edge
/// is no more than `LANDING_TOLERANCE` below the platform top.
pub fn is_top_landing(avatar: &Avatar, platform: &Platform) -> bool {
    let bounds = platform.bounds();
    avatar.bounds().intersects(&bounds)
        && avatar.pos.y + AVATAR_SIZE <= bounds.top() + LANDING_TOLERANCE
}

/// Land the avatar on every qualifying platform, in collection order.
///
/// Returns the index of the last platform landed on. Several qualifying
/// platforms each apply the snap; the last one wins.
pub fn resolve_landings(avatar: &mut Avatar, platforms: &[Platform]) -> Option<usize> {
    let mut landed = None;
    for (i, platform) in platforms.iter().enumerate() {
        if is_top_landing(avatar, platform) {
            avatar.land(platform.bounds().top());
            landed = Some(i);
        }
    }
    landed
}

/// Push every platform within range of an active rift to the right.
///
/// Each rift in range contributes its own shift, so coincident rifts stack.
pub fn apply_rift_effects(rifts: &[Rift], platforms: &mut [Platform], dt: f32) {
    let push = Vec2::new(RIFT_PUSH_SPEED * dt, 0.0);
    for rift in rifts.iter().filter(|r| r.is_active()) {
        for platform in platforms.iter_mut() {
            if rift.reaches(platform.position()) {
                platform.shift_by(push);
            }
        }
    }
}

//! Cleanup system: drops projectiles that died during the tick.

use skirmish_core::components::Projectile;

/// Remove every projectile with `alive == false`.
///
/// Runs once after all projectile updates, so no update pass ever sees
/// the collection shrink underneath it. Survivors keep their order.
pub fn run(projectiles: &mut Vec<Projectile>) {
    projectiles.retain(|p| p.alive);
}

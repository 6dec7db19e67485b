//! Behavior system: cooldown-gated projectile spawners.
//!
//! Each behavior is a two-state machine. While the cooldown is positive it
//! only counts down; the tick it reaches zero it fires exactly one
//! projectile and re-arms to its configured rate.

use skirmish_core::components::{Behavior, HealerBehavior, Projectile, ShooterBehavior};
use skirmish_core::enums::Team;
use skirmish_core::types::Vec2;

/// Advance a behavior by `dt`. Returns the projectile it fired, if any,
/// positioned at the origin; the caller moves it to a spawn point.
pub fn tick(behavior: &mut Behavior, team: Team, dt: f64) -> Option<Projectile> {
    match behavior {
        Behavior::Shooter(shooter) => tick_shooter(shooter, team, dt),
        Behavior::Healer(healer) => tick_healer(healer, team, dt),
    }
}

fn tick_shooter(shooter: &mut ShooterBehavior, team: Team, dt: f64) -> Option<Projectile> {
    if !cooldown_elapsed(&mut shooter.cooldown, shooter.rate, dt) {
        return None;
    }
    let projectile = if shooter.defensive {
        Projectile::defensive(
            team,
            Vec2::ZERO,
            shooter.lifetime,
            shooter.projectile_speed,
            shooter.acceleration,
        )
    } else {
        Projectile::offensive(
            team,
            Vec2::ZERO,
            shooter.damage,
            shooter.projectile_speed,
            shooter.acceleration,
        )
    };
    Some(projectile)
}

fn tick_healer(healer: &mut HealerBehavior, team: Team, dt: f64) -> Option<Projectile> {
    if !cooldown_elapsed(&mut healer.cooldown, healer.rate, dt) {
        return None;
    }
    Some(Projectile::healing(
        team,
        Vec2::ZERO,
        healer.heal,
        healer.projectile_speed,
        healer.acceleration,
    ))
}

/// Count down; on reaching zero re-arm to `rate` and report a shot.
fn cooldown_elapsed(cooldown: &mut f64, rate: f64, dt: f64) -> bool {
    *cooldown -= dt;
    if *cooldown > 0.0 {
        return false;
    }
    *cooldown = rate;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::enums::ProjectileMode;

    #[test]
    fn test_defensive_shooter_fires_deflector() {
        let mut behavior = Behavior::Shooter(ShooterBehavior {
            defensive: true,
            lifetime: 4.0,
            ..Default::default()
        });
        let shot = tick(&mut behavior, Team::Blue, 0.1).unwrap();
        assert_eq!(shot.mode, ProjectileMode::DefensiveDeflecting);
        assert_eq!(shot.team, Team::Blue);
        assert_eq!(shot.lifetime, 4.0);
        assert_eq!(behavior.cooldown(), 1.0);
    }

    #[test]
    fn test_healer_waits_for_cooldown() {
        let mut behavior = Behavior::Healer(HealerBehavior {
            cooldown: 0.3,
            ..Default::default()
        });
        assert!(tick(&mut behavior, Team::Red, 0.1).is_none());
        assert!(tick(&mut behavior, Team::Red, 0.1).is_none());
        let shot = tick(&mut behavior, Team::Red, 0.15).unwrap();
        assert!(shot.is_healing());
        assert_eq!(shot.damage, HealerBehavior::default().heal);
    }
}

//! Built-in battle used when no config file is given.

use skirmish_core::config::BattleConfig;
use skirmish_core::roster::{PentagonStats, RosterEntry, SquareStats, TriangleStats, UnitLoadout};
use skirmish_core::types::Vec2;

/// Three against three, mirrored across the arena's vertical center line.
pub fn demo_config() -> BattleConfig {
    let mut config = BattleConfig::default();
    let width = config.arena.width;
    let mid = config.arena.height / 2.0;

    let side = [
        (UnitLoadout::Triangle(TriangleStats::default()), Vec2::new(150.0, mid - 120.0)),
        (UnitLoadout::Square(SquareStats::default()), Vec2::new(100.0, mid)),
        (UnitLoadout::Pentagon(PentagonStats::default()), Vec2::new(150.0, mid + 120.0)),
    ];

    config.player = side
        .iter()
        .map(|(loadout, pos)| RosterEntry::new(loadout.clone(), *pos))
        .collect();
    config.enemy = side
        .iter()
        .map(|(loadout, pos)| RosterEntry::new(loadout.clone(), Vec2::new(width - pos.x, pos.y)))
        .collect();
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::enums::ShapeKind;

    #[test]
    fn test_demo_config_is_valid_and_mirrored() {
        let config = demo_config();
        config.validate().unwrap();
        assert_eq!(config.player.len(), 3);
        assert_eq!(config.enemy.len(), 3);
        for (p, e) in config.player.iter().zip(&config.enemy) {
            assert_eq!(p.loadout.shape(), e.loadout.shape());
            assert_eq!(p.position.y, e.position.y);
            assert_eq!(p.position.x + e.position.x, config.arena.width);
        }
    }

    #[test]
    fn test_bundled_duel_file_parses() {
        let config = BattleConfig::from_toml_str(include_str!("../../../demos/duel.toml")).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.time_limit_secs, 90.0);
        assert_eq!(config.player.len(), 3);
        assert_eq!(config.enemy[2].loadout.shape(), ShapeKind::Square);
        match &config.player[0].loadout {
            UnitLoadout::Triangle(stats) => {
                assert_eq!(stats.damage, 6.0);
                assert_eq!(stats.rate, TriangleStats::default().rate);
            }
            other => panic!("expected triangle, got {other:?}"),
        }
    }
}

//! Configuration validation: the only errors that stop a simulation

use robot_mission_core_rs::{ConfigError, Tier, World, WorldConfig};

#[test]
fn test_grid_too_narrow() {
    let config = WorldConfig {
        width: 2,
        height: 4,
        green_robots: 1,
        ..Default::default()
    };
    assert_eq!(
        World::new(config).unwrap_err(),
        ConfigError::GridTooNarrow { width: 2 }
    );
}

#[test]
fn test_zero_height() {
    let config = WorldConfig {
        width: 9,
        height: 0,
        green_robots: 1,
        ..Default::default()
    };
    assert_eq!(World::new(config).unwrap_err(), ConfigError::ZeroHeight);
}

#[test]
fn test_no_robots() {
    let config = WorldConfig {
        width: 9,
        height: 3,
        initial_green_waste: 5,
        ..Default::default()
    };
    assert_eq!(World::new(config).unwrap_err(), ConfigError::NoRobots);
}

#[test]
fn test_zero_decay_interval() {
    let config = WorldConfig {
        width: 9,
        height: 3,
        green_robots: 1,
        decay_interval: 0,
        ..Default::default()
    };
    assert_eq!(
        World::new(config).unwrap_err(),
        ConfigError::ZeroDecayInterval
    );
}

#[test]
fn test_too_many_green_robots_for_z1() {
    // 6x1: Z1 has 2 cells, 3 green robots cannot start there
    let config = WorldConfig {
        width: 6,
        height: 1,
        green_robots: 3,
        ..Default::default()
    };
    assert_eq!(
        World::new(config).unwrap_err(),
        ConfigError::TooManyRobots {
            tier: Tier::Green,
            count: 3,
            cells: 2,
        }
    );
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = ConfigError::TooManyRobots {
        tier: Tier::Green,
        count: 3,
        cells: 2,
    };
    assert_eq!(
        err.to_string(),
        "3 green robots cannot fit the 2 cells of their start area"
    );
}

#[test]
fn test_robots_start_inside_their_zones() {
    let config = WorldConfig {
        width: 12,
        height: 4,
        green_robots: 4,
        yellow_robots: 4,
        red_robots: 3,
        rng_seed: 61,
        ..Default::default()
    };
    let world = World::new(config).unwrap();
    let z_width = world.zone_map().z_width();

    for robot in world.robots() {
        match robot.tier {
            Tier::Green => assert!(robot.pos.x < z_width),
            Tier::Yellow => assert!(robot.pos.x < 2 * z_width),
            Tier::Red => assert!(robot.pos.x < 12),
        }
    }

    // No two robots share a start cell
    let mut cells: Vec<_> = world.robots().iter().map(|r| r.pos).collect();
    cells.sort();
    cells.dedup();
    assert_eq!(cells.len(), 11);
}

#[test]
fn test_initial_waste_scattered_per_zone() {
    let config = WorldConfig {
        width: 9,
        height: 3,
        initial_green_waste: 6,
        initial_yellow_waste: 5,
        initial_red_waste: 4,
        green_robots: 1,
        rng_seed: 1,
        ..Default::default()
    };
    let world = World::new(config).unwrap();
    let z_width = world.zone_map().z_width();

    assert_eq!(world.total_waste_count(), 15);
    for unit in world.ground_waste() {
        match unit.color {
            Tier::Green => assert!(unit.pos.x < z_width),
            Tier::Yellow => {
                assert!(unit.pos.x >= z_width && unit.pos.x < 2 * z_width)
            }
            Tier::Red => assert!(unit.pos.x >= 2 * z_width),
        }
    }
}

#[test]
fn test_radioactivity_sampled_from_zone_ranges() {
    use robot_mission_core_rs::Position;

    let config = WorldConfig {
        width: 9,
        height: 3,
        red_robots: 1,
        rng_seed: 23,
        ..Default::default()
    };
    let world = World::new(config).unwrap();

    for y in 0..3 {
        for x in 0..9 {
            let pos = Position::new(x, y);
            let zone = world.zone_map().zone_of(pos).unwrap();
            let (lo, hi) = zone.radioactivity_range();
            let r = world.state().grid().radioactivity(pos);
            assert!(r >= lo && r < hi, "cell {} radioactivity {} outside zone range", pos, r);
        }
    }
}

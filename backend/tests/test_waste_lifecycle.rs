//! End-to-end waste lifecycle tests against the world tick loop
//!
//! Includes the literal single-green-robot scenario: collect twice,
//! transform, carry the product to the boundary column, drop it there —
//! total waste conserved because green disposal re-materializes.

use robot_mission_core_rs::{Event, Tier, World, WorldConfig};

fn count_events<F: Fn(&Event) -> bool>(world: &World, pred: F) -> usize {
    world.event_log().events().iter().filter(|e| pred(e)).count()
}

#[test]
fn test_green_robot_full_cycle_on_a_line() {
    // 6x1 grid: z_width = 2, zones [0,1], [2,3], [4,5]; green boundary x=1
    let config = WorldConfig {
        width: 6,
        height: 1,
        green_robots: 1,
        rng_seed: 99,
        ..Default::default()
    };
    let mut world = World::new(config).unwrap();

    let start = world.robots()[0].pos;
    assert!(start.x < 2, "green robot must start in Z1");

    // Two green units appear under the robot
    world.state_mut().ledger_mut().mint_on_ground(Tier::Green, start);
    world.state_mut().ledger_mut().mint_on_ground(Tier::Green, start);
    assert_eq!(world.total_waste_count(), 2);

    for _ in 0..8 {
        world.tick();
    }

    // Tick 0: collect (one green left on the ground). Tick 1: collect.
    // Tick 2: transform. Then one move-toward-boundary tick per column of
    // distance, then the dispose itself.
    let collected: Vec<usize> = world
        .event_log()
        .events()
        .iter()
        .filter_map(|e| match e {
            Event::Collected { tick, .. } => Some(*tick),
            _ => None,
        })
        .collect();
    assert_eq!(collected, vec![0, 1]);

    let transformed_tick = world
        .event_log()
        .events()
        .iter()
        .find_map(|e| match e {
            Event::Transformed { tick, consumed, color, .. } => {
                assert_eq!(consumed.len(), 2);
                assert_eq!(*color, Tier::Yellow);
                Some(*tick)
            }
            _ => None,
        })
        .expect("transformation must have happened");
    assert_eq!(transformed_tick, 2);

    let (disposed_tick, disposed_pos, destroyed) = world
        .event_log()
        .events()
        .iter()
        .find_map(|e| match e {
            Event::Disposed {
                tick,
                pos,
                destroyed,
                ..
            } => Some((*tick, *pos, *destroyed)),
            _ => None,
        })
        .expect("disposal must have happened");

    // Green disposal only succeeds at x = 1; getting there takes one tick
    // per column of distance from the start cell.
    assert_eq!(disposed_pos.x, 1);
    assert!(!destroyed, "green disposal re-materializes, never destroys");
    assert_eq!(disposed_tick, 3 + (1 - start.x as usize));

    // Final state: empty hands, one yellow unit on the ground at the
    // boundary, total conserved at 1.
    assert_eq!(world.robots()[0].held, 0);
    let ground = world.ground_waste();
    assert_eq!(ground.len(), 1);
    assert_eq!(ground[0].color, Tier::Yellow);
    assert_eq!(ground[0].pos.x, 1);
    assert_eq!(world.total_waste_count(), 1);

    // No yellow robot exists, so no hand-off message was sent
    assert_eq!(
        count_events(&world, |e| matches!(e, Event::MessageSent { .. })),
        0
    );
}

#[test]
fn test_red_disposal_is_terminal() {
    let config = WorldConfig {
        width: 6,
        height: 1,
        red_robots: 1,
        rng_seed: 7,
        ..Default::default()
    };
    let mut world = World::new(config).unwrap();

    let start = world.robots()[0].pos;
    world.state_mut().ledger_mut().mint_on_ground(Tier::Red, start);
    assert_eq!(world.total_waste_count(), 1);

    // Collect, then walk to x=5 and destroy: at most 1 + 5 + 1 ticks
    for _ in 0..10 {
        world.tick();
    }

    assert_eq!(world.total_waste_count(), 0, "red disposal destroys");
    assert_eq!(
        count_events(
            &world,
            |e| matches!(e, Event::Disposed { destroyed: true, .. })
        ),
        1
    );
    let disposed_at_boundary = world.event_log().events().iter().any(|e| {
        matches!(e, Event::Disposed { pos, .. } if pos.x == 5)
    });
    assert!(disposed_at_boundary);
}

#[test]
fn test_mass_monotonic_and_accounted_for() {
    let config = WorldConfig {
        width: 12,
        height: 6,
        initial_green_waste: 10,
        initial_yellow_waste: 6,
        initial_red_waste: 3,
        green_robots: 3,
        yellow_robots: 2,
        red_robots: 2,
        rng_seed: 20240311,
        ..Default::default()
    };
    let mut world = World::new(config).unwrap();
    let initial_total = world.total_waste_count();
    assert_eq!(initial_total, 19);

    let mut prev = initial_total;
    for _ in 0..150 {
        world.tick();
        let total = world.total_waste_count();
        assert!(total <= prev, "total waste mass may never increase");
        prev = total;
    }

    // Every lost unit is explained: one per transformation (2 -> 1) plus
    // every unit destroyed by a red disposal.
    let transformed = count_events(&world, |e| matches!(e, Event::Transformed { .. }));
    let destroyed: usize = world
        .event_log()
        .events()
        .iter()
        .map(|e| match e {
            Event::Disposed {
                destroyed: true,
                waste_ids,
                ..
            } => waste_ids.len(),
            _ => 0,
        })
        .sum();
    assert_eq!(initial_total - world.total_waste_count(), transformed + destroyed);
}

#[test]
fn test_disposal_only_at_boundary_column() {
    let config = WorldConfig {
        width: 9,
        height: 4,
        initial_green_waste: 8,
        initial_yellow_waste: 4,
        initial_red_waste: 2,
        green_robots: 2,
        yellow_robots: 2,
        red_robots: 1,
        rng_seed: 5150,
        ..Default::default()
    };
    let mut world = World::new(config).unwrap();
    for _ in 0..200 {
        world.tick();
    }

    for event in world.event_log().events() {
        if let Event::Disposed { robot_id, pos, .. } = event {
            let tier = world.state().robot(*robot_id).unwrap().tier();
            assert_eq!(
                pos.x,
                world.zone_map().disposal_column(tier),
                "{} disposed off its boundary column",
                robot_id
            );
        }
    }
}

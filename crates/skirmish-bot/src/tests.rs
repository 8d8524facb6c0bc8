#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::DVec2;

    use skirmish_core::commands::BotCommand;
    use skirmish_core::enums::{Livery, MoveState};
    use skirmish_core::events::ScanEvent;

    use crate::controller::{Controller, EnemySnapshot};
    use crate::hull::Hull;
    use crate::targeting;

    /// Test double: fixed pose, records every issued command.
    struct RecordingHull {
        x: f64,
        y: f64,
        heading: f64,
        gun_heading: f64,
        gun_heat: f64,
        field_width: f64,
        field_height: f64,
        commands: Vec<BotCommand>,
    }

    impl RecordingHull {
        fn new() -> Self {
            Self {
                x: 400.0,
                y: 300.0,
                heading: 0.0,
                gun_heading: 0.0,
                gun_heat: 0.0,
                field_width: 800.0,
                field_height: 600.0,
                commands: Vec::new(),
            }
        }

        fn at(x: f64, y: f64, field_width: f64, field_height: f64) -> Self {
            Self {
                x,
                y,
                field_width,
                field_height,
                ..Self::new()
            }
        }

        fn gun_turns(&self) -> Vec<f64> {
            self.commands
                .iter()
                .filter_map(|c| match c {
                    BotCommand::TurnGunRight { degrees } => Some(*degrees),
                    _ => None,
                })
                .collect()
        }

        fn shots(&self) -> Vec<f64> {
            self.commands
                .iter()
                .filter_map(|c| match c {
                    BotCommand::Fire { power } => Some(*power),
                    _ => None,
                })
                .collect()
        }
    }

    impl Hull for RecordingHull {
        fn x(&self) -> f64 {
            self.x
        }
        fn y(&self) -> f64 {
            self.y
        }
        fn heading(&self) -> f64 {
            self.heading
        }
        fn gun_heading(&self) -> f64 {
            self.gun_heading
        }
        fn gun_heat(&self) -> f64 {
            self.gun_heat
        }
        fn battlefield_width(&self) -> f64 {
            self.field_width
        }
        fn battlefield_height(&self) -> f64 {
            self.field_height
        }

        fn ahead(&mut self, distance: f64) {
            self.commands.push(BotCommand::Ahead { distance });
        }
        fn turn_left(&mut self, degrees: f64) {
            self.commands.push(BotCommand::TurnLeft { degrees });
        }
        fn turn_right(&mut self, degrees: f64) {
            self.commands.push(BotCommand::TurnRight { degrees });
        }
        fn turn_gun_right(&mut self, degrees: f64) {
            self.commands.push(BotCommand::TurnGunRight { degrees });
        }
        fn turn_radar_left(&mut self, degrees: f64) {
            self.commands.push(BotCommand::TurnRadarLeft { degrees });
        }
        fn fire(&mut self, power: f64) {
            self.commands.push(BotCommand::Fire { power });
        }
        fn set_livery(&mut self, livery: Livery) {
            self.commands.push(BotCommand::SetLivery { livery });
        }
        fn set_adjust_gun_for_body_turn(&mut self, enabled: bool) {
            self.commands.push(BotCommand::AdjustGunForBodyTurn { enabled });
        }
        fn set_adjust_radar_for_body_turn(&mut self, enabled: bool) {
            self.commands
                .push(BotCommand::AdjustRadarForBodyTurn { enabled });
        }
    }

    fn scan(bearing_deg: f64, distance: f64, velocity: f64, heading_deg: f64, time: f64) -> ScanEvent {
        ScanEvent {
            bearing_deg,
            distance,
            velocity,
            heading_deg,
            time,
        }
    }

    // ---- Movement state machine ----

    #[test]
    fn test_tick_reverts_to_usual_from_every_state() {
        for entry in [
            MoveState::Usual,
            MoveState::Wall,
            MoveState::Run,
            MoveState::HitByBullet,
        ] {
            let mut bot = Controller::new();
            let mut hull = RecordingHull::new();
            bot.set_state(entry);
            bot.on_tick(&mut hull);
            assert_eq!(bot.state(), MoveState::Usual, "entered as {entry:?}");
        }
    }

    #[test]
    fn test_usual_tick_sweeps_then_advances() {
        let mut bot = Controller::new();
        let mut hull = RecordingHull::new();
        bot.on_tick(&mut hull);
        assert_eq!(
            hull.commands,
            vec![
                BotCommand::TurnRadarLeft { degrees: 360.0 },
                BotCommand::Ahead { distance: 50.0 },
            ]
        );
    }

    #[test]
    fn test_run_tick_dashes() {
        let mut bot = Controller::new();
        let mut hull = RecordingHull::new();
        bot.set_state(MoveState::Run);
        bot.on_tick(&mut hull);
        assert_eq!(hull.commands[1], BotCommand::Ahead { distance: 250.0 });
    }

    #[test]
    fn test_wall_ticks_alternate_direction() {
        let mut bot = Controller::new();
        let mut hull = RecordingHull::new();
        let mut moves = Vec::new();

        for _ in 0..3 {
            bot.set_state(MoveState::Wall);
            hull.commands.clear();
            bot.on_tick(&mut hull);
            moves.push(hull.commands[1]);
        }

        assert_eq!(
            moves,
            vec![
                BotCommand::Ahead { distance: 40.0 },
                BotCommand::Ahead { distance: -40.0 },
                BotCommand::Ahead { distance: 40.0 },
            ]
        );
    }

    #[test]
    fn test_hit_by_bullet_tick_turns_away_from_shooter() {
        let mut bot = Controller::new();
        let mut hull = RecordingHull::new();

        // Scan to set the enemy bearing, then take a hit.
        bot.on_scanned(&mut hull, &scan(120.0, 200.0, 0.0, 0.0, 1.0));
        bot.on_hit_by_bullet();
        assert_eq!(bot.state(), MoveState::HitByBullet);

        hull.commands.clear();
        bot.on_tick(&mut hull);

        // 120 + 90 = 210, normalized to -150.
        assert_eq!(
            hull.commands,
            vec![
                BotCommand::TurnRadarLeft { degrees: 360.0 },
                BotCommand::TurnRight { degrees: -150.0 },
            ]
        );
        assert_eq!(bot.state(), MoveState::Usual);
    }

    // ---- Wall collision handling ----

    #[test]
    fn test_wall_turn_direction_by_quadrant() {
        // Bottom-left quadrant: turn left.
        let mut bot = Controller::new();
        let mut hull = RecordingHull::at(10.0, 10.0, 100.0, 100.0);
        bot.on_hit_wall(&mut hull);
        assert_eq!(hull.commands, vec![BotCommand::TurnLeft { degrees: 90.0 }]);
        assert_eq!(bot.state(), MoveState::Wall);

        // Top-right quadrant: turn left.
        let mut bot = Controller::new();
        let mut hull = RecordingHull::at(90.0, 90.0, 100.0, 100.0);
        bot.on_hit_wall(&mut hull);
        assert_eq!(hull.commands, vec![BotCommand::TurnLeft { degrees: 90.0 }]);

        // Bottom-right quadrant: turn right.
        let mut bot = Controller::new();
        let mut hull = RecordingHull::at(90.0, 10.0, 100.0, 100.0);
        bot.on_hit_wall(&mut hull);
        assert_eq!(hull.commands, vec![BotCommand::TurnRight { degrees: 90.0 }]);

        // Top-left quadrant: turn right.
        let mut bot = Controller::new();
        let mut hull = RecordingHull::at(10.0, 90.0, 100.0, 100.0);
        bot.on_hit_wall(&mut hull);
        assert_eq!(hull.commands, vec![BotCommand::TurnRight { degrees: 90.0 }]);
    }

    // ---- Firing ----

    #[test]
    fn test_stationary_opponent_gets_direct_aim() {
        let mut bot = Controller::new();
        let mut hull = RecordingHull::new();

        // Stationary target: lead degenerates to exactly zero, so the gun
        // command equals direct aim and power follows the distance curve.
        bot.on_scanned(&mut hull, &scan(30.0, 200.0, 0.0, 0.0, 1.0));

        assert_eq!(
            hull.commands,
            vec![
                BotCommand::SetLivery {
                    livery: Livery::Firing
                },
                BotCommand::TurnGunRight { degrees: 30.0 },
                BotCommand::Fire { power: 2.5 },
                BotCommand::SetLivery {
                    livery: Livery::Cruise
                },
            ]
        );
    }

    #[test]
    fn test_shot_cooldown_gates_rescans() {
        let mut bot = Controller::new();
        let mut hull = RecordingHull::new();

        bot.on_scanned(&mut hull, &scan(0.0, 200.0, 0.0, 0.0, 10.0));
        assert_eq!(hull.shots().len(), 1);

        // 0.3 time-units later: suppressed.
        bot.on_scanned(&mut hull, &scan(0.0, 200.0, 0.0, 0.0, 10.3));
        assert_eq!(hull.shots().len(), 1);

        // 0.5 time-units later: allowed again.
        bot.on_scanned(&mut hull, &scan(0.0, 200.0, 0.0, 0.0, 10.5));
        assert_eq!(hull.shots().len(), 2);
    }

    #[test]
    fn test_scan_within_cooldown_leaves_snapshot_stale() {
        let mut bot = Controller::new();
        let mut hull = RecordingHull::new();

        bot.on_scanned(&mut hull, &scan(30.0, 200.0, 0.0, 0.0, 1.0));
        bot.on_scanned(&mut hull, &scan(-60.0, 50.0, 8.0, 90.0, 1.2));

        let enemy = bot.enemy();
        assert_eq!(enemy.bearing_deg, 30.0);
        assert_eq!(enemy.distance, 200.0);
    }

    #[test]
    fn test_hot_gun_refreshes_snapshot_but_holds_fire() {
        let mut bot = Controller::new();
        let mut hull = RecordingHull::new();
        hull.gun_heat = 0.5;

        bot.on_scanned(&mut hull, &scan(30.0, 200.0, 0.0, 0.0, 1.0));

        assert!(hull.commands.is_empty());
        assert_eq!(bot.enemy().distance, 200.0);
    }

    #[test]
    fn test_point_blank_fires_without_turning_gun() {
        let mut bot = Controller::new();
        let mut hull = RecordingHull::new();

        bot.on_scanned(&mut hull, &scan(45.0, 5.0, 0.0, 0.0, 1.0));

        assert!(hull.gun_turns().is_empty());
        assert_eq!(hull.shots(), vec![100.0]);
    }

    #[test]
    fn test_collision_suppresses_lead_exactly_once() {
        let mut bot = Controller::new();
        let mut hull = RecordingHull::new();

        // A crossing target that would normally draw a sizable lead.
        let crossing = |t| scan(0.0, 100.0, 10.0, 90.0, t);

        bot.on_hit_robot();
        bot.on_scanned(&mut hull, &crossing(1.0));
        assert_eq!(hull.gun_turns(), vec![0.0], "collision tick aims direct");

        hull.commands.clear();
        bot.on_scanned(&mut hull, &crossing(2.0));
        let turns = hull.gun_turns();
        assert_eq!(turns.len(), 1);
        assert!(turns[0] > 10.0, "flag cleared, lead applied: {}", turns[0]);
    }

    #[test]
    fn test_victory_paint() {
        let mut bot = Controller::new();
        let mut hull = RecordingHull::new();
        bot.on_win(&mut hull);
        assert_eq!(
            hull.commands,
            vec![BotCommand::SetLivery {
                livery: Livery::Victory
            }]
        );
    }

    #[test]
    fn test_start_decouples_gun_and_radar() {
        let mut bot = Controller::new();
        let mut hull = RecordingHull::new();
        bot.start(&mut hull);
        assert_eq!(
            hull.commands,
            vec![
                BotCommand::SetLivery {
                    livery: Livery::Cruise
                },
                BotCommand::AdjustGunForBodyTurn { enabled: true },
                BotCommand::AdjustRadarForBodyTurn { enabled: true },
            ]
        );
    }

    // ---- Targeting ----

    #[test]
    fn test_firepower_curve() {
        assert_eq!(targeting::firepower(1.0), 500.0);
        assert_eq!(targeting::firepower(250.0), 2.0);
        // Distant targets clamp to the floor, never below.
        assert_eq!(targeting::firepower(10_000.0), 0.3);
        assert_eq!(targeting::firepower(1_000_000.0), 0.3);
    }

    #[test]
    fn test_bullet_speed_model() {
        assert_eq!(targeting::bullet_speed(1.0), 17.0);
        assert_eq!(targeting::bullet_speed(3.0), 11.0);
    }

    fn snapshot(bearing_deg: f64, distance: f64, velocity: f64, heading_deg: f64) -> EnemySnapshot {
        EnemySnapshot {
            bearing_deg,
            distance,
            velocity,
            heading_deg,
        }
    }

    #[test]
    fn test_lead_angle_for_crossing_target() {
        // Target 100 units due north, crossing east at 10 units/tick.
        // Power 5 gives bullet speed 5, flight time 20, path 200:
        // the lead is atan(200 / 100) ≈ 63.43° to the right.
        let enemy = snapshot(0.0, 100.0, 10.0, 90.0);
        let lead = targeting::lead_angle(&enemy, DVec2::ZERO, 0.0, 5.0);
        assert_relative_eq!(lead, 63.434_948_822_922_01, epsilon = 1e-9);
    }

    #[test]
    fn test_lead_angle_sign_follows_crossing_direction() {
        let east = snapshot(0.0, 100.0, 10.0, 90.0);
        let west = snapshot(0.0, 100.0, 10.0, 270.0);

        let lead_east = targeting::lead_angle(&east, DVec2::ZERO, 0.0, 5.0);
        let lead_west = targeting::lead_angle(&west, DVec2::ZERO, 0.0, 5.0);

        assert!(lead_east > 0.0);
        assert!(lead_west < 0.0);
        assert_relative_eq!(lead_east, -lead_west, epsilon = 1e-9);
    }

    #[test]
    fn test_lead_angle_zero_for_stationary_target() {
        let enemy = snapshot(30.0, 200.0, 0.0, 0.0);
        let lead = targeting::lead_angle(&enemy, DVec2::new(400.0, 300.0), 0.0, 2.5);
        assert_eq!(lead, 0.0);
    }

    #[test]
    fn test_lead_angle_nan_when_triangle_degenerates() {
        // Opponent reconstructed exactly at our own position: both legs of
        // the triangle collapse and the law of cosines divides zero by zero.
        let enemy = snapshot(0.0, 0.0, 10.0, 90.0);
        let lead = targeting::lead_angle(&enemy, DVec2::new(400.0, 300.0), 0.0, 1.0);
        assert!(lead.is_nan());
    }
}

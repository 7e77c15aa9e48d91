//! Unit tests for rr-traffic.

use rr_core::{LightId, Road, VehicleId};

use crate::{Phase, PhaseDurations, TrafficLight, Vehicle};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn road(len: u32) -> Road {
    Road::new(len).unwrap()
}

fn light(id: u32, position: u32, phase: Phase) -> TrafficLight {
    TrafficLight::new(LightId(id), position, phase, PhaseDurations::from_cycle(10))
}

// ── Phase machine ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod phase {
    use super::*;

    #[test]
    fn cycle_order() {
        assert_eq!(Phase::Green.next(), Phase::Yellow);
        assert_eq!(Phase::Yellow.next(), Phase::Red);
        assert_eq!(Phase::Red.next(), Phase::Green);
    }

    #[test]
    fn ordinals() {
        assert_eq!(Phase::Red.ordinal(), 0);
        assert_eq!(Phase::Green.ordinal(), 1);
        assert_eq!(Phase::Yellow.ordinal(), 2);
    }

    #[test]
    fn stop_phases() {
        assert!(Phase::Red.is_stop());
        assert!(Phase::Yellow.is_stop());
        assert!(!Phase::Green.is_stop());
    }
}

#[cfg(test)]
mod durations {
    use super::*;

    #[test]
    fn proportional_split() {
        let d = PhaseDurations::from_cycle(10);
        assert_eq!((d.green, d.yellow, d.red), (5, 2, 3));
        assert_eq!(d.cycle_len(), 10);
    }

    #[test]
    fn default_cycle_of_nine() {
        // floor(4.5) = 4, floor(1.8) = 1, remainder 4.
        let d = PhaseDurations::from_cycle(9);
        assert_eq!((d.green, d.yellow, d.red), (4, 1, 4));
    }

    #[test]
    fn tiny_cycles_clamp_to_one() {
        let d = PhaseDurations::from_cycle(2);
        assert_eq!((d.green, d.yellow, d.red), (1, 1, 1));
        let d = PhaseDurations::from_cycle(1);
        assert_eq!((d.green, d.yellow, d.red), (1, 1, 1));
    }

    #[test]
    fn for_phase_lookup() {
        let d = PhaseDurations { green: 7, yellow: 3, red: 5 };
        assert_eq!(d.for_phase(Phase::Green), 7);
        assert_eq!(d.for_phase(Phase::Yellow), 3);
        assert_eq!(d.for_phase(Phase::Red), 5);
    }
}

#[cfg(test)]
mod light_machine {
    use super::*;

    #[test]
    fn transitions_after_duration() {
        let mut l = light(0, 0, Phase::Green); // 5 / 2 / 3
        for expected in 1..5 {
            assert!(!l.advance());
            assert_eq!(l.ticks_in_phase, expected);
            assert_eq!(l.phase, Phase::Green);
        }
        assert!(l.advance());
        assert_eq!(l.phase, Phase::Yellow);
        assert_eq!(l.ticks_in_phase, 0);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut l = light(0, 0, Phase::Red);
        let cycle = l.durations.cycle_len();
        for _ in 0..cycle {
            l.advance();
        }
        assert_eq!(l.phase, Phase::Red);
        assert_eq!(l.ticks_in_phase, 0);
    }

    #[test]
    fn no_phase_skipped_and_counter_bounded() {
        let mut l = light(0, 0, Phase::Green);
        let mut prev = l.phase;
        for _ in 0..200 {
            let transitioned = l.advance();
            assert!(l.ticks_in_phase < l.durations.for_phase(l.phase));
            if transitioned {
                assert_eq!(l.phase, prev.next());
                assert_eq!(l.ticks_in_phase, 0);
            } else {
                assert_eq!(l.phase, prev);
            }
            prev = l.phase;
        }
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod snapshot {
    use super::*;
    use crate::LightSnapshot;

    #[test]
    fn lookup_by_position() {
        let snap = LightSnapshot::capture(&[light(0, 10, Phase::Green), light(1, 20, Phase::Red)]);
        assert_eq!(snap.len(), 2);
        assert_eq!(snap.phase_at(10), Some(Phase::Green));
        assert_eq!(snap.phase_at(20), Some(Phase::Red));
        assert_eq!(snap.phase_at(15), None);
        assert!(!snap.blocks(10));
        assert!(snap.blocks(20));
        assert!(!snap.blocks(15));
    }

    #[test]
    fn first_light_wins_on_shared_cell() {
        let snap = LightSnapshot::capture(&[
            light(0, 30, Phase::Green),
            light(1, 30, Phase::Red),
        ]);
        assert_eq!(snap.light_at(30).unwrap().id, LightId(0));
        assert!(!snap.blocks(30));

        let reversed = LightSnapshot::capture(&[
            light(0, 30, Phase::Red),
            light(1, 30, Phase::Green),
        ]);
        assert!(reversed.blocks(30));
    }

    #[test]
    fn copy_is_detached_from_source() {
        let mut lights = vec![light(0, 5, Phase::Green)];
        let snap = LightSnapshot::capture(&lights);
        lights[0].phase = Phase::Red;
        assert_eq!(snap.phase_at(5), Some(Phase::Green));
        assert_eq!(snap.lights()[0].phase, Phase::Green);
    }

    #[test]
    fn empty_snapshot_never_blocks() {
        let snap = LightSnapshot::capture(&[]);
        assert!(snap.is_empty());
        assert!(!snap.blocks(0));
    }
}

// ── Initializer ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod init {
    use super::*;
    use crate::{initialize_lights, initialize_vehicles};

    #[test]
    fn vehicles_deterministic_for_seed() {
        let a = initialize_vehicles(50, road(300), 7);
        let b = initialize_vehicles(50, road(300), 7);
        assert_eq!(a, b);
    }

    #[test]
    fn vehicles_differ_across_seeds() {
        let a = initialize_vehicles(50, road(300), 7);
        let b = initialize_vehicles(50, road(300), 8);
        assert_ne!(a, b);
    }

    #[test]
    fn vehicles_within_slots() {
        let r = road(100);
        let vs = initialize_vehicles(20, r, 42); // spacing 5
        assert_eq!(vs.len(), 20);
        for (i, v) in vs.iter().enumerate() {
            assert_eq!(v.id, VehicleId(i as u32));
            assert!(r.contains(v.position));
            let slot = i as u32 * 5;
            assert!((slot..slot + 5).contains(&v.position), "vehicle {i} at {}", v.position);
            assert!((1..=2).contains(&v.max_speed));
        }
    }

    #[test]
    fn dense_population_has_no_jitter() {
        let r = road(10);
        let vs = initialize_vehicles(15, r, 3); // spacing collapses to 1
        for (i, v) in vs.iter().enumerate() {
            assert_eq!(v.position, (i as u32) % 10);
        }
    }

    #[test]
    fn lights_evenly_spaced_and_alternating() {
        let ls = initialize_lights(4, road(100), 10);
        let positions: Vec<u32> = ls.iter().map(|l| l.position).collect();
        assert_eq!(positions, [0, 25, 50, 75]);
        let phases: Vec<Phase> = ls.iter().map(|l| l.phase).collect();
        assert_eq!(phases, [Phase::Green, Phase::Red, Phase::Green, Phase::Red]);
        for (i, l) in ls.iter().enumerate() {
            assert_eq!(l.id, LightId(i as u32));
            assert_eq!(l.ticks_in_phase, 0);
            assert_eq!(l.durations, PhaseDurations { green: 5, yellow: 2, red: 3 });
        }
    }

    #[test]
    fn zero_count_yields_empty() {
        assert!(initialize_vehicles(0, road(10), 1).is_empty());
        assert!(initialize_lights(0, road(10), 9).is_empty());
    }
}

// ── Engines ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod engines {
    use super::*;
    use crate::{LightSnapshot, advance_lights, move_vehicles};

    #[test]
    fn advance_lights_is_per_light() {
        let mut ls = vec![light(0, 0, Phase::Green), light(1, 50, Phase::Red)];
        for _ in 0..3 {
            advance_lights(&mut ls);
        }
        // Green lasts 5, red lasts 3.
        assert_eq!((ls[0].phase, ls[0].ticks_in_phase), (Phase::Green, 3));
        assert_eq!((ls[1].phase, ls[1].ticks_in_phase), (Phase::Green, 0));
    }

    #[test]
    fn vehicle_moves_when_destination_clear() {
        let r = road(100);
        let snap = LightSnapshot::capture(&[light(0, 50, Phase::Red)]);
        let mut vs = vec![Vehicle::new(VehicleId(0), 10, 2)];
        move_vehicles(&mut vs, &snap, r);
        assert_eq!(vs[0].position, 12);
    }

    #[test]
    fn vehicle_held_by_red_or_yellow() {
        let r = road(100);
        for phase in [Phase::Red, Phase::Yellow] {
            let snap = LightSnapshot::capture(&[light(0, 50, phase)]);
            let mut vs = vec![Vehicle::new(VehicleId(0), 48, 2)];
            move_vehicles(&mut vs, &snap, r);
            assert_eq!(vs[0].position, 48, "{phase} must hold the vehicle");
        }
    }

    #[test]
    fn vehicle_passes_green() {
        let r = road(100);
        let snap = LightSnapshot::capture(&[light(0, 50, Phase::Green)]);
        let mut vs = vec![Vehicle::new(VehicleId(0), 48, 2)];
        move_vehicles(&mut vs, &snap, r);
        assert_eq!(vs[0].position, 50);
    }

    #[test]
    fn only_destination_cell_is_checked() {
        // Light sits on the skipped-over cell, not the destination.
        let r = road(100);
        let snap = LightSnapshot::capture(&[light(0, 49, Phase::Red)]);
        let mut vs = vec![Vehicle::new(VehicleId(0), 48, 2)];
        move_vehicles(&mut vs, &snap, r);
        assert_eq!(vs[0].position, 50);
    }

    #[test]
    fn wraps_around_the_loop() {
        let r = road(100);
        let snap = LightSnapshot::capture(&[]);
        let mut vs = vec![Vehicle::new(VehicleId(0), 99, 2), Vehicle::new(VehicleId(1), 99, 1)];
        move_vehicles(&mut vs, &snap, r);
        assert_eq!(vs[0].position, 1);
        assert_eq!(vs[1].position, 0);
    }

    #[test]
    fn red_light_at_wrapped_destination_holds() {
        let r = road(100);
        let snap = LightSnapshot::capture(&[light(0, 0, Phase::Red)]);
        let mut vs = vec![Vehicle::new(VehicleId(0), 98, 2)];
        move_vehicles(&mut vs, &snap, r);
        assert_eq!(vs[0].position, 98);
    }
}

//! Unit tests for al-core primitives.

#[cfg(test)]
mod geo {
    use crate::GridPos;

    #[test]
    fn rectangular_distance_sums_axes() {
        let a = GridPos::new(0, 0, 0);
        let b = GridPos::new(3, -4, 2);
        assert_eq!(a.rectangular_distance(b), 9);
        assert_eq!(b.rectangular_distance(a), 9);
    }

    #[test]
    fn zero_distance_to_self() {
        let p = GridPos::new(-7, 12, 5);
        assert_eq!(p.rectangular_distance(p), 0);
    }

    #[test]
    fn extreme_positions_saturate() {
        let a = GridPos::new(i32::MIN, i32::MIN, i32::MIN);
        let b = GridPos::new(i32::MAX, i32::MAX, i32::MAX);
        assert_eq!(a.rectangular_distance(b), u32::MAX);
    }

    #[test]
    fn from_tuple() {
        assert_eq!(GridPos::from((1, 2, 3)), GridPos::new(1, 2, 3));
    }
}

#[cfg(test)]
mod ids {
    use crate::{DoorId, GridPos};

    #[test]
    fn same_cell_same_id() {
        let a = DoorId::from(GridPos::new(4, 5, 6));
        let b = DoorId::new(4, 5, 6);
        assert_eq!(a, b);
    }

    #[test]
    fn display_uses_colon_form() {
        assert_eq!(DoorId::new(1, -2, 3).to_string(), "1:-2:3");
    }

    #[test]
    fn distance_between_ids() {
        assert_eq!(DoorId::new(0, 0, 0).distance(DoorId::new(10, 0, 1)), 11);
    }
}

#[cfg(test)]
mod time {
    use crate::{AirlockConfig, DEFAULT_COOLDOWN_TICKS, DEFAULT_TAG, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn tick_advance_and_display() {
        let mut t = Tick::ZERO;
        t.advance();
        t.advance();
        assert_eq!(t, Tick(2));
        assert_eq!(t.to_string(), "T2");
    }

    #[test]
    fn tick_saturates_at_max() {
        let mut t = Tick(u64::MAX - 1);
        t.advance();
        t.advance();
        assert_eq!(t, Tick(u64::MAX));
        assert_eq!(Tick(u64::MAX - 2) + 5, Tick(u64::MAX));
        assert_eq!(Tick(u64::MAX).offset(1), Tick(u64::MAX));
    }

    #[test]
    fn default_config() {
        let cfg = AirlockConfig::default();
        assert_eq!(cfg.default_tag, DEFAULT_TAG);
        assert_eq!(cfg.cooldown_ticks, DEFAULT_COOLDOWN_TICKS);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_tag_rejected() {
        let cfg = AirlockConfig { default_tag: String::new(), ..AirlockConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_cooldown_rejected() {
        let cfg = AirlockConfig { cooldown_ticks: 0, ..AirlockConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn snapshot_interval() {
        let every_third = AirlockConfig { snapshot_interval_ticks: 3, ..AirlockConfig::default() };
        assert!(every_third.is_snapshot_tick(Tick(0)));
        assert!(!every_third.is_snapshot_tick(Tick(1)));
        assert!(every_third.is_snapshot_tick(Tick(6)));

        let never = AirlockConfig { snapshot_interval_ticks: 0, ..AirlockConfig::default() };
        assert!(!never.is_snapshot_tick(Tick(0)));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..1_000u32), b.gen_range(0..1_000u32));
        }
    }

    #[test]
    fn children_are_reproducible_and_distinct() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let mut ca = a.child(1);
        let mut cb = b.child(1);
        let xs: Vec<u32> = (0..8).map(|_| ca.gen_range(0..u32::MAX)).collect();
        let ys: Vec<u32> = (0..8).map(|_| cb.gen_range(0..u32::MAX)).collect();
        assert_eq!(xs, ys);

        let mut other = a.child(2);
        let zs: Vec<u32> = (0..8).map(|_| other.gen_range(0..u32::MAX)).collect();
        assert_ne!(xs, zs);
    }

    #[test]
    fn gen_bool_clamps() {
        let mut r = SimRng::new(1);
        assert!(r.gen_bool(2.0));
        assert!(!r.gen_bool(-1.0));
    }

    #[test]
    fn choose_empty_is_none() {
        let mut r = SimRng::new(3);
        let empty: [u8; 0] = [];
        assert!(r.choose(&empty).is_none());
    }
}

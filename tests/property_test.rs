use proptest::prelude::*;

use population_growth::analysis::generate;

proptest! {
    #[test]
    fn series_has_one_point_per_step(
        n0 in -1.0e6f64..1.0e6,
        r in -5.0f64..5.0,
        t_max in 0i64..500,
    ) {
        let series = generate(n0, r, t_max).unwrap();
        prop_assert_eq!(series.len() as i64, t_max + 1);
        for (i, p) in series.iter().enumerate() {
            prop_assert_eq!(p.t as usize, i);
        }
    }

    #[test]
    fn first_point_is_initial_population(
        n0 in -1.0e6f64..1.0e6,
        r in -5.0f64..5.0,
        t_max in 0i64..200,
    ) {
        let series = generate(n0, r, t_max).unwrap();
        prop_assert_eq!(series.initial(), Some(n0));
    }

    #[test]
    fn zero_rate_is_constant(n0 in -1.0e6f64..1.0e6, t_max in 0i64..200) {
        let series = generate(n0, 0.0, t_max).unwrap();
        prop_assert!(series.iter().all(|p| p.n == n0));
    }

    #[test]
    fn zero_horizon_is_single_point(n0 in -1.0e6f64..1.0e6, r in -5.0f64..5.0) {
        let series = generate(n0, r, 0).unwrap();
        prop_assert_eq!(series.len(), 1);
        prop_assert_eq!(series.points()[0].n, n0);
    }

    #[test]
    fn positive_rate_strictly_increases(
        n0 in 1.0f64..1.0e4,
        r in 0.01f64..1.0,
        t_max in 1i64..100,
    ) {
        let values = generate(n0, r, t_max).unwrap().values();
        prop_assert!(values.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn negative_rate_strictly_decreases(
        n0 in 1.0f64..1.0e4,
        r in -1.0f64..-0.01,
        t_max in 1i64..100,
    ) {
        let values = generate(n0, r, t_max).unwrap().values();
        prop_assert!(values.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn generation_is_deterministic(
        n0 in -1.0e6f64..1.0e6,
        r in -5.0f64..5.0,
        t_max in 0i64..300,
    ) {
        let a = generate(n0, r, t_max).unwrap();
        let b = generate(n0, r, t_max).unwrap();
        let bits_a: Vec<u64> = a.iter().map(|p| p.n.to_bits()).collect();
        let bits_b: Vec<u64> = b.iter().map(|p| p.n.to_bits()).collect();
        prop_assert_eq!(bits_a, bits_b);
    }

    #[test]
    fn negative_horizon_always_rejected(
        n0 in -1.0e6f64..1.0e6,
        r in -5.0f64..5.0,
        t_max in i64::MIN..0,
    ) {
        prop_assert!(generate(n0, r, t_max).is_err());
    }
}

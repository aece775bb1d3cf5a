//! Property checks over randomly generated day trajectories.

use loctrack_trajectory::{
    analyze_stops, distance_between, format_duration, legs, summarize, total_distance,
    PositionSample, StopConfig, Trajectory,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEEDS: [u64; 8] = [1, 7, 42, 99, 1234, 2024, 31337, 65535];

/// Random walk around Jakarta mixing stationary jitter with travel.
fn random_trajectory(rng: &mut StdRng, len: usize) -> Vec<PositionSample> {
    let mut lat = -6.2;
    let mut lng = 106.816666;
    let mut ts: i64 = 1_700_000_000_000;
    let mut samples = Vec::with_capacity(len);

    for _ in 0..len {
        samples.push(PositionSample::new(lat, lng, ts).with_accuracy(rng.random_range(3.0..30.0)));
        ts += rng.random_range(1_000..45_000);
        if rng.random_bool(0.4) {
            // Stationary jitter, well under a meter
            lat += rng.random_range(-0.000005..0.000005);
            lng += rng.random_range(-0.000005..0.000005);
        } else {
            lat += rng.random_range(-0.002..0.002);
            lng += rng.random_range(-0.002..0.002);
        }
    }
    samples
}

#[test]
fn distance_is_zero_to_self_and_symmetric() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..500 {
        let a = PositionSample::new(rng.random_range(-90.0..90.0), rng.random_range(-180.0..180.0), 0);
        let b = PositionSample::new(rng.random_range(-90.0..90.0), rng.random_range(-180.0..180.0), 1);
        assert_eq!(distance_between(&a, &a), 0.0);
        assert_eq!(distance_between(&a, &b), distance_between(&b, &a));
        assert!(distance_between(&a, &b) >= 0.0);
    }
}

#[test]
fn total_distance_is_sum_of_pairs() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let samples = random_trajectory(&mut rng, 200);
        let pairwise: f64 = samples
            .windows(2)
            .map(|w| distance_between(&w[0], &w[1]))
            .sum();
        assert!((total_distance(&samples) - pairwise).abs() < 1e-6);

        let leg_sum: f64 = legs(&samples).iter().map(|l| l.distance_meters).sum();
        assert!((leg_sum - pairwise).abs() < 1e-6);
    }
}

#[test]
fn generated_trajectories_are_valid() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let samples = random_trajectory(&mut rng, 150);
        let trajectory = Trajectory::new(samples).expect("ascending timestamps");
        assert_eq!(trajectory.len(), 150);
    }
}

#[test]
fn stops_never_overlap_and_respect_minimum() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let samples = random_trajectory(&mut rng, 300);
        let config = StopConfig::new(rng.random_range(2.0..25.0), rng.random_range(0..120_000));
        let stops = analyze_stops(&samples, &config);

        for stop in &stops {
            assert!(stop.sample_count >= 1);
            assert_eq!(stop.duration_ms, stop.end_ms - stop.start_ms);
            assert!(stop.duration_ms >= config.min_stop_duration_ms);
        }
        for pair in stops.windows(2) {
            assert!(pair[0].start_ms < pair[1].start_ms);
            assert!(pair[0].end_ms < pair[1].start_ms);
        }
        let members: usize = stops.iter().map(|s| s.sample_count).sum();
        assert!(members <= samples.len());
    }
}

#[test]
fn five_close_samples_then_departure() {
    // All within 2m of each other over 90 seconds, then 500m away
    let base = (-6.2, 106.816666);
    let m = 1.0 / 111_195.0;
    let samples = vec![
        PositionSample::new(base.0, base.1, 0),
        PositionSample::new(base.0 + 0.5 * m, base.1, 22_500),
        PositionSample::new(base.0 + 1.0 * m, base.1, 45_000),
        PositionSample::new(base.0 + 0.5 * m, base.1, 67_500),
        PositionSample::new(base.0 + 1.5 * m, base.1, 90_000),
        PositionSample::new(base.0 + 500.0 * m, base.1, 120_000),
    ];

    let stops = analyze_stops(&samples, &StopConfig::new(10.0, 60_000));
    assert_eq!(stops.len(), 1);
    assert_eq!(stops[0].sample_count, 5);
    assert_eq!(stops[0].start_ms, 0);
    assert_eq!(stops[0].duration_ms, 90_000);

    assert!(analyze_stops(&samples, &StopConfig::new(10.0, 600_000)).is_empty());
}

#[test]
fn known_distance_near_jakarta() {
    let a = PositionSample::new(-6.2, 106.816666, 0);
    let b = PositionSample::new(-6.2001, 106.816666, 1_000);
    let d = distance_between(&a, &b);
    assert!((d - 11.1).abs() <= 0.5, "got {}", d);
}

#[test]
fn durations_between_samples() {
    let a = PositionSample::new(0.0, 0.0, 10_000);
    let b = PositionSample::new(0.0, 0.0, 135_000);
    let spec = format_duration(&a, &b).unwrap();
    assert_eq!((spec.total_seconds, spec.minutes, spec.seconds), (125, 2, 5));
    assert!(format_duration(&b, &a).is_none());
}

#[test]
fn summary_accounts_for_whole_span() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let samples = random_trajectory(&mut rng, 120);
        let summary = summarize(&samples, &StopConfig::default());

        let span = samples[samples.len() - 1].timestamp_ms - samples[0].timestamp_ms;
        assert_eq!(summary.stopped_ms + summary.moving_ms, span);
        assert!((summary.total_distance_meters - total_distance(&samples)).abs() < 1e-6);
        let bounds = summary.bounds.unwrap();
        assert!(samples.iter().all(|s| bounds.contains(s)));
    }
}

use esweep::{
    dsp::{
        chirp::{instantaneous_frequency, time_vector},
        window::fade_out_curve,
    },
    io::{read_wav, write_wav, WavFormat},
    synthesize, ErrorKind, SweepConfig, SweepError,
};
use pretty_assertions::assert_eq;

fn measurement_config() -> SweepConfig {
    SweepConfig::new(1.0)
        .frequency_range(20.0, 20_000.0)
        .sample_rate(48_000.0)
        .repetitions(2)
        .inter_sweep_interval(1.0)
}

#[test]
fn measurement_scenario_layout() {
    let out = synthesize(&measurement_config()).unwrap();

    assert_eq!(out.single.len(), 48_001);
    assert_eq!(out.composite.len(), 192_001);
    assert_eq!(out.offsets, vec![24_000, 120_000]);
    assert_eq!(out.repetition_count, 2);
    assert_eq!(out.inter_sweep_interval, 1.0);
}

#[test]
fn composite_is_copies_and_silence() {
    let out = synthesize(&measurement_config()).unwrap();
    let len = out.single.len();

    let mut cursor = 0;
    for &offset in &out.offsets {
        assert!(out.composite[cursor..offset].iter().all(|&s| s == 0.0));
        assert!(out.composite[offset..offset + len] == out.single[..]);
        cursor = offset + len;
    }
    assert!(out.composite[cursor..].iter().all(|&s| s == 0.0));
}

#[test]
fn offsets_are_evenly_spaced() {
    let config = SweepConfig::new(0.37)
        .frequency_range(30.0, 15_000.0)
        .sample_rate(44_100.0)
        .repetitions(7)
        .inter_sweep_interval(0.21);
    let out = synthesize(&config).unwrap();
    let spacing = (0.37 + 0.21) * 44_100.0;

    for pair in out.offsets.windows(2) {
        assert!(pair[1] > pair[0]);
        let gap = (pair[1] - pair[0]) as f64;
        assert!((gap - spacing).abs() <= 1.0, "gap {gap} vs {spacing}");
    }
}

#[test]
fn frequency_curve_spans_the_band() {
    let t = time_vector(1.0, 48_000.0);
    let f = instantaneous_frequency(&t, 20.0, 20_000.0, 1.0);
    assert!((f[0] - 20.0).abs() < 1e-9);
    assert!((f[f.len() - 1] - 20_000.0).abs() < 1e-6);
}

#[test]
fn tail_tapers_to_zero() {
    let config = SweepConfig::new(0.5)
        .frequency_range(20.0, 2_000.0)
        .sample_rate(8_000.0)
        .fade_out_time(0.05);
    let out = synthesize(&config).unwrap();
    let fade = 400;
    let tail = &out.single[out.single.len() - fade..];
    let envelope = fade_out_curve(fade);

    // Every tail sample stays under a strictly falling envelope
    assert!(envelope.windows(2).all(|w| w[1] < w[0]));
    for (sample, bound) in tail.iter().zip(&envelope) {
        assert!(sample.abs() <= bound + 1e-12);
    }
    assert_eq!(*tail.last().unwrap(), 0.0);
    assert!(out.single.iter().all(|s| s.abs() <= 1.0));
}

#[test]
fn synthesis_is_deterministic() {
    let a = synthesize(&measurement_config()).unwrap();
    let b = synthesize(&measurement_config()).unwrap();
    assert!(a.composite.iter().zip(&b.composite).all(|(x, y)| x.to_bits() == y.to_bits()));
    assert!(a.single.iter().zip(&b.single).all(|(x, y)| x.to_bits() == y.to_bits()));
}

#[test]
fn nyquist_violation_produces_no_output() {
    let config = SweepConfig::new(1.0)
        .frequency_range(20.0, 24_000.0)
        .sample_rate(30_000.0);
    let err = synthesize(&config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(matches!(
        err,
        SweepError::BelowNyquist { nyquist_rate, .. } if nyquist_rate == 48_000.0
    ));
}

#[test]
fn oversized_request_fails_with_allocation_bounds() {
    let config = SweepConfig::new(1e9)
        .frequency_range(20.0, 400.0)
        .sample_rate(1_000.0)
        .repetitions(1);
    let err = synthesize(&config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AllocationBounds);
    assert!(matches!(err, SweepError::BufferTooLarge { .. }));
}

#[test]
fn default_config_runs() {
    let out = synthesize(&SweepConfig::new(0.25)).unwrap();
    assert_eq!(out.sample_rate, 48_000.0);
    assert_eq!(out.single.len(), 12_001);
    assert_eq!(out.offsets, vec![6_000]);
    assert_eq!(out.composite.len(), 24_001);
}

#[test]
fn wav_output_matches_composite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("composite.wav");
    let config = SweepConfig::new(0.2)
        .frequency_range(50.0, 4_000.0)
        .sample_rate(8_000.0)
        .repetitions(2);
    let out = synthesize(&config).unwrap();

    write_wav(&path, &out.composite, out.sample_rate, WavFormat::Float32).unwrap();
    let (read, rate) = read_wav(&path).unwrap();

    assert_eq!(rate, 8_000);
    assert_eq!(read.len(), out.composite.len());
    assert!(read
        .iter()
        .zip(&out.composite)
        .all(|(a, b)| (a - b).abs() < 1e-6));
}

use std::fs;
use std::path::Path;

use zipsizer_core::error::SizerError;
use zipsizer_core::{Algorithm, EstimateConfig, Inventory, Sampler, estimate};

const MB: u64 = 1024 * 1024;

/// Deterministic, mildly compressible bytes.
fn payload(len: u64, seed: u8) -> Vec<u8> {
    (0..len)
        .map(|i| {
            let x = i.wrapping_mul(2654435761) >> 7;
            if i % 3 == 0 { seed } else { (x as u8) & 0x0f }
        })
        .collect()
}

fn write(dir: &Path, name: &str, data: &[u8]) {
    let p = dir.join(name);
    if let Some(parent) = p.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(p, data).unwrap();
}

#[test]
fn three_four_mib_files_give_one_window_in_the_third() {
    let dir = tempfile::tempdir().unwrap();
    let third = payload(4 * MB, 3);
    write(dir.path(), "1.bin", &payload(4 * MB, 1));
    write(dir.path(), "2.bin", &payload(4 * MB, 2));
    write(dir.path(), "3.bin", &third);

    let inv = Inventory::scan(dir.path()).unwrap();
    assert_eq!(inv.total_size(), 12 * MB);

    let sample = Sampler::new(10 * MB, MB).sample(&inv);
    assert_eq!(sample.points, 1);
    assert_eq!(sample.windows.len(), 1);
    let w = &sample.windows[0];
    assert_eq!(w.virtual_offset, 9 * MB);
    assert_eq!(w.file_index, 2);
    assert_eq!(w.file_offset, MB);
    assert_eq!(sample.len(), MB);
    assert_eq!(sample.data.as_slice(), &third[MB as usize..2 * MB as usize]);
}

#[test]
fn sampling_is_repeatable() {
    let dir = tempfile::tempdir().unwrap();
    for (i, name) in ["a/x", "a/y/z", "b", "c/d/e/f"].iter().enumerate() {
        write(dir.path(), name, &payload(3000 + i as u64 * 777, i as u8));
    }
    let cfg = EstimateConfig::new(Algorithm::Gzip, 6, 0.3, 1000).unwrap();

    let first = estimate(dir.path(), &cfg).unwrap();
    let second = estimate(dir.path(), &cfg).unwrap();
    assert_eq!(first, second);

    let inv = Inventory::scan(dir.path()).unwrap();
    let a = Sampler::from_config(&cfg).sample(&inv);
    let b = Sampler::from_config(&cfg).sample(&inv);
    assert_eq!(a.data, b.data);
    assert_eq!(a.digest(), first.sample_digest);
}

#[test]
fn empty_tree_estimates_zero_without_a_ratio() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("nothing-here")).unwrap();
    write(dir.path(), "empty.txt", b"");

    let stats = estimate(dir.path(), &EstimateConfig::default()).unwrap();
    assert_eq!(stats.files, 1);
    assert_eq!(stats.total_size, 0);
    assert_eq!(stats.points, 0);
    assert_eq!(stats.estimate.sample_len, 0);
    assert_eq!(stats.estimate.estimated_total, 0.0);
    assert_eq!(stats.estimate.ratio(), None);
}

#[test]
fn tree_smaller_than_first_point_samples_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "small", &payload(800, 9));

    // first point at 1000 - 100 = 900
    let cfg = EstimateConfig::new(Algorithm::Bzip2, 9, 0.1, 1000).unwrap();
    let stats = estimate(dir.path(), &cfg).unwrap();
    assert_eq!(stats.total_size, 800);
    assert_eq!(stats.points, 0);
    assert_eq!(stats.estimate.sample_len, 0);
    assert!(stats.estimate.ratio().is_none());
}

#[test]
fn estimate_is_bounded_by_the_plan() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "one", &payload(25_000, 1));
    write(dir.path(), "two", &payload(13_337, 2));
    write(dir.path(), "sub/three", &payload(41_000, 3));

    for algo in Algorithm::ALL {
        let cfg = EstimateConfig::new(algo, 5, 0.2, 4096).unwrap();
        let stats = estimate(dir.path(), &cfg).unwrap();
        assert_eq!(stats.total_size, 79_337);
        assert!(stats.estimate.sample_len <= cfg.sample_size * stats.points);
        assert!(stats.estimate.sample_len > 0);
        let ratio = stats.estimate.ratio().unwrap();
        assert!(ratio > 1.0, "{algo}: ratio {ratio}");
    }
}

#[test]
fn invalid_config_is_rejected_before_touching_the_filesystem() {
    let cfg = EstimateConfig {
        level: 42,
        ..EstimateConfig::default()
    };
    let err = estimate(Path::new("/definitely/not/here"), &cfg).unwrap_err();
    assert!(matches!(err, SizerError::Config(_)));
}

#[test]
fn missing_root_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = estimate(&dir.path().join("gone"), &EstimateConfig::default()).unwrap_err();
    assert!(matches!(err, SizerError::NotADirectory(_)));
}

#[cfg(unix)]
#[test]
fn unreadable_file_is_skipped_and_counted() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a", &payload(1500, 1));
    write(dir.path(), "b", &payload(1500, 2));
    let locked = dir.path().join("a");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // root can read anything; only assert when the lock actually holds
    if fs::File::open(&locked).is_ok() {
        return;
    }

    // points at 900 (in a), then 1900 and 2900 (in b at 400 and 1400)
    let cfg = EstimateConfig::new(Algorithm::Gzip, 9, 0.1, 1000).unwrap();
    let inv = Inventory::scan(dir.path()).unwrap();
    let sample = Sampler::from_config(&cfg).sample(&inv);
    assert_eq!(sample.points, 3);
    assert_eq!(sample.skipped_files, 1);
    assert_eq!(sample.windows.len(), 2);
    assert_eq!(sample.windows[0].file_index, 1);
    assert_eq!(sample.windows[0].file_offset, 400);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
}

use super::*;
use crate::arch::{CountStrategy, HardwareCount, SoftwareCount, Strategy};
use crate::config::BenchConfig;
use crate::error::HarnessError;
use crate::kernels::{BUFFER_KERNELS, BYTE_COUNTS, KERNELS_32};

#[test]
fn unrolled_totals_match_straight_totals() {
    let config = BenchConfig::quick();
    for (name, kernel) in KERNELS_32 {
        let result = bench_register(name, kernel, &config).unwrap();
        assert_eq!(result.total, result.unrolled_total, "kernel {}", name);
        // the descending values are the complements of the ascending ones
        assert_eq!(result.total, 32 * config.register_iterations as u64, "kernel {}", name);
    }
}

#[test]
fn register_u64_totals() {
    let config = BenchConfig::quick();
    let expected = 64 * (config.register_iterations / 2) as u64;

    let result = bench_register_u64("builtin64", HardwareCount::popcount_u64, &config).unwrap();
    assert_eq!(result.total, result.unrolled_total);
    assert_eq!(result.total, expected);

    let result = bench_register_u64("builtin64", SoftwareCount::popcount_u64, &config).unwrap();
    assert_eq!(result.total, result.unrolled_total);
    assert_eq!(result.total, expected);
}

#[test]
fn register_loops_reject_uneven_iterations() {
    // six values per direction cannot be split into unrolled groups of four
    let config = BenchConfig {
        register_iterations: 6,
        ..BenchConfig::quick()
    };
    let result = bench_register("simple", crate::kernels::simple, &config);
    assert!(matches!(result, Err(HarnessError::InvalidConfig(_))));

    let result = bench_register_u64("builtin64", SoftwareCount::popcount_u64, &config);
    assert!(matches!(result, Err(HarnessError::InvalidConfig(_))));

    let config = BenchConfig {
        register_iterations: 0,
        ..BenchConfig::quick()
    };
    assert!(bench_register("simple", crate::kernels::simple, &config).is_err());
}

#[test]
fn register_result_line() {
    let result = RegisterResult {
        label: "simple".to_string(),
        elapsed: std::time::Duration::from_millis(1500),
        unrolled_elapsed: std::time::Duration::from_millis(250),
        total: 42,
        unrolled_total: 42,
    };
    assert_eq!(result.to_string(), "simple      1.500s (0.250s unrolled) 42 42");
}

#[test]
fn input_buffer_is_seeded() {
    let a = InputBuffer::allocate(1000, 7).unwrap();
    let b = InputBuffer::allocate(1000, 7).unwrap();
    let c = InputBuffer::allocate(1000, 8).unwrap();

    assert_eq!(a.words().len(), 1000);
    assert_eq!(a.len_bytes(), 8000);
    assert_eq!(a.words(), b.words());
    assert_ne!(a.words(), c.words());
}

#[test]
fn shootout_kernels_agree() {
    let buffer = InputBuffer::allocate(BenchConfig::quick().buffer_words, 1).unwrap();
    let expected = buffer
        .as_bytes()
        .iter()
        .map(|&b| BYTE_COUNTS[b as usize] as u64)
        .sum::<u64>();
    let words = buffer.words().iter().map(|w| w.count_ones() as u64).sum::<u64>();
    assert_eq!(expected, words);

    for (name, kernel) in BUFFER_KERNELS {
        let result = bench_shootout(name, kernel, &buffer);
        assert_eq!(result.total, expected, "kernel {}", name);
        assert_eq!(result.label, name);
    }
}

#[test]
fn failed_allocation_reports_out_of_memory() {
    let result = InputBuffer::allocate(usize::MAX, 0);
    match result {
        Err(HarnessError::OutOfMemory { bytes }) => assert_eq!(bytes, usize::MAX),
        other => panic!("expected out of memory, got {:?}", other),
    }
}

#[test]
fn out_of_memory_stops_the_shootout() {
    let config = BenchConfig {
        buffer_words: usize::MAX,
        ..BenchConfig::quick()
    };
    let mut out = Vec::new();
    let result = run_shootout_suite(&config, Strategy::Software, &mut out);

    let err = result.unwrap_err();
    assert!(matches!(err, HarnessError::OutOfMemory { .. }));
    assert!(err.to_string().starts_with("Out of memory"));
    assert!(out.is_empty(), "nothing may be reported after a failed allocation");
}

#[test]
fn invalid_config_is_rejected() {
    let config = BenchConfig {
        register_iterations: 6,
        ..BenchConfig::quick()
    };
    let mut out = Vec::new();
    let result = run(&config, Strategy::Software, &mut out);
    assert!(matches!(result, Err(HarnessError::InvalidConfig(_))));
    assert!(out.is_empty());
}

#[test]
fn full_report() {
    let config = BenchConfig::quick();
    for strategy in [Strategy::Software, Strategy::Hardware] {
        let mut out = Vec::new();
        run(&config, strategy, &mut out).unwrap();
        let report = String::from_utf8(out).unwrap();

        assert!(report.starts_with("Note:"));
        assert!(report.contains("-- register-only --"));
        assert!(report.contains("---- shoot-out ----"));
        for label in [
            "simple", "lookup1", "lookup2", "kernighan", "mod", "parallel", "builtin32",
            "builtin64", "builtin", "lookup", "redis",
        ] {
            assert!(
                report.lines().any(|line| line.split_whitespace().next() == Some(label)),
                "missing line for {}",
                label
            );
        }
    }
}

#[test]
fn register_suite_follows_kernel_order() {
    let config = BenchConfig::quick();
    for strategy in [Strategy::Software, Strategy::Hardware] {
        let mut out = Vec::new();
        let results = run_register_suite(&config, strategy, &mut out).unwrap();

        let labels = results.iter().map(|r| r.label.as_str()).collect::<Vec<_>>();
        let expected = KERNELS_32.iter().map(|&(name, _)| name).collect::<Vec<_>>();
        assert_eq!(&labels[..KERNELS_32.len()], &expected[..]);
        assert_eq!(&labels[KERNELS_32.len()..], &["builtin64"]);

        let report = String::from_utf8(out).unwrap();
        let lines = report
            .lines()
            .skip(1)
            .filter_map(|line| line.split_whitespace().next())
            .collect::<Vec<_>>();
        assert_eq!(lines, labels);
    }
}

#[test]
fn suites_return_results() {
    let config = BenchConfig::quick();
    let mut out = Vec::new();

    let register = run_register_suite(&config, Strategy::detect(), &mut out).unwrap();
    assert_eq!(register.len(), 8);
    assert!(register.iter().all(|r| r.total == r.unrolled_total));

    let shootout = run_shootout_suite(&config, Strategy::detect(), &mut out).unwrap();
    assert_eq!(shootout.len(), 4);
    assert!(shootout.windows(2).all(|w| w[0].total == w[1].total));
}

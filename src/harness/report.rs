//! The fixed benchmark suite and its report.

use std::io::Write;

use crate::arch::{CountStrategy, HardwareCount, SoftwareCount, Strategy};
use crate::config::BenchConfig;
use crate::error::Result;
use crate::kernels::{
    count_words_u64, kernighan, lookup_bytes, lookup_mask, modular, parallel, shootout_lookup,
    shootout_parallel, shootout_redis, simple,
};

use super::{
    bench_register, bench_register_u64, bench_shootout, InputBuffer, RegisterResult,
    ShootoutResult,
};

/// Write the notes preceding the report. The register-only test covers `2 * n` 32-bit values,
/// which is the same amount of data as the default shoot-out buffer.
fn write_header<W: Write>(config: &BenchConfig, out: &mut W) -> Result<()> {
    let register_bytes = 8 * config.register_iterations as u64;
    writeln!(
        out,
        "Note: Register-only tests operate on {}MB ({} bits), shoot-out tests on {}MB",
        register_bytes >> 20,
        register_bytes * 8,
        config.buffer_bytes() >> 20
    )?;
    writeln!(out, "      The totals printed are to keep the compiler from optimizing")?;
    writeln!(out, "      away the actual work. Do not compare the totals between the")?;
    writeln!(out, "      register-only and shoot-out tests.")?;
    writeln!(out)?;
    Ok(())
}

/// Run every kernel through the register-only test and write one line per kernel. The builtin
/// kernels use the given strategy.
pub fn run_register_suite<W: Write>(
    config: &BenchConfig,
    strategy: Strategy,
    out: &mut W,
) -> Result<Vec<RegisterResult>> {
    config.validate()?;
    writeln!(out, "-- register-only --")?;

    let mut results = Vec::with_capacity(8);
    let mut report = |result: Result<RegisterResult>| -> Result<()> {
        let result = result?;
        writeln!(out, "{}", result)?;
        out.flush()?;
        results.push(result);
        Ok(())
    };

    // every kernel is passed as a function item, so each loop is monomorphized and can inline it
    report(bench_register("simple", simple, config))?;
    report(bench_register("lookup1", lookup_mask, config))?;
    report(bench_register("lookup2", lookup_bytes, config))?;
    report(bench_register("kernighan", kernighan, config))?;
    report(bench_register("mod", modular, config))?;
    report(bench_register("parallel", parallel, config))?;

    match strategy {
        Strategy::Hardware => {
            report(bench_register("builtin32", HardwareCount::popcount_u32, config))?;
            report(bench_register_u64("builtin64", HardwareCount::popcount_u64, config))?;
        }
        Strategy::Software => {
            report(bench_register("builtin32", SoftwareCount::popcount_u32, config))?;
            report(bench_register_u64("builtin64", SoftwareCount::popcount_u64, config))?;
        }
    }

    Ok(results)
}

/// Allocate the input buffer and count it with every buffer kernel, writing one line per kernel.
/// The buffer is dropped before returning.
///
/// # Errors
/// Fails with [`HarnessError::OutOfMemory`](crate::HarnessError::OutOfMemory) before any
/// kernel runs if the buffer cannot be allocated.
pub fn run_shootout_suite<W: Write>(
    config: &BenchConfig,
    strategy: Strategy,
    out: &mut W,
) -> Result<Vec<ShootoutResult>> {
    config.validate()?;
    let buffer = InputBuffer::allocate(config.buffer_words, config.seed)?;

    writeln!(out, "---- shoot-out ----")?;

    let mut results = Vec::with_capacity(4);
    let mut report = |result: ShootoutResult| -> Result<()> {
        writeln!(out, "{}", result)?;
        out.flush()?;
        results.push(result);
        Ok(())
    };

    match strategy {
        Strategy::Hardware => report(bench_shootout(
            "builtin",
            |bytes: &[u8]| count_words_u64(bytes, HardwareCount::popcount_u64),
            &buffer,
        ))?,
        Strategy::Software => report(bench_shootout(
            "builtin",
            |bytes: &[u8]| count_words_u64(bytes, SoftwareCount::popcount_u64),
            &buffer,
        ))?,
    }
    report(bench_shootout("parallel", shootout_parallel, &buffer))?;
    report(bench_shootout("lookup", shootout_lookup, &buffer))?;
    report(bench_shootout("redis", shootout_redis, &buffer))?;

    drop(buffer);
    Ok(results)
}

/// Run the whole suite: the header, the register-only test and the shoot-out.
pub fn run<W: Write>(config: &BenchConfig, strategy: Strategy, out: &mut W) -> Result<()> {
    config.validate()?;
    log::info!("running benchmark suite with {} popcount", strategy);

    write_header(config, out)?;
    run_register_suite(config, strategy, out)?;
    writeln!(out)?;
    run_shootout_suite(config, strategy, out)?;
    Ok(())
}

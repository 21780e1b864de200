use log::{info, warn};
use outcome::{block_on_settled, settle, settled, testing::MockDelay, Outcome, Unit};
use std::{num::ParseIntError, time::Duration};

const DEFAULT_DELAY_MS: u64 = 50;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let delay = delay_from_env();

    let fetched = block_on_settled(MockDelay::resolve(21).after(delay).run());
    info!("fetched: {}", fetched);

    let doubled = fetched.map(|x| x * 2);
    info!("doubled: {}", doubled);

    let failed = block_on_settled(
        MockDelay::resolve(0)
            .after(delay)
            .fail_with("upstream unavailable")
            .run(),
    );
    info!("failed: {}", failed);

    let recovered: Outcome<i32, anyhow::Error> = failed.or_else(|e| {
        warn!("recovering from failure: {}", e);
        Outcome::success(-1)
    });
    info!("recovered: {}", recovered);

    let written: Outcome<Unit, anyhow::Error> =
        block_on_settled(MockDelay::resolve(()).after(delay).run()).map(Unit::from);
    info!("written: {}", written);

    let port = parse_port("8080").context("parsing demo port")?;
    info!("demo port: {}", port);

    Ok(())
}

#[settled]
fn parse_port(raw: &str) -> Result<u16, ParseIntError> {
    let port = raw.trim().parse::<u16>()?;
    Ok(port)
}

fn delay_from_env() -> Duration {
    let ms = match std::env::var("OUTCOME_DELAY_MS") {
        Ok(raw) => settle(raw.parse::<u64>()).unwrap_or_else(|e| {
            warn!(
                "invalid OUTCOME_DELAY_MS {:?}: {}, using {}ms",
                raw, e, DEFAULT_DELAY_MS
            );
            DEFAULT_DELAY_MS
        }),
        Err(_) => DEFAULT_DELAY_MS,
    };

    Duration::from_millis(ms)
}

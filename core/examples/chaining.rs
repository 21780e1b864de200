use log::info;
use outcome_core::{settle_with, Outcome};

fn checked_div(a: i32, b: i32) -> Outcome<i32, String> {
    if b == 0 {
        Outcome::failure(format!("cannot divide {} by zero", a))
    } else {
        Outcome::success(a / b)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let parsed = settle_with(|| "84".parse::<i32>()).map_failure(|e| e.to_string());
    let halved = parsed.and_then(|x| checked_div(x, 2));
    info!("halved: {}", halved);

    let broken = halved.and_then(|x| checked_div(x, 0));
    info!("broken: {}", broken);

    let recovered = broken.or_else(|e| {
        info!("falling back after: {}", e);
        checked_div(42, 1)
    });
    info!("recovered: {}", recovered.unwrap_or(0));

    Ok(())
}

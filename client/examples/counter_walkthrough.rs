use client::{
    e2e_helpers::{
        test_accounts,
        E2e,
    },
    logs::{
        log_divider,
        log_info,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let e2e = E2e::new_counter(None, test_accounts::counter_1().insecure_clone()).await?;
    log_info("Counter", e2e.counter_address());
    log_divider();

    e2e.send_init().await?;
    e2e.send_double().await?;
    e2e.send_half().await?;
    e2e.send_add(5).await?;
    e2e.send_subtract(3).await?;

    log_divider();
    log_info("Final count", e2e.view_count()?);

    Ok(())
}

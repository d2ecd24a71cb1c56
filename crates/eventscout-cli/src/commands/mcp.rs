use anyhow::{Context, Result};

use super::StoreArgs;

pub fn run(store: &StoreArgs) -> Result<()> {
    let settings = store.settings()?;

    let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
    rt.block_on(async {
        eventscout_mcp::run_stdio(settings.store)
            .await
            .map_err(|e| anyhow::anyhow!("MCP server error: {e}"))
    })
}

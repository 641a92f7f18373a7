use crate::protocol::export_client_responses;
use anyhow::Context;
use anyhow::Result;
use std::fs;
use std::path::Path;
use ts_rs::TS;

const HEADER: &str = "// GENERATED CODE! DO NOT MODIFY BY HAND!\n\n";

/// Export the TypeScript bindings the webview consumes.
pub fn generate_ts(out_dir: &Path) -> Result<()> {
    <crate::RequestId as TS>::export_all_to(out_dir)?;
    <crate::JSONRPCErrorError as TS>::export_all_to(out_dir)?;
    <crate::ClientRequest as TS>::export_all_to(out_dir)?;
    export_client_responses(out_dir)?;
    prepend_header(out_dir)?;
    Ok(())
}

fn prepend_header(out_dir: &Path) -> Result<()> {
    for entry in
        fs::read_dir(out_dir).with_context(|| format!("reading {}", out_dir.display()))?
    {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("ts") {
            let contents = fs::read_to_string(&path)?;
            fs::write(&path, format!("{HEADER}{contents}"))?;
        }
    }
    Ok(())
}

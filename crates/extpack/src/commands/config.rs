//! Config command

use anyhow::{Context, Result};
use extpack_extensions::StaticProductLookup;

use crate::cli::ConfigArgs;
use crate::output;

pub fn run(args: ConfigArgs) -> Result<()> {
    let mut ctx = super::context_for(&args.extension);
    if let Some(script) = args.script {
        ctx = ctx.with_script_path(script);
    }

    let handler = args
        .extension
        .extension_type
        .handler(Box::new(StaticProductLookup::new()));

    let config = handler
        .config(&ctx)
        .with_context(|| format!("Failed to build {} config", handler.identifier()))?;

    let json = if args.compact {
        serde_json::to_string(&config)?
    } else {
        serde_json::to_string_pretty(&config)?
    };
    println!("{}", json);

    output::success(&format!(
        "Assembled {} config ({} keys)",
        args.extension.extension_type,
        config.len()
    ));

    Ok(())
}

//! Localization command

use anyhow::{Context, Result};
use extpack_extensions::build_localization;

use crate::cli::LocalizationArgs;
use crate::output;

pub fn run(args: LocalizationArgs) -> Result<()> {
    let localization = build_localization(args.root.as_std_path())
        .with_context(|| format!("Invalid localization in {}", args.root))?;

    let Some(localization) = localization else {
        output::info("No locale files found; localization is optional");
        return Ok(());
    };

    println!("{}", serde_json::to_string_pretty(&localization)?);

    output::kv("Default locale", &localization.default_locale);
    output::kv(
        "Locales",
        &localization
            .files
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .join(", "),
    );

    Ok(())
}

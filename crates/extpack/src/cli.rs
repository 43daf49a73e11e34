//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use extpack_extensions::ExtensionType;

/// extpack - assemble extension config and localization
#[derive(Parser, Debug)]
#[command(name = "extpack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the assembled extension config as JSON
    Config(ConfigArgs),

    /// Print the localization block as JSON
    Localization(LocalizationArgs),

    /// Print the storefront path an extension preview opens
    ResourceUrl(ResourceUrlArgs),
}

/// Options shared by commands operating on an extension project
#[derive(Args, Debug)]
pub struct ExtensionArgs {
    /// Extension project root
    #[arg(short, long, env = "EXTPACK_ROOT", default_value = ".")]
    pub root: Utf8PathBuf,

    /// Extension type
    #[arg(short = 't', long = "type", default_value = "checkout-ui")]
    pub extension_type: ExtensionType,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub extension: ExtensionArgs,

    /// Built renderer bundle (defaults to <root>/build/main.js)
    #[arg(short, long)]
    pub script: Option<Utf8PathBuf>,

    /// Output compact JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug)]
pub struct LocalizationArgs {
    /// Extension project root
    #[arg(short, long, env = "EXTPACK_ROOT", default_value = ".")]
    pub root: Utf8PathBuf,
}

#[derive(Args, Debug)]
pub struct ResourceUrlArgs {
    #[command(flatten)]
    pub extension: ExtensionArgs,

    /// Shop domain to preview against
    #[arg(long)]
    pub shop: String,

    /// JSON file mapping shop domains to preview products
    #[arg(short, long, env = "EXTPACK_PRODUCTS")]
    pub products: Option<Utf8PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_defaults() {
        let cli = Cli::try_parse_from(["extpack", "config"]).unwrap();
        match cli.command {
            Commands::Config(args) => {
                assert_eq!(args.extension.root, Utf8PathBuf::from("."));
                assert_eq!(args.extension.extension_type, ExtensionType::CheckoutUi);
                assert!(args.script.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_resource_url() {
        let cli = Cli::try_parse_from([
            "extpack",
            "-v",
            "resource-url",
            "--shop",
            "demo.myshopify.com",
            "--type",
            "default",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::ResourceUrl(args) => {
                assert_eq!(args.shop, "demo.myshopify.com");
                assert_eq!(args.extension.extension_type, ExtensionType::Default);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_type() {
        assert!(Cli::try_parse_from(["extpack", "config", "--type", "theme"]).is_err());
    }
}

//! Resource URL command

use anyhow::Result;

use crate::cli::ResourceUrlArgs;
use crate::output;

pub fn run(args: ResourceUrlArgs) -> Result<()> {
    let ctx = super::context_for(&args.extension);
    let products = super::load_products(args.products.as_deref())?;
    let handler = args.extension.extension_type.handler(products);

    if !handler.supplies_resource_url() {
        output::warning(&format!(
            "{} extensions do not supply a resource URL",
            args.extension.extension_type
        ));
        return Ok(());
    }

    match handler.build_resource_url(&ctx, &args.shop)? {
        Some(url) => println!("{}", url),
        None => output::warning(&format!("No product found for {}", args.shop)),
    }

    Ok(())
}

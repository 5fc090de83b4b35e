use anyhow::Result;
use clap::Args;
use focsit_content::ContentClient;

#[derive(Args)]
pub struct AssetSubCommand {
    /// Stored asset path, e.g. uploads/a.jpg. Omit to get the placeholder image
    path: Option<String>,
}

pub fn asset(client: &ContentClient, sub_command_args: &AssetSubCommand) -> Result<()> {
    println!("{}", client.asset_url(sub_command_args.path.as_deref()));
    Ok(())
}

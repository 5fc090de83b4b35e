use anyhow::Result;
use focsit_content::ContentClient;

pub fn base_url(client: &ContentClient) -> Result<()> {
    println!("{}", client.base_url());
    Ok(())
}

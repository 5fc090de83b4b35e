use anyhow::Result;
use focsit_content::ContentClient;
use serde::Serialize;

use super::print_json;

// Unreachable backend and zero records look the same here, as on the website
const EMPTY_STATE: &str = "No records found.";

fn print_collection<T: Serialize>(records: Option<Vec<T>>) -> Result<()> {
    match records {
        Some(records) if !records.is_empty() => print_json(&records),
        _ => {
            println!("{EMPTY_STATE}");
            Ok(())
        }
    }
}

pub async fn projects(client: &ContentClient) -> Result<()> {
    print_collection(client.get_projects().await)
}

pub async fn events(client: &ContentClient) -> Result<()> {
    print_collection(client.get_events().await)
}

pub async fn vacancies(client: &ContentClient) -> Result<()> {
    print_collection(client.get_vacancies().await)
}

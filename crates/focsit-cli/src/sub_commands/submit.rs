use anyhow::Result;
use clap::Args;
use focsit_content::{ContactMessage, ContentClient, JobApplication, PartnershipLead};

use super::print_json;

const DEFAULT_ENQUIRY_TYPE: &str = "Business Inquiry";

#[derive(Args)]
pub struct ContactSubCommand {
    /// Your name
    #[arg(long)]
    name: String,
    /// Your email
    #[arg(long)]
    email: String,
    /// Enquiry type
    #[arg(long = "type")]
    kind: Option<String>,
    /// Service you are interested in, prefills the type and message
    #[arg(long)]
    service: Option<String>,
    /// Message
    #[arg(long, required_unless_present = "service")]
    message: Option<String>,
}

impl ContactSubCommand {
    fn to_message(&self) -> ContactMessage {
        let kind = self
            .kind
            .clone()
            .or_else(|| self.service.clone())
            .unwrap_or_else(|| DEFAULT_ENQUIRY_TYPE.to_string());

        let message = match (&self.message, &self.service) {
            (Some(message), _) => message.clone(),
            (None, Some(service)) => {
                format!("I am interested in {service}. Please tell me more.")
            }
            (None, None) => String::new(),
        };

        ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            kind,
            message,
        }
    }
}

pub async fn contact(client: &ContentClient, sub_command_args: &ContactSubCommand) -> Result<()> {
    let ack = client.submit_contact(&sub_command_args.to_message()).await?;
    print_json(&ack)
}

#[derive(Args)]
pub struct ApplySubCommand {
    /// Your name
    #[arg(long)]
    name: String,
    /// Your email
    #[arg(long)]
    email: String,
    /// Link to resume or LinkedIn profile
    #[arg(long)]
    resume_link: String,
    /// Cover letter
    #[arg(long, default_value = "")]
    cover_letter: String,
    /// Role applied for
    #[arg(long)]
    job_role: String,
}

pub async fn apply(client: &ContentClient, sub_command_args: &ApplySubCommand) -> Result<()> {
    let application = JobApplication {
        name: sub_command_args.name.clone(),
        email: sub_command_args.email.clone(),
        resume_link: sub_command_args.resume_link.clone(),
        cover_letter: sub_command_args.cover_letter.clone(),
        job_role: sub_command_args.job_role.clone(),
    };

    let ack = client.submit_application(&application).await?;
    print_json(&ack)
}

#[derive(Args)]
pub struct PartnershipSubCommand {
    /// College name
    #[arg(long)]
    college_name: String,
    /// Contact email
    #[arg(long)]
    email: String,
    /// Contact phone
    #[arg(long)]
    phone: String,
}

pub async fn partnership(
    client: &ContentClient,
    sub_command_args: &PartnershipSubCommand,
) -> Result<()> {
    let lead = PartnershipLead {
        college_name: sub_command_args.college_name.clone(),
        email: sub_command_args.email.clone(),
        phone: sub_command_args.phone.clone(),
    };

    let ack = client.submit_partnership(&lead).await?;
    print_json(&ack)
}

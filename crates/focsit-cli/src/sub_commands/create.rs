use anyhow::Result;
use clap::Args;
use focsit_content::{split_list, ContentClient, Event, Project, Vacancy};

use super::print_json;

#[derive(Args)]
pub struct CreateProjectSubCommand {
    /// Project title
    #[arg(long)]
    title: String,
    /// Student name
    #[arg(long)]
    student_name: String,
    /// College name
    #[arg(long)]
    college: String,
    /// Year, e.g. "3rd Year"
    #[arg(long)]
    year: String,
    /// Duration, e.g. "3 Months"
    #[arg(long)]
    duration: String,
    /// Tech stack (comma separated)
    #[arg(long)]
    tech_stack: String,
    /// Thumbnail image URL or path
    #[arg(long)]
    thumbnail: String,
    /// Screenshot URLs (comma separated)
    #[arg(long, default_value = "")]
    screenshots: String,
    /// Short description for the card view
    #[arg(long)]
    description: String,
    /// Full description for the detail view
    #[arg(long)]
    full_description: String,
    /// Live demo link
    #[arg(long)]
    live_link: Option<String>,
    /// Repository link
    #[arg(long)]
    repo_link: Option<String>,
}

pub async fn create_project(
    client: &ContentClient,
    sub_command_args: &CreateProjectSubCommand,
) -> Result<()> {
    let project = Project {
        title: sub_command_args.title.clone(),
        student_name: sub_command_args.student_name.clone(),
        college: sub_command_args.college.clone(),
        year: sub_command_args.year.clone(),
        description: sub_command_args.description.clone(),
        full_description: sub_command_args.full_description.clone(),
        duration: sub_command_args.duration.clone(),
        tech_stack: split_list(&sub_command_args.tech_stack),
        thumbnail: sub_command_args.thumbnail.clone(),
        screenshots: split_list(&sub_command_args.screenshots),
        live_link: sub_command_args.live_link.clone(),
        repo_link: sub_command_args.repo_link.clone(),
        ..Default::default()
    };

    let ack = client.create_project(&project).await?;
    println!("Project uploaded successfully!");
    print_json(&ack)
}

#[derive(Args)]
pub struct CreateEventSubCommand {
    /// Event title
    #[arg(long)]
    title: String,
    /// Category, e.g. Workshop
    #[arg(long)]
    category: String,
    /// Date
    #[arg(long)]
    date: String,
    /// Time
    #[arg(long)]
    time: String,
    /// Venue
    #[arg(long)]
    venue: String,
    /// Organizer
    #[arg(long)]
    organizer: String,
    /// Main image URL or path
    #[arg(long)]
    main_image: String,
    /// Gallery URLs (comma separated)
    #[arg(long, default_value = "")]
    gallery: String,
    /// Short description
    #[arg(long)]
    short_desc: String,
    /// Full description
    #[arg(long)]
    full_desc: String,
}

pub async fn create_event(
    client: &ContentClient,
    sub_command_args: &CreateEventSubCommand,
) -> Result<()> {
    let event = Event {
        title: sub_command_args.title.clone(),
        category: sub_command_args.category.clone(),
        date: sub_command_args.date.clone(),
        time: sub_command_args.time.clone(),
        venue: sub_command_args.venue.clone(),
        organizer: sub_command_args.organizer.clone(),
        short_desc: sub_command_args.short_desc.clone(),
        full_desc: sub_command_args.full_desc.clone(),
        main_image: sub_command_args.main_image.clone(),
        gallery: split_list(&sub_command_args.gallery),
        ..Default::default()
    };

    let ack = client.create_event(&event).await?;
    println!("Event uploaded successfully!");
    print_json(&ack)
}

#[derive(Args)]
pub struct CreateVacancySubCommand {
    /// Job title
    #[arg(long)]
    title: String,
    /// Location, e.g. Remote
    #[arg(long)]
    location: String,
    /// Job type, e.g. Full-time
    #[arg(long = "type")]
    kind: String,
    /// Job description
    #[arg(long)]
    description: String,
    /// Requirements (comma separated)
    #[arg(long)]
    requirements: String,
}

pub async fn create_vacancy(
    client: &ContentClient,
    sub_command_args: &CreateVacancySubCommand,
) -> Result<()> {
    let vacancy = Vacancy {
        title: sub_command_args.title.clone(),
        location: sub_command_args.location.clone(),
        kind: sub_command_args.kind.clone(),
        description: sub_command_args.description.clone(),
        requirements: split_list(&sub_command_args.requirements),
        ..Default::default()
    };

    let ack = client.create_vacancy(&vacancy).await?;
    println!("Job vacancy posted successfully!");
    print_json(&ack)
}

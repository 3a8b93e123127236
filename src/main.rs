use std::collections::HashMap;

use anyhow::Context;
use chrono::Utc;
use chrono_humanize::HumanTime;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wanikani_api::filters::{AssignmentFilters, SubjectFilters};
use wanikani_api::models::Assignment;
use wanikani_api::{collect_as, Config, Resource, WaniKaniClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("invalid WANIKANI_* configuration")?;
    let client = WaniKaniClient::from_config(&config);

    let (user, summary) = tokio::try_join!(client.user_information(), client.summary())?;
    println!("Welcome, {}! You're on level {}.", user.data.username, user.data.level);
    info!(
        lessons = summary.data.lessons.subject_ids.len(),
        next_reviews_at = ?summary.data.next_reviews_at,
        "loaded summary"
    );

    let filters = AssignmentFilters {
        available_before: Some(Utc::now()),
        hidden: Some(false),
        ..Default::default()
    };
    let pending: Vec<Resource<Assignment>> =
        collect_as(client.assignments(&filters, config.max_results).await?).await?;

    println!("You have {} reviews waiting:", pending.len());
    if pending.is_empty() {
        return Ok(());
    }

    let filters = SubjectFilters {
        ids: Some(pending.iter().map(|a| a.data.subject_id).collect()),
        ..Default::default()
    };
    let mut subjects = client.subjects(&filters, None).await?;
    let mut labels = HashMap::new();
    while let Some(subject) = subjects.next().await {
        let subject = subject?;
        if let (Some(id), Some(common)) = (subject.id(), subject.subject()) {
            let label = common
                .characters
                .clone()
                .unwrap_or_else(|| common.accepted_meanings().join(", "));
            labels.insert(id, label);
        }
    }
    info!(n = labels.len(), "loaded subjects");

    for assignment in &pending {
        let label = labels
            .get(&assignment.data.subject_id)
            .map(String::as_str)
            .unwrap_or("?");
        let available = assignment
            .data
            .available_at
            .map(|at| HumanTime::from(at).to_string())
            .unwrap_or_else(|| "not scheduled".to_string());
        println!("{label} ({available})");
    }

    Ok(())
}

use crate::infra::load_store;
use clap::{ArgGroup, Args};
use csn_profile::error::AppError;
use csn_profile::profile::{
    CompletionEngine, CompletionResult, ProfileAggregate, ProfileCompletionService, UserId,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["user", "aggregate"])))]
pub(crate) struct ScoreArgs {
    /// Score a stored user by identifier
    #[arg(long)]
    pub(crate) user: Option<String>,
    /// Score a profile aggregate JSON document instead of a stored user
    #[arg(long)]
    pub(crate) aggregate: Option<PathBuf>,
    /// Profile seed JSON to load instead of the bundled demo users
    #[arg(long, requires = "user")]
    pub(crate) seed: Option<PathBuf>,
    /// Print the raw completion result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        user,
        aggregate,
        seed,
        json,
    } = args;

    let engine = Arc::new(CompletionEngine::standard());

    // clap guarantees exactly one of --user / --aggregate.
    let (subject, result) = if let Some(path) = aggregate {
        let profile = read_aggregate(&path)?;
        (path.display().to_string(), engine.evaluate(&profile))
    } else {
        let user_id = user.unwrap_or_default();
        let store = Arc::new(load_store(seed.as_deref())?);
        let service = ProfileCompletionService::new(store, engine);
        let result = service.compute_completion(&UserId(user_id.clone()))?;
        (user_id, result)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_result(&subject, &result);
    }

    Ok(())
}

fn read_aggregate(path: &std::path::Path) -> Result<ProfileAggregate, AppError> {
    let file = std::fs::File::open(path)?;
    let profile = serde_json::from_reader(std::io::BufReader::new(file))?;
    Ok(profile)
}

pub(crate) fn render_result(subject: &str, result: &CompletionResult) {
    println!("Profile completion for {}", subject);
    println!(
        "Score: {}% ({}/{} points)",
        result.completion_percentage, result.earned_points, result.total_points
    );

    if result.completed.is_empty() {
        println!("\nCompleted: none");
    } else {
        println!("\nCompleted");
        for key in &result.completed {
            println!("- {}", key);
        }
    }

    if result.missing.is_empty() {
        println!("\nMissing: none");
    } else {
        println!("\nMissing");
        for item in &result.missing {
            match &item.route {
                Some(route) => println!("- {} (+{} pts) -> {}", item.label, item.points, route),
                None => println!("- {} (+{} pts)", item.label, item.points),
            }
        }
    }

    if !result.suggestions.is_empty() {
        println!("\nNext steps");
        for suggestion in &result.suggestions {
            println!("- {}", suggestion);
        }
    }
}

pub(crate) fn print_checklist() {
    let engine = CompletionEngine::standard();
    let rules = engine.rules();
    println!("Completion checklist ({} points)", rules.total_points());
    for rule in rules.rules() {
        println!(
            "- {:<16} {:<20} {:>3} pts  {}",
            rule.key,
            rule.label,
            rule.points,
            rule.route.unwrap_or("-")
        );
    }
}

use crate::infra::{answer_map, parse_answer, Pathfinder};
use clap::Args;
use pathfinder::advisor::AdvisorOutcome;
use pathfinder::careers::{select_recommendations, CareerDescriptor};
use pathfinder::config::AppConfig;
use pathfinder::error::AppError;
use pathfinder::questionnaire::{analyze_answers, AnswerMap, PersonalityProfile, TraitCategory};
use serde_json::json;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Answer as QUESTION=OPTION (repeatable), e.g. --answer 1=1a
    #[arg(long = "answer", value_parser = parse_answer)]
    pub(crate) answers: Vec<(u32, String)>,
    /// Maximum catalog recommendations to list (defaults to PATHFINDER_MAX_RECOMMENDATIONS)
    #[arg(long)]
    pub(crate) max_results: Option<usize>,
    /// Emit the profile and recommendations as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Also consult the configured AI advisor (falls back to curated careers without a key)
    #[arg(long)]
    pub(crate) ai: bool,
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let pathfinder = Pathfinder::from_config(&config)?;

    for question in pathfinder.questions.questions() {
        println!("{}. {}", question.id, question.text);
        for option in &question.options {
            let trait_label = option
                .trait_category
                .map(TraitCategory::label)
                .unwrap_or("Untyped");
            println!("   [{}] {} ({})", option.id, option.text, trait_label);
        }
    }

    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        max_results,
        json,
    } = args;

    let config = AppConfig::load()?;
    let pathfinder = Pathfinder::from_config(&config)?;
    let max_results = match max_results {
        Some(0) => {
            return Err(AppError::InvalidRequest(
                "--max-results must be at least 1".to_string(),
            ));
        }
        Some(max) => max,
        None => pathfinder.max_results,
    };

    let answers = answer_map(answers);
    let profile = analyze_answers(&answers, pathfinder.questions.questions());
    let recommendations = select_recommendations(&profile, &pathfinder.catalog, max_results);

    if json {
        let payload = json!({
            "profile": profile,
            "recommendations": recommendations,
        });
        let rendered = serde_json::to_string_pretty(&payload)?;
        println!("{rendered}");
        return Ok(());
    }

    render_profile(&profile);
    render_recommendations(&recommendations);
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let pathfinder = Pathfinder::from_config(&config)?;

    println!("Pathfinder career discovery demo");
    let answers = sample_answers();
    println!(
        "- Sample participant answered {} of {} questions",
        answers.len(),
        pathfinder.questions.len()
    );

    let profile = analyze_answers(&answers, pathfinder.questions.questions());
    render_profile(&profile);

    let recommendations =
        select_recommendations(&profile, &pathfinder.catalog, pathfinder.max_results);
    render_recommendations(&recommendations);

    if !args.ai {
        return Ok(());
    }

    println!("\nAI advisor consultation");
    let outcome = pathfinder.advisor.recommend(&answers).await;
    render_outcome(&outcome);
    Ok(())
}

fn sample_answers() -> AnswerMap {
    [
        (1, "1a"),
        (2, "2a"),
        (3, "3a"),
        (4, "4e"),
        (5, "5a"),
        (6, "6e"),
        (7, "7a"),
        (8, "8a"),
        (9, "9e"),
    ]
    .into_iter()
    .map(|(question, option)| (question, option.to_string()))
    .collect()
}

fn render_profile(profile: &PersonalityProfile) {
    println!(
        "\nPersonality profile: {} / {}",
        profile.dominant_type.label(),
        profile.secondary_type.label()
    );
    println!("{}", profile.description);
    for category in TraitCategory::ordered() {
        let percentage = profile.percentage(category);
        println!(
            "  {:<12} {:<20} {:>3}%",
            category.label(),
            "#".repeat(usize::from(percentage / 5)),
            percentage
        );
    }
}

fn render_recommendations(recommendations: &[CareerDescriptor]) {
    if recommendations.is_empty() {
        println!("\nNo career recommendations matched this profile.");
        return;
    }

    println!("\nRecommended careers:");
    for (index, career) in recommendations.iter().enumerate() {
        println!("{}. {}", index + 1, career.title);
        println!("   {}", career.description);
        println!("   Skills: {}", career.skills.join(", "));
        println!("   Education: {}", career.education.join(" | "));
        if let Some(salary) = &career.salary_range {
            println!("   Salary: {salary}");
        }
        if let Some(reason) = &career.fit_reason {
            println!("   Why: {reason}");
        }
    }
}

fn render_outcome(outcome: &AdvisorOutcome) {
    println!("- Source: {}", outcome.source.label());
    if let Some(reason) = &outcome.fallback_reason {
        println!("  Fallback reason: {reason}");
    }
    println!("  Insight: {}", outcome.response.personality_insight);

    let weights = outcome.response.field_weights();
    println!("  Top fields:");
    for field in &outcome.response.top_fields {
        let weight = weights.get(field).copied().unwrap_or(0);
        println!("    - {field} (weight {weight})");
    }

    println!("  Careers:");
    for career in &outcome.response.recommendations {
        println!("    - {}: {}", career.title, career.roles.join(", "));
        if let Some(reason) = &career.fit_reason {
            println!("      {reason}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathfinder::questionnaire::QuestionBank;

    #[test]
    fn sample_participant_is_tech_leaning() {
        let bank = QuestionBank::standard();
        let profile = analyze_answers(&sample_answers(), bank.questions());
        assert_eq!(profile.dominant_type, TraitCategory::Tech);
        assert_eq!(profile.secondary_type, TraitCategory::Creative);
    }
}

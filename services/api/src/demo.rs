use crate::infra::{load_catalog, parse_choice, parse_date};
use chrono::{Local, NaiveDate};
use clap::Args;
use edupath::catalog::Catalog;
use edupath::config::AppConfig;
use edupath::error::AppError;
use edupath::recommend::{
    BudgetLevel, ConfidenceLevel, EducationStage, Path, PrimaryFear, ProfileSubmission,
    RecommendationService, TemplateNarrator,
};
use futures::StreamExt;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Free-text description of where the student is today
    #[arg(long)]
    pub(crate) situation: Option<String>,
    /// Country the student currently lives in
    #[arg(long)]
    pub(crate) current_country: String,
    /// Restrict recommendations to a single destination country
    #[arg(long)]
    pub(crate) target_country: Option<String>,
    /// high_school, bachelors, masters, phd, bootcamp, or working
    #[arg(long, value_parser = parse_choice::<EducationStage>)]
    pub(crate) stage: EducationStage,
    /// low, medium, or high
    #[arg(long, value_parser = parse_choice::<BudgetLevel>)]
    pub(crate) budget: BudgetLevel,
    /// money, visa, failure, or time
    #[arg(long, value_parser = parse_choice::<PrimaryFear>)]
    pub(crate) fear: PrimaryFear,
    /// low, medium, or high
    #[arg(long, value_parser = parse_choice::<ConfidenceLevel>)]
    pub(crate) confidence: ConfidenceLevel,
    /// Grade point average on a 0-4 scale
    #[arg(long)]
    pub(crate) gpa: Option<f32>,
    #[arg(long)]
    pub(crate) age: Option<u8>,
    #[arg(long)]
    pub(crate) years_experience: Option<u8>,
    /// Reference date for the timeline (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Catalog JSON to load instead of the configured or builtin one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

impl RecommendArgs {
    fn submission(&self) -> ProfileSubmission {
        ProfileSubmission {
            situation: self.situation.clone(),
            current_country: Some(self.current_country.clone()),
            target_country: self.target_country.clone(),
            education_stage: Some(self.stage),
            budget: Some(self.budget),
            fear: Some(self.fear),
            confidence: Some(self.confidence),
            gpa: self.gpa,
            age: self.age,
            years_experience: self.years_experience,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reference date for the timeline (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Catalog JSON to load instead of the configured or builtin one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Skip narration of the best-fit path
    #[arg(long)]
    pub(crate) skip_narrative: bool,
}

fn build_service(
    catalog: Option<PathBuf>,
) -> Result<RecommendationService<Catalog, TemplateNarrator>, AppError> {
    let config = AppConfig::load()?;
    let path = catalog.or(config.catalog.path);
    let catalog = load_catalog(path.as_deref())?;
    Ok(RecommendationService::new(
        Arc::new(catalog),
        Arc::new(TemplateNarrator),
        config.matching,
    ))
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let submission = args.submission();
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let service = build_service(args.catalog)?;

    let recommendation = service.recommend(submission, today)?;
    println!("{}", serde_json::to_string_pretty(&recommendation)?);
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        catalog,
        skip_narrative,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let service = build_service(catalog)?;
    let submission = demo_submission();

    println!("EduPath recommendation demo ({today})");
    println!(
        "- Student from {} | stage {:?} | budget {:?} | biggest fear {:?}",
        submission.current_country.as_deref().unwrap_or("unknown"),
        submission.education_stage,
        submission.budget,
        submission.fear
    );

    let recommendation = service.recommend(submission.clone(), today)?;
    if recommendation.paths.is_empty() {
        println!("\nNo university in the catalog satisfies this profile.");
        return Ok(());
    }

    for path in &recommendation.paths {
        render_path(path);
    }

    if skip_narrative {
        return Ok(());
    }

    let Some(best) = recommendation.paths.first() else {
        return Ok(());
    };
    println!("\nWhy {}?", best.university.name);
    let mut chunks = service.narrate(submission, best)?;
    let mut stdout = std::io::stdout();
    while let Some(chunk) = chunks.next().await {
        write!(stdout, "  {chunk}")?;
    }
    stdout.flush()?;

    Ok(())
}

fn render_path(path: &Path) {
    let breakdown = &path.fit.breakdown;
    println!("\n{}: {}", path.kind.label(), path.name);
    println!("  {}", path.description);
    println!(
        "  Fit {}/100 (teaching {} | workload {} | language {} | cost {} | visa {} | support {})",
        path.fit.overall,
        breakdown.teaching,
        breakdown.workload,
        breakdown.language,
        breakdown.cost,
        breakdown.visa,
        breakdown.support
    );

    println!("  Risks:");
    for (category, entry) in path.risks.entries() {
        println!(
            "    - {category}: {:?} ({}% likely) {}",
            entry.severity, entry.likelihood, entry.description
        );
    }

    if !path.not_for_you_if.is_empty() {
        println!("  Not for you if:");
        for caveat in &path.not_for_you_if {
            println!("    - {caveat}");
        }
    }

    if !path.scholarships.is_empty() {
        println!("  Scholarships:");
        for scholarship in &path.scholarships {
            println!(
                "    - {} ({}) due {}",
                scholarship.name, scholarship.provider, scholarship.deadline
            );
        }
    }

    println!("  Timeline:");
    for milestone in &path.timeline {
        println!("    - {} {}", milestone.date, milestone.title);
    }
}

fn demo_submission() -> ProfileSubmission {
    ProfileSubmission {
        situation: Some("final year of a computer science degree".to_string()),
        current_country: Some("India".to_string()),
        target_country: None,
        education_stage: Some(EducationStage::Bachelors),
        budget: Some(BudgetLevel::Low),
        fear: Some(PrimaryFear::Money),
        confidence: Some(ConfidenceLevel::Medium),
        gpa: Some(3.4),
        age: Some(22),
        years_experience: None,
    }
}

use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use van_mitra::config::AppConfig;
use van_mitra::decision_support::DecisionSupportService;
use van_mitra::error::AppError;
use van_mitra::telemetry;
use van_mitra::workflows::claims::{
    ClaimId, ClaimRecord, ClaimStatistics, ClaimStatus, InMemoryClaimRepository, ReviewDecision,
};
use van_mitra::workflows::extraction::{ClaimField, ExtractedClaimFields, SAMPLE_FORM_A};
use van_mitra::workflows::schemes::AnalysisResult;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Village id or name
    #[arg(long)]
    pub(crate) village: String,
    /// Analysis date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Print the analysis as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ExtractArgs {
    /// Text file holding the OCR output of a claim form. Uses a sample Form A when omitted.
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Print the extracted fields as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ClaimsArgs {
    /// Only list claims in this status (pending, approved, review, rejected)
    #[arg(long)]
    pub(crate) status: Option<ClaimStatus>,
    /// Case-insensitive match on claimant, village, or patta number
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Print the claims as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

fn configured_service() -> Result<DecisionSupportService<InMemoryClaimRepository>, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(DecisionSupportService::from_config(&config.data)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let service = configured_service()?;
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let analysis = service.recommend_for(&args.village, date)?;

    if args.json {
        return print_json(&analysis);
    }
    render_analysis(&analysis);
    Ok(())
}

pub(crate) fn run_extract(args: ExtractArgs) -> Result<(), AppError> {
    let service = configured_service()?;
    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE_FORM_A.to_string(),
    };
    let extracted = service.extract(&text);

    if args.json {
        return print_json(&extracted);
    }
    render_extraction(&extracted);
    Ok(())
}

pub(crate) fn run_claims(args: ClaimsArgs) -> Result<(), AppError> {
    let service = configured_service()?;
    let claims = service.claims(args.status, args.search.as_deref())?;

    if args.json {
        return print_json(&claims);
    }
    render_claims(&claims, &ClaimStatistics::from_claims(&claims));
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let service = DecisionSupportService::standard();
    let today = Local::now().date_naive();

    println!("Van Mitra decision support demo");
    println!("\nTop scheme per village ({today})");
    for village in service.villages() {
        let analysis = service.recommend_for(&village.id.to_string(), today)?;
        match analysis.recommendations.first() {
            Some(top) => println!(
                "- {:<12} {:<8} score {:>3} | {:<8} | ~{} beneficiaries",
                village.name,
                top.scheme_code.as_str(),
                top.score,
                top.priority.label(),
                top.estimated_beneficiaries
            ),
            None => println!("- {:<12} no schemes configured", village.name),
        }
    }

    if let Some(first) = service.villages().first() {
        println!();
        render_analysis(&service.recommend_for(&first.id.to_string(), today)?);
    }

    println!("\nForm A extraction (sample text)");
    render_extraction(&service.extract(SAMPLE_FORM_A));

    let claims = service.claims(None, None)?;
    println!("\nClaim registry");
    render_claims(&claims, &service.statistics()?);

    println!("\nReview walkthrough");
    let decisions = [
        (ClaimId(1), ReviewDecision::Approve),
        (
            ClaimId(4),
            ReviewDecision::Reject {
                reason: "Boundary overlaps reserved forest".to_string(),
            },
        ),
        (ClaimId(3), ReviewDecision::RequestInformation),
    ];
    for (claim_id, decision) in decisions {
        match service.decide(claim_id, decision) {
            Ok(outcome) => println!(
                "- {} ({} -> {})",
                outcome.note, outcome.previous_status, outcome.status
            ),
            Err(err) => println!("- Claim {claim_id}: {err}"),
        }
    }

    let summary = service.map_summary()?;
    println!(
        "\nAfter review: {} approved of {} ({:.1}% approval, {:.0} of {:.0} ha approved)",
        summary.approved,
        summary.total_claims,
        summary.approval_rate_pct,
        summary.approved_area,
        summary.total_area
    );
    for village in &summary.top_villages {
        println!("  - {}: {} claims", village.village, village.claims);
    }

    Ok(())
}

fn render_analysis(analysis: &AnalysisResult) {
    let village = &analysis.village;
    println!(
        "Scheme recommendations for {} (population {}, tribal {}%, forest cover {}%)",
        village.name, village.population, village.tribal_population_pct, village.forest_cover_pct
    );
    println!(
        "Analysed {} schemes on {} | {} critical",
        analysis.total_schemes_evaluated, analysis.analysis_date, analysis.critical_count
    );

    for (rank, recommendation) in analysis.recommendations.iter().enumerate() {
        println!(
            "{}. {} - {} | score {} | {} priority | {} complexity | ~{} beneficiaries{}",
            rank + 1,
            recommendation.scheme_code,
            recommendation.scheme.full_name,
            recommendation.score,
            recommendation.priority.label(),
            recommendation.implementation_complexity.label(),
            recommendation.estimated_beneficiaries,
            if recommendation.is_active {
                " | active"
            } else {
                ""
            }
        );
        for indicator in &recommendation.matched_indicators {
            println!(
                "     {} {}% x {:.2} = {:.1}",
                indicator.indicator_name,
                indicator.village_value,
                indicator.weight,
                indicator.impact_score
            );
        }
        for line in &recommendation.reasoning {
            println!("     * {line}");
        }
    }
}

fn render_extraction(extracted: &ExtractedClaimFields) {
    if extracted.is_empty() {
        println!("No recognisable claim fields found");
        return;
    }

    for field in ClaimField::ALL {
        let Some(confidence) = extracted.confidence_for(field) else {
            continue;
        };
        let value = match field {
            ClaimField::ClaimantName => extracted.claimant_name.clone(),
            ClaimField::FatherName => extracted.father_name.clone(),
            ClaimField::Village => extracted.village.clone(),
            ClaimField::PattaNumber => extracted.patta_number.clone(),
            ClaimField::Extent => format!("{} ha", extracted.extent_hectares),
            ClaimField::Coordinates => format!(
                "{}, {}",
                extracted.coordinates.lat, extracted.coordinates.lng
            ),
            ClaimField::SurveyNumber => extracted.survey_number.clone(),
            ClaimField::DateOfOccupation => extracted.date_of_occupation.clone(),
        };
        println!("- {:<20} {:<32} ({}%)", field.label(), value, confidence);
    }

    if !extracted.documents.is_empty() {
        println!("- Documents: {}", extracted.documents.join(", "));
    }
}

fn render_claims(claims: &[ClaimRecord], statistics: &ClaimStatistics) {
    println!(
        "{} claims | {} pending | {} approved | {} review | {} rejected | {:.0} ha | avg confidence {}%",
        statistics.total_claims,
        statistics.pending,
        statistics.approved,
        statistics.review,
        statistics.rejected,
        statistics.total_hectares,
        statistics.avg_confidence
    );
    for claim in claims {
        println!(
            "- #{} {:<14} {:<12} {:<26} {:>6.0} ha  {:<8} {}%",
            claim.id,
            claim.claimant_name,
            claim.village,
            claim.patta_number,
            claim.extent_hectares,
            claim.status.label(),
            claim.confidence
        );
    }
}

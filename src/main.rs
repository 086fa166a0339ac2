use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use resume_analyzer::analysis::{AnalysisReport, IndustryReport, ResumeAnalyzer, SectionReport};
use resume_analyzer::collaborators::Sentiment;
use resume_analyzer::config::AppConfig;
use resume_analyzer::error::AppError;
use resume_analyzer::telemetry;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
    analyzer: Arc<ResumeAnalyzer>,
    max_text_bytes: usize,
}

#[derive(Parser, Debug)]
#[command(
    name = "Resume Analyzer",
    about = "Score resume text against structural and industry-specific rubrics",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Analyze an extracted plain-text resume file and print the report
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Path to a plain-text resume (PDF/DOCX extraction happens upstream)
    file: PathBuf,
    /// Industry profile to compare against (e.g. software_engineer)
    #[arg(long)]
    industry: Option<String>,
    /// Emit the raw JSON response instead of the human-readable rendering
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    text: String,
    #[serde(default)]
    industry: Option<String>,
}

/// Industry comparison either succeeds or degrades to an inline error
/// payload; the analyze request as a whole still succeeds.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum IndustryOutcome {
    Report(IndustryReport),
    Unsupported { error: String },
}

#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    #[serde(flatten)]
    report: AnalysisReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    industry_analysis: Option<IndustryOutcome>,
    sentiment: Sentiment,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Analyze(args) => run_analyze(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
        analyzer: Arc::new(ResumeAnalyzer::new()),
        max_text_bytes: config.limits.max_text_bytes,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/resume/analyze", post(analyze_endpoint))
        .layer(prometheus_layer)
        .with_state(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "resume analyzer ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        file,
        industry,
        json,
    } = args;

    let text = std::fs::read_to_string(&file)?;
    let analyzer = ResumeAnalyzer::new();
    let response = build_response(&analyzer, &text, industry.as_deref());

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&response).unwrap_or_else(|err| {
                format!("{{\"error\": \"failed to serialize report: {err}\"}}")
            })
        );
    } else {
        render_analysis_report(&response);
    }

    Ok(())
}

fn build_response(
    analyzer: &ResumeAnalyzer,
    text: &str,
    industry: Option<&str>,
) -> AnalyzeResponse {
    let report = analyzer.analyze(text);

    let industry_analysis = industry.map(|key| match analyzer.analyze_for_industry(text, key) {
        Ok(report) => IndustryOutcome::Report(report),
        Err(err) => IndustryOutcome::Unsupported {
            error: err.to_string(),
        },
    });

    AnalyzeResponse {
        report,
        industry_analysis,
        sentiment: analyzer.sentiment(text),
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn analyze_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let AnalyzeRequest { text, industry } = payload;

    if text.len() > state.max_text_bytes {
        return Err(AppError::TextTooLarge {
            limit: state.max_text_bytes,
        });
    }

    let response = build_response(&state.analyzer, &text, industry.as_deref());
    Ok(Json(response))
}

fn render_analysis_report(response: &AnalyzeResponse) {
    let report = &response.report;

    println!("Resume analysis");
    println!(
        "Overall score: {}/100 ({} words)",
        report.overall_score, report.word_count
    );

    println!("\nSections");
    for (name, section) in [
        ("education", &report.sections.education),
        ("experience", &report.sections.experience),
        ("skills", &report.sections.skills),
        ("projects", &report.sections.projects),
    ] {
        render_section(name, section);
    }

    if report.strengths.is_empty() {
        println!("\nStrengths: none detected");
    } else {
        println!("\nStrengths");
        for strength in &report.strengths {
            println!("- {strength}");
        }
    }

    if report.suggestions.is_empty() {
        println!("\nSuggestions: none");
    } else {
        println!("\nSuggestions");
        for suggestion in &report.suggestions {
            println!("- {suggestion}");
        }
    }

    match &response.industry_analysis {
        Some(IndustryOutcome::Report(industry)) => render_industry_report(industry),
        Some(IndustryOutcome::Unsupported { error }) => {
            println!("\nIndustry analysis unavailable: {error}");
        }
        None => {}
    }

    println!(
        "\nSentiment: polarity {:.2}, subjectivity {:.2}",
        response.sentiment.polarity, response.sentiment.subjectivity
    );
}

fn render_section(name: &str, section: &SectionReport) {
    if section.exists {
        println!("- {}: {}/100", name, section.score);
    } else {
        println!("- {}: missing", name);
    }
    for line in &section.feedback {
        println!("    {line}");
    }
}

fn render_industry_report(industry: &IndustryReport) {
    println!(
        "\nIndustry fit ({}): {}/100",
        industry.industry, industry.overall_score
    );
    println!(
        "- skills {}/100: {} found, {} key skills missing",
        industry.skills_analysis.score,
        industry.skills_analysis.found_skills.len(),
        industry.skills_analysis.missing_important_skills.len()
    );
    println!(
        "- sections {}/100: {} found, {} missing",
        industry.sections_analysis.score,
        industry.sections_analysis.found_sections.len(),
        industry.sections_analysis.missing_sections.len()
    );
    println!(
        "- action verbs {}/100: {} found",
        industry.verbs_analysis.score,
        industry.verbs_analysis.found_verbs.len()
    );
    println!(
        "- achievements {}/100: {} phrases found",
        industry.achievements_analysis.score,
        industry.achievements_analysis.achievement_phrases_found.len()
    );
    for suggestion in &industry.suggestions {
        println!("- {suggestion}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_analyzer::config::LimitsConfig;
    use std::sync::OnceLock;

    // pair() installs the global metrics recorder, which can only happen
    // once per process.
    fn metrics_handle() -> PrometheusHandle {
        static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
        HANDLE
            .get_or_init(|| PrometheusMetricLayer::pair().1)
            .clone()
    }

    fn test_state() -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: metrics_handle(),
            analyzer: Arc::new(ResumeAnalyzer::new()),
            max_text_bytes: LimitsConfig::DEFAULT_MAX_TEXT_BYTES,
        }
    }

    #[tokio::test]
    async fn analyze_endpoint_returns_full_report() {
        let request = AnalyzeRequest {
            text: "EDUCATION\nBachelor of Science, MIT, 2020, GPA 3.9\n".to_string(),
            industry: None,
        };

        let Json(body) = analyze_endpoint(State(test_state()), Json(request))
            .await
            .expect("analysis succeeds");

        assert!(body.report.sections.education.exists);
        assert!(body.report.sections.education.score >= 80);
        assert!(body.industry_analysis.is_none());
    }

    #[tokio::test]
    async fn unknown_industry_degrades_to_error_payload() {
        let request = AnalyzeRequest {
            text: "SKILLS\nPython".to_string(),
            industry: Some("unknown_field".to_string()),
        };

        let Json(body) = analyze_endpoint(State(test_state()), Json(request))
            .await
            .expect("analysis still succeeds");

        match body.industry_analysis {
            Some(IndustryOutcome::Unsupported { error }) => {
                assert_eq!(error, "Industry 'unknown_field' not supported");
            }
            other => panic!("expected inline error payload, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn oversized_text_is_rejected_before_analysis() {
        let mut state = test_state();
        state.max_text_bytes = 16;
        let request = AnalyzeRequest {
            text: "a resume far beyond sixteen bytes".to_string(),
            industry: None,
        };

        let err = analyze_endpoint(State(state), Json(request))
            .await
            .expect_err("oversized text rejected");
        assert!(matches!(err, AppError::TextTooLarge { limit: 16 }));
    }

    #[tokio::test]
    async fn known_industry_is_attached_to_the_response() {
        let request = AnalyzeRequest {
            text: "TECHNICAL SKILLS\nPython, SQL, Docker\nPROJECTS\nDeployed a service"
                .to_string(),
            industry: Some("software_engineer".to_string()),
        };

        let Json(body) = analyze_endpoint(State(test_state()), Json(request))
            .await
            .expect("analysis succeeds");

        match body.industry_analysis {
            Some(IndustryOutcome::Report(report)) => {
                assert_eq!(report.industry, "software_engineer");
                assert!(report
                    .skills_analysis
                    .found_skills
                    .contains(&"python".to_string()));
            }
            other => panic!("expected industry report, got {other:?}"),
        }
    }
}

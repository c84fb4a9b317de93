use anyhow::Result;
use clap::Parser;
use migra_assist::ai::GeminiAssessmentClient;
use migra_assist::form::FormController;
use migra_assist::models::{Config, EligibilityInput};
use migra_assist::presenter::{AssessmentPresenter, AssessmentView, UiPhase};
use std::sync::{Arc, Mutex};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "migra-assist")]
#[command(about = "Evaluador preliminar de elegibilidad de visa")]
struct CliArgs {
    /// Nacionalidad del solicitante.
    #[arg(long)]
    nationality: String,

    /// Nivel educativo más alto.
    #[arg(long)]
    education: String,

    /// Años de experiencia laboral.
    #[arg(long)]
    experience: String,

    /// País deseado para migrar.
    #[arg(long)]
    desired_country: String,

    /// Objetivo (trabajo, estudio, residencia, ...).
    #[arg(long)]
    goal: String,
}

/// Terminal rendition of the page's result panel.
struct ConsoleView;

impl AssessmentView for ConsoleView {
    fn set_loading_visible(&mut self, visible: bool) {
        if visible {
            println!("Evaluando elegibilidad...");
        }
    }

    fn set_results_visible(&mut self, _visible: bool) {}

    fn set_error_flavor(&mut self, _error: bool) {}

    fn set_assessment_text(&mut self, text: &str) {
        println!("\n{}", text);
    }

    fn replace_pathways(&mut self, pathways: &[String]) {
        for pathway in pathways {
            println!("  - {}", pathway);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "migra_assist=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Requesting assessment from model {}",
        config.eligibility_model
    );

    let service = Arc::new(GeminiAssessmentClient::new(
        config.gemini_api_key,
        config.eligibility_model,
    ));
    let presenter = Arc::new(Mutex::new(AssessmentPresenter::new(Box::new(ConsoleView))));
    let controller = FormController::new(service, presenter.clone());

    controller
        .submit(EligibilityInput {
            nationality: args.nationality,
            education: args.education,
            experience: args.experience,
            desired_country: args.desired_country,
            goal: args.goal,
        })
        .await;

    let phase = presenter.lock().unwrap().phase();
    if phase != UiPhase::ResultShown {
        error!("Assessment did not complete successfully");
        std::process::exit(1);
    }

    Ok(())
}

use vibe_filter::domain::candidate::read_candidates;
use vibe_filter::export;
use vibe_filter::models::config::Settings;
use vibe_filter::processing::evaluate::{CandidateEvaluator, evaluate_store};
use vibe_filter::repository::InMemoryRepository;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Failed to load settings: {e}");
            std::process::exit(1);
        }
    };

    let candidates = match read_candidates(&settings.candidates_path) {
        Ok(candidates) => candidates,
        Err(e) => {
            log::error!(
                "Failed to load candidates from {}: {e}",
                settings.candidates_path.display()
            );
            std::process::exit(1);
        }
    };
    let repo = InMemoryRepository::new(candidates);

    let evaluator = match CandidateEvaluator::from_settings(&settings) {
        Ok(evaluator) => evaluator,
        Err(e) => {
            log::error!("Failed to build evaluator: {e}");
            std::process::exit(1);
        }
    };

    let results = match evaluate_store(&repo, &evaluator, &settings.keywords).await {
        Ok(results) => results,
        Err(e) => {
            log::error!("Failed to evaluate candidates: {e}");
            std::process::exit(1);
        }
    };

    match export::to_json(&results, settings.score_precision) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to render results: {e}"),
    }

    if let Some(path) = &settings.csv_output {
        match export::write_csv(path, &results, settings.score_precision) {
            Ok(()) => log::info!("Wrote {}", path.display()),
            Err(e) => {
                log::error!("Failed to write {}: {e}", path.display());
                std::process::exit(1);
            }
        }
    }

    if let Some(path) = &settings.json_output {
        match export::write_json(path, &results, settings.score_precision) {
            Ok(()) => log::info!("Wrote {}", path.display()),
            Err(e) => {
                log::error!("Failed to write {}: {e}", path.display());
                std::process::exit(1);
            }
        }
    }
}

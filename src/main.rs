//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use advisory_board::adapters::media::FsImageReader;
use advisory_board::adapters::seed::EmbeddedSeed;
use advisory_board::adapters::ui::tui::TuiInputPort;
use advisory_board::ports::{ImageReader, InputPort, SeedSource};
use advisory_board::shared::config::AppConfig;
use advisory_board::state::StateStore;
use advisory_board::usecases::{
    DataLoader, GoalService, MeetingService, MemberService, OutreachService,
};
use dotenv::dotenv;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    advisory_board::adapters::ui::init_ui();

    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config not loaded, using defaults");
            AppConfig::default()
        }
    };
    let year = cfg.default_tactic_year_or_default();
    info!(
        year,
        max_priority_tactics = cfg.max_priority_tactics_or_default(),
        max_board_members = cfg.max_board_members_or_default(),
        "dashboard limits"
    );

    // --- State + seed data ---
    let store = Rc::new(StateStore::new(year));
    let seed: Rc<dyn SeedSource> =
        Rc::new(EmbeddedSeed::new().map_err(|e| anyhow::anyhow!("{}", e))?);
    let catalog = Rc::new(seed.catalog().map_err(|e| anyhow::anyhow!("{}", e))?);
    info!(
        tactics = catalog.tactics.len(),
        departments = catalog.departments.len(),
        "catalog loaded"
    );

    // --- Services ---
    let images: Arc<dyn ImageReader> = Arc::new(FsImageReader::new());
    let loader = DataLoader::new(Rc::clone(&store), Rc::clone(&seed), Rc::clone(&catalog));
    let department = cfg.department_or_default();
    if let Err(e) = loader.load_department(&department) {
        warn!(department = %department, error = %e, "initial department not loaded");
    }
    let members = MemberService::new(Rc::clone(&store), images, &cfg);
    let goals = GoalService::new(Rc::clone(&store), Rc::clone(&catalog), &cfg);
    let meetings = MeetingService::new(Rc::clone(&store));
    let outreach = OutreachService::new(Rc::clone(&store), Rc::clone(&catalog), &cfg);

    let input_port = TuiInputPort::new(
        Rc::clone(&store),
        catalog,
        loader,
        members,
        goals,
        meetings,
        outreach,
        cfg.tactic_truncate_words_or_default(),
    );

    // --- Run (main menu until Quit / Esc / Ctrl-C) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    info!("goodbye");
    Ok(())
}

//! Manpower portal CLI entry point.
//!
//! Browses and updates the recruitment data the portal dashboards show.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::str::FromStr;

use manpower::application::candidates::{JobFilter, SortDirection, SortKey};
use manpower::application::display::Badged;
use manpower::application::interviews::{InterviewFilter, schedule};
use manpower::application::vacancies::VacancyQuery;
use manpower::domain::{
    Decision, HrAction, InterviewStatus, InterviewType, JobOfferStatus, Role, Stage, User,
};
use manpower::infra::app_config::{PortalConfig, config_path, load_config, save_config};
use manpower::infra::db::Database;
use manpower::store::{Action, CandidateAction, Portal, SessionAction, seed_database};

#[derive(Parser, Debug)]
#[command(name = "manpower")]
#[command(version)]
#[command(about = "Recruitment pipeline tools for the manpower portal", long_about = None)]
struct Args {
    /// Rows per page (overrides the config file)
    #[arg(long, global = true)]
    page_size: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Candidate list and status changes
    #[command(subcommand)]
    Candidates(CandidateCommand),

    /// Job offers with application counts
    Vacancies {
        /// Status filter (active, draft, closed, archived)
        #[arg(long)]
        status: Option<String>,
        /// Search in title, reference and department
        #[arg(long, default_value = "")]
        search: String,
    },

    /// Interview schedule
    Interviews {
        #[arg(long)]
        status: Option<String>,
        #[arg(long = "type")]
        kind: Option<String>,
    },

    /// HR dashboard KPI tiles
    Kpis,

    /// Signed-in user
    #[command(subcommand)]
    Session(SessionCommand),

    /// Reset the database to the demo dataset
    Seed,

    /// Show or change the saved settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    Show,
    Set {
        /// Rows per candidate page
        #[arg(long = "rows")]
        rows: Option<u32>,
        /// score, name or age
        #[arg(long)]
        sort: Option<String>,
        /// Directory holding portal.sqlite
        #[arg(long)]
        data_dir: Option<std::path::PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum CandidateCommand {
    /// Filtered, sorted, paginated candidate table
    List {
        #[arg(long, default_value = "")]
        search: String,
        /// Job reference or "all"
        #[arg(long, default_value = "all")]
        job: String,
        /// score, name or age
        #[arg(long)]
        sort: Option<String>,
        /// Sort ascending instead of the key's default direction
        #[arg(long)]
        asc: bool,
        /// Sort descending instead of the key's default direction
        #[arg(long, conflicts_with = "asc")]
        desc: bool,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Recruiter triage: shortlist, reject, under-review, not-reviewed
    SetAction { reference: String, action: String },
    /// Final outcome: hired, rejected, under_review
    SetDecision {
        reference: String,
        decision: String,
        #[arg(long)]
        reason: Option<String>,
    },
    /// Move to any pipeline stage
    SetStage { id: String, stage: String },
    /// Move to the next pipeline stage
    Advance { id: String },
    /// Candidates grouped by pipeline stage
    Pipeline,
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    Login {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// recruitment, committee or business_unit
        #[arg(long)]
        role: String,
    },
    Show,
    Logout,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut config = load_config();
    if let Commands::Config(command) = args.command {
        return run_config(config, command);
    }
    if let Some(page_size) = args.page_size {
        config.page_size = page_size;
    }

    if let Commands::Seed = args.command {
        let db = Database::open_at(config.database_path())?;
        seed_database(&db)?;
        println!("Loaded demo dataset into {}", config.database_path().display());
        return Ok(());
    }

    let mut portal = Portal::open(&config)
        .with_context(|| format!("opening {}", config.database_path().display()))?;

    match args.command {
        Commands::Candidates(command) => run_candidates(&mut portal, command)?,
        Commands::Vacancies { status, search } => {
            let status = status
                .map(|s| JobOfferStatus::from_str(&s).map_err(anyhow::Error::msg))
                .transpose()?;
            let query = VacancyQuery { search, status };
            for summary in portal.state.vacancy_summaries(&query) {
                let offer = &summary.offer;
                println!(
                    "{:<16} {:<30} {:<10} apps {:>3}  shortlisted {:>3}  hired {:>3}  rejected {:>3}",
                    offer.reference,
                    offer.title,
                    offer.status.badge().label,
                    summary.counts.applications,
                    summary.counts.shortlisted,
                    summary.counts.hired,
                    summary.counts.rejected,
                );
            }
        }
        Commands::Interviews { status, kind } => {
            let filter = InterviewFilter {
                status: status
                    .map(|s| InterviewStatus::from_str(&s).map_err(anyhow::Error::msg))
                    .transpose()?,
                kind: kind
                    .map(|s| InterviewType::from_str(&s).map_err(anyhow::Error::msg))
                    .transpose()?,
            };
            for interview in schedule(&portal.state.interviews, &filter) {
                println!(
                    "{}  {:<10} {:<10} {:<28} with {}",
                    interview.scheduled_at.format("%Y-%m-%d %H:%M"),
                    interview.status.badge().label,
                    interview.kind.badge().label,
                    interview.candidate_name,
                    interview.interviewer,
                );
            }
        }
        Commands::Kpis => {
            for card in portal.state.dashboard(chrono::Utc::now()) {
                println!("{} {:<22} {}", card.icon.glyph(), card.title, card.value);
            }
        }
        Commands::Session(command) => run_session(&mut portal, command)?,
        Commands::Seed | Commands::Config(_) => {
            unreachable!("handled before opening the portal")
        }
    }

    Ok(())
}

fn run_candidates(portal: &mut Portal, command: CandidateCommand) -> Result<()> {
    let action = match command {
        CandidateCommand::List {
            search,
            job,
            sort,
            asc,
            desc,
            page,
        } => {
            let query = &mut portal.state.query;
            query.search = search;
            query.job = JobFilter::from_str(&job).map_err(anyhow::Error::msg)?;
            if let Some(sort) = sort {
                let key = SortKey::from_str(&sort).map_err(anyhow::Error::msg)?;
                query.sort = key;
                query.direction = key.default_direction();
            }
            if asc {
                query.direction = SortDirection::Asc;
            } else if desc {
                query.direction = SortDirection::Desc;
            }
            portal.state.pager.reset();
            if page != 1 {
                portal.dispatch(Action::Candidates(CandidateAction::GoToPage(page)));
                fail_on_error(portal)?;
            }
            print_page(portal);
            return Ok(());
        }
        CandidateCommand::Pipeline => {
            for (stage, column) in
                manpower::application::candidates::group_by_stage(&portal.state.candidates)
            {
                println!("{} ({})", stage.badge().label, column.len());
                for candidate in column {
                    println!("    {:<8} {}", candidate.reference, candidate.name);
                }
            }
            return Ok(());
        }
        CandidateCommand::SetAction { reference, action } => CandidateAction::SetHrAction {
            reference,
            action: HrAction::from_str(&action).map_err(anyhow::Error::msg)?,
        },
        CandidateCommand::SetDecision {
            reference,
            decision,
            reason,
        } => CandidateAction::SetDecision {
            reference,
            decision: Decision::from_str(&decision).map_err(anyhow::Error::msg)?,
            reason,
        },
        CandidateCommand::SetStage { id, stage } => CandidateAction::SetStage {
            candidate_id: id,
            stage: Stage::from_str(&stage).map_err(anyhow::Error::msg)?,
        },
        CandidateCommand::Advance { id } => CandidateAction::AdvanceStage { candidate_id: id },
    };

    portal.dispatch(Action::Candidates(action));
    fail_on_error(portal)?;
    println!("Updated.");
    Ok(())
}

fn run_session(portal: &mut Portal, command: SessionCommand) -> Result<()> {
    match command {
        SessionCommand::Login { name, email, role } => {
            let role = Role::from_str(&role).map_err(anyhow::Error::msg)?;
            portal.dispatch(Action::Session(SessionAction::Login(User {
                name,
                email,
                role,
            })));
            fail_on_error(portal)?;
        }
        SessionCommand::Logout => {
            portal.dispatch(Action::Session(SessionAction::Logout));
            fail_on_error(portal)?;
        }
        SessionCommand::Show => {}
    }
    match portal.session.current() {
        Some(user) => println!("{} <{}> ({})", user.name, user.email, user.role),
        None => println!("Not signed in"),
    }
    Ok(())
}

fn run_config(mut config: PortalConfig, command: ConfigCommand) -> Result<()> {
    if let ConfigCommand::Set {
        rows,
        sort,
        data_dir,
    } = command
    {
        if let Some(rows) = rows {
            if rows == 0 {
                bail!("Page size must be at least 1");
            }
            config.page_size = rows;
        }
        if let Some(sort) = sort {
            config.default_sort = SortKey::from_str(&sort).map_err(anyhow::Error::msg)?;
        }
        if data_dir.is_some() {
            config.data_dir = data_dir;
        }
        save_config(&config).with_context(|| format!("writing {}", config_path().display()))?;
    }
    println!("config file: {}", config_path().display());
    println!("page size:   {}", config.page_size);
    println!("sort:        {}", config.default_sort);
    println!("database:    {}", config.database_path().display());
    Ok(())
}

fn fail_on_error(portal: &Portal) -> Result<()> {
    if let Some(err) = &portal.state.last_error {
        bail!("{err}");
    }
    Ok(())
}

fn print_page(portal: &Portal) {
    let page = portal.state.page();
    for candidate in &page.rows {
        println!(
            "{:<8} {:<26} {:<28} {:>3}%  age {:>2}  {:<13} {}",
            candidate.reference,
            candidate.name,
            candidate.position,
            candidate.matching_score,
            candidate.age,
            candidate.hr_action.badge().label,
            candidate.stage.badge().label,
        );
    }
    match page.showing() {
        Some((first, last)) => println!(
            "Showing {first}-{last} of {} (page {}/{})",
            page.total_count, page.page, page.total_pages
        ),
        None => println!("No candidates match."),
    }
}

//! Tennis Precision CLI
//!
//! Reports, challenges, rankings and CSV exports over session documents.
//! Sessions are plain JSON files (one `TestSession` each); the `history`
//! and `rank` commands read a store file instead.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use tp_core::challenge::{self, TeamPair};
use tp_core::stats::{percent_to_stars, render_stars, star_label};
use tp_core::{
    compute_session_results, history_csv, session_csv, validate_complete_session, Category,
    SessionResults, SessionStore, Settings, TestSession,
};

#[derive(Parser)]
#[command(name = "tp")]
#[command(about = "Tennis precision test reports and exports", long_about = None)]
struct Cli {
    /// Use population standard deviation (default: sample)
    #[arg(long, global = true)]
    population: bool,

    /// Precision-time strategy: A or B
    #[arg(long, global = true, default_value = "A")]
    strategy: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a full report for one session file
    Report {
        /// Session JSON file
        session: PathBuf,

        /// Require a complete, protocol-conform session
        #[arg(long, default_value = "false")]
        strict: bool,
    },

    /// Export one session as CSV
    Csv {
        /// Session JSON file
        session: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Export all stored sessions as a history CSV
    History {
        /// Store JSON file
        store: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Compare sessions: 1v1 (2 files), 2v2 (4 files) or round-robin (2+)
    Challenge {
        /// 1v1, 2v2 or ffa
        #[arg(long, default_value = "1v1")]
        mode: String,

        /// Session JSON files
        sessions: Vec<PathBuf>,
    },

    /// Print leaderboards from a store file
    Rank {
        /// Store JSON file
        store: PathBuf,

        /// Restrict to one category (u10_u12, terza, seconda, prima)
        #[arg(long)]
        category: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let settings = settings_from(&cli)?;

    match cli.command {
        Commands::Report { session, strict } => {
            let session = load_session(&session)?;
            if strict {
                validate_complete_session(&session)?;
            }
            print_report(&compute(&session, settings));
        }

        Commands::Csv { session, out } => {
            let session = load_session(&session)?;
            let csv = session_csv(&compute(&session, settings))?;
            write_output(csv, out.as_deref())?;
        }

        Commands::History { store, out } => {
            let store = SessionStore::open(store)?;
            let csv = history_csv(store.sessions(), &settings)?;
            write_output(csv, out.as_deref())?;
        }

        Commands::Challenge { mode, sessions } => {
            let sessions: Vec<TestSession> =
                sessions.iter().map(|p| load_session(p)).collect::<Result<_>>()?;
            let results: Vec<SessionResults> =
                sessions.iter().map(|s| compute(s, settings)).collect();
            run_challenge(&mode, &results)?;
        }

        Commands::Rank { store, category } => {
            let store = SessionStore::open(store)?;
            let results: Vec<SessionResults> =
                store.sessions().iter().map(|s| compute(s, settings)).collect();
            print_rankings(&results, category.as_deref())?;
        }
    }

    Ok(())
}

fn settings_from(cli: &Cli) -> Result<Settings> {
    let std_dev_mode = if cli.population {
        tp_core::StdDevMode::Population
    } else {
        tp_core::StdDevMode::Sample
    };
    let precision_time_strategy = match cli.strategy.as_str() {
        "A" | "a" => tp_core::PrecisionTimeStrategy::A,
        "B" | "b" => tp_core::PrecisionTimeStrategy::B,
        other => bail!("unknown precision-time strategy '{other}' (expected A or B)"),
    };
    Ok(Settings { std_dev_mode, precision_time_strategy })
}

fn compute(session: &TestSession, settings: Settings) -> SessionResults {
    compute_session_results(session, settings.std_dev_mode, settings.precision_time_strategy)
}

fn load_session(path: &Path) -> Result<TestSession> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("cannot read session file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a valid session document", path.display()))
}

fn write_output(content: String, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("cannot write {}", path.display()))?;
            println!("💾 Saved {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn print_report(results: &SessionResults) {
    let session = &results.session;
    println!("🎾 {} — {} ({})", session.player_name, session.date, session.category);
    println!("   Coach: {}", session.coach);
    println!();
    println!("   {:<10} {:>6} {:>6}  serie", "colpo", "media", "dev");
    for s in &results.stats {
        println!("   {:<10} {:>6.2} {:>6.2}  {}", s.label, s.ave, s.dev, s.scores.len());
    }
    println!();
    let stars = percent_to_stars(results.percent_of_ideal);
    println!("   Area radar: {:.1}", results.radar_area);
    println!(
        "   % ideale:   {:.1}%  {} ({})",
        results.percent_of_ideal,
        render_stars(stars),
        star_label(stars)
    );
    if !results.precision_time.is_empty() {
        let means: Vec<String> =
            results.precision_time.iter().map(|p| format!("{:.1}", p.mean)).collect();
        println!("   Precision/time: {}", means.join(" "));
    }
}

fn print_outcome(outcome: &challenge::ChallengeOutcome) {
    println!("🏆 {} vs {}", outcome.name_a, outcome.name_b);
    for row in &outcome.rows {
        let marker = match row.winner {
            challenge::Winner::SideA => "◀",
            challenge::Winner::SideB => "▶",
            challenge::Winner::Draw => " ",
        };
        println!("   {:<10} {:>5.2} {} {:>5.2}", row.label, row.side_a, marker, row.side_b);
    }
    println!("   Colpi vinti: {}–{}", outcome.strokes_a, outcome.strokes_b);
    println!("   % ideale:    {:.1}% / {:.1}%", outcome.percent_a, outcome.percent_b);
    match outcome.winner {
        challenge::Winner::SideA => println!("   VINCE {}", outcome.name_a.to_uppercase()),
        challenge::Winner::SideB => println!("   VINCE {}", outcome.name_b.to_uppercase()),
        challenge::Winner::Draw => println!("   PAREGGIO"),
    }
}

fn run_challenge(mode: &str, results: &[SessionResults]) -> Result<()> {
    match mode {
        "1v1" => match results {
            [a, b] => print_outcome(&challenge::head_to_head(a, b)),
            _ => bail!("1v1 needs exactly 2 session files, got {}", results.len()),
        },
        "2v2" => match results {
            [a1, a2, b1, b2] => print_outcome(&challenge::team_head_to_head(
                &TeamPair::new(a1, a2),
                &TeamPair::new(b1, b2),
            )),
            _ => bail!("2v2 needs exactly 4 session files, got {}", results.len()),
        },
        "ffa" => {
            let outcome = challenge::round_robin(results)?;
            println!("🔄 Tutti contro tutti — {} sfide", outcome.matchups.len());
            for m in &outcome.matchups {
                println!(
                    "   {} {}–{} {}",
                    outcome.standings.iter().find(|s| s.entry == m.a).map(|s| s.player_name.as_str()).unwrap_or("?"),
                    m.strokes_a,
                    m.strokes_b,
                    outcome.standings.iter().find(|s| s.entry == m.b).map(|s| s.player_name.as_str()).unwrap_or("?"),
                );
            }
            println!();
            for (i, s) in outcome.standings.iter().enumerate() {
                let place = s.medal.map(|m| m.symbol().to_string()).unwrap_or(format!("#{}", i + 1));
                println!(
                    "   {place} {} — {} punti ({}/{}/{})  {:.1}%",
                    s.player_name, s.points, s.wins, s.draws, s.losses, s.percent_of_ideal
                );
            }
        }
        other => bail!("unknown challenge mode '{other}' (expected 1v1, 2v2 or ffa)"),
    }
    Ok(())
}

fn parse_category(raw: &str) -> Result<Category> {
    serde_json::from_value(serde_json::Value::String(raw.to_string()))
        .with_context(|| format!("unknown category '{raw}'"))
}

fn print_rankings(results: &[SessionResults], category: Option<&str>) -> Result<()> {
    if let Some(raw) = category {
        let category = parse_category(raw)?;
        let board = challenge::category_leaderboard(results, category);
        println!("🏅 Classifica {}", category);
        for (i, row) in board.iter().enumerate() {
            let place =
                row.medal.map(|m| m.symbol().to_string()).unwrap_or(format!("#{}", i + 1));
            println!("   {place} {} — {:.1}%", row.player_name, row.percent_of_ideal);
        }
    } else {
        let board = challenge::overall_leaderboard(results);
        println!("🏅 Classifica generale (miglior % per categoria)");
        for (i, row) in board.iter().enumerate() {
            let place =
                row.medal.map(|m| m.symbol().to_string()).unwrap_or(format!("#{}", i + 1));
            let per_cat: Vec<String> = Category::ALL
                .iter()
                .filter_map(|cat| {
                    row.best_by_category
                        .get(cat)
                        .map(|pct| format!("{} {:.1}%", cat.short_label(), pct))
                })
                .collect();
            println!("   {place} {} — {}", row.player_name, per_cat.join(" · "));
        }
    }
    Ok(())
}

//! League console CLI
//!
//! Operator front end for the league backend: roster players, manage teams,
//! compose matches from plan files and update live scores.

mod plan;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use league_core::models::{LiveScore, NewPlayer, NewTeam, PlayerName, TeamRef};
use league_core::{
    HttpLeagueClient, LeagueConfig, MatchDraft, PlayerId, PoolId, RosterSource, TeamId,
};

use plan::MatchPlan;

#[derive(Parser)]
#[command(name = "league")]
#[command(about = "Manage players, teams, matches and live scores", long_about = None)]
struct Cli {
    /// Backend base URL (overrides LEAGUE_API_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Player records
    Players {
        #[command(subcommand)]
        action: PlayerAction,
    },

    /// Team records
    Teams {
        #[command(subcommand)]
        action: TeamAction,
    },

    /// Scheduled matches
    Matches {
        #[command(subcommand)]
        action: MatchAction,
    },

    /// Live scores
    Score {
        #[command(subcommand)]
        action: ScoreAction,
    },
}

#[derive(Subcommand)]
enum PlayerAction {
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
        /// Team the player joins
        #[arg(long)]
        team: Option<u64>,
    },
    Update {
        id: u64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
        #[arg(long)]
        team: Option<u64>,
    },
    Remove {
        id: u64,
    },
}

#[derive(Subcommand)]
enum TeamAction {
    List,
    /// Create a team with its first player
    Add {
        #[arg(long)]
        name: String,
        /// Name of the founding player
        #[arg(long)]
        player: String,
    },
    Rename {
        id: u64,
        name: String,
    },
    Remove {
        id: u64,
    },
}

#[derive(Subcommand)]
enum MatchAction {
    List,
    /// Compose a match from a plan file and submit it
    Create {
        /// Plan JSON: title, matchDate, venue, teamA, teamB, teamAPlayers, teamBPlayers
        #[arg(long)]
        plan: PathBuf,

        /// Print the request instead of sending it
        #[arg(long, default_value = "false")]
        dry_run: bool,
    },
}

#[derive(Subcommand)]
enum ScoreAction {
    Show {
        match_id: u64,
    },
    Set {
        match_id: u64,
        #[arg(long)]
        a: u32,
        #[arg(long)]
        b: u32,
        #[arg(long)]
        status: Option<String>,
    },
}

/// Load `.env` (the default lookup when `dotenv` is `None`) and return the
/// log filter directive. Must run before the subscriber is built so a
/// `RUST_LOG` from the file applies.
fn load_environment(dotenv: Option<&Path>) -> String {
    match dotenv {
        Some(path) => dotenvy::from_path(path).ok(),
        None => dotenvy::dotenv().ok().map(|_| ()),
    };
    std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
}

fn main() -> Result<()> {
    let directive = load_environment(None);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(directive))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = LeagueConfig::from_env()?;
    if let Some(url) = cli.base_url {
        config.base_url = url;
        config.validate()?;
    }
    let mut client = HttpLeagueClient::new(&config)?;
    info!("Using backend {}", client.base_url());

    match cli.command {
        Commands::Players { action } => run_players(&mut client, action),
        Commands::Teams { action } => run_teams(&mut client, action),
        Commands::Matches { action } => run_matches(&mut client, action),
        Commands::Score { action } => run_score(&client, action),
    }
}

fn team_ref(client: &mut HttpLeagueClient, id: Option<u64>) -> Result<Option<TeamRef>> {
    let Some(id) = id else {
        return Ok(None);
    };
    let teams = client.fetch_teams()?;
    let team = teams
        .iter()
        .find(|t| t.id == TeamId(id))
        .with_context(|| format!("No team with id {}", id))?;
    Ok(Some(team.to_ref()))
}

fn run_players(client: &mut HttpLeagueClient, action: PlayerAction) -> Result<()> {
    match action {
        PlayerAction::List => {
            for player in client.fetch_players()? {
                println!("{}", player);
            }
        }
        PlayerAction::Add { name, age, position, avatar, team } => {
            let team = team_ref(client, team)?;
            let created = client.create_player(&NewPlayer { name, age, position, avatar, team })?;
            println!("Player added: {}", created);
        }
        PlayerAction::Update { id, name, age, position, avatar, team } => {
            let team = team_ref(client, team)?;
            let updated =
                client.update_player(PlayerId(id), &NewPlayer { name, age, position, avatar, team })?;
            println!("Player updated: {}", updated);
        }
        PlayerAction::Remove { id } => {
            client.delete_player(PlayerId(id))?;
            println!("Player {} deleted", id);
        }
    }
    Ok(())
}

fn run_teams(client: &mut HttpLeagueClient, action: TeamAction) -> Result<()> {
    match action {
        TeamAction::List => {
            for team in client.fetch_teams()? {
                println!("#{} {} ({} players)", team.id, team.name, team.players.len());
            }
        }
        TeamAction::Add { name, player } => {
            if name.trim().is_empty() {
                bail!("Team name cannot be empty");
            }
            if player.trim().is_empty() {
                bail!("A founding player is required");
            }
            if let Some(current) = client.fetch_teams()?.iter().find(|t| t.has_player_named(&player)) {
                warn!("{} is already in team '{}', moving them to '{}'", player, current.name, name);
            }
            let created = client.create_team(&NewTeam { name, players: vec![PlayerName { name: player }] })?;
            println!("Team added: #{} {}", created.id, created.name);
        }
        TeamAction::Rename { id, name } => {
            let teams = client.fetch_teams()?;
            let team = teams
                .iter()
                .find(|t| t.id == TeamId(id))
                .with_context(|| format!("No team with id {}", id))?;
            let renamed = client.rename_team(team, &name)?;
            println!("Team renamed: #{} {}", renamed.id, renamed.name);
        }
        TeamAction::Remove { id } => {
            client.delete_team(TeamId(id))?;
            println!("Team {} deleted", id);
        }
    }
    Ok(())
}

fn run_matches(client: &mut HttpLeagueClient, action: MatchAction) -> Result<()> {
    match action {
        MatchAction::List => {
            for summary in client.fetch_matches()? {
                println!("#{} {}", summary.id, summary.label());
            }
        }
        MatchAction::Create { plan, dry_run } => {
            let plan = MatchPlan::load(&plan)?;
            let mut draft = MatchDraft::load(client)?;
            plan.apply(&mut draft)?;

            println!(
                "Team A: {} players, Team B: {} players, {} unassigned",
                draft.roster().len(PoolId::TeamA),
                draft.roster().len(PoolId::TeamB),
                draft.roster().len(PoolId::Unassigned)
            );

            if dry_run {
                let request = draft.begin_submission()?;
                draft.fail_submission();
                println!("{}", serde_json::to_string_pretty(&request)?);
                return Ok(());
            }

            draft.submit(client)?;
            println!("Match '{}' created", plan.title);
            for summary in client.fetch_matches()? {
                println!("#{} {}", summary.id, summary.label());
            }
        }
    }
    Ok(())
}

fn run_score(client: &HttpLeagueClient, action: ScoreAction) -> Result<()> {
    match action {
        ScoreAction::Show { match_id } => {
            let score = client.fetch_live_score(match_id)?;
            print_score(match_id, &score);
        }
        ScoreAction::Set { match_id, a, b, status } => {
            let current = client.fetch_live_score(match_id)?;
            let score = LiveScore {
                score_team_a: a,
                score_team_b: b,
                current_status: status.or(current.current_status),
            };
            let updated = client.update_live_score(match_id, &score)?;
            print_score(match_id, &updated);
        }
    }
    Ok(())
}

fn print_score(match_id: u64, score: &LiveScore) {
    println!(
        "Match #{}: {} - {} [{}]",
        match_id,
        score.score_team_a,
        score.score_team_b,
        score.current_status.as_deref().unwrap_or("unknown")
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_dotenv_log_level_applies() {
        // An explicit RUST_LOG wins over the file; nothing to check then.
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "RUST_LOG=league_core=debug").unwrap();

        assert_eq!(load_environment(Some(file.path())), "league_core=debug");
    }
}

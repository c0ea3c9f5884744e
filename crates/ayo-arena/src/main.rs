use anyhow::Context;
use ayo_arena::config::ArenaConfig;
use ayo_arena::game_runner::{run_match, MatchPlan};
use ayo_arena::{json_output, tutorial};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ayo-arena")]
#[command(about = "Ayo bot match runner")]
struct Cli {
    /// Configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a match between two bots
    Match {
        /// Side A player name (or difficulty)
        a: String,
        /// Side B player name (or difficulty)
        b: String,
        /// Number of games to play
        #[arg(short, long, default_value = "10")]
        games: u32,
        /// Preset configuration to use
        #[arg(short, long)]
        preset: Option<String>,
        /// Base seed for reproducible matches
        #[arg(long)]
        seed: Option<u64>,
        /// Print the JSON report to stdout
        #[arg(long)]
        json: bool,
        /// Write the JSON report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the rules of the game
    Rules,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rules => {
            print!("{}", tutorial::RULES);
        }
        Commands::Match {
            a,
            b,
            games,
            preset,
            seed,
            json,
            output,
        } => {
            let config = match &cli.config {
                Some(path) => ArenaConfig::load_from(path),
                None => ArenaConfig::load(),
            }
            .context("loading arena config")?;

            let (games, openings) = match &preset {
                Some(name) => {
                    let p = config.get_preset(name)?;
                    tracing::info!("Using preset: {}", name);
                    (p.games, p.opening_positions()?)
                }
                None => (games, Vec::new()),
            };

            let seed = seed.or(config.seed).unwrap_or_else(rand::random);
            let plan = MatchPlan {
                a: config.resolve_player(&a),
                a_name: a,
                b: config.resolve_player(&b),
                b_name: b,
                games,
                openings,
                max_plies: config.max_plies,
                seed,
            };

            tracing::info!(
                seed,
                "Running {} games: {} ({}) vs {} ({})",
                plan.games,
                plan.a_name,
                plan.a.difficulty,
                plan.b_name,
                plan.b.difficulty
            );

            let summary = run_match(&plan)?;

            if !json {
                for (i, game) in summary.games.iter().enumerate() {
                    println!(
                        "Game {}: {:?} {}-{} ({} moves)",
                        i + 1,
                        game.result,
                        game.scores.as_array()[0],
                        game.scores.as_array()[1],
                        game.moves.len()
                    );
                }
                let t = summary.tally;
                println!(
                    "\nSession Results: A:{} Tie:{} B:{} Unfinished:{}",
                    t.a_wins, t.ties, t.b_wins, t.unfinished
                );
            }

            if let Some(path) = &output {
                json_output::write_json_file(path, &summary)
                    .with_context(|| format!("writing report to {}", path.display()))?;
                tracing::info!("Report written to {}", path.display());
            }
            if json {
                json_output::write_json(std::io::stdout().lock(), &summary)?;
                println!();
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses_match_command_with_preset() {
        let cli = Cli::try_parse_from(["ayo-arena", "match", "hard", "easy", "-p", "quick"]);
        assert!(cli.is_ok());

        match cli.unwrap().command {
            Commands::Match {
                a,
                b,
                games,
                preset,
                seed,
                json,
                output,
            } => {
                assert_eq!(a, "hard");
                assert_eq!(b, "easy");
                assert_eq!(games, 10); // default value
                assert_eq!(preset, Some("quick".to_string()));
                assert_eq!(seed, None);
                assert!(!json);
                assert_eq!(output, None);
            }
            Commands::Rules => panic!("Expected match command"),
        }
    }

    #[test]
    fn test_cli_parses_seed_and_output() {
        let cli = Cli::try_parse_from([
            "ayo-arena",
            "--config",
            "custom.toml",
            "match",
            "a",
            "b",
            "-g",
            "3",
            "--seed",
            "42",
            "--json",
            "-o",
            "report.json",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        match cli.command {
            Commands::Match {
                games,
                seed,
                json,
                output,
                ..
            } => {
                assert_eq!(games, 3);
                assert_eq!(seed, Some(42));
                assert!(json);
                assert_eq!(output, Some(PathBuf::from("report.json")));
            }
            Commands::Rules => panic!("Expected match command"),
        }
    }

    #[test]
    fn test_cli_parses_rules_command() {
        let cli = Cli::try_parse_from(["ayo-arena", "rules"]).unwrap();
        assert!(matches!(cli.command, Commands::Rules));
    }

    #[test]
    fn test_cli_requires_both_players() {
        assert!(Cli::try_parse_from(["ayo-arena", "match", "hard"]).is_err());
    }

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }
}

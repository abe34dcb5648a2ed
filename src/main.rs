use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use lmscli::{
    cli, config, error,
    lms::LmsClient,
    player,
    types::{LoadAction, LoadKind, SearchKind},
    utils,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(flatten)]
    globals: GlobalOpts,

    #[clap(subcommand)]
    command: Option<Command>,
}

/// Options accepted by every subcommand, in any position relative to the
/// command-specific arguments.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Player name (case-insensitive, falls back to $LMSCLI_PLAYER)
    #[clap(long, global = true)]
    pub player: Option<String>,

    /// Player MAC address; skips name resolution entirely
    #[clap(long, global = true)]
    pub mac: Option<String>,

    /// LMS server host (default: $LMS_HOST or localhost)
    #[clap(long, global = true)]
    pub host: Option<String>,

    /// LMS server port (default: $LMS_PORT or 9000)
    #[clap(long, global = true)]
    pub port: Option<u16>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start playback
    Play,

    /// Stop playback
    Stop,

    /// Toggle pause
    Pause,

    /// Skip to next track
    Next,

    /// Go to previous track
    Prev,

    /// Set or show volume (0-100, or +N/-N for a relative change)
    Volume(VolumeOptions),

    /// Show current track info
    Info,

    /// Jump to playlist position (0-indexed)
    Jump(JumpOptions),

    /// Clear playlist
    Clear,

    /// Search the music library
    Search(SearchOptions),

    /// Load album/artist/track by ID
    Load(LoadOptions),

    /// List available players
    Players,

    /// Show the full player status as JSON
    Status,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct VolumeOptions {
    /// Absolute level (0-100) or relative change (+N/-N); omit to report
    /// the current volume
    #[clap(value_parser = utils::parse_volume_spec, allow_hyphen_values = true)]
    pub level: Option<utils::VolumeSpec>,
}

#[derive(Parser, Debug, Clone)]
pub struct JumpOptions {
    /// Playlist position to jump to (0-indexed)
    pub position: u64,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Library category to search
    #[clap(long, value_enum, default_value_t = SearchKind::Albums)]
    pub kind: SearchKind,

    /// Free-text query (words are joined with spaces)
    #[clap(required = true)]
    pub query: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct LoadOptions {
    /// Kind of library item to load
    #[clap(value_enum)]
    pub kind: LoadKind,

    /// Database id of the item
    pub id: u64,

    /// How to merge the item into the playlist
    #[clap(long, value_enum, default_value_t = LoadAction::Load)]
    pub action: LoadAction,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

/// All known verbs, sorted, for the unknown-subcommand error report.
fn known_verbs() -> Vec<String> {
    let mut verbs: Vec<String> = Cli::command()
        .get_subcommands()
        .map(|c| c.get_name().to_string())
        .collect();
    verbs.sort();
    verbs
}

#[tokio::main]
async fn main() {
    // Spec'd exit codes differ from clap's defaults: usage errors and
    // unknown verbs exit 1 (message on stderr), help/version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            if e.kind() == clap::error::ErrorKind::InvalidSubcommand {
                eprintln!("Available commands: {}", known_verbs().join(", "));
            }
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return;
    };

    if let Command::Completions(opt) = command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let server = config::ServerConfig::resolve(cli.globals.host, cli.globals.port);
    let client = LmsClient::new(&server);

    // `players` is the one verb that runs without a resolved player.
    if let Command::Players = command {
        cli::players(&client).await;
        return;
    }

    let mac = player::resolve(&client, cli.globals.mac, cli.globals.player).await;

    match command {
        Command::Play => cli::play(&client, &mac).await,
        Command::Stop => cli::stop(&client, &mac).await,
        Command::Pause => cli::pause(&client, &mac).await,
        Command::Next => cli::next(&client, &mac).await,
        Command::Prev => cli::prev(&client, &mac).await,
        Command::Volume(opt) => cli::volume(&client, &mac, opt.level).await,
        Command::Info => cli::info(&client, &mac).await,
        Command::Jump(opt) => cli::jump(&client, &mac, opt.position).await,
        Command::Clear => cli::clear(&client, &mac).await,
        Command::Search(opt) => cli::search(&client, &mac, opt.kind, opt.query).await,
        Command::Load(opt) => cli::load(&client, &mac, opt.kind, opt.id, opt.action).await,
        Command::Status => cli::status(&client, &mac).await,
        Command::Players | Command::Completions(_) => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;
    use lmscli::utils::VolumeSpec;

    #[test]
    fn test_cli_schema_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_volume_accepts_negative_delta() {
        // A leading '-' is a relative decrease, not an unknown flag
        let cli = Cli::try_parse_from(["lmscli", "volume", "-5"]).unwrap();
        let Some(Command::Volume(opt)) = cli.command else {
            panic!("expected volume command");
        };
        assert_eq!(opt.level, Some(VolumeSpec::Relative(-5)));

        let cli = Cli::try_parse_from(["lmscli", "volume", "+5"]).unwrap();
        let Some(Command::Volume(opt)) = cli.command else {
            panic!("expected volume command");
        };
        assert_eq!(opt.level, Some(VolumeSpec::Relative(5)));

        let cli = Cli::try_parse_from(["lmscli", "volume", "10"]).unwrap();
        let Some(Command::Volume(opt)) = cli.command else {
            panic!("expected volume command");
        };
        assert_eq!(opt.level, Some(VolumeSpec::Absolute(10)));
    }

    #[test]
    fn test_unknown_verb_is_detected() {
        let err = Cli::try_parse_from(["lmscli", "frobnicate"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        assert!(err.use_stderr());
    }

    #[test]
    fn test_known_verbs_sorted_and_complete() {
        let verbs = known_verbs();

        let mut sorted = verbs.clone();
        sorted.sort();
        assert_eq!(verbs, sorted);

        for verb in [
            "play", "stop", "pause", "next", "prev", "volume", "info", "jump", "clear", "search",
            "load", "players", "status",
        ] {
            assert!(verbs.iter().any(|v| v == verb), "missing verb {}", verb);
        }
    }

    #[test]
    fn test_global_options_interleave_with_command_args() {
        let cli =
            Cli::try_parse_from(["lmscli", "search", "--kind", "albums", "--player", "Office", "beatles"])
                .unwrap();
        assert_eq!(cli.globals.player.as_deref(), Some("Office"));
        let Some(Command::Search(opt)) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(opt.query, vec!["beatles".to_string()]);
    }

    #[test]
    fn test_load_requires_both_positionals() {
        let err = Cli::try_parse_from(["lmscli", "load", "album"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}

//! Terminal front end.

use crate::commands::{self, ErrorKind};
use crate::settings::SettingsStore;
use crate::state::AppState;
use clap::{Parser, Subcommand};
use flashcard_core::{intensity, Highlighter};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

const ABANDON_COMMAND: &str = ":q";

#[derive(Debug, Parser)]
#[command(name = "flashcard-notes", version, about = "Practice flashcards kept in Markdown notes")]
pub struct Cli {
    /// Settings file, defaults to the user config directory.
    #[arg(long)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Answer every card in the notes matching PATTERN, then save a report.
    Practice { pattern: String },
    /// List saved session reports.
    Sessions,
    /// Show how many sessions were saved per day.
    Activity {
        #[arg(long, default_value_t = 30)]
        days: usize,
    },
    /// List notes with their hierarchy.
    Notes,
    /// Select the notes directory.
    SetDir { path: PathBuf },
    /// Print the current settings.
    Settings,
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    crate::init_tracing();

    let cli = Cli::parse();
    let settings_path = cli.settings.unwrap_or_else(crate::settings_path);
    let state = AppState::new(SettingsStore::load(settings_path).await?);

    match cli.command {
        Command::Practice { pattern } => practice(pattern, &state).await?,
        Command::Sessions => {
            for filename in commands::list_sessions(&state).await? {
                println!("{}", filename);
            }
        }
        Command::Activity { days } => {
            for day in commands::get_activity(Some(days), &state).await? {
                let bar = "#".repeat(intensity(day.count) as usize);
                println!("{}  {:>3}  {}", day.date, day.count, bar);
            }
        }
        Command::Notes => {
            for note in commands::get_notes(&state).await? {
                println!("{}", note.path);
            }
        }
        Command::SetDir { path } => {
            let settings =
                commands::set_notes_directory(path.to_string_lossy().to_string(), &state).await?;
            if let Some(dir) = settings.notes_directory {
                println!("Notes directory set to {}", dir.display());
            }
        }
        Command::Settings => {
            let settings = commands::get_settings(&state).await;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}

async fn practice(pattern: String, state: &AppState) -> anyhow::Result<()> {
    let session = match commands::start_session(pattern, state).await {
        Ok(session) => session,
        Err(e) if e.kind == ErrorKind::NoFlashcardsFound => {
            println!("{}", e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!(
        "{} cards matching '{}'. End an answer with an empty line, or type {} to quit.",
        session.cards.len(),
        session.pattern,
        ABANDON_COMMAND
    );

    let highlighter = Highlighter::new("\x1b[1;33m", "\x1b[0m");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(card) = commands::get_current_card(state).await? {
        println!("\n[{}] {}", card.source, card.question);

        let Some(answer) = read_answer(&mut lines).await? else {
            commands::abandon_session(state).await;
            println!("Session abandoned, nothing saved.");
            return Ok(());
        };

        let response = commands::submit_answer(answer, &highlighter, state).await?;
        println!("\nYour answer:\n{}", response.highlighted.user_answer);
        println!("\nExpected:\n{}", response.highlighted.expected_answer);

        if let Some(filename) = response.report_filename {
            println!("\nSession complete. Results saved to {}", filename);
            break;
        }
        println!("\n{} left", response.remaining);
    }

    Ok(())
}

/// Read lines up to an empty one. `None` when the user quits or input ends.
async fn read_answer(lines: &mut Lines<BufReader<Stdin>>) -> anyhow::Result<Option<String>> {
    let mut answer = Vec::new();

    while let Some(line) = lines.next_line().await? {
        if line.trim() == ABANDON_COMMAND {
            return Ok(None);
        }
        if line.trim().is_empty() {
            return Ok(Some(answer.join("\n")));
        }
        answer.push(line);
    }

    Ok(None)
}

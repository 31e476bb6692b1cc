use clap::{Parser, Subcommand};

use crate::models::domain::Difficulty;

fn parse_difficulty(raw: &str) -> Result<Difficulty, String> {
    raw.parse()
}

#[derive(Parser, Debug)]
#[command(name = "fun-quiz")]
#[command(author, version, about = "Fun Quiz question generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate questions for a topic
    Generate {
        /// Topic slug
        #[arg(long)]
        topic: String,

        /// Number of questions
        #[arg(long, default_value_t = 10)]
        count: u32,

        #[arg(long, default_value = "medium", value_parser = parse_difficulty)]
        difficulty: Difficulty,

        #[arg(long, default_value_t = 8)]
        age_min: u8,

        #[arg(long, default_value_t = 16)]
        age_max: u8,

        /// Output the first question before saving
        #[arg(long)]
        stream_first: bool,
    },

    /// Get questions for a quiz session
    Quiz {
        /// Player's age
        #[arg(long)]
        age: u8,

        /// Number of questions
        #[arg(long, default_value_t = 10)]
        count: usize,

        /// Question ids to exclude
        #[arg(long, num_args = 0..)]
        exclude: Vec<String>,
    },

    /// List all available topics
    Topics,

    /// Show storage statistics
    Stats,

    /// Seed storage with questions for every topic and difficulty
    Seed {
        /// Questions per topic per difficulty
        #[arg(long, default_value_t = 10)]
        count: u32,
    },

    /// Serve the quiz API over HTTP
    Serve,
}

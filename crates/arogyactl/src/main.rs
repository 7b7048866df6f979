//! Arogya Control - CLI client for the Arogya health assistant core.
//!
//! Drives the dispatcher directly: each subcommand maps to one intent.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "arogyactl")]
#[command(about = "Arogya Assistant - Health information and triage", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a health question (knowledge base, live summaries)
    Ask {
        /// The question, e.g. "what is dengue"
        query: Vec<String>,
    },

    /// Describe symptoms and get possible conditions
    Symptoms {
        /// Free-text symptom description
        text: Vec<String>,
    },

    /// Calculate BMI with a health report
    Bmi {
        /// Weight in kg (units like "70kg" accepted)
        #[arg(long)]
        weight: String,

        /// Height in cm (a bare "1.7" is read as meters)
        #[arg(long)]
        height: String,

        /// Age in years
        #[arg(long)]
        age: String,

        /// Gender (male/female/other)
        #[arg(long)]
        gender: String,
    },

    /// Show a vaccination schedule (child, adult, or COVID)
    Vaccines {
        /// Audience, e.g. "child" or "adult"
        audience: Vec<String>,
    },

    /// Fetch live COVID-19 statistics
    Stats {
        /// Worldwide totals instead of the configured region
        #[arg(long)]
        global: bool,
    },

    /// Fetch vaccination coverage numbers
    Coverage,

    /// Run a quick health check-up
    Checkup {
        /// Body temperature in Fahrenheit, or "normal"
        #[arg(long)]
        temperature: String,

        /// Mood, e.g. "good", "anxious", "tired"
        #[arg(long)]
        mood: String,

        /// Pain score 0-10
        #[arg(long)]
        pain: String,

        /// Main symptom, or "none"
        #[arg(long)]
        symptom: String,
    },

    /// Targeted advice for a single symptom
    Advice {
        /// Symptom description, e.g. "knee pain"
        symptom: Vec<String>,
    },

    /// Home remedy for a symptom
    Remedy {
        /// Symptom name, e.g. "cough"
        symptom: Vec<String>,
    },

    /// Over-the-counter medication information
    Medication {
        /// Medication name, e.g. "paracetamol"
        name: Vec<String>,
    },

    /// Preventive healthcare advice
    Prevention {
        /// Focus, e.g. "diabetes" or "blood pressure"
        topic: Vec<String>,
    },

    /// Regional outbreak alerts
    Alerts {
        /// State or region name
        #[arg(long, default_value = "India")]
        location: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask { query } => commands::ask(&query.join(" ")),
        Commands::Symptoms { text } => commands::symptoms(&text.join(" ")),
        Commands::Bmi {
            weight,
            height,
            age,
            gender,
        } => commands::bmi(&weight, &height, &age, &gender),
        Commands::Vaccines { audience } => commands::vaccines(&audience.join(" ")),
        Commands::Stats { global } => commands::stats(global),
        Commands::Coverage => commands::coverage(),
        Commands::Checkup {
            temperature,
            mood,
            pain,
            symptom,
        } => commands::checkup(&temperature, &mood, &pain, &symptom),
        Commands::Advice { symptom } => commands::advice(&symptom.join(" ")),
        Commands::Remedy { symptom } => commands::remedy(&symptom.join(" ")),
        Commands::Medication { name } => commands::medication(&name.join(" ")),
        Commands::Prevention { topic } => commands::prevention(&topic.join(" ")),
        Commands::Alerts { location } => commands::alerts(&location),
    }
}

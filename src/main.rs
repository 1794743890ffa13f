use std::path::PathBuf;

use canvas_quiz::{DEFAULT_FRAME_RATE, DEFAULT_QUESTIONS_PATH, Quiz};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV file to load the questions from
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// Target frames per second
    #[arg(long, default_value_t = DEFAULT_FRAME_RATE)]
    fps: u32,

    /// Seed for the particle effects
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let quiz = Quiz::from_csv(&args.questions)
        .frame_rate(args.fps)
        .seed(args.seed);

    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use tutorchat::{
    tutor_system_directive, ChatProfile, Conversation, ExplanationLevel, GeminiClient,
    GenerationConfig, SendTurnUseCase, StyleHints, DEFAULT_MODEL,
};

#[derive(Parser)]
#[command(name = "tutorchat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long)]
    verbose: bool,

    /// Gemini model slug, e.g. gemini-2.5-flash or gemini-2.5-pro.
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Verbosity/audience preset controlling sampling and style.
    #[arg(short, long, value_enum, default_value_t = LevelArg::Standard)]
    level: LevelArg,

    /// Disable the management-theory tutor persona.
    #[arg(long)]
    no_tutor: bool,

    /// Override the sampling temperature (switches to the free-form
    /// configuration; unset values take its defaults).
    #[arg(short, long)]
    temperature: Option<f64>,

    /// Override the reply token budget (free-form configuration).
    #[arg(long)]
    max_tokens: Option<u32>,

    /// Override nucleus sampling (free-form configuration).
    #[arg(long)]
    top_p: Option<f64>,

    /// Ask for bullet-point structure in every reply.
    #[arg(long)]
    bullet_points: bool,

    /// Ask for at least one worked example per reply.
    #[arg(long)]
    worked_examples: bool,

    /// Ask for jargon-free wording.
    #[arg(long)]
    plain_language: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum LevelArg {
    Brief,
    Standard,
    Detailed,
}

impl From<LevelArg> for ExplanationLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Brief => ExplanationLevel::Brief,
            LevelArg::Standard => ExplanationLevel::Standard,
            LevelArg::Detailed => ExplanationLevel::Detailed,
        }
    }
}

impl Cli {
    /// Rebuild the request profile from the flags, the same way the page
    /// variants rebuild theirs from widget state.
    fn profile(&self) -> ChatProfile {
        let level = ExplanationLevel::from(self.level);

        let uses_sliders =
            self.temperature.is_some() || self.max_tokens.is_some() || self.top_p.is_some();
        let mut config = if uses_sliders {
            let mut config = GenerationConfig::custom(&self.model);
            if let Some(t) = self.temperature {
                config = config.with_temperature(t);
            }
            if let Some(n) = self.max_tokens {
                config = config.with_max_output_tokens(n);
            }
            if let Some(p) = self.top_p {
                config = config.with_top_p(p);
            }
            config
        } else {
            GenerationConfig::for_level(&self.model, level)
        };
        config = config.with_style_directive(level.style_directive());

        let mut profile = ChatProfile::new(config).with_style_hints(StyleHints {
            bullet_points: self.bullet_points,
            worked_examples: self.worked_examples,
            plain_language: self.plain_language,
        });
        if !self.no_tutor {
            profile = profile.with_system_directive(tutor_system_directive(level));
        }
        profile
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let client = Arc::new(GeminiClient::from_env().map_err(|e| {
        anyhow::anyhow!("{e}. Export GEMINI_API_KEY to start a chat session.")
    })?);
    let use_case = SendTurnUseCase::new(client);

    let mut conversation = Conversation::new();
    info!("session {} ready, model {}", conversation.id(), cli.model);
    println!("Type a question, /clear to reset the session, /quit to exit.");

    let stdin = io::stdin();
    loop {
        print!("you> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "" => continue,
            "/quit" | "/exit" => break,
            "/clear" => {
                conversation.clear();
                println!("Session cleared.");
                continue;
            }
            _ => {}
        }

        // One request in flight at a time: block until the turn resolves.
        println!("{} is generating a reply...", cli.model);
        let reply = use_case
            .execute(&mut conversation, input, &cli.profile())
            .await;
        println!("assistant> {reply}\n");
    }

    info!(
        "session {} finished after {} prompts",
        conversation.id(),
        conversation.user_turn_count()
    );
    Ok(())
}

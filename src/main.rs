use std::sync::Arc;

use talent_assist::config::{AssistantConfig, SourceConfig};
use talent_assist::questions::{KeywordBank, LlmConfig, QuestionSource, create_source};
use talent_assist::session::{Phase, Role, ScreeningController, SessionState};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AssistantConfig::from_env()?;

    let source: Arc<dyn QuestionSource> = match &config.source {
        SourceConfig::Bank => {
            tracing::info!("Using the built-in question banks");
            Arc::new(KeywordBank::new())
        }
        SourceConfig::Llm { backend, api_key } => create_source(&LlmConfig {
            backend: *backend,
            api_key: api_key.clone(),
            model: config.model.clone(),
        })?,
    };

    eprintln!("🤖 {} v{}", config.name, env!("CARGO_PKG_VERSION"));
    eprintln!("   Questions: {}", source.name());
    eprintln!("   Type your answers and press Enter. Type 'exit' to end.\n");

    let controller = ScreeningController::new(source);
    let mut session = SessionState::new();

    let stdin = tokio::io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();
    let mut rendered = 0;

    loop {
        while controller.next_prompt(&mut session).is_some() {}
        render_new(&session, &mut rendered);

        if matches!(session.phase(), Phase::Complete | Phase::Exited) {
            break;
        }

        eprint!("> ");
        match lines.next_line().await {
            Ok(Some(line)) => {
                controller.advance(&mut session, &line).await;
                render_new(&session, &mut rendered);
            }
            Ok(None) => break, // EOF
            Err(e) => {
                tracing::error!("Error reading stdin: {}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Print assistant messages appended since the last render. The candidate's
/// own lines are already on screen.
fn render_new(session: &SessionState, rendered: &mut usize) {
    for message in &session.messages[*rendered..] {
        if message.role == Role::Assistant {
            println!("\n{}\n", message.content);
        }
    }
    *rendered = session.messages.len();
}

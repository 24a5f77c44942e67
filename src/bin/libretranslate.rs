//! Command-line frontend for a LibreTranslate backend
//!
//! One-shot translation, language detection and language listing, plus an
//! interactive mode that mirrors the debounced text-box wiring of a web
//! frontend: stdin lines are pushed through the debouncer configured from the
//! backend's `frontendTimeout` setting.

use clap::{Arg, Command};
use libretranslate_client::{DEFAULT_BASE_URL, LibreClient, MockTransport, debounce};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncBufReadExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("warn".parse().expect("valid directive")),
        )
        .init();

    let matches = Command::new("libretranslate")
        .version("0.1.0")
        .about("Translate text through a LibreTranslate server")
        .arg(
            Arg::new("text")
                .help("Text to translate (or detect with --detect)")
                .index(1),
        )
        .arg(
            Arg::new("target")
                .help("Target language code (e.g. fr, es, de)")
                .index(2),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .short('s')
                .help("Source language code (default: auto-detect)")
                .default_value("auto"),
        )
        .arg(
            Arg::new("host")
                .long("host")
                .help("Base address of the LibreTranslate server")
                .default_value(DEFAULT_BASE_URL),
        )
        .arg(
            Arg::new("api-key")
                .long("api-key")
                .short('k')
                .help("API key forwarded with every call"),
        )
        .arg(
            Arg::new("languages")
                .long("languages")
                .short('l')
                .help("List supported languages and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("detect")
                .long("detect")
                .short('d')
                .help("Detect the language of the text instead of translating")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("interactive")
                .long("interactive")
                .short('i')
                .help("Read lines from stdin and translate them, debounced")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use canned responses instead of a real server")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show request details")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let host = matches.get_one::<String>("host").expect("has default");
    let api_key = matches.get_one::<String>("api-key").cloned();
    let source = matches.get_one::<String>("source").expect("has default");
    let verbose = matches.get_flag("verbose");

    let client = if matches.get_flag("mock") {
        Arc::new(LibreClient::with_transport(
            host,
            api_key,
            Arc::new(canned_transport()),
        )?)
    } else {
        Arc::new(LibreClient::new(host, api_key)?)
    };

    if verbose {
        println!("🌍 Server: {}", client.base_url());
    }

    if matches.get_flag("languages") {
        return list_languages(&client).await;
    }

    if matches.get_flag("interactive") {
        // `libretranslate -i fr` puts the target in the first positional slot
        let target = matches
            .get_one::<String>("target")
            .or(matches.get_one::<String>("text"));
        return interactive(client, source, target).await;
    }

    let text = matches
        .get_one::<String>("text")
        .ok_or("TEXT is required unless --languages or --interactive is given")?;

    if matches.get_flag("detect") {
        let guesses = client.detect(text).await?;
        for guess in guesses {
            println!("{}\t{:.0}%", guess.language, guess.confidence);
        }
        return Ok(());
    }

    let target = match matches.get_one::<String>("target") {
        Some(target) => target.clone(),
        // fall back to the backend's default pair, like a fresh frontend does
        None => client.settings().await?.default_language_pair.target.code,
    };

    if verbose {
        println!("📝 {} → {}: \"{}\"", source, target, text);
        warn_if_unsupported(&client, source, &target).await;
    }

    let translated = client.translate(text, source, &target).await?;
    println!("{}", translated);
    Ok(())
}

async fn list_languages(client: &LibreClient) -> Result<(), Box<dyn std::error::Error>> {
    let languages = client.languages().await?;
    for language in languages {
        println!(
            "{}\t{}\t→ {}",
            language.code,
            language.name,
            language.targets.join(", ")
        );
    }
    Ok(())
}

/// Point out source/target pairs the backend does not serve
///
/// The web frontend greys out unsupported targets in its dropdown; the CLI
/// can only warn after the fact.
async fn warn_if_unsupported(client: &LibreClient, source: &str, target: &str) {
    if source == "auto" {
        return;
    }
    if let Ok(languages) = client.languages().await {
        let supported = languages
            .iter()
            .find(|l| l.code == source)
            .map(|l| l.targets.iter().any(|t| t == target))
            .unwrap_or(false);
        if !supported {
            eprintln!("⚠️  {} → {} is not advertised by this server", source, target);
        }
    }
}

/// Debounced stdin loop: the terminal analog of the web frontend's editor
async fn interactive(
    client: Arc<LibreClient>,
    source: &str,
    target: Option<&String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = client.settings().await?;
    let target = target
        .cloned()
        .unwrap_or(settings.default_language_pair.target.code);
    let quiet_period = Duration::from_millis(settings.ui_debounce_timeout_ms);

    println!(
        "Translating {} → {} ({}ms debounce). Type text, Ctrl-D to quit.",
        source, target, settings.ui_debounce_timeout_ms
    );

    let worker = client.clone();
    let source = source.to_string();
    let on_input = debounce(
        move |line: String| {
            let client = worker.clone();
            let source = source.clone();
            let target = target.clone();
            async move {
                match client.translate(&line, &source, &target).await {
                    Ok(translated) => println!("→ {}", translated),
                    Err(e) => eprintln!("{}", e),
                }
            }
        },
        quiet_period,
    );

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        on_input.trigger(line);
    }

    // give the trailing invocation a chance to fire and print
    tokio::time::sleep(quiet_period + Duration::from_millis(500)).await;
    Ok(())
}

/// Offline transport with a small canned language set
fn canned_transport() -> MockTransport {
    MockTransport::new()
        .respond(
            "/languages",
            json!([
                { "code": "en", "name": "English", "targets": ["fr", "es"] },
                { "code": "fr", "name": "French", "targets": ["en", "es"] },
                { "code": "es", "name": "Spanish", "targets": ["en", "fr"] }
            ]),
        )
        .respond(
            "/frontend/settings",
            json!({
                "apiKeys": false,
                "charLimit": -1,
                "frontendTimeout": 300,
                "keyRequired": false,
                "language": {
                    "source": { "code": "en", "name": "English" },
                    "target": { "code": "fr", "name": "French" }
                },
                "suggestions": false,
                "supportedFilesFormat": []
            }),
        )
        .respond("/detect", json!([{ "confidence": 90.0, "language": "en" }]))
        .respond("/translate", json!({ "translatedText": "Bonjour" }))
}

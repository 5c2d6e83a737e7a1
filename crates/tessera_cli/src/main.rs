//! Tessera CLI - inspect the component kit from a terminal
//!
//! Resolves component configurations against the configured theme, lists
//! the palette, runs the badge formatter and the e-mail validator, and plays
//! a copy confirmation on a real clock.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tessera_core::TokioScheduler;
use tessera_kit::{
    email_field_state, format_count, resolve, BadgeConfig, BadgeVariant, ButtonConfig,
    ButtonVariant, CircleIconButtonConfig, CircleIconVariant, ComponentConfig, ComponentSize,
    CopyFeedback, InputFieldConfig, InputFieldVariant, InputState, MemoryClipboard,
    ResolvedStyle, RoundType, TimedFeedback,
};
use tessera_theme::{PaletteToken, ThemeState};
use tracing_subscriber::EnvFilter;

use crate::config::TesseraConfig;

/// Inspect Tessera component styles and state helpers
#[derive(Parser, Debug)]
#[command(name = "tessera")]
#[command(about = "Inspect Tessera component styles and state helpers")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./tessera.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a component configuration to its style
    Resolve {
        #[command(subcommand)]
        component: Component,
    },

    /// Format a badge count
    Badge {
        #[arg(allow_negative_numbers = true)]
        count: i64,
    },

    /// Validate an e-mail address
    Email { address: String },

    /// List palette colors as resolved by the theme
    Palette,

    /// Copy text to an in-memory clipboard and wait for the confirmation to hide
    Copy {
        text: String,

        /// Confirmation duration in milliseconds (overrides the config file)
        #[arg(long)]
        duration_ms: Option<u64>,
    },
}

#[derive(Subcommand, Debug)]
enum Component {
    /// Primary action button
    Button {
        #[arg(default_value = "Button")]
        title: String,
        #[arg(long, default_value = "primary")]
        variant: ButtonVariant,
        #[arg(long, default_value = "medium")]
        size: ComponentSize,
        #[arg(long, default_value = "rounded")]
        round: RoundType,
        #[arg(long)]
        disabled: bool,
        #[arg(long)]
        loading: bool,
    },

    /// Text input field
    Input {
        #[arg(long, default_value = "default")]
        variant: InputFieldVariant,
        #[arg(long, default_value = "default")]
        state: InputState,
        #[arg(long, default_value = "medium")]
        size: ComponentSize,
        /// Custom helper message
        #[arg(long)]
        message: Option<String>,
    },

    /// Count or label badge
    Badge {
        #[arg(long, allow_negative_numbers = true, conflicts_with = "label")]
        count: Option<i64>,
        #[arg(long)]
        label: Option<String>,
        #[arg(long, default_value = "primary")]
        variant: BadgeVariant,
        #[arg(long, default_value = "medium")]
        size: ComponentSize,
    },

    /// Circular icon-only button
    IconButton {
        icon: String,
        #[arg(long, default_value = "primary")]
        variant: CircleIconVariant,
        #[arg(long, default_value = "medium")]
        size: ComponentSize,
        #[arg(long)]
        disabled: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => TesseraConfig::load(path)?,
        None => TesseraConfig::load_from_dir(&std::env::current_dir()?)?,
    };
    let theme = ThemeState::init(&config.theme).context("Invalid theme configuration")?;

    match cli.command {
        Commands::Resolve { component } => cmd_resolve(theme, component, cli.json),
        Commands::Badge { count } => cmd_badge(count, cli.json),
        Commands::Email { address } => cmd_email(&address, cli.json),
        Commands::Palette => cmd_palette(theme, cli.json),
        Commands::Copy { text, duration_ms } => {
            let duration = duration_ms
                .map(std::time::Duration::from_millis)
                .unwrap_or_else(|| config.feedback.duration());
            cmd_copy(&text, duration, cli.json)
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_resolve(theme: &ThemeState, component: Component, as_json: bool) -> Result<()> {
    let (config, message) = match component {
        Component::Button {
            title,
            variant,
            size,
            round,
            disabled,
            loading,
        } => {
            let config = ButtonConfig::new(title)
                .variant(variant)
                .size(size)
                .round_type(round)
                .enabled(!disabled)
                .loading(loading);
            let label = config.accessibility_label();
            (ComponentConfig::from(config), Some(label))
        }
        Component::Input {
            variant,
            state,
            size,
            message,
        } => {
            let mut config = InputFieldConfig::new()
                .variant(variant)
                .state(state)
                .size(size);
            if let Some(message) = message {
                config = config.message(message);
            }
            let text = config.message_text().map(str::to_string);
            (ComponentConfig::from(config), text)
        }
        Component::Badge {
            count,
            label,
            variant,
            size,
        } => {
            let config = match (count, label) {
                (Some(count), _) => BadgeConfig::count(count),
                (None, Some(label)) => BadgeConfig::label(label),
                (None, None) => BadgeConfig::new(),
            }
            .variant(variant)
            .size(size);
            let text = config.text();
            (ComponentConfig::from(config), text)
        }
        Component::IconButton {
            icon,
            variant,
            size,
            disabled,
        } => {
            let config = CircleIconButtonConfig::new(icon)
                .variant(variant)
                .size(size)
                .enabled(!disabled);
            (ComponentConfig::from(config), None)
        }
    };

    tracing::info!("Resolving {:?}", config.kind());
    let style = resolve(&config);
    print_style(theme, &style, message.as_deref(), as_json)
}

fn print_style(
    theme: &ThemeState,
    style: &ResolvedStyle,
    text: Option<&str>,
    as_json: bool,
) -> Result<()> {
    let colors = style.colors(theme);

    if as_json {
        let output = json!({
            "style": style,
            "colors": {
                "background": colors.background.to_hex_string(),
                "foreground": colors.foreground.to_hex_string(),
                "border": colors.border.to_hex_string(),
            },
            "text": text,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "background    {} ({})",
        colors.background, style.background.token
    );
    println!(
        "foreground    {} ({})",
        colors.foreground, style.foreground.token
    );
    println!(
        "border        {} ({}) width {}",
        colors.border, style.border_color.token, style.border_width
    );
    println!("corner radius {}", style.corner_radius);
    println!("min height    {}", style.min_height);
    println!(
        "font          {} / {}",
        style.font_size,
        style.font_weight.value()
    );
    println!(
        "padding       {} {} {} {}",
        style.padding.top, style.padding.leading, style.padding.bottom, style.padding.trailing
    );
    println!("opacity       {}", style.opacity);
    if let Some(text) = text {
        println!("text          {}", text);
    }
    Ok(())
}

fn cmd_badge(count: i64, as_json: bool) -> Result<()> {
    let text = format_count(count);
    if as_json {
        println!("{}", json!({ "count": count, "text": text }));
    } else {
        println!("{}", text);
    }
    Ok(())
}

fn cmd_email(address: &str, as_json: bool) -> Result<()> {
    let state = email_field_state(address);
    let field = InputFieldConfig::new().state(state);
    if as_json {
        println!(
            "{}",
            json!({
                "address": address,
                "state": state,
                "valid": state == InputState::Success,
                "message": field.message_text(),
            })
        );
    } else {
        match field.message_text() {
            Some(message) => println!("{}: {}", state, message),
            None => println!("{}", state),
        }
    }
    Ok(())
}

fn cmd_palette(theme: &ThemeState, as_json: bool) -> Result<()> {
    if as_json {
        let colors: serde_json::Map<String, serde_json::Value> = PaletteToken::ALL
            .iter()
            .map(|token| {
                (
                    token.name().to_string(),
                    theme.color(*token).to_hex_string().into(),
                )
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&colors)?);
    } else {
        for token in PaletteToken::ALL {
            println!("{:<9} {}", token.name(), theme.color(token));
        }
    }
    Ok(())
}

fn cmd_copy(text: &str, duration: std::time::Duration, as_json: bool) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start the timer runtime")?;

    runtime.block_on(async {
        let scheduler = TokioScheduler::current().context("No tokio runtime")?;
        let hidden = Arc::new(tokio::sync::Notify::new());

        let notify = hidden.clone();
        let feedback = TimedFeedback::new(scheduler)
            .with_duration(duration)
            .on_expire(move || notify.notify_one());

        let clipboard = MemoryClipboard::new();
        let mut copy = CopyFeedback::new(clipboard.clone(), feedback);
        copy.copy(text);

        let copied = clipboard.text().unwrap_or_default();
        if as_json {
            println!("{}", json!({ "event": "copied", "text": copied }));
        } else {
            println!("Copied! ({} bytes)", copied.len());
        }

        hidden.notified().await;

        if as_json {
            println!("{}", json!({ "event": "hidden", "after_ms": duration.as_millis() as u64 }));
        } else {
            println!("Confirmation hidden after {:?}", duration);
        }
        Ok::<(), anyhow::Error>(())
    })
}

//! selkit CLI
//!
//! Builds CSS selectors from parts on the command line.

use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use selkit_css::selector::{Category, Render, Selector, combine};
use selkit_objects::{Rectangle, to_json};

/// selkit — order-checked CSS selector builder
#[derive(Parser, Debug)]
#[command(name = "selkit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Compound selector, parts applied in the order given
    selkit build element=a 'attribute=href$=".png"' pseudo-class=focus

    # Same parts as JSON
    selkit build --json element=div id=main class=container

    # Join two selectors
    selkit combine 'div#main' + 'table#data'

    # Rectangle with its area
    selkit rect --width 10 --height 20
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build one selector from CATEGORY=TOKEN parts
    Build {
        /// Parts such as `element=div`, `class=main`, `pseudo-element=before`
        #[arg(value_name = "CATEGORY=TOKEN", required = true, value_parser = parse_part)]
        parts: Vec<(Category, String)>,

        /// Print the recorded parts as JSON instead of the selector text
        #[arg(long)]
        json: bool,
    },

    /// Join two selector strings with a combinator (` `, `+`, `~`, `>`)
    Combine {
        /// Left-hand selector
        left: String,
        /// Combinator token
        combinator: String,
        /// Right-hand selector
        right: String,
    },

    /// Print a rectangle and its area as JSON
    Rect {
        /// Width of the rectangle
        #[arg(long)]
        width: f64,
        /// Height of the rectangle
        #[arg(long)]
        height: f64,
    },
}

/// Parse `category=token`; only the first `=` separates the two.
fn parse_part(raw: &str) -> Result<(Category, String), String> {
    let (name, token) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=TOKEN, got `{raw}`"))?;
    let category = Category::from_str(name).map_err(|_| {
        let known: Vec<String> = Category::ALL.iter().map(ToString::to_string).collect();
        format!("unknown category `{name}` (expected one of: {})", known.join(", "))
    })?;
    Ok((category, token.to_string()))
}

fn build(parts: Vec<(Category, String)>, json: bool) -> Result<String> {
    let mut selector = Selector::new();
    for (category, token) in parts {
        let shown = token.clone();
        selector
            .push(category, token)
            .with_context(|| format!("cannot append {category} `{shown}`"))?;
    }
    if json {
        to_json(&selector.parts()).context("failed to encode selector parts")
    } else {
        Ok(selector.render())
    }
}

fn rect(width: f64, height: f64) -> Result<String> {
    let rectangle = Rectangle::new(width, height);
    let report = serde_json::json!({
        "width": rectangle.width,
        "height": rectangle.height,
        "area": rectangle.area(),
    });
    to_json(&report).context("failed to encode rectangle")
}

fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Command::Build { parts, json } => build(parts, json),
        Command::Combine {
            left,
            combinator,
            right,
        } => Ok(combine(left, combinator, right).render()),
        Command::Rect { width, height } => rect(width, height),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

mod script;

use anyhow::{Context, Result, bail};
use proseweave_config::Config;
use proseweave_engine::{
    editing::EditorOptions,
    parsing::snapshot,
    sync::{SyncOptions, SyncedEditor},
};
use script::Step;
use std::{
    env,
    fs::File,
    io::{self, Read},
    path::PathBuf,
    process,
};

const USAGE: &str = "Usage: proseweave-cli <file|-> [--tree] [--commands <script>]";

#[derive(Debug, PartialEq)]
struct Args {
    input: String,
    tree: bool,
    commands: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut input = None;
    let mut tree = false;
    let mut commands = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--tree" => tree = true,
            "--commands" => {
                let Some(path) = iter.next() else {
                    bail!("--commands needs a script path");
                };
                commands = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
            value => {
                if input.replace(value.to_string()).is_some() {
                    bail!("more than one input given");
                }
            }
        }
    }

    let Some(input) = input else {
        bail!("no input given");
    };
    Ok(Args {
        input,
        tree,
        commands,
    })
}

fn load_config() -> Config {
    match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Warning: {e}; using defaults");
            Config::default()
        }
    }
}

fn init_logging(config: &Config) -> Result<()> {
    let level = config
        .log_level
        .parse::<log::LevelFilter>()
        .unwrap_or(log::LevelFilter::Info);

    // RUST_LOG overrides the configured level
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();

    if let Some(path) = &config.log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed to read {input}"))
}

fn editor_options(config: &Config) -> (EditorOptions, SyncOptions) {
    (
        EditorOptions {
            history_limit: config.editor.history_limit,
        },
        SyncOptions {
            detect_markup: config.editor.detect_markup,
        },
    )
}

fn run(args: Args, config: &Config) -> Result<String> {
    let text = read_input(&args.input)?;
    let steps = match &args.commands {
        Some(path) => {
            let script = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {}", path.display()))?;
            script::parse_script(&script)?
        }
        None => vec![],
    };

    let (editor_opts, sync_opts) = editor_options(config);
    let mut editor = SyncedEditor::new(editor_opts, sync_opts);
    let outcome = editor.push_external(&text);
    log::info!(
        "Loaded {} ({} bytes): {outcome:?}",
        args.input,
        text.len()
    );

    for step in steps {
        match step {
            Step::Select(selection) => editor.set_selection(selection),
            Step::SelectAll => editor.set_selection(proseweave_engine::Selection::all(
                editor.state().document(),
            )),
            Step::Apply(cmd) => {
                let patch = editor.apply(cmd);
                if !patch.changed {
                    log::warn!("{cmd:?} had nothing to do");
                }
            }
        }
    }

    Ok(if args.tree {
        snapshot::outline(editor.state().document())
    } else {
        editor.markup()
    })
}

fn main() {
    let argv: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let config = load_config();
    if let Err(e) = init_logging(&config) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
    log::debug!("Config path: {}", Config::config_path().display());

    match run(args, &config) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

// Command-line interface for quill deltas
//
// This binary converts Quill delta documents (the JSON an editor stores) into the
// paragraph document model, and lets you inspect each processing stage.
//
// The core capabilities live in the quill-babel crate; this crate is the shell
// around it: argument parsing, file and stdin IO, configuration and logging.
//
// Usage:
//  quill <input> [--to <format>] [--output <file>]          - Convert (default)
//  quill convert <input> [--to <format>] [--output <file>]  - Same as above (explicit)
//  quill inspect <input> [<transform>]                      - Execute a transform (defaults to "paragraphs-treeviz")
//  quill --list-formats                                     - List formats and transforms
//
// An input of "-" reads the delta from stdin.
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format/transform.
// Example:
//  quill doc.json --to json --extra-pretty false

mod transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use quill_babel::format::parse_bool_option;
use quill_babel::{parse_quill_delta, FormatError, FormatRegistry};
use quill_config::{Loader, QuillConfig, PROJECT_CONFIG_FILE};
use std::collections::HashMap;
use std::fs;
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "inspect", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // The next arg is a value unless it is another flag
            let has_value = i + 1 < args.len() && !args[i + 1].starts_with('-');

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("quill")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting and inspecting Quill deltas")
        .long_about(
            "quill converts Quill delta documents into a paragraph/run document model.\n\n\
            Commands:\n  \
            - convert: Convert a delta to an output format (default command)\n  \
            - inspect: View the decoded operations or the converted paragraphs\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            quill doc.json                          # Paragraph document as JSON\n  \
            quill doc.json --to treeviz             # Tree view of the paragraphs\n  \
            quill doc.json -o out.json              # Write to a file\n  \
            cat doc.json | quill - --extra-pretty false\n  \
            quill inspect doc.json delta-simple     # One operation kind per line",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and inspect transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a quill.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect the processing stages of a delta")
                .long_about(
                    "View a delta at different processing stages.\n\n\
                    Transforms (stage-format):\n  \
                    - delta-json:         Decoded operations as JSON\n  \
                    - delta-simple:       One operation kind per line\n  \
                    - delta-pprint:       Operation kinds grouped by line\n  \
                    - paragraphs-json:    Converted document as JSON\n  \
                    - paragraphs-treeviz: Tree visualization (default)\n\n\
                    Extra Parameters:\n  \
                    --extra-attributes false   Hide attributes in the tree view",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the delta JSON file, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (stage-format). Defaults to 'paragraphs-treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a delta to an output format (default command)")
                .long_about(
                    "Convert a Quill delta into the paragraph document model.\n\n\
                    Supported formats:\n  \
                    - json:    The paragraph document (.json)\n  \
                    - treeviz: Tree visualization (.tree)\n\n\
                    The target format is taken from --to, then from the output file\n\
                    extension, then from the configured default.\n\
                    Output goes to stdout by default, or use -o to specify a file.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (defaults to the configured format)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A leading file argument means the user skipped the "convert" subcommand
            if cleaned_args.len() > 1
                && (!cleaned_args[1].starts_with('-') || cleaned_args[1] == "-")
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        &mut extra_params,
    );
    init_logging(&config);

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let Some(path) = sub_matches.get_one::<String>("path") else {
                fail("missing input path");
            };
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(path, transform, &extra_params, &config);
        }
        Some(("convert", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                fail("missing input path");
            };
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let to = resolve_target_format(
                sub_matches.get_one::<String>("to").map(|s| s.as_str()),
                output,
                &config,
            );
            handle_convert_command(input, &to, output, &extra_params, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

/// Install the stderr subscriber. `RUST_LOG` wins over the configured level.
fn init_logging(config: &QuillConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: &str) -> String {
    let result = if path == "-" {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(path)
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &QuillConfig,
) {
    let source = read_input(path);
    let params = build_inspect_params(config, extra_params);

    let output = transforms::execute_transform(&source, transform, &params).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

/// Pick the output format: explicit flag, then output extension, then config.
fn resolve_target_format(to: Option<&str>, output: Option<&str>, config: &QuillConfig) -> String {
    if let Some(to) = to {
        return to.to_string();
    }
    let registry = FormatRegistry::default();
    output
        .and_then(|path| registry.detect_format_from_filename(path))
        .unwrap_or_else(|| config.convert.format.clone())
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &QuillConfig,
) {
    let registry = FormatRegistry::default();

    if let Err(e) = registry.get(to) {
        fail(&e.to_string());
    }

    let source = read_input(input);
    let doc = parse_quill_delta(&source).unwrap_or_else(|e| fail(&e.to_string()));
    debug!(
        input,
        format = to,
        paragraphs = doc.paragraphs.len(),
        "converted delta"
    );

    let mut format_options = format_params_from_config(config, to);
    for (key, value) in extra_params {
        format_options.insert(key.clone(), value.clone());
    }

    let text = registry
        .serialize_with_options(&doc, to, &format_options)
        .unwrap_or_else(|e| fail(&e.to_string()));

    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None if text.ends_with('\n') => print!("{text}"),
        None => println!("{text}"),
    }
}

fn handle_list_formats_command() {
    println!("Conversion formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        let description = registry
            .get(&format_name)
            .map(|format| format.description().to_string())
            .unwrap_or_default();
        println!("  {format_name:<10} {description}");
    }

    println!("\nInspect transforms:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

/// Layer defaults, `quill.toml`, `--config` and the config-backed `--extra-*` flags.
fn load_cli_config(
    explicit_path: Option<&str>,
    extra_params: &mut HashMap<String, String>,
) -> QuillConfig {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);
    if let Some(path) = explicit_path {
        loader = loader.with_file(path);
    }

    let overrides =
        take_config_overrides(extra_params).unwrap_or_else(|err| fail(&err.to_string()));
    for (key, value) in overrides {
        loader = loader
            .set_override(key, value)
            .unwrap_or_else(|err| fail(&format!("Invalid override for '{key}': {err}")));
    }

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Remove config-backed `--extra-*` flags, keyed by the config path they override.
fn take_config_overrides(
    extra_params: &mut HashMap<String, String>,
) -> Result<Vec<(&'static str, bool)>, FormatError> {
    let mut overrides = Vec::new();
    if let Some(raw) = extra_params.remove("pretty") {
        overrides.push(("convert.json.pretty", parse_bool_option("pretty", &raw)?));
    }
    if let Some(raw) = take_override(extra_params, &["attributes", "show-attributes"]) {
        overrides.push((
            "inspect.show_attributes",
            parse_bool_option("attributes", &raw)?,
        ));
    }
    Ok(overrides)
}

fn build_inspect_params(
    config: &QuillConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();
    params.insert(
        "attributes".to_string(),
        config.inspect.show_attributes.to_string(),
    );
    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }
    params
}

/// Options the configuration supplies for a given output format.
fn format_params_from_config(config: &QuillConfig, format: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    match format {
        "json" => {
            params.insert("pretty".to_string(), config.convert.json.pretty.to_string());
        }
        "treeviz" => {
            params.insert(
                "attributes".to_string(),
                config.inspect.show_attributes.to_string(),
            );
        }
        _ => {}
    }
    params
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

// Command-line interface for mindmap
//
// This binary converts mind maps between the Freemind/Freeplane XML format
// (.mm) and the PlantUML mindmap text format (.puml).
//
// The conversion needs a from/to pair. The from format is auto-detected from
// the file extension and overridable with an explicit --from flag; --to
// defaults to the other format, since there are exactly two.
// Usage:
//  mindmap <input> [--from <format>] [--to <format>] [--output <file>]
//  mindmap convert <input> ...            - Same as above (explicit)
//  mindmap --list-formats                 - List available formats
//
// All the conversion work happens in the mindmap-babel crate; this binary
// only does argument handling, file I/O, and exit codes.

use clap::{Arg, ArgAction, Command, ValueHint};
use mindmap_babel::formats::{FreemindFormat, PlantumlFormat};
use mindmap_babel::{Format, FormatRegistry};
use mindmap_config::{Loader, MindmapConfig};
use std::fs;

fn build_cli() -> Command {
    Command::new("mindmap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting mind-map files")
        .long_about(
            "mindmap converts mind maps between the Freemind/Freeplane XML\n\
            format (.mm) and the PlantUML mindmap text format (.puml).\n\n\
            The source format is auto-detected from the file extension and the\n\
            target defaults to the other format, so the common case is just:\n\n  \
            mindmap notes.mm                      # Freemind to PlantUML (stdout)\n  \
            mindmap notes.puml -o notes.mm        # PlantUML to Freemind file",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mindmap.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between mind-map formats (default command)")
                .long_about(
                    "Convert mind maps between formats.\n\n\
                    Supported formats:\n  \
                    - freemind: Freemind/Freeplane XML (.mm)\n  \
                    - plantuml: PlantUML mindmap text (.puml, .plantuml)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    mindmap convert notes.mm                     # To PlantUML (stdout)\n  \
                    mindmap convert notes.puml -o notes.mm       # To Freemind file\n  \
                    mindmap notes.mm --to plantuml               # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (defaults to the other format)")
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
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the
            // first arg looks like a file
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "convert"
                && args[1] != "help"
            {
                // Inject "convert" as the subcommand
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);

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

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from = sub_matches.get_one::<String>("from").map(|s| s.as_str());
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, from, to, output, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from_arg: Option<&str>,
    to_arg: Option<&str>,
    output: Option<&str>,
    config: &MindmapConfig,
) {
    let registry = registry_from_config(config);

    // Auto-detect --from if not provided
    let from = match from_arg {
        Some(f) => f.to_string(),
        None => match registry.detect_format_from_filename(input) {
            Some(detected) => detected,
            None => {
                eprintln!("Error: Could not detect format from filename '{input}'");
                eprintln!("Please specify --from explicitly");
                std::process::exit(1);
            }
        },
    };

    // With exactly two formats, --to defaults to the other one
    let to = match to_arg {
        Some(t) => t.to_string(),
        None => match from.as_str() {
            "freemind" => "plantuml".to_string(),
            "plantuml" => "freemind".to_string(),
            other => {
                eprintln!("Error: Cannot infer target format from '{other}'");
                eprintln!("Please specify --to explicitly");
                std::process::exit(1);
            }
        },
    };

    // Validate formats exist
    if let Err(e) = registry.get(&from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(&to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    // Read input file
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    // Parse
    let map = registry.parse(&source, &from).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    // Serialize
    let result = registry.serialize(&map, &to).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    // Output
    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            println!("{result}");
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for format_name in registry.list_formats() {
        let format = match registry.get(&format_name) {
            Ok(f) => f,
            Err(_) => continue,
        };
        println!("  {:<10} {}", format.name(), format.description());
        println!("             extensions: {}", format.file_extensions().join(", "));
    }
}

/// Build a registry whose formats carry the configured knobs.
fn registry_from_config(config: &MindmapConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::new();
    registry.register(FreemindFormat::from(&config.convert.freemind));
    registry.register(PlantumlFormat::from(&config.convert.plantuml));
    registry
}

fn load_cli_config(explicit_path: Option<&str>) -> MindmapConfig {
    let loader = Loader::new().with_optional_file("mindmap.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn registry_from_config_carries_version() {
        let config = mindmap_config::load_defaults().expect("defaults");
        let registry = registry_from_config(&config);
        assert!(registry.has("freemind"));
        assert!(registry.has("plantuml"));
    }
}

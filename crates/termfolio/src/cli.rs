#![forbid(unsafe_code)]

//! Command-line argument parsing.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `TERMFOLIO_*` prefix.

use std::env;
use std::process;

use crate::sections::SectionId;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
termfolio — a terminal portfolio with a falling-glyph backdrop

USAGE:
    termfolio [OPTIONS]

OPTIONS:
    --section=NAME       Start at a section: home, about, experience,
                         skills, projects, or contact (default: home)
    --tick-ms=N          Animation tick interval in ms (default: 50)
    --seed=N             Backdrop RNG seed (default: from the clock)
    --no-mouse           Disable mouse capture (no pointer glow or
                         wheel scrolling)
    --help, -h           Show this help message
    --version, -V        Show version

KEYBINDINGS:
    Up/Down, PgUp/PgDn  Scroll
    Home / End          Jump to top / bottom
    1-6                 Jump to a section by number
    Tab / Shift-Tab     Cycle through sections
    q / Esc / Ctrl+C    Quit

ENVIRONMENT VARIABLES:
    TERMFOLIO_SECTION        Override --section
    TERMFOLIO_TICK_MS        Override --tick-ms
    TERMFOLIO_SEED           Override --seed
    TERMFOLIO_NO_MOUSE       Disable mouse capture when set to 1
    TERMFOLIO_EXIT_AFTER_MS  Auto-quit after N milliseconds (for testing)
    TERMFOLIO_LOG            Write a trace log to this file";

/// Parsed command-line options.
pub struct Opts {
    /// Section to show first.
    pub start_section: SectionId,
    /// Animation tick interval in milliseconds.
    pub tick_ms: u64,
    /// Backdrop RNG seed; `None` seeds from the clock.
    pub seed: Option<u32>,
    /// Whether mouse events are enabled.
    pub mouse: bool,
    /// Auto-exit after this many milliseconds (0 = disabled).
    pub exit_after_ms: u64,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            start_section: SectionId::Home,
            tick_ms: 50,
            seed: None,
            mouse: true,
            exit_after_ms: 0,
        }
    }
}

/// Parse a section name, case-insensitively.
fn parse_section(name: &str) -> Option<SectionId> {
    SectionId::ALL
        .into_iter()
        .find(|id| id.label().eq_ignore_ascii_case(name))
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Ok(val) = env::var("TERMFOLIO_SECTION")
            && let Some(id) = parse_section(&val)
        {
            opts.start_section = id;
        }
        if let Ok(val) = env::var("TERMFOLIO_TICK_MS")
            && let Ok(n) = val.parse()
        {
            opts.tick_ms = n;
        }
        if let Ok(val) = env::var("TERMFOLIO_SEED")
            && let Ok(n) = val.parse()
        {
            opts.seed = Some(n);
        }
        if let Ok(val) = env::var("TERMFOLIO_NO_MOUSE")
            && val == "1"
        {
            opts.mouse = false;
        }
        if let Ok(val) = env::var("TERMFOLIO_EXIT_AFTER_MS")
            && let Ok(n) = val.parse()
        {
            opts.exit_after_ms = n;
        }

        // Parse command-line args (override env vars)
        let args: Vec<String> = env::args().skip(1).collect();
        for arg in &args {
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("termfolio {VERSION}");
                    process::exit(0);
                }
                "--no-mouse" => {
                    opts.mouse = false;
                }
                other => {
                    if let Some(val) = other.strip_prefix("--section=") {
                        match parse_section(val) {
                            Some(id) => opts.start_section = id,
                            None => {
                                eprintln!("Invalid --section value: {val}");
                                process::exit(1);
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--tick-ms=") {
                        match val.parse() {
                            Ok(n) => opts.tick_ms = n,
                            Err(_) => {
                                eprintln!("Invalid --tick-ms value: {val}");
                                process::exit(1);
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--seed=") {
                        match val.parse() {
                            Ok(n) => opts.seed = Some(n),
                            Err(_) => {
                                eprintln!("Invalid --seed value: {val}");
                                process::exit(1);
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--exit-after-ms=") {
                        match val.parse() {
                            Ok(n) => opts.exit_after_ms = n,
                            Err(_) => {
                                eprintln!("Invalid --exit-after-ms value: {val}");
                                process::exit(1);
                            }
                        }
                    } else {
                        eprintln!("Unknown argument: {other}");
                        eprintln!("Run with --help for usage information.");
                        process::exit(1);
                    }
                }
            }
        }

        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_opts() {
        let opts = Opts::default();
        assert_eq!(opts.start_section, SectionId::Home);
        assert_eq!(opts.tick_ms, 50);
        assert_eq!(opts.seed, None);
        assert!(opts.mouse);
        assert_eq!(opts.exit_after_ms, 0);
    }

    #[test]
    fn version_string_nonempty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn section_names_parse_case_insensitively() {
        assert_eq!(parse_section("skills"), Some(SectionId::Skills));
        assert_eq!(parse_section("EXPERIENCE"), Some(SectionId::Experience));
        assert_eq!(parse_section("résumé"), None);
    }

    #[test]
    fn help_text_lists_every_section() {
        for id in SectionId::ALL {
            assert!(
                HELP_TEXT.to_ascii_lowercase().contains(&id.label().to_ascii_lowercase()),
                "missing section {} in help",
                id.label()
            );
        }
    }

    #[test]
    fn help_text_contains_env_vars() {
        assert!(HELP_TEXT.contains("TERMFOLIO_SECTION"));
        assert!(HELP_TEXT.contains("TERMFOLIO_EXIT_AFTER_MS"));
        assert!(HELP_TEXT.contains("TERMFOLIO_LOG"));
    }
}

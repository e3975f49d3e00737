//! Command-line contrast checker.
//!
//! The terminal front end of the analysis pipeline: parse two colors,
//! print the ratio, the WCAG verdict and up to three suggested fixes.
//!
//! ```text
//! contrast-pro '#FFFFFF' 'rgb(200, 200, 200)'
//! contrast-pro 'hsl(207, 44%, 49%)' '#6495ED' --size large --output hsl
//! ```

use std::io::Write;

use clap::Parser;
use contrast_pro::{
    ContrastReport, Format, Result, Rgb, SuggestionKind, TextSize, WcagLevel, log_init,
};

/// Check a background/text color pair against the WCAG 2.0 contrast
/// thresholds and suggest fixes when it falls short.
#[derive(Debug, Parser)]
#[command(name = "contrast-pro", version, about)]
struct Cli {
    /// Background color (hex, rgb or hsl; auto-detected unless
    /// --background-format is given).
    background: String,

    /// Text color (hex, rgb or hsl; auto-detected unless --text-format
    /// is given).
    text: String,

    /// Declared format of the background color.
    #[arg(long, value_name = "FORMAT")]
    background_format: Option<Format>,

    /// Declared format of the text color.
    #[arg(long, value_name = "FORMAT")]
    text_format: Option<Format>,

    /// Text size the pair will be used at.
    #[arg(long, default_value = "normal", value_name = "SIZE")]
    size: TextSize,

    /// Encoding used for colors in the output.
    #[arg(long, default_value = "hex", value_name = "FORMAT")]
    output: Format,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    log_init::init_logger(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let background = parse_input(&cli.background, cli.background_format)?;
    let text = parse_input(&cli.text, cli.text_format)?;

    let report = ContrastReport::analyze(background, text, cli.size);

    let mut out = std::io::stdout().lock();
    render(&mut out, &report, cli.size, cli.output)?;
    Ok(())
}

fn parse_input(input: &str, declared: Option<Format>) -> Result<Rgb> {
    let color = match declared {
        Some(format) => contrast_pro::parse(input, format)?,
        None => contrast_pro::parse_any(input)?,
    };
    Ok(color)
}

fn render(
    out: &mut impl Write,
    report: &ContrastReport,
    size: TextSize,
    output: Format,
) -> Result<()> {
    let compliance = &report.compliance;

    writeln!(out, "Background:  {}", report.background.format(output))?;
    writeln!(out, "Text:        {}", report.text.format(output))?;
    writeln!(out, "Contrast:    {:.2}:1", compliance.ratio)?;
    writeln!(out, "Level:       {}", compliance.level)?;
    writeln!(out)?;
    writeln!(out, "AA  normal text:  {}", verdict(compliance.passes_normal_text()))?;
    writeln!(out, "AA  large text:   {}", verdict(compliance.passes_large_text()))?;
    writeln!(out, "AAA normal text:  {}", verdict(compliance.passes_enhanced_normal_text()))?;
    writeln!(out, "AAA large text:   {}", verdict(compliance.passes_enhanced_large_text()))?;
    writeln!(out)?;

    match compliance.level {
        WcagLevel::Aaa => {
            writeln!(
                out,
                "This combination meets the enhanced (AAA) contrast requirement."
            )?;
        }
        level => {
            let target = match level {
                WcagLevel::Fail => size.aa_threshold(),
                _ => size.aaa_threshold(),
            };
            if report.suggestions.is_empty() {
                writeln!(
                    out,
                    "No lightness adjustment reaches {target}:1; try a different base color."
                )?;
            } else {
                writeln!(out, "Suggestions (target {target}:1):")?;
                for suggestion in report.suggestions.iter().take(3) {
                    let which = match suggestion.kind {
                        SuggestionKind::Text => "text",
                        SuggestionKind::Background => "background",
                    };
                    writeln!(
                        out,
                        "  change the {which} color to {} (contrast {:.2}:1)",
                        suggestion.color.format(output),
                        suggestion.ratio
                    )?;
                }
            }
        }
    }

    Ok(())
}

fn verdict(pass: bool) -> &'static str {
    if pass { "pass" } else { "fail" }
}

use clap::{Parser, ValueEnum};
use log::{error, info};
use std::path::PathBuf;
use wer_aligner::{
    breakdown, compare_three_way, compare_three_way_full, format_diff, format_score,
    wer_for_files, ConversionTable, EquivalenceGroups, EquivalenceResolver, Error, FileFormat,
    FileResult, WerConfig, DEFAULT_WER_CONFIG, REPORT_SECTION_SEPARATOR_WIDTH,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Output {
    /// Aggregate WER as a percentage.
    Score,
    /// Aligned diff of every utterance.
    Full,
    /// Aligned diff of utterances with errors only.
    Diff,
    /// Error counts by type and word.
    Breakdown,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Word error rate calculator between transcription files")]
struct Args {
    /// Reference transcriptions file.
    reference: PathBuf,

    /// Hypothesis transcriptions file.
    hypothesis: PathBuf,

    /// Reference file format (tsv, parentheses, space); guessed when omitted.
    #[arg(long)]
    ref_format: Option<FileFormat>,

    /// Hypothesis file format (tsv, parentheses, space); guessed when omitted.
    #[arg(long)]
    hyp_format: Option<FileFormat>,

    /// Equivalence groups to suppress as errors: none, spelling, numbers, misc, all.
    #[arg(short, long, default_values_t = vec!["all".to_string()])]
    suppress: Vec<String>,

    /// Outputs to print; several may be given.
    #[arg(short, long, value_enum, default_values_t = vec![Output::Score])]
    output: Vec<Output>,

    /// Use the best of several hypotheses per utterance.
    #[arg(long)]
    nbest: bool,

    /// Second hypothesis file for a three-way comparison.
    #[arg(long = "3way")]
    hypothesis2: Option<PathBuf>,

    /// Second hypothesis file format; guessed when omitted.
    #[arg(long = "3way-format")]
    hyp2_format: Option<FileFormat>,

    /// Custom conversion table (two columns: word, replacement phrase).
    #[arg(long)]
    conversions: Option<PathBuf>,
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    if args.hypothesis2.is_some() && args.output.contains(&Output::Breakdown) {
        return Err(Error::ConfigError(
            "breakdown comparison not supported".to_string(),
        ));
    }

    let config = WerConfig {
        equivalence_groups: EquivalenceGroups::from_names(&args.suppress)?,
        nbest: args.nbest,
        ..DEFAULT_WER_CONFIG
    };

    let resolver = match &args.conversions {
        Some(path) => {
            info!("Loading conversion table from {:?}...", path);
            EquivalenceResolver::new(ConversionTable::from_path(path)?).with_builtin_classes()
        }
        None => EquivalenceResolver::with_builtin_tables(),
    };

    let file_results = wer_for_files(
        &args.reference,
        args.ref_format,
        &args.hypothesis,
        args.hyp_format,
        &resolver,
        &config,
    )?;

    match &args.hypothesis2 {
        Some(hypothesis2) => {
            let file_results2 = wer_for_files(
                &args.reference,
                args.ref_format,
                hypothesis2,
                args.hyp2_format,
                &resolver,
                &config,
            )?;

            print_three_way_results(
                &args.hypothesis.display().to_string(),
                &file_results,
                &hypothesis2.display().to_string(),
                &file_results2,
                &args.output,
            );
        }
        None => print_results(&file_results, &args.output),
    }

    Ok(())
}

fn print_separator(output_idx: usize) {
    if output_idx > 0 {
        println!("\n{}\n", "=".repeat(REPORT_SECTION_SEPARATOR_WIDTH));
    }
}

fn print_results(file_results: &FileResult, outputs: &[Output]) {
    for (output_idx, output) in outputs.iter().enumerate() {
        print_separator(output_idx);

        match output {
            Output::Score => println!("{}", format_score(file_results.score())),
            Output::Diff | Output::Full => {
                let blocks: Vec<String> = format_diff(file_results, *output == Output::Full)
                    .iter()
                    .map(|block| block.to_string())
                    .collect();
                println!("{}", blocks.join("\n\n"));
            }
            Output::Breakdown => {
                for line in breakdown(file_results, true).to_lines() {
                    println!("{}", line);
                }
            }
        }
    }
}

fn print_three_way_results(
    label1: &str,
    file_results1: &FileResult,
    label2: &str,
    file_results2: &FileResult,
    outputs: &[Output],
) {
    let width = label1.chars().count().max(label2.chars().count());

    for (output_idx, output) in outputs.iter().enumerate() {
        print_separator(output_idx);

        match output {
            Output::Score => {
                for (label, file_results) in [(label1, file_results1), (label2, file_results2)] {
                    println!(
                        "{:<width$}:\t{}",
                        label,
                        format_score(file_results.score()),
                        width = width
                    );
                }
            }
            Output::Diff => {
                let comparison = compare_three_way(file_results1, file_results2);
                println!("{}", comparison.to_blocks(label1, label2).join("\n\n"));
            }
            Output::Full => {
                let comparison = compare_three_way_full(file_results1, file_results2);
                println!("{}", comparison.to_blocks(label1, label2).join("\n\n"));
            }
            // Rejected before any alignment runs
            Output::Breakdown => {}
        }
    }
}

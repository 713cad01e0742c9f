use wer_aligner::{
    format_score, wer_with_custom_config, EquivalenceGroups, EquivalenceResolver, WerConfig,
    DEFAULT_WER_CONFIG,
};

fn main() {
    env_logger::init();

    let reference = "the cat sat on the mat";
    let hypothesis = "a cat sit on mat";

    let resolver = EquivalenceResolver::default();
    let config = WerConfig {
        equivalence_groups: EquivalenceGroups::NONE,
        ..DEFAULT_WER_CONFIG
    };

    let result = wer_with_custom_config(reference, hypothesis, &resolver, &config);
    let (reference_line, hypothesis_line) = result.format();

    println!("WER for \"{}\" vs \"{}\": {}", reference, hypothesis, format_score(result.score()));
    println!("{}", reference_line);
    println!("{}", hypothesis_line);
    for error in result.errors() {
        println!("{}", error);
    }
}
